//! Report rendering.
//!
//! Turns computed reports into deterministic markdown text:
//!
//! - statistical values use 4 decimals
//! - percentages use 2 decimals
//! - row counts use thousands separators (`1,234`)
//!
//! Reports are also `Serialize`, so programmatic consumers can skip the text
//! form entirely:
//!
//! ```rust,ignore
//! use lex_analysis::{loader, reporting, statistics};
//!
//! let table = loader::load("data/sales.csv")?;
//! let report = statistics::column_mean(&table, "revenue")?;
//!
//! println!("{}", reporting::render_mean(&report));
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! ```

mod generator;
mod markdown;

pub use generator::{
    render, render_dataset_summary, render_error, render_frequency, render_mean, render_skewness,
    render_std,
};

/// Integer with comma thousands separators.
pub fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Statistical value with 4 decimals. Values rounding to zero never carry a sign.
pub fn format_stat(value: f64) -> String {
    let text = format!("{value:.4}");
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => text,
    }
}

/// Coefficient of variation in percent; an infinite CV means the mean was zero.
pub fn format_cv(cv: f64) -> String {
    if cv.is_infinite() {
        "∞ (mean is zero)".to_string()
    } else {
        format!("{cv:.2}%")
    }
}
