//! Categorical frequency analysis.
//!
//! Counts every distinct value of a column (any dtype), ordered by descending
//! count with ties kept in first-seen order. Nulls, and NaN in float columns,
//! are folded into a single [`NULL_LABEL`] bucket that takes part in the
//! ordering like any other value, so the percentages of a breakdown always
//! account for every row.

use crate::config::AnalysisConfig;
use crate::error::{Result, ResultExt};
use crate::loader::Table;
use crate::types::{ColumnContext, FrequencyEntry, FrequencyReport, NULL_LABEL, Variety};
use crate::utils::{dtype_name, is_float_dtype};
use crate::validation::validate_column;
use polars::prelude::*;
use std::collections::HashMap;
use tracing::debug;

/// Frequency breakdown with the default configuration.
pub fn unique_value_breakdown(table: &Table, column: &str) -> Result<FrequencyReport> {
    unique_value_breakdown_with_config(table, column, &AnalysisConfig::default())
}

/// Frequency breakdown of every distinct value in `column`.
///
/// # Errors
///
/// `ColumnNotFound` when the column is absent; a `Polars` error when values
/// cannot be rendered as text.
pub fn unique_value_breakdown_with_config(
    table: &Table,
    column: &str,
    config: &AnalysisConfig,
) -> Result<FrequencyReport> {
    validate_column(table, column)?;
    let series = table.series(column)?;
    let total_rows = table.height();

    let counts = count_values(series).context(format!("Counting values of '{}'", column))?;
    let missing_count = counts
        .iter()
        .find(|(label, _)| label.is_none())
        .map_or(0, |(_, count)| *count);

    let entries = build_entries(counts, total_rows);
    debug!(
        "Column '{}': {} distinct values, {} missing",
        column,
        entries.len(),
        missing_count
    );

    let top_entries = (entries.len() > config.condensed_table_threshold)
        .then(|| entries.iter().take(config.top_values).cloned().collect());

    Ok(FrequencyReport {
        context: ColumnContext {
            source_name: table.source_name().to_string(),
            column: column.to_string(),
            dtype: dtype_name(series.dtype()),
            total_rows,
            valid_rows: total_rows - missing_count,
            missing_count,
        },
        variety: Variety::from_distinct(entries.len()),
        entries,
        top_entries,
    })
}

/// Distinct values in first-seen order with their counts; `None` is the
/// missing bucket.
fn count_values(series: &Series) -> PolarsResult<Vec<(Option<String>, usize)>> {
    let labels = series.cast(&DataType::String)?;
    let labels = labels.str()?;

    let nan_mask: Option<Vec<bool>> = if is_float_dtype(series.dtype()) {
        let floats = series.cast(&DataType::Float64)?;
        Some(
            floats
                .f64()?
                .into_iter()
                .map(|v| v.is_some_and(f64::is_nan))
                .collect(),
        )
    } else {
        None
    };

    let mut counts: Vec<(Option<String>, usize)> = Vec::new();
    let mut index: HashMap<Option<String>, usize> = HashMap::new();

    for (row, label) in labels.into_iter().enumerate() {
        let is_nan = nan_mask.as_ref().is_some_and(|mask| mask[row]);
        let key = if is_nan { None } else { label.map(str::to_string) };

        match index.get(&key) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }

    // Stable: equal counts keep first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(counts)
}

fn build_entries(counts: Vec<(Option<String>, usize)>, total_rows: usize) -> Vec<FrequencyEntry> {
    let mut cumulative = 0.0;

    counts
        .into_iter()
        .map(|(label, count)| {
            let percentage = round2(count as f64 / total_rows as f64 * 100.0);
            cumulative = round2(cumulative + percentage);
            FrequencyEntry {
                is_null: label.is_none(),
                value: label.unwrap_or_else(|| NULL_LABEL.to_string()),
                count,
                percentage,
                cumulative_percentage: cumulative,
            }
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
