//! Descriptive statistics over plain `f64` slices.
//!
//! Callers pass only non-missing values. Functions taking `sorted` expect the
//! slice in ascending order.

/// Arithmetic mean. `None` for an empty slice.
pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Percentile with linear interpolation between closest ranks, `q` in `[0, 1]`.
pub(crate) fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;

    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

pub(crate) fn median(sorted: &[f64]) -> Option<f64> {
    quantile(sorted, 0.5)
}

/// Sum of squared deviations from `mean`, zeroed for constant data so that
/// floating point residue never turns into spurious dispersion.
fn sum_sq_dev(values: &[f64], mean: f64) -> f64 {
    if is_constant(values) {
        return 0.0;
    }
    values.iter().map(|v| (v - mean).powi(2)).sum()
}

fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

/// Sample variance (n − 1 denominator). A single value has variance 0.
pub(crate) fn sample_variance(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    let n = values.len() as f64;
    if n <= 1.0 {
        return Some(0.0);
    }
    Some(sum_sq_dev(values, mean) / (n - 1.0))
}

/// Sample standard deviation (n − 1 denominator).
pub(crate) fn sample_std(values: &[f64]) -> Option<f64> {
    sample_variance(values).map(f64::sqrt)
}

/// Adjusted Fisher–Pearson skewness G1 = n·√(n−1)/(n−2) · m3 / m2^1.5
/// where m2, m3 are sums of powered deviations.
///
/// Needs at least 3 values; zero variance yields 0.
pub(crate) fn skewness(values: &[f64]) -> Option<f64> {
    let n = values.len() as f64;
    if values.len() < 3 {
        return None;
    }
    let mean = mean(values)?;
    let m2 = sum_sq_dev(values, mean);
    if m2 == 0.0 {
        return Some(0.0);
    }
    let m3: f64 = values.iter().map(|v| (v - mean).powi(3)).sum();

    Some(n * (n - 1.0).sqrt() / (n - 2.0) * (m3 / m2.powf(1.5)))
}

/// Bias-corrected excess kurtosis G2.
///
/// Needs at least 4 values; zero variance yields 0.
pub(crate) fn excess_kurtosis(values: &[f64]) -> Option<f64> {
    let n = values.len() as f64;
    if values.len() < 4 {
        return None;
    }
    let mean = mean(values)?;
    let m2 = sum_sq_dev(values, mean);
    if m2 == 0.0 {
        return Some(0.0);
    }
    let m4: f64 = values.iter().map(|v| (v - mean).powi(4)).sum();

    let adjustment = 3.0 * (n - 1.0).powi(2) / ((n - 2.0) * (n - 3.0));
    let numerator = n * (n + 1.0) * (n - 1.0) * m4;
    let denominator = (n - 2.0) * (n - 3.0) * m2.powi(2);

    Some(numerator / denominator - adjustment)
}

/// Smallest of the most frequent values.
pub(crate) fn mode(sorted: &[f64]) -> Option<f64> {
    let mut best: Option<(f64, usize)> = None;
    let mut index = 0;

    while index < sorted.len() {
        let value = sorted[index];
        let run = sorted[index..].iter().take_while(|v| **v == value).count();
        if best.is_none_or(|(_, count)| run > count) {
            best = Some((value, run));
        }
        index += run;
    }

    best.map(|(value, _)| value)
}
