//! Statistics engine for single numeric columns.
//!
//! Three independent operations, each taking a [`Table`] and a column name:
//!
//! - [`column_mean`]: mean, median, range and quartiles with a mean/median shape check
//! - [`column_std`]: sample standard deviation, variance, coefficient of variation and IQR
//! - [`column_skewness`]: skewness, excess kurtosis, mode and percentile-based shape checks
//!
//! Every operation validates the column, works only on non-missing values and
//! reports excluded rows as an insight.

mod descriptive;

use crate::error::{AnalysisError, Result};
use crate::loader::Table;
use crate::types::{
    ColumnContext, ExclusionScope, Insight, KurtosisClass, MeanReport, Quartiles, SkewDirection, SkewnessReport,
    Spread, StdDevReport, Transformation, Variability,
};
use crate::utils::{NumericValues, dtype_name, numeric_values};
use crate::validation::{ensure_min_values, validate_numeric_column};
use tracing::debug;

pub(crate) use descriptive::{mean, quantile, sample_std};

/// Valid values required by [`column_mean`] and [`column_std`].
pub const MIN_VALUES_CENTRAL: usize = 1;

/// Valid values required by [`column_skewness`]; the bias-corrected kurtosis
/// estimator is undefined below four.
pub const MIN_VALUES_SHAPE: usize = 4;

/// Symmetric band for moment skewness.
const SKEW_BAND: f64 = 0.5;
/// Symmetric band for quartile skewness.
const QUARTILE_SKEW_BAND: f64 = 0.1;
/// Mean/median distance treated as "very close" in the shape report.
const CENTRAL_TENDENCY_TOLERANCE: f64 = 0.01;

/// Validated numeric column data shared by all three operations.
struct NumericColumn {
    context: ColumnContext,
    values: Vec<f64>,
    sorted: Vec<f64>,
}

impl NumericColumn {
    fn extract(table: &Table, column: &str, min_values: usize) -> Result<Self> {
        let series = validate_numeric_column(table, column)?;
        let NumericValues { values, missing } = numeric_values(series)?;
        ensure_min_values(column, values.len(), min_values)?;

        let context = ColumnContext {
            source_name: table.source_name().to_string(),
            column: column.to_string(),
            dtype: dtype_name(series.dtype()),
            total_rows: table.height(),
            valid_rows: values.len(),
            missing_count: missing,
        };
        debug!(
            "Column '{}': {} valid, {} missing",
            column, context.valid_rows, context.missing_count
        );

        let mut sorted = values.clone();
        sorted.sort_by(f64::total_cmp);

        Ok(Self {
            context,
            values,
            sorted,
        })
    }

    fn mean(&self) -> Result<f64> {
        mean(&self.values).ok_or_else(|| self.insufficient(MIN_VALUES_CENTRAL))
    }

    fn quantile(&self, q: f64) -> Result<f64> {
        quantile(&self.sorted, q).ok_or_else(|| self.insufficient(MIN_VALUES_CENTRAL))
    }

    fn quartiles(&self) -> Result<Quartiles> {
        Ok(Quartiles {
            p25: self.quantile(0.25)?,
            p50: self.quantile(0.5)?,
            p75: self.quantile(0.75)?,
        })
    }

    fn min(&self) -> Result<f64> {
        self.quantile(0.0)
    }

    fn max(&self) -> Result<f64> {
        self.quantile(1.0)
    }

    fn missing_insight(&self, scope: ExclusionScope) -> Option<Insight> {
        (self.context.missing_count > 0).then(|| Insight::MissingExcluded {
            count: self.context.missing_count,
            percentage: self.context.missing_percentage(),
            scope,
        })
    }

    fn insufficient(&self, required: usize) -> AnalysisError {
        AnalysisError::InsufficientData {
            column: self.context.column.clone(),
            required,
            actual: self.values.len(),
        }
    }
}

/// Mean of a numeric column with min, max, range, median and quartiles.
///
/// # Errors
///
/// `ColumnNotFound`, `NotNumeric`, or `InsufficientData` when the column has
/// no valid values.
pub fn column_mean(table: &Table, column: &str) -> Result<MeanReport> {
    let data = NumericColumn::extract(table, column, MIN_VALUES_CENTRAL)?;

    let mean = data.mean()?;
    let quartiles = data.quartiles()?;
    let median = quartiles.p50;
    let (min, max) = (data.min()?, data.max()?);
    let shape = SkewDirection::from_mean_median(mean, median, 0.0);

    let mut insights: Vec<Insight> = data
        .missing_insight(ExclusionScope::Calculation)
        .into_iter()
        .collect();
    insights.push(Insight::MeanMedian { direction: shape });

    Ok(MeanReport {
        context: data.context,
        mean,
        min,
        max,
        range: max - min,
        median,
        quartiles,
        shape,
        insights,
    })
}

/// Sample standard deviation of a numeric column with variance, CV and IQR.
///
/// A zero mean yields a coefficient of variation of `+∞`.
pub fn column_std(table: &Table, column: &str) -> Result<StdDevReport> {
    let data = NumericColumn::extract(table, column, MIN_VALUES_CENTRAL)?;

    let mean = data.mean()?;
    let variance = descriptive::sample_variance(&data.values)
        .ok_or_else(|| data.insufficient(MIN_VALUES_CENTRAL))?;
    let std = variance.sqrt();
    let cv = coefficient_of_variation(std, mean);
    let quartiles = data.quartiles()?;
    let iqr = quartiles.iqr();
    let (min, max) = (data.min()?, data.max()?);

    let variability = Variability::from_cv(cv);
    let spread = Spread::from_std_iqr(std, iqr);

    let mut insights: Vec<Insight> = data
        .missing_insight(ExclusionScope::Calculation)
        .into_iter()
        .collect();
    insights.push(Insight::Variability { level: variability });
    insights.push(Insight::Spread { spread });

    Ok(StdDevReport {
        context: data.context,
        std,
        variance,
        mean,
        cv,
        min,
        max,
        range: max - min,
        quartiles,
        iqr,
        variability,
        spread,
        insights,
    })
}

/// Distribution shape of a numeric column: skewness, kurtosis, mode and
/// percentile cross-checks.
///
/// # Errors
///
/// `InsufficientData` below [`MIN_VALUES_SHAPE`] valid values.
pub fn column_skewness(table: &Table, column: &str) -> Result<SkewnessReport> {
    let data = NumericColumn::extract(table, column, MIN_VALUES_SHAPE)?;

    let skewness = descriptive::skewness(&data.values)
        .ok_or_else(|| data.insufficient(MIN_VALUES_SHAPE))?;
    let kurtosis = descriptive::excess_kurtosis(&data.values)
        .ok_or_else(|| data.insufficient(MIN_VALUES_SHAPE))?;
    let mean = data.mean()?;
    let quartiles = data.quartiles()?;
    let median = quartiles.p50;
    let quartile_skewness = quartiles.quartile_skewness();

    let skew_class = SkewDirection::from_measure(skewness, SKEW_BAND);
    let kurtosis_class = KurtosisClass::from_excess(kurtosis);
    let transformation = Transformation::suggest(skewness);

    let mut insights: Vec<Insight> = data
        .missing_insight(ExclusionScope::Analysis)
        .into_iter()
        .collect();
    insights.push(Insight::Normality {
        approximately_normal: skew_class == SkewDirection::Symmetric
            && kurtosis_class == KurtosisClass::Mesokurtic,
    });
    if let Some(suggestion) = transformation {
        insights.push(Insight::Transformation { suggestion });
    }

    Ok(SkewnessReport {
        skewness,
        kurtosis,
        mean,
        median,
        mode: descriptive::mode(&data.sorted),
        p10: data.quantile(0.1)?,
        quartiles,
        p90: data.quantile(0.9)?,
        quartile_skewness,
        skew_class,
        kurtosis_class,
        quartile_class: SkewDirection::from_measure(quartile_skewness, QUARTILE_SKEW_BAND),
        central_tendency: SkewDirection::from_mean_median(
            mean,
            median,
            CENTRAL_TENDENCY_TOLERANCE,
        ),
        transformation,
        insights,
        context: data.context,
    })
}

/// `std / mean * 100`, `+∞` for a zero mean.
pub fn coefficient_of_variation(std: f64, mean: f64) -> f64 {
    if mean == 0.0 {
        f64::INFINITY
    } else {
        std / mean * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn table(df: DataFrame) -> Table {
        Table::from_dataframe(df, "test.csv")
    }

    fn numbers(values: &[Option<f64>]) -> Table {
        table(df!("x" => values, "label" => vec!["a"; values.len()]).unwrap())
    }

    // ==================== column_mean tests ====================

    #[test]
    fn test_mean_basic() {
        let t = table(df!("col1" => &[1i64, 3], "col2" => &[2i64, 4]).unwrap());
        let report = column_mean(&t, "col1").unwrap();

        assert_eq!(report.mean, 2.0);
        assert_eq!(report.context.valid_rows, 2);
        assert_eq!(report.context.missing_count, 0);
        assert_eq!(report.context.dtype, "i64");
        assert_eq!(report.shape, SkewDirection::Symmetric);
    }

    #[test]
    fn test_mean_excludes_missing() {
        let t = numbers(&[Some(1.0), None, Some(5.0), Some(f64::NAN), Some(6.0)]);
        let report = column_mean(&t, "x").unwrap();

        assert_eq!(report.mean, 4.0);
        assert_eq!(report.median, 5.0);
        assert_eq!(report.min, 1.0);
        assert_eq!(report.max, 6.0);
        assert_eq!(report.range, 5.0);
        assert_eq!(
            report.context.valid_rows + report.context.missing_count,
            report.context.total_rows
        );
        assert_eq!(report.shape, SkewDirection::LeftSkewed);
        assert!(matches!(
            report.insights[0],
            Insight::MissingExcluded {
                count: 2,
                scope: ExclusionScope::Calculation,
                ..
            }
        ));
    }

    #[test]
    fn test_mean_right_skewed() {
        let t = numbers(&[Some(1.0), Some(1.0), Some(1.0), Some(9.0)]);
        let report = column_mean(&t, "x").unwrap();
        assert_eq!(report.shape, SkewDirection::RightSkewed);
    }

    #[test]
    fn test_mean_rejects_text_column() {
        let t = numbers(&[Some(1.0)]);
        let err = column_mean(&t, "label").unwrap_err();
        assert!(matches!(err, AnalysisError::NotNumeric { ref dtype, .. } if dtype == "str"));
    }

    #[test]
    fn test_mean_unknown_column() {
        let t = numbers(&[Some(1.0)]);
        let err = column_mean(&t, "nope").unwrap_err();
        assert_eq!(err.error_code(), "COLUMN_NOT_FOUND");
    }

    #[test]
    fn test_mean_all_missing_is_insufficient() {
        let t = numbers(&[None, None]);
        let err = column_mean(&t, "x").unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InsufficientData {
                required: 1,
                actual: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_mean_is_idempotent() {
        let t = numbers(&[Some(0.1), Some(0.2), Some(0.7), None]);
        assert_eq!(column_mean(&t, "x").unwrap(), column_mean(&t, "x").unwrap());
    }

    // ==================== column_std tests ====================

    #[test]
    fn test_std_basic() {
        let t = numbers(&[
            Some(2.0),
            Some(4.0),
            Some(4.0),
            Some(4.0),
            Some(5.0),
            Some(5.0),
            Some(7.0),
            Some(9.0),
        ]);
        let report = column_std(&t, "x").unwrap();

        // Sum of squared deviations = 32, n - 1 = 7
        assert!((report.variance - 32.0 / 7.0).abs() < 1e-12);
        assert!((report.std - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
        assert_eq!(report.mean, 5.0);
        assert!((report.cv - report.std / 5.0 * 100.0).abs() < 1e-12);
        assert_eq!(report.variability, Variability::High);
    }

    #[test]
    fn test_std_constant_column() {
        let t = numbers(&[Some(3.3); 6]);
        let report = column_std(&t, "x").unwrap();

        assert_eq!(report.std, 0.0);
        assert_eq!(report.variance, 0.0);
        assert_eq!(report.iqr, 0.0);
        assert_eq!(report.spread, Spread::RelativelyNormal);
        assert_eq!(report.variability, Variability::Low);
    }

    #[test]
    fn test_std_zero_mean_gives_infinite_cv() {
        let t = numbers(&[Some(-1.0), Some(1.0), Some(-2.0), Some(2.0)]);
        let report = column_std(&t, "x").unwrap();

        assert!(report.cv.is_infinite() && report.cv > 0.0);
        assert_eq!(report.variability, Variability::High);
    }

    #[test]
    fn test_std_outlier_heuristic() {
        let t = numbers(&[Some(1.0), Some(2.0), Some(2.0), Some(3.0), Some(100.0)]);
        let report = column_std(&t, "x").unwrap();
        assert_eq!(report.spread, Spread::PotentialOutliers);
    }

    #[test]
    fn test_std_single_value() {
        let t = numbers(&[Some(5.0), None]);
        let report = column_std(&t, "x").unwrap();
        assert_eq!(report.std, 0.0);
        assert_eq!(report.context.valid_rows, 1);
    }

    // ==================== column_skewness tests ====================

    #[test]
    fn test_skewness_right_skewed_data() {
        let t = numbers(&[Some(1.0), Some(1.0), Some(1.0), Some(1.0), Some(10.0)]);
        let report = column_skewness(&t, "x").unwrap();

        assert!((report.skewness - 2.236068).abs() < 1e-5);
        assert!((report.kurtosis - 5.0).abs() < 1e-9);
        assert_eq!(report.skew_class, SkewDirection::RightSkewed);
        assert_eq!(report.kurtosis_class, KurtosisClass::Leptokurtic);
        assert_eq!(report.transformation, Some(Transformation::LogOrSqrt));
        assert_eq!(report.mode, Some(1.0));
        assert_eq!(report.central_tendency, SkewDirection::RightSkewed);
        assert!(report.insights.contains(&Insight::Normality {
            approximately_normal: false
        }));
    }

    #[test]
    fn test_skewness_symmetric_data() {
        let t = numbers(&[Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0)]);
        let report = column_skewness(&t, "x").unwrap();

        assert!(report.skewness.abs() < 1e-12);
        assert_eq!(report.skew_class, SkewDirection::Symmetric);
        assert_eq!(report.kurtosis_class, KurtosisClass::Mesokurtic);
        assert_eq!(report.quartile_class, SkewDirection::Symmetric);
        assert_eq!(report.transformation, None);
        assert!((report.p10 - 1.4).abs() < 1e-12);
        assert!((report.p90 - 4.6).abs() < 1e-12);
        assert!(report.insights.contains(&Insight::Normality {
            approximately_normal: true
        }));
    }

    #[test]
    fn test_skewness_constant_column_is_defined() {
        let t = numbers(&[Some(7.0); 5]);
        let report = column_skewness(&t, "x").unwrap();

        assert_eq!(report.skewness, 0.0);
        assert_eq!(report.kurtosis, 0.0);
        assert_eq!(report.quartile_skewness, 0.0);
    }

    #[test]
    fn test_skewness_requires_four_values() {
        let t = numbers(&[Some(1.0), Some(2.0), Some(3.0), None]);
        let err = column_skewness(&t, "x").unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InsufficientData {
                required: 4,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_skewness_left_skew_suggests_square() {
        let t = numbers(&[Some(-10.0), Some(1.0), Some(1.0), Some(1.0), Some(1.0)]);
        let report = column_skewness(&t, "x").unwrap();

        assert_eq!(report.skew_class, SkewDirection::LeftSkewed);
        assert_eq!(report.transformation, Some(Transformation::Square));
    }

    #[test]
    fn test_skewness_missing_values_excluded_from_analysis() {
        let t = numbers(&[Some(1.0), Some(2.0), None, Some(3.0), Some(4.0)]);
        let report = column_skewness(&t, "x").unwrap();

        assert_eq!(
            report.insights[0],
            Insight::MissingExcluded {
                count: 1,
                percentage: 20.0,
                scope: ExclusionScope::Analysis,
            }
        );
    }

    #[test]
    fn test_quartile_skewness_at_band_edge() {
        let t = numbers(&[Some(0.0), Some(0.0), Some(0.0), Some(0.1), Some(0.1)]);
        let report = column_skewness(&t, "x").unwrap();

        assert_eq!(report.quartile_skewness, 0.1);
        assert_eq!(report.quartile_class, SkewDirection::LeftSkewed);
    }

    #[test]
    fn test_coefficient_of_variation() {
        assert_eq!(coefficient_of_variation(2.0, 10.0), 20.0);
        assert_eq!(coefficient_of_variation(1.0, 0.0), f64::INFINITY);
    }
}
