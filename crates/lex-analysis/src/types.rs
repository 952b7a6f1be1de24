//! Report and metadata types produced by the analysis core.
//!
//! All types are plain data: they are computed once by the profiler,
//! statistics engine or frequency analyzer and rendered by
//! [`crate::reporting`] without further computation.

use crate::utils::DtypeCategory;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Dataset metadata
// ============================================================================

/// Metadata of a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    /// Engine dtype name, e.g. `i64`, `f64`, `str`.
    pub dtype: String,
    pub inferred_type: DtypeCategory,
    pub missing_count: usize,
}

/// Five-number style summary of one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub max: f64,
}

/// Read-only snapshot of a loaded dataset's shape and schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub source_name: String,
    pub total_rows: usize,
    pub total_columns: usize,
    /// Column metadata in table order.
    pub columns: Vec<ColumnDescriptor>,
    /// One entry per numeric column with at least one valid value.
    pub numeric_summary: Vec<NumericSummary>,
    /// Text rendering of the first `sample_rows` rows of the table.
    pub sample_preview: String,
    pub sample_rows: usize,
}

impl DatasetInfo {
    /// `(column, dtype)` pairs in table order.
    pub fn dtypes(&self) -> Vec<(&str, &str)> {
        self.columns
            .iter()
            .map(|c| (c.name.as_str(), c.dtype.as_str()))
            .collect()
    }

    /// `(column, missing_count)` pairs in table order.
    pub fn missing_counts(&self) -> Vec<(&str, usize)> {
        self.columns
            .iter()
            .map(|c| (c.name.as_str(), c.missing_count))
            .collect()
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Missing share of a column as a percentage of all rows.
    pub fn missing_percentage(&self, descriptor: &ColumnDescriptor) -> f64 {
        percentage(descriptor.missing_count, self.total_rows)
    }
}

/// Identity of the column a report was computed for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnContext {
    pub source_name: String,
    pub column: String,
    pub dtype: String,
    pub total_rows: usize,
    pub valid_rows: usize,
    pub missing_count: usize,
}

impl ColumnContext {
    pub fn missing_percentage(&self) -> f64 {
        percentage(self.missing_count, self.total_rows)
    }
}

/// `part / whole * 100`, or 0 for an empty whole.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

// ============================================================================
// Classifications
// ============================================================================

/// Direction of asymmetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkewDirection {
    Symmetric,
    RightSkewed,
    LeftSkewed,
}

impl SkewDirection {
    /// Classify a mean/median pair. Values closer than `tolerance` count as
    /// symmetric; a tolerance of 0 requires exact equality.
    pub fn from_mean_median(mean: f64, median: f64, tolerance: f64) -> Self {
        if mean == median || (mean - median).abs() < tolerance {
            SkewDirection::Symmetric
        } else if mean > median {
            SkewDirection::RightSkewed
        } else {
            SkewDirection::LeftSkewed
        }
    }

    /// Classify a skewness-like measure against a symmetric band `|value| < band`.
    /// A value of exactly `band` falls through to left-skewed.
    pub fn from_measure(value: f64, band: f64) -> Self {
        if value.abs() < band {
            SkewDirection::Symmetric
        } else if value > band {
            SkewDirection::RightSkewed
        } else {
            SkewDirection::LeftSkewed
        }
    }
}

/// Tail heaviness relative to a normal distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KurtosisClass {
    Mesokurtic,
    Leptokurtic,
    Platykurtic,
}

impl KurtosisClass {
    /// Exactly `2.0` falls through to platykurtic.
    pub fn from_excess(kurtosis: f64) -> Self {
        if kurtosis.abs() < 2.0 {
            KurtosisClass::Mesokurtic
        } else if kurtosis > 2.0 {
            KurtosisClass::Leptokurtic
        } else {
            KurtosisClass::Platykurtic
        }
    }
}

/// Relative dispersion bucket from the coefficient of variation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variability {
    Low,
    Moderate,
    High,
}

impl Variability {
    /// `cv` is a percentage; `+∞` (zero mean) is high variability.
    pub fn from_cv(cv: f64) -> Self {
        if cv < 15.0 {
            Variability::Low
        } else if cv < 35.0 {
            Variability::Moderate
        } else {
            Variability::High
        }
    }
}

/// Heuristic comparison of standard deviation against the IQR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spread {
    PotentialOutliers,
    RelativelyNormal,
}

impl Spread {
    pub fn from_std_iqr(std: f64, iqr: f64) -> Self {
        if std > iqr {
            Spread::PotentialOutliers
        } else {
            Spread::RelativelyNormal
        }
    }
}

/// Suggested transform to reduce strong skew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transformation {
    LogOrSqrt,
    Square,
}

impl Transformation {
    pub fn suggest(skewness: f64) -> Option<Self> {
        if skewness > 1.0 {
            Some(Transformation::LogOrSqrt)
        } else if skewness < -1.0 {
            Some(Transformation::Square)
        } else {
            None
        }
    }
}

/// Distinct-value count bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variety {
    Good,
    Moderate,
    High,
}

impl Variety {
    pub fn from_distinct(distinct: usize) -> Self {
        match distinct {
            0..=10 => Variety::Good,
            11..=50 => Variety::Moderate,
            _ => Variety::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variety::Good => "good variety",
            Variety::Moderate => "moderate variety",
            Variety::High => "high variety",
        }
    }
}

// ============================================================================
// Insights
// ============================================================================

/// What the excluded missing values were left out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionScope {
    /// A single statistic (mean, standard deviation).
    Calculation,
    /// A distribution analysis (skewness).
    Analysis,
}

impl ExclusionScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExclusionScope::Calculation => "calculation",
            ExclusionScope::Analysis => "analysis",
        }
    }
}

/// One narrative line of a report's Insights section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Insight {
    /// Rows excluded because the value was missing.
    MissingExcluded {
        count: usize,
        percentage: f64,
        scope: ExclusionScope,
    },
    /// Mean compared with median.
    MeanMedian { direction: SkewDirection },
    Variability { level: Variability },
    Spread { spread: Spread },
    /// Skewness and kurtosis both inside their normal-like bands.
    Normality { approximately_normal: bool },
    Transformation { suggestion: Transformation },
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Insight::MissingExcluded {
                count,
                percentage,
                scope,
            } => write!(
                f,
                "**Data Quality:** {} missing values ({:.2}%) were excluded from {}",
                crate::reporting::thousands(*count),
                percentage,
                scope.as_str()
            ),
            Insight::MeanMedian { direction } => match direction {
                SkewDirection::Symmetric => write!(
                    f,
                    "**Distribution:** Mean equals median, suggesting a symmetric distribution"
                ),
                SkewDirection::RightSkewed => write!(
                    f,
                    "**Distribution:** Mean is greater than median, suggesting right-skewed distribution"
                ),
                SkewDirection::LeftSkewed => write!(
                    f,
                    "**Distribution:** Mean is less than median, suggesting left-skewed distribution"
                ),
            },
            Insight::Variability { level } => match level {
                Variability::Low => write!(f, "**Variability:** Low variability (CV < 15%)"),
                Variability::Moderate => {
                    write!(f, "**Variability:** Moderate variability (CV 15-35%)")
                }
                Variability::High => write!(f, "**Variability:** High variability (CV > 35%)"),
            },
            Insight::Spread { spread } => match spread {
                Spread::PotentialOutliers => write!(
                    f,
                    "**Spread:** Standard deviation is greater than IQR, indicating potential outliers"
                ),
                Spread::RelativelyNormal => write!(
                    f,
                    "**Spread:** Standard deviation is less than IQR, indicating relatively normal distribution"
                ),
            },
            Insight::Normality {
                approximately_normal: true,
            } => write!(
                f,
                "**Statistical Tests:** Data appears approximately normal, parametric tests may be appropriate"
            ),
            Insight::Normality {
                approximately_normal: false,
            } => write!(
                f,
                "**Statistical Tests:** Data is non-normal, consider non-parametric tests or data transformation"
            ),
            Insight::Transformation { suggestion } => match suggestion {
                Transformation::LogOrSqrt => write!(
                    f,
                    "**Transformations:** Consider log transformation or square root transformation to reduce right skew"
                ),
                Transformation::Square => write!(
                    f,
                    "**Transformations:** Consider square transformation to reduce left skew"
                ),
            },
        }
    }
}

// ============================================================================
// Statistical reports
// ============================================================================

/// 25th, 50th and 75th percentiles (linear interpolation).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
}

impl Quartiles {
    /// Interquartile range, P75 − P25.
    pub fn iqr(&self) -> f64 {
        self.p75 - self.p25
    }

    /// Bowley-style numerator: (P75 − P50) − (P50 − P25).
    pub fn quartile_skewness(&self) -> f64 {
        (self.p75 - self.p50) - (self.p50 - self.p25)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeanReport {
    pub context: ColumnContext,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub median: f64,
    pub quartiles: Quartiles,
    pub shape: SkewDirection,
    pub insights: Vec<Insight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StdDevReport {
    pub context: ColumnContext,
    /// Sample standard deviation (n − 1 denominator).
    pub std: f64,
    pub variance: f64,
    pub mean: f64,
    /// Coefficient of variation in percent; `+∞` when the mean is zero.
    pub cv: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub quartiles: Quartiles,
    pub iqr: f64,
    pub variability: Variability,
    pub spread: Spread,
    pub insights: Vec<Insight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkewnessReport {
    pub context: ColumnContext,
    /// Adjusted Fisher–Pearson skewness (G1).
    pub skewness: f64,
    /// Bias-corrected excess kurtosis (G2).
    pub kurtosis: f64,
    pub mean: f64,
    pub median: f64,
    /// Smallest of the most frequent values.
    pub mode: Option<f64>,
    pub p10: f64,
    pub quartiles: Quartiles,
    pub p90: f64,
    pub quartile_skewness: f64,
    pub skew_class: SkewDirection,
    pub kurtosis_class: KurtosisClass,
    pub quartile_class: SkewDirection,
    /// Mean vs median with a 0.01 tolerance.
    pub central_tendency: SkewDirection,
    pub transformation: Option<Transformation>,
    pub insights: Vec<Insight>,
}

// ============================================================================
// Frequency report
// ============================================================================

/// Label used for the missing-value bucket of a frequency table.
pub const NULL_LABEL: &str = "NULL/NaN";

/// One row of a frequency table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    /// Display form of the value, or [`NULL_LABEL`].
    pub value: String,
    pub is_null: bool,
    pub count: usize,
    /// Share of all rows, rounded to 2 decimals.
    pub percentage: f64,
    /// Running sum of the rounded percentages.
    pub cumulative_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyReport {
    pub context: ColumnContext,
    /// Entries ordered by descending count, ties in first-seen order. The
    /// null bucket is included when the column has missing values.
    pub entries: Vec<FrequencyEntry>,
    /// Condensed head of `entries`, present for high-cardinality columns.
    pub top_entries: Option<Vec<FrequencyEntry>>,
    pub variety: Variety,
}

impl FrequencyReport {
    /// Number of distinct entries, the null bucket included.
    pub fn distinct_count(&self) -> usize {
        self.entries.len()
    }

    pub fn most_common(&self) -> Option<&FrequencyEntry> {
        self.entries.first()
    }

    pub fn least_common(&self) -> Option<&FrequencyEntry> {
        self.entries.last()
    }

    pub fn null_entry(&self) -> Option<&FrequencyEntry> {
        self.entries.iter().find(|e| e.is_null)
    }
}

// ============================================================================
// Tagged result
// ============================================================================

/// Any successful per-column analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "report", rename_all = "snake_case")]
pub enum StatReport {
    Mean(MeanReport),
    StdDev(StdDevReport),
    Skewness(SkewnessReport),
    Frequency(FrequencyReport),
}

impl StatReport {
    pub fn context(&self) -> &ColumnContext {
        match self {
            StatReport::Mean(r) => &r.context,
            StatReport::StdDev(r) => &r.context,
            StatReport::Skewness(r) => &r.context,
            StatReport::Frequency(r) => &r.context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_median_classification_is_exclusive() {
        assert_eq!(
            SkewDirection::from_mean_median(2.0, 2.0, 0.0),
            SkewDirection::Symmetric
        );
        assert_eq!(
            SkewDirection::from_mean_median(3.0, 2.0, 0.0),
            SkewDirection::RightSkewed
        );
        assert_eq!(
            SkewDirection::from_mean_median(1.0, 2.0, 0.0),
            SkewDirection::LeftSkewed
        );
        assert_eq!(
            SkewDirection::from_mean_median(2.005, 2.0, 0.01),
            SkewDirection::Symmetric
        );
    }

    #[test]
    fn test_skew_measure_bands() {
        assert_eq!(SkewDirection::from_measure(0.3, 0.5), SkewDirection::Symmetric);
        assert_eq!(SkewDirection::from_measure(0.8, 0.5), SkewDirection::RightSkewed);
        assert_eq!(SkewDirection::from_measure(-0.8, 0.5), SkewDirection::LeftSkewed);
        assert_eq!(SkewDirection::from_measure(0.05, 0.1), SkewDirection::Symmetric);
        assert_eq!(SkewDirection::from_measure(-0.2, 0.1), SkewDirection::LeftSkewed);
    }

    #[test]
    fn test_skew_measure_at_band_edge() {
        assert_eq!(SkewDirection::from_measure(0.5, 0.5), SkewDirection::LeftSkewed);
        assert_eq!(SkewDirection::from_measure(-0.5, 0.5), SkewDirection::LeftSkewed);
        assert_eq!(SkewDirection::from_measure(0.1, 0.1), SkewDirection::LeftSkewed);
        assert_eq!(SkewDirection::from_measure(0.51, 0.5), SkewDirection::RightSkewed);
    }

    #[test]
    fn test_kurtosis_class() {
        assert_eq!(KurtosisClass::from_excess(0.0), KurtosisClass::Mesokurtic);
        assert_eq!(KurtosisClass::from_excess(3.5), KurtosisClass::Leptokurtic);
        assert_eq!(KurtosisClass::from_excess(-2.5), KurtosisClass::Platykurtic);
    }

    #[test]
    fn test_kurtosis_class_at_threshold() {
        assert_eq!(KurtosisClass::from_excess(2.0), KurtosisClass::Platykurtic);
        assert_eq!(KurtosisClass::from_excess(-2.0), KurtosisClass::Platykurtic);
        assert_eq!(KurtosisClass::from_excess(2.5), KurtosisClass::Leptokurtic);
        assert_eq!(KurtosisClass::from_excess(1.99), KurtosisClass::Mesokurtic);
    }

    #[test]
    fn test_variability_from_cv() {
        assert_eq!(Variability::from_cv(10.0), Variability::Low);
        assert_eq!(Variability::from_cv(20.0), Variability::Moderate);
        assert_eq!(Variability::from_cv(50.0), Variability::High);
        assert_eq!(Variability::from_cv(f64::INFINITY), Variability::High);
    }

    #[test]
    fn test_transformation_suggestion() {
        assert_eq!(Transformation::suggest(1.5), Some(Transformation::LogOrSqrt));
        assert_eq!(Transformation::suggest(-1.5), Some(Transformation::Square));
        assert_eq!(Transformation::suggest(0.7), None);
    }

    #[test]
    fn test_variety_buckets() {
        assert_eq!(Variety::from_distinct(3), Variety::Good);
        assert_eq!(Variety::from_distinct(10), Variety::Good);
        assert_eq!(Variety::from_distinct(11), Variety::Moderate);
        assert_eq!(Variety::from_distinct(50), Variety::Moderate);
        assert_eq!(Variety::from_distinct(51), Variety::High);
    }

    #[test]
    fn test_quartile_helpers() {
        let q = Quartiles {
            p25: 1.0,
            p50: 2.0,
            p75: 4.0,
        };
        assert_eq!(q.iqr(), 3.0);
        assert_eq!(q.quartile_skewness(), 1.0);
    }

    #[test]
    fn test_missing_insight_text() {
        let insight = Insight::MissingExcluded {
            count: 1200,
            percentage: 12.5,
            scope: ExclusionScope::Calculation,
        };
        assert_eq!(
            insight.to_string(),
            "**Data Quality:** 1,200 missing values (12.50%) were excluded from calculation"
        );

        let insight = Insight::MissingExcluded {
            count: 3,
            percentage: 30.0,
            scope: ExclusionScope::Analysis,
        };
        assert_eq!(
            insight.to_string(),
            "**Data Quality:** 3 missing values (30.00%) were excluded from analysis"
        );
    }

    #[test]
    fn test_percentage_of_empty_whole() {
        assert_eq!(percentage(3, 0), 0.0);
        assert_eq!(percentage(1, 4), 25.0);
    }
}
