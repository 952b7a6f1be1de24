//! Shared utilities for the analysis core.
//!
//! This module contains dtype classification and value-extraction helpers
//! used by the profiler, the statistics engine and the frequency analyzer.

use polars::prelude::*;
use serde::{Deserialize, Serialize};

// =============================================================================
// Data Type Utilities
// =============================================================================

/// Semantic category of a column's data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DtypeCategory {
    /// Integer or floating point numbers
    Numeric,
    /// Free text or categorical labels
    Text,
    /// Boolean type
    Boolean,
    /// Date or datetime types
    Datetime,
    /// Other/unknown types (including all-null columns)
    Other,
}

impl DtypeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DtypeCategory::Numeric => "numeric",
            DtypeCategory::Text => "text",
            DtypeCategory::Boolean => "boolean",
            DtypeCategory::Datetime => "datetime",
            DtypeCategory::Other => "other",
        }
    }
}

impl std::fmt::Display for DtypeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Check if a DataType is a floating point type (the only ones that can hold NaN).
#[inline]
pub fn is_float_dtype(dtype: &DataType) -> bool {
    matches!(dtype, DataType::Float32 | DataType::Float64)
}

/// Check if a DataType is a datetime type.
#[inline]
pub fn is_datetime_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Datetime(_, _) | DataType::Date | DataType::Time | DataType::Duration(_)
    )
}

/// Get the category of a DataType.
pub fn get_dtype_category(dtype: &DataType) -> DtypeCategory {
    if is_numeric_dtype(dtype) {
        DtypeCategory::Numeric
    } else if is_datetime_dtype(dtype) {
        DtypeCategory::Datetime
    } else if matches!(dtype, DataType::Boolean) {
        DtypeCategory::Boolean
    } else if matches!(dtype, DataType::String | DataType::Categorical(_, _)) {
        DtypeCategory::Text
    } else {
        DtypeCategory::Other
    }
}

/// Engine-level name of a dtype as shown in reports (`i64`, `f64`, `str`, ...).
pub fn dtype_name(dtype: &DataType) -> String {
    dtype.to_string()
}

// =============================================================================
// Value Extraction Utilities
// =============================================================================

/// Non-missing numeric values of a column together with the missing count.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericValues {
    /// Values in table order, nulls and NaN removed.
    pub values: Vec<f64>,
    /// Number of nulls plus NaN entries.
    pub missing: usize,
}

impl NumericValues {
    pub fn valid(&self) -> usize {
        self.values.len()
    }

    /// Values sorted ascending. NaN never reaches here, so `total_cmp` is a plain order.
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }
}

/// Extract non-missing values of a numeric series as `f64`.
pub fn numeric_values(series: &Series) -> PolarsResult<NumericValues> {
    let float_series = series.cast(&DataType::Float64)?;
    let chunked = float_series.f64()?;

    let mut values = Vec::with_capacity(chunked.len());
    let mut missing = 0;
    for value in chunked.into_iter() {
        match value {
            Some(v) if !v.is_nan() => values.push(v),
            _ => missing += 1,
        }
    }

    Ok(NumericValues { values, missing })
}

/// Count missing entries: nulls, plus NaN for float columns.
pub fn missing_count(series: &Series) -> PolarsResult<usize> {
    if is_float_dtype(series.dtype()) {
        Ok(numeric_values(series)?.missing)
    } else {
        Ok(series.null_count())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric_dtype() {
        assert!(is_numeric_dtype(&DataType::Int64));
        assert!(is_numeric_dtype(&DataType::Float64));
        assert!(!is_numeric_dtype(&DataType::String));
        assert!(!is_numeric_dtype(&DataType::Boolean));
    }

    #[test]
    fn test_dtype_category() {
        assert_eq!(get_dtype_category(&DataType::Int64), DtypeCategory::Numeric);
        assert_eq!(
            get_dtype_category(&DataType::Float32),
            DtypeCategory::Numeric
        );
        assert_eq!(get_dtype_category(&DataType::Date), DtypeCategory::Datetime);
        assert_eq!(
            get_dtype_category(&DataType::Boolean),
            DtypeCategory::Boolean
        );
        assert_eq!(get_dtype_category(&DataType::String), DtypeCategory::Text);
        assert_eq!(get_dtype_category(&DataType::Null), DtypeCategory::Other);
    }

    #[test]
    fn test_dtype_name() {
        assert_eq!(dtype_name(&DataType::Int64), "i64");
        assert_eq!(dtype_name(&DataType::String), "str");
    }

    #[test]
    fn test_numeric_values_skips_nulls_and_nan() {
        let series = Series::new(
            "v".into(),
            &[Some(1.0f64), None, Some(f64::NAN), Some(4.0)],
        );
        let values = numeric_values(&series).unwrap();
        assert_eq!(values.values, vec![1.0, 4.0]);
        assert_eq!(values.missing, 2);
        assert_eq!(values.valid() + values.missing, series.len());
    }

    #[test]
    fn test_numeric_values_from_integers() {
        let series = Series::new("v".into(), &[Some(3i64), Some(1), None]);
        let values = numeric_values(&series).unwrap();
        assert_eq!(values.sorted(), vec![1.0, 3.0]);
        assert_eq!(values.missing, 1);
    }

    #[test]
    fn test_missing_count_text() {
        let series = Series::new("t".into(), &[Some("a"), None, Some("b")]);
        assert_eq!(missing_count(&series).unwrap(), 1);
    }

    #[test]
    fn test_missing_count_float_counts_nan() {
        let series = Series::new("f".into(), &[Some(f64::NAN), None, Some(2.0)]);
        assert_eq!(missing_count(&series).unwrap(), 2);
    }
}
