//! Column validation.
//!
//! Every analysis re-validates its inputs here rather than trusting the
//! caller: the column must exist, and numeric operations additionally need a
//! numeric column with enough valid values.

use crate::error::{AnalysisError, Result};
use crate::loader::Table;
use crate::utils::{dtype_name, is_numeric_dtype};
use polars::prelude::*;
use tracing::debug;

/// Confirm that `column` exists in `table`.
///
/// On failure the error carries every column name in declared order.
pub fn validate_column(table: &Table, column: &str) -> Result<()> {
    if table.has_column(column) {
        Ok(())
    } else {
        debug!(
            "Column '{}' not found in '{}'",
            column,
            table.source_name()
        );
        Err(AnalysisError::ColumnNotFound {
            column: column.to_string(),
            available: table.column_names(),
        })
    }
}

/// Confirm that `column` exists and holds numeric data, returning its series.
pub fn validate_numeric_column<'a>(table: &'a Table, column: &str) -> Result<&'a Series> {
    validate_column(table, column)?;
    let series = table.series(column)?;

    if !is_numeric_dtype(series.dtype()) {
        return Err(AnalysisError::NotNumeric {
            column: column.to_string(),
            dtype: dtype_name(series.dtype()),
        });
    }

    Ok(series)
}

/// Confirm that at least `required` valid values are available.
pub fn ensure_min_values(column: &str, actual: usize, required: usize) -> Result<()> {
    if actual < required {
        return Err(AnalysisError::InsufficientData {
            column: column.to_string(),
            required,
            actual,
        });
    }
    Ok(())
}
