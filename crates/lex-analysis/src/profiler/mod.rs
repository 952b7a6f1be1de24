//! Dataset profiling.
//!
//! Derives per-column metadata (dtype, inferred category, missing count), a
//! numeric summary for every numeric column and a short sample preview from a
//! loaded [`Table`].

use crate::config::AnalysisConfig;
use crate::error::{Result, ResultExt};
use crate::loader::Table;
use crate::statistics::{mean, quantile, sample_std};
use crate::types::{ColumnDescriptor, DatasetInfo, NumericSummary};
use crate::utils::{dtype_name, get_dtype_category, is_numeric_dtype, missing_count, numeric_values};
use polars::prelude::*;
use tracing::debug;

/// Describe a table with the default configuration.
pub fn describe(table: &Table) -> Result<DatasetInfo> {
    describe_with_config(table, &AnalysisConfig::default())
}

/// Describe a table's shape, schema and numeric columns.
///
/// Absence of numeric columns is not an error; the summary is simply empty.
pub fn describe_with_config(table: &Table, config: &AnalysisConfig) -> Result<DatasetInfo> {
    let df = table.dataframe();
    let mut columns = Vec::with_capacity(df.width());
    let mut numeric_summary = Vec::new();

    for column in df.get_columns() {
        let series = column.as_materialized_series();
        let descriptor = describe_column(series)?;

        if is_numeric_dtype(series.dtype()) {
            match summarize_numeric(series)? {
                Some(summary) => numeric_summary.push(summary),
                None => debug!("Column '{}' has no valid values to summarize", descriptor.name),
            }
        }

        columns.push(descriptor);
    }

    let preview = df.head(Some(config.sample_rows));

    Ok(DatasetInfo {
        source_name: table.source_name().to_string(),
        total_rows: df.height(),
        total_columns: df.width(),
        columns,
        numeric_summary,
        sample_preview: format!("{}", preview),
        sample_rows: preview.height(),
    })
}

fn describe_column(series: &Series) -> Result<ColumnDescriptor> {
    Ok(ColumnDescriptor {
        name: series.name().to_string(),
        dtype: dtype_name(series.dtype()),
        inferred_type: get_dtype_category(series.dtype()),
        missing_count: missing_count(series)
            .context(format!("Counting missing values in '{}'", series.name()))?,
    })
}

/// Count, mean, std, min, quartiles and max of the valid values.
///
/// `None` when the column has no valid values.
pub(crate) fn summarize_numeric(series: &Series) -> Result<Option<NumericSummary>> {
    let values = numeric_values(series)?;
    let sorted = values.sorted();

    let (Some(mean), Some(std)) = (mean(&values.values), sample_std(&values.values)) else {
        return Ok(None);
    };
    let q = |p: f64| quantile(&sorted, p).unwrap_or(f64::NAN);

    Ok(Some(NumericSummary {
        column: series.name().to_string(),
        count: values.valid(),
        mean,
        std,
        min: q(0.0),
        p25: q(0.25),
        p50: q(0.5),
        p75: q(0.75),
        max: q(1.0),
    }))
}
