//! String-in, string-out entry points for external dispatchers.
//!
//! Each function loads the file, runs one analysis and returns either the
//! rendered report or a rendered error. Nothing here panics or returns `Err`;
//! callers such as chat agents only ever see text.
//!
//! [`Tool`] lists the same operations with a name and description so a
//! dispatcher can map a user request onto one of them.

use crate::error::{AnalysisError, Result};
use crate::frequency::unique_value_breakdown;
use crate::loader::{self, Table};
use crate::profiler::describe;
use crate::reporting;
use crate::statistics;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::warn;

/// Shape, schema, missing values, numeric statistics and a sample of rows.
pub fn dataset_summary(file_path: impl AsRef<Path>) -> String {
    respond(
        loader::load(file_path)
            .and_then(|table| describe(&table))
            .map(|info| reporting::render_dataset_summary(&info)),
    )
}

/// Frequency breakdown of every distinct value in a column.
pub fn column_unique_values(file_path: impl AsRef<Path>, column: &str) -> String {
    with_table(file_path, |table| {
        unique_value_breakdown(table, column).map(|r| reporting::render_frequency(&r))
    })
}

pub fn column_mean(file_path: impl AsRef<Path>, column: &str) -> String {
    with_table(file_path, |table| {
        statistics::column_mean(table, column).map(|r| reporting::render_mean(&r))
    })
}

pub fn column_std(file_path: impl AsRef<Path>, column: &str) -> String {
    with_table(file_path, |table| {
        statistics::column_std(table, column).map(|r| reporting::render_std(&r))
    })
}

pub fn column_skewness(file_path: impl AsRef<Path>, column: &str) -> String {
    with_table(file_path, |table| {
        statistics::column_skewness(table, column).map(|r| reporting::render_skewness(&r))
    })
}

fn with_table(file_path: impl AsRef<Path>, analyze: impl FnOnce(&Table) -> Result<String>) -> String {
    respond(loader::load(file_path).and_then(|table| analyze(&table)))
}

fn respond(result: Result<String>) -> String {
    result.unwrap_or_else(|e| {
        warn!("Analysis failed [{}]: {}", e.error_code(), e);
        reporting::render_error(&e)
    })
}

/// Catalog of the available analyses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    DatasetSummary,
    ColumnUniqueValues,
    ColumnMean,
    ColumnStd,
    ColumnSkewness,
}

impl Tool {
    pub const ALL: [Tool; 5] = [
        Tool::DatasetSummary,
        Tool::ColumnUniqueValues,
        Tool::ColumnMean,
        Tool::ColumnStd,
        Tool::ColumnSkewness,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::DatasetSummary => "dataset_summary",
            Tool::ColumnUniqueValues => "column_unique_values",
            Tool::ColumnMean => "column_mean",
            Tool::ColumnStd => "column_std",
            Tool::ColumnSkewness => "column_skewness",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tool::DatasetSummary => "Describe a dataset with types, missing values, and basic stats",
            Tool::ColumnUniqueValues => {
                "Analyze unique values and their percentage representation in a specific column"
            }
            Tool::ColumnMean => "Calculate the mean (average) value of a numeric column",
            Tool::ColumnStd => "Calculate the standard deviation of a numeric column",
            Tool::ColumnSkewness => {
                "Analyze the distribution shape and skewness of a numeric column"
            }
        }
    }

    pub fn requires_column(&self) -> bool {
        !matches!(self, Tool::DatasetSummary)
    }

    pub fn from_name(name: &str) -> Option<Tool> {
        Tool::ALL.into_iter().find(|tool| tool.name() == name)
    }

    /// Run the tool. Column tools without a column return a rendered error.
    pub fn invoke(&self, file_path: impl AsRef<Path>, column: Option<&str>) -> String {
        let column = match (self.requires_column(), column) {
            (false, _) => return dataset_summary(file_path),
            (true, Some(column)) => column,
            (true, None) => {
                return respond(Err(AnalysisError::MissingArgument {
                    tool: self.name().to_string(),
                    argument: "column".to_string(),
                }));
            }
        };

        match self {
            Tool::ColumnUniqueValues => column_unique_values(file_path, column),
            Tool::ColumnMean => column_mean(file_path, column),
            Tool::ColumnStd => column_std(file_path, column),
            Tool::ColumnSkewness => column_skewness(file_path, column),
            Tool::DatasetSummary => dataset_summary(file_path),
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
