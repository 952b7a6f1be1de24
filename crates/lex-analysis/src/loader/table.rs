//! The in-memory table every analysis runs against.

use crate::error::{AnalysisError, Result};
use polars::prelude::*;

/// An immutable, column-oriented dataset loaded from a single source file.
///
/// Only `&self` accessors are exposed; analyses derive new values and never
/// modify the underlying frame.
#[derive(Debug, Clone)]
pub struct Table {
    df: DataFrame,
    source_name: String,
}

impl Table {
    /// Wrap an already materialized frame.
    pub fn from_dataframe(df: DataFrame, source_name: impl Into<String>) -> Self {
        Self {
            df,
            source_name: source_name.into(),
        }
    }

    /// File name the table was loaded from.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    pub fn height(&self) -> usize {
        self.df.height()
    }

    pub fn width(&self) -> usize {
        self.df.width()
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        self.df.shape()
    }

    /// Column names in declared order.
    pub fn column_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.df.get_column_index(name).is_some()
    }

    /// Borrow a column as a materialized series.
    ///
    /// Fails with [`AnalysisError::ColumnNotFound`] listing every column.
    pub fn series(&self, name: &str) -> Result<&Series> {
        match self.df.column(name) {
            Ok(column) => Ok(column.as_materialized_series()),
            Err(_) => Err(AnalysisError::ColumnNotFound {
                column: name.to_string(),
                available: self.column_names(),
            }),
        }
    }
}
