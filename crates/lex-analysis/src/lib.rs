//! Tabular Dataset Analysis Library
//!
//! Loads a CSV or Parquet file into memory and produces deterministic,
//! human-readable reports about it, built with Rust and Polars.
//!
//! # Overview
//!
//! - **Loading**: `.csv` (comma or semicolon, detected from the header line) and `.parquet`
//! - **Validation**: every analysis checks the requested column and lists the available ones on failure
//! - **Profiling**: dtypes, missing values, numeric summaries and a sample preview
//! - **Statistics**: mean, sample standard deviation, skewness and excess kurtosis with classification
//! - **Frequencies**: distinct-value breakdown with a dedicated missing-value bucket
//! - **Reporting**: markdown rendering of every report, plus serde serialization
//!
//! Nothing here talks to a model or a user. The [`tools`] module exposes the
//! analyses as `(file_path, column) -> String` functions so an external
//! dispatcher can call them directly.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lex_analysis::{loader, profiler, reporting, statistics};
//!
//! let table = loader::load("data/sales.csv")?;
//!
//! let info = profiler::describe(&table)?;
//! println!("{}", reporting::render_dataset_summary(&info));
//!
//! match statistics::column_std(&table, "revenue") {
//!     Ok(report) => println!("{}", reporting::render_std(&report)),
//!     Err(e) => println!("{}", reporting::render_error(&e)),
//! }
//! ```
//!
//! Or, for a dispatcher that only deals in strings:
//!
//! ```rust,ignore
//! use lex_analysis::tools::Tool;
//!
//! let text = Tool::ColumnSkewness.invoke("data/sales.csv", Some("revenue"));
//! ```
//!
//! # Configuration
//!
//! Use [`AnalysisConfig`] to change null markers, schema inference depth or
//! frequency table sizes:
//!
//! ```rust,ignore
//! use lex_analysis::{AnalysisConfig, loader};
//!
//! let config = AnalysisConfig::builder()
//!     .null_markers(["", "NA", "-"])
//!     .infer_schema_length(10_000)
//!     .build()?;
//!
//! let table = loader::load_with_config("data/survey.csv", &config)?;
//! ```

pub mod config;
pub mod error;
pub mod frequency;
pub mod loader;
pub mod profiler;
pub mod reporting;
pub mod statistics;
pub mod tools;
pub mod types;
pub mod utils;
pub mod validation;

// Re-exports for convenient access
pub use config::{AnalysisConfig, AnalysisConfigBuilder, ConfigValidationError};
pub use error::{AnalysisError, Result as AnalysisResult, ResultExt};
pub use frequency::{unique_value_breakdown, unique_value_breakdown_with_config};
pub use loader::{DataFormat, Table, load, load_with_config};
pub use profiler::{describe, describe_with_config};
pub use reporting::{render, render_dataset_summary, render_error};
pub use statistics::{column_mean, column_skewness, column_std};
pub use tools::Tool;
pub use types::{
    ColumnContext, ColumnDescriptor, DatasetInfo, ExclusionScope, FrequencyEntry,
    FrequencyReport, Insight, MeanReport, NumericSummary, SkewnessReport, StatReport,
    StdDevReport,
};
pub use utils::DtypeCategory;
pub use validation::validate_column;

static_assertions::assert_impl_all!(Table: Send, Sync);
static_assertions::assert_impl_all!(DatasetInfo: Send, Sync);
static_assertions::assert_impl_all!(StatReport: Send, Sync);
static_assertions::assert_impl_all!(AnalysisError: Send, Sync);
