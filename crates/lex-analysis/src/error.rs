//! Custom error types for the analysis core.
//!
//! Every public operation returns [`AnalysisError`] through [`Result`] instead
//! of panicking. Errors are serializable so callers outside the crate (tool
//! dispatchers, UIs) can forward them as `{code, message}` objects.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

/// The main error type for dataset analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Source path does not resolve to a file.
    #[error("File '{0}' not found")]
    FileNotFound(String),

    /// Source path exists but cannot be read.
    #[error("Permission denied accessing '{0}'")]
    PermissionDenied(String),

    /// File extension is not one of the supported formats.
    #[error("Unsupported file format '{extension}'. Supported formats: CSV, Parquet")]
    UnsupportedFormat { extension: String },

    /// File format is recognized but its content could not be parsed.
    #[error("Failed to parse '{path}': {reason}")]
    ParseError { path: String, reason: String },

    /// Requested column is absent. Carries every column name in table order.
    #[error(
        "Column '{column}' not found in the dataset.\n\n**Available columns:** {}",
        .available.join(", ")
    )]
    ColumnNotFound {
        column: String,
        available: Vec<String>,
    },

    /// A numeric operation was requested on a non-numeric column.
    #[error("Column '{column}' is not numeric. Data type: {dtype}")]
    NotNumeric { column: String, dtype: String },

    /// Fewer valid values than the operation needs.
    #[error(
        "Column '{column}' has {actual} valid value(s); at least {required} required for this analysis"
    )]
    InsufficientData {
        column: String,
        required: usize,
        actual: usize,
    },

    /// A tool was invoked without an argument it needs.
    #[error("Tool '{tool}' requires the '{argument}' argument")]
    MissingArgument { tool: String, argument: String },

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<AnalysisError>,
    },
}

impl AnalysisError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        AnalysisError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Get a stable error code for programmatic handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::FileNotFound(_) => "FILE_NOT_FOUND",
            Self::PermissionDenied(_) => "PERMISSION_DENIED",
            Self::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            Self::ParseError { .. } => "PARSE_ERROR",
            Self::ColumnNotFound { .. } => "COLUMN_NOT_FOUND",
            Self::NotNumeric { .. } => "NOT_NUMERIC",
            Self::InsufficientData { .. } => "INSUFFICIENT_DATA",
            Self::MissingArgument { .. } => "MISSING_ARGUMENT",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Check if this error was caused by the source file rather than by the request.
    pub fn is_load_error(&self) -> bool {
        match self {
            Self::FileNotFound(_)
            | Self::PermissionDenied(_)
            | Self::UnsupportedFormat { .. }
            | Self::ParseError { .. } => true,
            Self::WithContext { source, .. } => source.is_load_error(),
            _ => false,
        }
    }
}

/// Errors are serialized as a struct with `code` and `message` fields.
impl Serialize for AnalysisError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("AnalysisError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| AnalysisError::Polars(e).with_context(context))
    }
}
