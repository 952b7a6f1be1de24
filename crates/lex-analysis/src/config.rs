//! Configuration types for the analysis core.
//!
//! Loading and report options use the builder pattern. Numeric precision in
//! rendered reports is part of the output contract and is deliberately not
//! configurable here.

use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};

/// Text values that load as missing in delimited files.
pub const DEFAULT_NULL_MARKERS: [&str; 12] = [
    "", "NA", "N/A", "n/a", "NaN", "nan", "null", "NULL", "None", "#N/A", "<NA>", "-NaN",
];

/// Configuration for loading and analysing a dataset.
///
/// Use [`AnalysisConfig::builder()`] to create a new configuration
/// with fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use lex_analysis::config::AnalysisConfig;
///
/// let config = AnalysisConfig::builder()
///     .infer_schema_length(500)
///     .sample_rows(10)
///     .build()?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Values treated as missing when parsing delimited text.
    /// Default: [`DEFAULT_NULL_MARKERS`]
    pub null_markers: Vec<String>,

    /// Number of rows sampled for CSV type inference; `None` scans the
    /// whole file.
    /// Default: `None`
    pub infer_schema_length: Option<usize>,

    /// Rows shown in the sample preview of a dataset summary.
    /// Default: 5
    pub sample_rows: usize,

    /// Size of the condensed "top values" table in frequency reports.
    /// Default: 5
    pub top_values: usize,

    /// Distinct-value count above which the condensed table is emitted.
    /// Default: 10
    pub condensed_table_threshold: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            null_markers: DEFAULT_NULL_MARKERS.iter().map(|s| s.to_string()).collect(),
            infer_schema_length: None,
            sample_rows: 5,
            top_values: 5,
            condensed_table_threshold: 10,
        }
    }
}

impl AnalysisConfig {
    /// Create a new configuration builder.
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.infer_schema_length == Some(0) {
            return Err(ConfigValidationError::InvalidCount {
                field: "infer_schema_length".to_string(),
                value: 0,
            });
        }

        if self.top_values == 0 {
            return Err(ConfigValidationError::InvalidCount {
                field: "top_values".to_string(),
                value: self.top_values,
            });
        }

        if self.top_values > self.condensed_table_threshold {
            return Err(ConfigValidationError::TopValuesExceedThreshold {
                top_values: self.top_values,
                threshold: self.condensed_table_threshold,
            });
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid value for '{field}': {value} (must be at least 1)")]
    InvalidCount { field: String, value: usize },

    #[error(
        "Top values table size {top_values} exceeds the condensed table threshold {threshold}"
    )]
    TopValuesExceedThreshold { top_values: usize, threshold: usize },
}

impl From<ConfigValidationError> for AnalysisError {
    fn from(e: ConfigValidationError) -> Self {
        AnalysisError::InvalidConfig(e.to_string())
    }
}

/// Builder for [`AnalysisConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct AnalysisConfigBuilder {
    null_markers: Option<Vec<String>>,
    infer_schema_length: Option<usize>,
    sample_rows: Option<usize>,
    top_values: Option<usize>,
    condensed_table_threshold: Option<usize>,
}

impl AnalysisConfigBuilder {
    /// Replace the default null markers.
    pub fn null_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.null_markers = Some(markers.into_iter().map(Into::into).collect());
        self
    }

    /// Limit CSV type inference to the first `rows` rows instead of the
    /// whole file.
    pub fn infer_schema_length(mut self, rows: usize) -> Self {
        self.infer_schema_length = Some(rows);
        self
    }

    /// Set the number of rows shown in dataset sample previews.
    pub fn sample_rows(mut self, rows: usize) -> Self {
        self.sample_rows = Some(rows);
        self
    }

    /// Set the size of the condensed top-values table.
    pub fn top_values(mut self, n: usize) -> Self {
        self.top_values = Some(n);
        self
    }

    /// Set the distinct-value count above which the condensed table appears.
    pub fn condensed_table_threshold(mut self, n: usize) -> Self {
        self.condensed_table_threshold = Some(n);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `AnalysisConfig` or an error if validation fails.
    pub fn build(self) -> Result<AnalysisConfig, ConfigValidationError> {
        let defaults = AnalysisConfig::default();
        let config = AnalysisConfig {
            null_markers: self.null_markers.unwrap_or(defaults.null_markers),
            infer_schema_length: self.infer_schema_length.or(defaults.infer_schema_length),
            sample_rows: self.sample_rows.unwrap_or(defaults.sample_rows),
            top_values: self.top_values.unwrap_or(defaults.top_values),
            condensed_table_threshold: self
                .condensed_table_threshold
                .unwrap_or(defaults.condensed_table_threshold),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.infer_schema_length, None);
        assert_eq!(config.sample_rows, 5);
        assert_eq!(config.top_values, 5);
        assert_eq!(config.condensed_table_threshold, 10);
        assert!(config.null_markers.iter().any(|m| m == "NA"));
    }

    #[test]
    fn test_builder_defaults() {
        let config = AnalysisConfig::builder().build().unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn test_builder_custom_values() {
        let config = AnalysisConfig::builder()
            .null_markers(["?", "-"])
            .infer_schema_length(50)
            .sample_rows(3)
            .top_values(3)
            .condensed_table_threshold(20)
            .build()
            .unwrap();

        assert_eq!(config.null_markers, vec!["?".to_string(), "-".to_string()]);
        assert_eq!(config.infer_schema_length, Some(50));
        assert_eq!(config.sample_rows, 3);
        assert_eq!(config.top_values, 3);
        assert_eq!(config.condensed_table_threshold, 20);
    }

    #[test]
    fn test_validation_zero_schema_length() {
        let result = AnalysisConfig::builder().infer_schema_length(0).build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::InvalidCount { .. }
        ));
    }

    #[test]
    fn test_validation_top_values_above_threshold() {
        let result = AnalysisConfig::builder()
            .top_values(12)
            .condensed_table_threshold(10)
            .build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::TopValuesExceedThreshold { .. }
        ));
    }

    #[test]
    fn test_config_error_converts_to_analysis_error() {
        let err: AnalysisError = ConfigValidationError::InvalidCount {
            field: "top_values".to_string(),
            value: 0,
        }
        .into();
        assert_eq!(err.error_code(), "INVALID_CONFIG");
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "null_markers": ["", "NA"],
            "infer_schema_length": 200,
            "sample_rows": 8,
            "top_values": 5,
            "condensed_table_threshold": 15
        }"#;

        let config: AnalysisConfig = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(config.null_markers.len(), 2);
        assert_eq!(config.infer_schema_length, Some(200));
        assert_eq!(config.sample_rows, 8);
        assert_eq!(config.condensed_table_threshold, 15);
    }

    #[test]
    fn test_config_from_json_full_inference() {
        let json = r#"{
            "null_markers": [],
            "infer_schema_length": null,
            "sample_rows": 5,
            "top_values": 5,
            "condensed_table_threshold": 10
        }"#;

        let config: AnalysisConfig = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(config.infer_schema_length, None);
        assert!(config.validate().is_ok());
    }
}
