//! Dataset loading.
//!
//! Reads a delimited-text or Parquet file into an immutable [`Table`]. Every
//! I/O or parse failure is converted into an [`AnalysisError`] at this
//! boundary.
//!
//! # Delimiter detection
//!
//! For `.csv` files the first line is inspected: if it contains a semicolon
//! the whole file is parsed with `;` as separator, otherwise with `,`. This is
//! a header heuristic, not a content-aware sniffer; a comma-separated file
//! whose header has a quoted field containing `;` is misread.

mod table;

pub use table::Table;

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use polars::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Seek, SeekFrom};
use std::path::Path;
use tracing::{debug, info};

/// File formats the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    /// Comma or semicolon separated text
    Csv,
    /// Apache Parquet columnar file
    Parquet,
}

impl DataFormat {
    /// Resolve the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Ok(DataFormat::Csv),
            "parquet" => Ok(DataFormat::Parquet),
            _ => Err(AnalysisError::UnsupportedFormat { extension }),
        }
    }
}

/// Load a dataset with the default configuration.
pub fn load(path: impl AsRef<Path>) -> Result<Table> {
    load_with_config(path, &AnalysisConfig::default())
}

/// Load a dataset from `path`.
///
/// The extension is checked before the file is opened.
///
/// # Errors
///
/// - [`AnalysisError::UnsupportedFormat`] if the extension is not `csv` or `parquet`
/// - [`AnalysisError::FileNotFound`] if the path does not resolve
/// - [`AnalysisError::PermissionDenied`] if the file cannot be opened for reading
/// - [`AnalysisError::ParseError`] if the content is malformed
pub fn load_with_config(path: impl AsRef<Path>, config: &AnalysisConfig) -> Result<Table> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let format = DataFormat::from_path(path)?;
    let file = open_file(path)?;
    debug!("Loading {} as {:?}", path_str, format);

    let df = match format {
        DataFormat::Csv => read_csv(file, &path_str, config)?,
        DataFormat::Parquet => ParquetReader::new(file)
            .finish()
            .map_err(|e| parse_error(&path_str, e))?,
    };

    let source_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path_str.clone());

    info!("Dataset '{}' loaded: {:?}", source_name, df.shape());
    Ok(Table::from_dataframe(df, source_name))
}

/// Detect the field separator from the first line of delimited text.
pub fn detect_separator(first_line: &str) -> u8 {
    if first_line.contains(';') { b';' } else { b',' }
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| open_error(&path.display().to_string(), e))
}

/// Map a failed open to the loader's error taxonomy.
fn open_error(path_str: &str, e: std::io::Error) -> AnalysisError {
    match e.kind() {
        ErrorKind::NotFound => AnalysisError::FileNotFound(path_str.to_string()),
        ErrorKind::PermissionDenied => AnalysisError::PermissionDenied(path_str.to_string()),
        _ => parse_error(path_str, e),
    }
}

fn read_csv(mut file: File, path_str: &str, config: &AnalysisConfig) -> Result<DataFrame> {
    let mut first_line = String::new();
    BufReader::new(&mut file)
        .read_line(&mut first_line)
        .map_err(|e| parse_error(path_str, e))?;
    file.seek(SeekFrom::Start(0))
        .map_err(|e| parse_error(path_str, e))?;

    let separator = detect_separator(first_line.trim());
    debug!("Using separator {:?} for {}", separator as char, path_str);

    let null_values = NullValues::AllColumns(
        config
            .null_markers
            .iter()
            .map(|m| PlSmallStr::from(m.as_str()))
            .collect(),
    );

    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(config.infer_schema_length)
        .map_parse_options(|opts| {
            opts.with_separator(separator)
                .with_null_values(Some(null_values.clone()))
        })
        .into_reader_with_file_handle(file)
        .finish()
        .map_err(|e| parse_error(path_str, e))
}

fn parse_error(path_str: &str, e: impl std::fmt::Display) -> AnalysisError {
    AnalysisError::ParseError {
        path: path_str.to_string(),
        reason: e.to_string(),
    }
}
