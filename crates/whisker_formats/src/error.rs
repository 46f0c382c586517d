//! Error types for data formats.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for format operations.
pub type FormatResult<T> = Result<T, FormatError>;

/// Errors raised while reading data documents.
///
/// Lookups never produce these; malformed input is rejected before any
/// resolution happens.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Unsupported data file extension: {0}")]
    UnsupportedExtension(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
