//! Error types for templates.

use thiserror::Error;
use whisker_core::CoreError;
use whisker_formats::FormatError;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur while compiling or rendering templates.
///
/// Missing or null data is never an error: it renders as an empty string.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Unclosed section '{name}' opened on line {line}")]
    UnclosedSection { name: String, line: usize },

    #[error("Closing tag '{found}' on line {line} does not match open section '{expected}'")]
    MismatchedClose {
        expected: String,
        found: String,
        line: usize,
    },

    #[error("Closing tag '{name}' on line {line} has no open section")]
    UnexpectedClose { name: String, line: usize },

    #[error("Unsupported tag '{sigil}' on line {line}")]
    UnsupportedTag { sigil: String, line: usize },

    #[error("Invalid tag on line {line}: {source}")]
    InvalidTag {
        line: usize,
        #[source]
        source: CoreError,
    },

    #[error("Template rendering failed: {0}")]
    Core(#[from] CoreError),

    #[error("Data error: {0}")]
    Format(#[from] FormatError),

    #[error("Invalid settings: {0}")]
    Settings(#[from] toml::de::Error),

    #[error("Invalid setting '{name}': {reason}")]
    InvalidSetting { name: &'static str, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
