//! Error types for the core module.

use thiserror::Error;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in the core.
///
/// Missing keys and null values are not errors; they surface as
/// [`Lookup::NotFound`](crate::Lookup::NotFound) and
/// [`Lookup::FoundNull`](crate::Lookup::FoundNull).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid path: {0:?}")]
    InvalidPath(String),

    #[error("Context depth limit exceeded: {limit}")]
    DepthExceeded { limit: usize },
}
