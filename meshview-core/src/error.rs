//! Error types for meshview

use thiserror::Error;

/// Main error type for meshview operations
///
/// Every variant is a caller-contract violation detected before any
/// output buffer is written.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Index out of range: face {face} references vertex {index}, but only {vertex_count} vertices exist")]
    IndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },

    #[error("Size mismatch: expected {expected} elements, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

impl Error {
    /// Shorthand for building an [`Error::InvalidArgument`]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }
}

/// Result type alias for meshview operations
pub type Result<T> = std::result::Result<T, Error>;
