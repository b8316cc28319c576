//! Error types for the directory-data crate.

use thiserror::Error;

/// Errors that can occur while loading and validating directory datasets.
#[derive(Error, Debug)]
pub enum DataError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a dataset file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record line couldn't be deserialized
    #[error("Parse error at line {line} in {file}: {reason}")]
    Parse {
        file: String,
        line: usize,
        reason: String,
    },

    /// Two records in the same dataset share an id
    #[error("Duplicate {entity} id: {id}")]
    DuplicateId { entity: &'static str, id: u32 },

    /// Data validation failed
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, DataError>;
