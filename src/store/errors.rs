//! Record store errors

use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Data file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data file is not valid JSON
    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Top-level JSON value is not an array
    #[error("Expected a JSON array of records in {0}")]
    NotAnArray(PathBuf),

    /// Array element is not an object
    #[error("Record at index {0} is not a JSON object")]
    NotAnObject(usize),
}
