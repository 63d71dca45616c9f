//! # Table Query Errors
//!
//! Validation failures raised before any record is touched.

use thiserror::Error;

/// Result type for table pipeline operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Malformed filter, sort, or pagination parameters.
///
/// Every variant is a caller error; nothing here is retried or
/// silently corrected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Field is not declared by the table schema
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Field exists but cannot be sorted on
    #[error("Field is not sortable: {0}")]
    FieldNotSortable(String),

    /// Field exists but cannot be filtered on
    #[error("Field is not filterable: {0}")]
    FieldNotFilterable(String),

    /// Page number is not a positive integer
    #[error("Invalid page: {0}")]
    InvalidPage(String),

    /// Page size is not a positive integer
    #[error("Invalid limit: {0}")]
    InvalidLimit(String),

    /// Page size is above the configured maximum
    #[error("Limit {0} exceeds maximum {1}")]
    LimitExceeded(u32, u32),

    /// Sort order is neither `asc` nor `desc`
    #[error("Invalid sort order: {0}")]
    InvalidSortOrder(String),
}
