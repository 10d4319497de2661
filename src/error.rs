//! Error types for the service and I/O layers
//!
//! The reconciliation core never errors; these cover fetching, publishing
//! and lookups.

use thiserror::Error;

/// Result type for record source and sink operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Result type for counter service operations
pub type CounterResult<T> = Result<T, CounterError>;

/// Errors from a record source or sink
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The sink refused to accept a record
    #[error("Record rejected: {0}")]
    Rejected(String),
}

/// Errors from counter operations
#[derive(Debug, Error)]
pub enum CounterError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("Counter not found: {0}")]
    NotFound(String),

    /// A record exists but does not describe a valid counter
    #[error("Invalid counter data: {0}")]
    InvalidRecord(String),

    #[error("Invalid form: {0}")]
    InvalidForm(String),
}
