//! Error types for the quote collection.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error from adding a quote to the collection.
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Failures talking to the remote endpoint.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Could not decode response: {0}")]
    Decode(String),
}

/// Coarse classification of a [`TransportError`], cheap to copy into reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportErrorKind {
    Timeout,
    Connection,
    Status,
    Decode,
}

impl TransportError {
    pub fn kind(&self) -> TransportErrorKind {
        match self {
            TransportError::Timeout { .. } => TransportErrorKind::Timeout,
            TransportError::Connection(_) => TransportErrorKind::Connection,
            TransportError::Status { .. } => TransportErrorKind::Status,
            TransportError::Decode(_) => TransportErrorKind::Decode,
        }
    }
}

impl std::fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportErrorKind::Timeout => write!(f, "timeout"),
            TransportErrorKind::Connection => write!(f, "connection"),
            TransportErrorKind::Status => write!(f, "status"),
            TransportErrorKind::Decode => write!(f, "decode"),
        }
    }
}

/// Durable storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The slot holds content that is not a JSON array of quotes.
    #[error("Stored collection is corrupt: {0}")]
    Corrupt(String),

    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// A quote offered for append was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("quote text must not be empty")]
    EmptyText,

    #[error("quote category must not be empty")]
    EmptyCategory,
}

/// Bulk import failures.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Error parsing JSON: {0}")]
    Parse(String),

    #[error("Invalid file format. Expected an array of quotes.")]
    NotAnArray,

    #[error("Record {index} is invalid: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: ValidationError,
    },

    #[error("Could not persist imported quotes: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for quote operations.
pub type QuoteResult<T> = Result<T, QuoteError>;
