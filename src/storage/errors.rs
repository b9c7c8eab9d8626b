//! Record store error types.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with the given id exists
    #[error("no book with id: {0}")]
    NotFound(String),

    /// Disk I/O failure (read, write, rename)
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing document exists but cannot be decoded
    #[error("corrupt store document: {0}")]
    Corrupt(String),

    /// Failed to serialize the collection for persistence
    #[error("serialization error: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            StoreError::Io(err.into())
        } else if err.is_syntax() || err.is_eof() || err.is_data() {
            StoreError::Corrupt(err.to_string())
        } else {
            StoreError::Serialize(err.to_string())
        }
    }
}

impl StoreError {
    /// `true` for the absent-record case, which the HTTP layer reports as
    /// 404 rather than a server failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
