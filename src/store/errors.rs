//! # Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Key-value store errors
///
/// A missing key is not an error; lookups return `Option` and deletes
/// return whether a key was removed.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Backend I/O or transport failure
    #[error("I/O error: {0}")]
    Io(String),

    /// Stored value under a key is not a valid document
    #[error("Corrupted value under key '{key}': {reason}")]
    Corrupted { key: String, reason: String },

    /// Backend lock was poisoned by a panicking writer
    #[error("Store lock poisoned")]
    LockPoisoned,
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e.to_string())
    }
}
