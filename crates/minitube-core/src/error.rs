use crate::video::VideoId;
use thiserror::Error;

/// Errors raised by a persistence backend.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("video id already exists: {0}")]
    Conflict(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Errors surfaced by the video store to its callers.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("video not found: {0}")]
    NotFound(VideoId),
    #[error("invalid video: {0}")]
    Validation(String),
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        StoreError::StorageUnavailable(value.to_string())
    }
}
