use thiserror::Error;

/// Failure to write or read a persisted record (connection or saved query).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistError {
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Storage error: {0}")]
    Storage(String),
}
