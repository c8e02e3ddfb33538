use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{Connection, ConnectionId};

use super::PersistError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionStoreError {
    #[error("Config version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },
    #[error("Read error: {0}")]
    ReadError(String),
    #[error("Write error: {0}")]
    WriteError(String),
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Connection not found: {0}")]
    NotFound(String),
}

impl From<ConnectionStoreError> for PersistError {
    fn from(err: ConnectionStoreError) -> Self {
        match err {
            ConnectionStoreError::NotFound(id) => Self::NotFound(id),
            other => Self::Storage(other.to_string()),
        }
    }
}

#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
pub trait ConnectionStore: Send + Sync {
    fn load_all(&self) -> Result<Vec<Connection>, ConnectionStoreError>;

    fn find_by_id(&self, id: &ConnectionId) -> Result<Option<Connection>, ConnectionStoreError>;

    fn insert(&self, connection: &Connection) -> Result<(), ConnectionStoreError>;

    /// Fails with `NotFound` when no connection has `connection.id`.
    fn update(&self, connection: &Connection) -> Result<(), ConnectionStoreError>;

    /// Replaces the connection with the same id, or appends it. Returns `true`
    /// when an existing entry was replaced.
    fn upsert(&self, connection: &Connection) -> Result<bool, ConnectionStoreError>;

    fn delete(&self, id: &ConnectionId) -> Result<(), ConnectionStoreError>;

    fn storage_path(&self) -> PathBuf;
}
