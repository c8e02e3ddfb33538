use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Connection, ConnectionBody, ConnectionId};

use super::PersistError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionError {
    #[error("Connection refused: {0}")]
    Refused(String),
    #[error("Authentication failed: {0}")]
    Unauthorized(String),
    #[error("Connection timed out")]
    Timeout,
    #[error("Unexpected response: {0}")]
    Protocol(String),
}

#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
#[async_trait]
pub trait ConnectionService: Send + Sync {
    async fn test(&self, body: &ConnectionBody) -> Result<(), ConnectionError>;

    /// Inserts when `id` is `None`, updates the existing connection otherwise.
    async fn save(
        &self,
        id: Option<ConnectionId>,
        body: &ConnectionBody,
    ) -> Result<Connection, PersistError>;
}
