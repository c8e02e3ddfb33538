use async_trait::async_trait;
use thiserror::Error;

use crate::domain::QueryResult;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("No active connection")]
    NotConnected,
    #[error("Invalid query parameters: {0}")]
    InvalidParams(String),
    #[error("{0}")]
    Server(String),
    #[error("Transport error: {0}")]
    Transport(String),
}

#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
#[async_trait]
pub trait QueryService: Send + Sync {
    async fn execute(&self, sql: &str, params: &str) -> Result<QueryResult, QueryError>;
}
