use async_trait::async_trait;

use crate::domain::ConnectionBody;

use super::ConnectionError;

/// Network-side reachability check for a ClickHouse server.
#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
#[async_trait]
pub trait ConnectionProbe: Send + Sync {
    async fn ping(&self, body: &ConnectionBody) -> Result<(), ConnectionError>;
}
