use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::app::ports::{
    ConnectionError, ConnectionProbe, ConnectionService, ConnectionStore, PersistError,
};
use crate::domain::connection::{Connection, ConnectionBody, ConnectionId};

/// `ConnectionService` backed by a network probe and a persistent store.
pub struct StoredConnectionService {
    probe: Arc<dyn ConnectionProbe>,
    store: Arc<dyn ConnectionStore>,
}

impl StoredConnectionService {
    pub fn new(probe: Arc<dyn ConnectionProbe>, store: Arc<dyn ConnectionStore>) -> Self {
        Self { probe, store }
    }
}

#[async_trait]
impl ConnectionService for StoredConnectionService {
    async fn test(&self, body: &ConnectionBody) -> Result<(), ConnectionError> {
        debug!(url = %body.to_masked_url(), "pinging server");
        self.probe.ping(body).await
    }

    async fn save(
        &self,
        id: Option<ConnectionId>,
        body: &ConnectionBody,
    ) -> Result<Connection, PersistError> {
        let store = Arc::clone(&self.store);
        let connection = match id {
            Some(id) => Connection::with_id(id, body.clone()),
            None => Connection::new(body.clone()),
        };

        // Lookup and write happen under one store lock.
        let record = connection.clone();
        let is_edit = tokio::task::spawn_blocking(move || store.upsert(&record))
            .await
            .map_err(|e| PersistError::Storage(format!("Task panicked: {}", e)))??;

        info!(
            id = %connection.id,
            name = %connection.display_name(),
            is_edit,
            "connection saved"
        );
        Ok(connection)
    }
}
