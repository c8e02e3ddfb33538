pub mod connection_probe;
pub mod connection_service;
pub mod connection_store;
pub mod notification;
pub mod persist_error;
pub mod query_repository;
pub mod query_service;

pub use connection_probe::ConnectionProbe;
pub use connection_service::{ConnectionError, ConnectionService};
pub use connection_store::{ConnectionStore, ConnectionStoreError};
pub use notification::NotificationSink;
pub use persist_error::PersistError;
pub use query_repository::QueryRepository;
pub use query_service::{QueryError, QueryService};

#[cfg(any(test, feature = "test-support"))]
pub use connection_probe::MockConnectionProbe;
#[cfg(any(test, feature = "test-support"))]
pub use connection_service::MockConnectionService;
#[cfg(any(test, feature = "test-support"))]
pub use connection_store::MockConnectionStore;
#[cfg(any(test, feature = "test-support"))]
pub use notification::MockNotificationSink;
#[cfg(any(test, feature = "test-support"))]
pub use query_repository::MockQueryRepository;
#[cfg(any(test, feature = "test-support"))]
pub use query_service::MockQueryService;
