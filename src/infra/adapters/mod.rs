pub mod connection_service;
pub mod connection_store;
mod private_file;
pub mod query_store;

pub use connection_service::StoredConnectionService;
pub use connection_store::TomlConnectionStore;
pub use query_store::TomlQueryStore;
