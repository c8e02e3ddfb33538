pub mod connection;
pub mod query_result;
pub mod saved_query;
pub mod tab;

pub use connection::{Connection, ConnectionBody, ConnectionColor, ConnectionId};
pub use query_result::QueryResult;
pub use saved_query::SavedQuery;
pub use tab::{Tab, TabIcon, TabId};
