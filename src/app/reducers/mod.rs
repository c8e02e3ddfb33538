mod connection;
mod helpers;
mod query;
mod saved_query;
mod tabs;

pub use connection::{
    CONNECTION_OK, CONNECTION_SAVE_FAILED, CONNECTION_SAVED, CONNECTION_TEST_FAILED,
    reduce_connection,
};
pub use helpers::{validate_all, validate_field};
pub use query::{NOTHING_TO_EXECUTE, reduce_query};
pub use saved_query::{
    QUERIES_LOAD_FAILED, QUERY_DELETE_FAILED, QUERY_SAVE_FAILED, QUERY_SAVED, reduce_saved_query,
};
pub use tabs::reduce_tab_action;
