use std::sync::Arc;

use crate::connection_dialog_state::ConnectionField;
use crate::domain::{Connection, QueryResult, SavedQuery, TabId};
use crate::tab_store::TabCommand;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    Render,

    // Tabs
    AddTab,
    RemoveTab(TabId),
    RenameTab(String),
    SetActiveTab(TabId),
    EditSql(String),
    EditParams(String),
    /// Any raw tab command, applied as-is
    Tab(TabCommand),

    // Query execution
    ExecuteQuery,
    QueryCompleted {
        /// Tab that issued the request; the result still lands on the active tab
        tab_id: TabId,
        sql: String,
        params: String,
        result: Arc<QueryResult>,
    },
    QueryFailed {
        tab_id: TabId,
        message: String,
    },

    // Saved queries
    SaveActiveTab,
    SaveActiveTabAsNew,
    QuerySaved(SavedQuery),
    QuerySaveFailed(String),
    OpenSavedQuery(SavedQuery),
    LoadSavedQueries,
    SavedQueriesLoaded(Vec<SavedQuery>),
    SavedQueriesLoadFailed(String),
    DeleteSavedQuery(TabId),
    QueryDeleted(TabId),
    QueryDeleteFailed(String),

    // Connection dialog
    OpenConnectionDialog(Option<Connection>),
    CloseConnectionDialog,
    ConnectionFormInput {
        field: ConnectionField,
        value: String,
    },
    TestConnection,
    ConnectionTestSucceeded,
    ConnectionTestFailed(String),
    SubmitConnection,
    ConnectionSaved {
        connection: Connection,
        is_edit: bool,
    },
    ConnectionSaveFailed(String),
    SetActiveConnection(Option<Connection>),
}
