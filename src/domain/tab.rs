use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::query_result::QueryResult;
use crate::saved_query::SavedQuery;

pub const NEW_TAB_NAME: &str = "New query";

/// Identifier of an editor tab. Saved queries share this id space.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(String);

impl TabId {
    /// Sentinel used as the active id when no tab is open.
    pub const EMPTY: Self = Self(String::new());

    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display hint only; never inspected by the tab logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabIcon {
    #[default]
    Code,
    Console,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    pub id: TabId,
    pub closeable: bool,
    pub icon: TabIcon,
    pub name: String,
    pub sql: String,
    pub params: String,
    pub query_result: Option<Arc<QueryResult>>,
    pub loading: bool,
    /// Unsaved edits exist.
    pub touched: bool,
    /// Never persisted.
    pub is_new: bool,
}

impl Tab {
    /// Blank editor surface with a fresh identity.
    pub fn blank(id: TabId, closeable: bool) -> Self {
        Self {
            id,
            closeable,
            icon: TabIcon::Code,
            name: NEW_TAB_NAME.to_string(),
            sql: String::new(),
            params: String::new(),
            query_result: None,
            loading: false,
            touched: false,
            is_new: true,
        }
    }

    /// Reconstitutes a tab from a persisted query.
    pub fn restored(query: &SavedQuery) -> Self {
        Self {
            id: query.id.clone(),
            closeable: true,
            icon: TabIcon::Console,
            name: query.name.clone(),
            sql: query.sql.clone(),
            params: query.params.clone(),
            query_result: None,
            loading: false,
            touched: false,
            is_new: false,
        }
    }

    pub fn to_saved_query(&self) -> SavedQuery {
        SavedQuery {
            id: self.id.clone(),
            name: self.name.clone(),
            sql: self.sql.clone(),
            params: self.params.clone(),
        }
    }
}
