use serde::{Deserialize, Serialize};

use crate::tab::TabId;

/// A persisted query record, as stored by the query repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedQuery {
    pub id: TabId,
    pub name: String,
    pub sql: String,
    #[serde(default)]
    pub params: String,
}

impl SavedQuery {
    pub fn new(
        id: TabId,
        name: impl Into<String>,
        sql: impl Into<String>,
        params: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            sql: sql.into(),
            params: params.into(),
        }
    }
}
