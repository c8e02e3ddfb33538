use serde::{Deserialize, Serialize};

use crate::domain::SavedQuery;

pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
pub struct QueryConfigFile {
    pub version: u32,
    #[serde(default)]
    pub queries: Vec<SavedQuery>,
}

impl QueryConfigFile {
    pub fn new(queries: Vec<SavedQuery>) -> Self {
        Self {
            version: CURRENT_VERSION,
            queries,
        }
    }
}
