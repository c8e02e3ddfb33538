use crate::domain::{SavedQuery, TabId};

use super::PersistError;

#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
pub trait QueryRepository: Send + Sync {
    fn list(&self) -> Result<Vec<SavedQuery>, PersistError>;

    /// Inserts when `is_new`, otherwise replaces the query with the same id.
    fn save(&self, query: &SavedQuery, is_new: bool) -> Result<(), PersistError>;

    fn delete(&self, id: &TabId) -> Result<(), PersistError>;
}
