use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use crate::app::ports::{PersistError, QueryRepository};
use crate::config::query_config::{CURRENT_VERSION, QueryConfigFile};
use crate::domain::{SavedQuery, TabId};

use super::private_file::write_private;

const QUERIES_FILE_NAME: &str = "queries.toml";

/// Saved queries kept in `queries.toml`, in insertion order.
pub struct TomlQueryStore {
    config_dir: PathBuf,
    write_lock: Mutex<()>,
}

impl TomlQueryStore {
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self {
            config_dir,
            write_lock: Mutex::new(()),
        }
    }

    pub fn storage_path(&self) -> PathBuf {
        self.config_dir.join(QUERIES_FILE_NAME)
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn read(&self) -> Result<Vec<SavedQuery>, PersistError> {
        let path = self.storage_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| PersistError::Storage(format!("Read error: {}", e)))?;
        let file: QueryConfigFile = toml::from_str(&content)
            .map_err(|e| PersistError::Storage(format!("Invalid format: {}", e)))?;

        if file.version != CURRENT_VERSION {
            return Err(PersistError::Storage(format!(
                "Config version mismatch: found {}, expected {}",
                file.version, CURRENT_VERSION
            )));
        }

        Ok(file.queries)
    }

    fn write(&self, queries: Vec<SavedQuery>) -> Result<(), PersistError> {
        let count = queries.len();
        let content = toml::to_string_pretty(&QueryConfigFile::new(queries))
            .map_err(|e| PersistError::Storage(format!("Write error: {}", e)))?;

        let path = self.storage_path();
        write_private(&path, &format!("# clickmate saved queries\n\n{}", content))
            .map_err(|e| PersistError::Storage(format!("IO error: {}", e)))?;
        debug!(path = %path.display(), count, "wrote saved queries");

        Ok(())
    }
}

impl QueryRepository for TomlQueryStore {
    fn list(&self) -> Result<Vec<SavedQuery>, PersistError> {
        let _guard = self.lock();
        self.read()
    }

    fn save(&self, query: &SavedQuery, is_new: bool) -> Result<(), PersistError> {
        let _guard = self.lock();
        let mut queries = self.read()?;

        match queries.iter_mut().find(|q| q.id == query.id) {
            Some(existing) => *existing = query.clone(),
            None if is_new => queries.push(query.clone()),
            None => return Err(PersistError::NotFound(query.id.to_string())),
        }

        self.write(queries)
    }

    fn delete(&self, id: &TabId) -> Result<(), PersistError> {
        let _guard = self.lock();
        let mut queries = self.read()?;
        let before = queries.len();
        queries.retain(|q| &q.id != id);
        if queries.len() == before {
            return Err(PersistError::NotFound(id.to_string()));
        }

        self.write(queries)
    }
}
