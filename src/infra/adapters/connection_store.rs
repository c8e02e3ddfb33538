use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use crate::app::ports::connection_store::{ConnectionStore, ConnectionStoreError};
use crate::config::connection_config::{CURRENT_VERSION, ConnectionConfigFile};
use crate::domain::connection::{Connection, ConnectionId};

use super::private_file::write_private;

const CONFIG_FILE_NAME: &str = "connections.toml";

pub struct TomlConnectionStore {
    config_dir: PathBuf,
    // Serializes read-modify-write cycles on the file.
    write_lock: Mutex<()>,
}

impl TomlConnectionStore {
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self {
            config_dir,
            write_lock: Mutex::new(()),
        }
    }

    fn config_file_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn read(&self) -> Result<Vec<Connection>, ConnectionStoreError> {
        let path = self.config_file_path();

        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| ConnectionStoreError::ReadError(e.to_string()))?;

        let config: ConnectionConfigFile = toml::from_str(&content)
            .map_err(|e| ConnectionStoreError::InvalidFormat(e.to_string()))?;

        if config.version != CURRENT_VERSION {
            return Err(ConnectionStoreError::VersionMismatch {
                found: config.version,
                expected: CURRENT_VERSION,
            });
        }

        Ok(config.to_connections())
    }

    fn write(&self, connections: &[Connection]) -> Result<(), ConnectionStoreError> {
        let config = ConnectionConfigFile::from_connections(connections);
        let content = toml::to_string_pretty(&config)
            .map_err(|e| ConnectionStoreError::WriteError(e.to_string()))?;

        let content_with_header = format!(
            "# clickmate connection configuration\n# WARNING: Passwords are stored in plain text\n\n{}",
            content
        );

        let path = self.config_file_path();
        write_private(&path, &content_with_header)
            .map_err(|e| ConnectionStoreError::IoError(e.to_string()))?;
        debug!(path = %path.display(), count = connections.len(), "wrote connections");

        Ok(())
    }
}

impl ConnectionStore for TomlConnectionStore {
    fn load_all(&self) -> Result<Vec<Connection>, ConnectionStoreError> {
        let _guard = self.lock();
        self.read()
    }

    fn find_by_id(&self, id: &ConnectionId) -> Result<Option<Connection>, ConnectionStoreError> {
        let _guard = self.lock();
        Ok(self.read()?.into_iter().find(|c| &c.id == id))
    }

    fn insert(&self, connection: &Connection) -> Result<(), ConnectionStoreError> {
        let _guard = self.lock();
        let mut connections = self.read()?;
        connections.push(connection.clone());
        self.write(&connections)
    }

    fn update(&self, connection: &Connection) -> Result<(), ConnectionStoreError> {
        let _guard = self.lock();
        let mut connections = self.read()?;
        let existing = connections
            .iter_mut()
            .find(|c| c.id == connection.id)
            .ok_or_else(|| ConnectionStoreError::NotFound(connection.id.to_string()))?;
        *existing = connection.clone();
        self.write(&connections)
    }

    fn upsert(&self, connection: &Connection) -> Result<bool, ConnectionStoreError> {
        let _guard = self.lock();
        let mut connections = self.read()?;
        let replaced = match connections.iter_mut().find(|c| c.id == connection.id) {
            Some(existing) => {
                *existing = connection.clone();
                true
            }
            None => {
                connections.push(connection.clone());
                false
            }
        };
        self.write(&connections)?;
        Ok(replaced)
    }

    fn delete(&self, id: &ConnectionId) -> Result<(), ConnectionStoreError> {
        let _guard = self.lock();
        let mut connections = self.read()?;
        let before = connections.len();
        connections.retain(|c| &c.id != id);
        if connections.len() == before {
            return Err(ConnectionStoreError::NotFound(id.to_string()));
        }
        self.write(&connections)
    }

    fn storage_path(&self) -> PathBuf {
        self.config_file_path()
    }
}
