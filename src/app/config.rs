use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::tab_store::TabStoreOptions;
use crate::toast::ToastConfig;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Overrides where `connections.toml` and `queries.toml` live.
    pub dir: Option<PathBuf>,
}

/// Contents of `config.toml`. Every section is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tabs: TabStoreOptions,
    pub toasts: ToastConfig,
    pub storage: StorageConfig,
}
