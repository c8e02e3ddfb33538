use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::app::config::AppConfig;

pub const CONFIG_DIR_ENV: &str = "CLICKMATE_CONFIG_DIR";
pub const CONFIG_FILE_NAME: &str = "config.toml";
const APP_DIR_NAME: &str = "clickmate";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(String),
    #[error("Invalid config format: {0}")]
    InvalidFormat(String),
    #[error("Could not find config directory")]
    NoConfigDir,
}

pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    let config_base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(config_base.join(APP_DIR_NAME))
}

/// `$CLICKMATE_CONFIG_DIR` when set and non-empty, the platform config dir otherwise.
pub fn config_dir_from_env() -> Result<PathBuf, ConfigError> {
    config_dir_from(std::env::var_os(CONFIG_DIR_ENV))
}

fn config_dir_from(value: Option<OsString>) -> Result<PathBuf, ConfigError> {
    match value {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => default_config_dir(),
    }
}

/// Reads `config.toml` from `dir`. A missing file yields the defaults.
pub fn load_app_config(dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(&path).map_err(|e| ConfigError::Read(e.to_string()))?;
    toml::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
}

/// Directory holding `connections.toml` and `queries.toml`.
pub fn storage_dir(config: &AppConfig, config_dir: &Path) -> PathBuf {
    config
        .storage
        .dir
        .clone()
        .unwrap_or_else(|| config_dir.to_path_buf())
}
