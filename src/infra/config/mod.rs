pub mod app_config;
pub mod connection_config;
pub mod query_config;

pub use app_config::{
    CONFIG_DIR_ENV, ConfigError, config_dir_from_env, default_config_dir, load_app_config,
    storage_dir,
};
