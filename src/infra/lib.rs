//! Infrastructure layer: TOML-backed stores and configuration loading.

pub use clickmate_app as app;
pub use clickmate_domain as domain;

pub mod adapters;
pub mod config;
