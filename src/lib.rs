//! clickmate: editor tabs and connection settings for a ClickHouse SQL client.
//!
//! The state lives in [`app::state::AppState`] and only changes through
//! [`app::reducer::reduce`]. Work that touches the outside world comes back as
//! [`app::effect::Effect`]s, which [`app::effect_runner::EffectRunner`] executes
//! against the ports in [`app::ports`]. [`infra`] provides TOML-backed ports and
//! configuration loading.

pub use clickmate_app as app;
pub use clickmate_domain as domain;
pub use clickmate_infra as infra;
