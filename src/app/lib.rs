//! Application layer: tab store, reducers, effects and the ports they run against.

pub use clickmate_domain as domain;

pub mod action;
pub mod config;
pub mod connection_dialog_state;
pub mod effect;
pub mod effect_runner;
pub mod ports;
pub mod reducer;
pub mod reducers;
pub mod state;
pub mod tab_id_generator;
pub mod tab_store;
pub mod toast;
