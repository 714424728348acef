//! Configuration and process-wide lifecycle of the adapter.

pub mod config;
pub mod shared;

pub use config::{AdapterConfig, BackendPreference, ConfigError};
pub use shared::{install_adapter, is_initialized, reset_adapter, shared_adapter};
