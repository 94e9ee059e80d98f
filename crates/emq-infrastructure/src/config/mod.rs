//! Configuration
//!
//! Sources, later overriding earlier: serialized defaults, TOML file,
//! `EMQ_EXPORTER__*` environment variables, command-line flags.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader, ConfigOverrides, validate_app_config};
pub use types::{AppConfig, BrokerConfig, LoggingConfig, ServerConfig};
