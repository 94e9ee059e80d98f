//! Top-level application configuration

use serde::{Deserialize, Serialize};

use super::{BrokerConfig, LoggingConfig, ServerConfig};

/// Exporter configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Exposition HTTP server
    pub server: ServerConfig,

    /// Broker management API
    pub broker: BrokerConfig,

    /// Logging
    pub logging: LoggingConfig,
}
