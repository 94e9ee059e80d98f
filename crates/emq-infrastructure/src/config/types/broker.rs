//! Broker configuration types

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BROKER_NODE, DEFAULT_BROKER_PASSWORD, DEFAULT_BROKER_URI, DEFAULT_BROKER_USERNAME,
};

/// Broker management API configuration
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrokerConfig {
    /// Base URI; only scheme and authority are used
    pub uri: String,

    /// Basic auth username
    pub username: String,

    /// Basic auth password
    pub password: String,

    /// Node to scrape
    pub node: String,

    /// Per-request timeout in seconds, none by default
    pub timeout_secs: Option<u64>,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_BROKER_URI.to_string(),
            username: DEFAULT_BROKER_USERNAME.to_string(),
            password: DEFAULT_BROKER_PASSWORD.to_string(),
            node: DEFAULT_BROKER_NODE.to_string(),
            timeout_secs: None,
        }
    }
}

impl BrokerConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl fmt::Debug for BrokerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrokerConfig")
            .field("uri", &self.uri)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("node", &self.node)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
