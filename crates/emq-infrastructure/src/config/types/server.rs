//! Server configuration types

use std::net::{IpAddr, Ipv4Addr};

use emq_domain::error::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LISTEN_ADDRESS, DEFAULT_TELEMETRY_PATH};

/// Exposition server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// `[host]:port` to listen on
    pub listen_address: String,

    /// Path under which metrics are exposed
    pub telemetry_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: DEFAULT_LISTEN_ADDRESS.to_string(),
            telemetry_path: DEFAULT_TELEMETRY_PATH.to_string(),
        }
    }
}

impl ServerConfig {
    /// Address and port to bind
    pub fn socket_address(&self) -> Result<(IpAddr, u16)> {
        parse_listen_address(&self.listen_address)
    }
}

/// Parse `[host]:port`
///
/// An empty host binds all IPv4 interfaces, `localhost` binds loopback and
/// IPv6 hosts are written in brackets (`[::1]:9444`).
pub fn parse_listen_address(address: &str) -> Result<(IpAddr, u16)> {
    let invalid = |reason: &str| {
        Error::configuration(format!("Invalid listen address '{address}': {reason}"))
    };

    let (host, port) = address
        .rsplit_once(':')
        .ok_or_else(|| invalid("expected [host]:port"))?;

    let port: u16 = port.parse().map_err(|_| invalid("port is not a number"))?;
    if port == 0 {
        return Err(invalid("port cannot be 0"));
    }

    let host = host.trim_start_matches('[').trim_end_matches(']');
    let ip = match host {
        "" => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        "localhost" => IpAddr::V4(Ipv4Addr::LOCALHOST),
        other => other
            .parse()
            .map_err(|_| invalid("host is not an IP address"))?,
    };

    Ok((ip, port))
}
