//! Command-line interface

use std::path::PathBuf;

use clap::Parser;
use emq_infrastructure::ConfigOverrides;

/// Prometheus exporter for the EMQ broker management API
#[derive(Parser, Debug, Default)]
#[command(name = "emq-exporter")]
#[command(about = "Prometheus exporter for EMQ broker metrics")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address on which to expose metrics and web interface
    #[arg(long = "web.listen-address", value_name = "ADDRESS")]
    pub listen_address: Option<String>,

    /// Path under which to expose metrics
    #[arg(long = "web.telemetry-path", value_name = "PATH")]
    pub telemetry_path: Option<String>,

    /// HTTP API address of the EMQ node
    #[arg(long = "emq.uri", value_name = "URI")]
    pub broker_uri: Option<String>,

    /// EMQ API username
    #[arg(long = "emq.username", value_name = "USERNAME")]
    pub broker_username: Option<String>,

    /// EMQ API password
    #[arg(long = "emq.password", value_name = "PASSWORD")]
    pub broker_password: Option<String>,

    /// Name of the EMQ node to scrape
    #[arg(long = "emq.node", value_name = "NODE")]
    pub broker_node: Option<String>,

    /// Timeout of each broker request in seconds
    #[arg(long = "emq.timeout", value_name = "SECONDS")]
    pub broker_timeout_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long = "log.level", value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Flags given explicitly, as configuration overrides
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            listen_address: self.listen_address.clone(),
            telemetry_path: self.telemetry_path.clone(),
            broker_uri: self.broker_uri.clone(),
            broker_username: self.broker_username.clone(),
            broker_password: self.broker_password.clone(),
            broker_node: self.broker_node.clone(),
            broker_timeout_secs: self.broker_timeout_secs,
            log_level: self.log_level.clone(),
        }
    }
}
