//! Infrastructure constants
//!
//! Defaults follow the exporter's long-standing command-line flags.

// ============================================================================
// CONFIGURATION FILES
// ============================================================================

/// Configuration file looked up when no `--config` is given
pub const DEFAULT_CONFIG_FILENAME: &str = "emq-exporter.toml";

/// Directory name used under the current and user config directories
pub const DEFAULT_CONFIG_DIR: &str = "emq-exporter";

/// Environment prefix; nested keys are separated by `__`
pub const CONFIG_ENV_PREFIX: &str = "EMQ_EXPORTER";

/// Separator of nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// SERVER
// ============================================================================

/// Address the exporter listens on; an empty host binds all interfaces
pub const DEFAULT_LISTEN_ADDRESS: &str = ":9444";

/// Path under which metrics are exposed
pub const DEFAULT_TELEMETRY_PATH: &str = "/metrics";

// ============================================================================
// BROKER
// ============================================================================

/// Broker management API base URI
pub const DEFAULT_BROKER_URI: &str = "http://127.0.0.1:8080";

/// Broker API username
pub const DEFAULT_BROKER_USERNAME: &str = "admin";

/// Broker API password
pub const DEFAULT_BROKER_PASSWORD: &str = "public";

/// Broker node to scrape
pub const DEFAULT_BROKER_NODE: &str = "emq@127.0.0.1";

// ============================================================================
// LOGGING
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "EMQ_EXPORTER_LOG";

/// File name prefix of rolled log files
pub const LOG_FILE_PREFIX: &str = "emq-exporter";

// ============================================================================
// EXPOSITION
// ============================================================================

/// Build info gauge name
pub const BUILD_INFO_METRIC: &str = "emq_exporter_build_info";

/// Build info gauge help
pub const BUILD_INFO_HELP: &str =
    "A metric with a constant '1' value labeled by the version of the exporter.";

/// Exporter version reported by the build info gauge
pub const EXPORTER_VERSION: &str = env!("CARGO_PKG_VERSION");
