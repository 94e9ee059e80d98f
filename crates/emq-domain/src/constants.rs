//! Domain constants
//!
//! Names that form the contract with dashboards and with the broker API.
//! Changing any of these changes the exposed metric surface.

// ============================================================================
// METRIC NAMING
// ============================================================================

/// Namespace prefix of every exposed series
pub const METRIC_NAMESPACE: &str = "emq";

/// Label name carrying the broker node name
pub const LABEL_NODE: &str = "node";

/// Label name carrying the Erlang/OTP release of the node
pub const LABEL_OTP_RELEASE: &str = "otp_release";

/// Label name carrying the broker version from cluster membership
pub const LABEL_VERSION: &str = "version";

/// Label names attached to every per-metric sample, in order
pub const DEFAULT_LABELS: [&str; 3] = [LABEL_NODE, LABEL_OTP_RELEASE, LABEL_VERSION];

// ============================================================================
// META SERIES
// ============================================================================

/// Health gauge name (without namespace/subsystem)
pub const META_UP: &str = "up";

/// Total scrapes counter name (without namespace/subsystem)
pub const META_TOTAL_SCRAPES: &str = "total_scrapes";

/// JSON parse failures counter name (without namespace/subsystem)
pub const META_JSON_PARSE_FAILURES: &str = "json_parse_failures";

/// Help text of the health gauge
pub const META_UP_HELP: &str = "Was the last scrape of the EMQ node successful.";

/// Help text of the total scrapes counter
pub const META_TOTAL_SCRAPES_HELP: &str = "Current total scrapes.";

/// Help text of the JSON parse failures counter
pub const META_JSON_PARSE_FAILURES_HELP: &str = "Number of errors while parsing JSON.";

// ============================================================================
// BROKER API
// ============================================================================

/// Status code embedded in broker payloads that signals a healthy node
pub const BROKER_SUCCESS_CODE: i64 = 0;

/// Scale applied to memory fields reported in megabytes
pub const MEMORY_SCALE: f64 = 1_000_000.0;
