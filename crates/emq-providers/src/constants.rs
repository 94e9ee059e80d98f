//! Provider constants

/// User agent sent with every broker request
pub const BROKER_USER_AGENT: &str = concat!("emq-exporter/", env!("CARGO_PKG_VERSION"));

/// The only HTTP status accepted from the broker
pub const BROKER_OK_STATUS: u16 = 200;
