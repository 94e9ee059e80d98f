//! Domain Port Interfaces
//!
//! Boundaries the collection cycle talks through:
//!
//! - **broker** - reading the broker's HTTP management API
//! - **sink** - handing samples to the metrics exposition layer

pub mod broker;
pub mod sink;

pub use broker::BrokerApi;
pub use sink::ExpositionSink;
