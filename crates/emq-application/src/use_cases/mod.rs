//! Use Cases
//!
//! - [`collector`]: one collection cycle per scrape request

pub mod collector;

pub use collector::{BrokerCollector, ScrapeOutcome};
