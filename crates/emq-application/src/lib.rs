//! Application Layer - EMQ Exporter
//!
//! Turns broker payloads into metric samples.
//!
//! ## Contents
//!
//! - [`registry`]: the fixed, ordered table of metric definitions
//! - [`extraction`]: numeric extraction from formatted broker strings
//! - [`counters`]: process-wide scrape counters
//! - [`use_cases`]: the collection cycle run once per scrape request
//!
//! ## Dependencies
//!
//! This crate depends only on `emq-domain`. The broker client and the
//! Prometheus encoder are injected through the domain ports.

pub mod counters;
pub mod extraction;
pub mod registry;
pub mod use_cases;

pub use counters::ScrapeCounters;
pub use registry::MetricRegistry;
pub use use_cases::{BrokerCollector, ScrapeOutcome};
