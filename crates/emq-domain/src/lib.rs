//! # EMQ Exporter Domain
//!
//! Core types shared by every layer of the exporter.
//!
//! ## Contents
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Broker response schema, snapshot, metric definitions and samples |
//! | [`ports`] | `BrokerApi` and `ExpositionSink` boundaries |
//! | [`error`] | Fetch failure taxonomy and crate-wide `Result` |
//! | [`constants`] | Metric namespace, label names, broker status codes |
//!
//! This crate performs no I/O. The broker client lives in `emq-providers`,
//! the Prometheus rendering in `emq-infrastructure`.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{BrokerApi, ExpositionSink};
pub use value_objects::{
    ApiResponse, BrokerStats, BrokerStatsResponse, ClusterMembership, ClusterNode, Endpoint,
    MetricDefinition, MetricKind, NodeStatus, NodeStatusResponse, ProtocolCounters,
    ProtocolCountersResponse, Sample, Snapshot, SnapshotLabels, Subsystem,
};
