//! Value objects
//!
//! - **schema** - broker JSON payloads
//! - **endpoint** - the four broker endpoints and their paths
//! - **snapshot** - combined per-scrape data
//! - **metric** - metric definitions and emitted samples

pub mod endpoint;
pub mod metric;
pub mod schema;
pub mod snapshot;

pub use endpoint::Endpoint;
pub use metric::{ExtractFn, MetricDefinition, MetricKind, Sample, Subsystem, fq_name};
pub use schema::{
    ApiResponse, BrokerStats, BrokerStatsResponse, ClusterMembership, ClusterNode, NodeStatus,
    NodeStatusResponse, ProtocolCounters, ProtocolCountersResponse,
};
pub use snapshot::{Snapshot, SnapshotLabels};
