//! Broker API endpoints

use std::fmt;

/// The four broker endpoints read on every scrape
///
/// Declaration order is the error precedence of a collection cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Per-node health and resource status
    NodeStatus,
    /// Per-node MQTT protocol counters
    ProtocolCounters,
    /// Per-node broker resource stats
    BrokerStats,
    /// Cluster-wide membership list
    ClusterMembership,
}

impl Endpoint {
    /// All endpoints in error precedence order
    pub const ALL: [Endpoint; 4] = [
        Endpoint::NodeStatus,
        Endpoint::ProtocolCounters,
        Endpoint::BrokerStats,
        Endpoint::ClusterMembership,
    ];

    /// Stable name used in errors and logs
    pub fn name(self) -> &'static str {
        match self {
            Self::NodeStatus => "nodes",
            Self::ProtocolCounters => "metrics",
            Self::BrokerStats => "stats",
            Self::ClusterMembership => "management",
        }
    }

    /// Request path for `node`
    ///
    /// The membership endpoint is cluster-wide and ignores `node`.
    pub fn path(self, node: &str) -> String {
        match self {
            Self::NodeStatus => format!("/api/v2/monitoring/nodes/{node}"),
            Self::ProtocolCounters => format!("/api/v2/monitoring/metrics/{node}"),
            Self::BrokerStats => format!("/api/v2/monitoring/stats/{node}"),
            Self::ClusterMembership => "/api/v2/management/nodes".to_string(),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
