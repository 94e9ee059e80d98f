//! Combined per-scrape snapshot

use super::schema::{
    BrokerStatsResponse, ClusterMembership, NodeStatusResponse, ProtocolCountersResponse,
};

/// Everything one collection cycle read from the broker
///
/// Assembled once per cycle from four successful fetches and never shared
/// between cycles, so every sample of a scrape comes from the same instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Node status payload
    pub node: NodeStatusResponse,
    /// Protocol counters payload
    pub metrics: ProtocolCountersResponse,
    /// Broker stats payload
    pub stats: BrokerStatsResponse,
    /// Number of records in the cluster membership list
    pub cluster_size: usize,
    /// Version of the membership record matching the scraped node, empty if none
    pub version: String,
}

impl Snapshot {
    /// Combine the four payloads for the configured `node`
    ///
    /// The version is taken from the first membership record whose name
    /// equals `node`. A missing record leaves it empty.
    pub fn assemble(
        node_name: &str,
        node: NodeStatusResponse,
        metrics: ProtocolCountersResponse,
        stats: BrokerStatsResponse,
        membership: &ClusterMembership,
    ) -> Self {
        let version = membership
            .find(node_name)
            .map(|member| member.version.clone())
            .unwrap_or_default();

        Self {
            node,
            metrics,
            stats,
            cluster_size: membership.size(),
            version,
        }
    }

    /// Whether the node status payload carried the success code
    pub fn is_healthy(&self) -> bool {
        self.node.is_success()
    }

    /// Label values attached to every per-metric sample
    pub fn labels(&self) -> SnapshotLabels {
        SnapshotLabels {
            node: self.node.result.name.clone(),
            otp_release: self.node.result.otp_release.clone(),
            version: self.version.clone(),
        }
    }
}

/// Label values of one scrape: `{node, otp_release, version}`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotLabels {
    pub node: String,
    pub otp_release: String,
    pub version: String,
}

impl SnapshotLabels {
    /// Label pairs in `DEFAULT_LABELS` order
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        use crate::constants::{LABEL_NODE, LABEL_OTP_RELEASE, LABEL_VERSION};
        vec![
            (LABEL_NODE, self.node.clone()),
            (LABEL_OTP_RELEASE, self.otp_release.clone()),
            (LABEL_VERSION, self.version.clone()),
        ]
    }
}
