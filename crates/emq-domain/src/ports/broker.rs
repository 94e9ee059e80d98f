//! Broker API Port
//!
//! Defines the contract for reading the broker's HTTP management API.

use crate::error::Result;
use crate::value_objects::{
    BrokerStatsResponse, ClusterMembership, NodeStatusResponse, ProtocolCountersResponse,
};
use async_trait::async_trait;

/// Broker management API interface
///
/// Each operation is independent and separately fallible with
/// `Transport`, `HttpStatus` or `Decode`. Implementations must not retry.
#[async_trait]
pub trait BrokerApi: Send + Sync {
    /// Fetch the node status payload
    async fn node_status(&self) -> Result<NodeStatusResponse>;

    /// Fetch the protocol counters payload
    async fn protocol_counters(&self) -> Result<ProtocolCountersResponse>;

    /// Fetch the broker stats payload
    async fn broker_stats(&self) -> Result<BrokerStatsResponse>;

    /// Fetch the cluster membership list
    async fn cluster_membership(&self) -> Result<ClusterMembership>;

    /// Node identifier this client scrapes
    fn node(&self) -> &str;
}
