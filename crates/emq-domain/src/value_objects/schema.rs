//! Broker API response schema
//!
//! Typed shapes of the four JSON payloads returned by the broker's HTTP
//! management API. Every payload is wrapped as `{ "result": ..., "code": ... }`.
//! Missing fields decode to zero/empty: the broker omits counters it has
//! never incremented.

use serde::{Deserialize, Serialize};

use crate::constants::BROKER_SUCCESS_CODE;

/// Envelope around every broker payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiResponse<T> {
    /// Endpoint-specific payload
    pub result: T,
    /// Broker status code, `0` on success
    pub code: i64,
}

impl<T> ApiResponse<T> {
    /// Whether the broker reported a logical success
    pub fn is_success(&self) -> bool {
        self.code == BROKER_SUCCESS_CODE
    }
}

/// `/api/v2/monitoring/nodes/{node}` payload
pub type NodeStatusResponse = ApiResponse<NodeStatus>;

/// `/api/v2/monitoring/metrics/{node}` payload
pub type ProtocolCountersResponse = ApiResponse<ProtocolCounters>;

/// `/api/v2/monitoring/stats/{node}` payload
pub type BrokerStatsResponse = ApiResponse<BrokerStats>;

/// `/api/v2/management/nodes` payload
pub type ClusterMembership = ApiResponse<Vec<ClusterNode>>;

/// Health and resource snapshot of a single node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeStatus {
    /// Node name, e.g. `emq@127.0.0.1`
    pub name: String,
    /// Erlang/OTP release string
    pub otp_release: String,
    /// Node status string, e.g. `Running`
    pub node_status: String,
    /// Total memory as a formatted string, e.g. `128.5MB`
    pub memory_total: String,
    /// Used memory as a formatted string
    pub memory_used: String,
    /// Erlang processes available
    pub process_available: i64,
    /// Erlang processes in use
    pub process_used: i64,
    /// Maximum file descriptors
    pub max_fds: i64,
    /// Connected clients
    pub clients: i64,
    /// One minute load average
    pub load1: String,
    /// Five minute load average
    pub load5: String,
    /// Fifteen minute load average
    pub load15: String,
}

/// Flat MQTT protocol counters of a node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtocolCounters {
    #[serde(rename = "bytes/received")]
    pub bytes_received: i64,
    #[serde(rename = "bytes/sent")]
    pub bytes_sent: i64,

    #[serde(rename = "messages/dropped")]
    pub messages_dropped: i64,
    #[serde(rename = "messages/received")]
    pub messages_received: i64,
    #[serde(rename = "messages/retained")]
    pub messages_retained: i64,
    #[serde(rename = "messages/sent")]
    pub messages_sent: i64,
    #[serde(rename = "messages/qos0/received")]
    pub messages_qos0_received: i64,
    #[serde(rename = "messages/qos0/sent")]
    pub messages_qos0_sent: i64,
    #[serde(rename = "messages/qos1/received")]
    pub messages_qos1_received: i64,
    #[serde(rename = "messages/qos1/sent")]
    pub messages_qos1_sent: i64,
    #[serde(rename = "messages/qos2/dropped")]
    pub messages_qos2_dropped: i64,
    #[serde(rename = "messages/qos2/received")]
    pub messages_qos2_received: i64,
    #[serde(rename = "messages/qos2/sent")]
    pub messages_qos2_sent: i64,

    #[serde(rename = "packets/connack")]
    pub packets_connack: i64,
    #[serde(rename = "packets/connect")]
    pub packets_connect: i64,
    #[serde(rename = "packets/disconnect")]
    pub packets_disconnect: i64,
    #[serde(rename = "packets/pingreq")]
    pub packets_pingreq: i64,
    #[serde(rename = "packets/pingresp")]
    pub packets_pingresp: i64,
    #[serde(rename = "packets/puback/missed")]
    pub packets_puback_missed: i64,
    #[serde(rename = "packets/puback/received")]
    pub packets_puback_received: i64,
    #[serde(rename = "packets/puback/sent")]
    pub packets_puback_sent: i64,
    #[serde(rename = "packets/pubcomp/missed")]
    pub packets_pubcomp_missed: i64,
    #[serde(rename = "packets/pubcomp/received")]
    pub packets_pubcomp_received: i64,
    #[serde(rename = "packets/pubcomp/sent")]
    pub packets_pubcomp_sent: i64,
    #[serde(rename = "packets/publish/received")]
    pub packets_publish_received: i64,
    #[serde(rename = "packets/publish/sent")]
    pub packets_publish_sent: i64,
    #[serde(rename = "packets/pubrec/missed")]
    pub packets_pubrec_missed: i64,
    #[serde(rename = "packets/pubrec/received")]
    pub packets_pubrec_received: i64,
    #[serde(rename = "packets/pubrec/sent")]
    pub packets_pubrec_sent: i64,
    #[serde(rename = "packets/pubrel/missed")]
    pub packets_pubrel_missed: i64,
    #[serde(rename = "packets/pubrel/received")]
    pub packets_pubrel_received: i64,
    #[serde(rename = "packets/pubrel/sent")]
    pub packets_pubrel_sent: i64,
    #[serde(rename = "packets/received")]
    pub packets_received: i64,
    #[serde(rename = "packets/sent")]
    pub packets_sent: i64,
    #[serde(rename = "packets/suback")]
    pub packets_suback: i64,
    #[serde(rename = "packets/subscribe")]
    pub packets_subscribe: i64,
    #[serde(rename = "packets/unsuback")]
    pub packets_unsuback: i64,
    #[serde(rename = "packets/unsubscribe")]
    pub packets_unsubscribe: i64,
}

/// Count/max pairs for broker-managed resources
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrokerStats {
    #[serde(rename = "clients/count")]
    pub clients_count: i64,
    #[serde(rename = "clients/max")]
    pub clients_max: i64,
    #[serde(rename = "retained/count")]
    pub retained_count: i64,
    #[serde(rename = "retained/max")]
    pub retained_max: i64,
    #[serde(rename = "routes/count")]
    pub routes_count: i64,
    #[serde(rename = "routes/max")]
    pub routes_max: i64,
    #[serde(rename = "sessions/count")]
    pub sessions_count: i64,
    #[serde(rename = "sessions/max")]
    pub sessions_max: i64,
    #[serde(rename = "subscribers/count")]
    pub subscribers_count: i64,
    #[serde(rename = "subscribers/max")]
    pub subscribers_max: i64,
    #[serde(rename = "subscriptions/count")]
    pub subscriptions_count: i64,
    #[serde(rename = "subscriptions/max")]
    pub subscriptions_max: i64,
    #[serde(rename = "topics/count")]
    pub topics_count: i64,
    #[serde(rename = "topics/max")]
    pub topics_max: i64,
}

/// One record of the cluster membership list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterNode {
    /// Node name
    pub name: String,
    /// Broker version
    pub version: String,
    /// Broker system description
    pub sysdescr: String,
    /// Human readable uptime
    pub uptime: String,
    /// Boot time
    pub datetime: String,
    /// Erlang/OTP release string
    pub otp_release: String,
    /// Node status string
    pub node_status: String,
}

impl ClusterMembership {
    /// Number of nodes in the cluster
    pub fn size(&self) -> usize {
        self.result.len()
    }

    /// First record whose name equals `node` exactly
    pub fn find(&self, node: &str) -> Option<&ClusterNode> {
        self.result.iter().find(|member| member.name == node)
    }
}
