//! Fake broker and fixtures shared by the application tests

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use emq_application::{BrokerCollector, MetricRegistry, ScrapeCounters};
use emq_domain::error::{Error, Result};
use emq_domain::{
    ApiResponse, BrokerApi, BrokerStats, BrokerStatsResponse, ClusterMembership, ClusterNode,
    Endpoint, ExpositionSink, NodeStatus, NodeStatusResponse, ProtocolCounters,
    ProtocolCountersResponse, Sample, Snapshot,
};

pub const NODE: &str = "emq@127.0.0.1";

/// Sink that keeps samples in memory in emission order
#[derive(Debug, Default)]
pub struct RecordingSink {
    samples: Vec<Sample>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Sample by fully qualified name
    pub fn get(&self, name: &str) -> Option<&Sample> {
        self.samples.iter().find(|sample| sample.name == name)
    }

    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}

impl ExpositionSink for RecordingSink {
    fn emit(&mut self, sample: Sample) {
        self.samples.push(sample);
    }
}

/// How a fake endpoint fails
#[derive(Debug, Clone, Copy)]
pub enum Failure {
    Transport,
    Status(u16),
    Decode,
}

impl Failure {
    fn into_error(self, endpoint: Endpoint) -> Error {
        match self {
            Self::Transport => Error::transport(endpoint.name(), "connection refused"),
            Self::Status(status) => Error::http_status(endpoint.name(), status),
            Self::Decode => Error::decode_with_source(
                endpoint.name(),
                "expected value",
                std::io::Error::other("malformed body"),
            ),
        }
    }
}

/// In-memory broker returning canned payloads
#[derive(Debug, Clone)]
pub struct FakeBroker {
    pub node_status: NodeStatusResponse,
    pub protocol_counters: ProtocolCountersResponse,
    pub broker_stats: BrokerStatsResponse,
    pub membership: ClusterMembership,
    pub failures: HashMap<Endpoint, Failure>,
    pub calls: Arc<AtomicUsize>,
}

impl FakeBroker {
    pub fn healthy() -> Self {
        Self {
            node_status: ApiResponse {
                result: NodeStatus {
                    name: NODE.to_string(),
                    otp_release: "R20/9.3".to_string(),
                    node_status: "Running".to_string(),
                    memory_total: "128.5MB".to_string(),
                    memory_used: "64MB".to_string(),
                    process_available: 262_144,
                    process_used: 320,
                    max_fds: 7_168,
                    ..NodeStatus::default()
                },
                code: 0,
            },
            protocol_counters: ApiResponse {
                result: ProtocolCounters {
                    packets_disconnect: 4,
                    packets_connect: 12,
                    bytes_received: 2_048,
                    bytes_sent: 4_096,
                    ..ProtocolCounters::default()
                },
                code: 0,
            },
            broker_stats: ApiResponse {
                result: BrokerStats {
                    clients_count: 7,
                    subscribers_count: 5,
                    subscriptions_count: 9,
                    topics_count: 3,
                    ..BrokerStats::default()
                },
                code: 0,
            },
            membership: ApiResponse {
                result: vec![
                    member("emq@10.0.0.2", "2.3.10"),
                    member(NODE, "2.3.11"),
                    member("emq@10.0.0.3", "2.3.10"),
                ],
                code: 0,
            },
            failures: HashMap::new(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(mut self, endpoint: Endpoint, failure: Failure) -> Self {
        self.failures.insert(endpoint, failure);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn respond<T: Clone>(&self, endpoint: Endpoint, payload: &T) -> Result<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failures.get(&endpoint) {
            Some(failure) => Err(failure.into_error(endpoint)),
            None => Ok(payload.clone()),
        }
    }
}

#[async_trait]
impl BrokerApi for FakeBroker {
    async fn node_status(&self) -> Result<NodeStatusResponse> {
        self.respond(Endpoint::NodeStatus, &self.node_status)
    }

    async fn protocol_counters(&self) -> Result<ProtocolCountersResponse> {
        self.respond(Endpoint::ProtocolCounters, &self.protocol_counters)
    }

    async fn broker_stats(&self) -> Result<BrokerStatsResponse> {
        self.respond(Endpoint::BrokerStats, &self.broker_stats)
    }

    async fn cluster_membership(&self) -> Result<ClusterMembership> {
        self.respond(Endpoint::ClusterMembership, &self.membership)
    }

    fn node(&self) -> &str {
        NODE
    }
}

pub fn member(name: &str, version: &str) -> ClusterNode {
    ClusterNode {
        name: name.to_string(),
        version: version.to_string(),
        ..ClusterNode::default()
    }
}

pub fn collector(broker: FakeBroker) -> BrokerCollector {
    BrokerCollector::new(
        Arc::new(broker),
        Arc::new(MetricRegistry::standard()),
        ScrapeCounters::new_shared(),
    )
}

pub fn healthy_snapshot() -> Snapshot {
    let broker = FakeBroker::healthy();
    Snapshot::assemble(
        NODE,
        broker.node_status,
        broker.protocol_counters,
        broker.broker_stats,
        &broker.membership,
    )
}
