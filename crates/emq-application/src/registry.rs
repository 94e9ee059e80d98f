//! Metric Registry
//!
//! The ordered table of metric definitions exposed for every successful
//! scrape. Built once at startup; the order here is the emission order.
//!
//! `emq_stats_subscriptions` reads the subscribers counter, the same value
//! as `emq_stats_subscribers`. Both names are kept because dashboards query
//! them.

use emq_domain::{MetricDefinition, Snapshot, Subsystem};

use crate::extraction::memory_value;

/// Table row: subsystem, name, help, value expression over the snapshot `s`
macro_rules! gauge {
    ($subsystem:ident, $name:literal, $help:literal, |$s:ident| $value:expr) => {
        MetricDefinition::gauge(Subsystem::$subsystem, $name, $help, |$s: &Snapshot| {
            $value
        })
    };
}

/// Immutable, ordered collection of metric definitions
#[derive(Debug, Clone)]
pub struct MetricRegistry {
    definitions: Vec<MetricDefinition>,
}

impl MetricRegistry {
    /// Registry with the given definitions, in order
    pub fn new(definitions: Vec<MetricDefinition>) -> Self {
        Self { definitions }
    }

    /// The exporter's metric surface
    #[allow(clippy::too_many_lines)]
    pub fn standard() -> Self {
        Self::new(vec![
            gauge!(Cluster, "size", "The total number of EMQ nodes in your cluster.", |s| {
                s.cluster_size as f64
            }),
            // Node status
            gauge!(Node, "process_used", "The amount of processes used by the EMQ node.", |s| {
                s.node.result.process_used as f64
            }),
            gauge!(Node, "process_available", "The amount of processes available to the EMQ node.", |s| {
                s.node.result.process_available as f64
            }),
            gauge!(Node, "max_fds", "The amount of file descriptors available to the EMQ node.", |s| {
                s.node.result.max_fds as f64
            }),
            gauge!(Node, "memory_total", "The max amount of memory used to the EMQ node.", |s| {
                memory_value("memory_total", &s.node.result.memory_total)
            }),
            gauge!(Node, "memory_used", "The amount of memory being used to the EMQ node.", |s| {
                memory_value("memory_used", &s.node.result.memory_used)
            }),
            // Protocol counters
            gauge!(Metric, "packets_disconnected", "The amount of packets disconnected", |s| {
                s.metrics.result.packets_disconnect as f64
            }),
            gauge!(Metric, "messages_qos2_received", "The amount of packets QOS2 messages received", |s| {
                s.metrics.result.messages_qos2_received as f64
            }),
            gauge!(Metric, "packets_suback", "The amount of packets suback", |s| {
                s.metrics.result.packets_suback as f64
            }),
            gauge!(Metric, "packets_pubcomp_received", "The amount of packets pubcomp received", |s| {
                s.metrics.result.packets_pubcomp_received as f64
            }),
            gauge!(Metric, "packets_unsuback", "The amount of packets unsuback", |s| {
                s.metrics.result.packets_unsuback as f64
            }),
            gauge!(Metric, "packets_pingresp", "The amount of packets pingresp", |s| {
                s.metrics.result.packets_pingresp as f64
            }),
            gauge!(Metric, "packets_pingreq", "The amount of packets pingreq", |s| {
                s.metrics.result.packets_pingreq as f64
            }),
            gauge!(Metric, "packets_pubrel_missed", "The amount of packets pubrel missed", |s| {
                s.metrics.result.packets_pubrel_missed as f64
            }),
            gauge!(Metric, "packets_sent", "The amount of packets sent", |s| {
                s.metrics.result.packets_sent as f64
            }),
            gauge!(Metric, "messages_qos2_sent", "The amount of QOS2 messages sent", |s| {
                s.metrics.result.messages_qos2_sent as f64
            }),
            gauge!(Metric, "packets_pubrec_missed", "The amount of packets pubrec missed", |s| {
                s.metrics.result.packets_pubrec_missed as f64
            }),
            // Help text mirrors the long-published series description.
            gauge!(Metric, "packets_unsubscribe", "The amount of packets disconnected", |s| {
                s.metrics.result.packets_unsubscribe as f64
            }),
            gauge!(Metric, "bytes_received", "The amount of bytes received", |s| {
                s.metrics.result.bytes_received as f64
            }),
            gauge!(Metric, "packets_connack", "The amount of packets connack", |s| {
                s.metrics.result.packets_connack as f64
            }),
            gauge!(Metric, "messages_received", "The amount of messages received", |s| {
                s.metrics.result.messages_received as f64
            }),
            gauge!(Metric, "messages_dropped", "The amount of messages dropped", |s| {
                s.metrics.result.messages_dropped as f64
            }),
            gauge!(Metric, "packets_pubrec_sent", "The amount of packets pubrec sent", |s| {
                s.metrics.result.packets_pubrec_sent as f64
            }),
            gauge!(Metric, "messages_retained", "The amount of messages retained", |s| {
                s.metrics.result.messages_retained as f64
            }),
            gauge!(Metric, "packets_publish_received", "The amount of packets publish received", |s| {
                s.metrics.result.packets_publish_received as f64
            }),
            gauge!(Metric, "packets_pubcomp_sent", "The amount of packets pubcomp sent", |s| {
                s.metrics.result.packets_pubcomp_sent as f64
            }),
            gauge!(Metric, "packets_connect", "The amount of packets connect", |s| {
                s.metrics.result.packets_connect as f64
            }),
            gauge!(Metric, "packets_puback_received", "The amount of packets puback received", |s| {
                s.metrics.result.packets_puback_received as f64
            }),
            gauge!(Metric, "messages_sent", "The amount of messages sent", |s| {
                s.metrics.result.messages_sent as f64
            }),
            gauge!(Metric, "packets_publish_sent", "The amount of packets publish sent", |s| {
                s.metrics.result.packets_publish_sent as f64
            }),
            gauge!(Metric, "bytes_sent", "The amount of bytes sent", |s| {
                s.metrics.result.bytes_sent as f64
            }),
            gauge!(Metric, "packets_puback_sent", "The amount of packets puback sent", |s| {
                s.metrics.result.packets_puback_sent as f64
            }),
            gauge!(Metric, "messages_qos2_dropped", "The amount of QOS2 messages dropped", |s| {
                s.metrics.result.messages_qos2_dropped as f64
            }),
            gauge!(Metric, "packets_pubrel_sent", "The amount of packets pubrel sent", |s| {
                s.metrics.result.packets_pubrel_sent as f64
            }),
            gauge!(Metric, "messages_qos1_sent", "The amount of QOS1 messages sent", |s| {
                s.metrics.result.messages_qos1_sent as f64
            }),
            gauge!(Metric, "packets_pubrel_received", "The amount of packets pubrel received", |s| {
                s.metrics.result.packets_pubrel_received as f64
            }),
            gauge!(Metric, "messages_qos1_received", "The amount of QOS1 messages received", |s| {
                s.metrics.result.messages_qos1_received as f64
            }),
            gauge!(Metric, "messages_qos0_sent", "The amount of QOS0 messages sent", |s| {
                s.metrics.result.messages_qos0_sent as f64
            }),
            gauge!(Metric, "packets_received", "The amount of packets received", |s| {
                s.metrics.result.packets_received as f64
            }),
            gauge!(Metric, "packets_pubrec_received", "The amount of packets pubrec received", |s| {
                s.metrics.result.packets_pubrec_received as f64
            }),
            gauge!(Metric, "packets_pubcomp_missed", "The amount of packets pubcomp missed", |s| {
                s.metrics.result.packets_pubcomp_missed as f64
            }),
            gauge!(Metric, "packets_puback_missed", "The amount of packets puback missed", |s| {
                s.metrics.result.packets_puback_missed as f64
            }),
            // Broker stats
            gauge!(Stats, "clients", "The amount of clients using in the EMQ node.", |s| {
                s.stats.result.clients_count as f64
            }),
            gauge!(Stats, "retained", "The amount of retained messages in the EMQ node.", |s| {
                s.stats.result.retained_count as f64
            }),
            gauge!(Stats, "routes", "The amount of routes in use by the EMQ node.", |s| {
                s.stats.result.routes_count as f64
            }),
            gauge!(Stats, "sessions", "The amount of sessions in use by the EMQ node.", |s| {
                s.stats.result.sessions_count as f64
            }),
            gauge!(Stats, "subscribers", "The amount of subscribers using the EMQ node.", |s| {
                s.stats.result.subscribers_count as f64
            }),
            gauge!(Stats, "subscriptions", "The amount of subscriptions in use by the EMQ node.", |s| {
                s.stats.result.subscribers_count as f64
            }),
            gauge!(Stats, "topics", "The amount of topics being used in the EMQ node.", |s| {
                s.stats.result.topics_count as f64
            }),
        ])
    }

    /// Definitions in emission order
    pub fn iter(&self) -> impl Iterator<Item = &MetricDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Fully qualified names in emission order
    pub fn names(&self) -> Vec<String> {
        self.definitions.iter().map(MetricDefinition::fq_name).collect()
    }
}

impl Default for MetricRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
