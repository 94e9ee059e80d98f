//! Metric definitions and emitted samples

use std::fmt;

use super::snapshot::Snapshot;
use crate::constants::METRIC_NAMESPACE;

/// Extraction function from a snapshot to a metric value
///
/// Must be total over any decoded snapshot: no panics, no errors.
pub type ExtractFn = fn(&Snapshot) -> f64;

/// Prometheus value type of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Gauge,
    Counter,
}

/// Subsystem component of a metric name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subsystem {
    /// Cluster-wide values
    Cluster,
    /// Node status values and the meta series
    Node,
    /// MQTT protocol counters
    Metric,
    /// Broker resource stats
    Stats,
}

impl Subsystem {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cluster => "cluster",
            Self::Node => "node",
            Self::Metric => "metric",
            Self::Stats => "stats",
        }
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build `namespace_subsystem_name`
pub fn fq_name(subsystem: Subsystem, name: &str) -> String {
    format!("{METRIC_NAMESPACE}_{subsystem}_{name}")
}

/// One entry of the metric registry
///
/// Immutable once built. The label names are always `DEFAULT_LABELS`.
#[derive(Clone, Copy)]
pub struct MetricDefinition {
    /// Subsystem of the metric
    pub subsystem: Subsystem,
    /// Short name, unique within the subsystem
    pub name: &'static str,
    /// Help text
    pub help: &'static str,
    /// Value type
    pub kind: MetricKind,
    /// Pure extraction function
    pub extract: ExtractFn,
}

impl MetricDefinition {
    /// Define a gauge
    pub const fn gauge(
        subsystem: Subsystem,
        name: &'static str,
        help: &'static str,
        extract: ExtractFn,
    ) -> Self {
        Self {
            subsystem,
            name,
            help,
            kind: MetricKind::Gauge,
            extract,
        }
    }

    /// Fully qualified metric name
    pub fn fq_name(&self) -> String {
        fq_name(self.subsystem, self.name)
    }

    /// Evaluate against a snapshot
    pub fn evaluate(&self, snapshot: &Snapshot) -> f64 {
        (self.extract)(snapshot)
    }
}

impl fmt::Debug for MetricDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetricDefinition")
            .field("name", &self.fq_name())
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// A single value handed to the exposition sink
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Fully qualified metric name
    pub name: String,
    /// Help text
    pub help: &'static str,
    /// Value type
    pub kind: MetricKind,
    /// Label pairs, empty for the meta series
    pub labels: Vec<(&'static str, String)>,
    /// Value
    pub value: f64,
}

impl Sample {
    /// Unlabelled gauge
    pub fn gauge(name: String, help: &'static str, value: f64) -> Self {
        Self {
            name,
            help,
            kind: MetricKind::Gauge,
            labels: Vec::new(),
            value,
        }
    }

    /// Unlabelled counter
    pub fn counter(name: String, help: &'static str, value: f64) -> Self {
        Self {
            name,
            help,
            kind: MetricKind::Counter,
            labels: Vec::new(),
            value,
        }
    }

    /// Label value by name
    pub fn label(&self, name: &str) -> Option<&str> {
        self.labels
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}
