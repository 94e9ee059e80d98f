//! Broker Collector Use Case
//!
//! Runs one collection cycle: fetch the four broker payloads, assemble a
//! snapshot and write samples into an exposition sink.
//!
//! The four fetches run concurrently. When more than one fails, the error
//! reported is chosen by endpoint precedence (node status, protocol
//! counters, broker stats, cluster membership), so concurrency never
//! changes which failure a scrape reports.

use std::sync::Arc;

use emq_domain::constants::{
    META_JSON_PARSE_FAILURES, META_JSON_PARSE_FAILURES_HELP, META_TOTAL_SCRAPES,
    META_TOTAL_SCRAPES_HELP, META_UP, META_UP_HELP,
};
use emq_domain::error::{Error, Result};
use emq_domain::value_objects::fq_name;
use emq_domain::{BrokerApi, ExpositionSink, Sample, Snapshot, Subsystem};
use tracing::{debug, error};

use crate::counters::ScrapeCounters;
use crate::registry::MetricRegistry;

/// Result of one collection cycle
#[derive(Debug)]
pub enum ScrapeOutcome {
    /// All four fetches succeeded
    Success {
        /// Whether the node status payload carried the success code
        up: bool,
        /// Per-metric samples emitted, meta series excluded
        samples: usize,
    },
    /// A fetch failed; only the meta series were emitted
    Failed {
        /// Highest-precedence fetch error
        error: Error,
    },
}

impl ScrapeOutcome {
    /// Value written to the `up` gauge
    pub fn up(&self) -> bool {
        matches!(self, Self::Success { up: true, .. })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The fetch error, if the cycle failed
    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Success { .. } => None,
            Self::Failed { error } => Some(error),
        }
    }
}

/// Orchestrates broker fetches and sample emission
///
/// Holds no per-scrape state: concurrent scrapes each build their own
/// snapshot and sink. Only the counters are shared.
pub struct BrokerCollector {
    api: Arc<dyn BrokerApi>,
    registry: Arc<MetricRegistry>,
    counters: Arc<ScrapeCounters>,
}

impl BrokerCollector {
    /// Create a collector over an injected broker client
    pub fn new(
        api: Arc<dyn BrokerApi>,
        registry: Arc<MetricRegistry>,
        counters: Arc<ScrapeCounters>,
    ) -> Self {
        Self {
            api,
            registry,
            counters,
        }
    }

    pub fn registry(&self) -> &MetricRegistry {
        &self.registry
    }

    pub fn counters(&self) -> &ScrapeCounters {
        &self.counters
    }

    /// Node this collector scrapes
    pub fn node(&self) -> &str {
        self.api.node()
    }

    /// Run one collection cycle into `sink`
    ///
    /// Never fails: a broker failure is reported through `up = 0` and the
    /// returned outcome.
    pub async fn collect(&self, sink: &mut dyn ExpositionSink) -> ScrapeOutcome {
        self.counters.record_scrape();

        let snapshot = match self.fetch_snapshot().await {
            Ok(snapshot) => snapshot,
            Err(error) => {
                error!(
                    node = self.api.node(),
                    endpoint = error.endpoint().unwrap_or("unknown"),
                    kind = error.kind(),
                    error = %error,
                    "Error scraping EMQ"
                );
                self.emit_meta(sink, false);
                return ScrapeOutcome::Failed { error };
            }
        };

        let up = snapshot.is_healthy();
        let labels = snapshot.labels().pairs();

        for definition in self.registry.iter() {
            sink.emit(Sample {
                name: definition.fq_name(),
                help: definition.help,
                kind: definition.kind,
                labels: labels.clone(),
                value: definition.evaluate(&snapshot),
            });
        }
        self.emit_meta(sink, up);

        debug!(
            node = self.api.node(),
            up,
            samples = self.registry.len(),
            "Scrape completed"
        );

        ScrapeOutcome::Success {
            up,
            samples: self.registry.len(),
        }
    }

    /// Fetch all four payloads concurrently and combine them
    async fn fetch_snapshot(&self) -> Result<Snapshot> {
        let (node, metrics, stats, membership) = tokio::join!(
            self.api.node_status(),
            self.api.protocol_counters(),
            self.api.broker_stats(),
            self.api.cluster_membership(),
        );

        // Precedence order: `?` reports the first failure in this sequence
        let node = node?;
        let metrics = metrics?;
        let stats = stats?;
        let membership = membership?;

        Ok(Snapshot::assemble(
            self.api.node(),
            node,
            metrics,
            stats,
            &membership,
        ))
    }

    fn emit_meta(&self, sink: &mut dyn ExpositionSink, up: bool) {
        sink.emit(Sample::gauge(
            fq_name(Subsystem::Node, META_UP),
            META_UP_HELP,
            if up { 1.0 } else { 0.0 },
        ));
        sink.emit(Sample::counter(
            fq_name(Subsystem::Node, META_TOTAL_SCRAPES),
            META_TOTAL_SCRAPES_HELP,
            self.counters.total_scrapes() as f64,
        ));
        sink.emit(Sample::counter(
            fq_name(Subsystem::Node, META_JSON_PARSE_FAILURES),
            META_JSON_PARSE_FAILURES_HELP,
            self.counters.json_parse_failures() as f64,
        ));
    }
}
