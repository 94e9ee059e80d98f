//! Prometheus exposition
//!
//! [`PrometheusSink`] buffers the samples of one collection cycle and
//! renders them in the Prometheus text format. Every render builds a fresh
//! `prometheus::Registry`, so a response only ever contains series from the
//! cycle that produced it.

use emq_domain::error::Result;
use emq_domain::{ExpositionSink, MetricKind, Sample};
use prometheus::{Counter, CounterVec, Gauge, GaugeVec, Opts, Registry, TextEncoder};

use crate::constants::{BUILD_INFO_HELP, BUILD_INFO_METRIC, EXPORTER_VERSION};
use crate::error_ext::ErrorContext;

/// Content type of the rendered exposition
pub const CONTENT_TYPE: &str = prometheus::TEXT_FORMAT;

/// Sink rendering one scrape with the `prometheus` crate
#[derive(Debug, Default)]
pub struct PrometheusSink {
    samples: Vec<Sample>,
}

impl PrometheusSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Samples buffered so far
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Render the buffered samples plus the build info gauge
    pub fn render(&self) -> Result<String> {
        let registry = Registry::new();

        register_build_info(&registry)?;
        for sample in &self.samples {
            register_sample(&registry, sample)?;
        }

        TextEncoder::new()
            .encode_to_string(&registry.gather())
            .context("Failed to encode metrics")
    }
}

impl ExpositionSink for PrometheusSink {
    fn emit(&mut self, sample: Sample) {
        self.samples.push(sample);
    }
}

fn register_build_info(registry: &Registry) -> Result<()> {
    let build_info = GaugeVec::new(Opts::new(BUILD_INFO_METRIC, BUILD_INFO_HELP), &["version"])
        .context("Failed to create build info gauge")?;
    build_info.with_label_values(&[EXPORTER_VERSION]).set(1.0);
    registry
        .register(Box::new(build_info))
        .context("Failed to register build info gauge")
}

fn register_sample(registry: &Registry, sample: &Sample) -> Result<()> {
    let opts = Opts::new(sample.name.clone(), sample.help);
    let label_names: Vec<&str> = sample.labels.iter().map(|(name, _)| *name).collect();
    let label_values: Vec<&str> = sample.labels.iter().map(|(_, value)| value.as_str()).collect();

    let name = sample.name.clone();
    match (sample.kind, label_names.is_empty()) {
        (MetricKind::Gauge, true) => {
            let gauge = Gauge::with_opts(opts).with_context(|| format!("Invalid gauge {name}"))?;
            gauge.set(sample.value);
            registry.register(Box::new(gauge))
        }
        (MetricKind::Gauge, false) => {
            let gauge = GaugeVec::new(opts, &label_names)
                .with_context(|| format!("Invalid gauge {name}"))?;
            gauge.with_label_values(&label_values).set(sample.value);
            registry.register(Box::new(gauge))
        }
        (MetricKind::Counter, true) => {
            let counter =
                Counter::with_opts(opts).with_context(|| format!("Invalid counter {name}"))?;
            counter.inc_by(sample.value);
            registry.register(Box::new(counter))
        }
        (MetricKind::Counter, false) => {
            let counter = CounterVec::new(opts, &label_names)
                .with_context(|| format!("Invalid counter {name}"))?;
            counter.with_label_values(&label_values).inc_by(sample.value);
            registry.register(Box::new(counter))
        }
    }
    .with_context(|| format!("Failed to register {name}"))
}
