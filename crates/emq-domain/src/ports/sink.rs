//! Exposition Sink Port

use crate::value_objects::Sample;

/// Receives the samples produced by one collection cycle
///
/// A sink is created per scrape. The cycle writes either every per-metric
/// sample followed by the meta series, or only the meta series.
pub trait ExpositionSink: Send {
    /// Accept one sample
    fn emit(&mut self, sample: Sample);
}
