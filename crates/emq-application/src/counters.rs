//! Process-wide scrape counters
//!
//! Shared between the broker client (parse failures) and the collection
//! cycle (total scrapes). Concurrent scrapes update them concurrently.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic counters that outlive a single collection cycle
///
/// Initialized once at startup; never reset before process exit.
#[derive(Debug, Default)]
pub struct ScrapeCounters {
    /// Collection cycles started
    total_scrapes: AtomicU64,

    /// Broker responses that failed JSON decoding
    json_parse_failures: AtomicU64,
}

impl ScrapeCounters {
    /// Create zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Record the start of a collection cycle
    pub fn record_scrape(&self) {
        self.total_scrapes.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a broker response that failed to decode
    pub fn record_parse_failure(&self) {
        self.json_parse_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn total_scrapes(&self) -> u64 {
        self.total_scrapes.load(Ordering::Relaxed)
    }

    pub fn json_parse_failures(&self) -> u64 {
        self.json_parse_failures.load(Ordering::Relaxed)
    }
}
