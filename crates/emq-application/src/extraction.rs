//! Numeric extraction from formatted broker strings
//!
//! Some node status fields arrive as display strings with a unit suffix
//! (`"128.5MB"`). The first run of digits, optionally with one embedded
//! decimal point, is the value.

use std::sync::LazyLock;

use emq_domain::constants::MEMORY_SCALE;
use regex::Regex;
use tracing::warn;

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.[0-9]+|[0-9]+").expect("number pattern is valid"));

/// First number embedded in `raw`, if any
///
/// `"128.5MB"` yields `128.5`, `"1.2.3"` yields `1.2`, `"unknown"` yields `None`.
pub fn first_number(raw: &str) -> Option<f64> {
    NUMBER
        .find(raw)
        .and_then(|found| found.as_str().parse::<f64>().ok())
}

/// Memory field in megabytes scaled by one million
///
/// A field with no number is logged and read as zero; it never aborts a scrape.
pub fn memory_value(field: &'static str, raw: &str) -> f64 {
    match first_number(raw) {
        Some(megabytes) => megabytes * MEMORY_SCALE,
        None => {
            warn!(field, raw, "error converting string into number");
            0.0
        }
    }
}
