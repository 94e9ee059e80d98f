//! EMQ Exporter
//!
//! Exposes the metrics of one EMQ broker node to Prometheus.

use clap::Parser;
use emq_server::{Cli, run};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(Cli::parse()).await
}
