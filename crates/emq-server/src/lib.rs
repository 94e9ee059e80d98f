//! # EMQ Exporter Server
//!
//! HTTP surface of the exporter: a landing page and the telemetry path,
//! served by Rocket.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clap::Parser;
//! use emq_server::{Cli, run};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     run(Cli::parse()).await
//! }
//! ```
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cli`] | Command-line flags |
//! | [`init`] | Configuration, logging, wiring and launch |
//! | [`routes`] | Rocket handlers and the rocket builder |
//! | [`constants`] | Landing page and rocket settings |

pub mod cli;
pub mod constants;
pub mod init;
pub mod routes;

pub use cli::Cli;
pub use init::run;
pub use routes::{ExporterState, exporter_rocket};
