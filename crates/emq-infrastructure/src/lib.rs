//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns of the exporter.
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment layering of defaults, TOML, environment and CLI flags |
//! | [`constants`] | Defaults and names used across the configuration |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`exposition`] | Prometheus text rendering of one scrape |
//!
//! ### Wiring
//! | Module | Description |
//! |--------|-------------|
//! | [`bootstrap`] | Builds the broker client and the collector from configuration |
//! | [`error_ext`] | Context helpers converting foreign errors into domain errors |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod exposition;
pub mod logging;

pub use bootstrap::{AppContext, init_app};
pub use config::{AppConfig, ConfigLoader, ConfigOverrides};
pub use error_ext::ErrorContext;
pub use exposition::PrometheusSink;
