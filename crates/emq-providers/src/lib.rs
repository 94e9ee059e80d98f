//! Provider Implementations - EMQ Exporter
//!
//! Concrete adapters for the domain ports.
//!
//! ## Providers
//!
//! | Port | Implementation | Module |
//! |------|----------------|--------|
//! | `BrokerApi` | [`EmqHttpClient`] | [`broker`] |

pub mod broker;
pub mod constants;

pub use broker::{BrokerCredentials, EmqHttpClient};
