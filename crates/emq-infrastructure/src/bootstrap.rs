//! Composition root
//!
//! Builds the broker client, the shared counters and the collector from a
//! validated configuration.
//!
//! ```text
//! AppConfig → reqwest::Client → EmqHttpClient ─┐
//!                       ScrapeCounters ────────┼→ BrokerCollector
//!                       MetricRegistry ────────┘
//! ```

use std::sync::Arc;

use emq_application::{BrokerCollector, MetricRegistry, ScrapeCounters};
use emq_domain::error::Result;
use emq_providers::constants::BROKER_USER_AGENT;
use emq_providers::{BrokerCredentials, EmqHttpClient};
use reqwest::Client;
use tracing::info;

use crate::config::AppConfig;
use crate::constants::EXPORTER_VERSION;
use crate::error_ext::ErrorContext;

/// Application context shared by every request handler
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    /// Collection cycle over the configured broker node
    pub collector: Arc<BrokerCollector>,

    /// Process-wide scrape counters
    pub counters: Arc<ScrapeCounters>,
}

impl AppContext {
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn collector(&self) -> Arc<BrokerCollector> {
        Arc::clone(&self.collector)
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("node", &self.collector.node())
            .finish_non_exhaustive()
    }
}

/// Wire the application from configuration
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let http_client = Client::builder()
        .user_agent(BROKER_USER_AGENT)
        .build()
        .config_context("Failed to build HTTP client")?;

    let counters = ScrapeCounters::new_shared();
    let broker = EmqHttpClient::new(
        &config.broker.uri,
        config.broker.node.clone(),
        BrokerCredentials::new(config.broker.username.clone(), config.broker.password.clone()),
        http_client,
        Arc::clone(&counters),
    )?
    .with_timeout(config.broker.timeout());

    let registry = Arc::new(MetricRegistry::standard());
    let collector = Arc::new(BrokerCollector::new(
        Arc::new(broker),
        Arc::clone(&registry),
        Arc::clone(&counters),
    ));

    info!(
        version = EXPORTER_VERSION,
        broker = %config.broker.uri,
        node = %config.broker.node,
        metrics = registry.len(),
        "Exporter initialized"
    );

    Ok(AppContext {
        config: Arc::new(config),
        collector,
        counters,
    })
}
