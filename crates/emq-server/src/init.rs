//! Server Initialization
//!
//! Loads configuration, installs logging, wires the collector and launches
//! Rocket on the configured listen address.

use std::sync::Arc;

use emq_infrastructure::config::ConfigLoader;
use emq_infrastructure::constants::EXPORTER_VERSION;
use emq_infrastructure::logging::{init_logging, log_config_loaded};
use emq_infrastructure::init_app;
use tracing::info;

use crate::cli::Cli;
use crate::constants::ROCKET_LOG_LEVEL;
use crate::routes::{ExporterState, exporter_rocket};

/// Run the exporter until Rocket shuts down (Ctrl+C or SIGTERM)
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let loader = config_loader(&cli);
    let config = loader.load()?;
    init_logging(&config.logging)?;
    log_config_loaded(loader.source_path().as_deref());

    let (address, port) = config.server.socket_address()?;
    info!(
        version = EXPORTER_VERSION,
        listen_address = %config.server.listen_address,
        telemetry_path = %config.server.telemetry_path,
        "Starting EMQ exporter"
    );

    let context = init_app(config)?;
    let state = ExporterState {
        collector: Arc::clone(&context.collector),
        telemetry_path: context.config.server.telemetry_path.clone(),
    };

    let figment = rocket::Config::figment()
        .merge(("address", address))
        .merge(("port", port))
        .merge(("log_level", ROCKET_LOG_LEVEL));
    let rocket = exporter_rocket(state)?.configure(figment);

    info!("Listening on {}:{}", address, port);
    rocket.launch().await?;

    info!("EMQ exporter stopped");
    Ok(())
}

/// Configuration loader with the command-line flags applied last
fn config_loader(cli: &Cli) -> ConfigLoader {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.with_overrides(cli.overrides())
}
