//! Rocket routes
//!
//! - GET `/` - landing page linking to the telemetry path
//! - GET `<telemetry_path>` - one collection cycle rendered as Prometheus text

use std::sync::Arc;

use emq_application::BrokerCollector;
use emq_domain::error::{Error, Result};
use emq_infrastructure::PrometheusSink;
use rocket::http::uri::Origin;
use rocket::http::{ContentType, Status};
use rocket::response::content::RawHtml;
use rocket::{Build, Rocket, State, get, routes};
use tracing::{debug, error};

use crate::constants::LANDING_TITLE;

/// State shared by the handlers
#[derive(Clone)]
pub struct ExporterState {
    /// Collection cycle run on every scrape
    pub collector: Arc<BrokerCollector>,

    /// Path the metrics route is mounted at
    pub telemetry_path: String,
}

/// Landing page handler
#[get("/")]
pub fn landing(state: &State<ExporterState>) -> RawHtml<String> {
    RawHtml(format!(
        "<html>\n<head><title>{LANDING_TITLE}</title></head>\n<body>\n<h1>{LANDING_TITLE}</h1>\n<p><a href='{path}'>Metrics</a></p>\n</body>\n</html>\n",
        path = state.telemetry_path
    ))
}

/// Metrics handler, mounted at the telemetry path
///
/// A broker failure still answers 200 with the meta series; only a render
/// failure answers 500.
#[get("/")]
pub async fn metrics(
    state: &State<ExporterState>,
) -> std::result::Result<(ContentType, String), Status> {
    let mut sink = PrometheusSink::new();
    let outcome = state.collector.collect(&mut sink).await;

    let body = sink.render().map_err(|e| {
        error!(error = %e, "Failed to render metrics");
        Status::InternalServerError
    })?;

    debug!(up = outcome.up(), bytes = body.len(), "Served scrape");
    Ok((exposition_content_type(), body))
}

/// `text/plain; version=0.0.4`
fn exposition_content_type() -> ContentType {
    ContentType::new("text", "plain").with_params(("version", "0.0.4"))
}

/// Build the exporter rocket
///
/// Fails if the telemetry path is not a valid absolute path.
pub fn exporter_rocket(state: ExporterState) -> Result<Rocket<Build>> {
    let telemetry_path = Origin::parse(&state.telemetry_path)
        .map(|origin| origin.path().as_str().to_string())
        .map_err(|e| {
            Error::configuration(format!(
                "Invalid telemetry path '{}': {e}",
                state.telemetry_path
            ))
        })?;

    Ok(rocket::build()
        .manage(state)
        .mount("/", routes![landing])
        .mount(telemetry_path, routes![metrics]))
}
