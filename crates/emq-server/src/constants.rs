//! Server-specific constants

/// Title of the landing page
pub const LANDING_TITLE: &str = "EMQ Exporter";

/// Rocket's own log output; the exporter logs through tracing
pub const ROCKET_LOG_LEVEL: rocket::config::LogLevel = rocket::config::LogLevel::Critical;
