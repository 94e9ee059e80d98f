//! Configuration types

pub mod app;
pub mod broker;
pub mod logging;
pub mod server;

pub use app::AppConfig;
pub use broker::BrokerConfig;
pub use logging::LoggingConfig;
pub use server::ServerConfig;
