//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! default values and command-line overrides.

use std::env;
use std::path::{Path, PathBuf};

use emq_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use reqwest::Url;

use crate::config::AppConfig;
use crate::config::types::server::parse_listen_address;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;

/// Values given explicitly on the command line
///
/// Each set field replaces whatever the file and environment produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub listen_address: Option<String>,
    pub telemetry_path: Option<String>,
    pub broker_uri: Option<String>,
    pub broker_username: Option<String>,
    pub broker_password: Option<String>,
    pub broker_node: Option<String>,
    pub broker_timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}

impl ConfigOverrides {
    /// Apply the set fields onto `config`
    pub fn apply(&self, config: &mut AppConfig) {
        fn set<T: Clone>(target: &mut T, value: Option<&T>) {
            if let Some(value) = value {
                target.clone_from(value);
            }
        }

        set(&mut config.server.listen_address, self.listen_address.as_ref());
        set(&mut config.server.telemetry_path, self.telemetry_path.as_ref());
        set(&mut config.broker.uri, self.broker_uri.as_ref());
        set(&mut config.broker.username, self.broker_username.as_ref());
        set(&mut config.broker.password, self.broker_password.as_ref());
        set(&mut config.broker.node, self.broker_node.as_ref());
        set(&mut config.logging.level, self.log_level.as_ref());
        if self.broker_timeout_secs.is_some() {
            config.broker.timeout_secs = self.broker_timeout_secs;
        }
    }
}

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,

    /// Command-line overrides
    overrides: ConfigOverrides,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
            overrides: ConfigOverrides::default(),
        }
    }

    /// Set the configuration file path
    #[must_use]
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    #[must_use]
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Set the command-line overrides
    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, else discovered)
    /// 3. Environment variables, e.g. `EMQ_EXPORTER__BROKER__NODE`
    /// 4. Command-line overrides
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path
            && !config_path.exists()
        {
            return Err(Error::configuration(format!(
                "Configuration file not found: {}",
                config_path.display()
            )));
        }
        if let Some(source_path) = self.source_path() {
            figment = figment.merge(Toml::file(source_path));
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let mut app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        self.overrides.apply(&mut app_config);
        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Get the configured file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// File `load` reads: the explicit path, else the first default found
    pub fn source_path(&self) -> Option<PathBuf> {
        self.config_path
            .clone()
            .or_else(Self::find_default_config_path)
    }

    /// First existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let mut candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
        ];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME));
        }

        candidates.into_iter().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(config)?;
    validate_broker_config(config)?;
    crate::logging::parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    parse_listen_address(&config.server.listen_address)?;

    let path = &config.server.telemetry_path;
    if !path.starts_with('/') {
        return Err(Error::configuration(format!(
            "Telemetry path '{path}' must start with '/'"
        )));
    }
    if path == "/" {
        return Err(Error::configuration(
            "Telemetry path cannot be '/', it is taken by the landing page",
        ));
    }
    Ok(())
}

fn validate_broker_config(config: &AppConfig) -> Result<()> {
    let uri = Url::parse(&config.broker.uri)
        .config_context(format!("Invalid broker URI '{}'", config.broker.uri))?;
    if !matches!(uri.scheme(), "http" | "https") || !uri.has_host() {
        return Err(Error::configuration(format!(
            "Broker URI '{}' must be an absolute http or https URL",
            config.broker.uri
        )));
    }

    if config.broker.node.trim().is_empty() {
        return Err(Error::configuration("Broker node cannot be empty"));
    }

    if config.broker.timeout_secs == Some(0) {
        return Err(Error::configuration("Broker timeout cannot be 0"));
    }
    Ok(())
}

/// Configuration builder for programmatic configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_broker_uri<S: Into<String>>(mut self, uri: S) -> Self {
        self.config.broker.uri = uri.into();
        self
    }

    #[must_use]
    pub fn with_node<S: Into<String>>(mut self, node: S) -> Self {
        self.config.broker.node = node.into();
        self
    }

    #[must_use]
    pub fn with_credentials<S: Into<String>>(mut self, username: S, password: S) -> Self {
        self.config.broker.username = username.into();
        self.config.broker.password = password.into();
        self
    }

    #[must_use]
    pub fn with_telemetry_path<S: Into<String>>(mut self, path: S) -> Self {
        self.config.server.telemetry_path = path.into();
        self
    }

    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: Option<u64>) -> Self {
        self.config.broker.timeout_secs = timeout_secs;
        self
    }

    /// Build the configuration without validation
    pub fn build(self) -> AppConfig {
        self.config
    }
}
