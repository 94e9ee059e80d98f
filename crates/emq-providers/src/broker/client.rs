//! EMQ HTTP Client
//!
//! Implements the `BrokerApi` port against the broker's `/api/v2` HTTP API.
//! Receives the reqwest client via constructor injection.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use emq_application::ScrapeCounters;
use emq_domain::error::{Error, Result};
use emq_domain::{
    BrokerApi, BrokerStatsResponse, ClusterMembership, Endpoint, NodeStatusResponse,
    ProtocolCountersResponse,
};

use crate::constants::BROKER_OK_STATUS;

/// Basic authentication credentials for the broker API
#[derive(Clone, PartialEq, Eq)]
pub struct BrokerCredentials {
    pub username: String,
    pub password: String,
}

impl BrokerCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for BrokerCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrokerCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// HTTP client for a single broker node
///
/// ## Example
///
/// ```rust,no_run
/// use emq_application::ScrapeCounters;
/// use emq_providers::{BrokerCredentials, EmqHttpClient};
/// use reqwest::Client;
///
/// fn example() -> emq_domain::Result<()> {
///     let client = EmqHttpClient::new(
///         "http://127.0.0.1:8080",
///         "emq@127.0.0.1",
///         BrokerCredentials::new("admin", "public"),
///         Client::new(),
///         ScrapeCounters::new_shared(),
///     )?;
///     Ok(())
/// }
/// ```
pub struct EmqHttpClient {
    base_url: Url,
    node: String,
    credentials: BrokerCredentials,
    http_client: Client,
    timeout: Option<Duration>,
    counters: Arc<ScrapeCounters>,
}

impl EmqHttpClient {
    /// Create a client for `node` behind `base_url`
    ///
    /// Only the scheme and authority of `base_url` are used; endpoint paths
    /// replace any path it carries.
    pub fn new(
        base_url: &str,
        node: impl Into<String>,
        credentials: BrokerCredentials,
        http_client: Client,
        counters: Arc<ScrapeCounters>,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            Error::configuration_with_source(format!("invalid broker URI '{base_url}'"), e)
        })?;

        Ok(Self {
            base_url,
            node: node.into(),
            credentials,
            http_client,
            timeout: None,
            counters,
        })
    }

    /// Apply a per-request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Absolute URL of `endpoint` for this node
    pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url> {
        self.base_url
            .join(&endpoint.path(&self.node))
            .map_err(|e| Error::transport_with_source(endpoint.name(), "invalid request URL", e))
    }

    /// GET `endpoint` and decode its JSON body
    async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T> {
        let url = self.endpoint_url(endpoint)?;

        let mut request = self
            .http_client
            .get(url.clone())
            .basic_auth(&self.credentials.username, Some(&self.credentials.password));
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| {
            let message = if e.is_timeout() {
                "request timed out"
            } else {
                "request failed"
            };
            Error::transport_with_source(endpoint.name(), message, e)
        })?;

        let status = response.status().as_u16();
        if status != BROKER_OK_STATUS {
            warn!(endpoint = endpoint.name(), status, "Broker returned an error status");
            return Err(Error::http_status(endpoint.name(), status));
        }

        let body = response.bytes().await.map_err(|e| {
            Error::transport_with_source(endpoint.name(), "failed to read response body", e)
        })?;

        let payload = serde_json::from_slice(&body).map_err(|e| {
            self.counters.record_parse_failure();
            Error::decode_with_source(endpoint.name(), e.to_string(), e)
        })?;

        debug!(endpoint = endpoint.name(), %url, bytes = body.len(), "Fetched broker payload");
        Ok(payload)
    }
}

#[async_trait]
impl BrokerApi for EmqHttpClient {
    async fn node_status(&self) -> Result<NodeStatusResponse> {
        self.fetch(Endpoint::NodeStatus).await
    }

    async fn protocol_counters(&self) -> Result<ProtocolCountersResponse> {
        self.fetch(Endpoint::ProtocolCounters).await
    }

    async fn broker_stats(&self) -> Result<BrokerStatsResponse> {
        self.fetch(Endpoint::BrokerStats).await
    }

    async fn cluster_membership(&self) -> Result<ClusterMembership> {
        self.fetch(Endpoint::ClusterMembership).await
    }

    fn node(&self) -> &str {
        &self.node
    }
}

impl fmt::Debug for EmqHttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmqHttpClient")
            .field("base_url", &self.base_url.as_str())
            .field("node", &self.node)
            .field("credentials", &self.credentials)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
