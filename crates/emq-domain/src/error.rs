//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the EMQ exporter
///
/// The first three variants are the fetch failure taxonomy: every broker
/// request fails with exactly one of them. They abort the enclosing
/// collection cycle, never the process.
#[derive(Error, Debug)]
pub enum Error {
    /// Connection could not be established or the request could not be sent
    #[error("failed to get {endpoint} response: {message}")]
    Transport {
        /// Endpoint that was being fetched
        endpoint: &'static str,
        /// Description of the transport failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Broker answered with a status other than 200 OK
    #[error("HTTP request for {endpoint} failed with code {status}")]
    HttpStatus {
        /// Endpoint that was being fetched
        endpoint: &'static str,
        /// HTTP status code returned by the broker
        status: u16,
    },

    /// Response body was not JSON of the expected shape
    #[error("failed to decode {endpoint} response: {message}")]
    Decode {
        /// Endpoint that was being fetched
        endpoint: &'static str,
        /// Description of the decoding failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Fetch error creation methods
impl Error {
    /// Create a transport error
    pub fn transport<S: Into<String>>(endpoint: &'static str, message: S) -> Self {
        Self::Transport {
            endpoint,
            message: message.into(),
            source: None,
        }
    }

    /// Create a transport error with source
    pub fn transport_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        endpoint: &'static str,
        message: S,
        source: E,
    ) -> Self {
        Self::Transport {
            endpoint,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(endpoint: &'static str, status: u16) -> Self {
        Self::HttpStatus { endpoint, status }
    }

    /// Create a decode error with source
    pub fn decode_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        endpoint: &'static str,
        message: S,
        source: E,
    ) -> Self {
        Self::Decode {
            endpoint,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration and internal error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Inspection
impl Error {
    /// Short machine-readable name of the error kind, used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "transport",
            Self::HttpStatus { .. } => "http_status",
            Self::Decode { .. } => "decode",
            Self::Configuration { .. } => "configuration",
            Self::Internal { .. } => "internal",
        }
    }

    /// Endpoint name for fetch failures
    pub fn endpoint(&self) -> Option<&'static str> {
        match self {
            Self::Transport { endpoint, .. }
            | Self::HttpStatus { endpoint, .. }
            | Self::Decode { endpoint, .. } => Some(endpoint),
            _ => None,
        }
    }

    /// Whether this is a transport failure
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Whether this is a non-200 response failure
    pub fn is_http_status(&self) -> bool {
        matches!(self, Self::HttpStatus { .. })
    }

    /// Whether this is a body decoding failure
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}
