//! EMQ broker management API client
//!
//! Reads the four monitoring/management endpoints over HTTP with basic
//! authentication. One request per operation, no retries.

pub mod client;

pub use client::{BrokerCredentials, EmqHttpClient};
