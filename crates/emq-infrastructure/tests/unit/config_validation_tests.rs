//! Tests for configuration validation

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use emq_infrastructure::config::types::server::parse_listen_address;
use emq_infrastructure::config::{AppConfig, ConfigBuilder, validate_app_config};

#[test]
fn test_default_config_is_valid() {
    validate_app_config(&AppConfig::default()).expect("defaults are valid");
}

#[test]
fn test_listen_address_forms() {
    assert_eq!(
        parse_listen_address(":9444").expect("empty host"),
        (IpAddr::V4(Ipv4Addr::UNSPECIFIED), 9444)
    );
    assert_eq!(
        parse_listen_address("127.0.0.1:9000").expect("ipv4"),
        (IpAddr::V4(Ipv4Addr::LOCALHOST), 9000)
    );
    assert_eq!(
        parse_listen_address("localhost:9000").expect("localhost"),
        (IpAddr::V4(Ipv4Addr::LOCALHOST), 9000)
    );
    assert_eq!(
        parse_listen_address("[::1]:9000").expect("ipv6"),
        (IpAddr::V6(Ipv6Addr::LOCALHOST), 9000)
    );
}

#[test]
fn test_listen_address_rejections() {
    for address in ["9444", ":0", ":http", "broker.internal:9444", ""] {
        assert!(parse_listen_address(address).is_err(), "{address} accepted");
    }
}

#[test]
fn test_broker_uri_must_be_absolute_http() {
    for uri in ["127.0.0.1:8080", "ftp://broker:21", "not a uri", "/api"] {
        let config = ConfigBuilder::new().with_broker_uri(uri).build();
        assert!(validate_app_config(&config).is_err(), "{uri} accepted");
    }

    let config = ConfigBuilder::new()
        .with_broker_uri("https://broker.internal/prefix")
        .build();
    validate_app_config(&config).expect("https with path is valid");
}

#[test]
fn test_node_must_not_be_empty() {
    let config = ConfigBuilder::new().with_node("  ").build();
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_telemetry_path_rules() {
    for path in ["metrics", "/", ""] {
        let config = ConfigBuilder::new().with_telemetry_path(path).build();
        assert!(validate_app_config(&config).is_err(), "{path:?} accepted");
    }

    let config = ConfigBuilder::new().with_telemetry_path("/emq/metrics").build();
    validate_app_config(&config).expect("nested path is valid");
}

#[test]
fn test_zero_timeout_rejected() {
    let config = ConfigBuilder::new().with_timeout_secs(Some(0)).build();
    assert!(validate_app_config(&config).is_err());

    let config = ConfigBuilder::new().with_timeout_secs(Some(10)).build();
    validate_app_config(&config).expect("non-zero timeout is valid");
}

#[test]
fn test_invalid_log_level_rejected() {
    let mut config = AppConfig::default();
    config.logging.level = "verbose".to_string();
    assert!(validate_app_config(&config).is_err());
}
