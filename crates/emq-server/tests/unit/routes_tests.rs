//! Route tests using Rocket's local client

use std::sync::Arc;

use async_trait::async_trait;
use emq_application::{BrokerCollector, MetricRegistry, ScrapeCounters};
use emq_domain::error::{Error, Result};
use emq_domain::{
    ApiResponse, BrokerApi, BrokerStatsResponse, ClusterMembership, ClusterNode, NodeStatus,
    NodeStatusResponse, ProtocolCountersResponse,
};
use emq_server::{ExporterState, exporter_rocket};
use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::Client;

const NODE: &str = "emq@127.0.0.1";

/// Broker whose node status fetch succeeds or fails on demand
struct StaticBroker {
    reachable: bool,
}

#[async_trait]
impl BrokerApi for StaticBroker {
    async fn node_status(&self) -> Result<NodeStatusResponse> {
        if !self.reachable {
            return Err(Error::transport("nodes", "connection refused"));
        }
        Ok(ApiResponse {
            result: NodeStatus {
                name: NODE.to_string(),
                otp_release: "R20/9.3".to_string(),
                memory_total: "128.5MB".to_string(),
                ..NodeStatus::default()
            },
            code: 0,
        })
    }

    async fn protocol_counters(&self) -> Result<ProtocolCountersResponse> {
        Ok(ApiResponse::default())
    }

    async fn broker_stats(&self) -> Result<BrokerStatsResponse> {
        Ok(ApiResponse::default())
    }

    async fn cluster_membership(&self) -> Result<ClusterMembership> {
        Ok(ApiResponse {
            result: vec![ClusterNode {
                name: NODE.to_string(),
                version: "2.3.11".to_string(),
                ..ClusterNode::default()
            }],
            code: 0,
        })
    }

    fn node(&self) -> &str {
        NODE
    }
}

fn state(reachable: bool, telemetry_path: &str) -> ExporterState {
    ExporterState {
        collector: Arc::new(BrokerCollector::new(
            Arc::new(StaticBroker { reachable }),
            Arc::new(MetricRegistry::standard()),
            ScrapeCounters::new_shared(),
        )),
        telemetry_path: telemetry_path.to_string(),
    }
}

async fn client(reachable: bool, telemetry_path: &str) -> Client {
    let rocket = exporter_rocket(state(reachable, telemetry_path)).expect("valid telemetry path");
    Client::tracked(rocket).await.expect("valid rocket instance")
}

#[rocket::async_test]
async fn test_landing_page_links_to_metrics() {
    let client = client(true, "/metrics").await;

    let response = client.get("/").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.content_type(), Some(ContentType::HTML));
    let body = response.into_string().await.expect("response body");
    assert!(body.contains("<title>EMQ Exporter</title>"));
    assert!(body.contains("<a href='/metrics'>Metrics</a>"));
}

#[rocket::async_test]
async fn test_metrics_exposes_all_series() {
    let client = client(true, "/metrics").await;

    let response = client.get("/metrics").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    let content_type = response.content_type().expect("content type");
    assert_eq!(content_type.to_string(), "text/plain; version=0.0.4");

    let body = response.into_string().await.expect("response body");
    assert!(body.contains("\nemq_node_up 1\n"));
    assert!(body.contains(
        r#"emq_cluster_size{node="emq@127.0.0.1",otp_release="R20/9.3",version="2.3.11"} 1"#
    ));
    assert!(body.contains(
        r#"emq_node_memory_total{node="emq@127.0.0.1",otp_release="R20/9.3",version="2.3.11"} 128500000"#
    ));
    assert!(body.contains("emq_stats_subscriptions{"));
    assert!(body.contains("emq_exporter_build_info{"));
}

#[rocket::async_test]
async fn test_broker_failure_still_answers_ok() {
    let client = client(false, "/metrics").await;

    let response = client.get("/metrics").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    let body = response.into_string().await.expect("response body");
    assert!(body.contains("\nemq_node_up 0\n"));
    assert!(body.contains("\nemq_node_total_scrapes 1\n"));
    assert!(!body.contains("emq_cluster_size"));
}

#[rocket::async_test]
async fn test_total_scrapes_grows_per_request() {
    let client = client(true, "/metrics").await;

    client.get("/metrics").dispatch().await;
    let response = client.get("/metrics").dispatch().await;

    let body = response.into_string().await.expect("response body");
    assert!(body.contains("\nemq_node_total_scrapes 2\n"));
}

#[rocket::async_test]
async fn test_custom_telemetry_path() {
    let client = client(true, "/emq/stats").await;

    assert_eq!(client.get("/emq/stats").dispatch().await.status(), Status::Ok);
    assert_eq!(client.get("/metrics").dispatch().await.status(), Status::NotFound);

    let landing = client.get("/").dispatch().await;
    let body = landing.into_string().await.expect("response body");
    assert!(body.contains("href='/emq/stats'"));
}

#[test]
fn test_invalid_telemetry_path_is_rejected() {
    let result = exporter_rocket(state(true, "metrics path"));
    assert!(result.is_err());
}
