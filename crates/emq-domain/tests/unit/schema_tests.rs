//! Broker payload decoding tests

use emq_domain::{BrokerStatsResponse, ClusterMembership, NodeStatusResponse, ProtocolCountersResponse};
use serde_json::json;

#[test]
fn test_node_status_decodes() {
    let body = json!({
        "code": 0,
        "result": {
            "name": "emq@127.0.0.1",
            "otp_release": "R20/9.3",
            "node_status": "Running",
            "memory_total": "128.5MB",
            "memory_used": "64.25MB",
            "process_available": 262144,
            "process_used": 331,
            "max_fds": 1048576,
            "clients": 12,
            "load1": "0.00",
            "load5": "0.01",
            "load15": "0.05"
        }
    });

    let response: NodeStatusResponse = serde_json::from_value(body).unwrap();

    assert!(response.is_success());
    assert_eq!(response.result.name, "emq@127.0.0.1");
    assert_eq!(response.result.otp_release, "R20/9.3");
    assert_eq!(response.result.memory_total, "128.5MB");
    assert_eq!(response.result.process_used, 331);
    assert_eq!(response.result.max_fds, 1_048_576);
    assert_eq!(response.result.load15, "0.05");
}

#[test]
fn test_non_zero_code_is_not_success() {
    let response: NodeStatusResponse =
        serde_json::from_value(json!({ "code": 102, "result": {} })).unwrap();
    assert!(!response.is_success());
}

#[test]
fn test_protocol_counters_use_slash_keys() {
    let body = json!({
        "code": 0,
        "result": {
            "bytes/received": 1024,
            "bytes/sent": 2048,
            "messages/qos2/dropped": 3,
            "packets/pubrel/missed": 4,
            "packets/unsubscribe": 5
        }
    });

    let response: ProtocolCountersResponse = serde_json::from_value(body).unwrap();

    assert_eq!(response.result.bytes_received, 1024);
    assert_eq!(response.result.bytes_sent, 2048);
    assert_eq!(response.result.messages_qos2_dropped, 3);
    assert_eq!(response.result.packets_pubrel_missed, 4);
    assert_eq!(response.result.packets_unsubscribe, 5);
    // Absent counters decode to zero
    assert_eq!(response.result.packets_connect, 0);
}

#[test]
fn test_broker_stats_decodes() {
    let body = json!({
        "code": 0,
        "result": {
            "clients/count": 7,
            "clients/max": 9,
            "subscribers/count": 3,
            "subscriptions/count": 11,
            "topics/count": 2
        }
    });

    let response: BrokerStatsResponse = serde_json::from_value(body).unwrap();

    assert_eq!(response.result.clients_count, 7);
    assert_eq!(response.result.clients_max, 9);
    assert_eq!(response.result.subscribers_count, 3);
    assert_eq!(response.result.subscriptions_count, 11);
    assert_eq!(response.result.topics_count, 2);
}

#[test]
fn test_type_mismatch_is_rejected() {
    let body = json!({ "code": 0, "result": { "clients/count": "many" } });
    assert!(serde_json::from_value::<BrokerStatsResponse>(body).is_err());
}

#[test]
fn test_cluster_membership_lookup() {
    let body = json!({
        "code": 0,
        "result": [
            { "name": "emq@10.0.0.1", "version": "2.3.11" },
            { "name": "emq@10.0.0.2", "version": "2.3.10" },
            { "name": "emq@10.0.0.2", "version": "duplicate" }
        ]
    });

    let membership: ClusterMembership = serde_json::from_value(body).unwrap();

    assert_eq!(membership.size(), 3);
    assert_eq!(membership.find("emq@10.0.0.2").unwrap().version, "2.3.10");
    assert!(membership.find("emq@10.0.0.9").is_none());
    assert!(membership.find("emq@10.0.0").is_none());
}
