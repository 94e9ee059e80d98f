//! Tests for Prometheus text rendering

use emq_domain::{ExpositionSink, MetricKind, Sample};
use emq_infrastructure::exposition::{CONTENT_TYPE, PrometheusSink};

fn labelled_gauge(name: &str, value: f64) -> Sample {
    Sample {
        name: name.to_string(),
        help: "The total number of EMQ nodes in your cluster.",
        kind: MetricKind::Gauge,
        labels: vec![
            ("node", "emq@127.0.0.1".to_string()),
            ("otp_release", "R20/9.3".to_string()),
            ("version", "2.3.11".to_string()),
        ],
        value,
    }
}

#[test]
fn test_content_type_is_text_format() {
    assert_eq!(CONTENT_TYPE, "text/plain; version=0.0.4");
}

#[test]
fn test_renders_labelled_gauge() {
    let mut sink = PrometheusSink::new();
    sink.emit(labelled_gauge("emq_cluster_size", 3.0));

    let text = sink.render().expect("renders");

    assert!(text.contains("# HELP emq_cluster_size The total number of EMQ nodes in your cluster."));
    assert!(text.contains("# TYPE emq_cluster_size gauge"));
    assert!(text.contains(
        r#"emq_cluster_size{node="emq@127.0.0.1",otp_release="R20/9.3",version="2.3.11"} 3"#
    ));
}

#[test]
fn test_renders_meta_series() {
    let mut sink = PrometheusSink::new();
    sink.emit(Sample::gauge("emq_node_up".to_string(), "Was the last scrape of the EMQ node successful.", 0.0));
    sink.emit(Sample::counter("emq_node_total_scrapes".to_string(), "Current total scrapes.", 7.0));

    let text = sink.render().expect("renders");

    assert!(text.contains("# TYPE emq_node_up gauge"));
    assert!(text.contains("\nemq_node_up 0\n"));
    assert!(text.contains("# TYPE emq_node_total_scrapes counter"));
    assert!(text.contains("\nemq_node_total_scrapes 7\n"));
}

#[test]
fn test_build_info_is_always_present() {
    let text = PrometheusSink::new().render().expect("renders");

    assert!(text.contains("# TYPE emq_exporter_build_info gauge"));
    assert!(text.contains(&format!(
        "emq_exporter_build_info{{version=\"{}\"}} 1",
        env!("CARGO_PKG_VERSION")
    )));
}

#[test]
fn test_empty_label_values_are_rendered() {
    let mut sample = labelled_gauge("emq_stats_topics", 2.0);
    sample.labels[2].1 = String::new();
    let mut sink = PrometheusSink::new();
    sink.emit(sample);

    let text = sink.render().expect("renders");
    assert!(text.contains(r#"emq_stats_topics{node="emq@127.0.0.1",otp_release="R20/9.3",version=""} 2"#));
}

#[test]
fn test_duplicate_series_fails_render() {
    let mut sink = PrometheusSink::new();
    sink.emit(labelled_gauge("emq_cluster_size", 1.0));
    sink.emit(labelled_gauge("emq_cluster_size", 2.0));

    assert!(sink.render().is_err());
}

#[test]
fn test_renders_are_independent() {
    let mut first = PrometheusSink::new();
    first.emit(labelled_gauge("emq_cluster_size", 1.0));
    let second = PrometheusSink::new();

    assert!(first.render().expect("renders").contains("emq_cluster_size"));
    assert!(!second.render().expect("renders").contains("emq_cluster_size"));
}
