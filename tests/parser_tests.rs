//! End-to-end parsing from inline data through the canonical graph to
//! NetJSON output.

use serde_json::json;
use topodiff::{FormatError, Protocol, TopologyError, TopologyParser};

#[test]
fn test_parse_netjson_from_inline_value() {
    let data = json!({
        "type": "NetworkGraph",
        "protocol": "olsr",
        "version": "0.8",
        "revision": "aa9d18",
        "metric": "ETX",
        "nodes": [{"id": "10.0.0.1"}, {"id": "10.0.0.2"}],
        "links": [{"source": "10.0.0.1", "target": "10.0.0.2", "weight": 1.083}]
    });
    let graph = TopologyParser::new(Protocol::NetJson, data).parse().unwrap();
    assert_eq!(graph.protocol(), Some("olsr"));
    assert_eq!(graph.revision(), Some("aa9d18"));
    assert_eq!(graph.nodes().len(), 2);
    assert_eq!(graph.links().len(), 1);

    let doc = graph.to_document().unwrap();
    // every link endpoint is a listed node and nothing is duplicated
    for link in &doc.links {
        assert!(doc.nodes.iter().any(|node| node.id == link.source));
        assert!(doc.nodes.iter().any(|node| node.id == link.target));
    }
    let mut ids: Vec<&str> = doc.nodes.iter().map(|node| node.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), doc.nodes.len());
}

#[test]
fn test_parse_olsr_from_json_text() {
    let data = r#"{
        "topology": [
            {"lastHopIP": "10.0.0.1", "destinationIP": "10.0.0.2", "tcEdgeCost": 1.0},
            {"lastHopIP": "10.0.0.2", "destinationIP": "10.0.0.3", "tcEdgeCost": 2.0}
        ]
    }"#;
    let graph = TopologyParser::new(Protocol::Olsr, data).parse().unwrap();
    assert_eq!(graph.protocol(), Some("olsr"));
    assert_eq!(graph.version(), Some("0.8"));
    assert_eq!(graph.metric(), Some("ETX"));
    assert_eq!(graph.nodes(), ["10.0.0.1", "10.0.0.2", "10.0.0.3"]);
    // defaults satisfy the metadata invariants
    graph.to_json().unwrap();
}

#[test]
fn test_parse_batman_from_json_text() {
    let data = r#"{
        "vis": [
            {
                "primary": "a0:f3:c1:96:94:06",
                "neighbors": [{"neighbor": "90:f6:52:bb:12:cc", "metric": "1.012"}]
            },
            {"primary": "90:f6:52:bb:12:cc"}
        ]
    }"#;
    let graph = TopologyParser::new(Protocol::BatmanAdv, data).parse().unwrap();
    assert_eq!(graph.protocol(), Some("batman-adv"));
    assert_eq!(graph.metric(), Some("TQ"));
    assert_eq!(graph.links()[0].weight, Some(1.012));
}

#[test]
fn test_static_topology_serializes_without_metric() {
    let data = json!({
        "type": "NetworkGraph",
        "protocol": "static",
        "version": "1",
        "nodes": [{"id": "gateway"}, {"id": "relay"}],
        "links": [{"source": "gateway", "target": "relay"}]
    });
    let graph = TopologyParser::new(Protocol::NetJson, data).parse().unwrap();
    assert_eq!(graph.metric(), None);
    let json = graph.to_json().unwrap();
    assert!(json.contains("\"protocol\":\"static\""));
}

#[test]
fn test_unrecognized_reference_shapes_fail_with_parser_error() {
    for data in [json!(7), json!(["10.0.0.1"])] {
        let result = TopologyParser::new(Protocol::Olsr, data).parse();
        assert!(matches!(result, Err(TopologyError::UnrecognizedInput)));
    }
}

#[test]
fn test_malformed_json_text_fails_with_format_error() {
    let result = TopologyParser::new(Protocol::Olsr, "{not valid").parse();
    assert!(matches!(
        result,
        Err(TopologyError::Format(FormatError::InvalidJson(_)))
    ));
}

#[test]
fn test_valid_json_of_wrong_shape_fails_with_format_error() {
    let result = TopologyParser::new(Protocol::Olsr, r#"{"vis": []}"#).parse();
    assert!(matches!(result, Err(TopologyError::Format(_))));
}
