use flowcanvas::document::FlowsDocument;
use flowcanvas::{CanvasConfig, Error, LayoutType};
use serde_json::json;

const YAML: &str = r#"
layout: DagreHorizontal
config:
  nodeWidth: 120
flows:
  - id: route-1
    root:
      id: route
      processorName: route
      group: true
      steps:
        - { id: from, processorName: from }
        - { id: log, processorName: log }
  - id: route-2
    visible: false
    root: { id: timer, processorName: from }
"#;

#[test]
fn yaml_documents_configure_the_canvas() {
    let doc = FlowsDocument::from_yaml_str(YAML).unwrap();
    assert_eq!(doc.flows.len(), 2);
    assert!(doc.flows[0].visible);
    assert!(!doc.flows[1].visible);

    let canvas = doc.to_canvas(&CanvasConfig::default()).unwrap();
    assert_eq!(canvas.layout_type(), LayoutType::DagreHorizontal);
    assert_eq!(canvas.config().node_width, 120.0);
    assert_eq!(canvas.is_visible("route-2"), Some(false));

    let model = canvas.draw();
    let ids: Vec<_> = model.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["route-1|from", "route-1|log", "route-1|route"]);
    assert_eq!(model.nodes[0].width, Some(120.0));
    assert_eq!(model.edges.len(), 1);
    assert_eq!(model.edges[0].id, "route-1|from >>> log");
}

#[test]
fn json_documents_default_to_the_base_config() {
    let text = json!({
        "flows": [{ "id": "r", "root": { "id": "from", "processorName": "from" } }]
    })
    .to_string();

    let doc = FlowsDocument::from_json_str(&text).unwrap();
    let base = CanvasConfig {
        layout: LayoutType::DagreHorizontal,
        ..CanvasConfig::default()
    };
    let canvas = doc.to_canvas(&base).unwrap();

    assert_eq!(canvas.layout_type(), LayoutType::DagreHorizontal);
    assert_eq!(canvas.draw().nodes.len(), 1);
}

#[test]
fn invalid_documents_surface_their_cause() {
    let err = FlowsDocument::from_json_str("{\"flows\": 3}").unwrap_err();
    assert!(matches!(err, Error::Json(_)), "{err}");

    let doc = FlowsDocument::from_json_str(
        &json!({
            "config": { "nodeWidth": "wide" },
            "flows": []
        })
        .to_string(),
    )
    .unwrap();
    let err = doc.to_canvas(&CanvasConfig::default()).unwrap_err();
    assert!(
        matches!(err, Error::Core(flowcanvas::error::Error::InvalidConfig { .. })),
        "{err}"
    );

    let dup = json!({
        "flows": [{
            "id": "r",
            "root": {
                "id": "a", "processorName": "route", "group": true,
                "steps": [{ "id": "a", "processorName": "log" }]
            }
        }]
    });
    let err = FlowsDocument::from_json_str(&dup.to_string())
        .unwrap()
        .to_canvas(&CanvasConfig::default())
        .unwrap_err();
    assert_eq!(err.to_string(), "duplicate step id: a");
}
