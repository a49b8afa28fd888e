use super::*;
use crate::config::defaults;
use serde_json::json;

#[test]
fn defaults_match_the_canvas_constants() {
    let config = CanvasConfig::default();
    assert_eq!(config.layout, LayoutType::DagreVertical);
    assert_eq!(config.node_width, 90.0);
    assert_eq!(config.node_height, 75.0);
    assert_eq!(config.node_shape, NodeShape::Rect);
    assert_eq!(config.group_padding, 40.0);
    assert_eq!(config.scope_separator, "|");
    assert_eq!(
        config.special_child_processors,
        defaults::SPECIAL_CHILD_PROCESSORS
    );
    assert_eq!(config.edge.lead_in_default, 29.0);
    assert_eq!(config.edge.lead_in_branching, 48.0);
    assert_eq!(config.edge.tail_length, 36.0);
    assert_eq!(config.edge.alignment_tolerance, 0.1);
}

#[test]
fn partial_documents_fill_in_defaults() {
    let config = CanvasConfig::from_json_str(r#"{ "layout": "DagreHorizontal" }"#).unwrap();
    assert!(config.layout.is_horizontal());
    assert_eq!(config.node_width, 90.0);
    assert_eq!(config.edge, EdgeRouteConfig::default());
}

#[test]
fn nested_overrides_merge_key_by_key() {
    let base = CanvasConfig {
        node_width: 120.0,
        ..Default::default()
    };
    let merged = base
        .with_overrides(&json!({ "edge": { "tailLength": 50.0 } }))
        .unwrap();

    assert_eq!(merged.node_width, 120.0);
    assert_eq!(merged.edge.tail_length, 50.0);
    assert_eq!(merged.edge.lead_in_default, 29.0);
}

#[test]
fn arrays_replace_instead_of_merging() {
    let merged = CanvasConfig::default()
        .with_overrides(&json!({ "specialChildProcessors": ["branch"] }))
        .unwrap();
    assert_eq!(merged.special_child_processors, vec!["branch"]);
}

#[test]
fn wrongly_typed_values_are_rejected() {
    let err = CanvasConfig::from_value(&json!({ "nodeWidth": "wide" })).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { .. }), "{err}");
}

#[test]
fn unknown_fields_are_rejected() {
    let err = CanvasConfig::from_value(&json!({ "edge": { "curvature": 3 } })).unwrap_err();
    match err {
        Error::InvalidConfig { message } => assert!(message.contains("curvature"), "{message}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_object_overrides_are_rejected() {
    let err = CanvasConfig::from_value(&json!([1, 2])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid canvas config: expected a JSON object, got an array"
    );
}

#[test]
fn malformed_json_surfaces_as_a_json_error() {
    let err = CanvasConfig::from_json_str("{ nope").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}
