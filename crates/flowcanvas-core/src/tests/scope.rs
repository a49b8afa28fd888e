use super::*;
use crate::scope::scoped_id;

#[test]
fn scoped_ids_join_scope_separator_and_id() {
    assert_eq!(scoped_id("route-1", "|", "from"), "route-1|from");
    assert_eq!(scoped_id("a", "::", "b"), "a::b");
}

#[test]
fn every_reference_is_prefixed() {
    let tree = viz_tree(&choice_route());
    let diagram = flow_diagram("route-1", &tree.root(), &CanvasConfig::default());

    for node in &diagram.nodes {
        assert!(node.id.starts_with("route-1|"), "{}", node.id);
        assert!(!node.data.viz_id.contains('|'));
        for child in &node.children {
            assert!(child.starts_with("route-1|"));
        }
        if let Some(parent) = &node.parent_node {
            assert_eq!(parent, "route-1|route");
        }
    }

    let first = &diagram.edges[0];
    assert_eq!(first.id, "route-1|from >>> choice");
    assert_eq!(first.source, "route-1|from");
    assert_eq!(first.target, "route-1|choice");
    assert!(diagram.dangling_edges().is_empty());
}

#[test]
fn labels_keep_the_unscoped_id() {
    let tree = viz_tree(&choice_route());
    let diagram = flow_diagram("route-1", &tree.root(), &CanvasConfig::default());

    let group = diagram.node("route-1|route").unwrap();
    assert_eq!(group.label.as_deref(), Some("route"));
    assert_eq!(
        group.children,
        vec![
            "route-1|from",
            "route-1|choice",
            "route-1|stepA",
            "route-1|stepB",
            "route-1|stepC"
        ]
    );
}

#[test]
fn distinct_scopes_keep_identical_flows_apart() {
    let tree = viz_tree(&choice_route());
    let config = CanvasConfig::default();
    let a = flow_diagram("a", &tree.root(), &config);
    let b = flow_diagram("b", &tree.root(), &config);

    let ids_a: rustc_hash::FxHashSet<&str> = a.nodes.iter().map(|n| n.id.as_str()).collect();
    assert!(b.nodes.iter().all(|n| !ids_a.contains(n.id.as_str())));
    assert!(b.edges.iter().all(|e| !a.edges.iter().any(|o| o.id == e.id)));
}

#[test]
fn configured_separator_is_used() {
    let tree = viz_tree(&choice_route());
    let config = CanvasConfig {
        scope_separator: "/".to_string(),
        ..Default::default()
    };
    let diagram = flow_diagram("r", &tree.root(), &config);

    assert!(diagram.node("r/from").is_some());
    assert!(diagram.has_edge("r/stepA", "r/stepC"));
}

#[test]
fn scoping_an_empty_diagram_is_a_no_op() {
    let mut diagram = CanvasNodesAndEdges::default();
    apply_scope("x", &mut diagram, "|");
    assert!(diagram.nodes.is_empty());
    assert!(diagram.edges.is_empty());
}
