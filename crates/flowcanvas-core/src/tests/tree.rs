use super::*;

#[test]
fn plain_siblings_are_chained_in_flow_order() {
    let tree = viz_tree(&group(
        "route",
        "route",
        vec![step("a", "from"), step("b", "log"), step("c", "to")],
    ));

    let a = tree.node("a").unwrap();
    let b = tree.node("b").unwrap();
    let c = tree.node("c").unwrap();
    assert_eq!(a.next_node(), Some(b));
    assert_eq!(b.previous_node(), Some(a));
    assert_eq!(b.next_node(), Some(c));
    assert_eq!(c.next_node(), None);
    assert_eq!(a.previous_node(), None);
    assert_eq!(c.parent_node(), Some(tree.root()));
    assert_eq!(tree.root().parent_node(), None);
}

#[test]
fn branch_markers_are_never_chained() {
    let tree = viz_tree(&group(
        "choice",
        "choice",
        vec![
            step("when-1", "when"),
            step("when-2", "when"),
            step("otherwise", "otherwise"),
        ],
    ));

    for id in ["when-1", "when-2", "otherwise"] {
        let node = tree.node(id).unwrap();
        assert_eq!(node.next_node(), None, "{id} should have no successor");
        assert_eq!(node.previous_node(), None, "{id} should have no predecessor");
    }
}

#[test]
fn mixed_children_only_chain_plain_neighbours() {
    let tree = viz_tree(&group(
        "try",
        "doTry",
        vec![
            step("log-1", "log"),
            step("log-2", "log"),
            step("catch", "doCatch"),
            step("log-3", "log"),
        ],
    ));

    assert_eq!(
        tree.node("log-1").unwrap().next_node(),
        tree.node("log-2")
    );
    assert_eq!(tree.node("log-2").unwrap().next_node(), None);
    assert_eq!(tree.node("log-3").unwrap().previous_node(), None);
}

#[test]
fn node_data_comes_from_the_definition() {
    let mut def = step("to-1", "to");
    def.component_name = Some("kafka".to_string());
    let tree = viz_tree(&group("route", "route", vec![def, step("ph", "placeholder").placeholder()]));

    let to = tree.node("to-1").unwrap();
    assert_eq!(to.data().processor_name, "to");
    assert_eq!(to.data().component_name.as_deref(), Some("kafka"));
    assert!(!to.data().is_group);
    assert!(tree.node("ph").unwrap().data().is_placeholder);
    assert!(tree.root().data().is_group);
    assert_eq!(tree.len(), 3);
}

#[test]
fn duplicate_ids_are_rejected() {
    let def = group("route", "route", vec![step("a", "log"), step("a", "to")]);
    let err = VizTree::from_definition(&def, &ProcessorCatalog::default()).unwrap_err();
    assert!(matches!(err, Error::DuplicateStepId { ref id } if id == "a"));
}

#[test]
fn empty_ids_are_rejected() {
    let def = group("route", "route", vec![step("", "log")]);
    let err = VizTree::from_definition(&def, &ProcessorCatalog::default()).unwrap_err();
    assert!(matches!(err, Error::EmptyStepId { ref parent } if parent == "route"));
}

#[test]
fn trees_parse_from_json_and_yaml() {
    let json = r#"{
        "id": "route-1", "processorName": "route", "group": true,
        "steps": [
            { "id": "from-1", "processorName": "from", "componentName": "timer" },
            { "id": "log-1", "processorName": "log" }
        ]
    }"#;
    let tree = VizTree::from_json_str(json, &ProcessorCatalog::default()).unwrap();
    assert_eq!(tree.root().children().len(), 2);
    assert_eq!(
        tree.node("from-1").unwrap().next_node(),
        tree.node("log-1")
    );

    let yaml = "
id: route-1
processorName: route
group: true
steps:
  - id: from-1
    processorName: from
  - id: log-1
    processorName: log
";
    let tree = VizTree::from_yaml_str(yaml, &ProcessorCatalog::default()).unwrap();
    assert_eq!(tree.len(), 3);

    let err = VizTree::from_json_str("{ \"processorName\": \"x\" }", &ProcessorCatalog::default())
        .unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn set_next_relinks_both_directions() {
    let mut tree = viz_tree(&group(
        "route",
        "route",
        vec![
            step("a", "from"),
            step("b", "log"),
            group("branch", "multicast", vec![step("inner", "log")]),
        ],
    ));

    assert!(tree.set_next("a", "branch"));
    assert!(!tree.set_next("a", "missing"));

    assert_eq!(tree.node("a").unwrap().next_node(), tree.node("branch"));
    assert_eq!(tree.node("branch").unwrap().previous_node(), tree.node("a"));
    assert_eq!(tree.node("b").unwrap().previous_node(), None);
    assert_eq!(tree.node("b").unwrap().next_node(), None);
}
