use flowcanvas_core::geom::point;
use flowcanvas_core::{
    CanvasConfig, CanvasEdge, CanvasNode, CanvasNodeData, EdgeRouteConfig, LayoutType,
};
use flowcanvas_layout::anchor::{source_anchor, target_anchor};
use flowcanvas_layout::{
    Bounds, EdgeRouteContext, LayoutPoint, PrecomputedLayout, SceneGraph, route_edge,
    route_scene_edges, run_layout,
};

fn vertical() -> EdgeRouteContext {
    EdgeRouteContext {
        layout: LayoutType::DagreVertical,
        ..Default::default()
    }
}

fn horizontal() -> EdgeRouteContext {
    EdgeRouteContext {
        layout: LayoutType::DagreHorizontal,
        ..Default::default()
    }
}

fn xy(points: &[LayoutPoint]) -> Vec<(f64, f64)> {
    points.iter().map(|p| (p.x, p.y)).collect()
}

#[test]
fn anchors_sit_on_the_flow_facing_sides() {
    let b = Bounds::new(10.0, 20.0, 90.0, 75.0);

    assert_eq!(source_anchor(&b, LayoutType::DagreVertical), point(55.0, 95.0));
    assert_eq!(target_anchor(&b, LayoutType::DagreVertical), point(55.0, 20.0));
    assert_eq!(source_anchor(&b, LayoutType::DagreHorizontal), point(100.0, 57.5));
    assert_eq!(target_anchor(&b, LayoutType::DagreHorizontal), point(10.0, 57.5));
}

#[test]
fn aligned_edges_are_straight() {
    let route = route_edge(
        point(100.0, 75.0),
        point(100.05, 200.0),
        &vertical(),
        &EdgeRouteConfig::default(),
    );

    assert_eq!(xy(&route.points), vec![(100.0, 75.0), (100.05, 200.0)]);
    assert_eq!(route.path, "M100 75 L100.05 200");
}

#[test]
fn offset_edges_turn_at_the_lead_in_junction() {
    let route = route_edge(
        point(100.0, 75.0),
        point(200.0, 300.0),
        &vertical(),
        &EdgeRouteConfig::default(),
    );

    assert_eq!(
        xy(&route.points),
        vec![
            (100.0, 75.0),
            (100.0, 104.0),
            (200.0, 104.0),
            (200.0, 264.0),
            (200.0, 300.0)
        ]
    );
    assert_eq!(route.path, "M100 75 L100 104 L200 104 L200 264 L200 300");
}

#[test]
fn branching_and_merging_edges_use_the_longer_lead_in() {
    let config = EdgeRouteConfig::default();
    let branching = EdgeRouteContext {
        source_branches: true,
        ..vertical()
    };
    let merging = EdgeRouteContext {
        target_merges: true,
        ..vertical()
    };

    for ctx in [branching, merging] {
        let route = route_edge(point(100.0, 75.0), point(200.0, 300.0), &ctx, &config);
        assert_eq!(route.points[1], LayoutPoint::new(100.0, 123.0));
        assert_eq!(route.points[2], LayoutPoint::new(200.0, 123.0));
    }
}

#[test]
fn junction_is_clamped_to_the_tail() {
    let route = route_edge(
        point(100.0, 75.0),
        point(200.0, 100.0),
        &vertical(),
        &EdgeRouteConfig::default(),
    );

    assert_eq!(
        xy(&route.points),
        vec![
            (100.0, 75.0),
            (100.0, 64.0),
            (200.0, 64.0),
            (200.0, 64.0),
            (200.0, 100.0)
        ]
    );
}

#[test]
fn backwards_edges_route_against_the_flow() {
    let route = route_edge(
        point(0.0, 300.0),
        point(100.0, 0.0),
        &vertical(),
        &EdgeRouteConfig::default(),
    );

    assert_eq!(
        xy(&route.points),
        vec![
            (0.0, 300.0),
            (0.0, 271.0),
            (100.0, 271.0),
            (100.0, 36.0),
            (100.0, 0.0)
        ]
    );
}

#[test]
fn horizontal_routes_swap_the_axes() {
    let route = route_edge(
        point(90.0, 37.5),
        point(200.0, 137.5),
        &horizontal(),
        &EdgeRouteConfig::default(),
    );

    assert_eq!(
        xy(&route.points),
        vec![
            (90.0, 37.5),
            (119.0, 37.5),
            (119.0, 137.5),
            (164.0, 137.5),
            (200.0, 137.5)
        ]
    );
    assert_eq!(
        route.add_step_icon,
        Some(Bounds::new(119.0, 67.5, 40.0, 40.0))
    );
}

#[test]
fn add_step_icon_clears_the_source_label() {
    let config = EdgeRouteConfig::default();
    let (start, end) = (point(100.0, 75.0), point(200.0, 300.0));

    let from_node = route_edge(start, end, &vertical(), &config);
    assert_eq!(from_node.add_step_icon, Some(Bounds::new(130.0, 171.5, 40.0, 40.0)));

    let from_group = EdgeRouteContext {
        source_is_group: true,
        ..vertical()
    };
    let route = route_edge(start, end, &from_group, &config);
    assert_eq!(route.add_step_icon, Some(Bounds::new(130.0, 161.5, 40.0, 40.0)));

    let into_placeholder = EdgeRouteContext {
        target_is_placeholder: true,
        ..vertical()
    };
    assert_eq!(route_edge(start, end, &into_placeholder, &config).add_step_icon, None);

    let into_branch_marker = EdgeRouteContext {
        target_can_have_previous_step: false,
        ..vertical()
    };
    let route = route_edge(start, end, &into_branch_marker, &config);
    assert_eq!(route.add_step_icon, None);
    assert_eq!(route.points.len(), 5);
}

fn data(id: &str, placeholder: bool) -> CanvasNodeData {
    CanvasNodeData {
        viz_id: id.to_string(),
        processor_name: "log".to_string(),
        component_name: None,
        is_placeholder: placeholder,
    }
}

#[test]
fn scene_edges_are_routed_between_anchors() {
    let config = CanvasConfig::default();
    let nodes = vec![
        CanvasNode::node("a", None, data("a", false), &config),
        CanvasNode::node("b", None, data("b", false), &config),
        CanvasNode::node("add", None, data("add", true), &config),
    ];
    let edges = vec![CanvasEdge::new("a", "b"), CanvasEdge::new("b", "add")];
    let mut scene = SceneGraph::from_parts(&nodes, &edges);
    assert!(route_scene_edges(&scene, &config).is_empty());

    let mut engine = PrecomputedLayout::new()
        .with_node("a", Bounds::new(0.0, 0.0, 90.0, 75.0))
        .with_node("b", Bounds::new(0.0, 125.0, 90.0, 75.0))
        .with_node("add", Bounds::new(100.0, 250.0, 90.0, 75.0));
    run_layout(&mut engine, &mut scene, LayoutType::DagreVertical).unwrap();

    let routes = route_scene_edges(&scene, &config);
    assert_eq!(routes.len(), 2);

    assert_eq!(routes[0].id, "a >>> b");
    assert_eq!(routes[0].route.path, "M45 75 L45 125");
    assert!(routes[0].route.add_step_icon.is_some());

    assert_eq!(routes[1].source, "b");
    assert_eq!(routes[1].target, "add");
    assert_eq!(routes[1].route.points.len(), 5);
    assert_eq!(routes[1].route.add_step_icon, None);
}
