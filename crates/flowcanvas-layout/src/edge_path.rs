//! Orthogonal edge routes between anchored nodes.
//!
//! An edge whose endpoints line up on the flow axis is drawn straight. Any other edge leaves
//! its source along the flow axis for a short lead-in, crosses over at a junction line, and
//! enters its target after a fixed tail:
//!
//! ```text
//! start ──┐
//!         │ (junction)
//!         └──── tail ──▶ end
//! ```

use crate::anchor::{source_anchor, target_anchor};
use crate::model::{Axis, Bounds, LayoutPoint};
use crate::scene::SceneGraph;
use crate::visibility::is_edge_hidden;
use flowcanvas_core::geom::{Point, point};
use flowcanvas_core::{CanvasConfig, EdgeRouteConfig, LayoutType, ProcessorCatalog};
use serde::Serialize;
use std::fmt::Write as _;
use tracing::trace;

/// Graph facts about one edge that shape its route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRouteContext {
    pub layout: LayoutType,
    /// The source has more than one outgoing edge.
    pub source_branches: bool,
    /// The target has more than one incoming edge.
    pub target_merges: bool,
    pub source_is_group: bool,
    /// Placeholders cannot receive a step in front of them, so they get no add-step icon.
    pub target_is_placeholder: bool,
    /// Whether a step may be inserted in front of the target at all. Branch markers are only
    /// added through their container.
    pub target_can_have_previous_step: bool,
}

impl Default for EdgeRouteContext {
    fn default() -> Self {
        Self {
            layout: LayoutType::default(),
            source_branches: false,
            target_merges: false,
            source_is_group: false,
            target_is_placeholder: false,
            target_can_have_previous_step: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeRoute {
    pub points: Vec<LayoutPoint>,
    /// SVG path data (`M x y L x y ...`).
    pub path: String,
    /// Box of the "add step" button drawn on the edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_step_icon: Option<Bounds>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutedEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(flatten)]
    pub route: EdgeRoute,
}

pub fn route_edge(
    start: Point,
    end: Point,
    ctx: &EdgeRouteContext,
    config: &EdgeRouteConfig,
) -> EdgeRoute {
    let flow = Axis::flow(ctx.layout);
    let cross = flow.other();
    let aligned = (cross.of(start) - cross.of(end)).abs() < config.alignment_tolerance;

    let points: Vec<Point> = if aligned {
        vec![start, end]
    } else {
        let lead_in = if ctx.source_branches || ctx.target_merges {
            config.lead_in_branching
        } else {
            config.lead_in_default
        };
        let (from, to) = (flow.of(start), flow.of(end));
        let direction = if to < from { -1.0 } else { 1.0 };

        // The junction may not come closer to the end than the tail.
        let tail_start = to - direction * config.tail_length;
        let mut junction = from + direction * lead_in;
        if (junction - tail_start) * direction > 0.0 {
            junction = tail_start;
        }

        let at = |along: f64, across: f64| match flow {
            Axis::X => point(along, across),
            Axis::Y => point(across, along),
        };
        vec![
            start,
            at(junction, cross.of(start)),
            at(junction, cross.of(end)),
            at(tail_start, cross.of(end)),
            end,
        ]
    };

    let add_step_icon = (!ctx.target_is_placeholder && ctx.target_can_have_previous_step)
        .then(|| icon_bounds(start, end, ctx, config));

    EdgeRoute {
        path: svg_path(&points),
        points: points.into_iter().map(LayoutPoint::from).collect(),
        add_step_icon,
    }
}

fn icon_bounds(start: Point, end: Point, ctx: &EdgeRouteContext, config: &EdgeRouteConfig) -> Bounds {
    let size = config.add_step_icon_size;
    let mut x = start.x + (end.x - start.x - size) / 2.0;
    let mut y = start.y + (end.y - start.y - size) / 2.0;
    if ctx.layout.is_horizontal() {
        x -= config.terminal_size;
    } else if ctx.source_is_group {
        y -= config.terminal_size;
    } else {
        y += config.label_clearance;
    }
    Bounds::new(x, y, size, size)
}

fn svg_path(points: &[Point]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        out.push_str(if i == 0 { "M" } else { " L" });
        push_number(&mut out, p.x);
        out.push(' ');
        push_number(&mut out, p.y);
    }
    out
}

fn push_number(out: &mut String, v: f64) {
    if !v.is_finite() {
        out.push('0');
        return;
    }
    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    if v == -0.0 {
        v = 0.0;
    }
    let _ = write!(out, "{v}");
}

/// Routes every edge of a laid-out scene that is not hidden inside a collapsed group.
///
/// Returns nothing until the scene has completed a layout pass.
pub fn route_scene_edges(scene: &SceneGraph, config: &CanvasConfig) -> Vec<RoutedEdge> {
    let Some(layout) = scene.layout() else {
        return Vec::new();
    };
    let catalog = ProcessorCatalog::from_config(config);
    let g = scene.graph();

    let mut out = Vec::with_capacity(g.edge_count());
    for key in g.edges() {
        if is_edge_hidden(scene, &key.v, &key.w) {
            trace!(source = %key.v, target = %key.w, "edge hidden by collapsed group");
            continue;
        }
        let (Some(source), Some(target)) = (scene.node(&key.v), scene.node(&key.w)) else {
            continue;
        };

        let ctx = EdgeRouteContext {
            layout,
            source_branches: g.out_degree(&key.v) > 1,
            target_merges: g.in_degree(&key.w) > 1,
            source_is_group: source.group,
            target_is_placeholder: target.is_placeholder(),
            target_can_have_previous_step: !catalog.is_special(&target.processor_name),
        };
        let route = route_edge(
            source_anchor(&source.bounds, layout),
            target_anchor(&target.bounds, layout),
            &ctx,
            &config.edge,
        );
        out.push(RoutedEdge {
            id: g
                .edge(&key.v, &key.w)
                .map(|e| e.id.clone())
                .unwrap_or_else(|| flowcanvas_core::model::edge_id(&key.v, &key.w)),
            source: key.v.clone(),
            target: key.w.clone(),
            route,
        });
    }
    out
}
