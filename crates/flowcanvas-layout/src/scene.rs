//! Compound graph holding the positioned canvas between layout passes.

use crate::graphlib::{Graph, GraphOptions};
use crate::model::Bounds;
use crate::view::PositionBatch;
use flowcanvas_core::{CanvasEdge, CanvasModel, CanvasNode, CanvasNodeKind, LayoutType};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneNode {
    pub kind: CanvasNodeKind,
    pub group: bool,
    pub collapsed: bool,
    pub bounds: Bounds,
    /// Unscoped id of the step this node renders.
    pub viz_id: String,
    pub processor_name: String,
}

impl SceneNode {
    pub fn is_placeholder(&self) -> bool {
        self.kind == CanvasNodeKind::Placeholder
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneEdge {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneLabel {
    /// Orientation of the last completed layout pass; `None` until the first one.
    pub layout: Option<LayoutType>,
    /// Number of completed layout passes.
    pub generation: u64,
}

/// Canvas nodes and edges as a compound graph with bounds.
///
/// Parent membership is taken from each node's `parent_node` and from the flattened `children`
/// list of root groups. Edges whose endpoints are not part of the model are dropped.
#[derive(Debug, Clone)]
pub struct SceneGraph {
    graph: Graph<SceneNode, SceneEdge, SceneLabel>,
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self {
            graph: Graph::new(GraphOptions { compound: true }),
        }
    }
}

impl SceneGraph {
    pub fn from_model(model: &CanvasModel) -> Self {
        Self::from_parts(&model.nodes, &model.edges)
    }

    pub fn from_parts(nodes: &[CanvasNode], edges: &[CanvasEdge]) -> Self {
        let mut scene = Self::default();
        let g = &mut scene.graph;

        for node in nodes {
            g.set_node(
                node.id.clone(),
                SceneNode {
                    kind: node.kind,
                    group: node.group,
                    collapsed: false,
                    bounds: Bounds::new(
                        0.0,
                        0.0,
                        node.width.unwrap_or_default(),
                        node.height.unwrap_or_default(),
                    ),
                    viz_id: node.data.viz_id.clone(),
                    processor_name: node.data.processor_name.clone(),
                },
            );
        }

        for node in nodes {
            if let Some(parent) = node.parent_node.as_deref() {
                if g.has_node(parent) {
                    g.set_parent(node.id.clone(), parent);
                }
            }
        }
        for node in nodes.iter().filter(|n| n.group) {
            for child in &node.children {
                if g.has_node(child) && g.parent(child).is_none() {
                    g.set_parent(child.clone(), node.id.clone());
                }
            }
        }

        for edge in edges {
            if !g.has_node(&edge.source) || !g.has_node(&edge.target) {
                warn!(id = %edge.id, "dropping edge with a missing endpoint");
                continue;
            }
            g.set_edge_with_label(
                edge.source.clone(),
                edge.target.clone(),
                SceneEdge {
                    id: edge.id.clone(),
                },
            );
        }

        debug!(
            nodes = g.node_count(),
            edges = g.edge_count(),
            "built scene graph"
        );
        scene
    }

    pub fn graph(&self) -> &Graph<SceneNode, SceneEdge, SceneLabel> {
        &self.graph
    }

    pub fn node(&self, id: &str) -> Option<&SceneNode> {
        self.graph.node(id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut SceneNode> {
        self.graph.node_mut(id)
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.graph.nodes()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn layout(&self) -> Option<LayoutType> {
        self.graph.graph().layout
    }

    pub fn generation(&self) -> u64 {
        self.graph.graph().generation
    }

    /// Continues the pass numbering of a scene this one replaces.
    pub fn resume_generation(&mut self, generation: u64) {
        self.graph.graph_mut().generation = generation;
    }

    /// Records a completed layout pass in `layout` orientation and returns its generation.
    pub fn finish_layout(&mut self, layout: LayoutType) -> u64 {
        let label = self.graph.graph_mut();
        label.layout = Some(layout);
        label.generation += 1;
        label.generation
    }

    /// Current origin of every node, in insertion order.
    pub fn positions(&self) -> PositionBatch {
        let mut batch = PositionBatch::new();
        for id in self.graph.nodes() {
            if let Some(node) = self.graph.node(id) {
                batch.insert(id, node.bounds.origin());
            }
        }
        batch
    }
}
