//! Read access to a positioned graph, plus the batched position writes applied back to it.

use crate::model::{Bounds, LayoutPoint};
use crate::scene::SceneGraph;
use flowcanvas_core::LayoutType;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Positions closer than this are considered equal.
const POSITION_EPSILON: f64 = 1e-9;

/// What post-layout passes may read from a laid-out graph.
///
/// Neighbor lists follow edge insertion order. Unknown ids yield empty answers.
pub trait LayoutView {
    /// Orientation of the completed layout pass, if any.
    fn layout(&self) -> Option<LayoutType>;
    fn top_level_nodes(&self) -> Vec<&str>;
    fn bounds(&self, id: &str) -> Option<Bounds>;
    fn incoming(&self, id: &str) -> Vec<&str>;
    fn outgoing(&self, id: &str) -> Vec<&str>;
    fn parent(&self, id: &str) -> Option<&str>;
    /// Parent chain of `id`, nearest first, without repeats.
    fn ancestors(&self, id: &str) -> Vec<&str>;
    fn children(&self, id: &str) -> Vec<&str>;
    fn is_group(&self, id: &str) -> bool;
    fn is_collapsed(&self, id: &str) -> bool;

    /// Overwrites the origin of every node in `batch` (sizes are kept) as a single update.
    fn apply_positions(&mut self, batch: &PositionBatch);
}

/// New node origins keyed by node id, in the order they were decided.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositionBatch {
    positions: IndexMap<String, LayoutPoint>,
}

impl PositionBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the origin for `id`; a later insert for the same id wins but keeps its slot.
    pub fn insert(&mut self, id: impl Into<String>, origin: LayoutPoint) {
        self.positions.insert(id.into(), origin);
    }

    pub fn get(&self, id: &str) -> Option<LayoutPoint> {
        self.positions.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, LayoutPoint)> {
        self.positions.iter().map(|(id, p)| (id.as_str(), *p))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.positions.keys().map(String::as_str)
    }

    /// Whether applying this batch to `view` would leave every known node where it is.
    pub fn is_noop<V: LayoutView + ?Sized>(&self, view: &V) -> bool {
        self.iter().all(|(id, p)| {
            view.bounds(id).is_none_or(|b| {
                (b.x - p.x).abs() <= POSITION_EPSILON && (b.y - p.y).abs() <= POSITION_EPSILON
            })
        })
    }
}

impl LayoutView for SceneGraph {
    fn layout(&self) -> Option<LayoutType> {
        SceneGraph::layout(self)
    }

    fn top_level_nodes(&self) -> Vec<&str> {
        self.graph().children_root()
    }

    fn bounds(&self, id: &str) -> Option<Bounds> {
        self.node(id).map(|n| n.bounds)
    }

    fn incoming(&self, id: &str) -> Vec<&str> {
        self.graph().predecessors(id)
    }

    fn outgoing(&self, id: &str) -> Vec<&str> {
        self.graph().successors(id)
    }

    fn parent(&self, id: &str) -> Option<&str> {
        self.graph().parent(id)
    }

    fn ancestors(&self, id: &str) -> Vec<&str> {
        self.graph().ancestors(id)
    }

    fn children(&self, id: &str) -> Vec<&str> {
        self.graph().children(id)
    }

    fn is_group(&self, id: &str) -> bool {
        self.node(id).is_some_and(|n| n.group)
    }

    fn is_collapsed(&self, id: &str) -> bool {
        self.node(id).is_some_and(|n| n.collapsed)
    }

    fn apply_positions(&mut self, batch: &PositionBatch) {
        for (id, origin) in batch.iter() {
            if let Some(node) = self.node_mut(id) {
                node.bounds = node.bounds.moved_to(origin);
            }
        }
    }
}
