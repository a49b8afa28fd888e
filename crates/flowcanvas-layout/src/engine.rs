//! The seam to the hierarchical layout engine.

use crate::model::Bounds;
use crate::scene::SceneGraph;
use crate::{Error, Result};
use flowcanvas_core::LayoutType;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Assigns bounds (and collapsed state) to every node of a scene.
pub trait LayoutEngine {
    fn layout(&mut self, scene: &mut SceneGraph, layout: LayoutType) -> Result<()>;
}

/// Runs one layout pass and records it on the scene, returning the pass generation.
pub fn run_layout<E: LayoutEngine + ?Sized>(
    engine: &mut E,
    scene: &mut SceneGraph,
    layout: LayoutType,
) -> Result<u64> {
    engine.layout(scene, layout)?;
    let generation = scene.finish_layout(layout);
    debug!(generation, ?layout, "layout pass finished");
    Ok(generation)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NodePlacement {
    #[serde(flatten)]
    pub bounds: Bounds,
    #[serde(default)]
    pub collapsed: bool,
}

/// Bounds computed elsewhere, keyed by node id.
///
/// ```json
/// { "nodes": { "route-1|from": { "x": 0, "y": 0, "width": 90, "height": 75 } } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrecomputedLayout {
    pub nodes: IndexMap<String, NodePlacement>,
}

impl PrecomputedLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node(mut self, id: impl Into<String>, bounds: Bounds) -> Self {
        self.nodes.insert(
            id.into(),
            NodePlacement {
                bounds,
                collapsed: false,
            },
        );
        self
    }

    /// Marks an already placed node as collapsed.
    pub fn collapsed(mut self, id: &str) -> Self {
        if let Some(placement) = self.nodes.get_mut(id) {
            placement.collapsed = true;
        }
        self
    }
}

impl LayoutEngine for PrecomputedLayout {
    /// Fails without touching the scene if any node has no placement.
    fn layout(&mut self, scene: &mut SceneGraph, _layout: LayoutType) -> Result<()> {
        if let Some(missing) = scene.node_ids().find(|id| !self.nodes.contains_key(*id)) {
            return Err(Error::MissingBounds {
                id: missing.to_string(),
            });
        }

        for (id, placement) in &self.nodes {
            if let Some(node) = scene.node_mut(id) {
                node.bounds = placement.bounds;
                node.collapsed = placement.collapsed;
            }
        }
        Ok(())
    }
}
