//! A canvas holding several flows, laid out together as one graph.
//!
//! Every visible flow is built into its own diagram and scoped by its flow id, so the merged
//! model never mixes ids of different flows. Layout is a two step hand-off:
//! [`Canvas::layout`] runs the engine and returns a [`LayoutEnd`] notification, and
//! [`Canvas::handle_layout_end`] runs the alignment corrector for exactly that pass.

use crate::layout::{
    AlignmentCorrector, LayoutEngine, PositionBatch, RoutedEdge, SceneGraph, route_scene_edges,
    run_layout,
};
use crate::{Error, Result};
use flowcanvas_core::{
    CanvasConfig, CanvasGraph, CanvasModel, LayoutType, ProcessorCatalog, StepDefinition, VizTree,
    flow_diagram,
};
use indexmap::IndexMap;
use tracing::debug;

/// Id of the merged canvas graph.
pub const GRAPH_ID: &str = "g1";

/// Notification that a layout pass has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEnd {
    pub generation: u64,
}

#[derive(Debug, Clone)]
struct Flow {
    tree: VizTree,
    visible: bool,
}

#[derive(Debug, Clone)]
pub struct Canvas {
    config: CanvasConfig,
    catalog: ProcessorCatalog,
    layout: LayoutType,
    flows: IndexMap<String, Flow>,
    scene: Option<SceneGraph>,
    /// Generation whose [`LayoutEnd`] has not been handled yet.
    pending: Option<u64>,
    corrector: AlignmentCorrector,
}

impl Canvas {
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            catalog: ProcessorCatalog::from_config(&config),
            layout: config.layout,
            config,
            flows: IndexMap::new(),
            scene: None,
            pending: None,
            corrector: AlignmentCorrector::new(),
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Adds a visible flow. Re-adding an id replaces its tree in place.
    pub fn add_flow(&mut self, id: impl Into<String>, tree: VizTree) -> &mut Self {
        let id = id.into();
        match self.flows.get_mut(&id) {
            Some(flow) => flow.tree = tree,
            None => {
                self.flows.insert(id, Flow {
                    tree,
                    visible: true,
                });
            }
        }
        self
    }

    /// Builds the tree of `root` with this canvas' processor catalog and adds it as a flow.
    pub fn add_definition(
        &mut self,
        id: impl Into<String>,
        root: &StepDefinition,
    ) -> Result<&mut Self> {
        let tree = VizTree::from_definition(root, &self.catalog)?;
        Ok(self.add_flow(id, tree))
    }

    pub fn remove_flow(&mut self, id: &str) -> Option<VizTree> {
        self.flows.shift_remove(id).map(|flow| flow.tree)
    }

    pub fn flow_ids(&self) -> impl Iterator<Item = &str> {
        self.flows.keys().map(String::as_str)
    }

    pub fn is_visible(&self, id: &str) -> Option<bool> {
        self.flows.get(id).map(|flow| flow.visible)
    }

    pub fn set_visible(&mut self, id: &str, visible: bool) -> Result<()> {
        let flow = self.flows.get_mut(id).ok_or_else(|| Error::UnknownFlow {
            id: id.to_string(),
        })?;
        flow.visible = visible;
        Ok(())
    }

    pub fn layout_type(&self) -> LayoutType {
        self.layout
    }

    /// Takes effect on the next [`draw`](Self::draw) or [`layout`](Self::layout).
    pub fn set_layout(&mut self, layout: LayoutType) {
        self.layout = layout;
    }

    /// Builds the merged model of all visible flows, in the order they were added.
    pub fn draw(&self) -> CanvasModel {
        let mut nodes = Vec::new();
        let mut edges = Vec::new();
        for (id, flow) in self.flows.iter().filter(|(_, flow)| flow.visible) {
            let diagram = flow_diagram(id, &flow.tree.root(), &self.config);
            nodes.extend(diagram.nodes);
            edges.extend(diagram.edges);
        }
        debug!(nodes = nodes.len(), edges = edges.len(), "drew canvas");

        CanvasModel {
            nodes,
            edges,
            graph: CanvasGraph {
                id: GRAPH_ID.to_string(),
                layout: self.layout,
            },
        }
    }

    /// Lays out a freshly drawn scene with `engine`.
    ///
    /// On failure the previous scene and its pending notification are kept.
    pub fn layout<E: LayoutEngine + ?Sized>(&mut self, engine: &mut E) -> Result<LayoutEnd> {
        let mut scene = SceneGraph::from_model(&self.draw());
        scene.resume_generation(self.generation());

        let generation = run_layout(engine, &mut scene, self.layout)?;
        self.scene = Some(scene);
        self.pending = Some(generation);
        Ok(LayoutEnd { generation })
    }

    /// Runs the alignment corrector for the pass announced by `end` and returns the moves it
    /// applied. Each notification is handled at most once.
    pub fn handle_layout_end(&mut self, end: LayoutEnd) -> Result<PositionBatch> {
        let scene = self.scene.as_mut().ok_or(Error::NotLaidOut)?;
        if self.pending != Some(end.generation) {
            return Err(Error::StaleLayout {
                received: end.generation,
                current: scene.generation(),
            });
        }
        self.pending = None;

        let batch = self.corrector.run(scene);
        debug!(generation = end.generation, moved = batch.len(), "handled layout end");
        Ok(batch)
    }

    /// Number of completed layout passes.
    pub fn generation(&self) -> u64 {
        self.scene.as_ref().map_or(0, SceneGraph::generation)
    }

    pub fn scene(&self) -> Option<&SceneGraph> {
        self.scene.as_ref()
    }

    /// Routes the edges of the laid-out scene that are not hidden by a collapsed group.
    pub fn edge_routes(&self) -> Result<Vec<RoutedEdge>> {
        let scene = self.scene.as_ref().ok_or(Error::NotLaidOut)?;
        Ok(route_scene_edges(scene, &self.config))
    }
}
