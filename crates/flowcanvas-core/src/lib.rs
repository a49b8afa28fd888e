#![forbid(unsafe_code)]

//! Integration-flow step trees and their canvas graph model (headless).
//!
//! Design goals:
//! - pure, re-entrant diagram builds: every call returns a fresh model
//! - malformed trees degrade to smaller graphs instead of errors
//! - deterministic output (insertion-ordered nodes and edges, id-derived edge ids)

pub mod builder;
pub mod config;
pub mod error;
pub mod geom;
pub mod model;
pub mod processors;
pub mod scope;
pub mod tree;
pub mod viz;

pub use builder::{FlowDiagramBuilder, flow_diagram};
pub use config::{CanvasConfig, EdgeRouteConfig};
pub use error::{Error, Result};
pub use model::{
    CanvasEdge, CanvasGraph, CanvasModel, CanvasNode, CanvasNodeData, CanvasNodeKind,
    CanvasNodesAndEdges, LayoutType, NodeShape,
};
pub use processors::{BranchKind, ProcessorCatalog};
pub use scope::apply_scope;
pub use tree::{StepDefinition, VizNodeRef, VizTree};
pub use viz::{NodeData, VisualizationNode};

#[cfg(test)]
mod tests;
