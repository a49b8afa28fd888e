#![forbid(unsafe_code)]

//! Positioned scene graph for flowcanvas diagrams.
//!
//! The hierarchical layout itself is delegated to a [`LayoutEngine`]; this crate owns what
//! happens around it: turning a canvas model into a compound graph, exposing the positioned
//! result through [`LayoutView`], straightening chains after each pass
//! ([`AlignmentCorrector`]) and routing the orthogonal edges drawn between nodes.

pub use flowcanvas_graphlib as graphlib;

pub mod align;
pub mod anchor;
pub mod edge_path;
pub mod engine;
pub mod model;
pub mod scene;
pub mod view;
pub mod visibility;

pub use align::AlignmentCorrector;
pub use edge_path::{EdgeRoute, EdgeRouteContext, RoutedEdge, route_edge, route_scene_edges};
pub use engine::{LayoutEngine, NodePlacement, PrecomputedLayout, run_layout};
pub use model::{Axis, Bounds, LayoutPoint};
pub use scene::{SceneEdge, SceneGraph, SceneLabel, SceneNode};
pub use view::{LayoutView, PositionBatch};
pub use visibility::{closest_visible_parent, is_edge_hidden};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no precomputed bounds for node {id}")]
    MissingBounds { id: String },
    #[error(transparent)]
    Core(#[from] flowcanvas_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
