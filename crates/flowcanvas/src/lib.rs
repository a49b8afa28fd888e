#![forbid(unsafe_code)]

//! Headless integration-flow canvas.
//!
//! `flowcanvas` combines the diagram builder from `flowcanvas-core` with the scene graph and
//! alignment corrector from `flowcanvas-layout`:
//!
//! ```no_run
//! use flowcanvas::canvas::Canvas;
//! use flowcanvas::layout::{Bounds, PrecomputedLayout};
//! use flowcanvas::{CanvasConfig, StepDefinition};
//!
//! # fn main() -> flowcanvas::Result<()> {
//! let mut canvas = Canvas::new(CanvasConfig::default());
//! canvas.add_definition("route-1", &StepDefinition::new("from", "from"))?;
//!
//! let mut engine =
//!     PrecomputedLayout::new().with_node("route-1|from", Bounds::new(0.0, 0.0, 90.0, 75.0));
//! let end = canvas.layout(&mut engine)?;
//! let moved = canvas.handle_layout_end(end)?;
//! assert!(moved.is_empty());
//! # Ok(())
//! # }
//! ```

pub use flowcanvas_core::*;

pub mod canvas;
pub mod document;

pub mod layout {
    pub use flowcanvas_layout::*;
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] flowcanvas_core::Error),

    #[error(transparent)]
    Layout(#[from] flowcanvas_layout::Error),

    #[error("unknown flow: {id}")]
    UnknownFlow { id: String },

    #[error("stale layout notification for generation {received} (current: {current})")]
    StaleLayout { received: u64, current: u64 },

    #[error("the canvas has not been laid out yet")]
    NotLaidOut,

    #[error("flows document JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("flows document YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
