//! Canvas sizing and edge-routing constants used when no override is configured.

use crate::model::{LayoutType, NodeShape};

pub const DEFAULT_LAYOUT: LayoutType = LayoutType::DagreVertical;

pub const DEFAULT_NODE_SHAPE: NodeShape = NodeShape::Rect;
pub const DEFAULT_NODE_WIDTH: f64 = 90.0;
pub const DEFAULT_NODE_HEIGHT: f64 = 75.0;

pub const DEFAULT_GROUP_PADDING: f64 = 40.0;

pub const ADD_STEP_ICON_SIZE: f64 = 40.0;
pub const EDGE_TERMINAL_SIZE: f64 = 6.0;
/// Gap kept between a plain source node's label and the add-step icon.
pub const EDGE_LABEL_CLEARANCE: f64 = 4.0;

pub const EDGE_LEAD_IN_DEFAULT: f64 = 29.0;
pub const EDGE_LEAD_IN_BRANCHING: f64 = 48.0;
pub const EDGE_TAIL_LENGTH: f64 = 36.0;
pub const EDGE_ARROW_SIZE: f64 = 14.0;
pub const EDGE_ALIGNMENT_TOLERANCE: f64 = 0.1;

pub const DEFAULT_SCOPE_SEPARATOR: &str = "|";

/// Processors that always start their own branch (choice branches, try/catch blocks, fallbacks).
pub const SPECIAL_CHILD_PROCESSORS: &[&str] =
    &["when", "otherwise", "doCatch", "doFinally", "onFallback"];
