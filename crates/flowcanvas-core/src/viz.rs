//! Read-only contract of the visualization tree the canvas is built from.

use serde::{Deserialize, Serialize};

/// Capabilities of one processor step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    /// The step is a branching container (choice, multicast, route, ...).
    pub is_group: bool,
    /// Synthetic "add step here" marker.
    pub is_placeholder: bool,
    pub processor_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
}

/// A handle onto one node of an ordered processor tree.
///
/// Handles are cheap to clone and compare by [`id`](Self::id), which must be unique within the
/// tree. `previous_node`/`next_node` describe the flow order, which usually (but not always)
/// follows sibling order; callers must not assume the next node shares the same parent.
pub trait VisualizationNode: Clone {
    fn id(&self) -> &str;
    fn data(&self) -> &NodeData;
    fn children(&self) -> Vec<Self>;
    fn parent_node(&self) -> Option<Self>;
    fn previous_node(&self) -> Option<Self>;
    fn next_node(&self) -> Option<Self>;
}
