//! Canvas graph model handed to the layout engine.
//!
//! Field names serialize in camelCase so the model can be fed to a JavaScript canvas unchanged.

use crate::config::CanvasConfig;
use serde::{Deserialize, Serialize};

/// Separator between source and target in an edge id (`"a >>> b"`).
pub const EDGE_ID_SEPARATOR: &str = " >>> ";

/// Builds the deterministic id of the edge `source -> target`.
pub fn edge_id(source: &str, target: &str) -> String {
    format!("{source}{EDGE_ID_SEPARATOR}{target}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LayoutType {
    DagreHorizontal,
    #[default]
    DagreVertical,
}

impl LayoutType {
    pub fn is_horizontal(self) -> bool {
        matches!(self, LayoutType::DagreHorizontal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeShape {
    Ellipse,
    #[default]
    Rect,
    Rhombus,
    Stadium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CanvasNodeKind {
    #[default]
    #[serde(rename = "node")]
    Node,
    #[serde(rename = "group")]
    Group,
    #[serde(rename = "node-placeholder")]
    Placeholder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeStyle {
    #[default]
    Solid,
    Dashed,
}

/// Back-reference from a canvas node to the step it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasNodeData {
    /// Unscoped id of the source visualization node.
    pub viz_id: String,
    pub processor_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
    #[serde(default)]
    pub is_placeholder: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupStyle {
    pub padding: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: CanvasNodeKind,
    pub group: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Flattened descendant ids; only root groups carry any.
    #[serde(default)]
    pub children: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_node: Option<String>,
    pub data: CanvasNodeData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<NodeShape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<GroupStyle>,
}

impl CanvasNode {
    /// A group sized by the layout engine from its contents plus `padding`.
    pub fn group(
        id: impl Into<String>,
        children: Vec<String>,
        parent_node: Option<String>,
        data: CanvasNodeData,
        config: &CanvasConfig,
    ) -> Self {
        let id = id.into();
        Self {
            label: Some(id.clone()),
            id,
            kind: CanvasNodeKind::Group,
            group: true,
            children,
            parent_node,
            data,
            width: None,
            height: None,
            shape: None,
            style: Some(GroupStyle {
                padding: config.group_padding,
            }),
        }
    }

    /// A fixed-size node (or placeholder, when `data.is_placeholder` is set).
    pub fn node(
        id: impl Into<String>,
        parent_node: Option<String>,
        data: CanvasNodeData,
        config: &CanvasConfig,
    ) -> Self {
        let kind = if data.is_placeholder {
            CanvasNodeKind::Placeholder
        } else {
            CanvasNodeKind::Node
        };
        Self {
            id: id.into(),
            kind,
            group: false,
            label: None,
            children: Vec::new(),
            parent_node,
            data,
            width: Some(config.node_width),
            height: Some(config.node_height),
            shape: Some(config.node_shape),
            style: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub edge_style: EdgeStyle,
}

impl CanvasEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: edge_id(&source, &target),
            source,
            target,
            edge_style: EdgeStyle::Solid,
        }
    }
}

/// Output of one diagram build: the nodes and edges of a single flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasNodesAndEdges {
    pub nodes: Vec<CanvasNode>,
    pub edges: Vec<CanvasEdge>,
}

impl CanvasNodesAndEdges {
    pub fn node(&self, id: &str) -> Option<&CanvasNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.edges
            .iter()
            .any(|e| e.source == source && e.target == target)
    }

    /// Edges whose source or target is not a node of this output.
    pub fn dangling_edges(&self) -> Vec<&CanvasEdge> {
        let ids: rustc_hash::FxHashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        self.edges
            .iter()
            .filter(|e| !ids.contains(e.source.as_str()) || !ids.contains(e.target.as_str()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasGraph {
    pub id: String,
    pub layout: LayoutType,
}

/// All visible flows of a canvas merged into one graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasModel {
    pub nodes: Vec<CanvasNode>,
    pub edges: Vec<CanvasEdge>,
    pub graph: CanvasGraph,
}
