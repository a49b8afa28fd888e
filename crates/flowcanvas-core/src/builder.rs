//! Conversion of a processor tree into canvas nodes and edges.
//!
//! The tree is walked depth-first in post-order. Each step becomes exactly one canvas node:
//! outermost branching containers become groups holding their flattened descendants, all other
//! steps become fixed-size nodes parented to the enclosing group. Edges follow the flow order,
//! fan out from branching containers into their branch entries, and merge branch leaves back
//! into whatever follows the container.

use crate::config::CanvasConfig;
use crate::model::{CanvasEdge, CanvasNode, CanvasNodeData, CanvasNodesAndEdges};
use crate::processors::{BranchKind, ProcessorCatalog};
use crate::scope::apply_scope;
use crate::viz::VisualizationNode;
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

/// Builds the scoped canvas diagram of one flow.
pub fn flow_diagram<V: VisualizationNode>(
    scope: &str,
    root: &V,
    config: &CanvasConfig,
) -> CanvasNodesAndEdges {
    let mut diagram = FlowDiagramBuilder::new(config).build(root);
    apply_scope(scope, &mut diagram, &config.scope_separator);
    diagram
}

/// How a step is rendered, decided once per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeRole {
    /// Outermost branching container: a group owning all of its descendants.
    RootGroup,
    /// Step with children below a root group; fans out to its branch entries.
    Container,
    /// Branching container without children; rendered as a plain node.
    EmptyGroup,
    Leaf,
}

impl NodeRole {
    pub(crate) fn classify<V: VisualizationNode>(node: &V, has_children: bool) -> Self {
        match (node.data().is_group, has_children) {
            (true, true) if node.parent_node().is_none() => NodeRole::RootGroup,
            (_, true) => NodeRole::Container,
            (true, false) => NodeRole::EmptyGroup,
            (false, false) => NodeRole::Leaf,
        }
    }
}

/// Single-use builder; every [`build`](Self::build) starts from empty accumulators.
pub struct FlowDiagramBuilder<'c> {
    config: &'c CanvasConfig,
    catalog: ProcessorCatalog,
    nodes: Vec<CanvasNode>,
    edges: Vec<CanvasEdge>,
    edge_ids: FxHashSet<String>,
    entered: FxHashSet<String>,
}

impl<'c> FlowDiagramBuilder<'c> {
    pub fn new(config: &'c CanvasConfig) -> Self {
        Self {
            config,
            catalog: ProcessorCatalog::from_config(config),
            nodes: Vec::new(),
            edges: Vec::new(),
            edge_ids: FxHashSet::default(),
            entered: FxHashSet::default(),
        }
    }

    /// Builds the unscoped diagram rooted at `root`.
    pub fn build<V: VisualizationNode>(mut self, root: &V) -> CanvasNodesAndEdges {
        self.append(root);
        debug!(
            root = root.id(),
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "built flow diagram"
        );
        CanvasNodesAndEdges {
            nodes: self.nodes,
            edges: self.edges,
        }
    }

    fn append<V: VisualizationNode>(&mut self, node: &V) {
        if !self.entered.insert(node.id().to_string()) {
            trace!(id = node.id(), "skipping already visited step");
            return;
        }

        let children = node.children();
        let role = NodeRole::classify(node, !children.is_empty());
        for child in &children {
            self.append(child);
        }

        let data = CanvasNodeData {
            viz_id: node.id().to_string(),
            processor_name: node.data().processor_name.clone(),
            component_name: node.data().component_name.clone(),
            is_placeholder: node.data().is_placeholder,
        };
        let parent = root_group_id(node);
        let canvas_node = match role {
            NodeRole::RootGroup => CanvasNode::group(
                node.id(),
                descendant_ids(node),
                parent,
                data,
                self.config,
            ),
            _ => CanvasNode::node(node.id(), parent, data, self.config),
        };
        self.nodes.push(canvas_node);

        self.append_edges(node, &children, role);
    }

    fn append_edges<V: VisualizationNode>(&mut self, node: &V, children: &[V], role: NodeRole) {
        let next = node.next_node();

        match role {
            NodeRole::Leaf | NodeRole::EmptyGroup => {
                if let Some(next) = &next {
                    self.push_edge(node.id(), next.id());
                }
                // An emptied branch construct stays attached to whatever precedes it.
                if role == NodeRole::EmptyGroup {
                    if let Some(prev) = node.previous_node() {
                        self.push_edge(prev.id(), node.id());
                    }
                }
            }
            NodeRole::Container => {
                let entries = branch_entry_nodes(children, &self.catalog);
                for entry in &entries {
                    self.push_edge(node.id(), entry.id());
                }

                if let Some(next) = &next {
                    let mut seen = FxHashSet::default();
                    let mut leaves = Vec::new();
                    for entry in &entries {
                        collect_branch_leaves(entry, &self.catalog, &mut seen, &mut leaves);
                    }
                    for leaf in &leaves {
                        self.push_edge(leaf.id(), next.id());
                    }
                }
            }
            NodeRole::RootGroup => {}
        }
    }

    fn push_edge(&mut self, source: &str, target: &str) {
        let edge = CanvasEdge::new(source, target);
        if self.edge_ids.insert(edge.id.clone()) {
            self.edges.push(edge);
        } else {
            trace!(id = %edge.id, "dropping duplicate edge");
        }
    }
}

/// Children that start a branch of their own: every branch marker, plus the first plain child
/// as the primary branch. Later plain children continue the primary branch and are excluded.
pub(crate) fn branch_entry_nodes<V: VisualizationNode>(
    children: &[V],
    catalog: &ProcessorCatalog,
) -> Vec<V> {
    let mut has_primary_branch = false;
    children
        .iter()
        .filter(|child| match catalog.branch_kind(&child.data().processor_name) {
            BranchKind::Special => true,
            BranchKind::Plain if !has_primary_branch => {
                has_primary_branch = true;
                true
            }
            BranchKind::Plain => false,
        })
        .cloned()
        .collect()
}

/// Terminal steps of the branch starting at `node`.
fn collect_branch_leaves<V: VisualizationNode>(
    node: &V,
    catalog: &ProcessorCatalog,
    seen: &mut FxHashSet<String>,
    out: &mut Vec<V>,
) {
    if !seen.insert(node.id().to_string()) {
        return;
    }

    if let Some(next) = node.next_node().filter(|next| same_parent(node, next)) {
        collect_branch_leaves(&next, catalog, seen, out);
        return;
    }

    let children = node.children();
    if children.is_empty() {
        out.push(node.clone());
        return;
    }
    for entry in branch_entry_nodes(&children, catalog) {
        collect_branch_leaves(&entry, catalog, seen, out);
    }
}

fn same_parent<V: VisualizationNode>(a: &V, b: &V) -> bool {
    let a = a.parent_node();
    let b = b.parent_node();
    a.as_ref().map(|p| p.id()) == b.as_ref().map(|p| p.id())
}

/// Id of the outermost group containing `node`, if that is not `node` itself.
fn root_group_id<V: VisualizationNode>(node: &V) -> Option<String> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut current = node.clone();
    while let Some(parent) = current.parent_node() {
        if !seen.insert(parent.id().to_string()) {
            break;
        }
        current = parent;
    }

    let is_root_group = current.data().is_group && current.parent_node().is_none();
    (is_root_group && current.id() != node.id()).then(|| current.id().to_string())
}

/// Pre-order ids of every descendant of `node`.
fn descendant_ids<V: VisualizationNode>(node: &V) -> Vec<String> {
    let mut out = Vec::new();
    let mut seen: FxHashSet<String> = FxHashSet::default();
    seen.insert(node.id().to_string());

    let mut stack: Vec<V> = node.children().into_iter().rev().collect();
    while let Some(current) = stack.pop() {
        if !seen.insert(current.id().to_string()) {
            continue;
        }
        out.push(current.id().to_string());
        stack.extend(current.children().into_iter().rev());
    }
    out
}
