//! Id namespacing for combining several flows into one canvas graph.

use crate::model::CanvasNodesAndEdges;

pub fn scoped_id(scope: &str, separator: &str, id: &str) -> String {
    format!("{scope}{separator}{id}")
}

/// Prefixes every id of `diagram` (nodes, child and parent references, edge ids and endpoints)
/// with `scope` followed by `separator`.
///
/// Callers must use a distinct scope per independently built diagram; collisions between
/// scopes are not detected.
pub fn apply_scope(scope: &str, diagram: &mut CanvasNodesAndEdges, separator: &str) {
    let scoped = |id: &str| scoped_id(scope, separator, id);

    for node in &mut diagram.nodes {
        node.id = scoped(&node.id);
        for child in &mut node.children {
            *child = scoped(child);
        }
        if let Some(parent) = node.parent_node.as_mut() {
            *parent = scoped(parent);
        }
    }

    for edge in &mut diagram.edges {
        edge.id = scoped(&edge.id);
        edge.source = scoped(&edge.source);
        edge.target = scoped(&edge.target);
    }
}
