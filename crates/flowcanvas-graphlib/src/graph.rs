//! The [`Graph`] container.

mod edge_key;
mod entries;

pub use edge_key::EdgeKey;

use edge_key::EdgeKeyView;
use entries::{EdgeEntry, NodeEntry};
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone, Copy, Default)]
pub struct GraphOptions {
    /// Track parent/children membership (`set_parent` is a no-op otherwise).
    pub compound: bool,
}

#[derive(Debug, Clone)]
pub struct Graph<N, E, G>
where
    N: Default,
    E: Default,
    G: Default,
{
    options: GraphOptions,
    graph_label: G,

    nodes: Vec<NodeEntry<N>>,
    node_index: HashMap<String, usize>,

    edges: Vec<EdgeEntry<E>>,
    edge_index: HashMap<EdgeKey, usize>,
}

impl<N, E, G> Graph<N, E, G>
where
    N: Default,
    E: Default,
    G: Default,
{
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            graph_label: G::default(),
            nodes: Vec::new(),
            node_index: HashMap::default(),
            edges: Vec::new(),
            edge_index: HashMap::default(),
        }
    }

    pub fn graph(&self) -> &G {
        &self.graph_label
    }

    pub fn graph_mut(&mut self) -> &mut G {
        &mut self.graph_label
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn set_node(&mut self, id: impl Into<String>, label: N) -> &mut Self {
        let id = id.into();
        if let Some(&ix) = self.node_index.get(&id) {
            self.nodes[ix].label = label;
            return self;
        }
        let ix = self.nodes.len();
        self.nodes.push(NodeEntry::new(id.clone(), label));
        self.node_index.insert(id, ix);
        self
    }

    fn ensure_node_ix(&mut self, id: String) -> usize {
        if let Some(&ix) = self.node_index.get(&id) {
            return ix;
        }
        let ix = self.nodes.len();
        self.nodes.push(NodeEntry::new(id.clone(), N::default()));
        self.node_index.insert(id, ix);
        ix
    }

    pub fn node(&self, id: &str) -> Option<&N> {
        self.node_index.get(id).map(|&ix| &self.nodes[ix].label)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut N> {
        self.node_index
            .get(id)
            .copied()
            .map(move |ix| &mut self.nodes[ix].label)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node ids in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edge keys in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &EdgeKey> {
        self.edges.iter().map(|e| &e.key)
    }

    pub fn has_edge(&self, v: &str, w: &str) -> bool {
        self.edge_index.contains_key(&EdgeKeyView { v, w })
    }

    pub fn edge(&self, v: &str, w: &str) -> Option<&E> {
        self.edge_index
            .get(&EdgeKeyView { v, w })
            .map(|&ix| &self.edges[ix].label)
    }

    /// Inserts `v -> w`, creating missing endpoints with a default label. Re-setting an existing
    /// edge only replaces its label.
    pub fn set_edge_with_label(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        label: E,
    ) -> &mut Self {
        let (v, w) = (v.into(), w.into());
        if let Some(&ix) = self.edge_index.get(&EdgeKeyView { v: &v, w: &w }) {
            self.edges[ix].label = label;
            return self;
        }

        let v_ix = self.ensure_node_ix(v.clone());
        let w_ix = self.ensure_node_ix(w.clone());
        let key = EdgeKey { v, w };
        let ix = self.edges.len();
        self.edges.push(EdgeEntry {
            key: key.clone(),
            v_ix,
            w_ix,
            label,
        });
        self.edge_index.insert(key, ix);
        self.nodes[v_ix].out_edges.push(ix);
        self.nodes[w_ix].in_edges.push(ix);
        self
    }

    /// Targets of `v`'s outgoing edges, in edge insertion order.
    pub fn successors(&self, v: &str) -> Vec<&str> {
        let Some(&v_ix) = self.node_index.get(v) else {
            return Vec::new();
        };
        self.nodes[v_ix]
            .out_edges
            .iter()
            .map(|&e| self.nodes[self.edges[e].w_ix].id.as_str())
            .collect()
    }

    /// Sources of `v`'s incoming edges, in edge insertion order.
    pub fn predecessors(&self, v: &str) -> Vec<&str> {
        let Some(&v_ix) = self.node_index.get(v) else {
            return Vec::new();
        };
        self.nodes[v_ix]
            .in_edges
            .iter()
            .map(|&e| self.nodes[self.edges[e].v_ix].id.as_str())
            .collect()
    }

    pub fn out_degree(&self, v: &str) -> usize {
        self.node_index
            .get(v)
            .map_or(0, |&ix| self.nodes[ix].out_edges.len())
    }

    pub fn in_degree(&self, v: &str) -> usize {
        self.node_index
            .get(v)
            .map_or(0, |&ix| self.nodes[ix].in_edges.len())
    }

    pub fn set_parent(&mut self, child: impl Into<String>, parent: impl Into<String>) -> &mut Self {
        if !self.options.compound {
            return self;
        }
        let child_ix = self.ensure_node_ix(child.into());
        let parent_ix = self.ensure_node_ix(parent.into());
        if child_ix == parent_ix {
            return self;
        }

        if let Some(prev) = self.nodes[child_ix].parent.replace(parent_ix) {
            if prev == parent_ix {
                return self;
            }
            self.nodes[prev].children.retain(|&c| c != child_ix);
        }
        self.nodes[parent_ix].children.push(child_ix);
        self
    }

    pub fn parent(&self, child: &str) -> Option<&str> {
        let &ix = self.node_index.get(child)?;
        self.nodes[ix]
            .parent
            .map(|p| self.nodes[p].id.as_str())
    }

    pub fn children(&self, parent: &str) -> Vec<&str> {
        let Some(&ix) = self.node_index.get(parent) else {
            return Vec::new();
        };
        self.nodes[ix]
            .children
            .iter()
            .map(|&c| self.nodes[c].id.as_str())
            .collect()
    }

    /// Nodes without a parent (all nodes when the graph is not compound).
    pub fn children_root(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|n| n.parent.is_none())
            .map(|n| n.id.as_str())
            .collect()
    }

    /// Parent chain of `v`, nearest first. Stops before the first repeated node.
    pub fn ancestors(&self, v: &str) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        let Some(&start) = self.node_index.get(v) else {
            return out;
        };
        let mut seen = vec![false; self.nodes.len()];
        seen[start] = true;
        let mut cur = self.nodes[start].parent;
        while let Some(ix) = cur {
            if std::mem::replace(&mut seen[ix], true) {
                break;
            }
            out.push(self.nodes[ix].id.as_str());
            cur = self.nodes[ix].parent;
        }
        out
    }
}
