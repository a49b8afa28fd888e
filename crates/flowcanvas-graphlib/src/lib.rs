#![forbid(unsafe_code)]

//! Compound directed graph container used by `flowcanvas-layout`.
//!
//! Nodes are keyed by string id and kept in insertion order. Edges are simple (at most one edge
//! per ordered `(v, w)` pair) and every node keeps its own incoming/outgoing adjacency so that
//! degree and neighbor queries stay O(degree). Compound graphs additionally track a single parent
//! per node.

mod graph;

pub use graph::{EdgeKey, Graph, GraphOptions};
