//! Keys of the edge index.
//!
//! The graph is simple, so the ordered pair of endpoint ids is the whole identity of an edge.
//! Lookups by `(&str, &str)` go through [`EdgeKeyView`] to avoid allocating owned ids.

/// Owned `source -> target` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    pub v: String,
    pub w: String,
}

impl EdgeKey {
    pub fn new(v: impl Into<String>, w: impl Into<String>) -> Self {
        Self {
            v: v.into(),
            w: w.into(),
        }
    }
}

/// Borrowed form of [`EdgeKey`].
///
/// Field order and types hash exactly like the owned key (`String` hashes as `str`), which the
/// `hashbrown` index relies on.
#[derive(Clone, Copy, Hash)]
pub(in crate::graph) struct EdgeKeyView<'a> {
    pub(in crate::graph) v: &'a str,
    pub(in crate::graph) w: &'a str,
}

impl hashbrown::Equivalent<EdgeKey> for EdgeKeyView<'_> {
    fn equivalent(&self, key: &EdgeKey) -> bool {
        self.v == key.v && self.w == key.w
    }
}
