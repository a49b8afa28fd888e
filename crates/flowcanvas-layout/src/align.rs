//! Post-layout straightening of linear chains.
//!
//! The hierarchical engine tends to offset single-successor chains from the middle of their
//! container. After every pass the corrector moves such chains back onto the container's
//! centerline (the center of its bounds on the axis orthogonal to the flow):
//!
//! 1. from the first entry node of every top-level group, and
//! 2. from every merge node whose incoming branches share a common branch point.
//!
//! A chain ends at the first node that branches, before a node that merges, or where the next
//! node belongs to another container. Only the cross-axis coordinate changes, so running the
//! corrector again on its own output is a no-op.

use crate::model::{Axis, Bounds};
use crate::view::{LayoutView, PositionBatch};
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, Default)]
pub struct AlignmentCorrector;

impl AlignmentCorrector {
    pub fn new() -> Self {
        Self
    }

    /// Computes the position changes for the current layout of `view` without applying them.
    pub fn correct<V: LayoutView + ?Sized>(&self, view: &V) -> PositionBatch {
        let Some(layout) = view.layout() else {
            debug!("no completed layout; skipping alignment");
            return PositionBatch::new();
        };

        let mut pass = Pass {
            view,
            flow: Axis::flow(layout),
            cross: Axis::cross(layout),
            batch: PositionBatch::new(),
        };
        pass.straighten_entry_chains();
        pass.straighten_merges();

        debug!(moved = pass.batch.len(), ?layout, "alignment pass computed");
        pass.batch
    }

    /// Computes and applies the correction in one update.
    pub fn run<V: LayoutView + ?Sized>(&self, view: &mut V) -> PositionBatch {
        let batch = self.correct(&*view);
        if !batch.is_empty() {
            view.apply_positions(&batch);
        }
        batch
    }
}

struct Pass<'v, V: ?Sized> {
    view: &'v V,
    flow: Axis,
    cross: Axis,
    batch: PositionBatch,
}

impl<'v, V: LayoutView + ?Sized> Pass<'v, V> {
    /// Bounds as they will be once the pending moves are applied.
    fn bounds(&self, id: &str) -> Option<Bounds> {
        let bounds = self.view.bounds(id)?;
        Some(match self.batch.get(id) {
            Some(origin) => bounds.moved_to(origin),
            None => bounds,
        })
    }

    fn centerline(&self, container: &str) -> Option<f64> {
        self.bounds(container).map(|b| self.cross.of(b.center()))
    }

    fn straighten_entry_chains(&mut self) {
        let view = self.view;
        for container in view.top_level_nodes() {
            if !view.is_group(container) {
                continue;
            }
            let Some(line) = self.centerline(container) else {
                continue;
            };

            let mut start: Option<(&'v str, f64)> = None;
            for child in view.children(container) {
                if view.is_group(child)
                    || view.parent(child) != Some(container)
                    || !view.incoming(child).is_empty()
                {
                    continue;
                }
                let Some(bounds) = self.bounds(child) else {
                    continue;
                };
                let pos = self.flow.of(bounds.center());
                if start.is_none_or(|(_, best)| pos < best) {
                    start = Some((child, pos));
                }
            }

            match start {
                Some((entry, _)) => self.walk(entry, container, line),
                None => trace!(container, "no entry nodes; skipping container"),
            }
        }
    }

    fn straighten_merges(&mut self) {
        let view = self.view;
        for merge in all_nodes(view) {
            let incoming = view.incoming(merge);
            if incoming.len() <= 1 {
                continue;
            }

            let Some(branch) = self.branch_point(&incoming) else {
                trace!(merge, "no common branch point; skipping merge");
                continue;
            };
            let Some(container) = enclosing_group(view, merge) else {
                trace!(merge, "merge node is not inside a group; skipping");
                continue;
            };
            let Some(line) = self.centerline(container) else {
                continue;
            };

            trace!(merge, branch, container, "straightening merge chain");
            self.walk(merge, container, line);
        }
    }

    /// First node of the first source's ancestor chain that branches and appears in every
    /// other source's chain.
    fn branch_point(&self, sources: &[&'v str]) -> Option<&'v str> {
        let chains: Vec<Vec<&'v str>> = sources.iter().map(|&s| self.ancestor_chain(s)).collect();
        let (first, rest) = chains.split_first()?;
        first.iter().copied().find(|candidate| {
            self.view.outgoing(candidate).len() > 1
                && rest.iter().all(|chain| chain.contains(candidate))
        })
    }

    /// `id` followed by its predecessors along unique incoming edges.
    fn ancestor_chain(&self, id: &'v str) -> Vec<&'v str> {
        let view = self.view;
        let mut chain = vec![id];
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        seen.insert(id);

        let mut current = id;
        loop {
            let &[prev] = view.incoming(current).as_slice() else {
                break;
            };
            if !seen.insert(prev) {
                break;
            }
            chain.push(prev);
            current = prev;
        }
        chain
    }

    /// Centers `start` and its single-successor chain on `line`.
    fn walk(&mut self, start: &'v str, container: &str, line: f64) {
        let view = self.view;
        let mut visited: FxHashSet<&str> = FxHashSet::default();
        let mut current = start;

        while view.parent(current) == Some(container) && visited.insert(current) {
            self.center_on(current, line);

            let &[next] = view.outgoing(current).as_slice() else {
                break;
            };
            if view.incoming(next).len() != 1 {
                break;
            }
            current = next;
        }
    }

    fn center_on(&mut self, id: &str, line: f64) {
        let Some(bounds) = self.bounds(id) else {
            return;
        };
        let origin = self
            .cross
            .with(bounds.origin(), line - self.cross.extent(&bounds) / 2.0);
        trace!(id, x = origin.x, y = origin.y, "centering node");
        self.batch.insert(id, origin);
    }
}

/// Every node reachable from the top level through child membership, parents first.
fn all_nodes<V: LayoutView + ?Sized>(view: &V) -> Vec<&str> {
    let mut out = Vec::new();
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut stack: Vec<&str> = view.top_level_nodes();
    stack.reverse();

    while let Some(id) = stack.pop() {
        if !seen.insert(id) {
            continue;
        }
        out.push(id);
        stack.extend(view.children(id).into_iter().rev());
    }
    out
}

/// Nearest group among the ancestors of `id`.
fn enclosing_group<'a, V: LayoutView + ?Sized>(view: &'a V, id: &str) -> Option<&'a str> {
    view.ancestors(id)
        .into_iter()
        .find(|&ancestor| view.is_group(ancestor))
}
