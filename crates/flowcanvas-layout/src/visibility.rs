//! Edge visibility under collapsed groups.

use crate::view::LayoutView;

/// The outermost collapsed ancestor of `id`, which stands in for it while collapsed.
pub fn closest_visible_parent<'a, V: LayoutView + ?Sized>(view: &'a V, id: &str) -> Option<&'a str> {
    view.ancestors(id)
        .into_iter()
        .filter(|&ancestor| view.is_collapsed(ancestor))
        .last()
}

/// An edge is hidden when both endpoints sit inside the same collapsed group.
pub fn is_edge_hidden<V: LayoutView + ?Sized>(view: &V, source: &str, target: &str) -> bool {
    match closest_visible_parent(view, source) {
        Some(parent) => closest_visible_parent(view, target) == Some(parent),
        None => false,
    }
}
