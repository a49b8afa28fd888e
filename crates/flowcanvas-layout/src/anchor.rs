//! Connection points of edges on node bounds.

use crate::model::Bounds;
use flowcanvas_core::LayoutType;
use flowcanvas_core::geom::{Point, point};

/// Where an edge leaves `bounds`: the middle of the right side in horizontal layouts, the
/// middle of the bottom side in vertical ones.
pub fn source_anchor(bounds: &Bounds, layout: LayoutType) -> Point {
    let center = bounds.center();
    if layout.is_horizontal() {
        point(bounds.x + bounds.width, center.y)
    } else {
        point(center.x, bounds.y + bounds.height)
    }
}

/// Where an edge enters `bounds`: the middle of the left or top side.
pub fn target_anchor(bounds: &Bounds, layout: LayoutType) -> Point {
    let center = bounds.center();
    if layout.is_horizontal() {
        point(bounds.x, center.y)
    } else {
        point(center.x, bounds.y)
    }
}
