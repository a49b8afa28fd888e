//! Geometry of a positioned scene.

use flowcanvas_core::LayoutType;
use flowcanvas_core::geom::{self, Point, Rect};
use serde::{Deserialize, Serialize};

/// Top-left origin and size of a node, as assigned by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn rect(&self) -> Rect {
        geom::rect(self.x, self.y, self.width, self.height)
    }

    pub fn center(&self) -> Point {
        self.rect().center()
    }

    pub fn origin(&self) -> LayoutPoint {
        LayoutPoint {
            x: self.x,
            y: self.y,
        }
    }

    /// Same size, moved to `origin`.
    pub fn moved_to(self, origin: LayoutPoint) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
}

impl LayoutPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Point> for LayoutPoint {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<LayoutPoint> for Point {
    fn from(p: LayoutPoint) -> Self {
        geom::point(p.x, p.y)
    }
}

/// One of the two canvas axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// The axis edges flow along: x for horizontal layouts, y for vertical ones.
    pub fn flow(layout: LayoutType) -> Self {
        if layout.is_horizontal() {
            Axis::X
        } else {
            Axis::Y
        }
    }

    /// The axis orthogonal to the flow.
    pub fn cross(layout: LayoutType) -> Self {
        Self::flow(layout).other()
    }

    pub fn other(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    pub fn of(self, p: Point) -> f64 {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }

    pub fn extent(self, bounds: &Bounds) -> f64 {
        match self {
            Axis::X => bounds.width,
            Axis::Y => bounds.height,
        }
    }

    /// `p` with its coordinate on this axis replaced by `value`.
    pub fn with(self, p: LayoutPoint, value: f64) -> LayoutPoint {
        match self {
            Axis::X => LayoutPoint { x: value, ..p },
            Axis::Y => LayoutPoint { y: value, ..p },
        }
    }
}
