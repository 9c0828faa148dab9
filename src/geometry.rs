//! Geometry primitives for the canvas.
//!
//! Everything in this module is a plain value type with pure operations:
//! points in canvas space, measured extents, axis-aligned bounding boxes and
//! the normalized ("positive") form of a drag-drawn rectangle.

use std::ops::{Add, Sub};

/// A point in canvas coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pos {
    pub left: f32,
    pub top: f32,
}

impl Pos {
    pub const ZERO: Pos = Pos { left: 0.0, top: 0.0 };

    pub const fn new(left: f32, top: f32) -> Self {
        Self { left, top }
    }
}

impl Add for Pos {
    type Output = Pos;

    fn add(self, rhs: Pos) -> Pos {
        Pos::new(self.left + rhs.left, self.top + rhs.top)
    }
}

impl Sub for Pos {
    type Output = Pos;

    fn sub(self, rhs: Pos) -> Pos {
        Pos::new(self.left - rhs.left, self.top - rhs.top)
    }
}

/// A measured width/height pair, reported by the host after layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned box in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl BoundingBox {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Box covering `extent` anchored at `pos`.
    pub fn from_pos_extent(pos: Pos, extent: Extent) -> Self {
        Self {
            left: pos.left,
            top: pos.top,
            right: pos.left + extent.width,
            bottom: pos.top + extent.height,
        }
    }

    /// Whether two boxes overlap. Touching edges do not count: a box whose
    /// `right` equals another's `left` is adjacent, not overlapping, and a
    /// zero-sized box on an edge overlaps nothing.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        // Separated horizontally?
        if self.right <= other.left || other.right <= self.left {
            return false;
        }
        // Separated vertically?
        if self.bottom <= other.top || other.bottom <= self.top {
            return false;
        }
        true
    }
}

/// The normalized form of a rectangle dragged between two arbitrary corners:
/// non-negative width/height with `left`/`top` at the minimum corner.
///
/// Always derived from the raw corner pair, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PositiveBox {
    pub width: f32,
    pub height: f32,
    pub left: f32,
    pub top: f32,
}

impl PositiveBox {
    /// Normalize a corner pair. Direction-independent: the drag may end
    /// above or left of where it started.
    pub fn from_corners(start: Pos, end: Pos) -> Self {
        Self {
            width: (end.left - start.left).abs(),
            height: (end.top - start.top).abs(),
            left: start.left.min(end.left),
            top: start.top.min(end.top),
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox {
            left: self.left,
            top: self.top,
            right: self.left + self.width,
            bottom: self.top + self.height,
        }
    }
}
