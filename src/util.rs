//! Geometry value types shared by the annotation model and the input layer.
//!
//! This module provides:
//! - [`Point`]: sub-pixel pointer position
//! - [`Rect`]: normalized axis-aligned rectangle (crop selections, bounds, rectangle annotations)

use serde::{Deserialize, Serialize};

// ============================================================================
// Points
// ============================================================================

/// A 2D position in surface coordinates.
///
/// Pointer events can report fractional positions, so both components are `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Sum of the absolute axis deltas to `other`.
    ///
    /// Used for cheap freehand point decimation while dragging.
    pub fn manhattan_distance(&self, other: Point) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Rectangles
// ============================================================================

/// Axis-aligned rectangle stored by its edges.
///
/// Constructors always normalize, so `left <= right` and `top <= bottom` hold
/// for every value built through this API. Edges are inclusive: a rectangle
/// with zero width still contains the points on its single column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    /// Builds a rectangle from two opposite corners dragged in any direction.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }

    /// Builds a rectangle from an origin and a size. Negative sizes are flipped.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_corners(Point::new(x, y), Point::new(x + width, y + height))
    }

    /// Smallest rectangle covering every point, or `None` for an empty slice.
    pub fn bounding(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut rect = Self::from_corners(*first, *first);
        for p in rest {
            rect.left = rect.left.min(p.x);
            rect.top = rect.top.min(p.y);
            rect.right = rect.right.max(p.x);
            rect.bottom = rect.bottom.max(p.y);
        }
        Some(rect)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn contains(&self, point: Point) -> bool {
        (self.left..=self.right).contains(&point.x) && (self.top..=self.bottom).contains(&point.y)
    }

    /// True when the two rectangles share at least one point (touching edges count).
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left <= other.right
            && other.left <= self.right
            && self.top <= other.bottom
            && other.top <= self.bottom
    }

    /// Nearest point inside the rectangle (the point itself when already inside).
    pub fn clamp_point(&self, point: Point) -> Point {
        Point::new(
            point.x.max(self.left).min(self.right),
            point.y.max(self.top).min(self.bottom),
        )
    }
}
