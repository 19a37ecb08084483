//! Hit-testing geometry for the eraser and crop-eraser tools.
//!
//! Pure functions over immutable inputs. Distances are Euclidean and every
//! comparison is inclusive, so a radius of zero still hits geometry that the
//! pointer touches exactly.

use super::shape::Annotation;
use crate::util::{Point, Rect};

/// Euclidean distance between two points.
pub fn point_distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Shortest distance from `point` to the segment `[a, b]`.
///
/// Projects onto the infinite line through `a` and `b`, clamps the projection
/// parameter to `[0, 1]` and measures to the clamped point. A degenerate
/// segment (`a == b`) reduces to [`point_distance`].
pub fn segment_distance(point: Point, a: Point, b: Point) -> f64 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let len2 = abx * abx + aby * aby;

    if len2 == 0.0 {
        return point_distance(point, a);
    }

    let t = (((point.x - a.x) * abx + (point.y - a.y) * aby) / len2).clamp(0.0, 1.0);
    point_distance(point, Point::new(a.x + t * abx, a.y + t * aby))
}

/// Distance from `point` to the outline of `rect`.
///
/// Outside the rectangle this is the distance to the clamped point; inside it
/// is the distance to the nearest edge, so only the border is ever zero.
pub fn rect_distance(point: Point, rect: &Rect) -> f64 {
    if !rect.contains(point) {
        return point_distance(point, rect.clamp_point(point));
    }
    let dx = (point.x - rect.left).min(rect.right - point.x);
    let dy = (point.y - rect.top).min(rect.bottom - point.y);
    dx.min(dy)
}

/// Returns whether a circle of `radius` around `point` touches the annotation.
///
/// Freehand paths test their stored vertices only, not the segments between them.
pub fn hit_circle(point: Point, radius: f64, annotation: &Annotation) -> bool {
    match annotation {
        Annotation::Freehand { points, .. } => points
            .iter()
            .any(|vertex| point_distance(point, *vertex) <= radius),
        Annotation::Line { start, end, .. } => segment_distance(point, *start, *end) <= radius,
        Annotation::Rectangle { rect, .. } => rect_distance(point, rect) <= radius,
    }
}

/// Returns whether the annotation intersects the crop region.
///
/// Freehand paths need a vertex inside `region`; lines and rectangles only
/// need their bounding boxes to overlap it.
pub fn hit_region(region: &Rect, annotation: &Annotation) -> bool {
    match annotation {
        Annotation::Freehand { points, .. } => points.iter().any(|p| region.contains(*p)),
        Annotation::Line { .. } | Annotation::Rectangle { .. } => annotation
            .geometry_bounds()
            .is_some_and(|bounds| bounds.intersects(region)),
    }
}
