//! Annotation definitions for screen markup.

use super::color::Color;
use crate::error::InkboardError;
use crate::util::{Point, Rect};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Geometry family of an annotation or brush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Follows the pointer path
    Free,
    /// Straight segment between press and release
    Line,
    /// Rectangle outline spanned by press and release
    Rect,
}

impl ShapeKind {
    /// Shapes in toolbar cycling order.
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Free, ShapeKind::Line, ShapeKind::Rect];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Free => "free",
            ShapeKind::Line => "line",
            ShapeKind::Rect => "rect",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = InkboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" | "freehand" => Ok(ShapeKind::Free),
            "line" => Ok(ShapeKind::Line),
            "rect" | "rectangle" => Ok(ShapeKind::Rect),
            _ => Err(InkboardError::UnknownShape(s.to_string())),
        }
    }
}

/// Rendering attributes carried by every annotation.
///
/// Only `width` matters outside rendering: it is the eraser's natural radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke width in pixels (always positive)
    pub width: u32,
    /// Stroke color
    pub color: Color,
    /// Round line caps when true, flat caps otherwise
    pub round_cap: bool,
}

/// A committed drawable shape.
///
/// Annotations are immutable once committed; edits only add or remove whole
/// annotations from an [`AnnotationSet`](super::AnnotationSet).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Annotation {
    /// Freehand path in drawing order
    Freehand {
        points: Vec<Point>,
        #[serde(flatten)]
        style: StrokeStyle,
    },
    /// Straight segment
    Line {
        start: Point,
        end: Point,
        #[serde(flatten)]
        style: StrokeStyle,
    },
    /// Rectangle outline, always normalized
    Rectangle {
        rect: Rect,
        #[serde(flatten)]
        style: StrokeStyle,
    },
}

impl Annotation {
    pub fn style(&self) -> &StrokeStyle {
        match self {
            Annotation::Freehand { style, .. }
            | Annotation::Line { style, .. }
            | Annotation::Rectangle { style, .. } => style,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Annotation::Freehand { .. } => ShapeKind::Free,
            Annotation::Line { .. } => ShapeKind::Line,
            Annotation::Rectangle { .. } => ShapeKind::Rect,
        }
    }

    /// Axis-aligned bounds of the geometry itself, ignoring stroke width.
    ///
    /// Returns `None` only for a freehand path without points.
    pub fn geometry_bounds(&self) -> Option<Rect> {
        match self {
            Annotation::Freehand { points, .. } => Rect::bounding(points),
            Annotation::Line { start, end, .. } => Some(Rect::from_corners(*start, *end)),
            Annotation::Rectangle { rect, .. } => Some(*rect),
        }
    }
}
