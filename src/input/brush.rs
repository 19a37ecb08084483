//! Brush descriptor handed to the annotation store when a stroke begins.

use super::tool::Tool;
use crate::draw::{Color, ShapeKind, StrokeStyle};
use crate::error::InkboardError;

/// Tool, shape and style applied to a new stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushDescriptor {
    pub tool: Tool,
    pub shape: ShapeKind,
    /// Stroke width in pixels; also the eraser radius for eraser brushes
    pub width: u32,
    pub color: Color,
    pub round_cap: bool,
}

impl BrushDescriptor {
    /// Returns an error when the brush cannot produce a visible stroke.
    pub fn validate(&self) -> Result<(), InkboardError> {
        if self.width == 0 {
            return Err(InkboardError::InvalidWidth(self.width));
        }
        Ok(())
    }

    /// Style recorded on annotations drawn with this brush.
    pub fn style(&self) -> StrokeStyle {
        StrokeStyle {
            width: self.width,
            color: self.color,
            round_cap: self.round_cap,
        }
    }
}
