//! Drawing tool selection.

use crate::error::InkboardError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Drawing tool selection.
///
/// The active tool decides what a pointer drag does: pen and highlight draw
/// annotations, the eraser removes annotations under the pointer and the crop
/// eraser removes everything touching a dragged rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// Opaque pen
    Pen,
    /// Translucent highlighter
    Highlight,
    /// Removes annotations under the pointer
    Eraser,
    /// Removes annotations touching a dragged rectangle
    CropEraser,
}

impl Tool {
    /// Tools in toolbar cycling order.
    pub const ALL: [Tool; 4] = [Tool::Pen, Tool::Highlight, Tool::Eraser, Tool::CropEraser];

    pub fn is_eraser(&self) -> bool {
        matches!(self, Tool::Eraser | Tool::CropEraser)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Pen => "pen",
            Tool::Highlight => "highlight",
            Tool::Eraser => "eraser",
            Tool::CropEraser => "crop_eraser",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tool {
    type Err = InkboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "pen" => Ok(Tool::Pen),
            "highlight" | "highlighter" => Ok(Tool::Highlight),
            "eraser" => Ok(Tool::Eraser),
            "crop_eraser" => Ok(Tool::CropEraser),
            _ => Err(InkboardError::UnknownTool(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("crop-eraser".parse::<Tool>(), Ok(Tool::CropEraser));
        assert_eq!("Highlighter".parse::<Tool>(), Ok(Tool::Highlight));
        assert!("brush".parse::<Tool>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for tool in Tool::ALL {
            assert_eq!(tool.to_string().parse::<Tool>(), Ok(tool));
        }
    }
}
