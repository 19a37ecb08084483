//! Configuration enum types.

use crate::draw::{Color, color};
use crate::error::InkboardError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a palette name or RGB values.
///
/// # Examples
/// ```toml
/// # Palette color
/// color = "red"
///
/// # Custom RGB color (0-255 per component)
/// color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Palette name: white, red, orange, yellow, green, blue, purple
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the configured value to an opaque [`Color`].
    pub fn to_color(&self) -> Result<Color, InkboardError> {
        match self {
            ColorSpec::Name(name) => {
                color::name_to_color(name).ok_or_else(|| InkboardError::UnknownColor(name.clone()))
            }
            ColorSpec::Rgb([r, g, b]) => Ok(Color::rgb(*r, *g, *b)),
        }
    }
}
