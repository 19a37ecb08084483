//! RGBA color type and the fixed annotation palette.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Represents an RGBA color with 8-bit components.
///
/// Alpha ranges from 0 (fully transparent) to 255 (fully opaque).
///
/// # Examples
///
/// ```
/// use inkboard::draw::Color;
/// let red = Color::rgb(248, 49, 47);
/// let marker = red.with_alpha(80);
/// assert_eq!(marker.a, 80);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Returns the same color with a replaced alpha channel.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

// ============================================================================
// Palette
// ============================================================================

pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const RED: Color = Color::rgb(248, 49, 47);
pub const ORANGE: Color = Color::rgb(255, 103, 35);
pub const YELLOW: Color = Color::rgb(255, 176, 46);
pub const GREEN: Color = Color::rgb(0, 210, 106);
pub const BLUE: Color = Color::rgb(0, 166, 237);
pub const PURPLE: Color = Color::rgb(199, 144, 241);

/// Fully transparent black, used for eraser brushes.
pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

/// Palette in toolbar cycling order.
pub const PALETTE: [(&str, Color); 7] = [
    ("white", WHITE),
    ("red", RED),
    ("orange", ORANGE),
    ("yellow", YELLOW),
    ("green", GREEN),
    ("blue", BLUE),
    ("purple", PURPLE),
];

/// Looks up a palette color by name (case-insensitive).
pub fn name_to_color(name: &str) -> Option<Color> {
    let name = name.trim().to_ascii_lowercase();
    PALETTE
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, color)| *color)
}

/// Position of a palette name in cycling order.
pub fn palette_index(name: &str) -> Option<usize> {
    let name = name.trim().to_ascii_lowercase();
    PALETTE.iter().position(|(candidate, _)| *candidate == name)
}
