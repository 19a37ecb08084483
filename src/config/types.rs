//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::ShapeKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Per-tool brush presets.
///
/// Each table only needs the fields the user wants to override; anything
/// missing falls back to the built-in preset for that tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ToolsConfig {
    #[serde(default)]
    pub pen: ToolPresetConfig,

    #[serde(default)]
    pub highlight: ToolPresetConfig,

    #[serde(default)]
    pub eraser: ToolPresetConfig,

    #[serde(default)]
    pub crop_eraser: ToolPresetConfig,
}

/// Overrides for a single tool preset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ToolPresetConfig {
    /// Shape drawn by the tool: "free", "line" or "rect"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<ShapeKind>,

    /// Stroke width (or eraser radius) in pixels (valid range: 1 - 200)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,

    /// Palette name or `[r, g, b]`; ignored for eraser tools
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorSpec>,

    /// Round line caps when true, flat caps otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round_cap: Option<bool>,
}

/// Brush size stepping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SizeConfig {
    /// Sizes visited by the size toggle, in ascending order
    #[serde(default = "default_size_steps")]
    pub steps: Vec<u32>,

    /// Smallest size reachable with the scroll wheel
    #[serde(default = "default_size_min")]
    pub min: u32,

    /// Largest size reachable with the scroll wheel
    #[serde(default = "default_size_max")]
    pub max: u32,

    /// Pixels added or removed per scroll notch
    #[serde(default = "default_scroll_step")]
    pub scroll_step: u32,
}

impl Default for SizeConfig {
    fn default() -> Self {
        Self {
            steps: default_size_steps(),
            min: default_size_min(),
            max: default_size_max(),
            scroll_step: default_scroll_step(),
        }
    }
}

/// Stroke capture behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Alpha applied to highlight colors (0-255)
    #[serde(default = "default_highlight_alpha")]
    pub highlight_alpha: u8,

    /// Minimum Manhattan distance between freehand points, as a fraction of
    /// the stroke width (valid range: 0.0 - 2.0; 0 keeps every motion event)
    #[serde(default = "default_decimation_factor")]
    pub decimation_factor: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            highlight_alpha: default_highlight_alpha(),
            decimation_factor: default_decimation_factor(),
        }
    }
}

/// Overlay background settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BoardConfig {
    /// Mode on startup: "dimmed", "blackboard" or "view"
    #[serde(default = "default_board_mode")]
    pub default_mode: String,

    /// Alpha of the black veil in dimmed mode (0-255)
    #[serde(default = "default_dimmed_alpha")]
    pub dimmed_alpha: u8,

    /// Alpha of the black background in blackboard mode (0-255)
    #[serde(default = "default_blackboard_alpha")]
    pub blackboard_alpha: u8,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_mode: default_board_mode(),
            dimmed_alpha: default_dimmed_alpha(),
            blackboard_alpha: default_blackboard_alpha(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_size_steps() -> Vec<u32> {
    vec![4, 6, 10, 14, 20, 30, 50]
}

fn default_size_min() -> u32 {
    2
}

fn default_size_max() -> u32 {
    50
}

fn default_scroll_step() -> u32 {
    2
}

fn default_highlight_alpha() -> u8 {
    80
}

fn default_decimation_factor() -> f64 {
    0.25
}

fn default_board_mode() -> String {
    "dimmed".to_string()
}

fn default_dimmed_alpha() -> u8 {
    50
}

fn default_blackboard_alpha() -> u8 {
    255
}
