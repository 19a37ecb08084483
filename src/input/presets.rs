//! Per-tool brush presets and the cycling rules behind the toolbar toggles.
//!
//! Every tool remembers its own shape, size, colour and cap style, so switching
//! from the pen to the highlighter and back restores the pen exactly as it was.

use super::brush::BrushDescriptor;
use super::tool::Tool;
use crate::config::{Config, MAX_BRUSH_SIZE, SizeConfig, ToolPresetConfig};
use crate::draw::color::{self, PALETTE, TRANSPARENT, WHITE, YELLOW};
use crate::draw::{Color, ShapeKind};
use crate::error::InkboardError;
use log::{info, warn};

/// Remembered settings for one tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolPreset {
    pub shape: ShapeKind,
    /// Stroke width; the eraser uses it as its radius
    pub size: u32,
    /// Opaque colour; `None` for the eraser tools
    pub color: Option<Color>,
    pub round_cap: bool,
}

impl ToolPreset {
    const fn new(shape: ShapeKind, size: u32, color: Option<Color>, round_cap: bool) -> Self {
        Self {
            shape,
            size,
            color,
            round_cap,
        }
    }

    /// Built-in preset for `tool`.
    pub fn builtin(tool: Tool) -> Self {
        match tool {
            Tool::Pen => Self::new(ShapeKind::Free, 4, Some(WHITE), true),
            Tool::Highlight => Self::new(ShapeKind::Line, 14, Some(YELLOW), false),
            Tool::Eraser => Self::new(ShapeKind::Free, 30, None, true),
            Tool::CropEraser => Self::new(ShapeKind::Rect, 0, None, false),
        }
    }

    fn with_overrides(tool: Tool, overrides: &ToolPresetConfig) -> Self {
        let mut preset = Self::builtin(tool);
        if let Some(shape) = overrides.shape {
            preset.shape = shape;
        }
        if let Some(size) = overrides.size {
            preset.size = size.min(MAX_BRUSH_SIZE);
        }
        if let Some(round_cap) = overrides.round_cap {
            preset.round_cap = round_cap;
        }
        if let Some(spec) = &overrides.color {
            if tool.is_eraser() {
                warn!("Ignoring color configured for the {tool} tool");
            } else {
                match spec.to_color() {
                    Ok(color) => preset.color = Some(color.with_alpha(255)),
                    Err(err) => warn!("{err}; keeping the built-in {tool} color"),
                }
            }
        }
        preset
    }
}

/// Active tool plus the remembered preset of every tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolPresets {
    active: Tool,
    presets: [ToolPreset; 4],
    sizes: SizeConfig,
    highlight_alpha: u8,
}

impl Default for ToolPresets {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ToolPresets {
    /// Builds presets from the validated configuration. The pen starts active.
    pub fn from_config(config: &Config) -> Self {
        let tools = &config.tools;
        Self {
            active: Tool::Pen,
            presets: [
                ToolPreset::with_overrides(Tool::Pen, &tools.pen),
                ToolPreset::with_overrides(Tool::Highlight, &tools.highlight),
                ToolPreset::with_overrides(Tool::Eraser, &tools.eraser),
                ToolPreset::with_overrides(Tool::CropEraser, &tools.crop_eraser),
            ],
            sizes: config.sizes.clone(),
            highlight_alpha: config.drawing.highlight_alpha,
        }
    }

    pub fn active_tool(&self) -> Tool {
        self.active
    }

    pub fn preset(&self, tool: Tool) -> &ToolPreset {
        &self.presets[Self::slot(tool)]
    }

    pub fn active_preset(&self) -> &ToolPreset {
        self.preset(self.active)
    }

    fn active_preset_mut(&mut self) -> &mut ToolPreset {
        &mut self.presets[Self::slot(self.active)]
    }

    fn slot(tool: Tool) -> usize {
        match tool {
            Tool::Pen => 0,
            Tool::Highlight => 1,
            Tool::Eraser => 2,
            Tool::CropEraser => 3,
        }
    }

    /// Brush for a stroke started with the active tool right now.
    ///
    /// Eraser tools report a transparent colour; the highlighter carries the
    /// configured highlight alpha.
    pub fn brush(&self) -> BrushDescriptor {
        let preset = self.active_preset();
        let color = match (self.active, preset.color) {
            (_, None) => TRANSPARENT,
            (Tool::Highlight, Some(color)) => color.with_alpha(self.highlight_alpha),
            (_, Some(color)) => color,
        };
        BrushDescriptor {
            tool: self.active,
            shape: preset.shape,
            width: preset.size,
            color,
            round_cap: preset.round_cap,
        }
    }

    // ------------------------------------------------------------------
    // Tools
    // ------------------------------------------------------------------

    pub fn set_tool(&mut self, tool: Tool) {
        if self.active != tool {
            info!("Switched tool: {} -> {}", self.active, tool);
            self.active = tool;
        }
    }

    /// Cycles pen → highlight → eraser → crop_eraser (backwards when `reverse`).
    pub fn toggle_tool(&mut self, reverse: bool) {
        let len = Tool::ALL.len();
        let index = Self::slot(self.active);
        let next = if reverse {
            (index + len - 1) % len
        } else {
            (index + 1) % len
        };
        self.set_tool(Tool::ALL[next]);
    }

    /// Pen ↔ highlight; any other tool goes back to the pen.
    pub fn toggle_pen(&mut self) {
        let next = match self.active {
            Tool::Pen => Tool::Highlight,
            _ => Tool::Pen,
        };
        self.set_tool(next);
    }

    /// Eraser ↔ crop eraser; a drawing tool goes to the eraser.
    pub fn toggle_eraser(&mut self) {
        let next = match self.active {
            Tool::Eraser => Tool::CropEraser,
            _ => Tool::Eraser,
        };
        self.set_tool(next);
    }

    // ------------------------------------------------------------------
    // Sizes
    // ------------------------------------------------------------------

    /// Sets the active tool's size. The crop eraser has no size, so picking
    /// one switches to the eraser first.
    pub fn set_size(&mut self, size: u32) {
        if self.active == Tool::CropEraser {
            self.set_tool(Tool::Eraser);
        }
        let size = size.clamp(1, MAX_BRUSH_SIZE);
        self.active_preset_mut().size = size;
    }

    /// Moves to the next configured size step, wrapping at either end.
    ///
    /// A size that is not one of the steps moves to the nearest step in the
    /// direction of travel.
    pub fn toggle_size(&mut self, reverse: bool) {
        if self.active == Tool::CropEraser {
            self.set_tool(Tool::Eraser);
        }
        let current = self.active_preset().size;
        let steps = &self.sizes.steps;
        let next = if reverse {
            steps
                .iter()
                .rev()
                .find(|&&step| step < current)
                .or_else(|| steps.last())
        } else {
            steps
                .iter()
                .find(|&&step| step > current)
                .or_else(|| steps.first())
        };
        if let Some(&size) = next {
            self.set_size(size);
        }
    }

    /// Scroll-wheel adjustment: `notches` × `scroll_step`, clamped to the
    /// configured `[min, max]` range.
    ///
    /// Bounds are ordered first, since a hand-built config may not have been
    /// through `validate_and_clamp`.
    pub fn adjust_size(&mut self, notches: i32) {
        if self.active == Tool::CropEraser {
            self.set_tool(Tool::Eraser);
        }
        let (min, max) = (self.sizes.min, self.sizes.max);
        let (low, high) = (i64::from(min.min(max)), i64::from(min.max(max)));
        let current = i64::from(self.active_preset().size);
        let step = i64::from(self.sizes.scroll_step);
        let target = (current + i64::from(notches) * step).clamp(low, high);
        self.set_size(u32::try_from(target).unwrap_or(MAX_BRUSH_SIZE));
    }

    // ------------------------------------------------------------------
    // Shapes
    // ------------------------------------------------------------------

    /// Sets the shape of the active tool.
    ///
    /// The eraser tools only come in one shape each, so some combinations
    /// switch tools first: a free or line shape on the crop eraser goes to the
    /// eraser or pen, a rect shape on the eraser goes to the crop eraser and a
    /// line shape on the eraser goes to the pen.
    pub fn set_shape(&mut self, shape: ShapeKind) {
        match (self.active, shape) {
            (Tool::CropEraser, ShapeKind::Free) => self.set_tool(Tool::Eraser),
            (Tool::CropEraser, ShapeKind::Line) => self.set_tool(Tool::Pen),
            (Tool::Eraser, ShapeKind::Rect) => self.set_tool(Tool::CropEraser),
            (Tool::Eraser, ShapeKind::Line) => self.set_tool(Tool::Pen),
            _ => {}
        }
        self.active_preset_mut().shape = shape;
    }

    /// Cycles free → line → rect through [`Self::set_shape`].
    pub fn toggle_shape(&mut self, reverse: bool) {
        let all = ShapeKind::ALL;
        let index = all
            .iter()
            .position(|&shape| shape == self.active_preset().shape)
            .unwrap_or(0);
        let next = if reverse {
            (index + all.len() - 1) % all.len()
        } else {
            (index + 1) % all.len()
        };
        self.set_shape(all[next]);
    }

    // ------------------------------------------------------------------
    // Colours
    // ------------------------------------------------------------------

    /// Applies a palette colour by name. Erasers switch to the pen first.
    ///
    /// # Errors
    /// Unknown names are rejected and leave every preset unchanged.
    pub fn set_color(&mut self, name: &str) -> Result<(), InkboardError> {
        let color =
            color::name_to_color(name).ok_or_else(|| InkboardError::UnknownColor(name.to_string()))?;
        if self.active.is_eraser() {
            self.set_tool(Tool::Pen);
        }
        self.active_preset_mut().color = Some(color);
        Ok(())
    }

    /// Palette name of the active tool's colour, if it is a palette colour.
    pub fn color_name(&self) -> Option<&'static str> {
        let color = self.active_preset().color?;
        PALETTE
            .iter()
            .find(|(_, candidate)| *candidate == color)
            .map(|(name, _)| *name)
    }

    /// Cycles through the palette. Tools without a palette colour start at white.
    pub fn toggle_color(&mut self, reverse: bool) {
        let len = PALETTE.len();
        let next = match self.color_name().and_then(color::palette_index) {
            Some(index) if reverse => (index + len - 1) % len,
            Some(index) => (index + 1) % len,
            None => 0,
        };
        let (name, _) = PALETTE[next];
        // Palette names always resolve.
        let _ = self.set_color(name);
    }
}
