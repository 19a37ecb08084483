//! Drawing state machine and input state management.

use crate::config::{BoardConfig, Config};
use crate::draw::{AnnotationStore, Color, ShapeKind};
use crate::error::InkboardError;
use crate::input::{BoardMode, BrushDescriptor, Tool, ToolPresets};
use crate::util::{Point, Rect};

/// What the held left button is currently doing.
///
/// The brush of an in-progress stroke lives in the store's draft, so
/// `Drawing` needs no payload of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawingState {
    /// Not actively drawing - waiting for user input
    Idle,
    /// A pen or highlight stroke is being drafted in the store
    Drawing,
    /// Eraser held down; every motion erases under the pointer
    Erasing {
        /// Eraser radius captured at press time
        radius: f64,
    },
    /// Crop eraser selection being dragged
    Cropping {
        /// Corner where the drag started
        start: Point,
        /// Latest pointer position
        end: Point,
    },
}

/// Main input state containing all drawing session state.
///
/// This struct owns the annotation store, the per-tool presets and the board
/// mode. It turns pointer events and actions into store operations and
/// raises `needs_redraw` whenever something visible changed.
#[derive(Debug, Clone)]
pub struct InputState {
    pub(super) store: AnnotationStore,
    pub(super) presets: ToolPresets,
    pub(super) board_mode: BoardMode,
    /// Last mode that allowed drawing, restored when leaving view mode
    pub(super) drawing_board_mode: BoardMode,
    pub(super) board_config: BoardConfig,
    /// Freehand decimation threshold as a fraction of the stroke width
    pub(super) decimation_factor: f64,
    /// Current pointer state machine
    pub state: DrawingState,
    /// Last known pointer position
    pub cursor: Option<Point>,
    /// Whether user requested to exit the overlay
    pub should_exit: bool,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl InputState {
    /// Creates input state from a validated configuration.
    pub fn from_config(config: &Config) -> Self {
        let board_mode = config.default_board_mode();
        Self {
            store: AnnotationStore::new(),
            presets: ToolPresets::from_config(config),
            board_mode,
            drawing_board_mode: if board_mode.allows_drawing() {
                board_mode
            } else {
                BoardMode::Dimmed
            },
            board_config: config.board.clone(),
            decimation_factor: config.drawing.decimation_factor,
            state: DrawingState::Idle,
            cursor: None,
            should_exit: false,
            needs_redraw: true,
        }
    }

    pub fn store(&self) -> &AnnotationStore {
        &self.store
    }

    pub fn presets(&self) -> &ToolPresets {
        &self.presets
    }

    pub fn active_tool(&self) -> Tool {
        self.presets.active_tool()
    }

    /// Brush the next stroke would use.
    pub fn brush(&self) -> BrushDescriptor {
        self.presets.brush()
    }

    pub fn board_mode(&self) -> BoardMode {
        self.board_mode
    }

    /// Veil painted behind the annotations in the current mode.
    pub fn background_color(&self) -> Color {
        self.board_mode.background_color(&self.board_config)
    }

    /// Normalized crop selection while the crop eraser is being dragged.
    pub fn crop_selection(&self) -> Option<Rect> {
        match self.state {
            DrawingState::Cropping { start, end } => Some(Rect::from_corners(start, end)),
            _ => None,
        }
    }

    // ------------------------------------------------------------------
    // Tool settings
    // ------------------------------------------------------------------

    pub fn set_tool(&mut self, tool: Tool) {
        self.presets.set_tool(tool);
        self.needs_redraw = true;
    }

    pub fn set_shape(&mut self, shape: ShapeKind) {
        self.presets.set_shape(shape);
        self.needs_redraw = true;
    }

    pub fn set_size(&mut self, size: u32) {
        self.presets.set_size(size);
        self.needs_redraw = true;
    }

    /// Scroll-wheel size change; see [`ToolPresets::adjust_size`].
    pub fn on_scroll(&mut self, notches: i32) {
        if notches == 0 {
            return;
        }
        self.presets.adjust_size(notches);
        self.needs_redraw = true;
    }

    /// # Errors
    /// Unknown colour names leave the presets untouched.
    pub fn set_color(&mut self, name: &str) -> Result<(), InkboardError> {
        self.presets.set_color(name)?;
        self.needs_redraw = true;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Board modes
    // ------------------------------------------------------------------

    /// Switches the board mode.
    ///
    /// Entering view mode drops any in-progress stroke or crop selection,
    /// since the pointer no longer belongs to the overlay.
    pub fn switch_board_mode(&mut self, new_mode: BoardMode) {
        if self.board_mode == new_mode {
            return;
        }

        if !new_mode.allows_drawing() {
            self.cancel_pointer_action();
        } else {
            self.drawing_board_mode = new_mode;
        }

        log::info!(
            "Switched board mode: {} -> {}",
            self.board_mode.as_str(),
            new_mode.as_str()
        );
        self.board_mode = new_mode;
        self.needs_redraw = true;
    }

    pub fn set_view_mode(&mut self) {
        self.switch_board_mode(BoardMode::View);
    }

    /// Leaves view mode for the last drawing mode. No-op when already drawing.
    pub fn set_drawing_mode(&mut self) {
        if !self.board_mode.allows_drawing() {
            self.switch_board_mode(self.drawing_board_mode);
        }
    }

    /// Abandons whatever the held button was doing. The committed set is untouched.
    pub(super) fn cancel_pointer_action(&mut self) {
        if self.store.cancel() {
            log::debug!("Cancelled in-progress stroke");
        }
        if self.state != DrawingState::Idle {
            self.state = DrawingState::Idle;
            self.needs_redraw = true;
        }
    }
}
