//! Input handling and tool state machine.
//!
//! This module translates pointer events and discrete actions into annotation
//! store operations. It keeps the per-tool brush presets, the board mode and
//! the state machine for the held button (idle, drawing, erasing, cropping).

pub mod action;
pub mod board_mode;
pub mod brush;
pub mod events;
pub mod presets;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use action::Action;
pub use board_mode::BoardMode;
pub use brush::BrushDescriptor;
pub use events::MouseButton;
pub use presets::{ToolPreset, ToolPresets};
pub use state::{DrawingState, InputState};
pub use tool::Tool;
