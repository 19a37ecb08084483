//! Discrete commands that do not come from pointer motion.

use serde::{Deserialize, Serialize};

/// All actions a toolbar, key handler or replay script can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Exit
    Exit,

    // History and canvas
    Undo,
    Redo,
    Clear,

    // Tool selection
    ToggleTool,
    ToggleToolReverse,
    TogglePen,
    ToggleEraser,

    // Brush settings
    ToggleShape,
    ToggleSize,
    ToggleColor,

    // Board modes
    ToggleBoard,
    CycleBoardMode,
    ViewMode,
    DrawingMode,
}
