//! Generic pointer event types shared by every event source.

use serde::{Deserialize, Serialize};

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    /// Left mouse button (draws, erases or selects)
    #[default]
    Left,
    /// Right mouse button (cancels the stroke and enters view mode)
    Right,
    /// Middle mouse button (exits)
    Middle,
}
