//! Errors raised at the parsing boundary (config files, replay scripts, toolbar values).
//!
//! Drawing operations themselves never fail; they degrade to no-ops.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InkboardError {
    #[error("unknown shape '{0}' (expected free, line or rect)")]
    UnknownShape(String),

    #[error("unknown tool '{0}' (expected pen, highlight, eraser or crop_eraser)")]
    UnknownTool(String),

    #[error("unknown color '{0}'")]
    UnknownColor(String),

    #[error("unknown board mode '{0}' (expected dimmed, blackboard or view)")]
    UnknownBoardMode(String),

    #[error("stroke width must be positive, got {0}")]
    InvalidWidth(u32),
}
