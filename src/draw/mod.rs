//! Annotation model, hit-testing and undo history.
//!
//! This module defines the core drawing types for screen annotation:
//! - [`Color`]: RGBA color with the toolbar palette
//! - [`Annotation`]: committed freehand paths, lines and rectangles
//! - [`AnnotationSet`]: ordered committed annotations (z-order)
//! - [`hit`]: eraser and crop-eraser hit predicates
//! - [`History`]: linear undo/redo log of snapshots
//! - [`AnnotationStore`]: the set, the live draft and the history wired together

pub mod annotation_set;
pub mod color;
pub mod history;
pub mod hit;
pub mod shape;
pub mod store;

// Re-export commonly used types at module level
pub use annotation_set::AnnotationSet;
pub use color::Color;
pub use history::{History, Snapshot};
pub use shape::{Annotation, ShapeKind, StrokeStyle};
pub use store::{AnnotationStore, Draft};

#[allow(unused_imports)]
pub use color::{BLUE, GREEN, ORANGE, PALETTE, PURPLE, RED, TRANSPARENT, WHITE, YELLOW};
