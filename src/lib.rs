//! Annotation core for a screen-overlay whiteboard.
//!
//! Exposes the annotation store, hit-testing and undo history alongside the
//! input layer that drives them, so front ends (overlay windows, headless
//! replay, configurators) share one implementation of the drawing rules.

pub mod config;
pub mod draw;
pub mod error;
pub mod input;
pub mod replay;
pub mod util;

pub use config::Config;
pub use error::InkboardError;
