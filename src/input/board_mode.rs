//! Overlay background mode selection.

use crate::config::BoardConfig;
use crate::draw::{Color, color::TRANSPARENT};
use crate::error::InkboardError;
use serde::{Deserialize, Serialize};

/// Board rendering mode
///
/// Determines the veil painted behind the annotations and whether the
/// pointer draws at all. Annotations are shared across modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardMode {
    /// Screen shows through a light black veil (default)
    #[default]
    Dimmed,
    /// Opaque black background
    Blackboard,
    /// Annotations stay visible but the pointer passes through
    View,
}

impl BoardMode {
    /// Returns the background color for this mode.
    ///
    /// View mode is fully transparent; the other two are black at the
    /// configured alpha.
    pub fn background_color(&self, config: &BoardConfig) -> Color {
        match self {
            Self::Dimmed => Color::new(0, 0, 0, config.dimmed_alpha),
            Self::Blackboard => Color::new(0, 0, 0, config.blackboard_alpha),
            Self::View => TRANSPARENT,
        }
    }

    /// Whether pointer presses start strokes or erase in this mode.
    pub fn allows_drawing(&self) -> bool {
        !matches!(self, Self::View)
    }

    /// Dimmed ↔ Blackboard; leaving View always lands on Dimmed.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Dimmed => Self::Blackboard,
            Self::Blackboard | Self::View => Self::Dimmed,
        }
    }

    /// Next mode in Dimmed → Blackboard → View order (reversed when asked).
    pub fn cycled(&self, reverse: bool) -> Self {
        match (self, reverse) {
            (Self::Dimmed, false) | (Self::View, true) => Self::Blackboard,
            (Self::Blackboard, false) | (Self::Dimmed, true) => Self::View,
            (Self::View, false) | (Self::Blackboard, true) => Self::Dimmed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dimmed => "dimmed",
            Self::Blackboard => "blackboard",
            Self::View => "view",
        }
    }
}

impl std::str::FromStr for BoardMode {
    type Err = InkboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dimmed" => Ok(Self::Dimmed),
            "blackboard" => Ok(Self::Blackboard),
            "view" => Ok(Self::View),
            _ => Err(InkboardError::UnknownBoardMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_mode_is_dimmed() {
        assert_eq!(BoardMode::default(), BoardMode::Dimmed);
    }

    #[test]
    fn test_background_color() {
        let config = BoardConfig::default();

        assert_eq!(
            BoardMode::Dimmed.background_color(&config),
            Color::new(0, 0, 0, 50)
        );
        assert_eq!(
            BoardMode::Blackboard.background_color(&config),
            Color::new(0, 0, 0, 255)
        );
        assert_eq!(BoardMode::View.background_color(&config).a, 0);
    }

    #[test]
    fn test_background_follows_config_alpha() {
        let config = BoardConfig {
            dimmed_alpha: 120,
            ..BoardConfig::default()
        };
        assert_eq!(BoardMode::Dimmed.background_color(&config).a, 120);
    }

    #[test]
    fn test_toggle_and_cycle() {
        assert_eq!(BoardMode::Dimmed.toggled(), BoardMode::Blackboard);
        assert_eq!(BoardMode::Blackboard.toggled(), BoardMode::Dimmed);
        assert_eq!(BoardMode::View.toggled(), BoardMode::Dimmed);

        let mut mode = BoardMode::Dimmed;
        let mut seen = Vec::new();
        for _ in 0..3 {
            mode = mode.cycled(false);
            seen.push(mode);
        }
        assert_eq!(
            seen,
            vec![BoardMode::Blackboard, BoardMode::View, BoardMode::Dimmed]
        );
        assert_eq!(BoardMode::Dimmed.cycled(true), BoardMode::View);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(BoardMode::from_str("dimmed").unwrap(), BoardMode::Dimmed);
        assert_eq!(
            BoardMode::from_str("BLACKBOARD").unwrap(),
            BoardMode::Blackboard
        );
        assert_eq!(BoardMode::from_str(" View ").unwrap(), BoardMode::View);
        assert!(BoardMode::from_str("whiteboard").is_err());
    }
}
