//! Configuration file support for inkboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/inkboard/config.toml`. Settings cover the per-tool brush presets,
//! size stepping, stroke capture and the overlay background.
//!
//! If no config file exists, sensible defaults are used automatically. The annotation
//! store never reads this; the input layer turns it into brush descriptors.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{BoardConfig, DrawingConfig, SizeConfig, ToolPresetConfig, ToolsConfig};

use crate::input::BoardMode;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest brush size accepted anywhere in the configuration.
pub const MAX_BRUSH_SIZE: u32 = 200;

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [tools.pen]
/// shape = "free"
/// size = 4
/// color = "white"
///
/// [tools.highlight]
/// size = 14
/// color = [255, 176, 46]
///
/// [sizes]
/// steps = [4, 6, 10, 14, 20, 30, 50]
///
/// [board]
/// default_mode = "dimmed"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Per-tool brush presets
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Brush size stepping
    #[serde(default)]
    pub sizes: SizeConfig,

    /// Stroke capture behaviour
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Overlay background settings
    #[serde(default)]
    pub board: BoardConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped (or replaced by their default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - tool sizes and size steps: 1 - 200
    /// - `sizes.min` <= `sizes.max`, `sizes.scroll_step` >= 1
    /// - `drawing.decimation_factor`: 0.0 - 2.0
    /// - `board.default_mode`: dimmed, blackboard or view
    /// - tool colors: palette names or [r, g, b]
    pub fn validate_and_clamp(&mut self) {
        for (name, preset) in [
            ("pen", &mut self.tools.pen),
            ("highlight", &mut self.tools.highlight),
            ("eraser", &mut self.tools.eraser),
            ("crop_eraser", &mut self.tools.crop_eraser),
        ] {
            if let Some(size) = preset.size {
                if !(1..=MAX_BRUSH_SIZE).contains(&size) {
                    warn!("Invalid tools.{name}.size {size}, clamping to 1-{MAX_BRUSH_SIZE} range");
                    preset.size = Some(size.clamp(1, MAX_BRUSH_SIZE));
                }
            }

            if let Some(spec) = &preset.color {
                if let Err(err) = spec.to_color() {
                    warn!("Invalid tools.{name}.color: {err}; using the built-in color");
                    preset.color = None;
                }
            }
        }

        let before = self.sizes.steps.len();
        self.sizes.steps.retain(|step| (1..=MAX_BRUSH_SIZE).contains(step));
        self.sizes.steps.sort_unstable();
        self.sizes.steps.dedup();
        if self.sizes.steps.len() != before {
            warn!("Dropped out-of-range or duplicate entries from sizes.steps");
        }
        if self.sizes.steps.is_empty() {
            warn!("sizes.steps is empty, restoring defaults");
            self.sizes.steps = SizeConfig::default().steps;
        }

        if !(1..=MAX_BRUSH_SIZE).contains(&self.sizes.min) {
            warn!(
                "Invalid sizes.min {}, clamping to 1-{MAX_BRUSH_SIZE} range",
                self.sizes.min
            );
            self.sizes.min = self.sizes.min.clamp(1, MAX_BRUSH_SIZE);
        }
        if !(self.sizes.min..=MAX_BRUSH_SIZE).contains(&self.sizes.max) {
            warn!(
                "Invalid sizes.max {}, clamping to {}-{MAX_BRUSH_SIZE} range",
                self.sizes.max, self.sizes.min
            );
            self.sizes.max = self.sizes.max.clamp(self.sizes.min, MAX_BRUSH_SIZE);
        }
        if self.sizes.scroll_step == 0 {
            warn!("sizes.scroll_step must be at least 1");
            self.sizes.scroll_step = 1;
        }

        if !(0.0..=2.0).contains(&self.drawing.decimation_factor) {
            warn!(
                "Invalid decimation_factor {:.2}, clamping to 0.0-2.0 range",
                self.drawing.decimation_factor
            );
            self.drawing.decimation_factor = if self.drawing.decimation_factor.is_nan() {
                DrawingConfig::default().decimation_factor
            } else {
                self.drawing.decimation_factor.clamp(0.0, 2.0)
            };
        }

        if self.board.default_mode.parse::<BoardMode>().is_err() {
            warn!(
                "Invalid board default_mode '{}', falling back to 'dimmed'",
                self.board.default_mode
            );
            self.board.default_mode = BoardConfig::default().default_mode;
        }
    }

    /// Startup board mode after validation.
    pub fn default_board_mode(&self) -> BoardMode {
        self.board.default_mode.parse().unwrap_or_default()
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inkboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Serializes the configuration as pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Writes the documented example config to the default location.
    ///
    /// # Errors
    /// Returns an error if a config file already exists or the file cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;
        Self::write_default_file(&config_path)?;
        Ok(config_path)
    }

    fn write_default_file(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
