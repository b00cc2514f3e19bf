//! Configuration file support for shapeboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/shapeboard/config.toml`. Settings include the canvas size,
//! the starting shape kind, stroke appearance, and drag hit-testing slack.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{CanvasConfig, InteractionConfig, StyleConfig};

use crate::input::state::MAX_CANVAS_SIZE;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 1024
/// height = 768
/// background = "white"
///
/// [style]
/// initial_shape = "circle"
/// stroke_width = 3.0
/// arrowhead_length = 12.0
///
/// [interaction]
/// hit_tolerance = 6.0
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas size and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Starting drawing style
    #[serde(default)]
    pub style: StyleConfig,

    /// Pointer interaction tuning
    #[serde(default)]
    pub interaction: InteractionConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 1 - [`MAX_CANVAS_SIZE`]
    /// - `style.stroke_width`: 0.5 - 20.0
    /// - `style.arrowhead_length`: 2.0 - 50.0
    /// - `interaction.hit_tolerance`: 0.0 - 32.0
    fn validate_and_clamp(&mut self) {
        if !(1..=MAX_CANVAS_SIZE).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 1-{MAX_CANVAS_SIZE} range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(1, MAX_CANVAS_SIZE);
        }

        if !(1..=MAX_CANVAS_SIZE).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 1-{MAX_CANVAS_SIZE} range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(1, MAX_CANVAS_SIZE);
        }

        if !(0.5..=20.0).contains(&self.style.stroke_width) {
            log::warn!(
                "Invalid stroke_width {:.1}, clamping to 0.5-20.0 range",
                self.style.stroke_width
            );
            self.style.stroke_width = clamp_or(
                self.style.stroke_width,
                0.5,
                20.0,
                types::default_stroke_width(),
            );
        }

        if !(2.0..=50.0).contains(&self.style.arrowhead_length) {
            log::warn!(
                "Invalid arrowhead_length {:.1}, clamping to 2.0-50.0 range",
                self.style.arrowhead_length
            );
            self.style.arrowhead_length = clamp_or(
                self.style.arrowhead_length,
                2.0,
                50.0,
                types::default_arrowhead_length(),
            );
        }

        if !(0.0..=32.0).contains(&self.interaction.hit_tolerance) {
            log::warn!(
                "Invalid hit_tolerance {:.1}, clamping to 0.0-32.0 range",
                self.interaction.hit_tolerance
            );
            self.interaction.hit_tolerance = clamp_or(
                self.interaction.hit_tolerance,
                0.0,
                32.0,
                types::default_hit_tolerance(),
            );
        }

        if let Some(spec) = &self.canvas.background {
            if spec.to_color().is_none() {
                log::warn!("Invalid canvas background, keeping the canvas transparent");
                self.canvas.background = None;
            }
        }
    }

    /// Background color to composite under the shapes, if configured.
    pub fn background_color(&self) -> Option<crate::draw::Color> {
        self.canvas.background.as_ref().and_then(ColorSpec::to_color)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/shapeboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("shapeboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit file path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::parse(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    fn parse(config_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(config_str)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}
