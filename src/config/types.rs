//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::ShapeKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Render target settings used when the host does not size the canvas itself.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 1 - 16384)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 1 - 16384)
    #[serde(default = "default_canvas_height")]
    pub height: u32,

    /// Background painted under the shapes when writing images.
    /// Leave unset to keep the canvas transparent.
    #[serde(default)]
    pub background: Option<ColorSpec>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: None,
        }
    }
}

/// Drawing style the surface starts with.
///
/// Shape colors always come from the fixed per-kind palette.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StyleConfig {
    /// Shape kind selected at startup (rectangle, circle, line)
    #[serde(default)]
    pub initial_shape: ShapeKind,

    /// Outline width in pixels (valid range: 0.5 - 20.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    /// Arrowhead arm length in pixels (valid range: 2.0 - 50.0)
    #[serde(default = "default_arrowhead_length")]
    pub arrowhead_length: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            initial_shape: ShapeKind::default(),
            stroke_width: default_stroke_width(),
            arrowhead_length: default_arrowhead_length(),
        }
    }
}

/// Pointer interaction tuning.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct InteractionConfig {
    /// Extra pixels around a shape that still pick it for dragging
    /// (valid range: 0.0 - 32.0)
    #[serde(default = "default_hit_tolerance")]
    pub hit_tolerance: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            hit_tolerance: default_hit_tolerance(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_canvas_width() -> u32 {
    800
}

fn default_canvas_height() -> u32 {
    600
}

pub(super) fn default_stroke_width() -> f64 {
    2.0
}

pub(super) fn default_arrowhead_length() -> f64 {
    10.0
}

pub(super) fn default_hit_tolerance() -> f64 {
    crate::input::state::DEFAULT_HIT_TOLERANCE
}
