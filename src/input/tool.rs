//! Shape kind selection and its fixed palette.

use crate::draw::Color;
use crate::draw::color::{BLUE, GREEN, LIME, YELLOW};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fill alpha shared by every stock palette entry.
const FILL_ALPHA: f64 = 0.3;

/// Which shape a drag on the surface creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    /// Rectangle from the press point to the pointer
    #[default]
    Rectangle,
    /// Circle centered on the press point, radius from the horizontal drag
    Circle,
    /// Line with arrowheads at both ends
    Line,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Rectangle, ShapeKind::Circle, ShapeKind::Line];

    /// Border and fill colors a kind starts with when selected.
    ///
    /// - Rectangle → yellow / `rgba(255, 255, 0, 0.3)`
    /// - Circle → blue / `rgba(0, 0, 255, 0.3)`
    /// - Line → green / `rgba(0, 255, 0, 0.3)`
    pub fn default_colors(self) -> (Color, Color) {
        match self {
            ShapeKind::Rectangle => (YELLOW, YELLOW.with_alpha(FILL_ALPHA)),
            ShapeKind::Circle => (BLUE, BLUE.with_alpha(FILL_ALPHA)),
            ShapeKind::Line => (GREEN, LIME.with_alpha(FILL_ALPHA)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Line => "line",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
