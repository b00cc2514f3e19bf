//! Configuration enum types.

use crate::draw::Color;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a CSS color string or RGB values.
///
/// # Examples
/// ```toml
/// # CSS color string
/// background = "white"
/// background = "rgba(0, 0, 0, 0.5)"
///
/// # RGB color (0-255 per component)
/// background = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Color name, `#rrggbb`, `rgb(...)` or `rgba(...)`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the specification to a [`Color`].
    ///
    /// Strings that fail to parse yield `None` with a warning.
    pub fn to_color(&self) -> Option<Color> {
        match self {
            ColorSpec::Name(name) => match name.parse() {
                Ok(color) => Some(color),
                Err(err) => {
                    warn!("Ignoring color: {err}");
                    None
                }
            },
            ColorSpec::Rgb([r, g, b]) => Some(Color::from_rgb8(*r, *g, *b, 1.0)),
        }
    }
}
