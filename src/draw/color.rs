//! RGBA color type, CSS-style color parsing, and the stock palette.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use shapeboard::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let translucent: Color = "rgba(255, 255, 0, 0.3)".parse().unwrap();
/// assert_eq!(translucent.a, 0.3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

/// Reasons a color string could not be understood.
#[derive(Debug, Error, PartialEq)]
pub enum ColorParseError {
    #[error("unknown color name '{0}'")]
    UnknownName(String),

    #[error("malformed hex color '{0}'")]
    BadHex(String),

    #[error("malformed color function '{0}'")]
    BadFunction(String),

    #[error("color component out of range in '{0}'")]
    OutOfRange(String),
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Builds a color from 0-255 channel values and a 0.0-1.0 alpha.
    pub fn from_rgb8(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
            a,
        }
    }

    /// Returns a copy of this color with a different alpha.
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Sets this color as the source of a Cairo context.
    pub fn apply(&self, ctx: &cairo::Context) {
        ctx.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(
            f,
            "rgba({}, {}, {}, {})",
            channel(self.r),
            channel(self.g),
            channel(self.b),
            self.a
        )
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parses the color notations accepted by web canvases:
    /// named colors, `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)`
    /// and `rgba(r, g, b, a)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();

        if let Some(hex) = lower.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::BadHex(trimmed.to_string()));
        }

        if let Some(args) = function_args(&lower, "rgba") {
            return parse_channels(args, true, trimmed);
        }

        if let Some(args) = function_args(&lower, "rgb") {
            return parse_channels(args, false, trimmed);
        }

        name_to_color(&lower).ok_or_else(|| ColorParseError::UnknownName(trimmed.to_string()))
    }
}

fn function_args<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    input
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_channels(args: &str, with_alpha: bool, text: &str) -> Result<Color, ColorParseError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return Err(ColorParseError::BadFunction(text.to_string()));
    }

    let mut channels = [0u8; 3];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        let value: f64 = part
            .parse()
            .map_err(|_| ColorParseError::BadFunction(text.to_string()))?;
        if !(0.0..=255.0).contains(&value) {
            return Err(ColorParseError::OutOfRange(text.to_string()));
        }
        *slot = value.round() as u8;
    }

    let alpha = if with_alpha {
        let value: f64 = parts[3]
            .parse()
            .map_err(|_| ColorParseError::BadFunction(text.to_string()))?;
        if !(0.0..=1.0).contains(&value) {
            return Err(ColorParseError::OutOfRange(text.to_string()));
        }
        value
    } else {
        1.0
    };

    Ok(Color::from_rgb8(channels[0], channels[1], channels[2], alpha))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let byte = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut digits = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            Some(Color::from_rgb8(
                digits.next()??,
                digits.next()??,
                digits.next()??,
                1.0,
            ))
        }
        6 => Some(Color::from_rgb8(
            byte(&hex[0..2])?,
            byte(&hex[2..4])?,
            byte(&hex[4..6])?,
            1.0,
        )),
        8 => Some(Color::from_rgb8(
            byte(&hex[0..2])?,
            byte(&hex[2..4])?,
            byte(&hex[4..6])?,
            f64::from(byte(&hex[6..8])?) / 255.0,
        )),
        _ => None,
    }
}

/// Maps CSS color keywords to colors (case-insensitive).
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_ascii_lowercase().as_str() {
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "lime" => Some(LIME),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "cyan" | "aqua" => Some(CYAN),
        "magenta" | "fuchsia" => Some(MAGENTA),
        "gray" | "grey" => Some(GRAY),
        "transparent" => Some(TRANSPARENT),
        _ => None,
    }
}

// ============================================================================
// Named colors (CSS keyword values)
// ============================================================================

pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
/// CSS `green` is half-intensity; the full channel is `lime`.
pub const GREEN: Color = Color::new(0.0, 128.0 / 255.0, 0.0, 1.0);
pub const LIME: Color = Color::new(0.0, 1.0, 0.0, 1.0);
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);
pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);
pub const ORANGE: Color = Color::new(1.0, 165.0 / 255.0, 0.0, 1.0);
pub const CYAN: Color = Color::new(0.0, 1.0, 1.0, 1.0);
pub const MAGENTA: Color = Color::new(1.0, 0.0, 1.0, 1.0);
pub const GRAY: Color = Color::new(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0, 1.0);
pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
