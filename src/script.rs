//! Recorded gesture scripts replayed against a [`DrawingSurface`].
//!
//! A script is a TOML document with an optional `[canvas]` table and a list of
//! `[[step]]` tables, each naming the surface call it stands for:
//!
//! ```toml
//! [canvas]
//! width = 320
//! height = 240
//!
//! [[step]]
//! action = "shape"
//! kind = "circle"
//!
//! [[step]]
//! action = "press"
//! x = 30.0
//! y = 30.0
//!
//! [[step]]
//! action = "move"
//! x = 60.0
//! y = 30.0
//!
//! [[step]]
//! action = "release"
//! ```

use crate::input::{DrawingSurface, ShapeKind};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures when loading a gesture script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid gesture script: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Optional canvas size requested by a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ScriptCanvas {
    pub width: u32,
    pub height: u32,
}

/// One host event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Step {
    /// `set_shape_kind`
    Shape { kind: ShapeKind },
    /// `begin_interaction`
    Press { x: f64, y: f64 },
    /// `update_interaction`
    Move {
        x: f64,
        y: f64,
        #[serde(default)]
        square: bool,
    },
    /// `end_interaction`
    Release,
    /// `begin_drag_at`: drag whatever is on top under the pointer
    Grab { x: f64, y: f64 },
    /// `begin_drag` on an explicit shape index
    Drag { index: usize, x: f64, y: f64 },
    Undo,
    Reset,
    /// `initialize` with a new size
    Resize { width: u32, height: u32 },
    StrokeWidth { width: f64 },
    ArrowheadLength { length: f64 },
}

/// A parsed gesture script.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub canvas: Option<ScriptCanvas>,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

impl Script {
    /// Parses a script from TOML text.
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let text = fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Feeds every step to the surface in order.
    pub fn replay(&self, surface: &mut DrawingSurface) {
        for step in &self.steps {
            step.apply(surface);
        }
        log::debug!(
            "Replayed {} step(s), {} shape(s) committed",
            self.steps.len(),
            surface.shapes().len()
        );
    }
}

impl Step {
    /// Performs the surface call this step stands for.
    pub fn apply(&self, surface: &mut DrawingSurface) {
        match *self {
            Step::Shape { kind } => surface.set_shape_kind(kind),
            Step::Press { x, y } => surface.begin_interaction(x, y),
            Step::Move { x, y, square } => surface.update_interaction(x, y, square),
            Step::Release => surface.end_interaction(),
            Step::Grab { x, y } => {
                if !surface.begin_drag_at(x, y) {
                    log::debug!("Nothing to grab at ({x}, {y})");
                }
            }
            Step::Drag { index, x, y } => surface.begin_drag(index, x, y),
            Step::Undo => surface.undo(),
            Step::Reset => surface.reset(),
            Step::Resize { width, height } => surface.initialize(width, height),
            Step::StrokeWidth { width } => surface.set_stroke_width(width),
            Step::ArrowheadLength { length } => surface.set_arrowhead_length(length),
        }
    }
}
