//! Pointer-driven shape drawing surface.
//!
//! A [`DrawingSurface`] records rectangles, circles, and double-arrowed lines
//! dragged out by a pointer, renders them with Cairo, and supports undo,
//! reset, and dragging committed shapes around. The [`script`] module lets a
//! host replay recorded gestures against a surface.

pub mod config;
pub mod draw;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
pub use input::{DrawingSurface, ShapeKind};
