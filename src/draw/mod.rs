//! Shape definitions and Cairo rendering.
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color with CSS-style parsing
//! - [`Shape`]: rectangle, circle, and double-arrowed line
//! - [`Frame`]: ordered list of committed shapes
//! - [`RenderTarget`]: the image surface shapes are rasterized onto
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod frame;
pub mod render;
pub mod shape;
pub mod target;

pub use color::{Color, ColorParseError};
pub use frame::{CommitOutcome, Frame};
pub use render::{Stroke, render_shape, render_shapes};
pub use shape::Shape;
pub use target::{RenderTarget, TargetError};
