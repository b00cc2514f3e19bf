//! Pointer handling and the drawing state machine.
//!
//! Hosts forward press/motion/release events and style requests to a
//! [`DrawingSurface`], which interprets them according to its current
//! [`Interaction`] and keeps the render target up to date.

pub mod state;
pub mod tool;

pub use state::{ActiveStyle, DrawingSurface, Interaction};
pub use tool::ShapeKind;
