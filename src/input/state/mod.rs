mod actions;
mod core;
mod mouse;
mod render;
#[cfg(test)]
mod tests;

pub use core::{
    ActiveStyle, DEFAULT_HIT_TOLERANCE, DrawingSurface, Interaction, MAX_CANVAS_SIZE,
};
