//! Shape definitions for the drawing surface.

use super::color::Color;
use crate::input::ShapeKind;
use crate::util;
use std::fmt;

/// A committed (or candidate) shape on the surface.
///
/// Each variant carries the border and fill colors that were active when it
/// was created; later style changes do not affect it.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Filled and stroked rectangle anchored at the press point
    Rectangle {
        /// Anchor X coordinate (press point)
        x: f64,
        /// Anchor Y coordinate (press point)
        y: f64,
        /// Signed width; negative when dragged to the left
        width: f64,
        /// Signed height; negative when dragged upwards
        height: f64,
        border: Color,
        fill: Color,
    },
    /// Filled and stroked circle centered on the press point
    Circle {
        /// Center X coordinate
        x: f64,
        /// Center Y coordinate
        y: f64,
        radius: f64,
        border: Color,
        fill: Color,
    },
    /// Straight line with an arrowhead at both ends
    Line {
        /// Starting X coordinate (press point)
        x1: f64,
        /// Starting Y coordinate (press point)
        y1: f64,
        x2: f64,
        y2: f64,
        border: Color,
        /// Captured with the rest of the style; lines are stroked only
        fill: Color,
    },
}

impl Shape {
    /// Builds the shape a drag from `(anchor_x, anchor_y)` spanning
    /// `(extent_x, extent_y)` produces for the given kind and colors.
    pub fn from_drag(
        kind: ShapeKind,
        anchor_x: f64,
        anchor_y: f64,
        extent_x: f64,
        extent_y: f64,
        border: Color,
        fill: Color,
    ) -> Self {
        match kind {
            ShapeKind::Rectangle => Shape::Rectangle {
                x: anchor_x,
                y: anchor_y,
                width: extent_x,
                height: extent_y,
                border,
                fill,
            },
            ShapeKind::Circle => Shape::Circle {
                x: anchor_x,
                y: anchor_y,
                radius: extent_x.abs(),
                border,
                fill,
            },
            ShapeKind::Line => Shape::Line {
                x1: anchor_x,
                y1: anchor_y,
                x2: anchor_x + extent_x,
                y2: anchor_y + extent_y,
                border,
                fill,
            },
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Line { .. } => ShapeKind::Line,
        }
    }

    /// The point captured at gesture start.
    pub fn anchor(&self) -> (f64, f64) {
        match self {
            Shape::Rectangle { x, y, .. } | Shape::Circle { x, y, .. } => (*x, *y),
            Shape::Line { x1, y1, .. } => (*x1, *y1),
        }
    }

    pub fn border(&self) -> Color {
        match self {
            Shape::Rectangle { border, .. }
            | Shape::Circle { border, .. }
            | Shape::Line { border, .. } => *border,
        }
    }

    pub fn fill(&self) -> Color {
        match self {
            Shape::Rectangle { fill, .. } | Shape::Circle { fill, .. } | Shape::Line { fill, .. } => {
                *fill
            }
        }
    }

    /// Moves the whole shape by `(dx, dy)`.
    ///
    /// Both line endpoints move so a dragged line keeps its length and angle.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Shape::Rectangle { x, y, .. } | Shape::Circle { x, y, .. } => {
                *x += dx;
                *y += dy;
            }
            Shape::Line { x1, y1, x2, y2, .. } => {
                *x1 += dx;
                *y1 += dy;
                *x2 += dx;
                *y2 += dy;
            }
        }
    }

    /// Returns true when `(px, py)` lies on the shape, widened by `tolerance` pixels.
    pub fn contains(&self, px: f64, py: f64, tolerance: f64) -> bool {
        match self {
            Shape::Rectangle {
                x,
                y,
                width,
                height,
                ..
            } => {
                let (min_x, max_x) = util::span(*x, *width);
                let (min_y, max_y) = util::span(*y, *height);
                px >= min_x - tolerance
                    && px <= max_x + tolerance
                    && py >= min_y - tolerance
                    && py <= max_y + tolerance
            }
            Shape::Circle { x, y, radius, .. } => (px - x).hypot(py - y) <= radius + tolerance,
            Shape::Line { x1, y1, x2, y2, .. } => {
                util::distance_to_segment(px, py, *x1, *y1, *x2, *y2) <= tolerance
            }
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Rectangle {
                x,
                y,
                width,
                height,
                border,
                fill,
            } => write!(
                f,
                "rectangle x={x} y={y} width={width} height={height} border={border} fill={fill}"
            ),
            Shape::Circle {
                x,
                y,
                radius,
                border,
                fill,
            } => write!(
                f,
                "circle x={x} y={y} radius={radius} border={border} fill={fill}"
            ),
            Shape::Line {
                x1,
                y1,
                x2,
                y2,
                border,
                fill,
            } => write!(
                f,
                "line x1={x1} y1={y1} x2={x2} y2={y2} border={border} fill={fill}"
            ),
        }
    }
}
