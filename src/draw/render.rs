//! Cairo-based rendering functions for shapes.

use super::color::Color;
use super::shape::Shape;
use crate::util;

/// Stroke parameters applied to every shape at render time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Outline width in pixels
    pub width: f64,
    /// Arm length of line arrowheads in pixels
    pub arrowhead_length: f64,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            width: 2.0,
            arrowhead_length: 10.0,
        }
    }
}

/// Renders all shapes in a collection to a Cairo context.
///
/// Shapes are drawn in the order they appear (first shape = bottom layer).
pub fn render_shapes(ctx: &cairo::Context, shapes: &[Shape], stroke: Stroke) {
    for shape in shapes {
        render_shape(ctx, shape, stroke);
    }
}

/// Renders a single shape to a Cairo context.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape, stroke: Stroke) {
    match shape {
        Shape::Rectangle {
            x,
            y,
            width,
            height,
            border,
            fill,
        } => render_rectangle(ctx, *x, *y, *width, *height, *border, *fill, stroke.width),
        Shape::Circle {
            x,
            y,
            radius,
            border,
            fill,
        } => render_circle(ctx, *x, *y, *radius, *border, *fill, stroke.width),
        Shape::Line {
            x1,
            y1,
            x2,
            y2,
            border,
            ..
        } => render_double_arrow(ctx, *x1, *y1, *x2, *y2, *border, stroke),
    }
}

/// Render a filled rectangle with an outline.
#[allow(clippy::too_many_arguments)]
fn render_rectangle(
    ctx: &cairo::Context,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    border: Color,
    fill: Color,
    thick: f64,
) {
    ctx.new_path();
    ctx.rectangle(x, y, width, height);

    fill.apply(ctx);
    let _ = ctx.fill_preserve();

    border.apply(ctx);
    ctx.set_line_width(thick);
    ctx.set_line_join(cairo::LineJoin::Miter);
    let _ = ctx.stroke();
}

/// Render a filled circle with an outline (full 0..2π arc).
fn render_circle(
    ctx: &cairo::Context,
    cx: f64,
    cy: f64,
    radius: f64,
    border: Color,
    fill: Color,
    thick: f64,
) {
    ctx.new_path();
    ctx.arc(cx, cy, radius, 0.0, 2.0 * std::f64::consts::PI);

    fill.apply(ctx);
    let _ = ctx.fill_preserve();

    border.apply(ctx);
    ctx.set_line_width(thick);
    let _ = ctx.stroke();
}

/// Render a line with a V-shaped arrowhead at each end.
fn render_double_arrow(
    ctx: &cairo::Context,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    color: Color,
    stroke: Stroke,
) {
    color.apply(ctx);
    ctx.set_line_width(stroke.width);
    ctx.set_line_cap(cairo::LineCap::Round);

    ctx.new_path();
    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);

    // A zero-length line has no direction to point the heads along
    if x1 != x2 || y1 != y2 {
        let angle = (y2 - y1).atan2(x2 - x1);
        add_arrowhead(ctx, x2, y2, angle, stroke.arrowhead_length);
        add_arrowhead(ctx, x1, y1, angle + std::f64::consts::PI, stroke.arrowhead_length);
    }

    let _ = ctx.stroke();
}

fn add_arrowhead(ctx: &cairo::Context, tip_x: f64, tip_y: f64, direction: f64, length: f64) {
    for (arm_x, arm_y) in util::arrowhead_arms(tip_x, tip_y, direction, length) {
        ctx.move_to(tip_x, tip_y);
        ctx.line_to(arm_x, arm_y);
    }
}

/// Clears the whole context to full transparency.
pub fn clear(ctx: &cairo::Context) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Clear);
    let _ = ctx.paint();
    let _ = ctx.restore();
}

/// Fills the whole context with a solid background color.
pub fn fill_background(ctx: &cairo::Context, color: Color) {
    let _ = ctx.save();
    color.apply(ctx);
    ctx.set_operator(cairo::Operator::Source);
    let _ = ctx.paint();
    let _ = ctx.restore();
}
