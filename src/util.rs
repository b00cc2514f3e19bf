//! Geometry helpers for arrowheads, drag extents, and hit testing.

use std::f64::consts::PI;

// ============================================================================
// Arrowhead Geometry
// ============================================================================

/// Half-angle between each arrowhead arm and the shaft (30°).
pub const ARROWHEAD_HALF_ANGLE: f64 = PI / 6.0;

/// Calculates the two arm endpoints of a V-shaped arrowhead.
///
/// The arrowhead sits at `(tip_x, tip_y)` and points along `direction`
/// (radians, as returned by `atan2`). Each arm is `length` pixels long and
/// spreads [`ARROWHEAD_HALF_ANGLE`] away from the shaft.
///
/// # Returns
/// Array of two points `[(left_x, left_y), (right_x, right_y)]`.
pub fn arrowhead_arms(tip_x: f64, tip_y: f64, direction: f64, length: f64) -> [(f64, f64); 2] {
    let left = direction - ARROWHEAD_HALF_ANGLE;
    let right = direction + ARROWHEAD_HALF_ANGLE;
    [
        (tip_x - length * left.cos(), tip_y - length * left.sin()),
        (tip_x - length * right.cos(), tip_y - length * right.sin()),
    ]
}

// ============================================================================
// Drag Extents
// ============================================================================

/// Applies the square constraint to a drag extent.
///
/// When `square` is set both sides become the smaller drag magnitude,
/// laid out down and to the right of the anchor whichever way the pointer went.
pub fn constrain_extent(dx: f64, dy: f64, square: bool) -> (f64, f64) {
    if !square {
        return (dx, dy);
    }

    let size = dx.abs().min(dy.abs());
    (size, size)
}

/// Orders two coordinates along one axis into `(min, max)`.
pub fn span(origin: f64, extent: f64) -> (f64, f64) {
    if extent >= 0.0 {
        (origin, origin + extent)
    } else {
        (origin + extent, origin)
    }
}

// ============================================================================
// Hit Testing
// ============================================================================

/// Shortest distance from a point to the segment `(x1, y1)-(x2, y2)`.
pub fn distance_to_segment(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let length_sq = dx * dx + dy * dy;

    if length_sq == 0.0 {
        return (px - x1).hypot(py - y1);
    }

    let t = (((px - x1) * dx + (py - y1) * dy) / length_sq).clamp(0.0, 1.0);
    let nearest_x = x1 + t * dx;
    let nearest_y = y1 + t * dy;
    (px - nearest_x).hypot(py - nearest_y)
}
