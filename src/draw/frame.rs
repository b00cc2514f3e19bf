//! Frame container for the committed shapes.

use super::shape::Shape;

/// Result of offering a shape to [`Frame::try_commit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The shape was appended
    Committed,
    /// Rejected: the anchor sits exactly on the surface origin
    OriginAnchored,
    /// Rejected: same kind and anchor as the most recent shape
    Duplicate,
}

/// Ordered collection of committed shapes.
///
/// Draw order equals insertion order (first = bottom layer, last = top layer).
/// Shapes leave only through [`Frame::undo`] or [`Frame::clear`].
#[derive(Debug, Clone, Default)]
pub struct Frame {
    shapes: Vec<Shape>,
}

impl Frame {
    /// Creates a new empty frame with no shapes.
    pub const fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Appends `shape` unless it is anchored on the origin or repeats the
    /// kind and anchor of the immediately preceding shape.
    pub fn try_commit(&mut self, shape: Shape) -> CommitOutcome {
        if shape.anchor() == (0.0, 0.0) {
            return CommitOutcome::OriginAnchored;
        }

        if let Some(last) = self.shapes.last() {
            if last.kind() == shape.kind() && last.anchor() == shape.anchor() {
                return CommitOutcome::Duplicate;
            }
        }

        self.shapes.push(shape);
        CommitOutcome::Committed
    }

    /// Removes and returns the most recently added shape, if any.
    pub fn undo(&mut self) -> Option<Shape> {
        self.shapes.pop()
    }

    /// Removes all shapes from the frame.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Shape> {
        self.shapes.get_mut(index)
    }

    /// Index of the topmost (last drawn) shape under the point, if any.
    pub fn hit_test(&self, x: f64, y: f64, tolerance: f64) -> Option<usize> {
        self.shapes
            .iter()
            .rposition(|shape| shape.contains(x, y, tolerance))
    }
}
