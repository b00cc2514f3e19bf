use crate::draw::CommitOutcome;
use crate::input::ShapeKind;
use crate::util;
use log::debug;

use super::{DrawingSurface, Interaction};

impl DrawingSurface {
    /// Processes a pointer press.
    ///
    /// Starts a new shape anchored at `(x, y)`. A press while a shape is
    /// being dragged is ignored so the two gestures never mix.
    pub fn begin_interaction(&mut self, x: f64, y: f64) {
        if matches!(self.interaction, Interaction::Dragging { .. }) {
            debug!("Ignoring press at ({x}, {y}) during drag");
            return;
        }

        self.interaction = Interaction::Drawing {
            anchor_x: x,
            anchor_y: y,
            extent_x: 0.0,
            extent_y: 0.0,
        };
    }

    /// Processes pointer motion.
    ///
    /// # Behavior
    /// - Idle: nothing happens
    /// - Dragging: the target shape follows the pointer and everything is redrawn
    /// - Drawing: the extent is updated and the committed shapes are redrawn
    ///   with the candidate on top. `constrain_square` squares rectangles and
    ///   circles; lines always follow the pointer.
    pub fn update_interaction(&mut self, x: f64, y: f64, constrain_square: bool) {
        let square = constrain_square && self.style.shape_kind != ShapeKind::Line;
        match &mut self.interaction {
            Interaction::Idle => {}
            Interaction::Dragging {
                target_index,
                last_x,
                last_y,
            } => {
                let (dx, dy) = (x - *last_x, y - *last_y);
                *last_x = x;
                *last_y = y;
                if let Some(shape) = self.frame.get_mut(*target_index) {
                    shape.translate(dx, dy);
                }
                self.redraw_all();
            }
            Interaction::Drawing {
                anchor_x,
                anchor_y,
                extent_x,
                extent_y,
            } => {
                let (dx, dy) = util::constrain_extent(x - *anchor_x, y - *anchor_y, square);
                *extent_x = dx;
                *extent_y = dy;
                self.redraw_all();
            }
        }
    }

    /// Processes a pointer release.
    ///
    /// Finishing a drawing gesture commits the shape unless it is anchored on
    /// the origin or repeats the previous shape; rejected shapes vanish
    /// silently. Finishing a drag leaves the shape where it was dropped.
    /// The surface is always idle afterwards.
    pub fn end_interaction(&mut self) {
        match std::mem::take(&mut self.interaction) {
            Interaction::Drawing {
                anchor_x,
                anchor_y,
                extent_x,
                extent_y,
            } => {
                let shape = self.style.shape_from_drag(anchor_x, anchor_y, extent_x, extent_y);
                match self.frame.try_commit(shape) {
                    CommitOutcome::Committed => {
                        debug!("Committed shape #{}", self.frame.len());
                    }
                    outcome => {
                        debug!(
                            "Discarded {} at ({anchor_x}, {anchor_y}): {outcome:?}",
                            self.style.shape_kind
                        );
                    }
                }
                self.redraw_all();
            }
            Interaction::Dragging { target_index, .. } => {
                debug!("Dropped shape #{target_index}");
            }
            Interaction::Idle => {}
        }
    }

    /// Starts moving the committed shape at `shape_index`.
    ///
    /// Only honored while idle and for an existing shape.
    pub fn begin_drag(&mut self, shape_index: usize, x: f64, y: f64) {
        if !matches!(self.interaction, Interaction::Idle) {
            debug!("Ignoring drag start while {:?}", self.interaction);
            return;
        }

        if shape_index >= self.frame.len() {
            debug!("Ignoring drag start for missing shape #{shape_index}");
            return;
        }

        self.interaction = Interaction::Dragging {
            target_index: shape_index,
            last_x: x,
            last_y: y,
        };
    }

    /// Index of the last-drawn shape under `(x, y)`, if any.
    pub fn shape_at(&self, x: f64, y: f64) -> Option<usize> {
        let tolerance = self.hit_tolerance.max(self.style.stroke_width / 2.0);
        self.frame.hit_test(x, y, tolerance)
    }

    /// Starts dragging whichever shape is on top under the pointer.
    ///
    /// Returns `true` if a drag started.
    pub fn begin_drag_at(&mut self, x: f64, y: f64) -> bool {
        if !matches!(self.interaction, Interaction::Idle) {
            return false;
        }

        match self.shape_at(x, y) {
            Some(index) => {
                self.begin_drag(index, x, y);
                true
            }
            None => false,
        }
    }
}
