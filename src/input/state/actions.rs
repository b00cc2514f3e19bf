use crate::input::ShapeKind;
use log::debug;

use super::{DrawingSurface, Interaction};

impl DrawingSurface {
    /// Removes the most recent shape and redraws the rest.
    ///
    /// Undo on an empty surface is a no-op. A drag whose target was removed ends.
    pub fn undo(&mut self) {
        if self.frame.undo().is_some() {
            debug!("Undo: {} shape(s) remain", self.frame.len());
        }
        self.cancel_stale_drag();
        self.redraw_all();
    }

    /// Removes every shape and clears the render target.
    ///
    /// The active style is kept.
    pub fn reset(&mut self) {
        self.frame.clear();
        self.cancel_stale_drag();
        if let Some(target) = &self.target {
            target.clear();
        }
        debug!("Surface reset");
    }

    /// Selects the kind of shape new drags create and applies its stock colors.
    pub fn set_shape_kind(&mut self, kind: ShapeKind) {
        let (border, fill) = kind.default_colors();
        self.style.shape_kind = kind;
        self.style.border = border;
        self.style.fill = fill;
        debug!("Shape kind set to {kind} (border {border}, fill {fill})");
    }

    /// Changes the outline width used for every shape.
    ///
    /// Non-finite or non-positive widths are ignored.
    pub fn set_stroke_width(&mut self, width: f64) {
        if width.is_finite() && width > 0.0 {
            self.style.stroke_width = width;
            self.redraw_all();
        } else {
            debug!("Ignoring stroke width {width}");
        }
    }

    /// Changes the arm length of line arrowheads.
    ///
    /// Non-finite or non-positive lengths are ignored.
    pub fn set_arrowhead_length(&mut self, length: f64) {
        if length.is_finite() && length > 0.0 {
            self.style.arrowhead_length = length;
            self.redraw_all();
        } else {
            debug!("Ignoring arrowhead length {length}");
        }
    }

    fn cancel_stale_drag(&mut self) {
        if let Interaction::Dragging { target_index, .. } = self.interaction {
            if target_index >= self.frame.len() {
                self.interaction = Interaction::Idle;
            }
        }
    }
}
