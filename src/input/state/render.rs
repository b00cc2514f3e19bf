use crate::draw::{Shape, render_shape, render_shapes};

use super::{DrawingSurface, Interaction};

impl DrawingSurface {
    /// Returns the shape currently being dragged out, for live preview.
    ///
    /// The candidate uses the active style and is never part of the
    /// committed shapes.
    pub fn candidate_shape(&self) -> Option<Shape> {
        if let Interaction::Drawing {
            anchor_x,
            anchor_y,
            extent_x,
            extent_y,
        } = self.interaction
        {
            Some(self.style.shape_from_drag(anchor_x, anchor_y, extent_x, extent_y))
        } else {
            None
        }
    }

    /// Clears the render target and draws every committed shape in order,
    /// then the candidate shape while one is being drawn.
    ///
    /// Does nothing before the render target exists.
    pub fn redraw_all(&self) {
        let Some(target) = &self.target else {
            return;
        };

        let ctx = match target.context() {
            Ok(ctx) => ctx,
            Err(err) => {
                log::warn!("Could not create drawing context: {err}");
                return;
            }
        };

        crate::draw::render::clear(&ctx);

        let stroke = self.style.stroke();
        render_shapes(&ctx, self.frame.shapes(), stroke);

        if let Some(candidate) = self.candidate_shape() {
            render_shape(&ctx, &candidate, stroke);
        }
    }
}
