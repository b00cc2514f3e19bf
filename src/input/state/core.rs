//! Drawing surface state machine and its render target.

use crate::config::Config;
use crate::draw::{Color, Frame, RenderTarget, Shape, Stroke, TargetError};
use crate::input::ShapeKind;
use std::path::Path;

/// Default hit-test slack around shapes, in pixels.
pub const DEFAULT_HIT_TOLERANCE: f64 = 4.0;

/// Largest render target edge, in pixels.
pub const MAX_CANVAS_SIZE: u32 = 16384;

/// What the pointer is currently doing on the surface.
///
/// Exactly one gesture can be in progress; pointer events are interpreted
/// according to the current variant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    /// No gesture in progress
    #[default]
    Idle,
    /// Dragging out a new shape (pointer held down)
    Drawing {
        /// X coordinate of the press point
        anchor_x: f64,
        /// Y coordinate of the press point
        anchor_y: f64,
        /// Last horizontal extent seen, square constraint already applied
        extent_x: f64,
        /// Last vertical extent seen, square constraint already applied
        extent_y: f64,
    },
    /// Moving a committed shape
    Dragging {
        /// Index of the shape being moved
        target_index: usize,
        /// Pointer X at the previous motion event
        last_x: f64,
        /// Pointer Y at the previous motion event
        last_y: f64,
    },
}

/// Style applied to shapes created from now on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveStyle {
    pub shape_kind: ShapeKind,
    /// Border color captured by new shapes
    pub border: Color,
    /// Fill color captured by new shapes
    pub fill: Color,
    /// Outline width used when rendering every shape
    pub stroke_width: f64,
    /// Arrowhead arm length used when rendering lines
    pub arrowhead_length: f64,
}

impl ActiveStyle {
    /// Style for `kind` with its stock palette.
    pub fn for_kind(kind: ShapeKind, stroke_width: f64, arrowhead_length: f64) -> Self {
        let (border, fill) = kind.default_colors();
        Self {
            shape_kind: kind,
            border,
            fill,
            stroke_width,
            arrowhead_length,
        }
    }

    /// Render-time stroke parameters.
    pub fn stroke(&self) -> Stroke {
        Stroke {
            width: self.stroke_width,
            arrowhead_length: self.arrowhead_length,
        }
    }

    /// Builds a shape of the active kind and colors from a drag.
    pub fn shape_from_drag(&self, anchor_x: f64, anchor_y: f64, dx: f64, dy: f64) -> Shape {
        Shape::from_drag(
            self.shape_kind,
            anchor_x,
            anchor_y,
            dx,
            dy,
            self.border,
            self.fill,
        )
    }
}

impl Default for ActiveStyle {
    fn default() -> Self {
        let stroke = Stroke::default();
        Self::for_kind(ShapeKind::default(), stroke.width, stroke.arrowhead_length)
    }
}

/// Pointer-driven shape drawing surface.
///
/// Holds the committed shapes, the active style, the current gesture, and
/// the render target. The target is absent until [`DrawingSurface::initialize`]
/// has been called by the host; every draw path is a no-op until then.
pub struct DrawingSurface {
    /// Committed shapes in creation order
    pub(super) frame: Frame,
    /// Style for shapes created from now on
    pub(super) style: ActiveStyle,
    /// Current gesture
    pub(super) interaction: Interaction,
    /// Slack in pixels when picking a shape to drag
    pub(super) hit_tolerance: f64,
    /// Raster the shapes are drawn onto, once sized
    pub(super) target: Option<RenderTarget>,
}

impl Default for DrawingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingSurface {
    /// Creates an empty surface with the stock rectangle style.
    pub fn new() -> Self {
        Self::with_defaults(ActiveStyle::default(), DEFAULT_HIT_TOLERANCE)
    }

    /// Creates an empty surface with an explicit starting style.
    pub fn with_defaults(style: ActiveStyle, hit_tolerance: f64) -> Self {
        Self {
            frame: Frame::new(),
            style,
            interaction: Interaction::Idle,
            hit_tolerance,
            target: None,
        }
    }

    /// Creates an empty surface using the style settings from `config`.
    pub fn from_config(config: &Config) -> Self {
        let style = ActiveStyle::for_kind(
            config.style.initial_shape,
            config.style.stroke_width,
            config.style.arrowhead_length,
        );
        Self::with_defaults(style, config.interaction.hit_tolerance)
    }

    /// Sizes the render target to the host's measured layout.
    ///
    /// Calling again recreates a blank target at the new size and redraws
    /// the committed shapes onto it. Edges above [`MAX_CANVAS_SIZE`] are
    /// clamped; zero-sized or unallocatable targets leave the surface
    /// without a target.
    pub fn initialize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("Ignoring render target size {width}x{height}");
            self.target = None;
            return;
        }

        if width > MAX_CANVAS_SIZE || height > MAX_CANVAS_SIZE {
            log::warn!(
                "Render target size {width}x{height} exceeds {MAX_CANVAS_SIZE}, clamping"
            );
        }
        let width = width.min(MAX_CANVAS_SIZE);
        let height = height.min(MAX_CANVAS_SIZE);

        match RenderTarget::create(width, height) {
            Ok(target) => {
                log::info!("Render target sized to {width}x{height}");
                self.target = Some(target);
                self.redraw_all();
            }
            Err(err) => {
                log::warn!("Failed to allocate {width}x{height} render target: {err}");
                self.target = None;
            }
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        self.frame.shapes()
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn style(&self) -> &ActiveStyle {
        &self.style
    }

    pub fn hit_tolerance(&self) -> f64 {
        self.hit_tolerance
    }

    pub fn has_render_target(&self) -> bool {
        self.target.is_some()
    }

    /// Size of the render target, if one has been initialized.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.target.as_ref().map(|t| (t.width(), t.height()))
    }

    /// Raw pixel data of the render target, if one has been initialized.
    pub fn snapshot_pixels(&mut self) -> Option<Vec<u8>> {
        self.target.as_mut().and_then(RenderTarget::snapshot)
    }

    /// Writes the current render target to a PNG file.
    ///
    /// Returns `Ok(false)` when there is no render target to write.
    pub fn write_png(&self, path: &Path, background: Option<Color>) -> Result<bool, TargetError> {
        match &self.target {
            Some(target) => target.write_png(path, background).map(|()| true),
            None => Ok(false),
        }
    }
}
