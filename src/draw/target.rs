//! Offscreen render target backing the drawing surface.

use super::color::Color;
use super::render;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

/// Failures when exporting the render target.
#[derive(Debug, Error)]
pub enum TargetError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),
}

/// ARGB32 image surface that shapes are rasterized onto.
///
/// No Cairo context is kept alive between draws, so the pixel buffer can be
/// borrowed exclusively for snapshots.
pub struct RenderTarget {
    surface: cairo::ImageSurface,
    width: u32,
    height: u32,
}

impl RenderTarget {
    /// Allocates a transparent target of the given pixel size.
    pub fn create(width: u32, height: u32) -> Result<Self, cairo::Error> {
        let w = i32::try_from(width).map_err(|_| cairo::Error::InvalidSize)?;
        let h = i32::try_from(height).map_err(|_| cairo::Error::InvalidSize)?;
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, w, h)?;
        Ok(Self {
            surface,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Creates a drawing context for one redraw pass.
    pub fn context(&self) -> Result<cairo::Context, cairo::Error> {
        cairo::Context::new(&self.surface)
    }

    /// Erases every pixel.
    pub fn clear(&self) {
        match self.context() {
            Ok(ctx) => render::clear(&ctx),
            Err(err) => log::warn!("Could not clear render target: {err}"),
        }
    }

    /// Copies the raw ARGB32 pixel data (premultiplied, native endian).
    pub fn snapshot(&mut self) -> Option<Vec<u8>> {
        self.surface.flush();
        match self.surface.data() {
            Ok(data) => Some(data.to_vec()),
            Err(err) => {
                log::warn!("Could not borrow render target pixels: {err}");
                None
            }
        }
    }

    /// Writes the target to a PNG file, composited over `background` when given.
    pub fn write_png(&self, path: &Path, background: Option<Color>) -> Result<(), TargetError> {
        let mut file = File::create(path)?;

        match background {
            None => self.surface.write_to_png(&mut file)?,
            Some(color) => {
                let flattened = cairo::ImageSurface::create(
                    cairo::Format::ARgb32,
                    self.surface.width(),
                    self.surface.height(),
                )?;
                {
                    let ctx = cairo::Context::new(&flattened)?;
                    render::fill_background(&ctx, color);
                    ctx.set_source_surface(&self.surface, 0.0, 0.0)?;
                    ctx.paint()?;
                }
                flattened.write_to_png(&mut file)?;
            }
        }

        log::info!("Wrote {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}
