use crate::draw::render::{render_background, render_background_image, render_grid};
use crate::draw::{PixelBuffer, RenderError, render_shape, render_shapes};
use cairo::{Format, ImageSurface};
use log::debug;

use super::Canvas;

impl Canvas {
    /// Paints the committed canvas onto `ctx`.
    ///
    /// Layers, bottom to top: background color, background image stretched to
    /// the surface, grid, then committed shapes. The result depends only on
    /// canvas content, never on a gesture in progress.
    pub fn render(&self, ctx: &cairo::Context) {
        let (width, height) = (self.width as i32, self.height as i32);
        let background = self.settings.background_color;

        render_background(ctx, background);

        if let Some(image) = &self.background_image {
            render_background_image(ctx, image, width, height);
        }

        if self.show_grid {
            render_grid(
                ctx,
                self.settings.grid_spacing,
                self.settings.grid_color,
                width,
                height,
            );
        }

        render_shapes(ctx, &self.shapes, background);
    }

    /// Paints the shape tool preview, if a drag is in progress, on top of
    /// whatever `ctx` already holds.
    ///
    /// Shells call this after [`Canvas::render`] for on-screen frames. Returns
    /// whether anything was drawn.
    pub fn render_preview(&self, ctx: &cairo::Context) -> bool {
        match self.provisional_shape() {
            Some(preview) => {
                render_shape(ctx, &preview, self.settings.background_color);
                true
            }
            None => false,
        }
    }

    /// Renders the canvas into an off-screen surface of the current size.
    ///
    /// Uses the same routine as [`Canvas::render`], so the result matches the
    /// on-screen frame minus any preview overlay.
    pub fn export_surface(&self) -> Result<PixelBuffer, RenderError> {
        let invalid = || RenderError::InvalidSize {
            width: self.width as i32,
            height: self.height as i32,
        };
        let width = i32::try_from(self.width).map_err(|_| invalid())?;
        let height = i32::try_from(self.height).map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)?;
        {
            let ctx = cairo::Context::new(&surface)?;
            self.render(&ctx);
        }

        debug!(
            "Exported {}x{} canvas with {} shapes",
            width,
            height,
            self.shapes.len()
        );
        PixelBuffer::from_surface(surface)
    }
}
