//! Owned raster buffers and decoded background images.

use super::render::RenderError;
use cairo::{Format, ImageSurface};

/// Rasterized canvas contents in Cairo's ARGB32 layout.
///
/// Each pixel is a native-endian `u32` holding premultiplied alpha in the high
/// byte followed by red, green and blue. Rows are `stride` bytes apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: i32,
    pub height: i32,
    pub stride: i32,
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// Copies the pixels out of an image surface.
    ///
    /// The surface must not be borrowed by a live `cairo::Context`.
    pub fn from_surface(mut surface: ImageSurface) -> Result<Self, RenderError> {
        surface.flush();
        let width = surface.width();
        let height = surface.height();
        let stride = surface.stride();
        let data = surface.data()?.to_vec();
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    /// Builds a new image surface holding a copy of these pixels.
    pub fn to_surface(&self) -> Result<ImageSurface, RenderError> {
        let surface = ImageSurface::create_for_data(
            self.data.clone(),
            Format::ARgb32,
            self.width,
            self.height,
            self.stride,
        )?;
        Ok(surface)
    }

    /// Returns the raw ARGB32 value at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y * self.stride + x * 4) as usize;
        let bytes: [u8; 4] = self.data.get(offset..offset + 4)?.try_into().ok()?;
        Some(u32::from_ne_bytes(bytes))
    }

    /// Returns the `(a, r, g, b)` channels at `(x, y)` (premultiplied).
    pub fn argb(&self, x: i32, y: i32) -> Option<(u8, u8, u8, u8)> {
        self.pixel(x, y).map(|px| {
            (
                (px >> 24) as u8,
                (px >> 16) as u8,
                (px >> 8) as u8,
                px as u8,
            )
        })
    }

    /// Returns true when every pixel equals `(a, r, g, b)`.
    pub fn is_uniform(&self, argb: (u8, u8, u8, u8)) -> bool {
        (0..self.height).all(|y| (0..self.width).all(|x| self.argb(x, y) == Some(argb)))
    }
}

/// Decoded image drawn stretched behind all shapes.
#[derive(Debug, Clone)]
pub struct BackgroundImage {
    surface: ImageSurface,
}

impl BackgroundImage {
    /// Wraps an already decoded surface.
    pub fn new(surface: ImageSurface) -> Self {
        Self { surface }
    }

    /// Creates a background image from raw pixels.
    pub fn from_pixels(buffer: &PixelBuffer) -> Result<Self, RenderError> {
        Ok(Self::new(buffer.to_surface()?))
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }
}
