//! Rendering primitives and shape definitions (Cairo-based).
//!
//! This module defines the core drawing types of the canvas:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Shape`]: one committed primitive (stroke segment, box, circle, text, ...)
//! - [`ShapeList`]: all shapes in paint order, with undo
//! - [`PixelBuffer`] / [`BackgroundImage`]: raster data going out of and into the canvas
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod font;
pub mod pixels;
pub mod render;
pub mod shape;
pub mod shape_list;

// Re-export commonly used types at module level
pub use color::Color;
pub use font::FontDescriptor;
pub use pixels::{BackgroundImage, PixelBuffer};
pub use render::{RenderError, render_shape, render_shapes};
pub use shape::{Shape, ShapeKind};
pub use shape_list::ShapeList;

pub use color::{BLACK, BLUE, GREEN, LIGHT_GRAY, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
