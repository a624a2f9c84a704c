//! The drawing surface: shapes, tool state, gesture controller and renderer in one place.

mod actions;
mod core;
mod pointer;
mod render;

pub use self::core::{Canvas, CanvasSettings};
