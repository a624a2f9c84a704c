//! Library exports for the pen drawing canvas.
//!
//! Exposes the canvas, its shape model and renderer, configuration, and image
//! import/export so that shells (the `pen` CLI, a GUI front end, tests) drive
//! the same code.

pub mod canvas;
pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod script;
pub mod util;

pub use canvas::Canvas;
pub use config::Config;
