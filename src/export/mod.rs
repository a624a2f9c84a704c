//! Reading and writing canvas images.
//!
//! This module provides:
//! - PNG export of rendered canvas pixels, to a timestamped file or an explicit path
//! - PNG import of background images

pub mod file;
pub mod import;
pub mod types;

pub use file::{FileSaveConfig, save_png, save_png_to};
pub use import::load_background;
pub use types::{ExportError, ImportError};
