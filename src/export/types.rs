//! Error types for image export and import.

use crate::draw::RenderError;
use thiserror::Error;

/// Errors that can occur while writing an exported image.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to render canvas: {0}")]
    Render(#[from] RenderError),

    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] cairo::IoError),

    #[error("Failed to save image: {0}")]
    SaveError(#[from] std::io::Error),

    #[error("Unsupported export format '{0}'")]
    UnsupportedFormat(String),

    #[error("Invalid filename template '{0}'")]
    InvalidTemplate(String),
}

/// Errors that can occur while loading a background image.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to read image: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to decode PNG: {0}")]
    Decode(#[from] cairo::IoError),

    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: i32, height: i32 },
}
