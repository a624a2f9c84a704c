//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the tool state when the canvas first opens. Users change these at
/// runtime through the toolbar.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default color - either a named color (red, green, blue, yellow, orange, pink,
    /// white, black, gray) or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Tool selected at startup (pen, thin-pen, thick-pen, dashed-pen, spray,
    /// highlighter, eraser, line, rectangle, circle, selector, text)
    #[serde(default = "default_tool")]
    pub default_tool: Tool,

    /// Brush size in pixels (valid range: 1 - 50)
    #[serde(default = "default_brush_size")]
    pub default_brush_size: u32,

    /// Font family for new text labels (e.g., "Sans", "Monospace", "DejaVu Serif")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font size for new text labels in points (valid range: 8.0 - 72.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,

    /// Keep a freshly placed text label when its edit dialog is cancelled
    #[serde(default = "default_keep_text_on_cancel")]
    pub keep_text_on_cancel: bool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_tool: default_tool(),
            default_brush_size: default_brush_size(),
            font_family: default_font_family(),
            font_size: default_font_size(),
            keep_text_on_cancel: default_keep_text_on_cancel(),
        }
    }
}

/// Canvas surface settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Surface width in pixels (valid range: 1 - 16384)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Surface height in pixels (valid range: 1 - 16384)
    #[serde(default = "default_height")]
    pub height: u32,

    /// Color behind everything; also the color the eraser paints
    #[serde(default = "default_background_color")]
    pub background_color: ColorSpec,

    /// Show the grid overlay at startup
    #[serde(default)]
    pub show_grid: bool,

    /// Grid pitch in pixels (valid range: 4 - 200)
    #[serde(default = "default_grid_spacing")]
    pub grid_spacing: u32,

    /// Grid line color
    #[serde(default = "default_grid_color")]
    pub grid_color: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background_color: default_background_color(),
            show_grid: false,
            grid_spacing: default_grid_spacing(),
            grid_color: default_grid_color(),
        }
    }
}

/// Image export settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory exported images are written to (`~` is expanded)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// File name template using chrono format specifiers
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// Image format extension (only "png" is supported)
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
            format: default_format(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_tool() -> Tool {
    Tool::Pen
}

fn default_brush_size() -> u32 {
    4
}

fn default_font_family() -> String {
    crate::draw::font::DEFAULT_FONT_FAMILY.to_string()
}

fn default_font_size() -> f64 {
    crate::draw::font::DEFAULT_FONT_SIZE
}

fn default_keep_text_on_cancel() -> bool {
    true
}

fn default_width() -> u32 {
    1300
}

fn default_height() -> u32 {
    900
}

fn default_background_color() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_grid_spacing() -> u32 {
    20
}

fn default_grid_color() -> ColorSpec {
    ColorSpec::Rgb([192, 192, 192])
}

pub(super) fn default_save_directory() -> String {
    "~/Pictures/Pen".to_string()
}

pub(super) fn default_filename_template() -> String {
    "pen_%Y-%m-%d_%H%M%S".to_string()
}

pub(super) fn default_format() -> String {
    "png".to_string()
}
