//! Configuration file support for pen.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/pen/config.toml`. Settings include tool defaults, canvas size
//! and colors, grid appearance, and where exported images are written.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, ExportConfig};

use crate::input::tool::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};
use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest canvas edge accepted from the config file.
const MAX_CANVAS_EDGE: u32 = 16_384;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "black"
/// default_tool = "pen"
/// default_brush_size = 4
/// font_family = "Sans"
/// font_size = 16.0
///
/// [canvas]
/// width = 1300
/// height = 900
/// show_grid = false
/// grid_spacing = 20
///
/// [export]
/// save_directory = "~/Pictures/Pen"
/// filename_template = "pen_%Y-%m-%d_%H%M%S"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Tool defaults (tool, color, brush size, text font)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Canvas size, background and grid
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Image export destination
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced by the
    /// default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_brush_size`: 1 - 50
    /// - `font_size`: 8.0 - 72.0
    /// - `width` / `height`: 1 - 16384
    /// - `grid_spacing`: 4 - 200
    pub fn validate_and_clamp(&mut self) {
        if !(MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE).contains(&self.drawing.default_brush_size) {
            log::warn!(
                "Invalid default_brush_size {}, clamping to {}-{} range",
                self.drawing.default_brush_size,
                MIN_BRUSH_SIZE,
                MAX_BRUSH_SIZE
            );
            self.drawing.default_brush_size = self
                .drawing
                .default_brush_size
                .clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
        }

        if !(8.0..=72.0).contains(&self.drawing.font_size) {
            log::warn!(
                "Invalid font_size {:.1}, clamping to 8.0-72.0 range",
                self.drawing.font_size
            );
            self.drawing.font_size = if self.drawing.font_size.is_nan() {
                crate::draw::font::DEFAULT_FONT_SIZE
            } else {
                self.drawing.font_size.clamp(8.0, 72.0)
            };
        }

        if self.drawing.font_family.trim().is_empty() {
            log::warn!("Empty font_family, falling back to 'Sans'");
            self.drawing.font_family = crate::draw::font::DEFAULT_FONT_FAMILY.to_string();
        }

        if !(1..=MAX_CANVAS_EDGE).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 1-{} range",
                self.canvas.width,
                MAX_CANVAS_EDGE
            );
            self.canvas.width = self.canvas.width.clamp(1, MAX_CANVAS_EDGE);
        }

        if !(1..=MAX_CANVAS_EDGE).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 1-{} range",
                self.canvas.height,
                MAX_CANVAS_EDGE
            );
            self.canvas.height = self.canvas.height.clamp(1, MAX_CANVAS_EDGE);
        }

        if !(4..=200).contains(&self.canvas.grid_spacing) {
            log::warn!(
                "Invalid grid_spacing {}, clamping to 4-200 range",
                self.canvas.grid_spacing
            );
            self.canvas.grid_spacing = self.canvas.grid_spacing.clamp(4, 200);
        }

        if !self.export.format.eq_ignore_ascii_case("png") {
            log::warn!(
                "Unsupported export format '{}', falling back to 'png'",
                self.export.format
            );
            self.export.format = types::default_format();
        }

        if self.export.filename_template.trim().is_empty() {
            log::warn!("Empty filename_template, using default");
            self.export.filename_template = types::default_filename_template();
        } else if StrftimeItems::new(&self.export.filename_template)
            .any(|item| matches!(item, Item::Error))
        {
            log::warn!(
                "Invalid filename_template '{}', using default",
                self.export.filename_template
            );
            self.export.filename_template = types::default_filename_template();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/pen/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("pen");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if it does not exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses configuration from TOML text without validation.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Saves the current configuration to the default path.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    /// Serializes the config to TOML and writes it to `config_path`.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Returns the JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, WHITE};
    use crate::input::Tool;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.drawing.default_brush_size, 4);
        assert_eq!(config.drawing.default_tool, Tool::Pen);
        assert_eq!(config.drawing.default_color.to_color(), BLACK);
        assert_eq!(config.canvas.background_color.to_color(), WHITE);
        assert_eq!(config.canvas.grid_spacing, 20);
        assert!(config.drawing.keep_text_on_cancel);
    }

    #[test]
    fn partial_sections_merge_with_defaults() {
        let config = Config::from_toml(
            r#"
            [drawing]
            default_tool = "dashed-pen"
            default_color = [0, 0, 255]

            [canvas]
            show_grid = true
            "#,
        )
        .unwrap();

        assert_eq!(config.drawing.default_tool, Tool::DashedPen);
        assert_eq!(config.drawing.default_color, ColorSpec::Rgb([0, 0, 255]));
        assert_eq!(config.drawing.font_family, "Sans");
        assert!(config.canvas.show_grid);
        assert_eq!(config.canvas.width, 1300);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::from_toml(
            r#"
            [drawing]
            default_brush_size = 500
            font_size = 2.0

            [canvas]
            width = 0
            grid_spacing = 1

            [export]
            format = "bmp"
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.drawing.default_brush_size, 50);
        assert_eq!(config.drawing.font_size, 8.0);
        assert_eq!(config.canvas.width, 1);
        assert_eq!(config.canvas.grid_spacing, 4);
        assert_eq!(config.export.format, "png");
    }

    #[test]
    fn bad_filename_template_falls_back_to_default() {
        let mut config = Config::from_toml("[export]\nfilename_template = \"pen_%Q\"").unwrap();
        config.validate_and_clamp();
        assert_eq!(
            config.export.filename_template,
            types::default_filename_template()
        );

        let mut config =
            Config::from_toml("[export]\nfilename_template = \"pen_%Y%m%d\"").unwrap();
        config.validate_and_clamp();
        assert_eq!(config.export.filename_template, "pen_%Y%m%d");
    }

    #[test]
    fn unknown_tool_is_a_parse_error() {
        assert!(Config::from_toml("[drawing]\ndefault_tool = \"lasso\"").is_err());
    }

    #[test]
    fn save_and_load_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.canvas.width = 640;
        config.drawing.default_tool = Tool::Circle;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.canvas.width, 640);
        assert_eq!(loaded.drawing.default_tool, Tool::Circle);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.canvas.height, 900);
    }

    #[test]
    fn schema_mentions_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("drawing"));
        assert!(schema.contains("grid_spacing"));
    }
}
