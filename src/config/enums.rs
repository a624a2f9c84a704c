//! Configuration enum types.

use crate::draw::{Color, color::*};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "black"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, orange, pink, white, black, gray
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown color names fall back to `fallback` with a warning. RGB arrays are
    /// converted from 0-255 range to 0.0-1.0 range with full opacity.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using {}", name, crate::util::color_to_name(&fallback));
                fallback
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgba8(*r, *g, *b, 255),
        }
    }

    /// Converts the color specification, falling back to black for unknown names.
    pub fn to_color(&self) -> Color {
        self.to_color_or(BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_resolve() {
        assert_eq!(ColorSpec::Name("Red".into()).to_color(), RED);
        assert_eq!(ColorSpec::Name("mauve".into()).to_color_or(WHITE), WHITE);
    }

    #[test]
    fn rgb_colors_are_opaque() {
        let color = ColorSpec::Rgb([0, 255, 0]).to_color();
        assert_eq!(color, GREEN);
    }
}
