//! Utility functions for colors and geometry.
//!
//! This module provides:
//! - Integer points and axis-aligned rectangles used for hit testing
//! - Color name mapping for configuration and log output

use crate::draw::{Color, color::*};

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Integer canvas position in pixels.
///
/// Points are plain values: copying one into a shape never aliases the pointer
/// position it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this point shifted by `(dx, dy)`, wrapping at the `i32` range.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle helper used for hit testing and shape geometry.
///
/// Sizes are unsigned so a box spanning the whole `i32` range still fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        let width = u32::try_from(i64::from(max_x) - i64::from(min_x)).ok()?;
        let height = u32::try_from(i64::from(max_y) - i64::from(min_y)).ok()?;
        Self::new(min_x, min_y, width, height)
    }

    /// Builds the normalized rectangle spanned by two opposite corners.
    pub fn from_corners(a: Point, b: Point) -> Option<Self> {
        Self::from_min_max(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    /// Returns true if `p` lies inside the half-open area `[x, x+w) × [y, y+h)`.
    pub fn contains(&self, p: Point) -> bool {
        let (px, py) = (i64::from(p.x), i64::from(p.y));
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        px >= x && px < x + i64::from(self.width) && py >= y && py < y + i64::from(self.height)
    }
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system and gesture scripts to parse color names.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black", "gray"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "gray" | "grey" => Some(LIGHT_GRAY),
        _ => None,
    }
}

/// Maps a Color value to its human-readable name.
///
/// Uses approximate matching (threshold-based) to identify colors.
/// Returns "Custom" if the color doesn't match any predefined color.
pub fn color_to_name(color: &Color) -> &'static str {
    if color.r > 0.9 && color.g < 0.1 && color.b < 0.1 {
        "Red"
    } else if color.r < 0.1 && color.g > 0.9 && color.b < 0.1 {
        "Green"
    } else if color.r < 0.1 && color.g < 0.1 && color.b > 0.9 {
        "Blue"
    } else if color.r > 0.9 && color.g > 0.9 && color.b < 0.1 {
        "Yellow"
    } else if color.r > 0.9 && (0.4..=0.6).contains(&color.g) && color.b < 0.1 {
        "Orange"
    } else if color.r > 0.9 && color.g < 0.1 && color.b > 0.9 {
        "Pink"
    } else if color.r > 0.9 && color.g > 0.9 && color.b > 0.9 {
        "White"
    } else if color.r < 0.1 && color.g < 0.1 && color.b < 0.1 {
        "Black"
    } else {
        "Custom"
    }
}
