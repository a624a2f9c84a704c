//! Shape definitions for the drawing canvas.

use super::color::Color;
use super::font::FontDescriptor;
use crate::util::{Point, Rect};

/// Line width used by the thin pen regardless of brush size.
pub const THIN_STROKE_WIDTH: f64 = 1.0;

/// Line width used by the thick pen regardless of brush size.
pub const THICK_STROKE_WIDTH: f64 = 8.0;

/// Largest stroke width a shape keeps; wider requests are clamped.
pub const MAX_STROKE_WIDTH: u32 = 50;

/// Alpha applied to every highlighter shape (150/255).
pub const HIGHLIGHTER_ALPHA: f64 = 150.0 / 255.0;

/// Number of dots scattered by one spray dab.
pub const SPRAY_DOT_COUNT: usize = 20;

/// Dash pattern of the dashed pen, in pixels (on, off).
pub const DASH_PATTERN: [f64; 2] = [4.0, 4.0];

/// Text shown by a freshly placed label before it is edited.
pub const DEFAULT_LABEL_TEXT: &str = "Text";

/// What a shape draws. Each variant maps to one drawing tool.
///
/// Only variants that need data beyond the anchors, color and width carry fields.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeKind {
    /// One segment of a freehand stroke
    Freehand,
    /// One segment of a 1px stroke
    ThinStroke,
    /// One segment of an 8px stroke
    ThickStroke,
    /// One segment of a dashed stroke
    DashedStroke,
    /// Dots scattered around the start anchor
    SprayDab {
        /// Seed for the dot pattern, fixed at creation so repaints match
        seed: u64,
    },
    /// Translucent filled box between the anchors
    Highlighter,
    /// Background-colored square at the start anchor
    Eraser,
    /// Straight line between the anchors
    Line,
    /// Rectangle outline between the anchors
    Rectangle,
    /// Circle inscribed in the square spanned from the min corner
    Circle,
    /// Text label with its baseline at the start anchor
    Text {
        /// Label content
        text: String,
        /// Font family, weight and style
        font: FontDescriptor,
        /// Font size in points
        font_size: f64,
    },
}

impl ShapeKind {
    /// Creates a spray dab kind with a fresh random seed.
    pub fn spray() -> Self {
        ShapeKind::SprayDab {
            seed: rand::random(),
        }
    }

    /// Short human-readable name, used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Freehand => "freehand",
            ShapeKind::ThinStroke => "thin stroke",
            ShapeKind::ThickStroke => "thick stroke",
            ShapeKind::DashedStroke => "dashed stroke",
            ShapeKind::SprayDab { .. } => "spray dab",
            ShapeKind::Highlighter => "highlighter",
            ShapeKind::Eraser => "eraser",
            ShapeKind::Line => "line",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Text { .. } => "text",
        }
    }
}

/// A drawable shape on the canvas.
///
/// The kind is fixed at construction; anchors, color and text content stay
/// mutable so the selector and the text editor can update a committed shape.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    /// What this shape draws
    pub kind: ShapeKind,
    /// First anchor (segment start, box corner, or text baseline origin)
    pub start: Point,
    /// Second anchor (segment end or opposite box corner; unused by text)
    pub end: Point,
    /// Fill or stroke color
    pub color: Color,
    /// Brush size in pixels, at least 1
    pub stroke_width: u32,
}

impl Shape {
    /// Creates a shape. Highlighter alpha is forced to [`HIGHLIGHTER_ALPHA`] and the
    /// stroke width is clamped to `1..=MAX_STROKE_WIDTH`.
    pub fn new(kind: ShapeKind, start: Point, end: Point, color: Color, stroke_width: u32) -> Self {
        let color = match kind {
            ShapeKind::Highlighter => color.with_alpha(HIGHLIGHTER_ALPHA),
            _ => color,
        };
        Self {
            kind,
            start,
            end,
            color,
            stroke_width: stroke_width.clamp(1, MAX_STROKE_WIDTH),
        }
    }

    /// Creates a zero-size text label anchored at `anchor`.
    pub fn text(
        anchor: Point,
        text: impl Into<String>,
        font: FontDescriptor,
        font_size: f64,
        color: Color,
    ) -> Self {
        Self::new(
            ShapeKind::Text {
                text: text.into(),
                font,
                font_size,
            },
            anchor,
            anchor,
            color,
            1,
        )
    }

    /// Returns the normalized box spanned by the anchors, or `None` if it has no area.
    pub fn bounds(&self) -> Option<Rect> {
        Rect::from_corners(self.start, self.end)
    }

    /// Returns true if `p` falls inside the anchor box.
    ///
    /// This is a bounding-box test for every kind: a circle's corners count as hits
    /// and a shape with zero width or height is never hit.
    pub fn contains_point(&self, p: Point) -> bool {
        self.bounds().is_some_and(|rect| rect.contains(p))
    }

    /// Shifts both anchors by the same delta.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.start = self.start.offset(dx, dy);
        self.end = self.end.offset(dx, dy);
    }

    /// Draws this shape. `background` is the canvas color painted by the eraser.
    pub fn render(&self, ctx: &cairo::Context, background: Color) {
        super::render::render_shape(ctx, self, background);
    }

    /// Width the stroke is drawn with, after per-kind overrides.
    pub fn effective_line_width(&self) -> f64 {
        match self.kind {
            ShapeKind::ThinStroke => THIN_STROKE_WIDTH,
            ShapeKind::ThickStroke => THICK_STROKE_WIDTH,
            _ => self.stroke_width as f64,
        }
    }

    /// Returns true for text labels.
    pub fn is_text(&self) -> bool {
        matches!(self.kind, ShapeKind::Text { .. })
    }
}
