//! Drawing tool selection and the shared tool state.

use crate::draw::{Color, FontDescriptor, Shape, ShapeKind, font::DEFAULT_FONT_SIZE};
use crate::draw::shape::{DEFAULT_LABEL_TEXT, MAX_STROKE_WIDTH};
use crate::util::Point;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Smallest brush size the size control allows.
pub const MIN_BRUSH_SIZE: u32 = 1;

/// Largest brush size the size control allows.
pub const MAX_BRUSH_SIZE: u32 = MAX_STROKE_WIDTH;

/// Drawing tool selection.
///
/// The active tool determines what a drag on the canvas produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    /// Freehand pen using the brush size
    Pen,
    /// Freehand pen fixed at 1px
    ThinPen,
    /// Freehand pen fixed at 8px
    ThickPen,
    /// Freehand pen with a dash pattern
    DashedPen,
    /// Scatters dots along the drag path
    Spray,
    /// Translucent boxes along the drag path
    Highlighter,
    /// Background-colored squares along the drag path
    Eraser,
    /// Straight line from press to release
    Line,
    /// Rectangle outline from press to release
    Rectangle,
    /// Circle fitted to the press/release box
    Circle,
    /// Picks up and moves an existing shape
    Selector,
    /// Places a text label and opens the text editor
    Text,
}

/// How a tool reacts to a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolCategory {
    /// Commits a new segment on every pointer move
    Continuous,
    /// Commits one shape on release
    Shape,
    /// Moves the shape under the pointer
    Selector,
    /// Places a label on press
    Text,
}

impl Tool {
    /// Every tool, in toolbar order.
    pub const ALL: [Tool; 12] = [
        Tool::Pen,
        Tool::ThinPen,
        Tool::ThickPen,
        Tool::DashedPen,
        Tool::Spray,
        Tool::Highlighter,
        Tool::Eraser,
        Tool::Line,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Selector,
        Tool::Text,
    ];

    pub fn category(self) -> ToolCategory {
        match self {
            Tool::Pen
            | Tool::ThinPen
            | Tool::ThickPen
            | Tool::DashedPen
            | Tool::Spray
            | Tool::Highlighter
            | Tool::Eraser => ToolCategory::Continuous,
            Tool::Line | Tool::Rectangle | Tool::Circle => ToolCategory::Shape,
            Tool::Selector => ToolCategory::Selector,
            Tool::Text => ToolCategory::Text,
        }
    }

    /// The shape kind this tool draws on a drag, if it draws one.
    ///
    /// Spray kinds get a fresh seed on every call.
    pub fn shape_kind(self) -> Option<ShapeKind> {
        let kind = match self {
            Tool::Pen => ShapeKind::Freehand,
            Tool::ThinPen => ShapeKind::ThinStroke,
            Tool::ThickPen => ShapeKind::ThickStroke,
            Tool::DashedPen => ShapeKind::DashedStroke,
            Tool::Spray => ShapeKind::spray(),
            Tool::Highlighter => ShapeKind::Highlighter,
            Tool::Eraser => ShapeKind::Eraser,
            Tool::Line => ShapeKind::Line,
            Tool::Rectangle => ShapeKind::Rectangle,
            Tool::Circle => ShapeKind::Circle,
            Tool::Selector | Tool::Text => return None,
        };
        Some(kind)
    }

    /// Display name, as shown on toolbar buttons.
    pub fn label(self) -> &'static str {
        match self {
            Tool::Pen => "Pen",
            Tool::ThinPen => "Thin Pen",
            Tool::ThickPen => "Thick Pen",
            Tool::DashedPen => "Dashed Pen",
            Tool::Spray => "Spray",
            Tool::Highlighter => "Highlighter",
            Tool::Eraser => "Eraser",
            Tool::Line => "Line",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
            Tool::Selector => "Selector",
            Tool::Text => "Text",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown tool name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tool '{0}'")]
pub struct UnknownTool(pub String);

impl FromStr for Tool {
    type Err = UnknownTool;

    /// Accepts toolbar labels and kebab-case names, ignoring case ("Thin Pen", "thin-pen").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', '_'], " ");
        Tool::ALL
            .into_iter()
            .find(|tool| tool.label().to_lowercase() == wanted)
            .ok_or_else(|| UnknownTool(s.to_string()))
    }
}

/// Tool, color, brush and font settings consulted by the gesture controller.
///
/// The toolbar and menus write these through the canvas entry points; the
/// controller only reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    /// Active tool
    pub tool: Tool,
    /// Color of new shapes
    pub color: Color,
    /// Brush size in pixels (1-50)
    pub brush_size: u32,
    /// Font for new text labels
    pub font: FontDescriptor,
    /// Font size for new text labels
    pub font_size: f64,
}

impl ToolState {
    pub fn new(tool: Tool, color: Color, brush_size: u32) -> Self {
        Self {
            tool,
            color,
            brush_size: brush_size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE),
            font: FontDescriptor::default(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }

    /// Builds the shape `tool` draws between two points in the current color and
    /// brush size.
    ///
    /// A gesture passes the tool it started with, which may differ from
    /// `self.tool`. Returns `None` for the selector and text tools.
    pub fn make_shape(&self, tool: Tool, start: Point, end: Point) -> Option<Shape> {
        tool.shape_kind().map(|kind| Shape::new(kind, start, end, self.color, self.brush_size))
    }

    /// Builds a default-text label at `anchor` in the current color and font.
    pub fn make_label(&self, anchor: Point) -> Shape {
        Shape::text(
            anchor,
            DEFAULT_LABEL_TEXT,
            self.font.clone(),
            self.font_size,
            self.color,
        )
    }
}
