//! Canvas state and the tool/settings entry points.

use crate::config::Config;
use crate::draw::{BackgroundImage, Color, FontDescriptor, LIGHT_GRAY, Shape, ShapeList, WHITE};
use crate::input::tool::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};
use crate::input::{DragState, GestureController, Tool, ToolState};
use crate::util::Point;
use log::debug;

/// Smallest font size accepted for text labels.
pub(super) const MIN_FONT_SIZE: f64 = 8.0;
/// Largest font size accepted for text labels.
pub(super) const MAX_FONT_SIZE: f64 = 72.0;

/// Appearance settings that do not change while drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasSettings {
    /// Color behind everything; also what the eraser paints
    pub background_color: Color,
    /// Grid pitch in pixels
    pub grid_spacing: u32,
    /// Grid line color
    pub grid_color: Color,
    /// Keep a placed text label when its edit is cancelled
    pub keep_text_on_cancel: bool,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            background_color: WHITE,
            grid_spacing: 20,
            grid_color: LIGHT_GRAY,
            keep_text_on_cancel: true,
        }
    }
}

impl CanvasSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            background_color: config.canvas.background_color.to_color_or(WHITE),
            grid_spacing: config.canvas.grid_spacing,
            grid_color: config.canvas.grid_color.to_color_or(LIGHT_GRAY),
            keep_text_on_cancel: config.drawing.keep_text_on_cancel,
        }
    }
}

/// Drawing surface state.
///
/// Owns the shape list, the tool state and the gesture controller. The shell
/// feeds pointer events and toolbar changes in, and calls [`Canvas::render`]
/// whenever `needs_redraw` is set.
pub struct Canvas {
    /// Committed shapes in paint order
    pub(super) shapes: ShapeList,
    /// Active tool, color, brush size and font
    pub(super) tools: ToolState,
    /// Drag gesture state machine
    pub(super) gesture: GestureController,
    /// Optional image drawn behind the grid and shapes
    pub(super) background_image: Option<BackgroundImage>,
    /// Background, grid and text settings
    pub(super) settings: CanvasSettings,
    /// Whether the grid overlay is drawn
    pub(super) show_grid: bool,
    /// Surface width in pixels
    pub(super) width: u32,
    /// Surface height in pixels
    pub(super) height: u32,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Last pointer position seen, used for the shape tool preview
    pub(super) last_pointer: Option<Point>,
}

impl Canvas {
    /// Creates an empty canvas of `width` x `height` pixels.
    pub fn new(width: u32, height: u32, tools: ToolState, settings: CanvasSettings) -> Self {
        Self {
            shapes: ShapeList::new(),
            tools,
            gesture: GestureController::new(),
            background_image: None,
            settings,
            show_grid: false,
            width,
            height,
            needs_redraw: true,
            last_pointer: None,
        }
    }

    /// Creates an empty canvas using the startup values from `config`.
    pub fn from_config(config: &Config) -> Self {
        let drawing = &config.drawing;
        let mut tools = ToolState::new(
            drawing.default_tool,
            drawing.default_color.to_color(),
            drawing.default_brush_size,
        );
        tools.font = FontDescriptor::with_family(&drawing.font_family);
        tools.font_size = drawing.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);

        let mut canvas = Self::new(
            config.canvas.width,
            config.canvas.height,
            tools,
            CanvasSettings::from_config(config),
        );
        canvas.show_grid = config.canvas.show_grid;
        canvas
    }

    pub fn shapes(&self) -> &ShapeList {
        &self.shapes
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn settings(&self) -> &CanvasSettings {
        &self.settings
    }

    /// Current gesture state (idle, dragging, selecting, editing text).
    pub fn gesture_state(&self) -> &DragState {
        self.gesture.state()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    pub fn has_background_image(&self) -> bool {
        self.background_image.is_some()
    }

    /// Shape a shape tool would commit at the last pointer position.
    pub fn provisional_shape(&self) -> Option<Shape> {
        let pos = self.last_pointer?;
        self.gesture.provisional_shape(pos, &self.tools)
    }

    /// Switches the active tool.
    ///
    /// A gesture in progress is abandoned without committing anything. An open
    /// text edit is treated as cancelled.
    pub fn set_active_tool(&mut self, tool: Tool) {
        if self.gesture.editing_text().is_some() {
            self.cancel_text_edit();
        } else if *self.gesture.state() != DragState::Idle {
            self.gesture.cancel();
            self.needs_redraw = true;
        }

        if self.tools.tool != tool {
            debug!("Tool changed: {} -> {}", self.tools.tool, tool);
            self.tools.tool = tool;
        }
    }

    /// Sets the color used by shapes created from now on.
    pub fn set_active_color(&mut self, color: Color) {
        self.tools.color = color;
        if self.provisional_shape().is_some() {
            self.needs_redraw = true;
        }
    }

    /// Sets the brush size, clamped to the 1-50 range.
    pub fn set_brush_size(&mut self, size: u32) {
        let clamped = size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
        if clamped != size {
            debug!("Brush size {size} clamped to {clamped}");
        }
        self.tools.brush_size = clamped;
        if self.provisional_shape().is_some() {
            self.needs_redraw = true;
        }
    }

    /// Sets the font family and size used by new text labels.
    pub fn set_font(&mut self, family: &str, size: f64) {
        if !family.trim().is_empty() {
            self.tools.font.family = family.to_string();
        }
        if size.is_finite() {
            self.tools.font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        }
        debug!(
            "Text font set to {}",
            self.tools.font.to_pango_string(self.tools.font_size)
        );
    }

    /// Turns the grid overlay on or off.
    pub fn set_show_grid(&mut self, show: bool) {
        if self.show_grid != show {
            self.show_grid = show;
            self.needs_redraw = true;
        }
    }

    /// Replaces the image drawn behind the grid and shapes.
    pub fn set_background_image(&mut self, image: BackgroundImage) {
        debug!(
            "Background image set ({}x{})",
            image.width(),
            image.height()
        );
        self.background_image = Some(image);
        self.needs_redraw = true;
    }

    /// Changes the surface size. Shapes keep their coordinates.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.width != width || self.height != height {
            debug!(
                "Canvas resized: {}x{} -> {}x{}",
                self.width, self.height, width, height
            );
            self.width = width;
            self.height = height;
        }
        self.needs_redraw = true;
    }
}
