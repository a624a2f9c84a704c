//! Drag gesture state machine.
//!
//! Turns pointer down/drag/up sequences into shape-list mutations:
//! - continuous tools (pens, spray, highlighter, eraser) commit one segment per move
//! - shape tools (line, rectangle, circle) commit a single shape on release
//! - the selector moves the topmost shape under the pointer
//! - the text tool places a label and waits for the text editor

use super::tool::{Tool, ToolCategory, ToolState};
use crate::draw::{Shape, ShapeList};
use crate::util::Point;
use log::debug;

/// Current gesture state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    /// No gesture in progress
    #[default]
    Idle,
    /// Pointer held with a drawing tool
    Dragging {
        /// Tool that started the gesture
        tool: Tool,
        /// Origin of the next segment (continuous tools) or of the whole shape
        start: Point,
    },
    /// Pointer held on a shape picked up by the selector
    Selecting {
        /// Index of the picked shape in the shape list
        index: usize,
        /// Pointer position the next move is measured from
        anchor: Point,
    },
    /// A text label was placed and is waiting for its edit to finish
    EditingText {
        /// Index of the label in the shape list
        index: usize,
    },
}

/// Interprets pointer events against a [`ShapeList`] using the active [`ToolState`].
///
/// Every handler returns `true` when the canvas needs a repaint.
#[derive(Debug, Default)]
pub struct GestureController {
    state: DragState,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Starts a gesture at `pos`.
    pub fn on_pointer_down(&mut self, pos: Point, tools: &ToolState, shapes: &mut ShapeList) -> bool {
        match self.state {
            DragState::EditingText { .. } => {
                debug!("Ignoring pointer down while a text edit is open");
                return false;
            }
            DragState::Dragging { .. } | DragState::Selecting { .. } => {
                debug!("Pointer down without release; abandoning previous gesture");
                self.state = DragState::Idle;
            }
            DragState::Idle => {}
        }

        match tools.tool.category() {
            ToolCategory::Selector => match shapes.hit_test(pos) {
                Some(index) => {
                    debug!("Selected shape {index} at ({}, {})", pos.x, pos.y);
                    self.state = DragState::Selecting { index, anchor: pos };
                    false
                }
                None => {
                    debug!("Selector missed at ({}, {})", pos.x, pos.y);
                    false
                }
            },
            ToolCategory::Text => {
                let index = shapes.push(tools.make_label(pos));
                self.state = DragState::EditingText { index };
                true
            }
            ToolCategory::Continuous | ToolCategory::Shape => {
                self.state = DragState::Dragging {
                    tool: tools.tool,
                    start: pos,
                };
                false
            }
        }
    }

    /// Continues the gesture with the pointer at `pos`.
    pub fn on_pointer_drag(&mut self, pos: Point, tools: &ToolState, shapes: &mut ShapeList) -> bool {
        match &mut self.state {
            DragState::Dragging { tool, start } => match tool.category() {
                ToolCategory::Continuous => {
                    if let Some(segment) = tools.make_shape(*tool, *start, pos) {
                        shapes.push(segment);
                    }
                    *start = pos;
                    true
                }
                // Only the provisional preview changes
                _ => true,
            },
            DragState::Selecting { index, anchor } => {
                let (dx, dy) = (pos.x.wrapping_sub(anchor.x), pos.y.wrapping_sub(anchor.y));
                *anchor = pos;
                match shapes.get_mut(*index) {
                    Some(shape) => {
                        shape.translate(dx, dy);
                        true
                    }
                    None => {
                        debug!("Selected shape {index} no longer exists");
                        self.state = DragState::Idle;
                        false
                    }
                }
            }
            DragState::Idle | DragState::EditingText { .. } => false,
        }
    }

    /// Ends the gesture with the pointer released at `pos`.
    pub fn on_pointer_up(&mut self, pos: Point, tools: &ToolState, shapes: &mut ShapeList) -> bool {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { tool, start } => {
                if tool.category() != ToolCategory::Shape {
                    // Continuous chains end here; moves already committed every segment
                    return false;
                }
                match tools.make_shape(tool, start, pos) {
                    Some(shape) => {
                        debug!(
                            "Committed {} ({}, {}) -> ({}, {})",
                            shape.kind.name(),
                            start.x,
                            start.y,
                            pos.x,
                            pos.y
                        );
                        shapes.push(shape);
                        true
                    }
                    None => false,
                }
            }
            DragState::Selecting { .. } | DragState::Idle => false,
            editing @ DragState::EditingText { .. } => {
                // Release of the press that opened the editor
                self.state = editing;
                false
            }
        }
    }

    /// Returns the shape a shape tool would commit if released at `pos`.
    pub fn provisional_shape(&self, pos: Point, tools: &ToolState) -> Option<Shape> {
        match self.state {
            DragState::Dragging { tool, start } if tool.category() == ToolCategory::Shape => {
                tools.make_shape(tool, start, pos)
            }
            _ => None,
        }
    }

    /// Index of the label waiting for its text edit.
    pub fn editing_text(&self) -> Option<usize> {
        match self.state {
            DragState::EditingText { index } => Some(index),
            _ => None,
        }
    }

    /// Leaves text editing and returns the label index.
    pub fn finish_text_edit(&mut self) -> Option<usize> {
        let index = self.editing_text()?;
        self.state = DragState::Idle;
        Some(index)
    }

    /// Drops any gesture in progress without committing anything.
    pub fn cancel(&mut self) {
        if self.state != DragState::Idle {
            debug!("Abandoning gesture {:?}", self.state);
            self.state = DragState::Idle;
        }
    }

    /// Forgets shape indices after the shape list changed structurally.
    pub fn invalidate_indices(&mut self) {
        if matches!(
            self.state,
            DragState::Selecting { .. } | DragState::EditingText { .. }
        ) {
            self.cancel();
        }
    }
}
