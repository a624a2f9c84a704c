use crate::draw::{FontDescriptor, ShapeKind};
use crate::input::{ColorPicker, TextEdit, TextPrompt};
use log::debug;

use super::Canvas;
use super::core::{MAX_FONT_SIZE, MIN_FONT_SIZE};

impl Canvas {
    /// Removes the most recently added shape.
    ///
    /// Returns false (and changes nothing) when the canvas is empty. Any
    /// selection or open text edit is dropped because indices may have shifted.
    pub fn undo(&mut self) -> bool {
        self.gesture.invalidate_indices();
        match self.shapes.undo() {
            Some(shape) => {
                debug!("Undid {}", shape.kind.name());
                self.needs_redraw = true;
                true
            }
            None => false,
        }
    }

    /// Redo is not supported; always returns false.
    pub fn redo(&mut self) -> bool {
        self.shapes.redo()
    }

    /// Removes every shape and the background image.
    pub fn clear(&mut self) {
        self.gesture.invalidate_indices();
        self.shapes.clear();
        self.background_image = None;
        self.needs_redraw = true;
        debug!("Canvas cleared");
    }

    /// Current values of the label waiting for a text edit, if any.
    pub fn pending_text_edit(&self) -> Option<TextEdit> {
        let index = self.gesture.editing_text()?;
        let shape = self.shapes.get(index)?;
        match &shape.kind {
            ShapeKind::Text {
                text,
                font,
                font_size,
            } => Some(TextEdit {
                text: text.clone(),
                font_family: font.family.clone(),
                font_size: *font_size,
                color: shape.color,
            }),
            _ => None,
        }
    }

    /// Applies a confirmed text edit to the pending label and closes the edit.
    ///
    /// Returns false when no text edit is open.
    pub fn commit_text_edit(&mut self, edit: TextEdit) -> bool {
        let Some(index) = self.gesture.finish_text_edit() else {
            debug!("No text edit open; ignoring commit");
            return false;
        };
        let Some(shape) = self.shapes.get_mut(index) else {
            return false;
        };
        shape.color = edit.color;
        if let ShapeKind::Text {
            text,
            font,
            font_size,
        } = &mut shape.kind
        {
            *text = edit.text;
            if !edit.font_family.trim().is_empty() {
                *font = FontDescriptor {
                    family: edit.font_family,
                    ..font.clone()
                };
            }
            if edit.font_size.is_finite() {
                *font_size = edit.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
            }
            debug!("Text label {index} set to {:?}", text);
        }
        self.needs_redraw = true;
        true
    }

    /// Closes the open text edit without changing the label.
    ///
    /// The label stays on the canvas with its default text unless
    /// `keep_text_on_cancel` is off, in which case it is removed.
    pub fn cancel_text_edit(&mut self) -> bool {
        let Some(index) = self.gesture.finish_text_edit() else {
            return false;
        };
        if !self.settings.keep_text_on_cancel && index + 1 == self.shapes.len() {
            self.shapes.undo();
            debug!("Text edit cancelled; label {index} removed");
        } else {
            debug!("Text edit cancelled; label {index} kept");
        }
        self.needs_redraw = true;
        true
    }

    /// Runs `prompt` for the pending label and commits or cancels with its answer.
    ///
    /// Returns false when no text edit is open.
    pub fn edit_pending_text(&mut self, prompt: &mut dyn TextPrompt) -> bool {
        let Some(initial) = self.pending_text_edit() else {
            return false;
        };
        match prompt.edit_text(&initial) {
            Some(edit) => self.commit_text_edit(edit),
            None => self.cancel_text_edit(),
        }
    }

    /// Lets the user choose a new active color. Cancelling keeps the current one.
    ///
    /// Returns true when the color changed.
    pub fn pick_color(&mut self, picker: &mut dyn ColorPicker) -> bool {
        match picker.pick_color(self.tools.color) {
            Some(color) => {
                self.set_active_color(color);
                true
            }
            None => {
                debug!("Color selection cancelled");
                false
            }
        }
    }
}
