//! Modal dialogs the canvas consumes from the surrounding shell.

use crate::draw::Color;

/// Values shown in, and returned by, the text edit dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct TextEdit {
    pub text: String,
    pub font_family: String,
    pub font_size: f64,
    pub color: Color,
}

/// Modal text editor opened after a text label is placed.
pub trait TextPrompt {
    /// Shows the editor seeded with `initial`. `None` means the user cancelled.
    fn edit_text(&mut self, initial: &TextEdit) -> Option<TextEdit>;
}

/// Modal color chooser.
pub trait ColorPicker {
    /// Shows the chooser with `current` preselected. `None` means the user cancelled.
    fn pick_color(&mut self, current: Color) -> Option<Color>;
}
