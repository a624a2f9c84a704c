use crate::util::Point;

use super::Canvas;

impl Canvas {
    /// Processes a primary button press at `pos`.
    ///
    /// Depending on the active tool this starts a drag, picks up the shape under
    /// the pointer, or places a text label and opens a text edit.
    pub fn on_pointer_down(&mut self, pos: Point) {
        self.last_pointer = Some(pos);
        if self.gesture.on_pointer_down(pos, &self.tools, &mut self.shapes) {
            self.needs_redraw = true;
        }
    }

    /// Processes pointer motion with the primary button held.
    ///
    /// Continuous tools commit a segment per call; shape tools only refresh the
    /// preview; the selector moves its shape.
    pub fn on_pointer_drag(&mut self, pos: Point) {
        self.last_pointer = Some(pos);
        if self.gesture.on_pointer_drag(pos, &self.tools, &mut self.shapes) {
            self.needs_redraw = true;
        }
    }

    /// Processes the primary button release at `pos`.
    ///
    /// Shape tools commit their shape here. The preview is gone either way.
    pub fn on_pointer_up(&mut self, pos: Point) {
        let had_preview = self.provisional_shape().is_some();
        self.last_pointer = Some(pos);
        if self.gesture.on_pointer_up(pos, &self.tools, &mut self.shapes) || had_preview {
            self.needs_redraw = true;
        }
    }
}
