//! Input handling and tool state machine.
//!
//! This module translates pointer events into drawing actions. It holds the
//! tool selection, the shared tool state (color, brush size, font), the drag
//! gesture state machine, and the dialog traits the shell implements.

pub mod gesture;
pub mod prompt;
pub mod tool;

// Re-export commonly used types at module level
pub use gesture::{DragState, GestureController};
pub use prompt::{ColorPicker, TextEdit, TextPrompt};
pub use tool::{Tool, ToolCategory, ToolState};
