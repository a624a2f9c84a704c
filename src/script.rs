//! Replays recorded gestures against a [`Canvas`].
//!
//! A script is a TOML file holding a list of `[[step]]` tables, each tagged with
//! an `action`:
//!
//! ```toml
//! [[step]]
//! action = "tool"
//! tool = "rectangle"
//!
//! [[step]]
//! action = "drag"
//! points = [[10, 10], [60, 40]]
//!
//! [[step]]
//! action = "tool"
//! tool = "text"
//!
//! [[step]]
//! action = "down"
//! at = [20, 80]
//!
//! [[step]]
//! action = "text"
//! text = "hello"
//! ```
//!
//! Steps that open a dialog on a real canvas (`text`, `cancel-text`,
//! `pick-color`) are answered by the script itself.

use crate::canvas::Canvas;
use crate::config::ColorSpec;
use crate::draw::Color;
use crate::export::load_background;
use crate::input::{ColorPicker, TextEdit, TextPrompt, Tool};
use crate::util::Point;
use anyhow::{Context, Result, bail};
use log::{debug, error, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A parsed gesture script.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

/// One scripted action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Step {
    /// Switch the active tool
    Tool { tool: Tool },
    /// Set the active color directly
    Color { color: ColorSpec },
    /// Answer a color picker dialog (`color` absent = cancel)
    PickColor { color: Option<ColorSpec> },
    /// Set the brush size
    BrushSize { size: u32 },
    /// Set the font used by new text labels
    Font { family: String, size: f64 },
    /// Press at a point
    Down { at: [i32; 2] },
    /// Move with the button held
    Move { at: [i32; 2] },
    /// Release at a point
    Up { at: [i32; 2] },
    /// Press at the first point, move through the rest, release at the last
    Drag { points: Vec<[i32; 2]> },
    /// Confirm the pending text edit; omitted fields keep the label's values
    Text {
        text: String,
        font_family: Option<String>,
        font_size: Option<f64>,
        color: Option<ColorSpec>,
    },
    /// Cancel the pending text edit
    CancelText,
    Undo,
    Redo,
    Clear,
    /// Show or hide the grid
    Grid { show: bool },
    /// Load a PNG background; relative paths resolve against the script file
    Background { path: PathBuf },
    /// Resize the canvas
    Resize { width: u32, height: u32 },
}

impl Script {
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses the script at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::from_toml(&text)
            .with_context(|| format!("Failed to parse script {}", path.display()))
    }
}

/// Text dialog answered from a script step. `None` cancels.
struct ScriptedText(Option<TextAnswer>);

struct TextAnswer {
    text: String,
    font_family: Option<String>,
    font_size: Option<f64>,
    color: Option<Color>,
}

impl TextPrompt for ScriptedText {
    fn edit_text(&mut self, initial: &TextEdit) -> Option<TextEdit> {
        let answer = self.0.take()?;
        Some(TextEdit {
            text: answer.text,
            font_family: answer
                .font_family
                .unwrap_or_else(|| initial.font_family.clone()),
            font_size: answer.font_size.unwrap_or(initial.font_size),
            color: answer.color.unwrap_or(initial.color),
        })
    }
}

/// Color dialog answered from a script step. `None` cancels.
struct ScriptedColor(Option<Color>);

impl ColorPicker for ScriptedColor {
    fn pick_color(&mut self, _current: Color) -> Option<Color> {
        self.0
    }
}

/// Runs scripts against a canvas.
pub struct ScriptRunner<'a> {
    canvas: &'a mut Canvas,
    base_dir: PathBuf,
    failures: usize,
}

impl<'a> ScriptRunner<'a> {
    /// `base_dir` resolves relative background paths.
    pub fn new(canvas: &'a mut Canvas, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            canvas,
            base_dir: base_dir.into(),
            failures: 0,
        }
    }

    /// Number of steps whose side operation (such as an image import) failed.
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Applies every step in order.
    pub fn run(&mut self, script: &Script) -> Result<()> {
        for (number, step) in script.steps.iter().enumerate() {
            debug!("Step {}: {:?}", number + 1, step);
            self.apply(step)
                .with_context(|| format!("Script step {} failed", number + 1))?;
        }
        Ok(())
    }

    /// Applies a single step.
    pub fn apply(&mut self, step: &Step) -> Result<()> {
        let canvas = &mut *self.canvas;
        match step {
            Step::Tool { tool } => canvas.set_active_tool(*tool),
            Step::Color { color } => canvas.set_active_color(color.to_color()),
            Step::PickColor { color } => {
                let mut picker = ScriptedColor(color.as_ref().map(ColorSpec::to_color));
                canvas.pick_color(&mut picker);
            }
            Step::BrushSize { size } => canvas.set_brush_size(*size),
            Step::Font { family, size } => canvas.set_font(family, *size),
            Step::Down { at } => canvas.on_pointer_down(Point::new(at[0], at[1])),
            Step::Move { at } => canvas.on_pointer_drag(Point::new(at[0], at[1])),
            Step::Up { at } => canvas.on_pointer_up(Point::new(at[0], at[1])),
            Step::Drag { points } => {
                let Some((first, rest)) = points.split_first() else {
                    bail!("drag needs at least one point");
                };
                canvas.on_pointer_down(Point::new(first[0], first[1]));
                for p in rest {
                    canvas.on_pointer_drag(Point::new(p[0], p[1]));
                }
                let last = rest.last().unwrap_or(first);
                canvas.on_pointer_up(Point::new(last[0], last[1]));
            }
            Step::Text {
                text,
                font_family,
                font_size,
                color,
            } => {
                let mut prompt = ScriptedText(Some(TextAnswer {
                    text: text.clone(),
                    font_family: font_family.clone(),
                    font_size: *font_size,
                    color: color.as_ref().map(ColorSpec::to_color),
                }));
                if !canvas.edit_pending_text(&mut prompt) {
                    warn!("Text step without a pending text label; ignored");
                }
            }
            Step::CancelText => {
                if !canvas.edit_pending_text(&mut ScriptedText(None)) {
                    warn!("Cancel-text step without a pending text label; ignored");
                }
            }
            Step::Undo => {
                canvas.undo();
            }
            Step::Redo => {
                canvas.redo();
            }
            Step::Clear => canvas.clear(),
            Step::Grid { show } => canvas.set_show_grid(*show),
            Step::Background { path } => {
                let resolved = self.base_dir.join(path);
                match load_background(&resolved) {
                    Ok(image) => canvas.set_background_image(image),
                    Err(err) => {
                        error!("Operation failed: {}: {}", resolved.display(), err);
                        self.failures += 1;
                    }
                }
            }
            Step::Resize { width, height } => canvas.resize(*width, *height),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::CanvasSettings;
    use crate::draw::{BLUE, RED, ShapeKind};
    use crate::input::ToolState;

    fn canvas() -> Canvas {
        Canvas::new(
            100,
            100,
            ToolState::new(Tool::Pen, RED, 2),
            CanvasSettings::default(),
        )
    }

    fn run(canvas: &mut Canvas, text: &str) -> usize {
        let script = Script::from_toml(text).unwrap();
        let mut runner = ScriptRunner::new(canvas, ".");
        runner.run(&script).unwrap();
        runner.failures()
    }

    #[test]
    fn parses_and_runs_drawing_steps() {
        let mut canvas = canvas();
        run(
            &mut canvas,
            r#"
            [[step]]
            action = "tool"
            tool = "line"

            [[step]]
            action = "color"
            color = "blue"

            [[step]]
            action = "drag"
            points = [[0, 0], [10, 5], [20, 10]]

            [[step]]
            action = "tool"
            tool = "pen"

            [[step]]
            action = "drag"
            points = [[0, 50], [10, 50], [20, 50]]
            "#,
        );

        assert_eq!(canvas.shapes().len(), 3);
        let line = canvas.shapes().get(0).unwrap();
        assert_eq!(line.kind, ShapeKind::Line);
        assert_eq!(line.color, BLUE);
    }

    #[test]
    fn text_step_answers_the_prompt() {
        let mut canvas = canvas();
        run(
            &mut canvas,
            r#"
            [[step]]
            action = "tool"
            tool = "text"

            [[step]]
            action = "down"
            at = [5, 40]

            [[step]]
            action = "up"
            at = [5, 40]

            [[step]]
            action = "text"
            text = "note"
            font_size = 30.0
            "#,
        );

        let label = canvas.shapes().get(0).unwrap();
        match &label.kind {
            ShapeKind::Text {
                text, font_size, ..
            } => {
                assert_eq!(text, "note");
                assert_eq!(*font_size, 30.0);
            }
            other => panic!("expected text, got {other:?}"),
        }
        assert!(canvas.pending_text_edit().is_none());
    }

    #[test]
    fn pick_color_without_answer_keeps_color() {
        let mut canvas = canvas();
        run(
            &mut canvas,
            r#"
            [[step]]
            action = "pick-color"
            "#,
        );
        assert_eq!(canvas.tools().color, RED);
    }

    #[test]
    fn failed_background_import_leaves_canvas_alone() {
        let mut canvas = canvas();
        let failures = run(
            &mut canvas,
            r#"
            [[step]]
            action = "background"
            path = "/nonexistent/background.png"
            "#,
        );
        assert_eq!(failures, 1);
        assert!(!canvas.has_background_image());
    }

    #[test]
    fn empty_drag_is_an_error() {
        let mut canvas = canvas();
        let script = Script::from_toml("[[step]]\naction = \"drag\"\npoints = []").unwrap();
        assert!(ScriptRunner::new(&mut canvas, ".").run(&script).is_err());
    }

    #[test]
    fn unknown_action_fails_to_parse() {
        assert!(Script::from_toml("[[step]]\naction = \"explode\"").is_err());
    }
}
