//! Pointer scripts: a line-based description of a user session.
//!
//! ```text
//! # comment
//! move 50 52      pointer to window pixel (top-left origin)
//! press           left button down (also: release, press right, release right)
//! wheel -3        wheel lines; negative scrolls toward the end
//! leave           pointer leaves the window
//! focus off       window focus change (on | off)
//! frames 2        run two frames with the input gathered so far
//! frame           same as `frames 1`
//! ```

use std::fmt;

use vellum_engine::input::{
    InputEvent,
    MouseButton,
    MouseButtonState,
    MouseWheelDelta,
    PointerButtonEvent,
    PointerMoveEvent,
};

// ── Error ─────────────────────────────────────────────────────────────────

/// A script line that could not be understood.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptError {
    pub message: String,
    /// 1-based line number.
    pub line: usize,
}

impl ScriptError {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self { message: message.into(), line }
    }
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "script error on line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ScriptError {}

// ── Steps ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Feed one event to the input collector.
    Event(InputEvent),
    /// Run this many frames.
    Frames(u32),
}

/// The session shipped with the studio. Coordinates target the demo UI at
/// the default 1024x768 viewport.
pub const DEMO_SCRIPT: &str = "\
# Hover and click the first button.
move 50 52
frames 2
press
frame
release
frame

# Toggle the checkbox.
move 60 124
frame
press
frame
release
frame

# Drag the slider handle 40 px to the right.
move 108 240
frame
press
frame
move 148 240
frame
release
frame

# Scroll the wall of text, then leave the window.
move 300 400
wheel -3
frame
leave
frame
";

pub fn parse(src: &str) -> Result<Vec<Step>, ScriptError> {
    let mut steps = Vec::new();

    for (index, raw) in src.lines().enumerate() {
        let line = index + 1;
        let text = match raw.find('#') {
            Some(i) => &raw[..i],
            None => raw,
        };
        let mut words = text.split_whitespace();
        let Some(command) = words.next() else { continue };
        let args: Vec<&str> = words.collect();

        let step = match (command, args.as_slice()) {
            ("move", [x, y]) => Step::Event(InputEvent::PointerMoved(PointerMoveEvent {
                x: number(line, x)?,
                y: number(line, y)?,
            })),
            ("press", rest) => button(line, rest, MouseButtonState::Pressed)?,
            ("release", rest) => button(line, rest, MouseButtonState::Released)?,
            ("wheel", [lines]) => Step::Event(InputEvent::MouseWheel(MouseWheelDelta::Line {
                x: 0.0,
                y: number(line, lines)?,
            })),
            ("leave", []) => Step::Event(InputEvent::PointerLeft),
            ("focus", ["on"]) => Step::Event(InputEvent::Focused(true)),
            ("focus", ["off"]) => Step::Event(InputEvent::Focused(false)),
            ("frame", []) => Step::Frames(1),
            ("frames", [n]) => Step::Frames(
                n.parse()
                    .map_err(|_| ScriptError::new(line, format!("`{n}` is not a frame count")))?,
            ),
            ("move" | "wheel" | "leave" | "focus" | "frame" | "frames", _) => {
                return Err(ScriptError::new(line, format!("wrong arguments for `{command}`")));
            }
            _ => return Err(ScriptError::new(line, format!("unknown command `{command}`"))),
        };
        steps.push(step);
    }

    Ok(steps)
}

fn number(line: usize, word: &str) -> Result<f32, ScriptError> {
    word.parse()
        .map_err(|_| ScriptError::new(line, format!("`{word}` is not a number")))
}

fn button(line: usize, args: &[&str], state: MouseButtonState) -> Result<Step, ScriptError> {
    let button = match args {
        [] | ["left"] => MouseButton::Left,
        ["right"] => MouseButton::Right,
        ["middle"] => MouseButton::Middle,
        _ => return Err(ScriptError::new(line, format!("unknown button `{}`", args.join(" ")))),
    };
    Ok(Step::Event(InputEvent::PointerButton(PointerButtonEvent { button, state })))
}

/// Total frames a script runs.
pub fn frame_count(steps: &[Step]) -> u64 {
    steps
        .iter()
        .map(|s| match s {
            Step::Frames(n) => u64::from(*n),
            Step::Event(_) => 0,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_and_skips_comments() {
        let steps = parse("# header\n\nmove 1 2.5 # trailing\npress\nrelease right\nframes 3\n").unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Event(InputEvent::PointerMoved(PointerMoveEvent { x: 1.0, y: 2.5 })),
                Step::Event(InputEvent::PointerButton(PointerButtonEvent {
                    button: MouseButton::Left,
                    state: MouseButtonState::Pressed,
                })),
                Step::Event(InputEvent::PointerButton(PointerButtonEvent {
                    button: MouseButton::Right,
                    state: MouseButtonState::Released,
                })),
                Step::Frames(3),
            ]
        );
    }

    #[test]
    fn reports_line_of_first_error() {
        let err = parse("frame\nmove 1\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.to_string(), "script error on line 2: wrong arguments for `move`");

        let err = parse("jump\n").unwrap_err();
        assert_eq!(err, ScriptError::new(1, "unknown command `jump`"));

        assert_eq!(parse("frames x").unwrap_err().line, 1);
        assert_eq!(parse("press sideways").unwrap_err().line, 1);
    }

    #[test]
    fn demo_script_is_valid() {
        let steps = parse(DEMO_SCRIPT).unwrap();
        assert_eq!(frame_count(&steps), 13);
    }
}
