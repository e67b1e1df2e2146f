use crate::coords::Rect;
use crate::scene::{DrawCmd, ScissorCmd};

/// Depth-1 clip tracker for renderers walking a command queue.
///
/// Scissor commands replace (`On`) or remove (`Off`) the current clip; there
/// is no stack to restore.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ClipState {
    current: Option<Rect>,
}

impl ClipState {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clip rectangle, `None` when clipping is disabled.
    #[inline]
    pub fn current(&self) -> Option<Rect> {
        self.current
    }

    /// Updates the clip if `cmd` is a scissor command. Returns `true` when it was.
    #[inline]
    pub fn apply(&mut self, cmd: &DrawCmd) -> bool {
        match cmd {
            DrawCmd::Scissor(ScissorCmd::On(rect)) => {
                self.current = Some(*rect);
                true
            }
            DrawCmd::Scissor(ScissorCmd::Off) => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Whether anything inside `bounds` survives the current clip.
    #[inline]
    pub fn is_visible(&self, bounds: Rect) -> bool {
        match self.current {
            None => true,
            Some(clip) => clip.intersect(bounds).is_some(),
        }
    }
}
