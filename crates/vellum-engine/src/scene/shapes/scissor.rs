use crate::coords::Rect;
use crate::scene::{CommandQueue, DrawCmd};

/// Clip toggle. The rectangle is stored at 1:1 scale.
///
/// There is no stack: `On` replaces whatever clip was active and `Off`
/// disables clipping entirely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScissorCmd {
    On(Rect),
    Off,
}

impl CommandQueue {
    /// Enables clipping to `rect` for every following command.
    #[inline]
    pub fn push_scissor(&mut self, rect: Rect) {
        self.push(DrawCmd::Scissor(ScissorCmd::On(rect)));
    }

    /// Disables clipping for every following command.
    #[inline]
    pub fn push_scissor_off(&mut self) {
        self.push(DrawCmd::Scissor(ScissorCmd::Off));
    }
}
