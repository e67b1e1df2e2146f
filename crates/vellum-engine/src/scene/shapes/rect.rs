use crate::coords::Rect;
use crate::paint::PackedColor;
use crate::scene::{CommandQueue, DrawCmd};

use super::{scale_rect, unscale_rect};

/// Solid rectangle payload. `rect` is in stored (scaled) units.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: PackedColor,
}

impl RectCmd {
    /// Builds the payload from caller-unit geometry.
    #[inline]
    pub fn new(rect: Rect, color: PackedColor) -> Self {
        Self { rect: scale_rect(rect), color }
    }

    /// Geometry in caller units.
    #[inline]
    pub fn bounds(&self) -> Rect {
        unscale_rect(self.rect)
    }
}

impl CommandQueue {
    /// Records a solid rectangle.
    #[inline]
    pub fn push_rect(&mut self, rect: Rect, color: PackedColor) {
        self.push(DrawCmd::Rect(RectCmd::new(rect, color)));
    }
}
