use crate::coords::Rect;
use crate::paint::PackedColor;
use crate::scene::{CommandQueue, DrawCmd, GEOMETRY_SCALE};

use super::{scale_rect, unscale_rect};

/// Rounded rectangle payload. `rect` and `radius` are in stored (scaled) units.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radius: f32,
    pub color: PackedColor,
}

impl RoundedRectCmd {
    #[inline]
    pub fn new(rect: Rect, radius: f32, color: PackedColor) -> Self {
        Self { rect: scale_rect(rect), radius: radius * GEOMETRY_SCALE, color }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        unscale_rect(self.rect)
    }

    /// Corner radius in caller units.
    #[inline]
    pub fn corner_radius(&self) -> f32 {
        self.radius / GEOMETRY_SCALE
    }
}

impl CommandQueue {
    /// Records a rounded rectangle with a uniform corner radius.
    #[inline]
    pub fn push_rounded_rect(&mut self, rect: Rect, radius: f32, color: PackedColor) {
        self.push(DrawCmd::RoundedRect(RoundedRectCmd::new(rect, radius, color)));
    }
}
