use crate::coords::Vec2;
use crate::paint::PackedColor;
use crate::scene::{CommandQueue, DrawCmd, GEOMETRY_SCALE};

use super::unscale_point;

/// Line segment payload. Endpoints and `thickness` are in stored (scaled) units.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub thickness: f32,
    pub color: PackedColor,
}

impl LineCmd {
    #[inline]
    pub fn new(from: Vec2, to: Vec2, thickness: f32, color: PackedColor) -> Self {
        Self {
            from: from * GEOMETRY_SCALE,
            to: to * GEOMETRY_SCALE,
            thickness: thickness * GEOMETRY_SCALE,
            color,
        }
    }

    /// Endpoints in caller units.
    #[inline]
    pub fn endpoints(&self) -> (Vec2, Vec2) {
        (unscale_point(self.from), unscale_point(self.to))
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.thickness / GEOMETRY_SCALE
    }
}

impl CommandQueue {
    /// Records a line segment.
    #[inline]
    pub fn push_line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: PackedColor) {
        self.push(DrawCmd::Line(LineCmd::new(from, to, thickness, color)));
    }
}
