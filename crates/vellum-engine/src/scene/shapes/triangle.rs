use crate::coords::{Rect, Vec2};
use crate::paint::PackedColor;
use crate::scene::{CommandQueue, DrawCmd};

use super::{scale_rect, unscale_rect};

/// Direction an isosceles triangle points inside its bounding box.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TriangleDir {
    /// Apex at the middle of the right edge (collapsed disclosure).
    Right,
    /// Apex at the middle of the bottom edge (expanded disclosure).
    Down,
}

/// Triangle payload. `rect` is the bounding box in stored (scaled) units.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleCmd {
    pub rect: Rect,
    pub dir: TriangleDir,
    pub color: PackedColor,
}

impl TriangleCmd {
    #[inline]
    pub fn new(rect: Rect, dir: TriangleDir, color: PackedColor) -> Self {
        Self { rect: scale_rect(rect), dir, color }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        unscale_rect(self.rect)
    }

    /// Vertices in caller units (y-up); the apex is always the middle one.
    pub fn vertices(&self) -> [Vec2; 3] {
        let r = self.bounds();
        let (x0, y0) = (r.origin.x, r.origin.y);
        let (x1, y1) = (x0 + r.size.x, y0 + r.size.y);
        match self.dir {
            TriangleDir::Right => [
                Vec2::new(x0, y0),
                Vec2::new(x1, y0 + r.size.y * 0.5),
                Vec2::new(x0, y1),
            ],
            TriangleDir::Down => [
                Vec2::new(x0, y1),
                Vec2::new(x0 + r.size.x * 0.5, y0),
                Vec2::new(x1, y1),
            ],
        }
    }
}

impl CommandQueue {
    /// Records a triangle inscribed in `rect`.
    #[inline]
    pub fn push_triangle(&mut self, rect: Rect, dir: TriangleDir, color: PackedColor) {
        self.push(DrawCmd::Triangle(TriangleCmd::new(rect, dir, color)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::rgba;

    #[test]
    fn down_apex_is_at_bottom_in_y_up_space() {
        let cmd = TriangleCmd::new(Rect::new(0.0, 0.0, 8.0, 8.0), TriangleDir::Down, rgba(0, 0, 0, 255));
        let [_, apex, _] = cmd.vertices();
        assert_eq!(apex, Vec2::new(4.0, 0.0));
    }

    #[test]
    fn right_apex_is_mid_right_edge() {
        let cmd = TriangleCmd::new(Rect::new(2.0, 2.0, 8.0, 8.0), TriangleDir::Right, rgba(0, 0, 0, 255));
        let [_, apex, _] = cmd.vertices();
        assert_eq!(apex, Vec2::new(10.0, 6.0));
    }
}
