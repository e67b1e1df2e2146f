pub(crate) mod line;
pub(crate) mod rect;
pub(crate) mod rounded_rect;
pub(crate) mod scissor;
pub(crate) mod text;
pub(crate) mod textured_rect;
pub(crate) mod triangle;

use crate::coords::{Rect, Vec2};

use super::GEOMETRY_SCALE;

/// Caller units to stored units.
#[inline]
pub(crate) fn scale_rect(rect: Rect) -> Rect {
    Rect::from_origin_size(rect.origin * GEOMETRY_SCALE, rect.size * GEOMETRY_SCALE)
}

/// Stored units back to caller units.
#[inline]
pub(crate) fn unscale_rect(rect: Rect) -> Rect {
    Rect::from_origin_size(rect.origin / GEOMETRY_SCALE, rect.size / GEOMETRY_SCALE)
}

#[inline]
pub(crate) fn unscale_point(p: Vec2) -> Vec2 {
    p / GEOMETRY_SCALE
}
