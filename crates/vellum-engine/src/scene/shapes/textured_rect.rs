use crate::coords::Rect;
use crate::paint::PackedColor;
use crate::scene::{CommandQueue, DrawCmd};

use super::{scale_rect, unscale_rect};

/// Opaque texture handle owned by the renderer.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct TextureId(pub u32);

/// Texture coordinates of the two corners mapped onto the rectangle.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct UvRect {
    pub u0: f32,
    pub v0: f32,
    pub u1: f32,
    pub v1: f32,
}

impl UvRect {
    #[inline]
    pub const fn new(u0: f32, v0: f32, u1: f32, v1: f32) -> Self {
        Self { u0, v0, u1, v1 }
    }

    /// The whole texture.
    #[inline]
    pub const fn full() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }
}

/// Textured rectangle payload. `rect` is in stored (scaled) units; UVs are not scaled.
#[derive(Debug, Clone, PartialEq)]
pub struct TexturedRectCmd {
    pub rect: Rect,
    pub color: PackedColor,
    pub texture: TextureId,
    pub uv: UvRect,
}

impl TexturedRectCmd {
    #[inline]
    pub fn new(rect: Rect, color: PackedColor, texture: TextureId, uv: UvRect) -> Self {
        Self { rect: scale_rect(rect), color, texture, uv }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        unscale_rect(self.rect)
    }
}

impl CommandQueue {
    /// Records a rectangle sampling `texture` over `uv`, tinted by `color`.
    #[inline]
    pub fn push_textured_rect(&mut self, rect: Rect, color: PackedColor, texture: TextureId, uv: UvRect) {
        self.push(DrawCmd::TexturedRect(TexturedRectCmd::new(rect, color, texture, uv)));
    }
}
