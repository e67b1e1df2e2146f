//! Free drawing that bypasses widget layout.
//!
//! Coordinates are absolute y-up units; nothing here touches the cursor,
//! ids or interaction state. Calls made between `begin_scroll_area` and
//! `end_scroll_area` are clipped to that area like any other command.

use vellum_engine::coords::{Rect, Vec2};
use vellum_engine::paint::PackedColor;
use vellum_engine::scene::{TextAlign, TextureId, UvRect};

use crate::ui::Ui;

impl Ui {
    pub fn draw_text(&mut self, x: f32, y: f32, align: TextAlign, text: &str, color: PackedColor, point_size: f32) {
        self.queue.push_text(x, y, align, text, color, point_size);
    }

    pub fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, thickness: f32, color: PackedColor) {
        self.queue.push_line(Vec2::new(x0, y0), Vec2::new(x1, y1), thickness, color);
    }

    pub fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: PackedColor) {
        self.queue.push_rect(Rect::new(x, y, w, h), color);
    }

    pub fn draw_rounded_rect(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32, color: PackedColor) {
        self.queue.push_rounded_rect(Rect::new(x, y, w, h), radius, color);
    }

    /// Textured quad sampling `uv` from `texture`, tinted by `color`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_textured_rect(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: PackedColor,
        texture: TextureId,
        uv: UvRect,
    ) {
        self.queue.push_textured_rect(Rect::new(x, y, w, h), color, texture, uv);
    }
}
