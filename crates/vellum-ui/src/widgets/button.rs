use vellum_engine::coords::Rect;
use vellum_engine::scene::{TextAlign, DEFAULT_POINT_SIZE};

use crate::layout::{BUTTON_HEIGHT, DEFAULT_SPACING, SLIDER_MARKER_WIDTH, TEXT_OFFSET};
use crate::palette;
use crate::ui::Ui;

impl Ui {
    /// Rounded push button. Returns `true` on the frame the click completes.
    pub fn button(&mut self, text: &str, enabled: bool) -> bool {
        let id = self.next_widget_id();

        let x = self.cursor.x;
        let y = self.cursor.row(BUTTON_HEIGHT);
        let w = self.cursor.w - SLIDER_MARKER_WIDTH;
        let h = BUTTON_HEIGHT;
        self.cursor.advance(BUTTON_HEIGHT + DEFAULT_SPACING);

        let rect = Rect::new(x, y, w, h);
        let over = enabled && self.in_rect(rect, true);
        let fired = self.button_logic(id, over);

        let alpha = if self.state.is_active(id) { 196 } else { 96 };
        self.queue.push_rounded_rect(rect, BUTTON_HEIGHT / 2.0 - 1.0, palette::grey(alpha));
        self.queue.push_text(
            x + (w / 2.0).trunc(),
            y + TEXT_OFFSET,
            TextAlign::Center,
            text,
            palette::label(enabled, self.state.is_hot(id)),
            DEFAULT_POINT_SIZE,
        );

        fired
    }

    /// Flat list entry. Only draws a background while hot.
    pub fn item(&mut self, text: &str, enabled: bool) -> bool {
        let id = self.next_widget_id();

        let x = self.cursor.x;
        let y = self.cursor.row(BUTTON_HEIGHT);
        let w = self.cursor.w;
        let h = BUTTON_HEIGHT;
        self.cursor.advance(BUTTON_HEIGHT + DEFAULT_SPACING);

        let rect = Rect::new(x, y, w, h);
        let over = enabled && self.in_rect(rect, true);
        let fired = self.button_logic(id, over);

        if self.state.is_hot(id) {
            let alpha = if self.state.is_active(id) { 196 } else { 96 };
            self.queue.push_rounded_rect(rect, 2.0, palette::accent(alpha));
        }

        let color = if enabled { palette::TEXT } else { palette::TEXT_DISABLED };
        self.queue.push_text(
            x + BUTTON_HEIGHT / 2.0,
            y + TEXT_OFFSET,
            TextAlign::Left,
            text,
            color,
            DEFAULT_POINT_SIZE,
        );

        fired
    }
}
