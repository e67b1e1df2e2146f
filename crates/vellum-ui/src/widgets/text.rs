use vellum_engine::scene::{TextAlign, DEFAULT_POINT_SIZE};

use crate::layout::{BUTTON_HEIGHT, SLIDER_HEIGHT, TEXT_OFFSET};
use crate::palette;
use crate::ui::Ui;

impl Ui {
    /// Static text on its own row. No id is allocated.
    pub fn label(&mut self, text: &str, align: TextAlign) {
        self.label_in_place(text, align);
        self.cursor.advance(BUTTON_HEIGHT);
    }

    /// Like [`Ui::label`] but leaves the cursor where it is, so the next call
    /// draws on the same row.
    pub fn label_in_place(&mut self, text: &str, align: TextAlign) {
        let x = match align {
            TextAlign::Left => self.cursor.x,
            TextAlign::Center => self.cursor.x + (self.cursor.w / 2.0).trunc(),
            TextAlign::Right => self.cursor.x + self.cursor.w,
        };
        let y = self.cursor.row(BUTTON_HEIGHT) + TEXT_OFFSET;
        self.queue.push_text(x, y, align, text, palette::TEXT_STRONG, DEFAULT_POINT_SIZE);
    }

    /// Value text on its own row. Right-aligned values sit half a row in
    /// from the edge.
    pub fn value(&mut self, text: &str, align: TextAlign) {
        let x = match align {
            TextAlign::Left => self.cursor.x,
            TextAlign::Center => self.cursor.x + (self.cursor.w / 2.0).trunc(),
            TextAlign::Right => self.cursor.x + self.cursor.w - SLIDER_HEIGHT / 2.0,
        };
        let y = self.cursor.row(BUTTON_HEIGHT) + TEXT_OFFSET;
        self.cursor.advance(BUTTON_HEIGHT);
        self.queue.push_text(x, y, align, text, palette::TEXT, DEFAULT_POINT_SIZE);
    }

    /// Label on the left and value on the right of a single row.
    pub fn labelled_value(&mut self, label: &str, value: &str) {
        self.label_in_place(label, TextAlign::Left);
        self.value(value, TextAlign::Right);
    }
}
