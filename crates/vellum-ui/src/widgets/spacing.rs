use vellum_engine::coords::Rect;

use crate::layout::{DEFAULT_SPACING, INDENT_SIZE};
use crate::palette;
use crate::ui::Ui;

impl Ui {
    /// Shifts following widgets right by `scale` indent steps.
    pub fn indent(&mut self, scale: f32) {
        self.cursor.indent(INDENT_SIZE * scale);
    }

    /// Undoes an [`Ui::indent`] with the same `scale`.
    pub fn unindent(&mut self, scale: f32) {
        self.cursor.unindent(INDENT_SIZE * scale);
    }

    /// Blank vertical gap.
    pub fn separator(&mut self, scale: f32) {
        self.cursor.advance(DEFAULT_SPACING * 3.0 * scale);
    }

    /// Thin horizontal divider across the current width.
    pub fn separator_line(&mut self) {
        let x = self.cursor.x;
        let y = self.cursor.y - DEFAULT_SPACING * 2.0;
        let w = self.cursor.w;
        self.cursor.advance(DEFAULT_SPACING * 4.0);

        self.queue.push_rect(Rect::new(x, y, w, 1.0), palette::SEPARATOR);
    }
}
