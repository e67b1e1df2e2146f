use vellum_engine::coords::Rect;
use vellum_engine::scene::{TextAlign, TriangleDir, DEFAULT_POINT_SIZE};

use crate::layout::{BUTTON_HEIGHT, CHECK_SIZE, DEFAULT_SPACING, TEXT_OFFSET};
use crate::palette;
use crate::response::Changed;
use crate::ui::Ui;

impl Ui {
    /// Checkbox with the label on the left and the box at the right edge.
    ///
    /// Returns the toggled value when clicked. The box is drawn from
    /// `checked` as passed in; the new value shows on the next frame.
    pub fn check(&mut self, text: &str, checked: bool, enabled: bool) -> Changed<bool> {
        let id = self.next_widget_id();

        let x = self.cursor.x;
        let y = self.cursor.row(BUTTON_HEIGHT);
        let w = self.cursor.w;
        let h = BUTTON_HEIGHT;
        self.cursor.advance(BUTTON_HEIGHT + DEFAULT_SPACING);

        let over = enabled && self.in_rect(Rect::new(x, y, w, h), true);
        let toggled = self.button_logic(id, over);
        let active = self.state.is_active(id);

        let cx = x + w - BUTTON_HEIGHT / 2.0 - CHECK_SIZE / 2.0;
        let cy = y + BUTTON_HEIGHT / 2.0 - CHECK_SIZE / 2.0;
        self.queue.push_rounded_rect(
            Rect::new(cx - 3.0, cy - 3.0, CHECK_SIZE + 6.0, CHECK_SIZE + 6.0),
            4.0,
            palette::grey(if active { 196 } else { 96 }),
        );

        if checked {
            let fill = if !enabled {
                palette::grey(200)
            } else if active {
                palette::white(255)
            } else {
                palette::white(200)
            };
            self.queue.push_rounded_rect(
                Rect::new(cx, cy, CHECK_SIZE, CHECK_SIZE),
                CHECK_SIZE / 2.0 - 1.0,
                fill,
            );
        }

        self.queue.push_text(
            x,
            y + TEXT_OFFSET,
            TextAlign::Left,
            text,
            palette::label(enabled, self.state.is_hot(id)),
            DEFAULT_POINT_SIZE,
        );

        Changed::new(checked ^ toggled, toggled)
    }

    /// Collapsible section header with a disclosure triangle and optional
    /// right-aligned `subtext`.
    ///
    /// Headers pack tighter than other widgets: no spacing is added below.
    pub fn collapse(&mut self, text: &str, subtext: &str, expanded: bool, enabled: bool) -> Changed<bool> {
        let id = self.next_widget_id();

        let x = self.cursor.x;
        let y = self.cursor.row(BUTTON_HEIGHT);
        let w = self.cursor.w;
        let h = BUTTON_HEIGHT;
        self.cursor.advance(BUTTON_HEIGHT);

        let cx = x + BUTTON_HEIGHT / 2.0 - CHECK_SIZE / 2.0;
        let cy = y + BUTTON_HEIGHT / 2.0 - CHECK_SIZE / 2.0;

        let over = enabled && self.in_rect(Rect::new(x, y, w, h), true);
        let toggled = self.button_logic(id, over);
        let active = self.state.is_active(id);

        let (dir, alpha) = match (expanded, active) {
            (true, true) => (TriangleDir::Down, 255),
            (true, false) => (TriangleDir::Down, 200),
            (false, true) => (TriangleDir::Right, 200),
            (false, false) => (TriangleDir::Right, 150),
        };
        self.queue.push_triangle(Rect::new(cx, cy, CHECK_SIZE, CHECK_SIZE), dir, palette::white(alpha));

        self.queue.push_text(
            x + BUTTON_HEIGHT,
            y + TEXT_OFFSET,
            TextAlign::Left,
            text,
            palette::label(enabled, self.state.is_hot(id)),
            DEFAULT_POINT_SIZE,
        );

        if !subtext.is_empty() {
            let alpha = if expanded { 178 } else { 128 };
            self.queue.push_text(
                x + w,
                y + TEXT_OFFSET,
                TextAlign::Right,
                subtext,
                palette::white(alpha),
                DEFAULT_POINT_SIZE,
            );
        }

        Changed::new(expanded ^ toggled, toggled)
    }
}
