use vellum_engine::coords::Rect;
use vellum_engine::scene::{TextAlign, DEFAULT_POINT_SIZE};

use crate::layout::{BUTTON_HEIGHT, DEFAULT_SPACING, SLIDER_HEIGHT, SLIDER_MARKER_WIDTH, TEXT_OFFSET};
use crate::palette;
use crate::response::Changed;
use crate::ui::Ui;

/// Number of decimals shown for values stepped by `increment`.
///
/// Integer steps show none; `0.1` shows one, `0.01` two, and so on.
pub fn slider_precision(increment: f32) -> usize {
    if increment <= 0.0 || !increment.is_finite() {
        return 0;
    }
    // log10(0.1) lands a hair above -1 in floating point.
    let digits = ((increment as f64).log10() - 1e-6).ceil() as i32;
    if digits >= 0 { 0 } else { (-digits) as usize }
}

/// Rounds `value` to the nearest multiple of `increment`. A non-positive
/// increment leaves the value alone.
pub fn snap_to_increment(value: f32, increment: f32) -> f32 {
    if increment > 0.0 {
        (value / increment + 0.5).floor() * increment
    } else {
        value
    }
}

impl Ui {
    /// Horizontal slider over `[min, max]` snapped to `increment`.
    ///
    /// Only the handle is grabbable. While dragging, the handle follows the
    /// pointer from where it was grabbed; `changed` is reported only when the
    /// snapped value moves.
    pub fn slider(&mut self, name: &str, value: f32, min: f32, max: f32, increment: f32, enabled: bool) -> Changed<f32> {
        debug_assert!(max > min, "slider range is empty ({min}..{max})");
        let id = self.next_widget_id();

        let x = self.cursor.x;
        let y = self.cursor.row(BUTTON_HEIGHT);
        let w = self.cursor.w - SLIDER_MARKER_WIDTH;
        let h = SLIDER_HEIGHT;
        self.cursor.advance(SLIDER_HEIGHT + DEFAULT_SPACING);

        self.queue.push_rounded_rect(Rect::new(x, y, w, h), 4.0, palette::TRACK);

        let range = w - SLIDER_MARKER_WIDTH;
        let span = max - min;
        let mut u = ((value - min) / span).clamp(0.0, 1.0);
        let mut m = (u * range).trunc();

        let over = enabled && self.in_rect(Rect::new(x + m, y, SLIDER_MARKER_WIDTH, SLIDER_HEIGHT), true);
        self.button_logic(id, over);

        let mut out = Changed::unchanged(value);
        if self.state.is_active(id) {
            if self.state.went_active {
                self.state.drag.x = self.input.x;
                self.state.drag.origin = u;
            }
            if self.state.drag.x != self.input.x {
                u = (self.state.drag.origin + (self.input.x - self.state.drag.x) as f32 / range).clamp(0.0, 1.0);
                let snapped = snap_to_increment(min + u * span, increment);
                m = (u * range).trunc();
                out = Changed::new(snapped, snapped != value);
            }
        }

        let handle = if self.state.is_active(id) {
            palette::white(255)
        } else if self.state.is_hot(id) {
            palette::accent(128)
        } else {
            palette::white(64)
        };
        self.queue
            .push_rounded_rect(Rect::new(x + m, y, SLIDER_MARKER_WIDTH, SLIDER_HEIGHT), 4.0, handle);

        let text = format!("{:.*}", slider_precision(increment), out.value);
        let color = palette::label(enabled, self.state.is_hot(id));
        let ty = y + TEXT_OFFSET;
        self.queue.push_text(x, ty, TextAlign::Left, name, color, DEFAULT_POINT_SIZE);
        self.queue.push_text(x + w, ty, TextAlign::Right, text, color, DEFAULT_POINT_SIZE);

        out
    }
}
