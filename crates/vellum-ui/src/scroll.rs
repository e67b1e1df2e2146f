//! Scroll areas: a clipped panel whose content is offset by a caller-owned
//! scroll value, with a draggable scrollbar and wheel support.

use vellum_engine::coords::Rect;
use vellum_engine::scene::TextAlign;
use vellum_engine::scene::DEFAULT_POINT_SIZE;

use crate::id::WidgetId;
use crate::layout::{
    LayoutCursor,
    AREA_HEADER,
    SCROLL_AREA_PADDING,
    TEXT_HEIGHT,
    WHEEL_STEP,
};
use crate::palette;
use crate::response::Changed;
use crate::ui::Ui;

/// Bookkeeping for the scroll area currently open.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScrollArea {
    /// Id of the scrollbar handle (ordinal 0 of the area).
    pub id: WidgetId,
    /// Offset passed to `begin_scroll_area`.
    pub offset: i32,
    /// Top edge of the visible viewport.
    pub top: f32,
    /// Bottom edge of the visible viewport.
    pub bottom: f32,
    /// Left edge of the scrollbar gutter, minus padding.
    pub right: f32,
    /// Cursor y where content started; content height is measured from here.
    pub content_top: f32,
    /// Pointer was inside the area at `begin`.
    pub inside: bool,
}

impl ScrollArea {
    #[inline]
    pub fn viewport_height(&self) -> f32 {
        self.top - self.bottom
    }
}

/// Clamps a scroll offset to `[0, max(0, content_height - viewport_height)]`.
pub fn clamp_scroll(offset: i32, content_height: f32, viewport_height: f32) -> i32 {
    let max = (content_height - viewport_height).max(0.0) as i32;
    offset.clamp(0, max)
}

impl Ui {
    /// Opens a scroll area with its bottom-left corner at `(x, y)`.
    ///
    /// Content starts below the title (if `name` is non-empty) shifted up by
    /// `offset`. Returns whether the pointer is inside the area. Areas do not
    /// nest; close each one with [`Ui::end_scroll_area`] before opening the next.
    pub fn begin_scroll_area(&mut self, name: &str, x: i32, y: i32, w: i32, h: i32, offset: i32) -> bool {
        debug_assert!(self.scroll.is_none(), "nested scroll areas are not supported");

        let (x, y, w, h) = (x as f32, y as f32, w as f32, h as f32);
        let header = if name.is_empty() { SCROLL_AREA_PADDING + 2.0 } else { AREA_HEADER };

        let id = self.next_area_id();

        self.cursor = LayoutCursor::new(
            x + SCROLL_AREA_PADDING,
            y + h - header + offset as f32,
            w - SCROLL_AREA_PADDING * 2.0,
        );

        let inside = self.in_rect(Rect::new(x, y, w, h), false);
        self.inside_current_scroll = inside;

        self.scroll = Some(ScrollArea {
            id,
            offset,
            top: y - header + h,
            bottom: y + SCROLL_AREA_PADDING,
            right: x + w - SCROLL_AREA_PADDING * 3.0,
            content_top: self.cursor.y,
            inside,
        });

        self.queue.push_rounded_rect(Rect::new(x, y, w, h), 6.0, palette::PANEL);

        if !name.is_empty() {
            self.queue.push_text(
                x + (header / 2.0).trunc(),
                y + h - (header / 2.0).trunc() - TEXT_HEIGHT / 2.0,
                TextAlign::Left,
                name,
                palette::TITLE,
                DEFAULT_POINT_SIZE,
            );
        }

        self.queue.push_scissor(Rect::new(
            x + SCROLL_AREA_PADDING,
            y + SCROLL_AREA_PADDING,
            w - SCROLL_AREA_PADDING * 2.0,
            h - header - SCROLL_AREA_PADDING,
        ));

        inside
    }

    /// Closes the open scroll area and returns the clamped scroll offset.
    ///
    /// When the content overflows the viewport a scrollbar is drawn; dragging
    /// its handle or turning the wheel over the area (while nothing else holds
    /// the pointer) moves the offset. When the content fits, the offset is 0.
    pub fn end_scroll_area(&mut self) -> Changed<i32> {
        self.queue.push_scissor_off();

        let Some(area) = self.scroll.take() else {
            debug_assert!(false, "end_scroll_area without begin_scroll_area");
            return Changed::unchanged(0);
        };

        let x = area.right + SCROLL_AREA_PADDING;
        let y = area.bottom;
        let w = SCROLL_AREA_PADDING * 2.0;
        let h = area.viewport_height();

        let content_height = area.content_top - self.cursor.y;
        let bar_height = h / content_height;

        let mut offset = area.offset;

        if bar_height < 1.0 {
            let bar_y = ((y - self.cursor.y) / content_height).clamp(0.0, 1.0);

            let id = area.id;
            let hx = x;
            let hy = y + (bar_y * h).trunc();
            let hw = w;
            let hh = (bar_height * h).trunc();

            let range = h - (hh - 1.0);
            let over = self.in_rect(Rect::new(hx, hy, hw, hh), true);
            self.button_logic(id, over);

            if self.state.is_active(id) {
                let mut u = (hy - y) / range;
                if self.state.went_active {
                    log::debug!("scrollbar {id} drag started at y={}", self.input.y);
                    self.state.drag.y = self.input.y;
                    self.state.drag.origin = u;
                }
                if self.state.drag.y != self.input.y {
                    u = self.state.drag.origin + (self.input.y - self.state.drag.y) as f32 / range;
                    u = u.clamp(0.0, 1.0);
                    offset = ((1.0 - u) * (content_height - h)) as i32;
                }
            }

            let radius = w / 2.0 - 1.0;
            self.queue.push_rounded_rect(Rect::new(x, y, w, h), radius, palette::SCROLL_TRACK);

            let handle_color = if self.state.is_active(id) {
                palette::accent(196)
            } else if self.state.is_hot(id) {
                palette::accent(96)
            } else {
                palette::white(64)
            };
            self.queue.push_rounded_rect(Rect::new(hx, hy, hw, hh), radius, handle_color);

            if area.inside && !self.state.any_active() && self.input.scroll != 0 {
                offset += WHEEL_STEP * self.input.scroll;
            }

            let clamped = clamp_scroll(offset, content_height, h);
            if clamped != offset {
                log::trace!("scroll offset {offset} clamped to {clamped}");
            }
            offset = clamped;
        } else {
            offset = 0;
        }

        self.inside_current_scroll = false;

        Changed::new(offset, offset != area.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_engine::input::{InputSnapshot, MouseButtons};
    use vellum_engine::scene::{DrawCmd, ScissorCmd};

    fn idle(x: i32, y: i32) -> InputSnapshot {
        InputSnapshot::new(x, y, MouseButtons::NONE, 0)
    }

    /// An untitled area whose viewport is exactly 400 tall, holding 1000 units of content.
    fn tall_area(ui: &mut Ui, offset: i32) -> Changed<i32> {
        // header 5 + padding 3 + viewport 400
        ui.begin_scroll_area("", 0, 0, 200, 408, offset);
        for _ in 0..62 {
            ui.label("row", TextAlign::Left);
        }
        ui.separator_line();
        ui.end_scroll_area()
    }

    #[test]
    fn clamp_scroll_bounds() {
        assert_eq!(clamp_scroll(10_000, 1000.0, 400.0), 600);
        assert_eq!(clamp_scroll(-50, 1000.0, 400.0), 0);
        assert_eq!(clamp_scroll(250, 1000.0, 400.0), 250);
        assert_eq!(clamp_scroll(30, 300.0, 400.0), 0);
    }

    #[test]
    fn end_clamps_offset_past_content() {
        let mut ui = Ui::new();
        ui.begin_frame(idle(-1, -1));
        let res = tall_area(&mut ui, 10_000);
        assert_eq!(res, Changed::new(600, true));

        ui.begin_frame(idle(-1, -1));
        assert_eq!(tall_area(&mut ui, -50), Changed::new(0, true));
        ui.end_frame();
    }

    #[test]
    fn content_that_fits_forces_zero_and_draws_no_scrollbar() {
        let mut ui = Ui::new();
        ui.begin_frame(idle(-1, -1));
        ui.begin_scroll_area("Panel", 0, 0, 200, 300, 40);
        ui.label("only row", TextAlign::Left);
        let before = ui.commands().len();
        let res = ui.end_scroll_area();
        ui.end_frame();

        assert_eq!(res, Changed::new(0, true));
        // Only the scissor-off command was added by `end`.
        assert_eq!(ui.commands().len(), before + 1);
        assert_eq!(ui.commands().last(), Some(&DrawCmd::Scissor(ScissorCmd::Off)));
    }

    #[test]
    fn begin_emits_background_title_and_scissor() {
        let mut ui = Ui::new();
        ui.begin_frame(idle(50, 50));
        let inside = ui.begin_scroll_area("Title", 10, 10, 100, 200, 0);
        assert!(inside);

        let kinds: Vec<_> = ui.commands().iter().map(DrawCmd::kind).collect();
        assert_eq!(kinds, ["rounded_rect", "text", "scissor"]);
        assert_eq!(
            ui.commands()[2],
            DrawCmd::Scissor(ScissorCmd::On(Rect::new(13.0, 13.0, 94.0, 177.0)))
        );
        ui.end_scroll_area();
        ui.end_frame();
    }

    #[test]
    fn untitled_area_skips_title_text() {
        let mut ui = Ui::new();
        ui.begin_frame(idle(500, 500));
        assert!(!ui.begin_scroll_area("", 10, 10, 100, 200, 0));
        let kinds: Vec<_> = ui.commands().iter().map(DrawCmd::kind).collect();
        assert_eq!(kinds, ["rounded_rect", "scissor"]);
        ui.end_scroll_area();
        ui.end_frame();
    }

    #[test]
    fn wheel_moves_offset_when_pointer_inside() {
        let mut ui = Ui::new();
        ui.begin_frame(InputSnapshot::new(100, 200, MouseButtons::NONE, 3));
        let res = tall_area(&mut ui, 0);
        ui.end_frame();
        assert_eq!(res, Changed::new(60, true));

        // Outside the area the wheel is ignored.
        ui.begin_frame(InputSnapshot::new(900, 200, MouseButtons::NONE, 3));
        assert_eq!(tall_area(&mut ui, 60), Changed::unchanged(60));
        ui.end_frame();
    }

    #[test]
    fn scrollbar_id_is_ordinal_zero_of_its_area() {
        let mut ui = Ui::new();
        ui.begin_frame(idle(-1, -1));
        ui.begin_scroll_area("", 0, 0, 100, 100, 0);
        assert_eq!(ui.scroll.map(|a| a.id), Some(WidgetId::new(2, 0)));
        assert!(!ui.button("first", true));
        assert_eq!(ui.last_widget_id(), WidgetId::new(2, 1));
        ui.end_scroll_area();
        ui.end_frame();
    }

    #[test]
    fn dragging_scrollbar_handle_scrolls_content() {
        let mut ui = Ui::new();
        // Scrollbar gutter sits at x in [194, 200]; the handle starts at the top.
        let grab = (197, 395);

        ui.begin_frame(idle(grab.0, grab.1));
        tall_area(&mut ui, 0);
        ui.end_frame();

        ui.begin_frame(InputSnapshot::new(grab.0, grab.1, MouseButtons::PRIMARY, 0));
        assert_eq!(tall_area(&mut ui, 0), Changed::unchanged(0));
        ui.end_frame();
        assert!(ui.any_active());

        ui.begin_frame(InputSnapshot::new(grab.0, grab.1 - 100, MouseButtons::PRIMARY, 0));
        let res = tall_area(&mut ui, 0);
        ui.end_frame();
        assert!(res.changed);
        assert!(res.value > 0 && res.value <= 600);

        ui.begin_frame(idle(grab.0, grab.1 - 100));
        tall_area(&mut ui, res.value);
        ui.end_frame();
        assert!(!ui.any_active());
    }
    #[test]
    fn wheel_is_ignored_while_a_widget_holds_the_pointer() {
        let mut ui = Ui::new();
        let run = |ui: &mut Ui, buttons: MouseButtons, scroll: i32| {
            ui.begin_frame(InputSnapshot::new(50, 395, buttons, scroll));
            ui.begin_scroll_area("", 0, 0, 200, 408, 0);
            ui.button("hold", true);
            for _ in 0..62 {
                ui.label("row", TextAlign::Left);
            }
            let res = ui.end_scroll_area();
            ui.end_frame();
            res
        };

        run(&mut ui, MouseButtons::NONE, 0);
        run(&mut ui, MouseButtons::PRIMARY, 0);
        assert!(ui.any_active());
        assert_eq!(run(&mut ui, MouseButtons::PRIMARY, 3), Changed::unchanged(0));
    }

    #[test]
    fn wheel_toward_start_clamps_at_zero() {
        let mut ui = Ui::new();
        ui.begin_frame(InputSnapshot::new(100, 200, MouseButtons::NONE, -3));
        assert_eq!(tall_area(&mut ui, 20), Changed::new(0, true));
        ui.end_frame();
    }

    /// Sixty items; the first one lies under the top of the scrollbar handle.
    fn item_list(ui: &mut Ui, buttons: MouseButtons) -> bool {
        ui.begin_frame(InputSnapshot::new(195, 395, buttons, 0));
        ui.begin_scroll_area("", 0, 0, 200, 408, 0);
        let first = ui.item("item 0", true);
        for i in 1..60 {
            ui.item(&format!("item {i}"), true);
        }
        ui.end_scroll_area();
        ui.end_frame();
        first
    }

    #[test]
    fn press_on_arrival_grabs_the_handle_drawn_on_top() {
        let handle = WidgetId::new(2, 0);

        let mut arrived = Ui::new();
        item_list(&mut arrived, MouseButtons::PRIMARY);
        assert_eq!(arrived.state().active, handle);
        assert!(!item_list(&mut arrived, MouseButtons::NONE));

        let mut hovered = Ui::new();
        item_list(&mut hovered, MouseButtons::NONE);
        item_list(&mut hovered, MouseButtons::PRIMARY);
        assert_eq!(hovered.state().active, handle);
        assert!(!item_list(&mut hovered, MouseButtons::NONE));
    }
}
