use vellum_engine::coords::Rect;
use vellum_engine::input::InputSnapshot;
use vellum_engine::scene::{CommandQueue, DrawCmd};

use crate::id::WidgetId;
use crate::input::PointerInput;
use crate::layout::LayoutCursor;
use crate::scroll::ScrollArea;
use crate::state::InteractionState;

/// Area index every frame starts with. Scroll areas count up from here.
const FIRST_AREA: u32 = 1;

/// The immediate-mode UI engine.
///
/// One instance owns the interaction state, layout cursor and command queue
/// for one independent UI. A frame is `begin_frame`, any number of widget and
/// draw calls, then `end_frame`; the queue can be read until the next
/// `begin_frame`.
///
/// Not reentrant: widget calls outside a frame, nested scroll areas and
/// unbalanced indentation produce undefined layout, not errors.
#[derive(Debug, Default)]
pub struct Ui {
    pub(crate) input: PointerInput,
    pub(crate) state: InteractionState,
    pub(crate) cursor: LayoutCursor,
    pub(crate) queue: CommandQueue,
    pub(crate) scroll: Option<ScrollArea>,
    /// Pointer is inside the scroll area currently open; gates widget hit tests.
    pub(crate) inside_current_scroll: bool,
    area_id: u32,
    widget_id: u32,
    last_id: WidgetId,
}

impl Ui {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a frame: snapshots input, latches `hot`, resets layout and ids,
    /// and clears the command queue.
    pub fn begin_frame(&mut self, input: InputSnapshot) {
        self.input.update(input);
        self.state.begin_frame();

        debug_assert!(self.scroll.is_none(), "scroll area left open across frames");
        self.scroll = None;
        self.inside_current_scroll = false;

        self.cursor = LayoutCursor::default();
        self.area_id = FIRST_AREA;
        self.widget_id = 1;
        self.last_id = WidgetId::NONE;

        self.queue.clear();
    }

    /// Ends a frame. Press/release edges and the wheel delta do not carry over.
    pub fn end_frame(&mut self) {
        debug_assert!(self.scroll.is_none(), "end_frame inside an open scroll area");
        self.input.clear_edges();
    }

    // ── queries ───────────────────────────────────────────────────────────

    /// Commands emitted so far this frame, in paint order.
    #[inline]
    pub fn commands(&self) -> &[DrawCmd] {
        self.queue.items()
    }

    /// Moves this frame's commands out, leaving the queue empty.
    pub fn drain_commands(&mut self) -> Vec<DrawCmd> {
        self.queue.drain().collect()
    }

    #[inline]
    pub fn queue(&self) -> &CommandQueue {
        &self.queue
    }

    #[inline]
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    #[inline]
    pub fn input(&self) -> &PointerInput {
        &self.input
    }

    #[inline]
    pub fn cursor(&self) -> &LayoutCursor {
        &self.cursor
    }

    #[inline]
    pub fn is_hot(&self, id: WidgetId) -> bool {
        self.state.is_hot(id)
    }

    #[inline]
    pub fn is_active(&self, id: WidgetId) -> bool {
        self.state.is_active(id)
    }

    #[inline]
    pub fn any_active(&self) -> bool {
        self.state.any_active()
    }

    /// Whether a widget drawn so far this frame is hot or holds the pointer.
    ///
    /// Hosts query this after drawing the UI to decide whether the pointer
    /// belongs to the UI or to the scene behind it.
    #[inline]
    pub fn is_pointer_over_ui(&self) -> bool {
        self.state.any_hot || self.state.any_active_seen
    }

    /// Id of the most recent interactive widget, `NONE` if there was none this frame.
    #[inline]
    pub fn last_widget_id(&self) -> WidgetId {
        self.last_id
    }

    // ── internals shared by widgets ───────────────────────────────────────

    pub(crate) fn next_widget_id(&mut self) -> WidgetId {
        self.widget_id += 1;
        self.last_id = WidgetId::new(self.area_id, self.widget_id);
        self.last_id
    }

    /// Opens a new area: bumps the area index and restarts the ordinal at 0.
    /// Returns the id reserved for the area's own scrollbar.
    pub(crate) fn next_area_id(&mut self) -> WidgetId {
        self.area_id += 1;
        self.widget_id = 0;
        WidgetId::new(self.area_id, self.widget_id)
    }

    /// Pointer hit test with closed bounds. When `check_scroll` is set the
    /// pointer must also be inside the open scroll area.
    pub(crate) fn in_rect(&self, rect: Rect, check_scroll: bool) -> bool {
        (!check_scroll || self.inside_current_scroll) && rect.contains(self.input.pos())
    }

    #[inline]
    pub(crate) fn button_logic(&mut self, id: WidgetId, over: bool) -> bool {
        self.state.button_logic(id, over, &mut self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_engine::input::MouseButtons;
    use vellum_engine::scene::TextAlign;

    fn snapshot(x: i32, y: i32, buttons: MouseButtons) -> InputSnapshot {
        InputSnapshot::new(x, y, buttons, 0)
    }

    /// Runs a mixed frame, checking the queue never shrinks between calls.
    fn busy_frame(ui: &mut Ui, input: InputSnapshot) {
        ui.begin_frame(input);
        assert!(ui.commands().is_empty());

        let mut seen = 0;
        let mut grew = |len: usize| {
            assert!(len >= seen);
            seen = len;
        };

        ui.begin_scroll_area("Panel", 0, 0, 200, 300, 0);
        grew(ui.commands().len());
        ui.button("a", true);
        grew(ui.commands().len());
        ui.check("b", true, true);
        grew(ui.commands().len());
        ui.collapse("c", "sub", true, true);
        grew(ui.commands().len());
        ui.indent(1.0);
        ui.label("d", TextAlign::Left);
        grew(ui.commands().len());
        ui.slider("e", 0.5, 0.0, 1.0, 0.1, true);
        grew(ui.commands().len());
        ui.unindent(1.0);
        ui.separator_line();
        grew(ui.commands().len());
        ui.end_scroll_area();
        grew(ui.commands().len());
        ui.draw_rect(0.0, 0.0, 1.0, 1.0, vellum_engine::paint::rgba(0, 0, 0, 255));
        grew(ui.commands().len());
        ui.end_frame();
        grew(ui.commands().len());
    }

    #[test]
    fn queue_starts_empty_and_only_grows() {
        let mut ui = Ui::new();
        busy_frame(&mut ui, snapshot(20, 250, MouseButtons::NONE));
        busy_frame(&mut ui, snapshot(20, 250, MouseButtons::PRIMARY));
        busy_frame(&mut ui, snapshot(-1, -1, MouseButtons::NONE));
    }

    #[test]
    fn ids_restart_every_frame_and_area() {
        let mut ui = Ui::new();
        for _ in 0..2 {
            ui.begin_frame(snapshot(-1, -1, MouseButtons::NONE));
            ui.begin_scroll_area("", 0, 0, 100, 100, 0);
            ui.button("x", true);
            ui.button("y", true);
            assert_eq!(ui.last_widget_id(), WidgetId::new(2, 2));
            ui.end_scroll_area();
            ui.begin_scroll_area("", 100, 0, 100, 100, 0);
            ui.item("z", true);
            assert_eq!(ui.last_widget_id(), WidgetId::new(3, 1));
            ui.end_scroll_area();
            ui.end_frame();
        }
    }

    #[test]
    fn pointer_over_ui_tracks_hot_widgets() {
        let mut ui = Ui::new();
        let frame = |ui: &mut Ui, y: i32| {
            ui.begin_frame(snapshot(20, y, MouseButtons::NONE));
            ui.begin_scroll_area("", 0, 0, 200, 70, 0);
            ui.button("a", true);
            ui.end_scroll_area();
            ui.end_frame();
        };

        frame(&mut ui, 50);
        assert!(!ui.is_pointer_over_ui());
        frame(&mut ui, 50);
        assert!(ui.is_pointer_over_ui());
        // Hot lags the pointer by one frame on the way out too.
        frame(&mut ui, 5);
        assert!(ui.is_pointer_over_ui());
        frame(&mut ui, 5);
        assert!(!ui.is_pointer_over_ui());
    }

    #[test]
    fn instances_do_not_share_state() {
        let mut a = Ui::new();
        let b = Ui::new();
        for buttons in [MouseButtons::NONE, MouseButtons::PRIMARY] {
            a.begin_frame(snapshot(20, 50, buttons));
            a.begin_scroll_area("", 0, 0, 200, 70, 0);
            a.button("a", true);
            a.end_scroll_area();
            a.end_frame();
        }
        assert!(a.any_active());
        assert!(!b.any_active());
        assert_eq!(b.state().hot, WidgetId::NONE);
    }
}
