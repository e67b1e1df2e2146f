use vellum_engine::coords::Vec2;
use vellum_engine::input::InputSnapshot;

/// Pointer state for the current frame, with edges derived from the previous one.
///
/// `pressed`, `released` and `scroll` are single-frame events: they are
/// cleared by `Ui::end_frame` and when a capture ends.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PointerInput {
    pub x: i32,
    pub y: i32,
    /// Primary button held this frame.
    pub held: bool,
    /// Primary button went down this frame.
    pub pressed: bool,
    /// Primary button went up this frame.
    pub released: bool,
    /// Wheel ticks since the previous frame.
    pub scroll: i32,
}

impl PointerInput {
    /// Overwrites the snapshot and derives press/release edges against the
    /// previous frame's `held`.
    pub(crate) fn update(&mut self, snapshot: InputSnapshot) {
        let held = snapshot.buttons.primary();

        self.x = snapshot.x;
        self.y = snapshot.y;
        self.pressed = held && !self.held;
        self.released = !held && self.held;
        self.held = held;
        self.scroll = snapshot.scroll;
    }

    /// Drops the single-frame events.
    #[inline]
    pub(crate) fn clear_edges(&mut self) {
        self.pressed = false;
        self.released = false;
        self.scroll = 0;
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}
