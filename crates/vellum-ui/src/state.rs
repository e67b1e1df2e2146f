use crate::id::WidgetId;
use crate::input::PointerInput;

/// Pointer position and normalized value captured when a drag begins.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct DragAnchor {
    pub x: i32,
    pub y: i32,
    /// Normalized `[0, 1]` position of the dragged handle at capture time.
    pub origin: f32,
}

/// Hot/active bookkeeping that survives across frames.
///
/// `hot` is latched from the previous frame's `hot_to_be`, so two widgets
/// competing for the pointer within a frame never flicker: the last one drawn
/// under the pointer wins `hot_to_be`, and that becomes `hot` next frame.
///
/// Invariant: while `active` is set, only that widget can be hot or receive
/// pointer input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    /// Widget under the pointer, as decided last frame.
    pub hot: WidgetId,
    /// Candidate for `hot`, accumulated during the current frame.
    pub hot_to_be: WidgetId,
    /// Widget holding pointer capture.
    pub active: WidgetId,
    /// Some widget went active this frame.
    pub went_active: bool,
    /// Some widget reported hot this frame.
    pub any_hot: bool,
    /// Some widget was active this frame.
    pub any_active_seen: bool,
    /// `active` was taken this frame with nothing hot, so a widget drawn later
    /// under the pointer may still take it over.
    pub provisional: bool,
    pub drag: DragAnchor,
}

impl InteractionState {
    /// Latches last frame's candidate and resets per-frame flags.
    pub(crate) fn begin_frame(&mut self) {
        self.hot = self.hot_to_be;
        self.hot_to_be = WidgetId::NONE;

        self.went_active = false;
        self.any_hot = false;
        self.any_active_seen = false;
        self.provisional = false;
    }

    #[inline]
    pub fn any_active(&self) -> bool {
        !self.active.is_none()
    }

    #[inline]
    pub fn is_active(&self, id: WidgetId) -> bool {
        !id.is_none() && self.active == id
    }

    /// Hot as reported to widgets. A widget other than the active one is never hot.
    #[inline]
    pub fn is_hot(&self, id: WidgetId) -> bool {
        !id.is_none() && self.hot == id && (!self.any_active() || self.active == id)
    }

    fn set_active(&mut self, id: WidgetId) {
        log::trace!("widget {id} captured pointer");
        self.active = id;
        self.went_active = true;
    }

    fn clear_active(&mut self, input: &mut PointerInput) {
        log::trace!("widget {} released pointer", self.active);
        self.active = WidgetId::NONE;
        input.clear_edges();
    }

    /// Shared hot/active state machine for every interactive widget.
    ///
    /// `over` is whether the pointer is inside the widget's hit rectangle (and
    /// the widget is enabled). Returns `true` when the widget fires: the
    /// capture ends on this frame's release while the widget is still hot.
    ///
    /// A press captures the widget that was hot last frame. When nothing was
    /// hot (the pointer arrived and pressed within one frame), the last widget
    /// drawn under the pointer captures instead, matching who would have
    /// become hot.
    pub(crate) fn button_logic(&mut self, id: WidgetId, over: bool, input: &mut PointerInput) -> bool {
        let mut fired = false;

        if !self.any_active() {
            if over {
                self.hot_to_be = id;
            }
            if input.pressed {
                if self.hot == id {
                    self.set_active(id);
                } else if self.hot.is_none() && over {
                    self.set_active(id);
                    self.provisional = true;
                }
            }
        } else if self.provisional && over && input.pressed && self.active != id {
            log::trace!("widget {id} took over capture from {}", self.active);
            self.hot_to_be = id;
            self.set_active(id);
        }

        if self.is_active(id) {
            self.any_active_seen = true;
            if over {
                self.hot_to_be = id;
            }
            if input.released {
                if self.hot == id {
                    fired = true;
                }
                // Capture always ends on release, wherever the pointer is.
                self.clear_active(input);
            }
        }

        if self.is_hot(id) {
            self.any_hot = true;
        }

        fired
    }
}
