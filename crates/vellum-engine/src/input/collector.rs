use super::snapshot::{InputSnapshot, MouseButtons};
use super::types::{
    InputEvent,
    MouseButton,
    MouseButtonState,
    MouseWheelDelta,
    PointerButtonEvent,
    PointerMoveEvent,
};

/// Pixel wheel deltas are converted to ticks at this rate.
const PIXELS_PER_TICK: f32 = 20.0;

/// Accumulates input events between two frames.
///
/// Holds "is down" information and the last pointer position in window space
/// (top-left origin). [`InputCollector::take_snapshot`] converts that into the
/// y-up [`InputSnapshot`] the UI consumes and drains the wheel accumulator.
#[derive(Debug, Default)]
pub struct InputCollector {
    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in window pixels, `None` once it leaves the surface.
    pub pointer_pos: Option<(f32, f32)>,

    /// Currently held mouse buttons.
    pub buttons: MouseButtons,

    /// Wheel travel not yet handed out, in ticks. Positive scrolls toward the end.
    wheel_ticks: f32,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a platform-agnostic input event.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Avoids stuck buttons when focus changes mid-press.
                    self.buttons = MouseButtons::NONE;
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state }) => {
                let Some(mask) = button_mask(*button) else { return };
                match state {
                    MouseButtonState::Pressed => self.buttons |= mask,
                    MouseButtonState::Released => self.buttons.remove(mask),
                }
            }

            // Wheel away from the user scrolls back toward the start.
            InputEvent::MouseWheel(delta) => match delta {
                MouseWheelDelta::Line { y, .. } => self.wheel_ticks -= *y,
                MouseWheelDelta::Pixel { y, .. } => self.wheel_ticks -= *y / PIXELS_PER_TICK,
            },
        }
    }

    /// Produces this frame's snapshot.
    ///
    /// `viewport_height` flips window-space y into the UI's y-up space. Whole
    /// wheel ticks are handed out and removed; the fractional remainder carries
    /// over to the next frame.
    pub fn take_snapshot(&mut self, viewport_height: f32) -> InputSnapshot {
        let (x, y) = match self.pointer_pos {
            Some((px, py)) => (px.round() as i32, (viewport_height - py).round() as i32),
            None => (-1, -1),
        };

        let ticks = self.wheel_ticks.trunc();
        self.wheel_ticks -= ticks;

        InputSnapshot::new(x, y, self.buttons, ticks as i32)
    }

    pub fn button_down(&self, mask: MouseButtons) -> bool {
        self.buttons.contains(mask)
    }
}

fn button_mask(button: MouseButton) -> Option<MouseButtons> {
    match button {
        MouseButton::Left => Some(MouseButtons::PRIMARY),
        MouseButton::Right => Some(MouseButtons::SECONDARY),
        MouseButton::Middle | MouseButton::Other(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(button: MouseButton) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent { button, state: MouseButtonState::Pressed })
    }

    fn release(button: MouseButton) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent { button, state: MouseButtonState::Released })
    }

    #[test]
    fn flips_y_against_viewport_height() {
        let mut c = InputCollector::new();
        c.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 10.0, y: 30.0 }));
        let s = c.take_snapshot(100.0);
        assert_eq!((s.x, s.y), (10, 70));
    }

    #[test]
    fn pointer_left_reports_off_surface() {
        let mut c = InputCollector::new();
        c.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 10.0, y: 30.0 }));
        c.apply_event(&InputEvent::PointerLeft);
        let s = c.take_snapshot(100.0);
        assert_eq!((s.x, s.y), (-1, -1));
    }

    #[test]
    fn buttons_track_press_and_release() {
        let mut c = InputCollector::new();
        c.apply_event(&press(MouseButton::Left));
        c.apply_event(&press(MouseButton::Middle));
        assert!(c.take_snapshot(0.0).buttons.primary());
        c.apply_event(&release(MouseButton::Left));
        assert_eq!(c.take_snapshot(0.0).buttons, MouseButtons::NONE);
    }

    #[test]
    fn focus_loss_releases_buttons() {
        let mut c = InputCollector::new();
        c.apply_event(&press(MouseButton::Left));
        c.apply_event(&InputEvent::Focused(false));
        assert!(!c.button_down(MouseButtons::PRIMARY));
    }

    #[test]
    fn wheel_ticks_drain_and_keep_remainder() {
        let mut c = InputCollector::new();
        c.apply_event(&InputEvent::MouseWheel(MouseWheelDelta::Line { x: 0.0, y: -2.0 }));
        c.apply_event(&InputEvent::MouseWheel(MouseWheelDelta::Pixel { x: 0.0, y: -10.0 }));
        assert_eq!(c.take_snapshot(0.0).scroll, 2);
        assert_eq!(c.take_snapshot(0.0).scroll, 0);
        c.apply_event(&InputEvent::MouseWheel(MouseWheelDelta::Pixel { x: 0.0, y: -10.0 }));
        assert_eq!(c.take_snapshot(0.0).scroll, 1);
    }

    #[test]
    fn wheel_away_from_user_scrolls_toward_start() {
        let mut c = InputCollector::new();
        c.apply_event(&InputEvent::MouseWheel(MouseWheelDelta::Line { x: 0.0, y: 3.0 }));
        assert_eq!(c.take_snapshot(0.0).scroll, -3);
    }
}
