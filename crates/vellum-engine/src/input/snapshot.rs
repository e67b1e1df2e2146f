use core::ops::{BitOr, BitOrAssign};

/// Set of held mouse buttons as a bitmask.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct MouseButtons(pub u8);

impl MouseButtons {
    pub const NONE: MouseButtons = MouseButtons(0);
    pub const PRIMARY: MouseButtons = MouseButtons(0x01);
    pub const SECONDARY: MouseButtons = MouseButtons(0x02);

    #[inline]
    pub const fn contains(self, other: MouseButtons) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn primary(self) -> bool {
        self.contains(Self::PRIMARY)
    }

    #[inline]
    pub fn remove(&mut self, other: MouseButtons) {
        self.0 &= !other.0;
    }
}

impl BitOr for MouseButtons {
    type Output = MouseButtons;
    #[inline]
    fn bitor(self, rhs: MouseButtons) -> MouseButtons {
        MouseButtons(self.0 | rhs.0)
    }
}

impl BitOrAssign for MouseButtons {
    #[inline]
    fn bitor_assign(&mut self, rhs: MouseButtons) {
        self.0 |= rhs.0;
    }
}

/// Everything the UI reads from the outside world for one frame.
///
/// Coordinates are in caller units with the origin at the bottom-left (+Y up).
/// `scroll` counts wheel ticks since the previous frame; positive values move
/// toward the end of scrollable content.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct InputSnapshot {
    pub x: i32,
    pub y: i32,
    pub buttons: MouseButtons,
    pub scroll: i32,
}

impl InputSnapshot {
    #[inline]
    pub const fn new(x: i32, y: i32, buttons: MouseButtons, scroll: i32) -> Self {
        Self { x, y, buttons, scroll }
    }
}
