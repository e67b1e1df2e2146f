//! Layout metrics and the implicit vertical cursor.
//!
//! Widgets stack downward in y-up space: each call reads the cursor, places
//! itself just below it, and moves the cursor down by its height plus spacing.

pub const BUTTON_HEIGHT: f32 = 16.0;
pub const SLIDER_HEIGHT: f32 = 16.0;
pub const SLIDER_MARKER_WIDTH: f32 = 8.0;
pub const CHECK_SIZE: f32 = 8.0;
pub const DEFAULT_SPACING: f32 = 2.0;
pub const TEXT_HEIGHT: f32 = 8.0;
pub const SCROLL_AREA_PADDING: f32 = 3.0;
pub const INDENT_SIZE: f32 = 16.0;
pub const AREA_HEADER: f32 = 20.0;
/// Scroll offset change per wheel tick.
pub const WHEEL_STEP: i32 = 20;

/// Vertical offset from a row's bottom edge to its text baseline.
pub(crate) const TEXT_OFFSET: f32 = BUTTON_HEIGHT / 2.0 - TEXT_HEIGHT / 2.0;

/// Write position for the next widget.
///
/// `y` is the top edge of the next row. Indentation shifts `x` right and
/// shrinks `w` by the same amount.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct LayoutCursor {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    /// Total indentation currently applied, in units.
    pub indent: f32,
}

impl LayoutCursor {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32) -> Self {
        Self { x, y, w, indent: 0.0 }
    }

    /// Bottom edge of a row of `height` placed at the cursor.
    #[inline]
    pub fn row(&self, height: f32) -> f32 {
        self.y - height
    }

    /// Moves the cursor down by `amount`.
    #[inline]
    pub fn advance(&mut self, amount: f32) {
        self.y -= amount;
    }

    pub fn indent(&mut self, amount: f32) {
        self.x += amount;
        self.w -= amount;
        self.indent += amount;
    }

    pub fn unindent(&mut self, amount: f32) {
        debug_assert!(
            self.indent - amount > -1e-3,
            "unindent without matching indent (indent {}, unindent {amount})",
            self.indent
        );
        self.x -= amount;
        self.w += amount;
        self.indent -= amount;
    }
}
