use core::fmt;

/// Positional widget identity: `(area << 16) | ordinal`.
///
/// Ids are rebuilt every frame from call order. The area part counts scroll
/// areas opened so far in the frame, the ordinal counts widgets inside the
/// current area. Reordering widget calls therefore reassigns identities.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct WidgetId(pub u32);

impl WidgetId {
    /// No widget. Used for "nothing hot" / "nothing active".
    pub const NONE: WidgetId = WidgetId(0);

    #[inline]
    pub const fn new(area: u32, ordinal: u32) -> Self {
        Self((area << 16) | ordinal)
    }

    #[inline]
    pub const fn area(self) -> u32 {
        self.0 >> 16
    }

    #[inline]
    pub const fn ordinal(self) -> u32 {
        self.0 & 0xffff
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.area(), self.ordinal())
    }
}
