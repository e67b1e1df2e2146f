/// Result of a widget that edits a caller-owned value.
///
/// The caller passes the current value in and stores `value` back; `changed`
/// tells whether it differs from what was passed in.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Changed<T> {
    pub value: T,
    pub changed: bool,
}

impl<T> Changed<T> {
    #[inline]
    pub const fn new(value: T, changed: bool) -> Self {
        Self { value, changed }
    }

    #[inline]
    pub const fn unchanged(value: T) -> Self {
        Self { value, changed: false }
    }
}
