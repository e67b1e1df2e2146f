//! Fixed widget colors.

use vellum_engine::paint::{rgba, PackedColor};

pub(crate) const PANEL: PackedColor = rgba(50, 50, 50, 192);
pub(crate) const TITLE: PackedColor = rgba(255, 255, 255, 128);
pub(crate) const TEXT: PackedColor = rgba(255, 255, 255, 200);
pub(crate) const TEXT_STRONG: PackedColor = rgba(255, 255, 255, 255);
pub(crate) const TEXT_DISABLED: PackedColor = rgba(128, 128, 128, 200);
pub(crate) const HOT_TEXT: PackedColor = rgba(255, 196, 0, 255);
pub(crate) const SEPARATOR: PackedColor = rgba(255, 255, 255, 32);
pub(crate) const TRACK: PackedColor = rgba(255, 255, 255, 32);
pub(crate) const SCROLL_TRACK: PackedColor = rgba(0, 0, 0, 196);

#[inline]
pub(crate) const fn grey(a: u8) -> PackedColor {
    rgba(128, 128, 128, a)
}

#[inline]
pub(crate) const fn white(a: u8) -> PackedColor {
    rgba(255, 255, 255, a)
}

#[inline]
pub(crate) const fn accent(a: u8) -> PackedColor {
    rgba(255, 196, 0, a)
}

/// Label color for an interactive widget.
#[inline]
pub(crate) fn label(enabled: bool, hot: bool) -> PackedColor {
    match (enabled, hot) {
        (false, _) => TEXT_DISABLED,
        (true, true) => HOT_TEXT,
        (true, false) => TEXT,
    }
}
