use core::fmt;

/// Straight-alpha RGBA packed into one word as `r | g << 8 | b << 16 | a << 24`.
///
/// This is the color representation stored in every draw command; renderers
/// convert it with `Color::from` when they need floats.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct PackedColor(pub u32);

/// Packs straight RGBA bytes into a [`PackedColor`].
#[inline]
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> PackedColor {
    PackedColor::new(r, g, b, a)
}

impl PackedColor {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((r as u32) | ((g as u32) << 8) | ((b as u32) << 16) | ((a as u32) << 24))
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 & 0xff) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xff) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        ((self.0 >> 16) & 0xff) as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }
}

impl fmt::Debug for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r(), self.g(), self.b(), self.a())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_little_end_first() {
        assert_eq!(rgba(0x11, 0x22, 0x33, 0x44).0, 0x4433_2211);
    }

    #[test]
    fn channel_accessors() {
        let c = rgba(255, 196, 0, 96);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (255, 196, 0, 96));
    }
}
