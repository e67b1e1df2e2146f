use crate::paint::PackedColor;
use crate::scene::{CommandQueue, DrawCmd, POINT_SIZE_SCALE};

/// Horizontal anchoring of a text run relative to its `x` coordinate.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Text draw payload.
///
/// `x`/`y` are stored at 1:1 scale (baseline-left of the anchor in y-up
/// space); `point_size` is stored multiplied by [`POINT_SIZE_SCALE`].
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub x: f32,
    pub y: f32,
    pub align: TextAlign,
    pub text: String,
    pub color: PackedColor,
    pub point_size: f32,
}

impl TextCmd {
    /// Point size in points.
    #[inline]
    pub fn size(&self) -> f32 {
        self.point_size / POINT_SIZE_SCALE
    }
}

impl CommandQueue {
    /// Records a text draw command.
    pub fn push_text(
        &mut self,
        x: f32,
        y: f32,
        align: TextAlign,
        text: impl Into<String>,
        color: PackedColor,
        point_size: f32,
    ) {
        self.push(DrawCmd::Text(TextCmd {
            x,
            y,
            align,
            text: text.into(),
            color,
            point_size: point_size * POINT_SIZE_SCALE,
        }));
    }
}
