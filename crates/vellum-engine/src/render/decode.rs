use crate::coords::{Rect, Vec2};
use crate::paint::PackedColor;
use crate::scene::{DrawCmd, ScissorCmd, TextAlign, TextureId, UvRect};

/// A draw command with every field converted back to caller units.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenCmd<'a> {
    Rect { rect: Rect, color: PackedColor },
    RoundedRect { rect: Rect, radius: f32, color: PackedColor },
    Line { from: Vec2, to: Vec2, thickness: f32, color: PackedColor },
    Triangle { vertices: [Vec2; 3], color: PackedColor },
    Text { x: f32, y: f32, align: TextAlign, text: &'a str, color: PackedColor, point_size: f32 },
    /// `None` disables clipping.
    Scissor(Option<Rect>),
    TexturedRect { rect: Rect, color: PackedColor, texture: TextureId, uv: UvRect },
}

/// Undoes the storage scaling of a command.
///
/// Geometry is divided by `GEOMETRY_SCALE`, text point size by
/// `POINT_SIZE_SCALE`; text positions and scissor rectangles pass through.
pub fn decode(cmd: &DrawCmd) -> ScreenCmd<'_> {
    match cmd {
        DrawCmd::Rect(c) => ScreenCmd::Rect { rect: c.bounds(), color: c.color },
        DrawCmd::RoundedRect(c) => ScreenCmd::RoundedRect {
            rect: c.bounds(),
            radius: c.corner_radius(),
            color: c.color,
        },
        DrawCmd::Line(c) => {
            let (from, to) = c.endpoints();
            ScreenCmd::Line { from, to, thickness: c.width(), color: c.color }
        }
        DrawCmd::Triangle(c) => ScreenCmd::Triangle { vertices: c.vertices(), color: c.color },
        DrawCmd::Text(c) => ScreenCmd::Text {
            x: c.x,
            y: c.y,
            align: c.align,
            text: &c.text,
            color: c.color,
            point_size: c.size(),
        },
        DrawCmd::Scissor(ScissorCmd::On(rect)) => ScreenCmd::Scissor(Some(*rect)),
        DrawCmd::Scissor(ScissorCmd::Off) => ScreenCmd::Scissor(None),
        DrawCmd::TexturedRect(c) => ScreenCmd::TexturedRect {
            rect: c.bounds(),
            color: c.color,
            texture: c.texture,
            uv: c.uv,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::rgba;
    use crate::scene::CommandQueue;

    #[test]
    fn decodes_every_variant_to_caller_units() {
        let white = rgba(255, 255, 255, 255);
        let mut q = CommandQueue::new();
        q.push_rect(Rect::new(1.0, 2.0, 3.0, 4.0), white);
        q.push_rounded_rect(Rect::new(1.0, 2.0, 3.0, 4.0), 1.5, white);
        q.push_line(Vec2::new(0.0, 0.0), Vec2::new(10.0, 5.0), 2.0, white);
        q.push_text(5.0, 6.0, TextAlign::Right, "t", white, 12.0);
        q.push_scissor(Rect::new(3.0, 3.0, 50.0, 60.0));
        q.push_scissor_off();
        q.push_textured_rect(Rect::new(0.0, 0.0, 4.0, 4.0), white, TextureId(3), UvRect::full());

        let out: Vec<_> = q.items().iter().map(decode).collect();
        assert_eq!(out[0], ScreenCmd::Rect { rect: Rect::new(1.0, 2.0, 3.0, 4.0), color: white });
        assert_eq!(
            out[1],
            ScreenCmd::RoundedRect { rect: Rect::new(1.0, 2.0, 3.0, 4.0), radius: 1.5, color: white }
        );
        assert_eq!(
            out[2],
            ScreenCmd::Line {
                from: Vec2::new(0.0, 0.0),
                to: Vec2::new(10.0, 5.0),
                thickness: 2.0,
                color: white,
            }
        );
        assert_eq!(
            out[3],
            ScreenCmd::Text { x: 5.0, y: 6.0, align: TextAlign::Right, text: "t", color: white, point_size: 12.0 }
        );
        assert_eq!(out[4], ScreenCmd::Scissor(Some(Rect::new(3.0, 3.0, 50.0, 60.0))));
        assert_eq!(out[5], ScreenCmd::Scissor(None));
        assert_eq!(
            out[6],
            ScreenCmd::TexturedRect {
                rect: Rect::new(0.0, 0.0, 4.0, 4.0),
                color: white,
                texture: TextureId(3),
                uv: UvRect::full(),
            }
        );
    }
}
