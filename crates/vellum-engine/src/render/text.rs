use std::io::Write;

use crate::coords::{Rect, Vec2, Viewport};
use crate::scene::DrawCmd;

use super::{decode, ClipState, Renderer, ScreenCmd};

/// Renderer that prints one line per decoded command.
///
/// Handy for headless hosts, golden tests and debugging layout: every line
/// carries the command index, kind and caller-unit geometry. Commands that the
/// active scissor fully hides are marked `(clipped)`.
pub struct TextRenderer<W: Write> {
    out: W,
    frames: u64,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    /// Number of frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, commands: &[DrawCmd], viewport: Viewport) -> anyhow::Result<()> {
        anyhow::ensure!(
            viewport.is_valid(),
            "invalid viewport {}x{}",
            viewport.width,
            viewport.height
        );
        writeln!(
            self.out,
            "frame {} viewport {}x{} commands {}",
            self.frames,
            viewport.width,
            viewport.height,
            commands.len()
        )?;

        let mut clip = ClipState::new();
        for (i, cmd) in commands.iter().enumerate() {
            clip.apply(cmd);
            let screen = decode(cmd);
            let line = describe(&screen);
            let hidden = bounds_of(&screen).is_some_and(|b| !clip.is_visible(b));
            if hidden {
                writeln!(self.out, "{i:04} {:<13} {line} (clipped)", cmd.kind())?;
            } else {
                writeln!(self.out, "{i:04} {:<13} {line}", cmd.kind())?;
            }
        }

        self.out.flush()?;
        self.frames += 1;
        Ok(())
    }
}

fn rect_str(r: Rect) -> String {
    format!("x={} y={} w={} h={}", r.origin.x, r.origin.y, r.size.x, r.size.y)
}

fn describe(cmd: &ScreenCmd<'_>) -> String {
    match cmd {
        ScreenCmd::Rect { rect, color } => format!("{} {color:?}", rect_str(*rect)),
        ScreenCmd::RoundedRect { rect, radius, color } => {
            format!("{} r={radius} {color:?}", rect_str(*rect))
        }
        ScreenCmd::Line { from, to, thickness, color } => format!(
            "({}, {}) -> ({}, {}) t={thickness} {color:?}",
            from.x, from.y, to.x, to.y
        ),
        ScreenCmd::Triangle { vertices, color } => {
            let [a, b, c] = vertices;
            format!("({}, {}) ({}, {}) ({}, {}) {color:?}", a.x, a.y, b.x, b.y, c.x, c.y)
        }
        ScreenCmd::Text { x, y, align, text, color, point_size } => {
            format!("x={x} y={y} {align:?} {point_size}pt {text:?} {color:?}")
        }
        ScreenCmd::Scissor(Some(rect)) => format!("on {}", rect_str(*rect)),
        ScreenCmd::Scissor(None) => "off".to_string(),
        ScreenCmd::TexturedRect { rect, color, texture, uv } => format!(
            "{} tex={} uv=({}, {})-({}, {}) {color:?}",
            rect_str(*rect),
            texture.0,
            uv.u0,
            uv.v0,
            uv.u1,
            uv.v1
        ),
    }
}

/// Approximate screen footprint used for clip culling. Text has no known
/// extent without a font, so it is never reported as clipped.
fn bounds_of(cmd: &ScreenCmd<'_>) -> Option<Rect> {
    match cmd {
        ScreenCmd::Rect { rect, .. }
        | ScreenCmd::RoundedRect { rect, .. }
        | ScreenCmd::TexturedRect { rect, .. } => Some(*rect),
        ScreenCmd::Line { from, to, thickness, .. } => {
            let b = hull(&[*from, *to]);
            let pad = Vec2::new(*thickness, *thickness);
            Some(Rect::from_origin_size(b.origin - pad, b.size + pad * 2.0))
        }
        ScreenCmd::Triangle { vertices, .. } => Some(hull(vertices)),
        ScreenCmd::Text { .. } | ScreenCmd::Scissor(_) => None,
    }
}

fn hull(points: &[Vec2]) -> Rect {
    let mut min = Vec2::new(f32::MAX, f32::MAX);
    let mut max = Vec2::new(f32::MIN, f32::MIN);
    for p in points {
        min = Vec2::new(min.x.min(p.x), min.y.min(p.y));
        max = Vec2::new(max.x.max(p.x), max.y.max(p.y));
    }
    Rect::from_origin_size(min, max - min)
}
