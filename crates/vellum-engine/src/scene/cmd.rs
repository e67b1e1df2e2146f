use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::rect::RectCmd;
use crate::scene::shapes::rounded_rect::RoundedRectCmd;
use crate::scene::shapes::scissor::ScissorCmd;
use crate::scene::shapes::text::TextCmd;
use crate::scene::shapes::textured_rect::TexturedRectCmd;
use crate::scene::shapes::triangle::TriangleCmd;

/// Renderer-agnostic draw command.
///
/// Geometry of every variant except `Text` and `Scissor` is stored multiplied by
/// [`GEOMETRY_SCALE`](super::GEOMETRY_SCALE); renderers go through
/// [`render::decode`](crate::render::decode) to get caller units back.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - add a matching arm to `render::decode`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    RoundedRect(RoundedRectCmd),
    Line(LineCmd),
    Triangle(TriangleCmd),
    Text(TextCmd),
    Scissor(ScissorCmd),
    TexturedRect(TexturedRectCmd),
}

impl DrawCmd {
    /// Short lowercase name of the variant, used in logs and text dumps.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCmd::Rect(_) => "rect",
            DrawCmd::RoundedRect(_) => "rounded_rect",
            DrawCmd::Line(_) => "line",
            DrawCmd::Triangle(_) => "triangle",
            DrawCmd::Text(_) => "text",
            DrawCmd::Scissor(_) => "scissor",
            DrawCmd::TexturedRect(_) => "textured_rect",
        }
    }
}
