//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands for one frame
//! - preserve emission order, which is the paint order (painter's algorithm)
//! - keep shape-specific payloads and push helpers isolated per shape file under `scene::shapes`

mod cmd;
mod queue;
mod scale;

mod shapes;

pub use cmd::DrawCmd;
pub use queue::CommandQueue;
pub use scale::{DEFAULT_POINT_SIZE, GEOMETRY_SCALE, POINT_SIZE_SCALE};
pub use shapes::line::LineCmd;
pub use shapes::rect::RectCmd;
pub use shapes::rounded_rect::RoundedRectCmd;
pub use shapes::scissor::ScissorCmd;
pub use shapes::text::{TextAlign, TextCmd};
pub use shapes::textured_rect::{TextureId, TexturedRectCmd, UvRect};
pub use shapes::triangle::{TriangleCmd, TriangleDir};
