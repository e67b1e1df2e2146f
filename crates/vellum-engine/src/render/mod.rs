//! Contract between the command queue and an external renderer.
//!
//! The engine never talks to a graphics API. A backend implements [`Renderer`],
//! walks the queue in order, decodes each command back into caller units with
//! [`decode`], and tracks the single scissor rectangle with [`ClipState`].
//!
//! Convention:
//! - decoded geometry is in caller units, y-up, origin bottom-left
//! - backends soften edges by about one pixel and flip y with the viewport height

mod clip;
mod decode;
mod text;

pub use clip::ClipState;
pub use decode::{decode, ScreenCmd};
pub use text::TextRenderer;

use crate::coords::Viewport;
use crate::scene::DrawCmd;

/// A backend that turns one frame's command queue into pixels (or anything else).
///
/// Implementations must process `commands` strictly in order: later commands
/// draw over earlier ones and scissor commands affect everything after them.
pub trait Renderer {
    fn render(&mut self, commands: &[DrawCmd], viewport: Viewport) -> anyhow::Result<()>;
}
