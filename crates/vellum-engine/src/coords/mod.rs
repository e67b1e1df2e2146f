//! Coordinate and geometry types shared across the UI and renderers.
//!
//! Canonical CPU space:
//! - Caller-defined units (usually pixels)
//! - Origin bottom-left
//! - +X right, +Y up
//!
//! Renderers convert to their own clip space using a viewport.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
