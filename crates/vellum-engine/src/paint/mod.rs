//! Color model shared between the UI and renderers.
//!
//! - `PackedColor`: the compact straight-alpha RGBA word carried by draw commands
//! - `Color`: linear premultiplied floats, what blending pipelines want
//!
//! Nothing in the engine or the UI builds a `Color`. It is the renderer-facing
//! form: a GPU backend converts each command's color with
//! `Color::from(packed)` before writing vertices, the headless
//! [`TextRenderer`](crate::render::TextRenderer) prints the packed form as is.

mod color;
mod packed;

pub use color::Color;
pub use packed::{PackedColor, rgba};
