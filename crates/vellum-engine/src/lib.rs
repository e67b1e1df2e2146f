//! Vellum engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by the immediate-mode UI:
//! geometry, colors, the per-frame draw command queue, input plumbing and the
//! contract an external renderer implements.

pub mod coords;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
