//! Translators from windowing-library events into [`InputEvent`](super::InputEvent)s.

pub mod winit;
