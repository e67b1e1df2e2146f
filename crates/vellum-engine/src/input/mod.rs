//! Input subsystem.
//!
//! Public API is platform-agnostic. Hosts translate their window system's
//! events into `InputEvent`s, feed them to an `InputCollector`, and hand the
//! resulting `InputSnapshot` to the UI once per frame. `platform` holds the
//! translators for supported windowing libraries.

mod collector;
pub mod platform;
mod snapshot;
mod types;

pub use collector::InputCollector;
pub use snapshot::{InputSnapshot, MouseButtons};
pub use types::{
    InputEvent,
    MouseButton,
    MouseButtonState,
    MouseWheelDelta,
    PointerButtonEvent,
    PointerMoveEvent,
};
