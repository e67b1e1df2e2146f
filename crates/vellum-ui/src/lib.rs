//! Vellum UI: immediate-mode widgets on top of `vellum-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use vellum_ui::prelude::*;
//!
//! let mut ui = Ui::new();
//! let mut scroll = 0;
//! let mut shadows = false;
//!
//! // Every frame:
//! ui.begin_frame(InputSnapshot::new(mouse_x, mouse_y, buttons, wheel));
//! ui.begin_scroll_area("Settings", 10, 10, 250, 400, scroll);
//! if ui.button("Reset", true) {
//!     shadows = false;
//! }
//! shadows = ui.check("Shadows", shadows, true).value;
//! scroll = ui.end_scroll_area().value;
//! ui.end_frame();
//!
//! renderer.render(ui.commands(), viewport)?;
//! ```
//!
//! The UI keeps no widget objects. Identity comes from call order within each
//! scroll area, and `hot` lags the pointer by one frame so overlapping widgets
//! resolve without flicker.

pub mod draw;
pub mod id;
pub mod input;
pub mod layout;
mod palette;
pub mod response;
pub mod scroll;
pub mod state;
pub mod ui;
pub mod widgets;

pub use id::WidgetId;
pub use input::PointerInput;
pub use layout::LayoutCursor;
pub use response::Changed;
pub use scroll::{clamp_scroll, ScrollArea};
pub use state::{DragAnchor, InteractionState};
pub use ui::Ui;
pub use widgets::{slider_precision, snap_to_increment};

/// Everything a host needs to drive a frame and hand the result to a renderer.
pub mod prelude {
    pub use crate::response::Changed;
    pub use crate::ui::Ui;
    pub use crate::id::WidgetId;

    pub use vellum_engine::coords::{Rect, Vec2, Viewport};
    pub use vellum_engine::input::{InputCollector, InputEvent, InputSnapshot, MouseButtons};
    pub use vellum_engine::paint::{rgba, PackedColor};
    pub use vellum_engine::render::Renderer;
    pub use vellum_engine::scene::{DrawCmd, TextAlign, TextureId, UvRect};
}
