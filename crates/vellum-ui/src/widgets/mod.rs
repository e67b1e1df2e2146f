//! Widget catalog. Each module adds its calls to [`Ui`](crate::Ui).

mod button;
mod slider;
mod spacing;
mod text;
mod toggle;

pub use slider::{slider_precision, snap_to_increment};
