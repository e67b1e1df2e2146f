/// Factor applied to non-text, non-scissor geometry before it is stored.
///
/// Renderers must divide by the same factor; see `render::decode`.
pub const GEOMETRY_SCALE: f32 = 8.0;

/// Factor applied to text point sizes before they are stored.
pub const POINT_SIZE_SCALE: f32 = 100.0;

/// Point size used by widget text and by `draw_text` when none is given.
pub const DEFAULT_POINT_SIZE: f32 = 8.0;
