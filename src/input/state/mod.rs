mod core;
mod stroke;
mod summary;
#[cfg(test)]
mod tests;
mod undo;

pub use self::core::{DEFAULT_STROKE_WIDTH, DrawingMode, Snapshot, StrokeLog};
pub use undo::History;
