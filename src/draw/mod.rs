//! Drawing primitives and the stroke dataset.
//!
//! This module defines the value types the stroke log is built from:
//! - [`Point`]: canvas-space coordinate
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`StrokeStyle`] / [`StrokeSegment`]: a polyline of constant width and color
//! - [`Frame`]: the ordered dataset of segments, plus [`UndoOp`] reversals

pub mod color;
pub mod frame;
pub mod point;
pub mod segment;

// Re-export commonly used types at module level
pub use color::Color;
pub use frame::{Frame, UndoOp};
pub use point::Point;
pub use segment::{StrokeSegment, StrokeStyle};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
