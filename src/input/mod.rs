//! Input events and the stroke state machine.
//!
//! This module turns normalized input events into dataset mutations. It holds
//! the stroke log (dataset, pen mode, current style), the undo history, and
//! the textual event format used to feed the log from scripts.

pub mod events;
pub mod script;
pub mod state;

// Re-export commonly used types at module level
pub use events::{Event, InvalidEvent, StrokeWidth, StyleKey, StyleValue};
pub use script::{parse_event, parse_script};
pub use state::{DrawingMode, History, Snapshot, StrokeLog};
