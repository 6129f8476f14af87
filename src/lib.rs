//! Freehand stroke accumulation with point-level undo and redo.
//!
//! The [`StrokeLog`] consumes normalized [`Event`]s (pen down, pointer motion,
//! pen up, style changes, undo, redo, clear) and keeps the ordered list of
//! styled stroke segments that a renderer paints. Everything is synchronous:
//! `apply` mutates the log and hands back a read-only [`Snapshot`].
//!
//! ```
//! use strokeboard::{Event, StrokeLog};
//! use strokeboard::draw::Point;
//!
//! let mut log = StrokeLog::default();
//! log.apply(Event::Start(Point::new(0.0, 0.0)));
//! log.apply(Event::Push(Point::new(4.0, 3.0)));
//! let snapshot = log.apply(Event::Undo);
//! assert_eq!(snapshot.dataset[0].values.len(), 1);
//! ```

pub mod config;
pub mod draw;
pub mod input;
pub mod util;

pub use config::Config;
pub use input::{
    DrawingMode, Event, InvalidEvent, Snapshot, StrokeLog, StrokeWidth, StyleKey, StyleValue,
};
