//! Stroke log state and the synchronous command API.

use super::undo::History;
use crate::config::Config;
use crate::draw::{BLACK, Color, Frame, StrokeSegment, StrokeStyle};
use crate::input::events::{Event, StrokeWidth, StyleValue};

/// Default pen width when no configuration is supplied.
pub const DEFAULT_STROKE_WIDTH: f64 = 5.0;

/// Whether the pen is currently down.
///
/// Transitions: `Idle --start--> Drawing --stop--> Idle`. `push` loops on
/// `Drawing`. Events arriving in the wrong mode are ignored, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingMode {
    /// Pen up - `push` and `stop` are ignored
    #[default]
    Idle,
    /// Pen down - points extend the current segment
    Drawing,
}

/// Read-only view of the log handed to renderers after every event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<'a> {
    /// All segments in paint order
    pub dataset: &'a [StrokeSegment],
    /// Current pen state
    pub mode: DrawingMode,
    /// Width applied to the next point
    pub stroke_width: f64,
    /// Color applied to the next point
    pub stroke_color: Color,
    /// Number of operations redo can replay
    pub undo_depth: usize,
}

/// Accumulates freehand strokes and owns their undo history.
///
/// This struct holds the dataset (every drawn segment), the drawing mode, the
/// style applied to new points and the undo stack. All mutation goes through
/// `&mut self`, so events are applied strictly in the order received.
#[derive(Debug, Clone)]
pub struct StrokeLog {
    /// Drawn segments in paint order
    pub(super) frame: Frame,
    /// Pen up / pen down
    pub(super) mode: DrawingMode,
    /// Style for future points
    pub(super) style: StrokeStyle,
    /// Reversal operations recorded by undo
    pub(super) history: History,
    /// Whether anything visible in a [`Snapshot`] (dataset, mode, style or
    /// undo depth) changed since the last `take_needs_redraw`
    pub(super) needs_redraw: bool,
}

impl Default for StrokeLog {
    fn default() -> Self {
        Self::with_defaults(StrokeStyle::new(DEFAULT_STROKE_WIDTH, BLACK), 0)
    }
}

impl StrokeLog {
    /// Creates an empty log.
    ///
    /// # Arguments
    /// * `style` - Initial pen width and color
    /// * `max_undo_depth` - Bound on stored undo operations (0 = unlimited)
    ///
    /// A non-positive or non-finite initial width is replaced by
    /// [`DEFAULT_STROKE_WIDTH`].
    pub fn with_defaults(mut style: StrokeStyle, max_undo_depth: usize) -> Self {
        if StrokeWidth::new(style.width).is_err() {
            log::warn!(
                "Invalid initial stroke width {}, using {:.1}",
                style.width,
                DEFAULT_STROKE_WIDTH
            );
            style.width = DEFAULT_STROKE_WIDTH;
        }

        Self {
            frame: Frame::new(),
            mode: DrawingMode::Idle,
            style,
            history: History::new(max_undo_depth),
            needs_redraw: true,
        }
    }

    /// Creates an empty log using the drawing and history settings of `config`.
    pub fn from_config(config: &Config) -> Self {
        let style = StrokeStyle::new(
            config.drawing.default_width,
            config.drawing.default_color.to_color(),
        );
        Self::with_defaults(style, config.history.max_undo_depth)
    }

    /// Applies one event and returns the resulting state.
    pub fn apply(&mut self, event: Event) -> Snapshot<'_> {
        match event {
            Event::Start(point) => self.start(point),
            Event::Push(point) => self.push(point),
            Event::Stop => self.stop(),
            Event::SetStyle(value) => self.set_style(value),
            Event::Undo => self.undo(),
            Event::Redo => self.redo(),
            Event::Clear => self.clear(),
        }
        self.snapshot()
    }

    /// Applies events in order.
    pub fn apply_all<I>(&mut self, events: I) -> Snapshot<'_>
    where
        I: IntoIterator<Item = Event>,
    {
        for event in events {
            self.apply(event);
        }
        self.snapshot()
    }

    /// Returns the current read-only state.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            dataset: self.frame.segments(),
            mode: self.mode,
            stroke_width: self.style.width,
            stroke_color: self.style.color,
            undo_depth: self.history.len(),
        }
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns and resets the "state changed" flag.
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Updates width or color for future points only.
    ///
    /// Existing segments, the mode and the undo history are untouched.
    pub fn set_style(&mut self, value: StyleValue) {
        match value {
            StyleValue::StrokeWidth(width) => {
                self.style.width = width.get();
                log::debug!("Stroke width set to {:.1}", width.get());
            }
            StyleValue::StrokeColor(color) => {
                self.style.color = color;
                log::debug!("Stroke color set to {:?}", color);
            }
        }
        // Live cursor previews depend on the style.
        self.needs_redraw = true;
    }
}
