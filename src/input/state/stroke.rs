use crate::draw::Point;

use super::{DrawingMode, StrokeLog};

impl StrokeLog {
    /// Processes a pen-down event.
    ///
    /// # Behavior
    /// - While Idle: appends a new segment that already holds `point`, in the
    ///   current style, and switches to Drawing
    /// - While Drawing: ignored
    ///
    /// The new segment is forward data, so the undo history is discarded.
    pub fn start(&mut self, point: Point) {
        if self.mode == DrawingMode::Drawing {
            return;
        }

        self.frame.begin_segment(self.style, point);
        self.history.clear();
        self.mode = DrawingMode::Drawing;
        self.needs_redraw = true;
        log::debug!(
            "Started segment #{} at ({:.1}, {:.1})",
            self.frame.len(),
            point.x,
            point.y
        );
    }

    /// Processes pointer motion while the pen is down.
    ///
    /// # Behavior
    /// - While Idle: ignored
    /// - While Drawing: appends `point` to the last segment if that segment was
    ///   drawn with exactly the current style, otherwise opens a new segment.
    ///   Changing color mid-gesture therefore splits the gesture in two.
    ///
    /// Clears the undo history.
    pub fn push(&mut self, point: Point) {
        if self.mode == DrawingMode::Idle {
            return;
        }

        if self.frame.extend_or_begin(self.style, point) {
            log::debug!("Style changed mid-stroke; opened segment #{}", self.frame.len());
        }
        self.history.clear();
        self.needs_redraw = true;
        log::trace!("Pushed ({:.1}, {:.1})", point.x, point.y);
    }

    /// Processes a pen-up event. The dataset is not touched, but the mode
    /// change is flagged for redraw.
    pub fn stop(&mut self) {
        if self.mode == DrawingMode::Idle {
            return;
        }

        self.mode = DrawingMode::Idle;
        self.needs_redraw = true;
        log::debug!("Stopped drawing ({} segment(s))", self.frame.len());
    }

    /// Empties the dataset and the undo history. Clearing cannot be undone.
    ///
    /// The drawing mode is left as is.
    pub fn clear(&mut self) {
        self.frame.clear();
        self.history.clear();
        self.needs_redraw = true;
        log::info!("Cleared canvas");
    }
}
