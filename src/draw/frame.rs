//! Frame container holding the drawn segments and their inverse mutators.

use super::{Point, StrokeSegment, StrokeStyle};

/// Stored reversal of one undo step.
///
/// Each variant owns exactly the datum undo removed, so replaying it restores
/// the previous value rather than a recomputed approximation.
#[derive(Clone, Debug, PartialEq)]
pub enum UndoOp {
    /// Re-append this point to whatever segment is last when replayed
    AppendPoint { point: Point },
    /// Push this segment back onto the end of the frame
    ReinsertSegment { segment: StrokeSegment },
}

/// Ordered collection of stroke segments (the dataset).
///
/// Insertion order is paint order: later segments are drawn on top of
/// earlier ones. Outside of this module no segment is ever empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    segments: Vec<StrokeSegment>,
}

impl Frame {
    /// Creates a new empty frame.
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Read-only view of all segments in paint order.
    pub fn segments(&self) -> &[StrokeSegment] {
        &self.segments
    }

    /// Returns the most recently added segment, if any.
    pub fn last(&self) -> Option<&StrokeSegment> {
        self.segments.last()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total number of points across every segment.
    pub fn point_count(&self) -> usize {
        self.segments.iter().map(StrokeSegment::len).sum()
    }

    /// Removes all segments.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Starts a new segment containing only `point`.
    pub(crate) fn begin_segment(&mut self, style: StrokeStyle, point: Point) {
        self.segments.push(StrokeSegment::starting_at(style, point));
    }

    /// Adds `point` to the last segment when its style matches, otherwise
    /// starts a new segment.
    ///
    /// Returns `true` if a new segment was created.
    pub(crate) fn extend_or_begin(&mut self, style: StrokeStyle, point: Point) -> bool {
        match self.segments.last_mut() {
            Some(current) if current.matches_style(&style) => {
                current.values.push(point);
                false
            }
            _ => {
                self.begin_segment(style, point);
                true
            }
        }
    }

    /// Removes the newest datum and returns the operation that restores it.
    ///
    /// Segments with more than one point lose their last point; a
    /// single-point segment is removed whole, so no empty segment is ever
    /// left behind. Returns `None` when the frame is empty.
    pub(crate) fn remove_tail(&mut self) -> Option<UndoOp> {
        let current = self.segments.last_mut()?;
        if current.values.len() > 1 {
            let point = current.values.pop()?;
            Some(UndoOp::AppendPoint { point })
        } else {
            let segment = self.segments.pop()?;
            Some(UndoOp::ReinsertSegment { segment })
        }
    }

    /// Replays a stored undo operation onto the tail of the frame.
    ///
    /// Returns `false` if the operation had nothing to attach to.
    pub(crate) fn apply_undo_op(&mut self, op: UndoOp) -> bool {
        match op {
            UndoOp::AppendPoint { point } => match self.segments.last_mut() {
                Some(current) => {
                    current.values.push(point);
                    true
                }
                None => false,
            },
            UndoOp::ReinsertSegment { segment } => {
                self.segments.push(segment);
                true
            }
        }
    }
}
