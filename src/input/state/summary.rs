//! Plain-text summary of a snapshot, used by the replay CLI and debug logs.

use std::fmt;

use super::{DrawingMode, Snapshot};
use crate::draw::StrokeSegment;
use crate::util;

impl fmt::Display for DrawingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawingMode::Idle => f.write_str("idle"),
            DrawingMode::Drawing => f.write_str("drawing"),
        }
    }
}

impl Snapshot<'_> {
    /// Total number of points across all segments.
    pub fn point_count(&self) -> usize {
        self.dataset.iter().map(StrokeSegment::len).sum()
    }
}

impl fmt::Display for Snapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "mode: {}", self.mode)?;
        writeln!(
            f,
            "style: width {} color {}",
            self.stroke_width,
            util::color_to_name(&self.stroke_color).to_lowercase()
        )?;
        writeln!(f, "segments: {}", self.dataset.len())?;
        writeln!(f, "points: {}", self.point_count())?;
        writeln!(f, "undo depth: {}", self.undo_depth)?;

        for (index, segment) in self.dataset.iter().enumerate() {
            let points = segment
                .values
                .iter()
                .map(|p| format!("({}, {})", p.x, p.y))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(
                f,
                "  #{index} width {} color {}: {points}",
                segment.stroke_width,
                util::color_to_name(&segment.stroke_color).to_lowercase()
            )?;
        }
        Ok(())
    }
}
