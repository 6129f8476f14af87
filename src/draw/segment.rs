//! Stroke segments and the style they are drawn with.

use super::{Color, Point};

/// Width and color applied to newly added points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Line width in canvas units (always positive)
    pub width: f64,
    /// Line color
    pub color: Color,
}

impl StrokeStyle {
    pub fn new(width: f64, color: Color) -> Self {
        Self { width, color }
    }
}

/// One polyline of constant style.
///
/// A single pen-down to pen-up gesture produces one segment, or several when
/// the style changes while the pen is down.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeSegment {
    /// Line width for every point in this segment
    pub stroke_width: f64,
    /// Line color for every point in this segment
    pub stroke_color: Color,
    /// Points in the order they were drawn
    pub values: Vec<Point>,
}

impl StrokeSegment {
    /// Creates a segment holding a single point.
    pub fn starting_at(style: StrokeStyle, point: Point) -> Self {
        Self {
            stroke_width: style.width,
            stroke_color: style.color,
            values: vec![point],
        }
    }

    /// Returns the style this segment was drawn with.
    pub fn style(&self) -> StrokeStyle {
        StrokeStyle::new(self.stroke_width, self.stroke_color)
    }

    /// True when new points drawn with `style` belong in this segment.
    pub fn matches_style(&self, style: &StrokeStyle) -> bool {
        self.stroke_width == style.width && self.stroke_color == style.color
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
