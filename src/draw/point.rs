//! Canvas-space coordinates.

use crate::input::InvalidEvent;

/// A 2D coordinate in canvas space.
///
/// Points are plain values: once pushed into a segment they are never
/// modified, only removed (by undo) or re-appended (by redo).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a point without validation.
    ///
    /// The stroke log assumes finite coordinates; callers translating raw
    /// device input should go through [`Point::try_new`] instead.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a point, rejecting NaN or infinite coordinates.
    pub fn try_new(x: f64, y: f64) -> Result<Self, InvalidEvent> {
        if x.is_finite() && y.is_finite() {
            Ok(Self { x, y })
        } else {
            Err(InvalidEvent::NonFiniteCoordinate { x, y })
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_rejects_non_finite() {
        assert!(Point::try_new(1.0, 2.0).is_ok());
        assert!(matches!(
            Point::try_new(f64::NAN, 0.0),
            Err(InvalidEvent::NonFiniteCoordinate { .. })
        ));
        assert!(Point::try_new(0.0, f64::INFINITY).is_err());
    }
}
