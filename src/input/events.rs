//! Normalized input events consumed by the stroke log.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::draw::{Color, Point};

/// Closed set of events an input collaborator can feed the stroke log.
///
/// Pointer adapters translate press/motion/release into `Start`/`Push`/`Stop`;
/// keyboard or picker adapters produce the rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Pen down: begin a new segment (ignored while already drawing)
    Start(Point),
    /// Pointer moved while drawing: extend or split the current segment
    Push(Point),
    /// Pen up
    Stop,
    /// Change the style applied to future points
    SetStyle(StyleValue),
    /// Remove the newest point (or the newest single-point segment)
    Undo,
    /// Replay the most recent undo
    Redo,
    /// Empty the dataset and the undo history
    Clear,
}

/// Which style attribute a `SetStyle` event targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKey {
    StrokeWidth,
    StrokeColor,
}

impl StyleKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleKey::StrokeWidth => "strokeWidth",
            StyleKey::StrokeColor => "strokeColor",
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleKey {
    type Err = InvalidEvent;

    /// Accepts the camelCase event keys as well as snake/kebab spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strokeWidth" | "stroke_width" | "stroke-width" => Ok(StyleKey::StrokeWidth),
            "strokeColor" | "stroke_color" | "stroke-color" => Ok(StyleKey::StrokeColor),
            other => Err(InvalidEvent::UnknownStyleKey(other.to_string())),
        }
    }
}

/// A stroke width known to be positive and finite.
///
/// The field is private: the only way to obtain one is [`StrokeWidth::new`],
/// so a `SetStyle` event can never carry NaN, zero or a negative width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeWidth(f64);

impl StrokeWidth {
    /// Validates a width, rejecting non-positive or non-finite values.
    pub fn new(width: f64) -> Result<Self, InvalidEvent> {
        if width.is_finite() && width > 0.0 {
            Ok(Self(width))
        } else {
            Err(InvalidEvent::InvalidWidth(width))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for StrokeWidth {
    type Error = InvalidEvent;

    fn try_from(width: f64) -> Result<Self, Self::Error> {
        Self::new(width)
    }
}

/// Typed payload of a `SetStyle` event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleValue {
    StrokeWidth(StrokeWidth),
    StrokeColor(Color),
}

impl StyleValue {
    /// Builds a width update, rejecting non-positive or non-finite widths.
    pub fn width(width: f64) -> Result<Self, InvalidEvent> {
        StrokeWidth::new(width).map(StyleValue::StrokeWidth)
    }
}

/// Caller misuse detected before an event reaches the stroke log.
///
/// Rejected events never mutate state.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidEvent {
    #[error("unknown event '{0}'")]
    UnknownEvent(String),

    #[error("event '{event}' expects {expected} argument(s), got {found}")]
    WrongArity {
        event: String,
        expected: usize,
        found: usize,
    },

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("coordinates must be finite, got ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },

    #[error("unknown style key '{0}' (expected strokeWidth or strokeColor)")]
    UnknownStyleKey(String),

    #[error("stroke width must be a positive finite number, got {0}")]
    InvalidWidth(f64),

    #[error("unknown color '{0}'")]
    UnknownColor(String),

    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<InvalidEvent>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_key_parses_known_spellings() {
        assert_eq!("strokeWidth".parse::<StyleKey>(), Ok(StyleKey::StrokeWidth));
        assert_eq!("stroke-color".parse::<StyleKey>(), Ok(StyleKey::StrokeColor));
        assert_eq!(
            "opacity".parse::<StyleKey>(),
            Err(InvalidEvent::UnknownStyleKey("opacity".to_string()))
        );
    }

    #[test]
    fn width_must_be_positive_and_finite() {
        let width = StrokeWidth::new(3.0).unwrap();
        assert_eq!(width.get(), 3.0);
        assert_eq!(StyleValue::width(3.0), Ok(StyleValue::StrokeWidth(width)));
        assert_eq!(StrokeWidth::try_from(-2.0), Err(InvalidEvent::InvalidWidth(-2.0)));
        assert_eq!(StyleValue::width(0.0), Err(InvalidEvent::InvalidWidth(0.0)));
        assert!(StyleValue::width(-1.0).is_err());
        assert!(StyleValue::width(f64::NAN).is_err());
    }
}
