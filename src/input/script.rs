//! Line-oriented textual event format.
//!
//! Each non-empty line holds one event; `#` starts a comment:
//!
//! ```text
//! start 10 10
//! push 12 14
//! set strokeColor red
//! set strokeWidth 3
//! stop
//! undo
//! redo
//! clear
//! ```
//!
//! Parsing happens entirely before any event reaches the stroke log, so a
//! malformed script never leaves a half-applied drawing behind.

use super::events::{Event, InvalidEvent, StyleKey, StyleValue};
use crate::draw::Point;
use crate::util;

/// Parses a single event line (without comments or surrounding whitespace).
pub fn parse_event(line: &str) -> Result<Event, InvalidEvent> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Err(InvalidEvent::UnknownEvent(String::new()));
    };
    let args: Vec<&str> = parts.collect();

    match command {
        "start" => Ok(Event::Start(parse_point(command, &args)?)),
        "push" => Ok(Event::Push(parse_point(command, &args)?)),
        "stop" => expect_no_args(command, &args).map(|_| Event::Stop),
        "undo" => expect_no_args(command, &args).map(|_| Event::Undo),
        "redo" => expect_no_args(command, &args).map(|_| Event::Redo),
        "clear" => expect_no_args(command, &args).map(|_| Event::Clear),
        "set" | "setStyle" => parse_style(command, &args).map(Event::SetStyle),
        other => Err(InvalidEvent::UnknownEvent(other.to_string())),
    }
}

/// Parses a whole script, reporting the first invalid line.
pub fn parse_script(text: &str) -> Result<Vec<Event>, InvalidEvent> {
    let mut events = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        let event = parse_event(line).map_err(|source| InvalidEvent::AtLine {
            line: index + 1,
            source: Box::new(source),
        })?;
        events.push(event);
    }
    Ok(events)
}

fn expect_args(command: &str, args: &[&str], expected: usize) -> Result<(), InvalidEvent> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(InvalidEvent::WrongArity {
            event: command.to_string(),
            expected,
            found: args.len(),
        })
    }
}

fn expect_no_args(command: &str, args: &[&str]) -> Result<(), InvalidEvent> {
    expect_args(command, args, 0)
}

fn parse_number(text: &str) -> Result<f64, InvalidEvent> {
    text.parse::<f64>()
        .map_err(|_| InvalidEvent::NotANumber(text.to_string()))
}

fn parse_point(command: &str, args: &[&str]) -> Result<Point, InvalidEvent> {
    expect_args(command, args, 2)?;
    Point::try_new(parse_number(args[0])?, parse_number(args[1])?)
}

fn parse_style(command: &str, args: &[&str]) -> Result<StyleValue, InvalidEvent> {
    expect_args(command, args, 2)?;
    match args[0].parse::<StyleKey>()? {
        StyleKey::StrokeWidth => StyleValue::width(parse_number(args[1])?),
        StyleKey::StrokeColor => util::parse_color(args[1])
            .map(StyleValue::StrokeColor)
            .ok_or_else(|| InvalidEvent::UnknownColor(args[1].to_string())),
    }
}
