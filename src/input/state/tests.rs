use super::*;
use crate::draw::{BLACK, BLUE, Point, RED, StrokeSegment, StrokeStyle, UndoOp};
use crate::input::{Event, StrokeWidth, StyleValue};

fn create_test_log() -> StrokeLog {
    StrokeLog::with_defaults(StrokeStyle::new(5.0, BLACK), 0)
}

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn segment(width: f64, color: crate::draw::Color, values: &[Point]) -> StrokeSegment {
    StrokeSegment {
        stroke_width: width,
        stroke_color: color,
        values: values.to_vec(),
    }
}

#[test]
fn test_start_creates_segment_with_first_point() {
    let mut log = create_test_log();
    let snapshot = log.apply(Event::Start(p(1.0, 1.0)));

    assert_eq!(snapshot.mode, DrawingMode::Drawing);
    assert_eq!(snapshot.dataset, &[segment(5.0, BLACK, &[p(1.0, 1.0)])]);
}

#[test]
fn test_start_while_drawing_is_ignored() {
    let mut log = create_test_log();
    log.start(p(1.0, 1.0));
    log.start(p(2.0, 2.0));

    assert_eq!(log.frame().len(), 1);
    assert_eq!(log.frame().point_count(), 1);
}

#[test]
fn test_push_and_stop_ignored_while_idle() {
    let mut log = create_test_log();
    log.push(p(1.0, 1.0));
    log.stop();

    assert!(log.frame().is_empty());
    assert_eq!(log.mode(), DrawingMode::Idle);
}

#[test]
fn test_constant_style_pushes_extend_in_order() {
    let mut log = create_test_log();
    log.start(p(0.0, 0.0));
    for i in 1..=10 {
        log.push(p(i as f64, 0.0));
    }

    let last = log.frame().last().unwrap();
    assert_eq!(log.frame().len(), 1);
    assert_eq!(last.len(), 11);
    for (i, point) in last.values.iter().enumerate() {
        assert_eq!(point.x, i as f64);
    }
}

#[test]
fn test_style_change_mid_stroke_splits_segment() {
    let mut log = create_test_log();
    log.start(p(0.0, 0.0));
    log.push(p(1.0, 0.0));
    log.set_style(StyleValue::StrokeColor(RED));
    log.push(p(2.0, 0.0));
    log.set_style(StyleValue::width(9.0).unwrap());
    log.push(p(3.0, 0.0));
    log.push(p(4.0, 0.0));

    let dataset = log.frame().segments();
    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset[1], segment(5.0, RED, &[p(2.0, 0.0)]));
    assert_eq!(dataset[2], segment(9.0, RED, &[p(3.0, 0.0), p(4.0, 0.0)]));
    assert_eq!(log.frame().point_count(), 5);
}

#[test]
fn test_set_style_does_not_touch_dataset_or_mode() {
    let mut log = create_test_log();
    log.start(p(0.0, 0.0));
    let before = log.frame().clone();

    log.set_style(StyleValue::StrokeColor(BLUE));

    assert_eq!(log.frame(), &before);
    assert_eq!(log.mode(), DrawingMode::Drawing);
    assert_eq!(log.style(), StrokeStyle::new(5.0, BLUE));
}

#[test]
fn test_restart_opens_new_segment_with_same_style() {
    let mut log = create_test_log();
    log.start(p(0.0, 0.0));
    log.push(p(1.0, 0.0));
    log.stop();
    log.start(p(5.0, 5.0));
    log.push(p(6.0, 5.0));

    assert_eq!(log.frame().len(), 2);
    assert_eq!(log.frame().segments()[1].len(), 2);
}

#[test]
fn test_undo_pops_points_then_segment() {
    let mut log = create_test_log();
    log.start(p(0.0, 0.0));
    log.push(p(1.0, 0.0));
    log.push(p(2.0, 0.0));

    log.undo();
    assert_eq!(log.frame().segments()[0].len(), 2);
    log.undo();
    assert_eq!(log.frame().segments()[0].len(), 1);
    log.undo();
    assert!(log.frame().is_empty());
    assert_eq!(log.history().len(), 3);

    // Empty dataset: no-op, stack unchanged
    log.undo();
    assert!(log.frame().is_empty());
    assert_eq!(log.history().len(), 3);
}

#[test]
fn test_undo_never_leaves_empty_segment() {
    let mut log = create_test_log();
    log.start(p(0.0, 0.0));
    log.push(p(1.0, 0.0));
    log.set_style(StyleValue::StrokeColor(RED));
    log.push(p(2.0, 0.0));
    log.stop();

    while !log.frame().is_empty() {
        log.undo();
        assert!(log.frame().segments().iter().all(|s| !s.is_empty()));
    }
}

#[test]
fn test_undo_then_redo_restores_exact_state() {
    let mut log = create_test_log();
    log.start(p(0.0, 0.0));
    log.push(p(1.5, 2.5));
    log.set_style(StyleValue::StrokeColor(RED));
    log.push(p(3.0, 4.0));
    log.push(p(5.0, 6.0));

    let mut states = vec![log.frame().clone()];
    for _ in 0..4 {
        log.undo();
        states.push(log.frame().clone());
    }
    assert!(log.frame().is_empty());

    // Each redo walks back through the recorded states in reverse
    for expected in states.iter().rev().skip(1) {
        log.redo();
        assert_eq!(log.frame(), expected);
    }
    assert!(log.history().is_empty());
}

#[test]
fn test_undo_redo_alternation_is_stable() {
    let mut log = create_test_log();
    log.start(p(0.0, 0.0));
    log.push(p(1.0, 1.0));
    let before = log.frame().clone();

    for _ in 0..5 {
        log.undo();
        assert_eq!(log.history().len(), 1);
        log.redo();
        assert_eq!(log.frame(), &before);
        assert!(log.history().is_empty());
    }
}

#[test]
fn test_push_after_undo_clears_redo_history() {
    let mut log = create_test_log();
    log.start(p(0.0, 0.0));
    log.push(p(1.0, 0.0));
    log.push(p(2.0, 0.0));
    log.undo();
    assert_eq!(log.history().len(), 1);

    log.push(p(9.0, 9.0));
    assert!(log.history().is_empty());

    let before = log.frame().clone();
    log.redo();
    assert_eq!(log.frame(), &before);
}

#[test]
fn test_start_after_undo_clears_redo_history() {
    let mut log = create_test_log();
    log.start(p(0.0, 0.0));
    log.push(p(1.0, 0.0));
    log.stop();
    log.undo();

    log.start(p(4.0, 4.0));
    assert!(log.history().is_empty());
    log.redo();
    assert_eq!(log.frame().len(), 2);
    assert_eq!(log.frame().point_count(), 2);
}

#[test]
fn test_stop_and_set_style_keep_redo_history() {
    let mut log = create_test_log();
    log.start(p(0.0, 0.0));
    log.push(p(1.0, 0.0));
    log.undo();

    log.stop();
    log.set_style(StyleValue::width(2.0).unwrap());
    assert_eq!(log.history().len(), 1);

    log.redo();
    assert_eq!(log.frame().point_count(), 2);
}

#[test]
fn test_redo_on_empty_stack_is_noop() {
    let mut log = create_test_log();
    log.redo();
    assert!(log.frame().is_empty());

    log.start(p(0.0, 0.0));
    let before = log.frame().clone();
    log.redo();
    assert_eq!(log.frame(), &before);
}

#[test]
fn test_clear_empties_dataset_and_history() {
    let mut log = create_test_log();
    log.start(p(0.0, 0.0));
    log.push(p(1.0, 0.0));
    log.push(p(2.0, 0.0));
    log.undo();

    let snapshot = log.apply(Event::Clear);
    assert!(snapshot.dataset.is_empty());
    assert_eq!(snapshot.undo_depth, 0);

    log.redo();
    assert!(log.frame().is_empty());
}

#[test]
fn test_clear_keeps_mode() {
    let mut log = create_test_log();
    log.start(p(0.0, 0.0));
    log.clear();
    assert_eq!(log.mode(), DrawingMode::Drawing);

    // Still drawing, so the next push opens a fresh segment
    log.push(p(1.0, 1.0));
    assert_eq!(log.frame().len(), 1);
}

#[test]
fn test_reference_scenario() {
    let mut log = create_test_log();

    let snapshot = log.apply(Event::Start(p(1.0, 1.0)));
    assert_eq!(snapshot.dataset, &[segment(5.0, BLACK, &[p(1.0, 1.0)])]);
    assert_eq!(snapshot.mode, DrawingMode::Drawing);

    let snapshot = log.apply(Event::Push(p(2.0, 2.0)));
    assert_eq!(
        snapshot.dataset,
        &[segment(5.0, BLACK, &[p(1.0, 1.0), p(2.0, 2.0)])]
    );

    let snapshot = log.apply(Event::SetStyle(StyleValue::StrokeColor(RED)));
    assert_eq!(snapshot.stroke_color, RED);
    assert_eq!(snapshot.dataset.len(), 1);

    let snapshot = log.apply(Event::Push(p(3.0, 3.0)));
    let two_segments = vec![
        segment(5.0, BLACK, &[p(1.0, 1.0), p(2.0, 2.0)]),
        segment(5.0, RED, &[p(3.0, 3.0)]),
    ];
    assert_eq!(snapshot.dataset, two_segments.as_slice());

    let snapshot = log.apply(Event::Undo);
    assert_eq!(snapshot.dataset, &two_segments[..1]);
    assert_eq!(snapshot.undo_depth, 1);
    assert_eq!(
        log.history().peek(),
        Some(&UndoOp::ReinsertSegment {
            segment: two_segments[1].clone()
        })
    );

    let snapshot = log.apply(Event::Redo);
    assert_eq!(snapshot.dataset, two_segments.as_slice());
    assert_eq!(snapshot.undo_depth, 0);
}

#[test]
fn test_bounded_history_limits_redo() {
    let mut log = StrokeLog::with_defaults(StrokeStyle::new(5.0, BLACK), 2);
    log.start(p(0.0, 0.0));
    log.push(p(1.0, 0.0));
    log.push(p(2.0, 0.0));
    log.push(p(3.0, 0.0));

    log.undo();
    log.undo();
    log.undo();
    assert_eq!(log.history().len(), 2);
    assert_eq!(log.frame().point_count(), 1);

    log.redo();
    log.redo();
    log.redo();
    assert_eq!(log.frame().point_count(), 3);
}

#[test]
fn test_needs_redraw_tracks_changes() {
    let mut log = create_test_log();
    assert!(log.take_needs_redraw());
    assert!(!log.take_needs_redraw());

    log.push(p(0.0, 0.0));
    assert!(!log.take_needs_redraw());

    log.start(p(0.0, 0.0));
    assert!(log.take_needs_redraw());

    log.undo();
    assert!(log.take_needs_redraw());
    log.undo();
    assert!(!log.take_needs_redraw());
}

#[test]
fn test_stop_flags_mode_change_for_redraw() {
    let mut log = create_test_log();
    log.start(p(0.0, 0.0));
    log.push(p(1.0, 1.0));
    log.take_needs_redraw();

    log.stop();
    assert_eq!(log.mode(), DrawingMode::Idle);
    assert!(log.take_needs_redraw());

    // A second pen-up changes nothing.
    log.stop();
    assert!(!log.take_needs_redraw());
}

#[test]
fn test_invalid_widths_never_reach_the_log() {
    let mut log = create_test_log();

    for bad in [f64::NAN, f64::INFINITY, -3.0, 0.0] {
        assert!(StyleValue::width(bad).is_err());
        assert!(StrokeWidth::new(bad).is_err());
    }
    assert_eq!(log.style().width, 5.0);

    // Constant-style pushes stay in one segment.
    log.set_style(StyleValue::width(5.0).unwrap());
    log.start(p(0.0, 0.0));
    log.push(p(1.0, 1.0));
    log.push(p(2.0, 2.0));
    assert_eq!(log.frame().len(), 1);
    assert_eq!(log.frame().point_count(), 3);
}

#[test]
fn test_with_defaults_replaces_invalid_initial_width() {
    let log = StrokeLog::with_defaults(StrokeStyle::new(f64::NAN, BLACK), 0);
    assert_eq!(log.style().width, DEFAULT_STROKE_WIDTH);

    let log = StrokeLog::with_defaults(StrokeStyle::new(-1.0, BLACK), 0);
    assert_eq!(log.style().width, DEFAULT_STROKE_WIDTH);
}

#[test]
fn test_from_config_uses_drawing_defaults() {
    let config = crate::Config::from_toml_str(
        r#"
        [drawing]
        default_color = "blue"
        default_width = 7.5

        [history]
        max_undo_depth = 3
        "#,
    )
    .unwrap();

    let log = StrokeLog::from_config(&config);
    assert_eq!(log.style(), StrokeStyle::new(7.5, BLUE));
    assert_eq!(log.history().max_depth(), 3);
}

#[test]
fn test_summary_lists_segments() {
    let mut log = create_test_log();
    log.start(p(1.0, 2.0));
    log.push(p(3.0, 4.0));
    log.stop();

    let text = log.snapshot().to_string();
    assert!(text.contains("mode: idle"));
    assert!(text.contains("segments: 1"));
    assert!(text.contains("points: 2"));
    assert!(text.contains("#0 width 5 color black: (1, 2) (3, 4)"));
}
