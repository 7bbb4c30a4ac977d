#![allow(clippy::unwrap_used)]

use schedbot::schedule::format;
use schedbot::schedule::record::{normalize, parse_date, RawRow};
use schedbot::schedule::sweep::{sweep, SweepState};

fn lesson_rows() -> Vec<RawRow> {
    vec![
        [
            ("date", "01.09.2025"),
            ("time_start", "900"),
            ("lesson", "1"),
            ("subject", "Математика"),
            ("teacher", "Іваненко"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect(),
    ]
}

fn tick_at(h: u32, m: u32, s: u32) -> chrono::NaiveDateTime {
    parse_date("01.09.2025").unwrap().and_hms_opt(h, m, s).unwrap()
}

#[test]
fn test_exactly_one_reminder_across_adjacent_ticks() {
    let records: Vec<_> = lesson_rows().iter().map(normalize).collect();
    let mut state = SweepState::new();

    let total: usize = [tick_at(8, 55, 0), tick_at(8, 56, 0)]
        .into_iter()
        .map(|now| sweep(now, &records, &mut state).len())
        .sum();

    assert_eq!(total, 1);
}

#[test]
fn test_window_edges_601_600_and_past() {
    let records: Vec<_> = lesson_rows().iter().map(normalize).collect();

    let mut state = SweepState::new();
    assert!(sweep(tick_at(8, 49, 59), &records, &mut state).is_empty());

    let mut state = SweepState::new();
    assert_eq!(sweep(tick_at(8, 50, 0), &records, &mut state).len(), 1);

    let mut state = SweepState::new();
    assert!(sweep(tick_at(9, 0, 1), &records, &mut state).is_empty());
}

#[test]
fn test_due_lesson_renders_reminder_text() {
    let records: Vec<_> = lesson_rows().iter().map(normalize).collect();
    let mut state = SweepState::new();

    let due = sweep(tick_at(8, 55, 0), &records, &mut state);
    let text = format::reminder_message(&due[0]);

    assert!(text.starts_with("🔔 Нагадування: о 09:00 починається"));
    assert!(text.contains("Математика"));
    assert!(text.contains("Іваненко"));
}

#[test]
fn test_state_survives_other_days_lessons() {
    // a lesson on another date never enters the window
    let rows: Vec<RawRow> = vec![[("date", "02.09.2025"), ("time_start", "900"), ("subject", "Фізика")]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()];
    let records: Vec<_> = rows.iter().map(normalize).collect();
    let mut state = SweepState::new();

    assert!(sweep(tick_at(8, 55, 0), &records, &mut state).is_empty());
    assert_eq!(state.fired_count(), 0);
}
