use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashSet;

use crate::schedule::record::LessonRecord;

/// Seconds before a lesson's start inside which a reminder is due.
pub const LOOKAHEAD_SECS: i64 = 600;

/// Composite identifier preventing duplicate reminder delivery for the same
/// lesson within a day.
pub type DedupKey = (NaiveDate, String, String, u32, u32);

/// Scheduler-owned dedup state, passed into every tick instead of living as
/// ambient process state. The fired set resets at local-midnight rollover.
#[derive(Debug, Default)]
pub struct SweepState {
    day: Option<NaiveDate>,
    fired: HashSet<DedupKey>,
}

impl SweepState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys fired so far today.
    pub fn fired_count(&self) -> usize {
        self.fired.len()
    }
}

/// One evaluation tick: returns the lessons whose reminders are due now.
///
/// A lesson is due when it starts today, its start time resolves, the start
/// lies within `[0, LOOKAHEAD_SECS]` seconds from `now`, and its dedup key
/// has not fired today. Due lessons are marked fired before being returned,
/// so an immediately following tick returns nothing for them.
pub fn sweep(
    now: NaiveDateTime,
    records: &[LessonRecord],
    state: &mut SweepState,
) -> Vec<LessonRecord> {
    let today = now.date();
    if state.day != Some(today) {
        state.day = Some(today);
        state.fired.clear();
    }

    let mut due = Vec::new();
    for record in records {
        if record.date != Some(today) {
            continue;
        }
        let Some((hour, minute)) = record.start_time() else {
            continue;
        };
        let Some(start) = today.and_hms_opt(hour, minute, 0) else {
            continue;
        };
        let delta = (start - now).num_seconds();
        if !(0..=LOOKAHEAD_SECS).contains(&delta) {
            continue;
        }
        let key = (
            today,
            record.label.clone(),
            record.subject.clone(),
            hour,
            minute,
        );
        if state.fired.contains(&key) {
            continue;
        }
        state.fired.insert(key);
        due.push(record.clone());
    }
    due
}
