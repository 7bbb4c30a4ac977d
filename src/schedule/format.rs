use chrono::{Days, NaiveDate};

use crate::schedule::locale;
use crate::schedule::record::LessonRecord;

/// Placeholder body for a day or listing with no matching lessons.
pub const NOTHING_FOUND: &str = "Нічого не знайдено.";

/// Chunk size for outgoing messages, below Telegram's own hard limit.
pub const MAX_CHUNK: usize = 3500;

/// One rendered schedule line: a label/time segment joined to a
/// subject/teacher segment. Either side may be absent; separators are only
/// emitted between non-empty segments.
pub fn lesson_line(record: &LessonRecord, fallback_ordinal: Option<usize>) -> String {
    let label = if record.label.is_empty() {
        fallback_ordinal.map(|n| n.to_string()).unwrap_or_default()
    } else {
        record.label.clone()
    };
    let span = record.time_span();
    let left = match (label.is_empty(), span.is_empty()) {
        (false, false) => format!("{label} ({span})"),
        (false, true) => label,
        (true, false) => format!("({span})"),
        (true, true) => String::new(),
    };

    let subject_kind = if !record.subject.is_empty() && !record.kind.is_empty() {
        format!("{} ({})", record.subject, record.kind)
    } else if !record.subject.is_empty() {
        record.subject.clone()
    } else if !record.kind.is_empty() {
        format!("({})", record.kind)
    } else {
        String::new()
    };
    let right = [subject_kind, record.teacher.clone()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    match (left.is_empty(), right.is_empty()) {
        (false, false) => format!("{left} — {right}"),
        (false, true) => left,
        (true, _) => right,
    }
}

/// `"Понеділок, 01.09.2025"`.
pub fn day_header(date: NaiveDate) -> String {
    format!("{}, {}", locale::weekday_name(date), date.format("%d.%m.%Y"))
}

/// A single day block: header plus one line per lesson, or the
/// nothing-found placeholder.
pub fn format_day(date: NaiveDate, records: &[LessonRecord]) -> String {
    let header = day_header(date);
    if records.is_empty() {
        return format!("{header}\n{NOTHING_FOUND}");
    }
    let mut lines = vec![header];
    lines.extend(
        records
            .iter()
            .enumerate()
            .map(|(i, r)| lesson_line(r, Some(i + 1))),
    );
    lines.join("\n")
}

/// Six day blocks Monday through Saturday, blank-line separated; a day
/// without lessons renders a dash body.
pub fn format_week(monday: NaiveDate, records: &[LessonRecord]) -> String {
    let mut blocks = Vec::with_capacity(6);
    for offset in 0..6u64 {
        let day = monday + Days::new(offset);
        let mut day_rows: Vec<&LessonRecord> =
            records.iter().filter(|r| r.date == Some(day)).collect();
        day_rows.sort_by_key(|r| (r.label.clone(), r.time_start.clone()));
        if day_rows.is_empty() {
            blocks.push(format!("{}\n—", day_header(day)));
        } else {
            let mut lines = vec![day_header(day)];
            lines.extend(
                day_rows
                    .iter()
                    .enumerate()
                    .map(|(i, r)| lesson_line(r, Some(i + 1))),
            );
            blocks.push(lines.join("\n"));
        }
    }
    blocks.join("\n\n")
}

/// Groups consecutive same-date records (dateless ones are skipped) into
/// headed blocks. Input ordering among equal dates is preserved.
pub fn format_grouped(records: &[LessonRecord]) -> String {
    let mut dated: Vec<&LessonRecord> = records.iter().filter(|r| r.date.is_some()).collect();
    dated.sort_by_key(|r| (r.date, r.time_start.clone()));
    if dated.is_empty() {
        return NOTHING_FOUND.to_string();
    }

    let mut blocks: Vec<String> = Vec::new();
    let mut lines: Vec<String> = Vec::new();
    let mut last_date: Option<NaiveDate> = None;
    let mut ordinal = 0;
    for record in dated {
        let date = match record.date {
            Some(d) => d,
            None => continue,
        };
        if last_date != Some(date) {
            if !lines.is_empty() {
                blocks.push(lines.join("\n"));
            }
            lines = vec![day_header(date)];
            last_date = Some(date);
            ordinal = 0;
        }
        ordinal += 1;
        lines.push(lesson_line(record, Some(ordinal)));
    }
    if !lines.is_empty() {
        blocks.push(lines.join("\n"));
    }
    blocks.join("\n\n")
}

/// The pre-lesson reminder text.
pub fn reminder_message(record: &LessonRecord) -> String {
    format!(
        "🔔 Нагадування: о {} починається\n{}",
        record.time_start,
        lesson_line(record, None)
    )
}

/// Splits text into chunks of at most `max_len` characters, cutting at the
/// last newline at or before the limit and falling back to a hard cut when
/// a single line exceeds it. Exactly one newline is consumed per newline
/// cut, so rejoining chunks with `"\n"` restores the original text.
pub fn split_text(text: &str, max_len: usize) -> Vec<String> {
    let mut parts = Vec::new();
    let mut rest = text;
    while rest.chars().count() > max_len {
        let hard_cut = rest
            .char_indices()
            .nth(max_len)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        match rest[..hard_cut].rfind('\n') {
            Some(cut) => {
                parts.push(rest[..cut].to_string());
                rest = &rest[cut + 1..];
            }
            None => {
                parts.push(rest[..hard_cut].to_string());
                rest = &rest[hard_cut..];
            }
        }
    }
    parts.push(rest.to_string());
    parts
}
