use chrono::NaiveDate;
use std::collections::HashMap;

/// A raw spreadsheet row, keyed by whatever the worksheet headers happen to be.
pub type RawRow = HashMap<String, String>;

/// Canonical representation of one scheduled class session.
///
/// Every field degrades gracefully: an unparseable date becomes `None`, an
/// unparseable time becomes an empty string, and missing text fields stay
/// empty. Normalization never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonRecord {
    pub date: Option<NaiveDate>,
    /// The source-provided weekday name, untouched (used as a filter fallback
    /// when the date itself is absent).
    pub weekday: String,
    pub time_start: String,
    pub time_end: String,
    /// Free-text ordinal/identifier for the lesson slot.
    pub label: String,
    pub subject: String,
    /// Lecture/lab style annotation.
    pub kind: String,
    pub teacher: String,
}

// Ordered header aliases per canonical field. Bilingual sheets expose the
// same column under either name; the first non-empty match wins.
const DATE_ALIASES: &[&str] = &["date", "Дата"];
const WEEKDAY_ALIASES: &[&str] = &["weekday", "День"];
const TIME_START_ALIASES: &[&str] = &["time_start", "Початок", "Пара"];
const TIME_END_ALIASES: &[&str] = &["time_end", "Кінець"];
const LABEL_ALIASES: &[&str] = &["lesson", "Lesson", "№", "Номер", "Пара №"];
const SUBJECT_ALIASES: &[&str] = &[
    "subject",
    "Subject",
    "Предмет",
    "назва",
    "Назва",
    "discipline",
    "Дисципліна",
];
const KIND_ALIASES: &[&str] = &["type", "Тип", "notes", "Примітки"];
const TEACHER_ALIASES: &[&str] = &["teacher", "Teacher", "Викладач", "Преподаватель"];

fn first_alias(row: &RawRow, aliases: &[&str]) -> String {
    aliases
        .iter()
        .filter_map(|key| row.get(*key))
        .map(|v| v.trim())
        .find(|v| !v.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Converts a raw row into a canonical [`LessonRecord`]. Pure, total and
/// idempotent over its input: calling it twice yields identical records.
pub fn normalize(row: &RawRow) -> LessonRecord {
    LessonRecord {
        date: parse_date(&first_alias(row, DATE_ALIASES)),
        weekday: first_alias(row, WEEKDAY_ALIASES),
        time_start: normalize_time(&first_alias(row, TIME_START_ALIASES)),
        time_end: normalize_time(&first_alias(row, TIME_END_ALIASES)),
        label: first_alias(row, LABEL_ALIASES),
        subject: first_alias(row, SUBJECT_ALIASES),
        kind: first_alias(row, KIND_ALIASES),
        teacher: first_alias(row, TEACHER_ALIASES),
    }
}

/// Day-first date parsing: `25.09.2025`, `25/09/2025`, `25-09-25` and ISO
/// `2025-09-25` all resolve; two-digit years are taken as 20xx. Anything
/// else is `None`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed
        .split(|c| c == '.' || c == '/' || c == '-')
        .map(str::trim)
        .collect();
    if parts.len() != 3 {
        return None;
    }
    let nums: Option<Vec<u32>> = parts.iter().map(|p| p.parse().ok()).collect();
    let nums = nums?;
    if parts[0].len() == 4 {
        // ISO year-first
        NaiveDate::from_ymd_opt(nums[0] as i32, nums[1], nums[2])
    } else {
        let mut year = nums[2] as i32;
        if year < 100 {
            year += 2000;
        }
        NaiveDate::from_ymd_opt(year, nums[1], nums[0])
    }
}

/// Normalizes a time-of-day cell to `HH:MM`.
///
/// Accepts `930`, `0930`, `9.30`, `09:30` and `09:30:00`-style values;
/// anything that fits no recognized shape yields an empty string.
pub fn normalize_time(raw: &str) -> String {
    let s: String = raw.trim().replace('.', ":").split_whitespace().collect();
    if s.is_empty() {
        return String::new();
    }
    if s.chars().all(|c| c.is_ascii_digit()) && (3..=4).contains(&s.len()) {
        let padded = format!("{s:0>4}");
        return format!("{}:{}", &padded[..2], &padded[2..]);
    }
    if let Some(prefix) = s.get(..5) {
        if is_hhmm(prefix) {
            return prefix.to_string();
        }
    }
    let mut pieces = s.splitn(3, ':');
    if let (Some(h), Some(m)) = (pieces.next(), pieces.next()) {
        if let (Ok(h), Ok(m)) = (h.parse::<u32>(), m.parse::<u32>()) {
            if h < 24 && m < 60 {
                return format!("{h:02}:{m:02}");
            }
        }
    }
    String::new()
}

fn is_hhmm(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 5
        && bytes[2] == b':'
        && s[..2].parse::<u32>().is_ok_and(|h| h < 24)
        && s[3..].parse::<u32>().is_ok_and(|m| m < 60)
}

impl LessonRecord {
    /// `"09:30–11:05"`, a lone endpoint, or an empty string.
    pub fn time_span(&self) -> String {
        match (self.time_start.is_empty(), self.time_end.is_empty()) {
            (false, false) => format!("{}–{}", self.time_start, self.time_end),
            (false, true) => self.time_start.clone(),
            (true, false) => self.time_end.clone(),
            (true, true) => String::new(),
        }
    }

    /// Parsed `(hour, minute)` of the start time, when one is resolvable.
    pub fn start_time(&self) -> Option<(u32, u32)> {
        let (h, m) = self.time_start.split_once(':')?;
        let h: u32 = h.parse().ok()?;
        let m: u32 = m.parse().ok()?;
        (h < 24 && m < 60).then_some((h, m))
    }
}
