use chrono::{Datelike, NaiveDate, Weekday};
use std::cmp::Ordering;

/// Ukrainian weekday names indexed by days-from-Monday.
pub const WEEKDAYS_UA: [&str; 7] = [
    "Понеділок",
    "Вівторок",
    "Середа",
    "Четвер",
    "Пʼятниця",
    "Субота",
    "Неділя",
];

const WEEKDAYS_EN: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

// Lowercase Ukrainian alphabet in collation order. Plain codepoint order
// misplaces ґ, є, і and ї.
const UA_ALPHABET: &str = "абвгґдеєжзиіїйклмнопрстуфхцчшщьюя";

/// The localized weekday name for a date.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAYS_UA[date.weekday().num_days_from_monday() as usize]
}

/// Resolves a weekday from either a Ukrainian or an English name,
/// case-insensitively. Apostrophe variants in "пʼятниця" are unified first.
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    let needle = name
        .trim()
        .to_lowercase()
        .replace(['\'', '’'], "ʼ");
    if needle.is_empty() {
        return None;
    }
    let idx = WEEKDAYS_UA
        .iter()
        .position(|d| d.to_lowercase() == needle)
        .or_else(|| WEEKDAYS_EN.iter().position(|d| *d == needle))?;
    weekday_from_monday_index(idx)
}

fn weekday_from_monday_index(idx: usize) -> Option<Weekday> {
    [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ]
    .get(idx)
    .copied()
}

/// Compares two subject names for catalog ordering.
///
/// Strategy selection: names containing Cyrillic are compared through the
/// Ukrainian-alphabet collation key; everything else falls back to a
/// deterministic case-insensitive lexicographic comparison.
pub fn subject_cmp(a: &str, b: &str) -> Ordering {
    if has_cyrillic(a) || has_cyrillic(b) {
        collation_key(a).cmp(&collation_key(b))
    } else {
        a.to_lowercase().cmp(&b.to_lowercase())
    }
}

fn has_cyrillic(s: &str) -> bool {
    s.chars().any(|c| ('\u{0400}'..='\u{04FF}').contains(&c))
}

fn collation_key(s: &str) -> Vec<u32> {
    s.to_lowercase()
        .chars()
        .map(|c| match UA_ALPHABET.chars().position(|u| u == c) {
            Some(rank) => 0x1_0000 + rank as u32,
            None => c as u32,
        })
        .collect()
}
