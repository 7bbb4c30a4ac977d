use chrono::{Datelike, NaiveDate, Weekday};

use crate::schedule::locale;
use crate::schedule::record::LessonRecord;

/// Composable record filters, combined with logical AND. Every field is
/// optional; the default filters nothing out.
///
/// Records without a resolvable date are excluded by `exact_date` and by the
/// range bounds, but pass through unscoped queries untouched.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    pub exact_date: Option<NaiveDate>,
    /// Inclusive lower bound of a half-open `[from, to)` range.
    pub from: Option<NaiveDate>,
    /// Exclusive upper bound of a half-open `[from, to)` range.
    pub to: Option<NaiveDate>,
    pub weekday: Option<Weekday>,
    pub subject: Option<String>,
}

/// Filters and sorts lesson records.
///
/// The sort is stable and total: date ascending with missing dates first,
/// then lesson label, start time, or a fixed fallback.
pub fn query(records: &[LessonRecord], filters: &Filters) -> Vec<LessonRecord> {
    let mut out: Vec<LessonRecord> = records
        .iter()
        .filter(|r| matches(r, filters))
        .cloned()
        .collect();
    out.sort_by_key(sort_key);
    out
}

fn matches(record: &LessonRecord, filters: &Filters) -> bool {
    if let Some(target) = filters.exact_date {
        if record.date != Some(target) {
            return false;
        }
    }
    if let Some(from) = filters.from {
        match record.date {
            Some(d) if d >= from => {}
            _ => return false,
        }
    }
    if let Some(to) = filters.to {
        match record.date {
            Some(d) if d < to => {}
            _ => return false,
        }
    }
    if let Some(weekday) = filters.weekday {
        if record_weekday(record) != Some(weekday) {
            return false;
        }
    }
    if let Some(subject) = &filters.subject {
        let wanted = subject.trim().to_lowercase();
        if record.subject.trim().to_lowercase() != wanted {
            return false;
        }
    }
    true
}

// Derived from the date when present, else from the source weekday column.
fn record_weekday(record: &LessonRecord) -> Option<Weekday> {
    record
        .date
        .map(|d| d.weekday())
        .or_else(|| locale::weekday_from_name(&record.weekday))
}

fn sort_key(record: &LessonRecord) -> (NaiveDate, String) {
    let date = record.date.unwrap_or(NaiveDate::MIN);
    let secondary = if !record.label.is_empty() {
        record.label.clone()
    } else if !record.time_start.is_empty() {
        record.time_start.clone()
    } else {
        "00:00".to_string()
    };
    (date, secondary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(date: Option<&str>, label: &str, time: &str, subject: &str) -> LessonRecord {
        LessonRecord {
            date: date.and_then(crate::schedule::record::parse_date),
            label: label.into(),
            time_start: time.into(),
            subject: subject.into(),
            ..LessonRecord::default()
        }
    }

    #[test]
    fn test_exact_date_excludes_missing_dates() {
        let records = vec![
            lesson(Some("01.09.2025"), "1", "09:00", "Математика"),
            lesson(None, "2", "11:00", "Фізика"),
        ];
        let filters = Filters {
            exact_date: NaiveDate::from_ymd_opt(2025, 9, 1),
            ..Filters::default()
        };
        let out = query(&records, &filters);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].subject, "Математика");
    }

    #[test]
    fn test_range_is_half_open() {
        let records = vec![
            lesson(Some("01.09.2025"), "1", "", "A"),
            lesson(Some("06.09.2025"), "1", "", "B"),
            lesson(Some("07.09.2025"), "1", "", "C"),
            lesson(None, "1", "", "D"),
        ];
        let filters = Filters {
            from: NaiveDate::from_ymd_opt(2025, 9, 1),
            to: NaiveDate::from_ymd_opt(2025, 9, 7),
            ..Filters::default()
        };
        let subjects: Vec<String> = query(&records, &filters)
            .into_iter()
            .map(|r| r.subject)
            .collect();
        assert_eq!(subjects, vec!["A", "B"]);
    }

    #[test]
    fn test_weekday_filter_uses_source_column_fallback() {
        let mut dateless = lesson(None, "1", "", "Хімія");
        dateless.weekday = "Середа".into();
        let records = vec![
            // 03.09.2025 is a Wednesday
            lesson(Some("03.09.2025"), "1", "", "Біологія"),
            lesson(Some("04.09.2025"), "1", "", "Історія"),
            dateless,
        ];
        let filters = Filters {
            weekday: Some(Weekday::Wed),
            ..Filters::default()
        };
        let subjects: Vec<String> = query(&records, &filters)
            .into_iter()
            .map(|r| r.subject)
            .collect();
        assert_eq!(subjects, vec!["Хімія", "Біологія"]);
    }

    #[test]
    fn test_subject_filter_case_insensitive() {
        let records = vec![
            lesson(Some("01.09.2025"), "1", "", "Математика"),
            lesson(Some("02.09.2025"), "2", "", "Фізика"),
        ];
        let filters = Filters {
            subject: Some(" МАТЕМАТИКА ".into()),
            ..Filters::default()
        };
        assert_eq!(query(&records, &filters).len(), 1);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut first = lesson(Some("01.09.2025"), "1", "09:00", "Перший");
        let mut second = lesson(Some("01.09.2025"), "1", "09:00", "Другий");
        first.teacher = "A".into();
        second.teacher = "B".into();
        let out = query(&[first, second], &Filters::default());
        assert_eq!(out[0].teacher, "A");
        assert_eq!(out[1].teacher, "B");
    }

    #[test]
    fn test_sort_missing_date_first_then_label_then_time() {
        let records = vec![
            lesson(Some("02.09.2025"), "", "08:30", "C"),
            lesson(Some("01.09.2025"), "2", "", "B"),
            lesson(None, "", "", "A"),
        ];
        let subjects: Vec<String> = query(&records, &Filters::default())
            .into_iter()
            .map(|r| r.subject)
            .collect();
        assert_eq!(subjects, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(query(&[], &Filters::default()).is_empty());
    }
}
