#![allow(clippy::unwrap_used)]

use schedbot::schedule::query::{query, Filters};
use schedbot::schedule::record::{self, normalize, RawRow};

fn raw_row(pairs: &[(&str, &str)]) -> RawRow {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_time_normalization_matrix() {
    for input in ["930", "9.30", "09:30", "0930"] {
        assert_eq!(record::normalize_time(input), "09:30", "input: {input}");
    }
}

#[test]
fn test_unparseable_date_is_absent_and_date_queries_exclude_it() {
    let rows = vec![
        raw_row(&[("date", "колись потім"), ("subject", "Математика")]),
        raw_row(&[("date", "01.09.2025"), ("subject", "Фізика")]),
    ];
    let records: Vec<_> = rows.iter().map(normalize).collect();

    assert_eq!(records[0].date, None);

    let exact = query(
        &records,
        &Filters {
            exact_date: record::parse_date("01.09.2025"),
            ..Filters::default()
        },
    );
    assert_eq!(exact.len(), 1);
    assert_eq!(exact[0].subject, "Фізика");

    let ranged = query(
        &records,
        &Filters {
            from: record::parse_date("01.01.2025"),
            to: record::parse_date("01.01.2026"),
            ..Filters::default()
        },
    );
    assert_eq!(ranged.len(), 1);

    // unscoped listings still see the dateless record
    assert_eq!(query(&records, &Filters::default()).len(), 2);
}

#[test]
fn test_normalizer_is_pure_and_idempotent() {
    let row = raw_row(&[
        ("Дата", "02.10.2025"),
        ("Пара", "1345"),
        ("Предмет", "Історія"),
        ("Викладач", "Петренко"),
    ]);
    let once = normalize(&row);
    let twice = normalize(&row);
    assert_eq!(once, twice);
    assert_eq!(once.time_start, "13:45");
}

#[test]
fn test_structured_and_freeform_dates_agree() {
    let freeform = normalize(&raw_row(&[("date", "07.09.2025")]));
    let iso = normalize(&raw_row(&[("Дата", "2025-09-07")]));
    assert_eq!(freeform.date, iso.date);
    assert!(freeform.date.is_some());
}

#[test]
fn test_missing_fields_stay_empty_not_fail() {
    let record = normalize(&raw_row(&[("несподівана колонка", "щось")]));
    assert_eq!(record.date, None);
    assert_eq!(record.subject, "");
    assert_eq!(record.teacher, "");
    assert_eq!(record.time_start, "");
    assert_eq!(record.time_span(), "");
    assert_eq!(record.start_time(), None);
}
