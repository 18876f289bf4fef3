use chrono::NaiveDateTime;
use duonotes::core::calculator::recency::{recency_filter, recency_filter_rows};
use duonotes::models::Record;

mod common;
use common::note;

fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

#[test]
fn test_empty_input_gives_empty_output() {
    let out = recency_filter(&[], "Timestamp", ts("2025-01-01 00:00:00"));
    assert!(out.is_empty());
}

#[test]
fn test_only_notes_after_cutoff() {
    let notes = vec![
        note("La", "first", "2025-01-01 10:00:00"),
        note("Ruan", "second", "2025-01-02 10:00:00"),
    ];

    let out = recency_filter(&notes, "Timestamp", ts("2025-01-01 12:00:00"));

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].get("Message"), Some("second"));
}

#[test]
fn test_all_older_than_cutoff() {
    let notes = vec![
        note("La", "a", "2024-12-30 08:00:00"),
        note("La", "b", "2024-12-31 23:59:59"),
    ];

    let out = recency_filter(&notes, "Timestamp", ts("2025-01-01 00:00:00"));
    assert!(out.is_empty());
}

#[test]
fn test_all_newer_keeps_order() {
    let notes = vec![
        note("La", "c", "2025-03-01 08:00:00"),
        note("Ruan", "a", "2025-02-01 08:00:00"),
        note("La", "b", "2025-02-15 08:00:00"),
    ];

    let out = recency_filter(&notes, "Timestamp", ts("2025-01-01 00:00:00"));

    let refs: Vec<&Record> = notes.iter().collect();
    assert_eq!(out, refs);
}

#[test]
fn test_cutoff_is_strict() {
    let notes = vec![note("La", "same second", "2025-01-01 12:00:00")];

    let out = recency_filter(&notes, "Timestamp", ts("2025-01-01 12:00:00"));
    assert!(out.is_empty());
}

#[test]
fn test_malformed_or_missing_moments_are_skipped() {
    let notes = vec![
        note("La", "bad", "01/02/2025 10:00"),
        note("La", "date only", "2025-01-02"),
        Record::from_pairs([("Name", "Ruan"), ("Message", "no stamp")]),
        note("Ruan", "good", "2025-01-02 10:00:00"),
    ];

    let out = recency_filter(&notes, "Timestamp", ts("2025-01-01 00:00:00"));

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].get("Message"), Some("good"));
}

#[test]
fn test_custom_moment_field() {
    let items = vec![
        Record::from_pairs([("Item", "Skydiving"), ("Added", "2025-05-01 10:00:00")]),
        Record::from_pairs([("Item", "Paris"), ("Added", "2025-05-03 10:00:00")]),
    ];

    let out = recency_filter(&items, "Added", ts("2025-05-02 00:00:00"));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].get("Item"), Some("Paris"));

    // wrong column name: nothing parses, nothing is new
    assert!(recency_filter(&items, "Timestamp", ts("2000-01-01 00:00:00")).is_empty());
}

#[test]
fn test_row_numbers_are_one_based_positions() {
    let notes = vec![
        note("La", "old", "2025-01-01 10:00:00"),
        note("La", "new", "2025-01-03 10:00:00"),
        note("La", "newer", "2025-01-04 10:00:00"),
    ];

    let out = recency_filter_rows(&notes, "Timestamp", ts("2025-01-02 00:00:00"));

    let rows: Vec<usize> = out.iter().map(|(row, _)| *row).collect();
    assert_eq!(rows, vec![2, 3]);
}
