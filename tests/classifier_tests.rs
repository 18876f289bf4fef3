use chrono::NaiveDate;
use duonotes::core::calculator::classifier::{classify, next_upcoming};
use duonotes::models::{CalendarEvent, Record};

mod common;
use common::event;

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn titles(events: &[CalendarEvent<'_>]) -> Vec<String> {
    events.iter().map(|e| e.title().to_string()).collect()
}

#[test]
fn test_completed_and_upcoming_are_split() {
    let records = vec![
        event("2025-06-01", "Picnic", "TRUE"),
        event("2025-07-01", "Road trip", ""),
    ];
    let events = CalendarEvent::from_records(&records);

    let classes = classify(&events, day("2025-06-15"));

    assert_eq!(titles(&classes.upcoming), vec!["Road trip"]);
    assert_eq!(titles(&classes.past), vec!["Picnic"]);
    assert_eq!(
        classes.next_upcoming().map(|e| e.title()),
        Some("Road trip")
    );
}

#[test]
fn test_upcoming_sorted_by_date_and_includes_today() {
    let records = vec![
        event("2025-09-10", "Concert", ""),
        event("2025-06-15", "Dinner", ""),
        event("2025-07-04", "Fireworks", ""),
    ];
    let events = CalendarEvent::from_records(&records);

    let classes = classify(&events, day("2025-06-15"));

    assert_eq!(
        titles(&classes.upcoming),
        vec!["Dinner", "Fireworks", "Concert"]
    );
    assert!(classes.past.is_empty());
}

#[test]
fn test_past_is_stable_for_equal_dates() {
    let records = vec![
        event("2025-05-02", "Second day", "TRUE"),
        event("2025-05-01", "Morning hike", "true"),
        event("2025-05-01", "Evening swim", "True"),
    ];
    let events = CalendarEvent::from_records(&records);

    let classes = classify(&events, day("2025-06-15"));

    assert_eq!(
        titles(&classes.past),
        vec!["Morning hike", "Evening swim", "Second day"]
    );
}

#[test]
fn test_completed_in_any_case_never_upcoming() {
    let records = vec![
        event("2030-01-01", "Future but done", "tRuE"),
        event("2030-01-02", "Yes is not true", "yes"),
        event("2030-01-03", "Padded", " TRUE "),
    ];
    let events = CalendarEvent::from_records(&records);

    let classes = classify(&events, day("2025-06-15"));

    assert_eq!(titles(&classes.upcoming), vec!["Yes is not true"]);
    assert_eq!(titles(&classes.past), vec!["Future but done", "Padded"]);
}

#[test]
fn test_lapsed_uncompleted_event_is_in_neither_list() {
    let records = vec![event("2025-06-14", "Forgot about it", "")];
    let events = CalendarEvent::from_records(&records);

    let classes = classify(&events, day("2025-06-15"));

    assert!(classes.upcoming.is_empty());
    assert!(classes.past.is_empty());
    assert_eq!(titles(&classes.excluded), vec!["Forgot about it"]);
}

#[test]
fn test_unparseable_or_missing_dates_are_excluded() {
    let records = vec![
        event("next friday", "Vague", ""),
        event("2025-13-01", "Bad month", "TRUE"),
        Record::from_pairs([("Title", "No date at all")]),
        event("2025-07-01", "Fine", ""),
    ];
    let events = CalendarEvent::from_records(&records);

    let classes = classify(&events, day("2025-06-15"));

    assert_eq!(titles(&classes.upcoming), vec!["Fine"]);
    assert!(classes.past.is_empty());
    assert_eq!(classes.excluded.len(), 3);
}

#[test]
fn test_every_event_lands_in_exactly_one_bucket() {
    let records = vec![
        event("2025-06-01", "a", "TRUE"),
        event("2025-06-20", "b", ""),
        event("2025-06-10", "c", ""),
        event("garbage", "d", ""),
        event("2025-06-20", "e", "TRUE"),
        event("2025-06-15", "f", "FALSE"),
    ];
    let events = CalendarEvent::from_records(&records);

    let classes = classify(&events, day("2025-06-15"));

    let mut rows: Vec<usize> = classes
        .upcoming
        .iter()
        .chain(&classes.past)
        .chain(&classes.excluded)
        .map(|e| e.row)
        .collect();
    rows.sort();
    assert_eq!(rows, vec![1, 2, 3, 4, 5, 6]);

    for up in &classes.upcoming {
        assert!(!classes.past.iter().any(|p| p.row == up.row));
    }
}

#[test]
fn test_next_upcoming_on_empty_list_is_none() {
    let classes = classify(&[], day("2025-06-15"));

    assert!(classes.upcoming.is_empty());
    assert!(classes.past.is_empty());
    assert!(next_upcoming(&classes.upcoming).is_none());
}

#[test]
fn test_row_numbers_follow_input_order() {
    let records = vec![
        event("2025-08-01", "later", ""),
        event("2025-07-01", "sooner", ""),
    ];
    let events = CalendarEvent::from_records(&records);

    let classes = classify(&events, day("2025-06-15"));

    let next = classes.next_upcoming().expect("an upcoming event");
    assert_eq!(next.row, 2);
    assert_eq!(next.title(), "sooner");
}
