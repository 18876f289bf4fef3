use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;
use duonotes::core::calculator::countdown::Countdown;
use duonotes::core::{ActivityFeed, FeedContext, Snapshot};
use duonotes::models::{Record, Session, Sheet};
use duonotes::utils::date::days_since;

mod common;
use common::{event, note};

fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn now() -> DateTime<Tz> {
    Tz::UTC.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

fn snapshot() -> Snapshot {
    Snapshot {
        notes: vec![
            note("La", "old note", "2025-06-10 08:00:00"),
            note("Ruan", "miss you", "2025-06-14 20:00:00"),
            note("La", "good morning", "2025-06-15 07:30:00"),
        ],
        bucket: vec![
            Record::from_pairs([("Item", "Paris"), ("Added", "2025-06-01 10:00:00")]),
            Record::from_pairs([("Item", "Bungee"), ("Added", "2025-06-15 09:00:00")]),
        ],
        calendar: vec![
            event("2025-06-01", "Picnic", "TRUE"),
            event("2025-07-01", "Road trip", ""),
            Record::from_pairs([
                ("Date", "2025-06-20"),
                ("Title", "Movie night"),
                ("Created", "2025-06-15 10:00:00"),
                ("Completed", ""),
            ]),
            Record::from_pairs([
                ("Date", "2025-06-12"),
                ("Title", "Done and new"),
                ("Created", "2025-06-15 11:00:00"),
                ("Completed", "TRUE"),
            ]),
        ],
        moods: vec![Record::from_pairs([
            ("Name", "Ruan"),
            ("Mood", "happy"),
            ("Timestamp", "not a time"),
        ])],
    }
}

#[test]
fn test_feed_classifies_and_counts_down() {
    let snap = snapshot();
    let ctx = FeedContext::new(now(), ts("2025-06-14 12:00:00"));

    let feed = ActivityFeed::build(&snap, &ctx);

    let upcoming: Vec<&str> = feed.calendar.upcoming.iter().map(|e| e.title()).collect();
    assert_eq!(upcoming, vec!["Movie night", "Road trip"]);

    let past: Vec<&str> = feed.calendar.past.iter().map(|e| e.title()).collect();
    assert_eq!(past, vec!["Picnic", "Done and new"]);

    assert_eq!(feed.next_event().map(|e| e.title()), Some("Movie night"));

    // midnight of 2025-06-20 from noon of 2025-06-15
    assert_eq!(
        feed.countdown,
        Some(Countdown {
            days: 4,
            hours: 12,
            minutes: 0,
            seconds: 0
        })
    );
}

#[test]
fn test_feed_recent_items_per_sheet() {
    let snap = snapshot();
    let ctx = FeedContext::new(now(), ts("2025-06-14 12:00:00"));

    let feed = ActivityFeed::build(&snap, &ctx);

    let notes = feed.recent_for(Sheet::Notes).unwrap();
    assert_eq!(notes.len(), 2);
    let (row, latest) = notes.latest().unwrap();
    assert_eq!(row, 3);
    assert_eq!(latest.get("Message"), Some("good morning"));

    let bucket = feed.recent_for(Sheet::BucketList).unwrap();
    assert_eq!(bucket.latest().unwrap().1.get("Item"), Some("Bungee"));

    // completed events are never "new", even when created after the cutoff
    let calendar = feed.recent_for(Sheet::Calendar).unwrap();
    let titles: Vec<&str> = calendar.rows.iter().filter_map(|(_, r)| r.get("Title")).collect();
    assert_eq!(titles, vec!["Movie night"]);

    // unparseable timestamp: silently left out
    assert!(feed.recent_for(Sheet::Moods).unwrap().is_empty());
    assert!(!feed.is_quiet());
}

#[test]
fn test_feed_event_time_shifts_countdown() {
    let snap = snapshot();
    let ctx = FeedContext::new(now(), ts("2025-06-14 12:00:00"))
        .with_event_time(NaiveTime::from_hms_opt(18, 30, 0).unwrap());

    let feed = ActivityFeed::build(&snap, &ctx);

    assert_eq!(
        feed.countdown,
        Some(Countdown {
            days: 5,
            hours: 6,
            minutes: 30,
            seconds: 0
        })
    );
}

#[test]
fn test_event_today_at_midnight_counts_down_to_zero() {
    let snap = Snapshot {
        calendar: vec![event("2025-06-15", "Today!", "")],
        ..Default::default()
    };
    let ctx = FeedContext::new(now(), ts("2025-06-14 12:00:00"));

    let feed = ActivityFeed::build(&snap, &ctx);

    assert_eq!(feed.next_event().map(|e| e.title()), Some("Today!"));
    assert_eq!(feed.countdown, Some(Countdown::default()));
}

#[test]
fn test_empty_snapshot_is_quiet() {
    let snap = Snapshot::default();
    let ctx = FeedContext::new(now(), ts("2025-06-14 12:00:00"));

    let feed = ActivityFeed::build(&snap, &ctx);

    assert!(feed.is_quiet());
    assert!(feed.next_event().is_none());
    assert!(feed.countdown.is_none());
    assert_eq!(feed.recent.len(), 4);
}

#[test]
fn test_first_visit_defaults_to_lookback_window() {
    let session = Session::default();

    let ctx = FeedContext::for_session(now(), &session, Duration::hours(24));

    assert_eq!(ctx.cutoff, ts("2025-06-14 12:00:00"));
}

#[test]
fn test_huge_lookback_saturates_cutoff() {
    let cfg = duonotes::config::Config {
        lookback_hours: 3_000_000_000,
        ..Default::default()
    };
    let lookback = cfg.lookback().unwrap();

    let ctx = FeedContext::for_session(now(), &Session::default(), lookback);
    let snap = snapshot();
    let feed = ActivityFeed::build(&snap, &ctx);

    assert_eq!(ctx.cutoff, NaiveDateTime::MIN);
    assert_eq!(feed.recent_for(Sheet::Notes).unwrap().len(), 3);
}

#[test]
fn test_session_last_seen_wins_over_lookback() {
    let session = Session::new(Some("La".into()), Some(ts("2025-06-01 00:00:00")));

    let ctx = FeedContext::for_session(now(), &session, Duration::hours(24));
    let snap = snapshot();
    let feed = ActivityFeed::build(&snap, &ctx);

    assert_eq!(feed.cutoff, ts("2025-06-01 00:00:00"));
    assert_eq!(feed.recent_for(Sheet::Notes).unwrap().len(), 3);
}

#[test]
fn test_cutoff_uses_wall_clock_of_configured_zone() {
    let rome_now = chrono_tz::Europe::Rome
        .with_ymd_and_hms(2025, 6, 15, 12, 0, 0)
        .unwrap();

    let ctx = FeedContext::for_session(rome_now, &Session::default(), Duration::hours(2));

    assert_eq!(ctx.cutoff, ts("2025-06-15 10:00:00"));
}

#[test]
fn test_days_since_met() {
    let met = NaiveDate::from_ymd_opt(2025, 6, 23).unwrap();

    assert_eq!(days_since(met, NaiveDate::from_ymd_opt(2025, 7, 3).unwrap()), 10);
    assert_eq!(days_since(met, met), 0);
    assert_eq!(days_since(met, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()), 0);
}
