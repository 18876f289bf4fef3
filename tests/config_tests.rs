use chrono::{Duration, NaiveTime};
use duonotes::config::Config;
use duonotes::config::migrate::{KNOWN_KEYS, missing_keys};

#[test]
fn test_defaults_are_valid() {
    let cfg = Config::default();

    assert!(cfg.validate().is_empty());
    assert_eq!(cfg.tz().unwrap(), chrono_tz::Tz::UTC);
    assert_eq!(cfg.lookback().unwrap(), Duration::hours(24));
    assert_eq!(cfg.event_time().unwrap(), NaiveTime::MIN);
    assert!(cfg.met_date().unwrap().is_none());
}

#[test]
fn test_partial_yaml_falls_back_to_defaults() {
    let cfg: Config =
        serde_yaml::from_str("timezone: Africa/Johannesburg\nmet_date: 2025-06-23\n").unwrap();

    assert_eq!(cfg.timezone, "Africa/Johannesburg");
    assert_eq!(cfg.lookback_hours, 24);
    assert_eq!(cfg.separator_char, "-");
    assert_eq!(
        cfg.met_date().unwrap().map(|d| d.to_string()),
        Some("2025-06-23".to_string())
    );
}

#[test]
fn test_invalid_values_are_reported() {
    let cfg = Config {
        timezone: "Mars/Olympus".into(),
        met_date: Some("23/06/2025".into()),
        event_time: "25:00".into(),
        lookback_hours: -1,
        ..Config::default()
    };

    let problems = cfg.validate();

    assert_eq!(problems.len(), 4);
    assert!(problems[0].contains("Mars/Olympus"));
}

#[test]
fn test_out_of_range_lookback_is_an_error() {
    let cfg = Config {
        lookback_hours: i64::MAX,
        ..Config::default()
    };

    assert!(cfg.lookback().is_err());
    let problems = cfg.validate();
    assert_eq!(problems.len(), 1);
    assert!(problems[0].contains("lookback_hours"));
}

#[test]
fn test_short_event_time_is_accepted() {
    let cfg = Config {
        event_time: "18:30".into(),
        ..Config::default()
    };
    assert_eq!(cfg.event_time().unwrap(), NaiveTime::from_hms_opt(18, 30, 0).unwrap());
}

#[test]
fn test_missing_keys_detection() {
    let missing = missing_keys("workbook: /tmp/wb\ntimezone: UTC\n").unwrap();
    assert_eq!(
        missing,
        vec!["met_date", "event_time", "lookback_hours", "separator_char"]
    );

    let full = serde_yaml::to_string(&Config::default()).unwrap();
    assert!(missing_keys(&full).unwrap().is_empty());

    assert_eq!(missing_keys("").unwrap().len(), KNOWN_KEYS.len());
}
