use chrono::{Duration, NaiveDateTime};

/// Viewer context for one run: who is looking and when they last looked.
///
/// Owned by the caller and passed explicitly into feed construction.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub user: Option<String>,
    pub last_seen: Option<NaiveDateTime>,
}

impl Session {
    pub fn new(user: Option<String>, last_seen: Option<NaiveDateTime>) -> Self {
        Self { user, last_seen }
    }

    /// Cutoff for the "what's new" feed. Falls back to `lookback` before `now`
    /// on a first visit, saturating at the earliest representable moment.
    pub fn cutoff(&self, now: NaiveDateTime, lookback: Duration) -> NaiveDateTime {
        self.last_seen
            .unwrap_or_else(|| now.checked_sub_signed(lookback).unwrap_or(NaiveDateTime::MIN))
    }
}
