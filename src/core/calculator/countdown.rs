use chrono::{DateTime, TimeZone};
use serde::Serialize;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Time left until a target, in whole units with days as the largest unit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    pub fn from_seconds(total: i64) -> Self {
        if total <= 0 {
            return Self::default();
        }
        Self {
            days: total / DAY,
            hours: (total % DAY) / HOUR,
            minutes: (total % HOUR) / MINUTE,
            seconds: total % MINUTE,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    pub fn total_seconds(&self) -> i64 {
        self.days * DAY + self.hours * HOUR + self.minutes * MINUTE + self.seconds
    }
}

/// Countdown from `now` to `target`; all-zero once the target has passed.
///
/// The difference is taken between absolute instants, never wall-clock times.
pub fn countdown<Tz: TimeZone>(target: &DateTime<Tz>, now: &DateTime<Tz>) -> Countdown {
    let elapsed = target.clone().signed_duration_since(now);
    Countdown::from_seconds(elapsed.num_seconds())
}
