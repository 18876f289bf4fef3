//! "What's new" feed: calendar classification, per-sheet recent items and the
//! countdown to the next event, computed from one snapshot of the workbook.

use crate::core::calculator::classifier::{Classification, classify};
use crate::core::calculator::countdown::{Countdown, countdown};
use crate::core::calculator::recency::recency_filter_rows;
use crate::models::calendar_event::is_truthy;
use crate::models::{CalendarEvent, Record, Session, Sheet};
use crate::utils::date::at_time_of_day;
use chrono::{DateTime, Duration, NaiveDateTime, NaiveTime};
use chrono_tz::Tz;

/// Rows of the four content sheets, as read at one point in time.
#[derive(Debug, Default, Clone)]
pub struct Snapshot {
    pub notes: Vec<Record>,
    pub bucket: Vec<Record>,
    pub calendar: Vec<Record>,
    pub moods: Vec<Record>,
}

impl Snapshot {
    pub fn records(&self, sheet: Sheet) -> &[Record] {
        match sheet {
            Sheet::Notes => &self.notes,
            Sheet::BucketList => &self.bucket,
            Sheet::Calendar => &self.calendar,
            Sheet::Moods => &self.moods,
            Sheet::Log => &[],
        }
    }
}

/// Inputs that vary per call: the clock, the cutoff and the reference
/// time-of-day events count down to.
#[derive(Debug, Clone)]
pub struct FeedContext {
    pub now: DateTime<Tz>,
    pub cutoff: NaiveDateTime,
    pub event_time: NaiveTime,
}

impl FeedContext {
    pub fn new(now: DateTime<Tz>, cutoff: NaiveDateTime) -> Self {
        Self {
            now,
            cutoff,
            event_time: NaiveTime::MIN,
        }
    }

    /// Derive the cutoff from the viewer's session, defaulting to `lookback`
    /// before `now`.
    pub fn for_session(now: DateTime<Tz>, session: &Session, lookback: Duration) -> Self {
        let cutoff = session.cutoff(now.naive_local(), lookback);
        Self::new(now, cutoff)
    }

    pub fn with_event_time(mut self, event_time: NaiveTime) -> Self {
        self.event_time = event_time;
        self
    }
}

/// Rows of one sheet added after the cutoff, with their 1-based row numbers.
#[derive(Debug, Clone)]
pub struct RecentItems<'a> {
    pub sheet: Sheet,
    pub rows: Vec<(usize, &'a Record)>,
}

impl<'a> RecentItems<'a> {
    /// Most recently appended row.
    pub fn latest(&self) -> Option<(usize, &'a Record)> {
        self.rows.last().copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Feed<'a> {
    pub cutoff: NaiveDateTime,
    pub calendar: Classification<'a>,
    /// One entry per content sheet, in `Sheet::CONTENT` order.
    pub recent: Vec<RecentItems<'a>>,
    pub countdown: Option<Countdown>,
}

impl<'a> Feed<'a> {
    pub fn next_event(&self) -> Option<&CalendarEvent<'a>> {
        self.calendar.next_upcoming()
    }

    pub fn recent_for(&self, sheet: Sheet) -> Option<&RecentItems<'a>> {
        self.recent.iter().find(|r| r.sheet == sheet)
    }

    /// Nothing new anywhere since the cutoff.
    pub fn is_quiet(&self) -> bool {
        self.recent.iter().all(RecentItems::is_empty)
    }
}

pub struct ActivityFeed;

impl ActivityFeed {
    pub fn build<'a>(snapshot: &'a Snapshot, ctx: &FeedContext) -> Feed<'a> {
        let events = CalendarEvent::from_records(&snapshot.calendar);
        let calendar = classify(&events, ctx.now.date_naive());

        let recent = Sheet::CONTENT
            .iter()
            .map(|&sheet| RecentItems {
                sheet,
                rows: Self::recent_rows(snapshot, sheet, ctx.cutoff),
            })
            .collect();

        let countdown = calendar
            .next_upcoming()
            .and_then(|ev| Self::countdown_to(ev, ctx));

        Feed {
            cutoff: ctx.cutoff,
            calendar,
            recent,
            countdown,
        }
    }

    /// Countdown to the event's date at the context's reference time.
    /// `None` when the event has no usable date.
    pub fn countdown_to(event: &CalendarEvent<'_>, ctx: &FeedContext) -> Option<Countdown> {
        let date = event.date()?;
        let target = at_time_of_day(ctx.now.timezone(), date, ctx.event_time)?;
        Some(countdown(&target, &ctx.now))
    }

    fn recent_rows(
        snapshot: &Snapshot,
        sheet: Sheet,
        cutoff: NaiveDateTime,
    ) -> Vec<(usize, &Record)> {
        let Some(field) = sheet.moment_field() else {
            return Vec::new();
        };

        let rows = recency_filter_rows(snapshot.records(sheet), field, cutoff);

        if sheet == Sheet::Calendar {
            rows.into_iter()
                .filter(|(_, r)| !is_truthy(r.get("Completed")))
                .collect()
        } else {
            rows
        }
    }
}
