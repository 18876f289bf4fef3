use crate::models::CalendarEvent;
use chrono::NaiveDate;

/// Calendar events split by date and completion flag.
///
/// Every input event lands in exactly one of the three lists.
#[derive(Debug, Default, Clone)]
pub struct Classification<'a> {
    /// Not completed, dated today or later; ascending by date.
    pub upcoming: Vec<CalendarEvent<'a>>,
    /// Completed; ascending by date, ties in input order.
    pub past: Vec<CalendarEvent<'a>>,
    /// Unparseable date, or lapsed without being completed.
    pub excluded: Vec<CalendarEvent<'a>>,
}

impl<'a> Classification<'a> {
    pub fn next_upcoming(&self) -> Option<&CalendarEvent<'a>> {
        next_upcoming(&self.upcoming)
    }
}

pub fn classify<'a>(events: &[CalendarEvent<'a>], today: NaiveDate) -> Classification<'a> {
    let mut upcoming = Vec::new();
    let mut past = Vec::new();
    let mut excluded = Vec::new();

    for ev in events {
        let Some(date) = ev.date() else {
            excluded.push(*ev);
            continue;
        };

        if ev.is_completed() {
            past.push((date, *ev));
        } else if date >= today {
            upcoming.push((date, *ev));
        } else {
            excluded.push(*ev);
        }
    }

    // sort_by_key is stable
    upcoming.sort_by_key(|(d, _)| *d);
    past.sort_by_key(|(d, _)| *d);

    Classification {
        upcoming: upcoming.into_iter().map(|(_, ev)| ev).collect(),
        past: past.into_iter().map(|(_, ev)| ev).collect(),
        excluded,
    }
}

/// Nearest upcoming event, if any. Expects the `upcoming` list from `classify`.
pub fn next_upcoming<'b, 'a>(upcoming: &'b [CalendarEvent<'a>]) -> Option<&'b CalendarEvent<'a>> {
    upcoming.first()
}
