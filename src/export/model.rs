// src/export/model.rs

use crate::core::Feed;
use crate::core::del::describe;
use crate::models::{CalendarEvent, Sheet};
use serde::Serialize;

/// Flat row for CSV / JSON feed exports.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FeedExport {
    pub section: String,
    pub sheet: String,
    pub row: usize,
    pub moment: String,
    pub summary: String,
}

impl FeedExport {
    fn event(section: &str, ev: &CalendarEvent<'_>) -> Self {
        Self {
            section: section.to_string(),
            sheet: Sheet::Calendar.name().to_string(),
            row: ev.row,
            moment: ev.raw_date().to_string(),
            summary: ev.title().to_string(),
        }
    }
}

/// Upcoming events, then completed ones, then everything new since the cutoff.
pub fn feed_rows(feed: &Feed<'_>) -> Vec<FeedExport> {
    let mut out: Vec<FeedExport> = feed
        .calendar
        .upcoming
        .iter()
        .map(|ev| FeedExport::event("upcoming", ev))
        .collect();

    out.extend(feed.calendar.past.iter().map(|ev| FeedExport::event("past", ev)));

    for recent in &feed.recent {
        let field = recent.sheet.moment_field().unwrap_or_default();
        out.extend(recent.rows.iter().map(|(row, r)| FeedExport {
            section: "new".to_string(),
            sheet: recent.sheet.name().to_string(),
            row: *row,
            moment: r.get(field).unwrap_or_default().to_string(),
            summary: describe(recent.sheet, r),
        }));
    }

    out
}
