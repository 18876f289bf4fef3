use super::record::Record;
use crate::utils::date::parse_date;
use chrono::NaiveDate;

/// Typed view over a borrowed `Calendar` row.
///
/// `row` is the 1-based position in the source snapshot, kept so callers can
/// point back at the sheet (complete, delete).
#[derive(Debug, Clone, Copy)]
pub struct CalendarEvent<'a> {
    pub row: usize,
    pub record: &'a Record,
}

impl<'a> CalendarEvent<'a> {
    pub fn new(row: usize, record: &'a Record) -> Self {
        Self { row, record }
    }

    /// Wrap every row of a snapshot, numbering from 1.
    pub fn from_records(records: &'a [Record]) -> Vec<Self> {
        records
            .iter()
            .enumerate()
            .map(|(i, r)| Self::new(i + 1, r))
            .collect()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.record.get("Date").and_then(parse_date)
    }

    /// Only a case-insensitive "TRUE" counts; blank or missing is false.
    pub fn is_completed(&self) -> bool {
        is_truthy(self.record.get("Completed"))
    }

    pub fn title(&self) -> &'a str {
        self.record.get("Title").unwrap_or_default()
    }

    pub fn details(&self) -> Option<&'a str> {
        self.record.non_empty("Details")
    }

    pub fn packing(&self) -> Option<&'a str> {
        self.record.non_empty("Packing")
    }

    pub fn completion_note(&self) -> Option<&'a str> {
        self.record.non_empty("CompletionNote")
    }

    pub fn raw_date(&self) -> &'a str {
        self.record.get("Date").unwrap_or_default()
    }
}

/// Sheet booleans are written as TRUE/FALSE.
pub fn is_truthy(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.trim().eq_ignore_ascii_case("TRUE"))
}
