//! Append new rows to the content sheets.

use crate::errors::{AppError, AppResult};
use crate::models::{Record, Sheet};
use crate::store::Workbook;
use crate::store::log::ttlog_or_warn;
use crate::utils::date::{format_timestamp, parse_date};
use crate::utils::formatting::truncate;
use chrono::NaiveDateTime;

/// A note, bucket item, event or mood ready to be written.
#[derive(Debug, Clone)]
pub enum NewEntry {
    Note {
        name: String,
        message: String,
    },
    BucketItem {
        item: String,
        name: Option<String>,
    },
    Event {
        date: String,
        title: String,
        details: Option<String>,
        packing: Option<String>,
    },
    Mood {
        name: String,
        mood: String,
        note: Option<String>,
    },
}

impl NewEntry {
    pub fn sheet(&self) -> Sheet {
        match self {
            NewEntry::Note { .. } => Sheet::Notes,
            NewEntry::BucketItem { .. } => Sheet::BucketList,
            NewEntry::Event { .. } => Sheet::Calendar,
            NewEntry::Mood { .. } => Sheet::Moods,
        }
    }

    /// Presence checks, then the row to append with `now` as its moment.
    pub fn to_record(&self, now: NaiveDateTime) -> AppResult<Record> {
        let stamp = format_timestamp(&now);

        let record = match self {
            NewEntry::Note { name, message } => Record::new()
                .with("Name", required(name, "name")?)
                .with("Message", required(message, "message")?)
                .with("Timestamp", stamp),

            NewEntry::BucketItem { item, name } => Record::new()
                .with("Item", required(item, "item")?)
                .with("Name", optional(name))
                .with("Added", stamp)
                .with("Done", ""),

            NewEntry::Event {
                date,
                title,
                details,
                packing,
            } => {
                let date = required(date, "date")?;
                let parsed = parse_date(&date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;

                Record::new()
                    .with("Date", parsed.format("%Y-%m-%d").to_string())
                    .with("Title", required(title, "title")?)
                    .with("Details", optional(details))
                    .with("Packing", optional(packing))
                    .with("Created", stamp)
                    .with("Completed", "")
                    .with("CompletionNote", "")
            }

            NewEntry::Mood { name, mood, note } => Record::new()
                .with("Name", required(name, "name")?)
                .with("Mood", required(mood, "mood")?)
                .with("Note", optional(note))
                .with("Timestamp", stamp),
        };

        Ok(record)
    }

    /// Short text for the audit log.
    fn summary(&self) -> String {
        let text = match self {
            NewEntry::Note { name, message } => format!("{name}: {message}"),
            NewEntry::BucketItem { item, .. } => item.clone(),
            NewEntry::Event { date, title, .. } => format!("{date} {title}"),
            NewEntry::Mood { name, mood, .. } => format!("{name}: {mood}"),
        };
        truncate(text.trim(), 60)
    }
}

pub struct AddLogic;

impl AddLogic {
    /// Validate and append the entry. Returns the new 1-based row number.
    pub fn apply(wb: &Workbook, entry: &NewEntry, now: NaiveDateTime) -> AppResult<usize> {
        let record = entry.to_record(now)?;
        let sheet = entry.sheet();
        let row = wb.append(sheet, &record)?;

        ttlog_or_warn(
            wb,
            "add",
            &format!("{} #{}", sheet.name(), row),
            &entry.summary(),
        );

        Ok(row)
    }
}

fn required(value: &str, field: &'static str) -> AppResult<String> {
    let v = value.trim();
    if v.is_empty() {
        return Err(AppError::MissingField(field));
    }
    Ok(v.to_string())
}

fn optional(value: &Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or_default().to_string()
}
