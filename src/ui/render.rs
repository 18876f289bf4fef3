//! One-line renderings of sheet rows for the feed and list commands.

use crate::models::calendar_event::is_truthy;
use crate::models::{CalendarEvent, Record, Sheet};
use crate::utils::colors::{GREY, RESET};
use crate::utils::formatting::wrap_indented;

const WRAP: usize = 88;

pub fn render_row(sheet: Sheet, row: usize, record: &Record) -> String {
    let text = match sheet {
        Sheet::Notes => format!(
            "📅 {} — {}: {}",
            record.get("Timestamp").unwrap_or("?"),
            record.get("Name").unwrap_or("?"),
            record.get("Message").unwrap_or_default()
        ),
        Sheet::BucketList => {
            let mark = if is_truthy(record.get("Done")) { "✅" } else { "•" };
            match record.non_empty("Name") {
                Some(name) => format!(
                    "{mark} {} {GREY}(added by {name}){RESET}",
                    record.get("Item").unwrap_or_default()
                ),
                None => format!("{mark} {}", record.get("Item").unwrap_or_default()),
            }
        }
        Sheet::Calendar => render_event(&CalendarEvent::new(row, record)),
        Sheet::Moods => {
            let base = format!(
                "🫶 {} felt {} {GREY}({}){RESET}",
                record.get("Name").unwrap_or("?"),
                record.get("Mood").unwrap_or_default(),
                record.get("Timestamp").unwrap_or("?")
            );
            match record.non_empty("Note") {
                Some(note) => format!("{base}: {note}"),
                None => base,
            }
        }
        Sheet::Log => record
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(" "),
    };

    let line = format!("{GREY}#{row:<3}{RESET} {text}");
    wrap_indented(&line, WRAP, "      ")
}

pub fn render_event(ev: &CalendarEvent<'_>) -> String {
    let mut out = format!("📅 {}  {}", ev.raw_date(), ev.title());
    if let Some(d) = ev.details() {
        out.push_str(&format!(" — {d}"));
    }
    if let Some(p) = ev.packing() {
        out.push_str(&format!(" {GREY}[pack: {p}]{RESET}"));
    }
    if ev.is_completed() {
        out.push_str(" ✔️");
        if let Some(n) = ev.completion_note() {
            out.push_str(&format!(" {n}"));
        }
    }
    out
}

/// Heading for a sheet section in the feed.
pub fn sheet_title(sheet: Sheet) -> &'static str {
    match sheet {
        Sheet::Notes => "💌 Notes",
        Sheet::BucketList => "📝 Bucket list",
        Sheet::Calendar => "📆 Calendar",
        Sheet::Moods => "🌈 Moods",
        Sheet::Log => "📜 Log",
    }
}
