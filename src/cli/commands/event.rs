use crate::cli::commands::{open_workbook, resolve_now};
use crate::cli::parser::{Commands, EventAction};
use crate::config::Config;
use crate::core::add::{AddLogic, NewEntry};
use crate::core::calculator::classifier::classify;
use crate::core::complete::CompleteLogic;
use crate::errors::AppResult;
use crate::models::{CalendarEvent, Sheet};
use crate::ui::messages::{header, info, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Event { action } = cmd {
        let wb = open_workbook(cfg)?;

        match action {
            EventAction::Add {
                date,
                title,
                details,
                packing,
            } => {
                let entry = NewEntry::Event {
                    date: date.clone(),
                    title: title.clone().unwrap_or_default(),
                    details: details.clone(),
                    packing: packing.clone(),
                };
                let now = resolve_now(cfg, &None)?;
                let row = AddLogic::apply(&wb, &entry, now.naive_local())?;
                success(format!("Event planned for {date} (row #{row})"));
            }
            EventAction::List { past, now } => {
                let now = resolve_now(cfg, now)?;
                let records = wb.read(Sheet::Calendar)?;
                let events = CalendarEvent::from_records(&records);
                let classes = classify(&events, now.date_naive());

                let (title, list) = if *past {
                    ("✔️ Completed events", &classes.past)
                } else {
                    ("📆 Upcoming events", &classes.upcoming)
                };

                header(title, &cfg.separator_char);
                if list.is_empty() {
                    info("Nothing here yet.");
                    return Ok(());
                }

                print_events(list, *past);
            }
            EventAction::Complete { row, note } => {
                let ev = CompleteLogic::complete_event(&wb, *row, note.as_deref())?;
                success(format!(
                    "Marked as done: {}",
                    ev.get("Title").unwrap_or_default()
                ));
            }
        }
    }

    Ok(())
}

fn print_events(events: &[CalendarEvent<'_>], past: bool) {
    let mut columns = vec![
        Column::new("#", 4),
        Column::new("Date", 10),
        Column::new("Title", 32),
        Column::new("Details", 40),
        Column::new("Packing", 30),
    ];
    if past {
        columns.push(Column::new("How it went", 40));
    }

    let mut table = Table::new(columns);
    for ev in events {
        let mut row = vec![
            ev.row.to_string(),
            ev.raw_date().to_string(),
            ev.title().to_string(),
            ev.details().unwrap_or("--").to_string(),
            ev.packing().unwrap_or("--").to_string(),
        ];
        if past {
            row.push(ev.completion_note().unwrap_or("--").to_string());
        }
        table.add_row(row);
    }

    print!("{}", table.render());
}
