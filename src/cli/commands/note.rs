use crate::cli::commands::{open_workbook, resolve_now};
use crate::cli::parser::{Commands, NoteAction};
use crate::config::Config;
use crate::core::add::{AddLogic, NewEntry};
use crate::errors::AppResult;
use crate::models::Sheet;
use crate::ui::messages::{header, info, success};
use crate::ui::render::render_row;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Note { action } = cmd {
        let wb = open_workbook(cfg)?;

        match action {
            NoteAction::Add { name, message } => {
                let entry = NewEntry::Note {
                    name: name.clone().unwrap_or_default(),
                    message: message.clone().unwrap_or_default(),
                };
                let now = resolve_now(cfg, &None)?;
                let row = AddLogic::apply(&wb, &entry, now.naive_local())?;
                success(format!("Note saved! ❤️ (row #{row})"));
            }
            NoteAction::List => {
                let notes = wb.read(Sheet::Notes)?;
                header("💌 Existing notes", &cfg.separator_char);
                if notes.is_empty() {
                    info("No notes yet.");
                }
                // newest first
                for (i, note) in notes.iter().enumerate().rev() {
                    println!("{}", render_row(Sheet::Notes, i + 1, note));
                }
            }
        }
    }

    Ok(())
}
