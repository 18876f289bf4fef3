use crate::cli::commands::{open_workbook, resolve_now};
use crate::cli::parser::{Commands, MoodAction};
use crate::config::Config;
use crate::core::add::{AddLogic, NewEntry};
use crate::errors::AppResult;
use crate::models::Sheet;
use crate::ui::messages::{header, info, success};
use crate::ui::render::render_row;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Mood { action } = cmd {
        let wb = open_workbook(cfg)?;

        match action {
            MoodAction::Add { name, mood, note } => {
                let entry = NewEntry::Mood {
                    name: name.clone().unwrap_or_default(),
                    mood: mood.clone().unwrap_or_default(),
                    note: note.clone(),
                };
                let now = resolve_now(cfg, &None)?;
                let row = AddLogic::apply(&wb, &entry, now.naive_local())?;
                success(format!("Mood logged (row #{row})"));
            }
            MoodAction::List => {
                let moods = wb.read(Sheet::Moods)?;
                header("🌈 Moods", &cfg.separator_char);
                if moods.is_empty() {
                    info("No moods logged yet.");
                }
                for (i, m) in moods.iter().enumerate().rev() {
                    println!("{}", render_row(Sheet::Moods, i + 1, m));
                }
            }
        }
    }

    Ok(())
}
