use crate::cli::commands::{open_workbook, resolve_now};
use crate::cli::parser::{BucketAction, Commands};
use crate::config::Config;
use crate::core::add::{AddLogic, NewEntry};
use crate::core::complete::CompleteLogic;
use crate::errors::AppResult;
use crate::models::Sheet;
use crate::ui::messages::{header, info, success};
use crate::ui::render::render_row;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Bucket { action } = cmd {
        let wb = open_workbook(cfg)?;

        match action {
            BucketAction::Add { item, name } => {
                let entry = NewEntry::BucketItem {
                    item: item.clone().unwrap_or_default(),
                    name: name.clone(),
                };
                let now = resolve_now(cfg, &None)?;
                let row = AddLogic::apply(&wb, &entry, now.naive_local())?;
                success(format!("Item added to bucket list! 🥾 (row #{row})"));
            }
            BucketAction::List => {
                let items = wb.read(Sheet::BucketList)?;
                header("📝 Our bucket list", &cfg.separator_char);
                if items.is_empty() {
                    info("The bucket list is empty.");
                }
                for (i, item) in items.iter().enumerate() {
                    println!("{}", render_row(Sheet::BucketList, i + 1, item));
                }
            }
            BucketAction::Done { row } => {
                let item = CompleteLogic::complete_bucket_item(&wb, *row)?;
                success(format!(
                    "Ticked off: {}",
                    item.get("Item").unwrap_or_default()
                ));
            }
        }
    }

    Ok(())
}
