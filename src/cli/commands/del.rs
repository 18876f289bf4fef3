use crate::cli::commands::open_workbook;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::{DeleteLogic, describe};
use crate::errors::{AppError, AppResult};
use crate::models::Sheet;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { sheet, row, yes } = cmd {
        let sheet = Sheet::from_name(sheet)
            .filter(|s| *s != Sheet::Log)
            .ok_or_else(|| AppError::UnknownSheet(sheet.clone()))?;

        let wb = open_workbook(cfg)?;

        let rows = wb.read(sheet)?;
        let target = rows
            .get(row.wrapping_sub(1))
            .ok_or_else(|| AppError::InvalidRow {
                sheet: sheet.name().to_string(),
                row: *row,
            })?;

        if !*yes {
            let prompt = format!(
                "Delete row #{} from {} (\"{}\")? This action is irreversible.",
                row,
                sheet.name(),
                describe(sheet, target)
            );
            if !confirm(prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        DeleteLogic::apply(&wb, sheet, *row)?;
        success(format!("Row #{} removed from {}.", row, sheet.name()));
    }

    Ok(())
}
