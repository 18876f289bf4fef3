use crate::errors::{AppError, AppResult};
use crate::models::{Record, Sheet};
use crate::store::Workbook;
use crate::store::log::ttlog_or_warn;
use crate::ui::messages::info;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one row from a content sheet. The audit log itself is off limits.
    pub fn apply(wb: &Workbook, sheet: Sheet, row: usize) -> AppResult<Record> {
        if sheet == Sheet::Log {
            return Err(AppError::UnknownSheet(format!(
                "{} cannot be edited",
                sheet.name()
            )));
        }

        let removed = wb.delete(sheet, row)?;

        info(format!("Deleted row {} from {}", row, sheet.name()));
        ttlog_or_warn(
            wb,
            "del",
            &format!("{} #{}", sheet.name(), row),
            &describe(sheet, &removed),
        );

        Ok(removed)
    }
}

/// The main text cell of a row, for log lines and prompts.
pub fn describe(sheet: Sheet, record: &Record) -> String {
    let column = match sheet {
        Sheet::Notes => "Message",
        Sheet::BucketList => "Item",
        Sheet::Calendar => "Title",
        Sheet::Moods => "Mood",
        Sheet::Log => "Message",
    };
    record.get(column).unwrap_or_default().to_string()
}
