//! Tick off calendar events and bucket-list items.

use crate::errors::{AppError, AppResult};
use crate::models::calendar_event::is_truthy;
use crate::models::{Record, Sheet};
use crate::store::Workbook;
use crate::store::log::ttlog_or_warn;

pub struct CompleteLogic;

impl CompleteLogic {
    /// Mark a calendar event completed, optionally with a note.
    /// An existing completion note is kept when no new one is given.
    pub fn complete_event(wb: &Workbook, row: usize, note: Option<&str>) -> AppResult<Record> {
        let mut fields = Record::new().with("Completed", "TRUE");
        if let Some(n) = note.map(str::trim).filter(|n| !n.is_empty()) {
            fields.set("CompletionNote", n);
        }

        let updated = Self::mark(wb, Sheet::Calendar, row, "Completed", &fields)?;
        let title = updated.get("Title").unwrap_or_default().to_string();
        ttlog_or_warn(wb, "complete", &format!("Calendar #{row}"), &title);
        Ok(updated)
    }

    pub fn complete_bucket_item(wb: &Workbook, row: usize) -> AppResult<Record> {
        let fields = Record::new().with("Done", "TRUE");
        let updated = Self::mark(wb, Sheet::BucketList, row, "Done", &fields)?;
        let item = updated.get("Item").unwrap_or_default().to_string();
        ttlog_or_warn(wb, "complete", &format!("BucketList #{row}"), &item);
        Ok(updated)
    }

    fn mark(
        wb: &Workbook,
        sheet: Sheet,
        row: usize,
        flag: &str,
        fields: &Record,
    ) -> AppResult<Record> {
        let rows = wb.read(sheet)?;
        let current = rows.get(row.wrapping_sub(1)).ok_or_else(|| AppError::InvalidRow {
            sheet: sheet.name().to_string(),
            row,
        })?;

        if is_truthy(current.get(flag)) && fields.get("CompletionNote").is_none() {
            // already done, nothing to write
            return Ok(current.clone());
        }

        wb.update(sheet, row, fields)
    }
}
