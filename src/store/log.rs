use crate::errors::AppResult;
use crate::models::{Record, Sheet};
use crate::store::Workbook;
use crate::ui::messages::warning;
use chrono::Local;

/// Append an internal audit line to the `Log` sheet.
pub fn ttlog(wb: &Workbook, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let entry = Record::new()
        .with("Date", Local::now().to_rfc3339())
        .with("Operation", operation)
        .with("Target", target)
        .with("Message", message);

    wb.append(Sheet::Log, &entry)?;
    Ok(())
}

/// Like `ttlog`, but a failure only prints a warning.
pub fn ttlog_or_warn(wb: &Workbook, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(wb, operation, target, message) {
        warning(format!("Failed to write internal log: {e}"));
    }
}
