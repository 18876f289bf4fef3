// src/export/logic.rs

use crate::core::Feed;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::feed_rows;
use crate::store::Workbook;
use crate::store::log::ttlog_or_warn;
use crate::ui::messages::{confirm, info, warning};
use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the feed to `file` (absolute path). Returns the number of rows
    /// written; an empty feed writes nothing.
    pub fn export(
        wb: &Workbook,
        feed: &Feed<'_>,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let rows = feed_rows(feed);
        if rows.is_empty() {
            warning("Nothing to export: no events and nothing new.");
            return Ok(0);
        }

        if path.exists() && !force {
            if !confirm(format!("'{}' already exists. Overwrite it?", path.display())) {
                return Err(AppError::Export("existing file not overwritten".into()));
            }
            info("Existing file will be overwritten.");
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        ttlog_or_warn(
            wb,
            "export",
            format.as_str(),
            &format!("{} rows to {}", rows.len(), path.display()),
        );

        Ok(rows.len())
    }
}
