//! CSV-backed workbook: one file per sheet, header row first.

pub mod log;
pub mod workbook;

pub use workbook::Workbook;
