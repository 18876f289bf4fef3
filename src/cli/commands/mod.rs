//! Subcommand handlers plus the helpers they share.

pub mod bucket;
pub mod config;
pub mod del;
pub mod event;
pub mod export;
pub mod feed;
pub mod init;
pub mod log;
pub mod mood;
pub mod note;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::Workbook;
use crate::utils::date::{localize, now_in, parse_timestamp};
use chrono::{DateTime, NaiveDateTime};
use chrono_tz::Tz;

pub(crate) fn open_workbook(cfg: &Config) -> AppResult<Workbook> {
    Workbook::open(cfg.workbook_path())
}

/// `--now` if given, otherwise the real clock, in the configured zone.
pub(crate) fn resolve_now(cfg: &Config, now: &Option<String>) -> AppResult<DateTime<Tz>> {
    let tz = cfg.tz()?;
    match now {
        None => Ok(now_in(tz)),
        Some(s) => {
            let naive = parse_cli_timestamp(s)?;
            localize(tz, naive).ok_or_else(|| AppError::InvalidTimestamp(s.clone()))
        }
    }
}

pub(crate) fn parse_cli_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    parse_timestamp(s).ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))
}

pub(crate) fn parse_since(since: &Option<String>) -> AppResult<Option<NaiveDateTime>> {
    since.as_deref().map(parse_cli_timestamp).transpose()
}
