use crate::cli::commands::{open_workbook, parse_since, resolve_now};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{ActivityFeed, FeedContext};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::Session;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        since,
        now,
        force,
    } = cmd
    {
        let now = resolve_now(cfg, now)?;
        let session = Session::new(None, parse_since(since)?);
        let ctx = FeedContext::for_session(now, &session, cfg.lookback()?)
            .with_event_time(cfg.event_time()?);

        let wb = open_workbook(cfg)?;
        let snapshot = wb.snapshot()?;
        let feed = ActivityFeed::build(&snapshot, &ctx);

        ExportLogic::export(&wb, &feed, *format, file, *force)?;
    }

    Ok(())
}
