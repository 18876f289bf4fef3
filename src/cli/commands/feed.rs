use crate::cli::commands::{open_workbook, parse_since, resolve_now};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{ActivityFeed, Feed, FeedContext};
use crate::errors::AppResult;
use crate::models::Session;
use crate::ui::messages::{banner, header, info};
use crate::ui::render::{render_event, render_row, sheet_title};
use crate::utils::colors::{RESET, color_for_days_left, color_for_sheet};
use crate::utils::date::{days_since, format_timestamp};
use crate::utils::formatting::{bold, format_countdown, plural};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Feed {
        since,
        as_user,
        now,
        all,
    } = cmd
    {
        let now = resolve_now(cfg, now)?;
        let session = Session::new(as_user.clone(), parse_since(since)?);
        let ctx = FeedContext::for_session(now, &session, cfg.lookback()?)
            .with_event_time(cfg.event_time()?);

        let wb = open_workbook(cfg)?;
        let snapshot = wb.snapshot()?;
        let feed = ActivityFeed::build(&snapshot, &ctx);

        match &session.user {
            Some(name) => banner(format!("Welcome back, {name}")),
            None => banner("duonotes"),
        }

        if let Some(met) = cfg.met_date()? {
            let days = days_since(met, now.date_naive());
            println!("💛 We've been talking for {}.", bold(&plural(days, "day")));
        }

        print_next_event(&feed);
        print_whats_new(&feed, *all, &cfg.separator_char);
        print_upcoming(&feed, &cfg.separator_char);
    }

    Ok(())
}

fn print_next_event(feed: &Feed<'_>) {
    match (feed.next_event(), feed.countdown) {
        (Some(ev), Some(c)) => {
            let color = color_for_days_left(c.days);
            println!(
                "⏳ Next up: {} on {} — {color}{}{RESET} to go",
                ev.title(),
                ev.raw_date(),
                format_countdown(&c)
            );
        }
        (Some(ev), None) => println!("⏳ Next up: {} on {}", ev.title(), ev.raw_date()),
        (None, _) => println!("📭 Nothing planned yet."),
    }
}

fn print_whats_new(feed: &Feed<'_>, all: bool, sep: &str) {
    header(
        format!("✨ What's new since {}", format_timestamp(&feed.cutoff)),
        sep,
    );

    if feed.is_quiet() {
        info("Nothing new since your last visit.");
        return;
    }

    for recent in feed.recent.iter().filter(|r| !r.is_empty()) {
        println!(
            "{}{}{} ({} new)",
            color_for_sheet(recent.sheet),
            sheet_title(recent.sheet),
            RESET,
            recent.len()
        );

        if all {
            for (row, record) in &recent.rows {
                println!("  {}", render_row(recent.sheet, *row, record));
            }
        } else if let Some((row, record)) = recent.latest() {
            println!("  {}", render_row(recent.sheet, row, record));
        }
    }
}

fn print_upcoming(feed: &Feed<'_>, sep: &str) {
    header("📆 Upcoming", sep);

    if feed.calendar.upcoming.is_empty() {
        info("No upcoming events.");
        return;
    }

    for ev in &feed.calendar.upcoming {
        println!("  #{:<3} {}", ev.row, render_event(ev));
    }
}
