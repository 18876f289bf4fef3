/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Per-sheet accent used in the feed and list headers.
pub fn color_for_sheet(sheet: crate::models::Sheet) -> &'static str {
    use crate::models::Sheet;
    match sheet {
        Sheet::Notes => MAGENTA,
        Sheet::BucketList => GREEN,
        Sheet::Calendar => BLUE,
        Sheet::Moods => YELLOW,
        Sheet::Log => GREY,
    }
}

/// Countdown color: today → red, within a week → yellow, later → cyan.
pub fn color_for_days_left(days: i64) -> &'static str {
    match days {
        0 => RED,
        1..=7 => YELLOW,
        _ => CYAN,
    }
}
