//! Formatting utilities used for CLI and export outputs.

use crate::core::calculator::countdown::Countdown;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `2d 03h 00m 00s`, dropping leading zero units but always keeping seconds.
pub fn format_countdown(c: &Countdown) -> String {
    if c.days > 0 {
        format!(
            "{}d {:02}h {:02}m {:02}s",
            c.days, c.hours, c.minutes, c.seconds
        )
    } else if c.hours > 0 {
        format!("{:02}h {:02}m {:02}s", c.hours, c.minutes, c.seconds)
    } else {
        format!("{:02}m {:02}s", c.minutes, c.seconds)
    }
}

/// Cut `s` to at most `max` chars, ending with "..." when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

/// Wrap free text for terminal output, indenting continuation lines.
pub fn wrap_indented(text: &str, width: usize, indent: &str) -> String {
    let opts = textwrap::Options::new(width).subsequent_indent(indent);
    textwrap::fill(text, opts)
}

pub fn plural(n: i64, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}
