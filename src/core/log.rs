use crate::errors::AppResult;
use crate::models::Sheet;
use crate::store::Workbook;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));

/// Longest op+target column before truncation.
const OP_MAX: usize = 48;

fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// ANSI colour for each audit operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "complete" => Colour::Cyan,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(wb: &Workbook) -> AppResult<()> {
        let rows = wb.read(Sheet::Log)?;

        if rows.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let entries: Vec<(usize, String, String, String, String)> = rows
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let raw_date = r.get("Date").unwrap_or_default();
                let date = chrono::DateTime::parse_from_rfc3339(raw_date)
                    .map(|dt| dt.format("%F %T").to_string())
                    .unwrap_or_else(|_| raw_date.to_string());
                (
                    i + 1,
                    date,
                    r.get("Operation").unwrap_or_default().to_string(),
                    r.get("Target").unwrap_or_default().to_string(),
                    r.get("Message").unwrap_or_default().to_string(),
                )
            })
            .collect();

        let id_w = entries.len().to_string().len();
        let date_w = entries.iter().map(|e| e.1.len()).max().unwrap_or(0);
        let op_w = entries
            .iter()
            .map(|(_, _, op, target, _)| op_target(op, target).chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_MAX);

        println!("📜 Internal log:\n");

        for (id, date, op, target, message) in entries {
            let color = color_for_operation(&op);
            let plain = crate::utils::formatting::truncate(&op_target(&op, &target), OP_MAX);

            // only the operation word is coloured
            let colored = match plain.split_once(' ') {
                Some((word, rest)) => format!("{} {}", color.paint(word), rest),
                None => color.paint(plain.as_str()).to_string(),
            };
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                colored,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

fn op_target(op: &str, target: &str) -> String {
    if target.is_empty() {
        op.to_string()
    } else {
        format!("{op} ({target})")
    }
}
