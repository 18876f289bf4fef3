use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::log;
use crate::ui::messages::{info, success};
use crate::utils::date::{parse_date, parse_timezone};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the workbook directory with one CSV per sheet
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Init { met_date, timezone } = &cli.command {
        let mut cfg = cfg.clone();

        if let Some(tz) = timezone {
            parse_timezone(tz).ok_or_else(|| AppError::InvalidTimezone(tz.clone()))?;
            cfg.timezone = tz.clone();
        }
        if let Some(d) = met_date {
            parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
            cfg.met_date = Some(d.clone());
        }

        println!("⚙️  Initializing duonotes…");

        if !cli.test {
            let path = cfg.save()?;
            println!("📄 Config file : {}", path.display());
        }

        let wb = crate::store::Workbook::open(cfg.workbook_path())?;
        println!("🗂️  Workbook    : {}", wb.root().display());

        let created = wb.init()?;
        if created.is_empty() {
            info("All sheets already present.");
        } else {
            let names: Vec<&str> = created.iter().map(|s| s.name()).collect();
            success(format!("Created sheets: {}", names.join(", ")));
        }

        log::ttlog_or_warn(
            &wb,
            "init",
            "workbook",
            &format!("Workbook initialized at {}", wb.root().display()),
        );

        println!("🎉 duonotes initialization completed!");
    }

    Ok(())
}
