use crate::errors::{AppError, AppResult};
use crate::utils::{date, path, time};
use chrono::{Duration, NaiveDate, NaiveTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_workbook")]
    pub workbook: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub met_date: Option<String>,
    #[serde(default = "default_event_time")]
    pub event_time: String,
    #[serde(default = "default_lookback_hours")]
    pub lookback_hours: i64,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_workbook() -> String {
    Config::workbook_dir().to_string_lossy().to_string()
}
fn default_timezone() -> String {
    "UTC".to_string()
}
fn default_event_time() -> String {
    "00:00:00".to_string()
}
fn default_lookback_hours() -> i64 {
    24
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workbook: default_workbook(),
            timezone: default_timezone(),
            met_date: None,
            event_time: default_event_time(),
            lookback_hours: default_lookback_hours(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("duonotes")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".duonotes")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("duonotes.conf")
    }

    /// Default location of the workbook directory
    pub fn workbook_dir() -> PathBuf {
        Self::config_dir().join("workbook")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> AppResult<PathBuf> {
        fs::create_dir_all(Self::config_dir())?;
        let path = Self::config_file();
        fs::write(&path, serde_yaml::to_string(self)?)?;
        Ok(path)
    }

    /// Workbook directory with `~` expanded; relative paths live under the
    /// config directory.
    pub fn workbook_path(&self) -> PathBuf {
        path::resolve_under(&Self::config_dir(), &self.workbook)
    }

    pub fn tz(&self) -> AppResult<Tz> {
        date::parse_timezone(&self.timezone)
            .ok_or_else(|| AppError::InvalidTimezone(self.timezone.clone()))
    }

    pub fn met_date(&self) -> AppResult<Option<NaiveDate>> {
        match &self.met_date {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => date::parse_date(s)
                .map(Some)
                .ok_or_else(|| AppError::InvalidDate(s.clone())),
        }
    }

    pub fn event_time(&self) -> AppResult<NaiveTime> {
        time::parse_required_time(&self.event_time)
    }

    pub fn lookback(&self) -> AppResult<Duration> {
        if self.lookback_hours < 0 {
            return Err(AppError::Config(format!(
                "lookback_hours must not be negative (got {})",
                self.lookback_hours
            )));
        }
        Duration::try_hours(self.lookback_hours).ok_or_else(|| {
            AppError::Config(format!(
                "lookback_hours is out of range (got {})",
                self.lookback_hours
            ))
        })
    }

    /// Check every typed field at once so `config --check` can report them.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if let Err(e) = self.tz() {
            problems.push(e.to_string());
        }
        if let Err(e) = self.met_date() {
            problems.push(e.to_string());
        }
        if let Err(e) = self.event_time() {
            problems.push(e.to_string());
        }
        if let Err(e) = self.lookback() {
            problems.push(e.to_string());
        }
        problems
    }
}
