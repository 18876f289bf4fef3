//! Detect and backfill configuration keys added after a config file was written.

use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys a complete configuration file carries.
pub const KNOWN_KEYS: [&str; 6] = [
    "workbook",
    "timezone",
    "met_date",
    "event_time",
    "lookback_hours",
    "separator_char",
];

/// Keys from `KNOWN_KEYS` missing in the YAML document.
pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
    let yaml: Value = serde_yaml::from_str(content)?;
    let map = yaml.as_mapping().cloned().unwrap_or_default();

    Ok(KNOWN_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(*k))
        .collect())
}

/// Write defaults for missing keys, leaving present (and unknown) keys as-is.
///
/// Returns the keys that were added; an absent file is left alone.
pub fn run_config_migration(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        info(format!("No configuration file at {}", path.display()));
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let missing = missing_keys(&content)?;
    if missing.is_empty() {
        info("Configuration file is up to date.");
        return Ok(missing);
    }

    let mut map = serde_yaml::from_str::<Value>(&content)?
        .as_mapping()
        .cloned()
        .unwrap_or_default();
    let defaults = defaults_mapping()?;

    for key in &missing {
        let k = Value::String(key.to_string());
        if let Some(v) = defaults.get(&k) {
            map.insert(k, v.clone());
        }
    }

    fs::write(path, serde_yaml::to_string(&Value::Mapping(map))?)?;
    success(format!("Added missing keys: {}", missing.join(", ")));

    Ok(missing)
}

fn defaults_mapping() -> AppResult<Mapping> {
    let value = serde_yaml::to_value(Config::default())?;
    Ok(value.as_mapping().cloned().unwrap_or_default())
}
