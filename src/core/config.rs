use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Report missing keys and invalid values. Never modifies the file.
    pub fn check(cfg: &Config, path: &Path) -> AppResult<bool> {
        let mut ok = true;

        if path.exists() {
            let content = fs::read_to_string(path)?;
            let missing = migrate::missing_keys(&content)?;
            if !missing.is_empty() {
                ok = false;
                warning(format!(
                    "Missing keys (defaults in use): {}",
                    missing.join(", ")
                ));
            }
        } else {
            info(format!(
                "No configuration file at {}, defaults in use.",
                path.display()
            ));
        }

        for problem in cfg.validate() {
            ok = false;
            warning(problem);
        }

        if ok {
            success("Configuration looks good.");
        }
        Ok(ok)
    }

    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });
        let ed = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&ed).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{}'", ed));
                Ok(())
            }
            _ if ed != default_editor => {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    ed, default_editor
                ));
                Command::new(&default_editor)
                    .arg(path)
                    .status()
                    .map_err(|e| AppError::Config(e.to_string()))?;
                Ok(())
            }
            Ok(s) => Err(AppError::Config(format!("editor '{ed}' exited with {s}"))),
            Err(e) => Err(AppError::Config(e.to_string())),
        }
    }
}
