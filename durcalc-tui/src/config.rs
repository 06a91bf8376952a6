use anyhow::{Context, Result};
use durcalc::{Mode, Operation};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_DIR: &str = "durcalc";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalcConfig {
    /// Mode selected on startup: "durations", "duration-to-date" or "date-difference"
    #[serde(default)]
    pub default_mode: Mode,
    /// Operation selected on startup: "plus" or "minus"
    #[serde(default)]
    pub default_operation: Operation,
    /// Show the token -> unit table next to the keypad
    #[serde(default = "default_show_token_legend")]
    pub show_token_legend: bool,
    /// Log filter used when RUST_LOG is unset, e.g. "info" or "durcalc=debug"
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_show_token_legend() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            default_mode: Mode::default(),
            default_operation: Operation::default(),
            show_token_legend: default_show_token_legend(),
            log_filter: default_log_filter(),
        }
    }
}

impl CalcConfig {
    fn app_dir() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join(APP_DIR))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join("config.toml"))
    }

    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join("durcalc.log"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let cfg = CalcConfig::from_toml("").unwrap();
        assert_eq!(cfg.default_mode, Mode::Durations);
        assert_eq!(cfg.default_operation, Operation::Plus);
        assert!(cfg.show_token_legend);
        assert_eq!(cfg.log_filter, "info");
    }

    #[test]
    fn test_parses_kebab_case_values() {
        let cfg = CalcConfig::from_toml(
            r#"
            default_mode = "date-difference"
            default_operation = "minus"
            show_token_legend = false
            "#,
        )
        .unwrap();
        assert_eq!(cfg.default_mode, Mode::DateDifference);
        assert_eq!(cfg.default_operation, Operation::Minus);
        assert!(!cfg.show_token_legend);
    }

    #[test]
    fn test_unknown_mode_is_an_error() {
        assert!(CalcConfig::from_toml(r#"default_mode = "sideways""#).is_err());
    }

    #[test]
    fn test_files_live_under_app_dir() {
        let Some(base) = dirs::config_dir() else {
            return;
        };
        let config = CalcConfig::config_path().unwrap();
        let log = CalcConfig::log_path().unwrap();
        assert!(config.starts_with(&base));
        assert!(config.ends_with("durcalc/config.toml"));
        assert!(log.ends_with("durcalc/durcalc.log"));
    }

    #[test]
    fn test_round_trips_through_toml() {
        let cfg = CalcConfig {
            default_mode: Mode::DurationToDate,
            ..CalcConfig::default()
        };
        let raw = toml::to_string_pretty(&cfg).unwrap();
        let back = CalcConfig::from_toml(&raw).unwrap();
        assert_eq!(back.default_mode, Mode::DurationToDate);
    }
}
