//! User configuration loaded from `config.toml`

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

fn default_true() -> bool {
    true
}

fn default_recommendation_limit() -> usize {
    3
}

fn default_history_limit() -> usize {
    90
}

/// Reminder settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReminderSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Overrides the platform data directory
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Maximum feature recommendations shown
    #[serde(default = "default_recommendation_limit")]
    pub recommendation_limit: usize,
    /// Maximum archived wellness snapshots kept
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Offset from UTC in minutes for time-of-day preferences (default:
    /// the system's local offset)
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,
    #[serde(default)]
    pub reminders: ReminderSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            recommendation_limit: default_recommendation_limit(),
            history_limit: default_history_limit(),
            utc_offset_minutes: None,
            reminders: ReminderSettings::default(),
        }
    }
}

impl Config {
    /// Platform config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("haven").join("config.toml"))
    }

    /// Load from `path`, or from the default location when `None`. A missing
    /// file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(Some(&temp_dir.path().join("config.toml"))).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.recommendation_limit, 3);
        assert_eq!(config.history_limit, 90);
        assert!(config.reminders.enabled);
    }

    #[test]
    fn test_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            "recommendation_limit = 5\n\n[reminders]\nenabled = false\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.recommendation_limit, 5);
        assert_eq!(config.history_limit, 90);
        assert!(!config.reminders.enabled);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_data_dir_override() {
        let config = Config::parse("data_dir = \"/tmp/haven-data\"").unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/haven-data")));
    }

    #[test]
    fn test_utc_offset() {
        let config = Config::parse("utc_offset_minutes = -300").unwrap();
        assert_eq!(config.utc_offset_minutes, Some(-300));
        assert!(Config::default().utc_offset_minutes.is_none());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(matches!(
            Config::parse("history_limit = \"lots\""),
            Err(ConfigError::Toml(_))
        ));
    }
}
