//! Configuration management for the CLI.
//!
//! Settings live in `~/.trajectory/config.toml`:
//!
//! ```toml
//! [settings]
//! format = "table"
//! color = true
//! log_level = "warn"
//! module_id = "trajectory"
//!
//! [tables]
//! lane = "/etc/trajectory/lane.toml"
//! ```

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Scoring table files replacing the built-in tables
    #[serde(default)]
    pub tables: TablePaths,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Log filter used when neither `RUST_LOG` nor `--log-level` is given
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Module id stamped on saved result records
    #[serde(default = "default_module_id")]
    pub module_id: String,
}

/// Optional scoring table file per assessment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TablePaths {
    /// Life assessment tables
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub life: Option<PathBuf>,

    /// Lane diagnostic tables
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lane: Option<PathBuf>,

    /// Lane game tables
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<PathBuf>,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".trajectory").join("config.toml"))
    }

    /// Load configuration from an explicit file, or the default location.
    ///
    /// A missing default file yields the default configuration; a missing
    /// explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::path()?;
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            log_level: default_log_level(),
            module_id: default_module_id(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_module_id() -> String {
    "trajectory".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert_eq!(config.settings.log_level, "warn");
        assert!(config.tables.lane.is_none());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [settings]
            format = "json"

            [tables]
            lane = "lane.toml"
            "#,
        )
        .unwrap();
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert!(config.settings.color);
        assert_eq!(config.settings.module_id, "trajectory");
        assert_eq!(config.tables.lane, Some(PathBuf::from("lane.toml")));
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.settings.module_id = "ktb".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_explicit_file() {
        assert!(Config::load(Some(Path::new("/nonexistent/config.toml"))).is_err());
    }
}
