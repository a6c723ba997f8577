//! Tool configuration: `bleedframe.toml`.
//!
//! Stock defaults are compiled in; a `bleedframe.toml` in the working
//! directory overrides them; CLI flags override both. The print targets and
//! codec settings are deliberately *not* configurable — they live in the
//! [`specs`](crate::specs) registry as constants, because a print house
//! expects the same geometry from every export.

use crate::export::ExportOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = "bleedframe.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// On-screen frame width new sessions author their crops at.
    pub reference_width: f64,
    /// File name of the batch archive the export command writes.
    pub archive_name: String,
    /// Target selection applied to images that were never given explicit
    /// options.
    pub defaults: ExportOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference_width: 400.0,
            archive_name: "export.zip".to_string(),
            defaults: ExportOptions::default(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load `bleedframe.toml` from the given directory, or fall back to the
    /// stock defaults when the file does not exist.
    pub fn load_or_default(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn stock_defaults() {
        let config = Config::default();
        assert_eq!(config.reference_width, 400.0);
        assert_eq!(config.archive_name, "export.zip");
        assert!(config.defaults.any_enabled());
    }

    #[test]
    fn partial_file_overrides_only_named_values() {
        let config: Config = toml::from_str(
            r#"
            reference_width = 640.0

            [defaults]
            pdf_set = false
            resize_percentage = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.reference_width, 640.0);
        assert_eq!(config.archive_name, "export.zip");
        assert!(!config.defaults.pdf_set);
        assert!(config.defaults.thumbnail);
        assert_eq!(config.defaults.resize_percentage, 50);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load_or_default(tmp.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        std::fs::write(&path, "reference_width = [not a number").unwrap();
        assert!(matches!(
            Config::load_or_default(tmp.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
