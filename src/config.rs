//! Configuration management for the platform catalogue browser.
//!
//! Handles loading and saving configuration from JSONC files.
//! Manages search debounce, startup category, catalogue source and logging.

use crate::filter::engine::DEFAULT_DEBOUNCE;
use anyhow::{Context, Result};
use dirs::{config_dir, data_dir};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_DIR: &str = "dtmp-tui";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Quiet period in milliseconds before typed search input is applied
    pub debounce_ms: u64,
    /// Category shown at startup (first category when unset)
    pub default_category: Option<String>,
    /// JSON catalogue file (relative to config dir or absolute); built-in data when unset
    pub catalog_path: Option<String>,
    /// Log level or `EnvFilter` directive, overridden by `RUST_LOG`
    pub log_level: String,
    /// Log directory (relative to config dir or absolute)
    pub log_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
            default_category: None,
            catalog_path: None,
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    ///
    /// # Details
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = serde_json::from_str(&strip_comments(&content))
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        Ok(config)
    }

    /// Save configuration to file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Details
    /// Creates config directory if it doesn't exist.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, json)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Application config directory: `$XDG_CONFIG_HOME/dtmp-tui`.
    pub fn app_config_dir() -> Result<PathBuf> {
        let dir =
            config_dir().ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
        Ok(dir.join(APP_DIR))
    }

    /// Get default configuration file path.
    pub fn default_config_path() -> Result<PathBuf> {
        Ok(Self::app_config_dir()?.join("config.jsonc"))
    }

    /// Search debounce period.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Resolve the catalogue file, if one is configured.
    ///
    /// # Returns
    /// * `Result<Option<PathBuf>>` - Absolute path, None for the built-in catalogue
    pub fn catalog_file_path(&self) -> Result<Option<PathBuf>> {
        self.catalog_path
            .as_deref()
            .map(|p| resolve(Path::new(p), Self::app_config_dir))
            .transpose()
    }

    /// Resolve the log directory.
    ///
    /// # Details
    /// Defaults to `dtmp-tui/logs` under the platform data directory.
    pub fn log_dir_path(&self) -> Result<PathBuf> {
        match self.log_dir.as_deref() {
            Some(p) => resolve(Path::new(p), Self::app_config_dir),
            None => {
                let dir = data_dir()
                    .ok_or_else(|| anyhow::anyhow!("Failed to determine data directory"))?;
                Ok(dir.join(APP_DIR).join("logs"))
            }
        }
    }
}

/// Absolute paths pass through; relative ones are joined onto `base`.
fn resolve(path: &Path, base: impl FnOnce() -> Result<PathBuf>) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(base()?.join(path))
    }
}

/// Remove `//` line comments that are not inside a string literal.
fn strip_comments(content: &str) -> String {
    content
        .lines()
        .map(|line| {
            let mut in_string = false;
            let mut escaped = false;
            let mut prev_slash = false;
            for (i, ch) in line.char_indices() {
                match ch {
                    _ if escaped => escaped = false,
                    '\\' if in_string => escaped = true,
                    '"' => in_string = !in_string,
                    '/' if !in_string && prev_slash => return line[..i - 1].trim_end(),
                    _ => {}
                }
                prev_slash = ch == '/' && !in_string;
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.debounce(), Duration::from_millis(300));
        assert!(config.default_category.is_none());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load(Some(&temp_dir.path().join("absent.jsonc"))).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.jsonc");

        let config = Config {
            debounce_ms: 150,
            default_category: Some("tickets".to_string()),
            ..Config::default()
        };

        config.save(Some(&config_path)).unwrap();
        assert!(config_path.exists());

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_jsonc_with_comments() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");

        let jsonc_content = r#"{
            // Quiet period for search input
            "debounce_ms": 500, // trailing comment
            "catalog_path": "/srv/catalog//v2.json",
            "log_level": "dtmp_tui=debug"
        }"#;

        fs::write(&config_path, jsonc_content).unwrap();

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded.debounce_ms, 500);
        assert_eq!(loaded.catalog_path.as_deref(), Some("/srv/catalog//v2.json"));
        assert_eq!(loaded.log_level, "dtmp_tui=debug");
    }

    #[test]
    fn test_config_invalid_json_errors() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");
        fs::write(&config_path, "{ \"debounce_ms\": \"soon\" }").unwrap();
        assert!(Config::load(Some(&config_path)).is_err());
    }

    #[test]
    fn test_strip_comments_respects_strings() {
        assert_eq!(strip_comments(r#""a": "b" // note"#), r#""a": "b""#);
        assert_eq!(strip_comments(r#""url": "http://x""#), r#""url": "http://x""#);
        assert_eq!(strip_comments(r#""q": "say \"//\"" // c"#), r#""q": "say \"//\"""#);
        assert_eq!(strip_comments("// whole line"), "");
    }

    #[test]
    fn test_absolute_paths_pass_through() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = temp_dir.path().join("catalog.json");
        let config = Config {
            catalog_path: Some(catalog.display().to_string()),
            log_dir: Some(temp_dir.path().display().to_string()),
            ..Config::default()
        };
        assert_eq!(config.catalog_file_path().unwrap(), Some(catalog));
        assert_eq!(config.log_dir_path().unwrap(), temp_dir.path());
        assert_eq!(Config::default().catalog_file_path().unwrap(), None);
    }
}
