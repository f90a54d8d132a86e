//! # Configuration
//!
//! Stored as `config.json` in the data directory, next to the plant record.
//! Missing keys fall back to their defaults, so an empty `{}` is a valid file.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `storage-key` | `plants` | Store key the plant collection lives under |
//! | `default-frequency` | `3` | Days between waterings when `add` gets no `--every` |

use crate::error::{Result, SproutError};
use crate::model::MAX_FREQUENCY;
use crate::persistence::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FREQUENCY: u32 = 3;

pub const KEYS: &[&str] = &["storage-key", "default-frequency"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct GardenConfig {
    /// Key the plant collection is stored under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Watering interval used when none is given.
    #[serde(default = "default_frequency")]
    pub default_frequency: u32,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_frequency() -> u32 {
    DEFAULT_FREQUENCY
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            default_frequency: DEFAULT_FREQUENCY,
        }
    }
}

impl GardenConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(SproutError::Io)?;
        let config: GardenConfig =
            serde_json::from_str(&content).map_err(SproutError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`GardenConfig::load`], but falls back to defaults on any error.
    pub fn load_or_default<P: AsRef<Path>>(config_dir: P) -> Self {
        match Self::load(&config_dir) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    dir = %config_dir.as_ref().display(),
                    "Using default config: {}",
                    e
                );
                Self::default()
            }
        }
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(SproutError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(SproutError::Serialization)?;
        fs::write(config_path, content).map_err(SproutError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "default-frequency" => Some(self.default_frequency.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage-key" => {
                let value = value.trim();
                check_storage_key(value)?;
                self.storage_key = value.to_string();
            }
            "default-frequency" => {
                let days: u32 = value.trim().parse().map_err(|_| {
                    SproutError::Config(format!("default-frequency must be a number, got {}", value))
                })?;
                check_frequency(days)?;
                self.default_frequency = days;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        check_storage_key(&self.storage_key)?;
        check_frequency(self.default_frequency)
    }
}

pub fn unknown_key(key: &str) -> SproutError {
    SproutError::Config(format!("Unknown config key: {}", key))
}

fn check_frequency(days: u32) -> Result<()> {
    if (1..=MAX_FREQUENCY).contains(&days) {
        Ok(())
    } else {
        Err(SproutError::Config(format!(
            "default-frequency must be between 1 and {}, got {}",
            MAX_FREQUENCY, days
        )))
    }
}

fn check_storage_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key != "config"
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(SproutError::Config(format!(
            "storage-key must be letters, digits, '-' or '_' (and not \"config\"), got {:?}",
            key
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GardenConfig::default();
        assert_eq!(config.storage_key, "plants");
        assert_eq!(config.default_frequency, 3);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = GardenConfig::load(dir.path()).unwrap();
        assert_eq!(config, GardenConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();

        let mut config = GardenConfig::default();
        config.set("default-frequency", "5").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = GardenConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.default_frequency, 5);
        assert_eq!(loaded.storage_key, "plants");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"storage-key": "garden"}"#).unwrap();

        let loaded = GardenConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.storage_key, "garden");
        assert_eq!(loaded.default_frequency, 3);
    }

    #[test]
    fn test_broken_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "not json").unwrap();

        assert!(GardenConfig::load(dir.path()).is_err());
        assert_eq!(GardenConfig::load_or_default(dir.path()), GardenConfig::default());
    }

    #[test]
    fn test_rejects_invalid_values() {
        let mut config = GardenConfig::default();
        assert!(config.set("default-frequency", "0").is_err());
        assert!(config.set("default-frequency", "often").is_err());
        assert!(config.set("default-frequency", "36501").is_err());
        assert!(config.set("storage-key", "../etc").is_err());
        assert!(config.set("storage-key", "config").is_err());
        assert!(config.set("colour", "green").is_err());
        assert_eq!(config, GardenConfig::default());
    }

    #[test]
    fn test_get_known_and_unknown_keys() {
        let config = GardenConfig::default();
        assert_eq!(config.get("storage-key").as_deref(), Some("plants"));
        assert_eq!(config.get("default-frequency").as_deref(), Some("3"));
        assert_eq!(config.get("colour"), None);
    }

    #[test]
    fn test_largest_frequency_is_accepted() {
        let mut config = GardenConfig::default();
        config.set("default-frequency", "36500").unwrap();
        assert_eq!(config.default_frequency, MAX_FREQUENCY);
    }

    #[test]
    fn test_zero_frequency_in_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"default-frequency": 0}"#).unwrap();
        assert!(GardenConfig::load(dir.path()).is_err());
    }
}
