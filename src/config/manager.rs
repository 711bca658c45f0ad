//! Configuration manager for loading and saving kiosk configuration
//!
//! This module provides functionality to load and save configuration to
//! `$FINGERVOTE_HOME/config.json` with atomic writes to prevent corruption.

use crate::config::models::KioskConfig;
use crate::error::{KioskError, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Get the kiosk home directory
    ///
    /// Honors the `FINGERVOTE_HOME` environment variable; falls back to a
    /// `.fingervote` directory under the working directory, which suits a
    /// kiosk launched from its deployment folder.
    pub fn kiosk_home() -> PathBuf {
        std::env::var("FINGERVOTE_HOME")
            .map_or_else(|_| PathBuf::from(".fingervote"), PathBuf::from)
    }

    /// Get the path to the configuration file
    ///
    /// Returns: `$FINGERVOTE_HOME/config.json`
    pub fn config_path() -> PathBuf {
        Self::kiosk_home().join("config.json")
    }

    /// Load configuration from the default location
    ///
    /// If the configuration file doesn't exist or is corrupt, returns
    /// default configuration.
    pub fn load() -> Result<KioskConfig> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path
    pub fn load_from(config_path: &Path) -> Result<KioskConfig> {
        if !config_path.exists() {
            info!("Configuration file not found, using defaults");
            return Ok(KioskConfig::default());
        }

        let json = std::fs::read_to_string(config_path)?;

        match serde_json::from_str::<KioskConfig>(&json) {
            Ok(mut config) => {
                config.selection = config.selection.sanitized();
                info!("Configuration loaded successfully");
                Ok(config)
            }
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                Ok(KioskConfig::default())
            }
        }
    }

    /// Save configuration to the default location with an atomic write
    pub fn save(config: &KioskConfig) -> Result<()> {
        Self::save_to(config, &Self::config_path())
    }

    /// Save configuration to an explicit path with an atomic write
    ///
    /// Serializes to a temporary file in the target directory, then
    /// persists it over the destination so a crash mid-write never leaves
    /// a truncated config behind.
    pub fn save_to(config: &KioskConfig, config_path: &Path) -> Result<()> {
        let config_dir = config_path.parent().ok_or_else(|| {
            KioskError::ConfigError(crate::error::StringError::new("Invalid config path"))
        })?;
        std::fs::create_dir_all(config_dir)?;

        let json = serde_json::to_string_pretty(config)?;

        let temp = tempfile::NamedTempFile::new_in(config_dir)?;
        std::fs::write(temp.path(), json)?;
        temp.persist(config_path)
            .map_err(|e| KioskError::ConfigError(Box::new(e)))?;

        info!("Configuration saved successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_shape() {
        let path = ConfigManager::config_path();
        assert!(path.to_string_lossy().ends_with("config.json"));
    }

    #[test]
    fn test_load_missing_config_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigManager::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.selection.speed_deg_per_frame, 7);
    }

    #[test]
    fn test_load_corrupt_config_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not valid json").unwrap();

        let config = ConfigManager::load_from(&path).unwrap();
        assert_eq!(config.selection.pause_frames, 60);
    }

    #[test]
    fn test_save_and_reload_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = KioskConfig::default();
        config.capture.device_index = 2;
        config.selection.speed_deg_per_frame = 10;

        ConfigManager::save_to(&config, &path).unwrap();
        let reloaded = ConfigManager::load_from(&path).unwrap();

        assert_eq!(reloaded.capture.device_index, 2);
        assert_eq!(reloaded.selection.speed_deg_per_frame, 10);
    }

    #[test]
    fn test_load_sanitizes_tuning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = KioskConfig::default();
        config.selection.speed_deg_per_frame = 0;
        // Write raw JSON directly so the out-of-range value reaches load_from
        std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

        let reloaded = ConfigManager::load_from(&path).unwrap();
        assert_eq!(reloaded.selection.speed_deg_per_frame, 1);
    }

    #[test]
    fn test_save_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        ConfigManager::save_to(&KioskConfig::default(), &path).unwrap();
        assert!(path.exists());
    }
}
