//! Demo configuration with persistence.
//!
//! Settings for the demo binary, stored as JSON in the user's configuration
//! directory:
//!
//! - Linux: `~/.config/gelatui/config.json`
//! - macOS: `~/Library/Application Support/gelatui/config.json`
//! - Windows: `%APPDATA%/gelatui/config.json`
//!
//! Loading never fails the application: a missing or unreadable file falls
//! back to defaults.

use std::fs;
use std::path::PathBuf;

use color_eyre::eyre::Result;
use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Application name used for the configuration directory.
const APP_NAME: &str = "gelatui";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Explorer used when none is configured.
const DEFAULT_EXPLORER_URL: &str = "https://etherscan.io";

// ============================================================================
// UiConfig
// ============================================================================

/// Persisted settings for the demo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    /// Block explorer base URL used for transaction links.
    #[serde(default = "default_explorer_url")]
    pub explorer_url: String,
    /// Wallet addresses to display on startup.
    #[serde(default)]
    pub addresses: Vec<String>,
    /// Whether to skip the loading splash.
    #[serde(default)]
    pub skip_splash: bool,
}

fn default_explorer_url() -> String {
    DEFAULT_EXPLORER_URL.to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            explorer_url: default_explorer_url(),
            addresses: Vec::new(),
            skip_splash: false,
        }
    }
}

impl UiConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not determine config directory"))?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration, falling back to defaults on any failure.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::debug!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined, the file cannot
    /// be read, or the JSON cannot be parsed.
    pub fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        let content = fs::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to disk as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined or the file cannot
    /// be written.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UiConfig::default();
        assert_eq!(config.explorer_url, DEFAULT_EXPLORER_URL);
        assert!(config.addresses.is_empty());
        assert!(!config.skip_splash);
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = UiConfig {
            explorer_url: "https://explorer.inksepolia.com".to_string(),
            addresses: vec!["0x1111".to_string(), "0x2222".to_string()],
            skip_splash: true,
        };

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: UiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: UiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, UiConfig::default());

        let partial: UiConfig = serde_json::from_str(r#"{"addresses":["0xabc"]}"#).unwrap();
        assert_eq!(partial.explorer_url, DEFAULT_EXPLORER_URL);
        assert_eq!(partial.addresses, vec!["0xabc".to_string()]);
    }

    #[test]
    fn test_config_path_has_json_extension() {
        if let Ok(path) = UiConfig::config_path() {
            let extension = path.extension().and_then(|e| e.to_str());
            assert_eq!(extension, Some("json"));
        }
    }
}
