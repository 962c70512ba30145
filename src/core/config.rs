//! Configuration file management.
//!
//! Handles reading and writing the optional `.cabinet.toml` file. The CLI
//! works without one: every setting has an environment override or a
//! default under `~/.cabinet`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Project configuration stored in `.cabinet.toml`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Root directory for secret documents. Overridden by
    /// `CABINET_DATA_DIR`; defaults to `~/.cabinet/data`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// File holding the encryption key material. Overridden by
    /// `CABINET_KEY`; defaults to `~/.cabinet/cabinet.key`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_file: Option<PathBuf>,
}

impl Config {
    /// Path to the configuration file in the current directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Check if a configuration file exists in the current directory.
    pub fn exists() -> bool {
        Self::config_path().exists()
    }

    /// Load configuration, falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML is malformed, or
    /// `ConfigError::ReadFile` on an I/O failure.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadFile {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        Ok(config)
    }

    /// Save configuration to `.cabinet.toml`.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or the file write fails.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        debug!(path = %path.display(), "saving config");

        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(&path, contents).map_err(|e| ConfigError::WriteFile {
            path: path.display().to_string(),
            source: e,
        })?;

        Ok(())
    }

    /// Resolve the data directory: `CABINET_DATA_DIR` env, then the config
    /// entry, then `~/.cabinet/data`.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(constants::DATA_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }

        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(constants::APP_DIR).join(constants::DATA_DIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_roundtrip() {
        let config = Config {
            data_dir: Some(PathBuf::from("/tmp/cabinet-data")),
            key_file: None,
        };

        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();

        assert_eq!(parsed.data_dir, config.data_dir);
        assert!(parsed.key_file.is_none());
    }

    #[test]
    fn test_empty_config_parses() {
        let parsed: Config = toml::from_str("").unwrap();
        assert!(parsed.data_dir.is_none());
        assert!(parsed.key_file.is_none());
    }
}
