//! Encryption key material management.
//!
//! The key is process-wide configuration, never persisted with the data:
//! it comes from the `CABINET_KEY` environment variable (a passphrase or
//! generated hex string) or from a key file generated by `cabinet init`
//! and stored with restricted permissions (0600 on Unix).

use std::fs;
use std::path::PathBuf;

use rand::rngs::OsRng;
use rand::RngCore;
use tracing::debug;

use crate::core::config::Config;
use crate::core::constants;
use crate::core::crypto::Key;
use crate::error::{ConfigError, Result};

/// Default key file path (`~/.cabinet/cabinet.key`).
fn default_key_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(constants::APP_DIR).join(constants::KEY_FILE))
}

fn key_path(config: &Config) -> Result<PathBuf> {
    match &config.key_file {
        Some(path) => Ok(path.clone()),
        None => default_key_path(),
    }
}

/// Generate fresh key material and write it to the key file.
///
/// # Returns
///
/// The path of the written key file.
///
/// # Errors
///
/// Returns `ConfigError::AlreadyInitialized` if the key file exists, or a
/// write error.
pub fn generate(config: &Config) -> Result<PathBuf> {
    let path = key_path(config)?;
    if path.exists() {
        return Err(ConfigError::AlreadyInitialized.into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigError::WriteFile {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    let material: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();

    fs::write(&path, format!("{}\n", material)).map_err(|e| ConfigError::WriteFile {
        path: path.display().to_string(),
        source: e,
    })?;

    // Restrict permissions on the key file (Unix only)
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o600)).map_err(|e| {
            ConfigError::WriteFile {
                path: path.display().to_string(),
                source: e,
            }
        })?;
    }

    debug!(path = %path.display(), "key material generated");
    Ok(path)
}

/// Load the encryption key.
///
/// `CABINET_KEY` takes precedence; otherwise the key file configured in
/// `.cabinet.toml` (or the default path) is read.
///
/// # Errors
///
/// Returns `ConfigError::NoKey` if neither source yields key material.
pub fn load(config: &Config) -> Result<Key> {
    if let Ok(material) = std::env::var(constants::KEY_ENV) {
        if !material.trim().is_empty() {
            debug!("using key material from environment");
            return Ok(Key::derive(&material));
        }
    }

    let path = key_path(config)?;
    if !path.exists() {
        return Err(ConfigError::NoKey.into());
    }

    let material = fs::read_to_string(&path).map_err(|e| ConfigError::ReadFile {
        path: path.display().to_string(),
        source: e,
    })?;
    if material.trim().is_empty() {
        return Err(ConfigError::NoKey.into());
    }

    debug!(path = %path.display(), "key material loaded");
    Ok(Key::derive(&material))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_then_load() {
        let tmp = TempDir::new().unwrap();
        let config = Config {
            data_dir: None,
            key_file: Some(tmp.path().join("test.key")),
        };

        let path = generate(&config).unwrap();
        assert!(path.exists());

        // A second generate must not overwrite existing material.
        assert!(generate(&config).is_err());

        let key = load(&config).unwrap();
        let sealed = crate::core::crypto::encrypt("value", &key).unwrap();
        assert_eq!(
            crate::core::crypto::decrypt(&sealed, &key).unwrap().as_str(),
            "value"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_key_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let config = Config {
            data_dir: None,
            key_file: Some(tmp.path().join("test.key")),
        };

        let path = generate(&config).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }
}
