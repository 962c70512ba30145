//! Constants used throughout cabinet.
//!
//! Centralizes magic strings and configuration values.

/// Configuration file name (.cabinet.toml).
pub const CONFIG_FILE: &str = ".cabinet.toml";

/// Application directory relative to HOME (~/.cabinet).
pub const APP_DIR: &str = ".cabinet";

/// Secret document directory relative to the app dir (~/.cabinet/data).
pub const DATA_DIR: &str = "data";

/// Key file name relative to the app dir (~/.cabinet/cabinet.key).
pub const KEY_FILE: &str = "cabinet.key";

/// Environment variable holding the encryption key (hex or passphrase).
pub const KEY_ENV: &str = "CABINET_KEY";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "CABINET_DATA_DIR";
