//! Error types for cabinet operations.
//!
//! Errors are grouped per area (cipher, store, version lifecycle, config,
//! validation) and wrapped by the top-level [`Error`]. Store failures always
//! carry the underlying cause; nothing is swallowed.

use thiserror::Error;

/// Errors from the encryption boundary.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    /// Decryption failed: wrong key, truncated, or corrupted ciphertext.
    ///
    /// Covers every decrypt failure mode so a bad key can never produce
    /// silent garbage output.
    #[error("integrity check failed: {0}")]
    Integrity(String),

    #[error("invalid encryption key: {0}")]
    InvalidKey(String),
}

/// Errors from the secret document store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store i/o failure at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt secret document at {path}: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors from the secret version lifecycle.
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("secret '{0}' not found")]
    SecretNotFound(String),

    #[error("version '{0}' already exists")]
    AlreadyExists(String),

    /// No matching version entry. On update/delete this also covers a
    /// missing secret: the store reports a zero-modified count for both and
    /// the cases are not distinguished.
    #[error("version '{0}' not found")]
    NotFound(String),

    #[error("no versions found for secret '{0}'")]
    NoVersions(String),
}

/// Errors from whole-secret document operations.
#[derive(Error, Debug)]
pub enum SecretError {
    #[error("secret '{0}' already exists")]
    AlreadyExists(String),

    #[error("secret '{0}' not found")]
    NotFound(String),
}

/// Configuration and key material errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no encryption key: set CABINET_KEY or run `cabinet init`")]
    NoKey,

    #[error("already initialized: key file exists")]
    AlreadyInitialized,

    #[error("unable to determine home directory")]
    NoHomeDir,

    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Input validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{0} cannot be empty")]
    Empty(&'static str),

    #[error("invalid {field} '{value}': {reason}")]
    InvalidName {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("value for version '{0}' cannot be empty")]
    EmptyValue(String),
}

/// Top-level error wrapping all per-area errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Version(#[from] VersionError),

    #[error(transparent)]
    Secret(#[from] SecretError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
