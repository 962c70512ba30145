//! Secret document types.
//!
//! A `Secret` is one persisted document: a named container of versioned,
//! encrypted values plus its environment metadata and timestamps. The
//! serde layout (camelCase fields) is exactly the persisted document
//! shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::compare;

/// Environment a secret belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvType {
    Production,
    Test,
    #[default]
    Development,
}

impl std::fmt::Display for EnvType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EnvType::Production => "production",
            EnvType::Test => "test",
            EnvType::Development => "development",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for EnvType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(EnvType::Production),
            "test" => Ok(EnvType::Test),
            "development" | "dev" => Ok(EnvType::Development),
            other => Err(format!(
                "unknown env type '{}' (expected production, test, or development)",
                other
            )),
        }
    }
}

/// One version entry: an identifier and its stored value.
///
/// Inside a document the value is always ciphertext; in replies it may be
/// plaintext when the caller asked for decryption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub version: String,
    pub value: String,
}

impl Credential {
    pub fn new(version: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            value: value.into(),
        }
    }
}

/// A persisted secret document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Secret {
    pub secret_name: String,
    pub env_name: String,
    pub env_type: EnvType,
    #[serde(default)]
    pub versions: Vec<Credential>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_access_at: DateTime<Utc>,
}

impl Secret {
    /// Create a fresh secret document with no versions.
    pub fn new(
        secret_name: impl Into<String>,
        env_name: impl Into<String>,
        env_type: EnvType,
    ) -> Self {
        let now = Utc::now();
        Self {
            secret_name: secret_name.into(),
            env_name: env_name.into(),
            env_type,
            versions: Vec::new(),
            created_at: now,
            updated_at: now,
            last_access_at: now,
        }
    }

    /// Whether a version entry with this identifier exists.
    pub fn has_version(&self, version: &str) -> bool {
        self.versions.iter().any(|c| c.version == version)
    }

    /// Look up a version entry by identifier.
    pub fn version(&self, version: &str) -> Option<&Credential> {
        self.versions.iter().find(|c| c.version == version)
    }

    /// The entry with the maximum rank under the version comparator.
    pub fn latest(&self) -> Option<&Credential> {
        self.versions
            .iter()
            .max_by(|a, b| compare::compare(&a.version, &b.version))
    }
}
