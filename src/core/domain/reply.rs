//! Operation reply envelopes.
//!
//! Every lifecycle operation reports its outcome through a reply value:
//! `status` plus a human-readable `message`, with the affected document
//! and credential attached on success. Failures never cross the engine
//! boundary as panics or raw errors; they arrive here as `status: false`.

use serde::Serialize;

use super::{Credential, Secret};

/// Reply from a version lifecycle operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionReply {
    pub status: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<Secret>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential: Option<Credential>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versions: Option<Vec<Credential>>,
}

impl VersionReply {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: true,
            message: message.into(),
            secret: None,
            credential: None,
            versions: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: false,
            message: message.into(),
            secret: None,
            credential: None,
            versions: None,
        }
    }

    pub fn with_secret(mut self, secret: Option<Secret>) -> Self {
        self.secret = secret;
        self
    }

    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    pub fn with_versions(mut self, versions: Vec<Credential>) -> Self {
        self.versions = Some(versions);
        self
    }
}

/// Reply from a whole-secret document operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretReply {
    pub status: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<Secret>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secrets: Option<Vec<Secret>>,
}

impl SecretReply {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: true,
            message: message.into(),
            secret: None,
            secrets: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: false,
            message: message.into(),
            secret: None,
            secrets: None,
        }
    }

    pub fn with_secret(mut self, secret: Option<Secret>) -> Self {
        self.secret = secret;
        self
    }

    pub fn with_secrets(mut self, secrets: Vec<Secret>) -> Self {
        self.secrets = Some(secrets);
        self
    }
}
