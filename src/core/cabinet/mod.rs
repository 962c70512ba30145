//! The primary interface for cabinet operations.
//!
//! `Cabinet` owns the document store and the encryption key and provides
//! all secret and version lifecycle operations.

mod secrets;
mod versions;

use crate::core::config::Config;
use crate::core::crypto::Key;
use crate::core::domain::Selection;
use crate::core::keys;
use crate::core::store::{Filesystem, SecretStore};
use crate::core::validation::validate_name;
use crate::error::Result;

/// The primary interface for cabinet operations.
///
/// Owns the store and the key; every operation takes an explicit
/// [`Selection`] so there is no process-wide current namespace or secret.
pub struct Cabinet {
    store: Box<dyn SecretStore>,
    key: Key,
}

impl Cabinet {
    /// Open a cabinet from the ambient configuration.
    ///
    /// Loads `.cabinet.toml` (or defaults), resolves the encryption key,
    /// and backs the cabinet with the filesystem document store.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoKey` if no key material is available.
    pub fn open() -> Result<Self> {
        let config = Config::load()?;
        let key = keys::load(&config)?;
        let store = Filesystem::new(config.data_dir()?);

        Ok(Self {
            store: Box::new(store),
            key,
        })
    }

    /// Build a cabinet over an explicit store and key.
    ///
    /// Used by tests and embedders that manage their own backend.
    pub fn with_store(store: impl SecretStore + 'static, key: Key) -> Self {
        Self {
            store: Box::new(store),
            key,
        }
    }

    /// Read-only access to the underlying store.
    pub fn store(&self) -> &dyn SecretStore {
        self.store.as_ref()
    }
}

// Private helper functions shared across modules

/// Validate every name in a selection before it reaches the store.
pub(super) fn validate_selection(sel: &Selection) -> Result<()> {
    validate_name("project", &sel.namespace.project_name)?;
    validate_name("service", &sel.namespace.service_name)?;
    validate_name("secret", &sel.secret_name)?;

    Ok(())
}
