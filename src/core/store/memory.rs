//! In-memory secret document store.
//!
//! Mutex-guarded map keyed by namespace, for unit tests and embedders
//! that do not need persistence. Semantics match the filesystem backend
//! exactly.

use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::Utc;

use super::{Append, Insert, SecretStore};
use crate::core::domain::{Credential, Namespace, Secret};
use crate::error::Result;

type Collections = BTreeMap<(String, String), BTreeMap<String, Secret>>;

/// In-memory document store.
#[derive(Default)]
pub struct Memory {
    inner: Mutex<Collections>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    fn with<R>(&self, f: impl FnOnce(&mut Collections) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }
}

fn key(ns: &Namespace) -> (String, String) {
    (ns.project_name.clone(), ns.service_name.clone())
}

impl SecretStore for Memory {
    fn read(&self, ns: &Namespace, secret_name: &str) -> Result<Option<Secret>> {
        Ok(self.with(|c| {
            c.get(&key(ns))
                .and_then(|coll| coll.get(secret_name))
                .cloned()
        }))
    }

    fn insert(&self, ns: &Namespace, secret: &Secret) -> Result<Insert> {
        Ok(self.with(|c| {
            let coll = c.entry(key(ns)).or_default();
            if coll.contains_key(&secret.secret_name) {
                Insert::AlreadyExists
            } else {
                coll.insert(secret.secret_name.clone(), secret.clone());
                Insert::Created
            }
        }))
    }

    fn list(&self, ns: &Namespace) -> Result<Vec<Secret>> {
        Ok(self.with(|c| {
            c.get(&key(ns))
                .map(|coll| coll.values().cloned().collect())
                .unwrap_or_default()
        }))
    }

    fn remove(&self, ns: &Namespace, secret_name: &str) -> Result<u64> {
        Ok(self.with(|c| {
            c.get_mut(&key(ns))
                .and_then(|coll| coll.remove(secret_name))
                .map(|_| 1)
                .unwrap_or(0)
        }))
    }

    fn append_version(
        &self,
        ns: &Namespace,
        secret_name: &str,
        entry: &Credential,
    ) -> Result<Append> {
        Ok(self.with(|c| {
            let Some(secret) = c.get_mut(&key(ns)).and_then(|coll| coll.get_mut(secret_name))
            else {
                return Append::MissingSecret;
            };

            if secret.has_version(&entry.version) {
                return Append::DuplicateVersion;
            }

            secret.versions.push(entry.clone());
            let now = Utc::now();
            secret.updated_at = now;
            secret.last_access_at = now;
            Append::Appended
        }))
    }

    fn set_version_value(
        &self,
        ns: &Namespace,
        secret_name: &str,
        version: &str,
        ciphertext: &str,
    ) -> Result<u64> {
        Ok(self.with(|c| {
            let Some(secret) = c.get_mut(&key(ns)).and_then(|coll| coll.get_mut(secret_name))
            else {
                return 0;
            };

            let Some(entry) = secret.versions.iter_mut().find(|c| c.version == version) else {
                return 0;
            };
            entry.value = ciphertext.to_string();

            let now = Utc::now();
            secret.updated_at = now;
            secret.last_access_at = now;
            1
        }))
    }

    fn remove_version(&self, ns: &Namespace, secret_name: &str, version: &str) -> Result<u64> {
        self.remove_versions(ns, secret_name, &[version.to_string()])
    }

    fn remove_versions(
        &self,
        ns: &Namespace,
        secret_name: &str,
        versions: &[String],
    ) -> Result<u64> {
        Ok(self.with(|c| {
            let Some(secret) = c.get_mut(&key(ns)).and_then(|coll| coll.get_mut(secret_name))
            else {
                return 0;
            };

            let before = secret.versions.len();
            secret.versions.retain(|c| !versions.contains(&c.version));
            let removed = (before - secret.versions.len()) as u64;
            if removed > 0 {
                let now = Utc::now();
                secret.updated_at = now;
                secret.last_access_at = now;
            }
            removed
        }))
    }

    fn touch_access(&self, ns: &Namespace, secret_name: &str) -> Result<()> {
        self.with(|c| {
            if let Some(secret) = c.get_mut(&key(ns)).and_then(|coll| coll.get_mut(secret_name)) {
                secret.last_access_at = Utc::now();
            }
        });
        Ok(())
    }
}
