//! Filesystem-backed secret document store.
//!
//! One JSON document per secret at
//! `<root>/<projectName>/<serviceName>/<secretName>.json`. Mutations are
//! applied as load → modify → write-temp → rename, so a document is
//! replaced in a single step and readers never observe a half-written
//! file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::debug;

use super::{Append, Insert, SecretStore};
use crate::core::domain::{Credential, Namespace, Secret};
use crate::error::{Result, StoreError};

/// Filesystem document store rooted at a data directory.
pub struct Filesystem {
    root: PathBuf,
}

impl Filesystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn collection_dir(&self, ns: &Namespace) -> PathBuf {
        self.root.join(&ns.project_name).join(&ns.service_name)
    }

    fn doc_path(&self, ns: &Namespace, secret_name: &str) -> PathBuf {
        self.collection_dir(ns).join(format!("{}.json", secret_name))
    }

    fn load(&self, path: &Path) -> Result<Option<Secret>> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_err(path, e)),
        };

        let secret = serde_json::from_str(&contents).map_err(|e| StoreError::Corrupt {
            path: path.display().to_string(),
            source: e,
        })?;

        Ok(Some(secret))
    }

    /// Write a document atomically: temp file in the same directory, then
    /// rename over the destination.
    fn persist(&self, path: &Path, secret: &Secret) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
        }

        let contents = serde_json::to_vec_pretty(secret).map_err(|e| StoreError::Corrupt {
            path: path.display().to_string(),
            source: e,
        })?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, contents).map_err(|e| io_err(&tmp, e))?;
        fs::rename(&tmp, path).map_err(|e| io_err(path, e))?;

        debug!(path = %path.display(), "document persisted");
        Ok(())
    }
}

fn io_err(path: &Path, source: std::io::Error) -> crate::error::Error {
    StoreError::Io {
        path: path.display().to_string(),
        source,
    }
    .into()
}

impl SecretStore for Filesystem {
    fn read(&self, ns: &Namespace, secret_name: &str) -> Result<Option<Secret>> {
        self.load(&self.doc_path(ns, secret_name))
    }

    fn insert(&self, ns: &Namespace, secret: &Secret) -> Result<Insert> {
        let path = self.doc_path(ns, &secret.secret_name);
        if path.exists() {
            return Ok(Insert::AlreadyExists);
        }

        self.persist(&path, secret)?;
        Ok(Insert::Created)
    }

    fn list(&self, ns: &Namespace) -> Result<Vec<Secret>> {
        let dir = self.collection_dir(ns);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_err(&dir, e)),
        };

        let mut secrets = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| io_err(&dir, e))?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(secret) = self.load(&path)? {
                secrets.push(secret);
            }
        }

        secrets.sort_by(|a, b| a.secret_name.cmp(&b.secret_name));
        Ok(secrets)
    }

    fn remove(&self, ns: &Namespace, secret_name: &str) -> Result<u64> {
        let path = self.doc_path(ns, secret_name);
        match fs::remove_file(&path) {
            Ok(()) => Ok(1),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(io_err(&path, e)),
        }
    }

    fn append_version(
        &self,
        ns: &Namespace,
        secret_name: &str,
        entry: &Credential,
    ) -> Result<Append> {
        let path = self.doc_path(ns, secret_name);
        let Some(mut secret) = self.load(&path)? else {
            return Ok(Append::MissingSecret);
        };

        // Authoritative uniqueness check, inside the atomic replacement.
        if secret.has_version(&entry.version) {
            return Ok(Append::DuplicateVersion);
        }

        secret.versions.push(entry.clone());
        let now = Utc::now();
        secret.updated_at = now;
        secret.last_access_at = now;

        self.persist(&path, &secret)?;
        Ok(Append::Appended)
    }

    fn set_version_value(
        &self,
        ns: &Namespace,
        secret_name: &str,
        version: &str,
        ciphertext: &str,
    ) -> Result<u64> {
        let path = self.doc_path(ns, secret_name);
        let Some(mut secret) = self.load(&path)? else {
            return Ok(0);
        };

        let Some(entry) = secret.versions.iter_mut().find(|c| c.version == version) else {
            return Ok(0);
        };
        entry.value = ciphertext.to_string();

        let now = Utc::now();
        secret.updated_at = now;
        secret.last_access_at = now;

        self.persist(&path, &secret)?;
        Ok(1)
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
        let path = self.doc_path(ns, secret_name);
        let Some(mut secret) = self.load(&path)? else {
            return Ok(0);
        };

        let before = secret.versions.len();
        secret.versions.retain(|c| !versions.contains(&c.version));
        let removed = (before - secret.versions.len()) as u64;
        if removed == 0 {
            return Ok(0);
        }

        let now = Utc::now();
        secret.updated_at = now;
        secret.last_access_at = now;

        self.persist(&path, &secret)?;
        Ok(removed)
    }

    fn touch_access(&self, ns: &Namespace, secret_name: &str) -> Result<()> {
        let path = self.doc_path(ns, secret_name);
        let Some(mut secret) = self.load(&path)? else {
            return Ok(());
        };

        secret.last_access_at = Utc::now();
        self.persist(&path, &secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::EnvType;
    use tempfile::TempDir;

    fn store() -> (TempDir, Filesystem) {
        let tmp = TempDir::new().unwrap();
        let store = Filesystem::new(tmp.path());
        (tmp, store)
    }

    fn ns() -> Namespace {
        Namespace::new("billing", "api")
    }

    #[test]
    fn test_insert_and_read() {
        let (_tmp, store) = store();
        let secret = Secret::new("db-password", "primary", EnvType::Test);

        assert_eq!(store.insert(&ns(), &secret).unwrap(), Insert::Created);
        assert_eq!(
            store.insert(&ns(), &secret).unwrap(),
            Insert::AlreadyExists
        );

        let read = store.read(&ns(), "db-password").unwrap().unwrap();
        assert_eq!(read.secret_name, "db-password");
        assert!(store.read(&ns(), "missing").unwrap().is_none());
    }

    #[test]
    fn test_append_rejects_duplicates() {
        let (_tmp, store) = store();
        store
            .insert(&ns(), &Secret::new("s", "primary", EnvType::Test))
            .unwrap();

        let entry = Credential::new("v1", "ct");
        assert_eq!(
            store.append_version(&ns(), "s", &entry).unwrap(),
            Append::Appended
        );
        assert_eq!(
            store.append_version(&ns(), "s", &entry).unwrap(),
            Append::DuplicateVersion
        );
        assert_eq!(
            store.append_version(&ns(), "missing", &entry).unwrap(),
            Append::MissingSecret
        );

        let read = store.read(&ns(), "s").unwrap().unwrap();
        assert_eq!(read.versions.len(), 1);
    }

    #[test]
    fn test_set_version_value_reports_misses() {
        let (_tmp, store) = store();
        store
            .insert(&ns(), &Secret::new("s", "primary", EnvType::Test))
            .unwrap();
        store
            .append_version(&ns(), "s", &Credential::new("v1", "old"))
            .unwrap();

        assert_eq!(store.set_version_value(&ns(), "s", "v1", "new").unwrap(), 1);
        assert_eq!(store.set_version_value(&ns(), "s", "v9", "x").unwrap(), 0);
        assert_eq!(
            store.set_version_value(&ns(), "missing", "v1", "x").unwrap(),
            0
        );

        let read = store.read(&ns(), "s").unwrap().unwrap();
        assert_eq!(read.version("v1").unwrap().value, "new");
    }

    #[test]
    fn test_remove_versions() {
        let (_tmp, store) = store();
        store
            .insert(&ns(), &Secret::new("s", "primary", EnvType::Test))
            .unwrap();
        for v in ["v1", "v2", "v3"] {
            store
                .append_version(&ns(), "s", &Credential::new(v, "ct"))
                .unwrap();
        }

        let removed = store
            .remove_versions(&ns(), "s", &["v2".to_string(), "v3".to_string()])
            .unwrap();
        assert_eq!(removed, 2);

        let read = store.read(&ns(), "s").unwrap().unwrap();
        assert_eq!(read.versions.len(), 1);
        assert!(read.has_version("v1"));
    }

    #[test]
    fn test_corrupt_document_surfaces_cause() {
        let (tmp, store) = store();
        let dir = tmp.path().join("billing").join("api");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("bad.json"), "{ not json").unwrap();

        let err = store.read(&ns(), "bad").unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Store(StoreError::Corrupt { .. })
        ));
    }

    #[test]
    fn test_list_is_sorted() {
        let (_tmp, store) = store();
        for name in ["zeta", "alpha", "mid"] {
            store
                .insert(&ns(), &Secret::new(name, "primary", EnvType::Test))
                .unwrap();
        }

        let names: Vec<String> = store
            .list(&ns())
            .unwrap()
            .into_iter()
            .map(|s| s.secret_name)
            .collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }
}
