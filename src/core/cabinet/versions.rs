//! Secret version lifecycle operations.
//!
//! Every operation follows the same shape: read the document to check
//! state, apply one atomic store mutation, re-read to report the
//! authoritative post-state. Values are encrypted at the write edge and
//! decrypted at most once at the read edge. Failures never escape as
//! errors; they are converted to `{status: false, message}` replies at
//! the operation boundary.

use std::cmp::Ordering;

use tracing::{error, info};

use super::{validate_selection, Cabinet};
use crate::core::compare;
use crate::core::crypto;
use crate::core::domain::{Credential, Selection, VersionReply};
use crate::core::store::Append;
use crate::core::validation::{validate_value, validate_version};
use crate::error::{Result, VersionError};

/// Convert an operation failure into a reply, logging it once.
fn fail(err: crate::error::Error) -> VersionReply {
    error!(error = %err, "version operation failed");
    VersionReply::fail(err.to_string())
}

impl Cabinet {
    /// Add a new version to a secret.
    ///
    /// Fails if the secret is absent or the version identifier already
    /// exists; an existing entry is never overwritten. The reply echoes
    /// the caller's plaintext credential, avoiding a redundant decrypt.
    pub fn add_version(&self, sel: &Selection, version: &str, value: &str) -> VersionReply {
        self.try_add(sel, version, value).unwrap_or_else(fail)
    }

    fn try_add(&self, sel: &Selection, version: &str, value: &str) -> Result<VersionReply> {
        validate_selection(sel)?;
        validate_version(version)?;
        validate_value(version, value)?;

        let ns = &sel.namespace;
        let name = &sel.secret_name;

        let secret = self
            .store
            .read(ns, name)?
            .ok_or_else(|| VersionError::SecretNotFound(name.clone()))?;

        // Advisory pre-check for a friendly error; the store re-checks
        // inside the atomic mutation and its verdict is authoritative.
        if secret.has_version(version) {
            return Err(VersionError::AlreadyExists(version.to_string()).into());
        }

        let sealed = crypto::encrypt(value, &self.key)?;
        match self
            .store
            .append_version(ns, name, &Credential::new(version, sealed))?
        {
            Append::Appended => {}
            Append::MissingSecret => {
                return Err(VersionError::SecretNotFound(name.clone()).into())
            }
            Append::DuplicateVersion => {
                return Err(VersionError::AlreadyExists(version.to_string()).into())
            }
        }

        info!(namespace = %ns, secret = %name, version, "version added");

        let secret = self.store.read(ns, name)?;
        Ok(VersionReply::ok(format!("version '{}' added", version))
            .with_secret(secret)
            .with_credential(Credential::new(version, value)))
    }

    /// Rewrite the value of an existing version.
    ///
    /// A zero-modified store count fails with `VersionError::NotFound`;
    /// this covers a missing secret as well, without distinguishing it.
    pub fn update_version(&self, sel: &Selection, version: &str, value: &str) -> VersionReply {
        self.try_update(sel, version, value).unwrap_or_else(fail)
    }

    fn try_update(&self, sel: &Selection, version: &str, value: &str) -> Result<VersionReply> {
        validate_selection(sel)?;
        validate_version(version)?;
        validate_value(version, value)?;

        let ns = &sel.namespace;
        let name = &sel.secret_name;

        let sealed = crypto::encrypt(value, &self.key)?;
        let modified = self.store.set_version_value(ns, name, version, &sealed)?;
        if modified == 0 {
            return Err(VersionError::NotFound(version.to_string()).into());
        }

        info!(namespace = %ns, secret = %name, version, "version updated");

        let secret = self.store.read(ns, name)?;
        Ok(VersionReply::ok(format!("version '{}' updated", version))
            .with_secret(secret)
            .with_credential(Credential::new(version, value)))
    }

    /// Remove a single version entry.
    pub fn remove_version(&self, sel: &Selection, version: &str) -> VersionReply {
        self.try_remove(sel, version).unwrap_or_else(fail)
    }

    fn try_remove(&self, sel: &Selection, version: &str) -> Result<VersionReply> {
        validate_selection(sel)?;
        validate_version(version)?;

        let ns = &sel.namespace;
        let name = &sel.secret_name;

        let deleted = self.store.remove_version(ns, name, version)?;
        if deleted == 0 {
            return Err(VersionError::NotFound(version.to_string()).into());
        }

        info!(namespace = %ns, secret = %name, version, "version deleted");
        Ok(VersionReply::ok(format!("version '{}' deleted", version)))
    }

    /// Roll back to a target version.
    ///
    /// Removes every version ranked above the target under the version
    /// comparator, leaving the target as the new latest.
    pub fn rollback(&self, sel: &Selection, target: &str) -> VersionReply {
        self.try_rollback(sel, target).unwrap_or_else(fail)
    }

    fn try_rollback(&self, sel: &Selection, target: &str) -> Result<VersionReply> {
        validate_selection(sel)?;
        validate_version(target)?;

        let ns = &sel.namespace;
        let name = &sel.secret_name;

        let secret = self
            .store
            .read(ns, name)?
            .ok_or_else(|| VersionError::SecretNotFound(name.clone()))?;

        if !secret.has_version(target) {
            return Err(VersionError::NotFound(target.to_string()).into());
        }

        let above: Vec<String> = secret
            .versions
            .iter()
            .filter(|c| compare::compare(&c.version, target) == Ordering::Greater)
            .map(|c| c.version.clone())
            .collect();

        if above.is_empty() {
            return Ok(
                VersionReply::ok(format!("version '{}' is already the latest", target))
                    .with_secret(Some(secret)),
            );
        }

        let removed = self.store.remove_versions(ns, name, &above)?;
        info!(namespace = %ns, secret = %name, target, removed, "rolled back");

        let secret = self.store.read(ns, name)?;
        Ok(VersionReply::ok(format!(
            "rolled back to version '{}', removed {} newer version(s)",
            target, removed
        ))
        .with_secret(secret))
    }

    /// Resolve the latest version.
    ///
    /// Refreshes `lastAccessAt` and returns the maximum entry under the
    /// version comparator, decrypted only when the selection asks for
    /// plaintext.
    pub fn latest(&self, sel: &Selection) -> VersionReply {
        self.try_latest(sel).unwrap_or_else(fail)
    }

    fn try_latest(&self, sel: &Selection) -> Result<VersionReply> {
        validate_selection(sel)?;

        let ns = &sel.namespace;
        let name = &sel.secret_name;

        let secret = self
            .store
            .read(ns, name)?
            .filter(|s| !s.versions.is_empty())
            .ok_or_else(|| VersionError::NoVersions(name.clone()))?;

        self.store.touch_access(ns, name)?;

        let entry = secret
            .latest()
            .ok_or_else(|| VersionError::NoVersions(name.clone()))?;

        let value = if sel.decrypted {
            crypto::decrypt(&entry.value, &self.key)?.as_str().to_owned()
        } else {
            entry.value.clone()
        };

        Ok(
            VersionReply::ok(format!("latest version '{}' retrieved", entry.version))
                .with_credential(Credential::new(entry.version.clone(), value)),
        )
    }

    /// List all version entries of a secret.
    ///
    /// Returns stored ciphertext by default; entries are only decrypted
    /// when the selection asks for plaintext. Listing is not
    /// latest-resolving and does not refresh `lastAccessAt`.
    pub fn list_versions(&self, sel: &Selection) -> VersionReply {
        self.try_list(sel).unwrap_or_else(fail)
    }

    fn try_list(&self, sel: &Selection) -> Result<VersionReply> {
        validate_selection(sel)?;

        let ns = &sel.namespace;
        let name = &sel.secret_name;

        let secret = self
            .store
            .read(ns, name)?
            .ok_or_else(|| VersionError::SecretNotFound(name.clone()))?;

        let versions = if sel.decrypted {
            secret
                .versions
                .iter()
                .map(|c| {
                    let plaintext = crypto::decrypt(&c.value, &self.key)?;
                    Ok(Credential::new(
                        c.version.clone(),
                        plaintext.as_str().to_owned(),
                    ))
                })
                .collect::<Result<Vec<_>>>()?
        } else {
            secret.versions.clone()
        };

        Ok(VersionReply::ok(format!("{} version(s)", versions.len())).with_versions(versions))
    }
}
