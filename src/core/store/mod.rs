//! Secret document storage.
//!
//! Provides the storage abstraction for secret documents with
//! implementations for different backends.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file (e.g., `mongo.rs`, `http.rs`)
//! 3. Re-export from this module
//!
//! Every operation must be atomic at the document level: concurrent
//! callers may interleave between operations, but never observe a
//! half-applied mutation of one document.

use crate::core::domain::{Credential, Namespace, Secret};
use crate::error::Result;

mod fs;
mod memory;

pub use fs::Filesystem;
pub use memory::Memory;

/// Outcome of an append attempt.
///
/// `append_version` re-checks version uniqueness inside the atomic
/// document mutation, so the store verdict is authoritative even if the
/// caller's pre-check raced with another writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Append {
    Appended,
    MissingSecret,
    DuplicateVersion,
}

/// Outcome of a document insert attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insert {
    Created,
    AlreadyExists,
}

/// Secret document storage trait.
///
/// One document per secret, addressed by `(namespace, secretName)`.
/// Mutating operations refresh the document's `updatedAt`/`lastAccessAt`
/// timestamps only when they actually modify it; misses report
/// zero-modified/zero-deleted counts and leave the document untouched.
///
/// # Errors
///
/// Every method surfaces backend I/O failures as `StoreError`, wrapping
/// the original cause.
pub trait SecretStore {
    /// Read a secret document, or `None` when absent.
    fn read(&self, ns: &Namespace, secret_name: &str) -> Result<Option<Secret>>;

    /// Insert a new secret document.
    fn insert(&self, ns: &Namespace, secret: &Secret) -> Result<Insert>;

    /// List all secret documents in a namespace, ordered by name.
    fn list(&self, ns: &Namespace) -> Result<Vec<Secret>>;

    /// Remove a whole secret document. Returns the deleted count (0 or 1).
    fn remove(&self, ns: &Namespace, secret_name: &str) -> Result<u64>;

    /// Atomically push a version entry onto `versions` and refresh the
    /// timestamps. Never overwrites an existing entry with the same
    /// version identifier.
    fn append_version(
        &self,
        ns: &Namespace,
        secret_name: &str,
        entry: &Credential,
    ) -> Result<Append>;

    /// Atomically rewrite the value of the entry whose `version` matches.
    /// Returns the modified count (0 when no match exists).
    fn set_version_value(
        &self,
        ns: &Namespace,
        secret_name: &str,
        version: &str,
        ciphertext: &str,
    ) -> Result<u64>;

    /// Atomically remove the matching version entry. Returns the deleted
    /// count (0 when no match exists).
    fn remove_version(&self, ns: &Namespace, secret_name: &str, version: &str) -> Result<u64>;

    /// Atomically remove every listed version entry in one document
    /// mutation. Returns the number of entries removed.
    fn remove_versions(
        &self,
        ns: &Namespace,
        secret_name: &str,
        versions: &[String],
    ) -> Result<u64>;

    /// Refresh `lastAccessAt` without any other change. A missing secret
    /// is a no-op.
    fn touch_access(&self, ns: &Namespace, secret_name: &str) -> Result<()>;
}
