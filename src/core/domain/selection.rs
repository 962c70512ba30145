//! Request context for lifecycle operations.

use super::Namespace;

/// What a caller is operating on: namespace, secret, and whether returned
/// values should be decrypted.
///
/// Every lifecycle call takes a `Selection` explicitly; there is no
/// process-wide current project/service/secret state.
#[derive(Debug, Clone)]
pub struct Selection {
    pub namespace: Namespace,
    pub secret_name: String,
    /// Return plaintext values instead of stored ciphertext.
    pub decrypted: bool,
}

impl Selection {
    pub fn new(namespace: Namespace, secret_name: impl Into<String>) -> Self {
        Self {
            namespace,
            secret_name: secret_name.into(),
            decrypted: false,
        }
    }

    /// Request plaintext values in replies.
    pub fn decrypted(mut self) -> Self {
        self.decrypted = true;
        self
    }
}
