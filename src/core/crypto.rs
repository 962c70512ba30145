//! Cryptographic operations for version values.
//!
//! Values are sealed with AES-256-GCM: a counter-mode keystream plus an
//! authentication tag, so decryption with the wrong key or over a mangled
//! blob fails loudly instead of returning garbage. A fresh random 96-bit
//! nonce is generated per encryption and stored alongside the ciphertext;
//! the wire form is `base64(nonce || ciphertext || tag)`.
//!
//! The key is process-wide configuration (see `core::keys`); it is never
//! persisted with the data.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, Zeroizing};

use crate::error::{CipherError, Result};

/// Nonce length in bytes (96 bits, the AES-GCM standard).
const NONCE_LEN: usize = 12;

/// GCM authentication tag length in bytes.
const TAG_LEN: usize = 16;

/// A 256-bit symmetric key, zeroized on drop.
pub struct Key([u8; 32]);

impl Key {
    /// Derive a key from arbitrary key material via SHA-256.
    ///
    /// The material may be a generated hex string or a passphrase; either
    /// way the digest yields exactly 32 key bytes.
    pub fn derive(material: &str) -> Self {
        let digest = Sha256::digest(material.trim().as_bytes());
        Self(digest.into())
    }

    fn cipher(&self) -> Aes256Gcm {
        Aes256Gcm::new(aes_gcm::Key::<Aes256Gcm>::from_slice(&self.0))
    }
}

impl Drop for Key {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key bytes.
        f.write_str("Key(..)")
    }
}

/// Encrypt a plaintext value for storage.
///
/// # Returns
///
/// Base64 of `nonce || ciphertext || tag`, safe to embed in a JSON
/// document.
///
/// # Errors
///
/// Returns `CipherError::EncryptionFailed` if sealing fails.
pub fn encrypt(plaintext: &str, key: &Key) -> Result<String> {
    let mut nonce_bytes = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = key
        .cipher()
        .encrypt(nonce, plaintext.as_bytes())
        .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

    let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    sealed.extend_from_slice(&nonce_bytes);
    sealed.extend_from_slice(&ciphertext);

    Ok(BASE64.encode(sealed))
}

/// Decrypt a stored value.
///
/// # Returns
///
/// The plaintext wrapped in `Zeroizing` for secure memory cleanup.
///
/// # Errors
///
/// Returns `CipherError::Integrity` if the blob is malformed, truncated,
/// corrupted, or was sealed with a different key.
pub fn decrypt(sealed: &str, key: &Key) -> Result<Zeroizing<String>> {
    let bytes = BASE64
        .decode(sealed.trim())
        .map_err(|e| CipherError::Integrity(format!("invalid base64: {}", e)))?;

    if bytes.len() < NONCE_LEN + TAG_LEN {
        return Err(CipherError::Integrity("truncated ciphertext".to_string()).into());
    }

    let (nonce_bytes, ciphertext) = bytes.split_at(NONCE_LEN);
    let plaintext = key
        .cipher()
        .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
        .map_err(|_| {
            CipherError::Integrity("wrong key or corrupted ciphertext".to_string())
        })?;

    match String::from_utf8(plaintext) {
        Ok(s) => Ok(Zeroizing::new(s)),
        Err(e) => {
            let mut bytes = e.into_bytes();
            bytes.zeroize();
            Err(CipherError::Integrity("decrypted payload is not valid UTF-8".to_string()).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let key = Key::derive("test material");
        let plaintext = "super secret password 123!";

        let sealed = encrypt(plaintext, &key).unwrap();
        assert_ne!(sealed, plaintext);

        let decrypted = decrypt(&sealed, &key).unwrap();
        assert_eq!(decrypted.as_str(), plaintext);
    }

    #[test]
    fn test_nonce_is_fresh_per_operation() {
        let key = Key::derive("test material");

        let a = encrypt("same value", &key).unwrap();
        let b = encrypt("same value", &key).unwrap();

        // Same plaintext, same key, different nonce: different blobs.
        assert_ne!(a, b);
    }

    #[test]
    fn test_decrypt_with_wrong_key_fails() {
        let sealed = encrypt("secret", &Key::derive("key one")).unwrap();

        let err = decrypt(&sealed, &Key::derive("key two")).unwrap_err();
        assert!(matches!(err, Error::Cipher(CipherError::Integrity(_))));
    }

    #[test]
    fn test_decrypt_malformed_fails() {
        let key = Key::derive("k");

        assert!(decrypt("%%% not base64 %%%", &key).is_err());
        assert!(decrypt("c2hvcnQ=", &key).is_err()); // too short for nonce+tag
    }

    #[test]
    fn test_decrypt_corrupted_fails() {
        let key = Key::derive("k");
        let sealed = encrypt("payload", &key).unwrap();

        let mut bytes = BASE64.decode(&sealed).unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0xff;
        let tampered = BASE64.encode(bytes);

        let err = decrypt(&tampered, &key).unwrap_err();
        assert!(matches!(err, Error::Cipher(CipherError::Integrity(_))));
    }

    #[test]
    fn test_key_derivation_is_deterministic() {
        let key_a = Key::derive("passphrase");
        let key_b = Key::derive("passphrase");

        let sealed = encrypt("value", &key_a).unwrap();
        assert_eq!(decrypt(&sealed, &key_b).unwrap().as_str(), "value");
    }
}
