//! Property tests for the encryption boundary.

use proptest::prelude::*;

use cabinet::core::crypto::{self, Key};

proptest! {
    #[test]
    fn prop_roundtrip(value in ".{0,128}", material in "[ -~]{1,32}") {
        let key = Key::derive(&material);
        let sealed = crypto::encrypt(&value, &key).unwrap();
        let opened = crypto::decrypt(&sealed, &key).unwrap();
        prop_assert_eq!(opened.as_str(), value);
    }

    #[test]
    fn prop_wrong_key_fails(
        value in ".{0,64}",
        k1 in "[a-z]{4,16}",
        k2 in "[a-z]{4,16}",
    ) {
        prop_assume!(k1 != k2);
        let sealed = crypto::encrypt(&value, &Key::derive(&k1)).unwrap();
        prop_assert!(crypto::decrypt(&sealed, &Key::derive(&k2)).is_err());
    }

    #[test]
    fn prop_ciphertext_never_embeds_plaintext(value in "[a-zA-Z0-9]{16,64}") {
        let key = Key::derive("fixed key");
        let sealed = crypto::encrypt(&value, &key).unwrap();
        prop_assert!(!sealed.contains(&value));
    }
}

#[test]
fn test_sealed_blobs_are_base64_of_nonce_and_ciphertext() {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    let key = Key::derive("k");
    let sealed = crypto::encrypt("payload", &key).unwrap();

    let bytes = STANDARD.decode(sealed).unwrap();
    // 12-byte nonce + ciphertext + 16-byte tag.
    assert_eq!(bytes.len(), 12 + "payload".len() + 16);
}
