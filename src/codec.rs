//! Note Body Codec and Secret Hashing
//!
//! Note bodies are stored as standard Base64 of their UTF-8 bytes. This is a
//! reversible, keyless encoding that keeps casual readers of `notes.json` from
//! seeing plain text. It provides no confidentiality: anyone with the file can
//! decode every note.
//!
//! Passwords and lock keys are hashed one way as
//! `blake3$<salt-hex>$<digest-hex>`, with a fresh 16 byte salt per hash.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Rendered in place of note content that cannot be decoded
pub const CORRUPTED_CONTENT: &str = "[ERROR: corrupted data]";

const HASH_SCHEME: &str = "blake3";
const HASH_CONTEXT: &str = "shadow-notes 2024-01-01 secret hashing v1";
const SALT_LEN: usize = 16;

/// Encode note text for storage
pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode stored note text, or `None` if the token is not valid Base64 of UTF-8
pub fn try_decode(token: &str) -> Option<String> {
    let bytes = STANDARD.decode(token.as_bytes()).ok()?;
    String::from_utf8(bytes).ok()
}

/// Decode stored note text, rendering corrupted tokens as [`CORRUPTED_CONTENT`]
pub fn decode(token: &str) -> String {
    try_decode(token).unwrap_or_else(|| CORRUPTED_CONTENT.to_string())
}

/// Hash a password or lock key with a random salt
pub fn hash_secret(secret: &str) -> String {
    let salt: [u8; SALT_LEN] = rand::random();
    let digest = derive(&salt, secret);
    format!(
        "{}${}${}",
        HASH_SCHEME,
        hex::encode(salt),
        digest.to_hex()
    )
}

/// Check a secret against a digest produced by [`hash_secret`]
///
/// Malformed digests never verify.
pub fn verify_secret(secret: &str, digest: &str) -> bool {
    let mut parts = digest.split('$');
    let (Some(scheme), Some(salt_hex), Some(hash_hex), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    if scheme != HASH_SCHEME {
        return false;
    }
    let Ok(salt) = hex::decode(salt_hex) else {
        return false;
    };
    if salt.len() != SALT_LEN {
        return false;
    }
    let Ok(expected) = blake3::Hash::from_hex(hash_hex) else {
        return false;
    };
    // blake3::Hash equality is constant time
    derive(&salt, secret) == expected
}

fn derive(salt: &[u8], secret: &str) -> blake3::Hash {
    let mut hasher = blake3::Hasher::new_derive_key(HASH_CONTEXT);
    hasher.update(salt);
    hasher.update(secret.as_bytes());
    hasher.finalize()
}
