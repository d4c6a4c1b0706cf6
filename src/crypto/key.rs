//! Key and IV derivation from a passphrase
//!
//! Both the AES-256 key and the CBC IV come from a single SHA-256 digest of
//! the passphrase: the full 32-byte digest is the key, its first 16 bytes
//! are the IV. The pair is therefore fixed per passphrase, which makes
//! ciphertexts deterministic. That non-independent IV is a known weakness
//! kept for compatibility with existing ciphertexts.

use super::sha256::sha256_digest;

/// Key length for AES-256 (32 bytes = 256 bits)
pub const KEY_LENGTH: usize = 32;

/// IV length for AES-CBC (16 bytes = one block)
pub const IV_LENGTH: usize = 16;

/// Derive the AES-256 key and CBC IV from a passphrase.
///
/// The passphrase is never used directly as key material; it is digested
/// first, and the IV is a prefix of that same digest.
pub fn derive_key_iv(passphrase: &str) -> ([u8; KEY_LENGTH], [u8; IV_LENGTH]) {
    let key = sha256_digest(passphrase.as_bytes());
    let mut iv = [0u8; IV_LENGTH];
    iv.copy_from_slice(&key[..IV_LENGTH]);
    (key, iv)
}
