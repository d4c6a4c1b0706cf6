//! SHA-256 digesting
//!
//! The digest doubles as key material: the cipher module derives both its
//! AES-256 key and its IV from the SHA-256 digest of the passphrase.

use sha2::{Digest, Sha256};

/// SHA-256 digest length (32 bytes = 256 bits)
pub const DIGEST_LENGTH: usize = 32;

/// Compute the SHA-256 digest of a byte sequence.
///
/// Pure and total: always returns exactly 32 bytes, identical input yields
/// an identical digest.
pub fn sha256_digest(bytes: &[u8]) -> [u8; DIGEST_LENGTH] {
    Sha256::digest(bytes).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_empty() {
        let expected: [u8; 32] = [
            0xe3, 0xb0, 0xc4, 0x42, 0x98, 0xfc, 0x1c, 0x14,
            0x9a, 0xfb, 0xf4, 0xc8, 0x99, 0x6f, 0xb9, 0x24,
            0x27, 0xae, 0x41, 0xe4, 0x64, 0x9b, 0x93, 0x4c,
            0xa4, 0x95, 0x99, 0x1b, 0x78, 0x52, 0xb8, 0x55,
        ];
        assert_eq!(sha256_digest(b""), expected);
    }

    #[test]
    fn test_digest_abc() {
        // FIPS 180-2 test vector
        let expected: [u8; 32] = [
            0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea,
            0x41, 0x41, 0x40, 0xde, 0x5d, 0xae, 0x22, 0x23,
            0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c,
            0xb4, 0x10, 0xff, 0x61, 0xf2, 0x00, 0x15, 0xad,
        ];
        assert_eq!(sha256_digest(b"abc"), expected);
    }

    #[test]
    fn test_digest_length_and_determinism() {
        let first = sha256_digest(b"some arbitrary input");
        let second = sha256_digest(b"some arbitrary input");
        assert_eq!(first.len(), DIGEST_LENGTH);
        assert_eq!(first, second);

        let other = sha256_digest(b"some arbitrary input.");
        assert_ne!(first, other);
    }
}
