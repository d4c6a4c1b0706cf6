//! Cryptographic operations for PassCrypt
//!
//! Four independent capabilities over raw byte sequences: SHA-256 digesting,
//! PKCS#7 block padding, base64 transport encoding, and passphrase-based
//! AES-256-CBC encryption that composes the digest and padding modules.

mod aes;
mod base64;
mod key;
mod padding;
mod sha256;

pub use self::aes::{decrypt, encrypt, AES_BLOCK_SIZE};
pub use self::base64::{decode, encode};
pub use self::key::{derive_key_iv, IV_LENGTH, KEY_LENGTH};
pub use self::padding::{apply_pkcs7, strip_pkcs7};
pub use self::sha256::{sha256_digest, DIGEST_LENGTH};
