//! # PassCrypt
//!
//! A small cryptographic utility library built around passphrase-based
//! AES-256-CBC encryption.
//!
//! ## Features
//!
//! - AES-256-CBC encryption with key and IV derived from a passphrase digest
//! - SHA-256 digesting
//! - PKCS#7 block padding with a lenient strip policy
//! - Standard base64 encoding for transporting binary data as text
//!
//! ## Example
//!
//! ```
//! use passcrypt::{decrypt, encrypt};
//!
//! let ciphertext = encrypt(b"attack at dawn", "correct horse").unwrap();
//! let plaintext = decrypt(&ciphertext, "correct horse").unwrap();
//! assert_eq!(plaintext, b"attack at dawn");
//! ```
//!
//! Ciphertexts are deterministic: for a fixed passphrase the key/IV pair
//! never varies, so equal plaintexts encrypt to equal bytes. There is no
//! integrity protection. Both properties are kept for compatibility with
//! existing ciphertexts; callers who need semantic security or tamper
//! detection should use an AEAD cipher instead.

pub mod crypto;
pub mod error;

// Re-export main operations and types
pub use crypto::{
    apply_pkcs7, decode, decrypt, derive_key_iv, encode, encrypt, sha256_digest, strip_pkcs7,
};
pub use crypto::{AES_BLOCK_SIZE, DIGEST_LENGTH, IV_LENGTH, KEY_LENGTH};
pub use error::{CryptoError, Result};
