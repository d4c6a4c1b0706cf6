//! Error types for PassCrypt

use thiserror::Error;

/// Main error type for cryptographic operations
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Empty or non-block-aligned input where a padded buffer is required
    #[error("Invalid input length: {0}")]
    InvalidInputLength(String),

    /// Base64 text with invalid characters or inconsistent length
    #[error("Malformed base64: {0}")]
    MalformedEncoding(String),

    /// PKCS#7 block size outside the valid 1..=255 range
    #[error("Block size out of range: {0}")]
    BlockSizeOutOfRange(u8),

    /// Cipher-level encryption failure
    #[error("Encryption error: {0}")]
    EncryptionError(String),

    /// Cipher-level decryption failure
    #[error("Decryption error: {0}")]
    DecryptionError(String),
}

impl From<base64::DecodeSliceError> for CryptoError {
    fn from(err: base64::DecodeSliceError) -> Self {
        CryptoError::MalformedEncoding(err.to_string())
    }
}

/// Result type alias for cryptographic operations
pub type Result<T> = std::result::Result<T, CryptoError>;
