//! AES-256-CBC encryption and decryption
//!
//! Single-shot operations that re-derive key and IV from the passphrase on
//! every call. Padding is handled by the local PKCS#7 policy before the
//! cipher layer sees the buffer, so a block-aligned plaintext gains no
//! extra padding block and its ciphertext has exactly the same length.
//!
//! There is no integrity protection: decrypting with a wrong passphrase
//! usually succeeds and yields garbage bytes.

use aes::Aes256;
use block_padding::NoPadding;
use cbc::cipher::{BlockModeDecrypt, BlockModeEncrypt, KeyIvInit};
use cbc::{Decryptor, Encryptor};

use super::key::derive_key_iv;
use super::padding::{apply_pkcs7, strip_pkcs7};
use crate::error::{CryptoError, Result};

/// AES block size (16 bytes = 128 bits)
pub const AES_BLOCK_SIZE: usize = 16;

type Aes256CbcEnc = Encryptor<Aes256>;
type Aes256CbcDec = Decryptor<Aes256>;

/// Encrypt a plaintext with AES-256-CBC under a passphrase-derived key.
///
/// The plaintext is padded to the block size, then encrypted with the key
/// and IV from [`derive_key_iv`]. The ciphertext length is always a
/// multiple of 16 and never smaller than the plaintext; output is
/// deterministic for a fixed (plaintext, passphrase) pair. An empty
/// plaintext produces an empty ciphertext.
pub fn encrypt(plaintext: &[u8], passphrase: &str) -> Result<Vec<u8>> {
    let (key, iv) = derive_key_iv(passphrase);

    let mut buffer = apply_pkcs7(plaintext, AES_BLOCK_SIZE as u8)?;
    let length = buffer.len();

    let encryptor = Aes256CbcEnc::new(&key.into(), &iv.into());
    encryptor
        .encrypt_padded::<NoPadding>(&mut buffer, length)
        .map_err(|err| CryptoError::EncryptionError(err.to_string()))?;

    Ok(buffer)
}

/// Decrypt a ciphertext produced by [`encrypt`].
///
/// The ciphertext must be a nonzero multiple of 16 bytes; anything else is
/// rejected with [`CryptoError::InvalidInputLength`] before it reaches the
/// block cipher. After decryption the trailing PKCS#7 pad is stripped if
/// plausibly present.
pub fn decrypt(ciphertext: &[u8], passphrase: &str) -> Result<Vec<u8>> {
    if ciphertext.is_empty() || ciphertext.len() % AES_BLOCK_SIZE != 0 {
        return Err(CryptoError::InvalidInputLength(format!(
            "ciphertext length {} is not a nonzero multiple of {}",
            ciphertext.len(),
            AES_BLOCK_SIZE
        )));
    }

    let (key, iv) = derive_key_iv(passphrase);
    let mut buffer = ciphertext.to_vec();

    let decryptor = Aes256CbcDec::new(&key.into(), &iv.into());
    decryptor
        .decrypt_padded::<NoPadding>(&mut buffer)
        .map_err(|err| CryptoError::DecryptionError(err.to_string()))?;

    strip_pkcs7(&buffer)
}
