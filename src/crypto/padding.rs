//! PKCS#7 block padding
//!
//! The apply side diverges from strict PKCS#7: a buffer that is already a
//! multiple of the block size is returned unchanged instead of gaining a
//! full extra padding block. The strip side tolerates the missing pad by
//! checking plausibility before removing anything. Both halves must keep
//! this asymmetry for existing ciphertexts to round-trip.

use crate::error::{CryptoError, Result};

/// Pad a byte sequence to a multiple of `block_size` with PKCS#7 bytes.
///
/// Appends `pad` bytes each equal to `pad`, where
/// `pad = block_size - len % block_size`. An already-aligned buffer is
/// returned unchanged. Block size 0 is rejected with
/// [`CryptoError::BlockSizeOutOfRange`].
pub fn apply_pkcs7(bytes: &[u8], block_size: u8) -> Result<Vec<u8>> {
    if block_size == 0 {
        return Err(CryptoError::BlockSizeOutOfRange(block_size));
    }

    let block_size = usize::from(block_size);
    let pad = block_size - bytes.len() % block_size;

    let mut padded = bytes.to_vec();
    if pad < block_size {
        padded.resize(bytes.len() + pad, pad as u8);
    }
    Ok(padded)
}

/// Remove a trailing PKCS#7 pad if one is plausibly present.
///
/// Reads the last byte as the pad length and removes that many trailing
/// bytes only when they all carry the pad value; otherwise the buffer is
/// returned unchanged. Empty input is rejected with
/// [`CryptoError::InvalidInputLength`].
///
/// A buffer whose genuine trailing data happens to match a valid pad
/// pattern is stripped anyway; that ambiguity is inherent to padding
/// without a length prefix.
pub fn strip_pkcs7(bytes: &[u8]) -> Result<Vec<u8>> {
    let last = match bytes.last() {
        Some(&byte) => usize::from(byte),
        None => {
            return Err(CryptoError::InvalidInputLength(
                "cannot strip padding from an empty buffer".to_string(),
            ));
        }
    };

    let mut unpadded = bytes.to_vec();
    if last <= bytes.len() && bytes[bytes.len() - last..].iter().all(|&b| usize::from(b) == last) {
        unpadded.truncate(bytes.len() - last);
    }
    Ok(unpadded)
}
