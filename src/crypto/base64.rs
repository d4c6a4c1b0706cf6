//! Base64 transport encoding
//!
//! Binary ciphertexts and digests travel as text through this codec. It is
//! independent of the cipher path: nothing inside this crate feeds base64
//! into encryption or decryption.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::Result;

/// Encode bytes as standard base64 with no line breaks.
///
/// Total and deterministic; empty input yields an empty string.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode standard base64 text into bytes.
///
/// Decodes into an upper-bound buffer of `len / 4 * 3 + 1` bytes, then
/// truncates to the number of bytes actually produced. Text with invalid
/// alphabet characters or inconsistent length is rejected with
/// [`CryptoError::MalformedEncoding`](crate::error::CryptoError::MalformedEncoding).
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let mut decoded = vec![0u8; text.len() / 4 * 3 + 1];
    let length = STANDARD.decode_slice(text, &mut decoded)?;
    decoded.truncate(length);
    Ok(decoded)
}
