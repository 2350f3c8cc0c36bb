//! Isomorphic encoding between bytes and strings.
//!
//! Legacy request primitives hand binary data around as strings where every
//! character carries exactly one byte (U+0000..=U+00FF). These helpers map
//! between that representation and real byte buffers without touching any
//! text encoding.
//!
//! See <https://infra.spec.whatwg.org/#isomorphic-encode>.

use crate::error::IsomorphicError;

/// Maps each byte to the character with the same code point.
pub fn encode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Maps each character back to a byte.
///
/// Fails on the first character above U+00FF; `index` is the character
/// position, not the UTF-8 byte offset.
pub fn decode(s: &str) -> Result<Vec<u8>, IsomorphicError> {
    s.chars()
        .enumerate()
        .map(|(index, ch)| u8::try_from(ch).map_err(|_| IsomorphicError::NonLatin1 { index, ch }))
        .collect()
}
