//! Lowercase hexadecimal formatting of digests

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::{string::String, vec::Vec};

use crate::error::{Error, Result};

/// Render `bytes` as lowercase hex, high nibble first, in input order.
///
/// Total over all inputs; an empty slice yields an empty string.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Parse a hex string (either case) back into bytes.
pub fn from_hex(text: &str) -> Result<Vec<u8>> {
    hex::decode(text).map_err(|e| match e {
        hex::FromHexError::OddLength => Error::param("hex", "odd number of hex digits"),
        hex::FromHexError::InvalidHexCharacter { .. } => {
            Error::param("hex", "invalid hexadecimal character")
        }
        _ => Error::param("hex", "invalid string length"),
    })
}
