//! Type-safe digest implementation with size guarantees
//!
//! Provides the `Digest` type, representing the output of a
//! hash function with a compile-time size.

use core::fmt;
use core::ops::Deref;
use zeroize::Zeroize;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::{string::String, vec::Vec};

use crate::error::{validate, Result};
use crate::types::{ConstantTimeEq, FixedSize};
use mdhash_params::utils::hash::{SHA1_OUTPUT_SIZE, SHA512_OUTPUT_SIZE};

/// A digest with a fixed size
///
/// Immutable once produced: there is no mutable access to the bytes.
#[derive(Clone, Copy, Zeroize)]
pub struct Digest<const N: usize> {
    data: [u8; N],
}

/// Digest produced by SHA-1
pub type Sha1Digest = Digest<SHA1_OUTPUT_SIZE>;

/// Digest produced by SHA-512
pub type Sha512Digest = Digest<SHA512_OUTPUT_SIZE>;

impl<const N: usize> Digest<N> {
    /// Create a new digest from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create from a slice, if it has exactly the digest length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("Digest::from_slice", slice.len(), N)?;

        let mut data = [0u8; N];
        data.copy_from_slice(slice);
        Ok(Self { data })
    }

    /// Get the length of the digest
    pub fn len(&self) -> usize {
        N
    }

    /// Check if the digest is empty (only for N = 0)
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Borrow the raw digest bytes
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.data
    }

    /// Consume the digest and return the raw array
    pub fn into_bytes(self) -> [u8; N] {
        self.data
    }

    /// Convert to a byte vector
    #[cfg(feature = "alloc")]
    pub fn to_vec(&self) -> Vec<u8> {
        self.data.to_vec()
    }

    /// Convert to a lowercase hexadecimal string
    #[cfg(feature = "alloc")]
    pub fn to_hex(&self) -> String {
        crate::encoding::hex::to_hex(&self.data)
    }

    /// Create from a hexadecimal string of exactly `2 * N` characters
    #[cfg(feature = "alloc")]
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = crate::encoding::hex::from_hex(hex_str)?;
        Self::from_slice(&bytes)
    }
}

impl<const N: usize> AsRef<[u8]> for Digest<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> Deref for Digest<N> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> PartialEq for Digest<N> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<const N: usize> Eq for Digest<N> {}

impl<const N: usize> fmt::Debug for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest<{}>(", N)?;
        fmt::LowerHex::fmt(self, f)?;
        write!(f, ")")
    }
}

impl<const N: usize> fmt::LowerHex for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.data {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Display for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl<const N: usize> ConstantTimeEq for Digest<N> {
    fn ct_eq(&self, other: &Self) -> bool {
        mdhash_internal::constant_time::ct_eq(self.data, other.data)
    }
}

impl<const N: usize> FixedSize for Digest<N> {
    fn size() -> usize {
        N
    }
}

impl<const N: usize> From<[u8; N]> for Digest<N> {
    fn from(data: [u8; N]) -> Self {
        Self::new(data)
    }
}
