//! Type-safe wrappers for digest output
//!
//! Digests carry their size in the type, so a SHA-1 digest can never be
//! compared against or stored as a SHA-512 one.

pub mod digest;

pub use digest::{Digest, Sha1Digest, Sha512Digest};

// Import and re-export security types from mdhash-common
pub use mdhash_common::security::{EphemeralSecret, SecureZeroingType, ZeroizeGuard};

/// Trait for types with constant-time equality
pub trait ConstantTimeEq {
    /// Compare two values in constant time
    fn ct_eq(&self, other: &Self) -> bool;
}

/// Trait for types that have a fixed size
pub trait FixedSize {
    /// Get the size in bytes
    fn size() -> usize;
}
