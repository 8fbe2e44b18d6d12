//! # mdhash
//!
//! SHA-1 and SHA-512 message digests with incremental, string and chunked
//! file input.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! mdhash = "0.3"
//! ```
//!
//! ```
//! use mdhash::prelude::*;
//!
//! let mut hasher = Sha1::new();
//! hasher.update(b"abc")?;
//! assert_eq!(
//!     hasher.finalize_hex(),
//!     "a9993e364706816aba3e25717850c26c9cd0d89d"
//! );
//!
//! let checksum = Sha512Checksum::from_text("abc");
//! assert_eq!(checksum.hash().len(), 64);
//! # Ok::<(), mdhash::algorithms::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): reader and file adapters, I/O errors
//! - `alloc`: hex formatting and [`Checksum`] without the standard library
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`mdhash-algorithms`]: SHA-1 and SHA-512 engines, input adapters, hex
//! - [`mdhash-api`]: Public error type and algorithm descriptor trait
//! - [`mdhash-common`]: Zeroizing wrappers
//! - [`mdhash-internal`]: Constant-time and endian helpers
//! - [`mdhash-params`]: Algorithm and I/O constants

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use mdhash_algorithms as algorithms;
pub use mdhash_api as api;
pub use mdhash_common as common;
pub use mdhash_internal as internal;
pub use mdhash_params as params;

pub use mdhash_algorithms::{Digest, HashFunction, Sha1, Sha512};

#[cfg(feature = "alloc")]
pub use mdhash_algorithms::{to_hex, Checksum, Sha1Checksum, Sha512Checksum};

#[cfg(feature = "std")]
pub use mdhash_algorithms::{ChunkedReader, ReaderConfig};

/// Common imports for mdhash users
pub mod prelude {
    // Re-export error types
    pub use crate::algorithms::{Error, Result};

    // Re-export core traits
    pub use crate::api::HashAlgorithm;
    pub use crate::algorithms::HashFunction;

    // Hashers and digests
    pub use crate::algorithms::hash::{Sha1, Sha512};
    pub use crate::algorithms::types::{Digest, Sha1Digest, Sha512Digest};

    #[cfg(feature = "alloc")]
    pub use crate::algorithms::{to_hex, Checksum, Sha1Checksum, Sha512Checksum};

    #[cfg(feature = "std")]
    pub use crate::algorithms::ReaderConfig;

    // Re-export security types
    pub use crate::common::{EphemeralSecret, SecureZeroingType, ZeroizeGuard};
}
