//! SHA-1 and SHA-512 digest engines
//!
//! This crate implements the two Merkle-Damgard hash functions of mdhash on
//! top of a shared block buffer and padding generator. Each hasher is an
//! explicit two-state machine (open, finalized): input is absorbed in any
//! chunking, finalization pads and compresses the last block(s) exactly once,
//! and the digest can be read back any number of times afterwards.
//!
//! # Input adapters
//!
//! [`Checksum`] builds a finalized digest from a byte slice or a string and,
//! with the `std` feature, from any [`std::io::Read`] source or a file path
//! read in bounded chunks.
//!
//! # Memory hygiene
//!
//! Message schedules and working registers are zeroized after every block,
//! and hasher state is wiped on finalization and on drop.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Hash function implementations
pub mod hash;
pub use hash::{HashFunction, Sha1, Sha512};

// Hex formatting
#[cfg(feature = "alloc")]
pub mod encoding;
#[cfg(feature = "alloc")]
pub use encoding::hex::{from_hex, to_hex};

// Finalized digests built from bytes, text, readers and files
#[cfg(feature = "alloc")]
pub mod checksum;
#[cfg(feature = "alloc")]
pub use checksum::{Checksum, Sha1Checksum, Sha512Checksum};

// Chunked input sources
#[cfg(feature = "std")]
pub mod io;
#[cfg(feature = "std")]
pub use io::{ChunkedReader, ReaderConfig};

// Type system
pub mod types;
pub use types::Digest;

// Re-export the algorithm descriptor trait
pub use mdhash_api::HashAlgorithm;
