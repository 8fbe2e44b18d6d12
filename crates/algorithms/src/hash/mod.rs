//! Hash function implementations
//!
//! SHA-1 and SHA-512 share the Merkle-Damgard skeleton in the `engine` module:
//! input goes through a fixed-size block buffer, finalization appends
//! `0x80`, zero bytes and the big-endian bit length, and the algorithm's
//! compression function folds each block into the chaining state.

use core::fmt;

use crate::error::{Error, Result};
use mdhash_api::HashAlgorithm;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::string::String;

pub(crate) mod engine;
pub mod sha1;
pub mod sha2;

// Re-exports
pub use sha1::{Sha1, Sha1Algorithm};
pub use sha2::{Sha512, Sha512Algorithm};

/// Trait for incremental hash functions
///
/// A hasher starts open, absorbs input through [`update`](Self::update) in
/// any chunking, and is closed by [`finalize`](Self::finalize). The digest is
/// computed once; later `finalize` calls return the same value and later
/// `update` calls fail with [`Error::InvalidState`].
///
/// A hasher is a plain owned value. Distinct hashers share nothing and can
/// run on different threads; one hasher is driven by one caller at a time.
pub trait HashFunction: Sized + Clone + fmt::Debug {
    /// Static parameters of the algorithm
    type Algorithm: HashAlgorithm;

    /// Digest type produced on finalization
    type Output: AsRef<[u8]> + Copy + PartialEq + fmt::Debug;

    /// Creates a new, open hasher
    fn new() -> Self;

    /// Absorbs `data` into the hash state
    ///
    /// Fails with [`Error::InvalidState`] after finalization, leaving the
    /// hasher untouched.
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Pads, processes the final block(s) and returns the digest
    ///
    /// Idempotent: once finalized, returns the stored digest without
    /// reprocessing anything.
    fn finalize(&mut self) -> Self::Output;

    /// Whether [`finalize`](Self::finalize) has run
    fn is_finalized(&self) -> bool;

    /// Returns the hasher to the freshly constructed, open state
    fn reset(&mut self);

    /// Hashes `data` in a single call
    fn digest(data: &[u8]) -> Self::Output;

    /// Absorbs a fallible sequence of chunks in order
    ///
    /// Stops at the first chunk error and returns it; chunks before it stay
    /// absorbed.
    fn update_chunks<I, C, E>(&mut self, chunks: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = core::result::Result<C, E>>,
        C: AsRef<[u8]>,
        E: Into<Error>,
    {
        for chunk in chunks {
            let chunk = chunk.map_err(Into::into)?;
            self.update(chunk.as_ref())?;
        }
        Ok(self)
    }

    /// Finalizes and renders the digest as lowercase hex
    #[cfg(feature = "alloc")]
    fn finalize_hex(&mut self) -> String {
        crate::encoding::hex::to_hex(self.finalize().as_ref())
    }

    /// Hashes `data` in a single call and renders the digest as lowercase hex
    #[cfg(feature = "alloc")]
    fn digest_hex(data: &[u8]) -> String {
        crate::encoding::hex::to_hex(Self::digest(data).as_ref())
    }

    /// Returns the output size of the hash function in bytes
    fn output_size() -> usize {
        Self::Algorithm::OUTPUT_SIZE
    }

    /// Returns the block size of the hash function in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Returns the name of the hash function
    fn name() -> &'static str {
        Self::Algorithm::ALGORITHM_ID
    }
}
