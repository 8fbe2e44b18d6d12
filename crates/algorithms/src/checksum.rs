//! Finalized digests of complete inputs
//!
//! A [`Checksum`] is what a caller gets back from hashing a whole byte slice,
//! string, reader or file in one go. Every construction path drives the same
//! incremental hasher, so a file read in 4 KiB chunks and the same bytes
//! hashed from memory produce identical checksums.

use core::fmt;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::string::String;

#[cfg(feature = "std")]
use std::{fs::File, io::Read, path::Path};

#[cfg(feature = "std")]
use log::debug;

use crate::error::Result;
use crate::hash::{HashFunction, Sha1, Sha512};
#[cfg(feature = "std")]
use crate::error::Error;
#[cfg(feature = "std")]
use crate::io::{ChunkedReader, ReaderConfig};

/// Digest of a complete input under hash function `H`
pub struct Checksum<H: HashFunction> {
    digest: H::Output,
}

/// SHA-1 checksum
pub type Sha1Checksum = Checksum<Sha1>;

/// SHA-512 checksum
pub type Sha512Checksum = Checksum<Sha512>;

impl<H: HashFunction> Checksum<H> {
    /// Hash a byte slice
    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            digest: H::digest(data),
        }
    }

    /// Hash the UTF-8 bytes of a string, without any normalisation
    pub fn from_text(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    /// Hash everything `reader` yields, in default-sized chunks
    #[cfg(feature = "std")]
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with(reader, ReaderConfig::default())
    }

    /// Hash everything `reader` yields, in chunks of `config.chunk_size`
    #[cfg(feature = "std")]
    pub fn from_reader_with<R: Read>(reader: R, config: ReaderConfig) -> Result<Self> {
        let mut chunks = ChunkedReader::with_config(reader, config)?;
        let mut hasher = H::new();
        hasher.update_chunks(&mut chunks)?;
        debug!(
            "{} over {} bytes in {} chunk(s)",
            H::name(),
            chunks.bytes_read(),
            chunks.chunks_read()
        );
        Ok(Self {
            digest: hasher.finalize(),
        })
    }

    /// Hash the contents of the file at `path`
    ///
    /// The file is opened read-only and streamed in 4 KiB chunks. Open and
    /// read failures surface as [`Error::Io`]; no partial digest is produced.
    #[cfg(feature = "std")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file_with(path, ReaderConfig::default())
    }

    /// Hash the contents of the file at `path` with a custom chunk size
    #[cfg(feature = "std")]
    pub fn from_file_with<P: AsRef<Path>>(path: P, config: ReaderConfig) -> Result<Self> {
        config.validate()?;
        let path = path.as_ref();
        debug!("{}: hashing file {}", H::name(), path.display());

        let file = File::open(path).map_err(|e| Error::io("open", &e))?;
        let checksum = Self::from_reader_with(file, config)?;

        debug!("{}: finished {}", H::name(), path.display());
        Ok(checksum)
    }

    /// Raw digest bytes
    pub fn hash(&self) -> &[u8] {
        self.digest.as_ref()
    }

    /// Digest as lowercase hex
    pub fn hash_string(&self) -> String {
        crate::encoding::hex::to_hex(self.hash())
    }

    /// The typed digest
    pub fn digest(&self) -> H::Output {
        self.digest
    }

    /// Compare against expected digest bytes in constant time
    pub fn matches(&self, expected: &[u8]) -> bool {
        mdhash_internal::constant_time::ct_eq(self.hash(), expected)
    }

    /// Compare against an expected hex digest (either case)
    pub fn matches_hex(&self, expected: &str) -> Result<bool> {
        let expected = crate::encoding::hex::from_hex(expected)?;
        Ok(self.matches(&expected))
    }
}

impl<H: HashFunction> Clone for Checksum<H> {
    fn clone(&self) -> Self {
        Self {
            digest: self.digest,
        }
    }
}

impl<H: HashFunction> Copy for Checksum<H> {}

impl<H: HashFunction> PartialEq for Checksum<H> {
    fn eq(&self, other: &Self) -> bool {
        self.digest == other.digest
    }
}

impl<H: HashFunction> fmt::Debug for Checksum<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checksum")
            .field("algorithm", &H::name())
            .field("digest", &self.digest)
            .finish()
    }
}

impl<H: HashFunction> fmt::Display for Checksum<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.hash() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
