//! Bounded-chunk input sources
//!
//! Streams and files are never loaded whole: [`ChunkedReader`] pulls at most
//! [`ReaderConfig::chunk_size`] bytes per step and hands each chunk to the
//! hasher before reading the next one.

use std::io::{self, Read};

use crate::error::{validate, Result};
use mdhash_params::utils::io::{DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};

/// Configuration for chunked reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Maximum number of bytes read per chunk
    pub chunk_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl ReaderConfig {
    /// Create a configuration with the given chunk size
    ///
    /// The chunk size must be non-zero and at most 16 MiB.
    pub fn new(chunk_size: usize) -> Result<Self> {
        let config = Self { chunk_size };
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> Result<()> {
        validate::parameter(self.chunk_size > 0, "chunk_size", "must be non-zero")?;
        validate::max_length("chunk_size", self.chunk_size, MAX_CHUNK_SIZE)
    }
}

/// Iterator over fixed-capacity chunks of a reader
///
/// Yields each non-empty read as an owned chunk. Reads interrupted by a
/// signal are retried; any other error is yielded once and ends iteration,
/// as does end of input.
#[derive(Debug)]
pub struct ChunkedReader<R: Read> {
    inner: R,
    buf: Vec<u8>,
    bytes_read: u64,
    chunks_read: u64,
    done: bool,
}

impl<R: Read> ChunkedReader<R> {
    /// Wrap `inner` with the default chunk size
    pub fn new(inner: R) -> Self {
        Self::from_parts(inner, ReaderConfig::default())
    }

    /// Wrap `inner` with a validated configuration
    pub fn with_config(inner: R, config: ReaderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(inner, config))
    }

    fn from_parts(inner: R, config: ReaderConfig) -> Self {
        Self {
            inner,
            buf: vec![0u8; config.chunk_size],
            bytes_read: 0,
            chunks_read: 0,
            done: false,
        }
    }

    /// Total bytes yielded so far
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Number of chunks yielded so far
    pub fn chunks_read(&self) -> u64 {
        self.chunks_read
    }

    /// Recover the wrapped reader
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Iterator for ChunkedReader<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            match self.inner.read(&mut self.buf) {
                Ok(0) => {
                    self.done = true;
                    return None;
                }
                Ok(n) => {
                    self.bytes_read += n as u64;
                    self.chunks_read += 1;
                    return Some(Ok(self.buf[..n].to_vec()));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

impl<R: Read> core::iter::FusedIterator for ChunkedReader<R> {}
