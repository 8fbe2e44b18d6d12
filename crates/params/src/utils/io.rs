//! Constants for streamed input

/// Default number of bytes requested per read when digesting a file or reader
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Upper bound accepted for a caller-supplied chunk size (16 MiB)
pub const MAX_CHUNK_SIZE: usize = 16 * 1024 * 1024;
