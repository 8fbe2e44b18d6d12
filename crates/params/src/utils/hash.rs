//! Constants for hash functions

/// Output size of SHA-1 in bytes
pub const SHA1_OUTPUT_SIZE: usize = 20;

/// Output size of SHA-512 in bytes
pub const SHA512_OUTPUT_SIZE: usize = 64;

/// Internal block size of SHA-1 in bytes
pub const SHA1_BLOCK_SIZE: usize = 64;

/// Internal block size of SHA-512 in bytes
pub const SHA512_BLOCK_SIZE: usize = 128;

/// Size of the big-endian bit-length field closing a SHA-1 message
pub const SHA1_LENGTH_FIELD_SIZE: usize = 8;

/// Size of the big-endian bit-length field closing a SHA-512 message
pub const SHA512_LENGTH_FIELD_SIZE: usize = 16;

/// Number of 32-bit words in the SHA-1 chaining state
pub const SHA1_STATE_WORDS: usize = 5;

/// Number of 64-bit words in the SHA-512 chaining state
pub const SHA512_STATE_WORDS: usize = 8;

/// Rounds per compression (same for SHA-1 and SHA-512)
pub const SHA_ROUNDS: usize = 80;

/// First byte of Merkle-Damgard padding
pub const PADDING_MARKER: u8 = 0x80;
