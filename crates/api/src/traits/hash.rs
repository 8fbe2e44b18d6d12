//! Static description of a Merkle-Damgard hash algorithm

/// Compile-time parameters of a block hash algorithm.
///
/// Implemented by uninhabited marker types, one per algorithm, so that
/// generic code can reason about sizes without holding a hasher.
pub trait HashAlgorithm {
    /// Digest size in bytes
    const OUTPUT_SIZE: usize;

    /// Compression block size in bytes
    const BLOCK_SIZE: usize;

    /// Size in bytes of the big-endian message length field appended by padding
    const LENGTH_FIELD_SIZE: usize;

    /// Human readable identifier, e.g. `"SHA-1"`
    const ALGORITHM_ID: &'static str;

    /// Number of bytes a pending buffer may hold before padding spills into a second block
    fn padding_threshold() -> usize {
        Self::BLOCK_SIZE - Self::LENGTH_FIELD_SIZE
    }
}
