//! Big-endian word serialization
//!
//! Digest output and length fields in FIPS 180-4 are big-endian regardless
//! of the host byte order.

/// Write `words` into `out` as consecutive big-endian u32 values
///
/// Panics if `out` is shorter than `4 * words.len()`.
pub fn write_u32_words_be(words: &[u32], out: &mut [u8]) {
    assert!(out.len() >= words.len() * 4, "output too short for u32 words");
    for (chunk, word) in out.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
}

/// Write `words` into `out` as consecutive big-endian u64 values
///
/// Panics if `out` is shorter than `8 * words.len()`.
pub fn write_u64_words_be(words: &[u64], out: &mut [u8]) {
    assert!(out.len() >= words.len() * 8, "output too short for u64 words");
    for (chunk, word) in out.chunks_exact_mut(8).zip(words) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
}
