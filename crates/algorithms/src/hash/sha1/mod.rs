//! SHA-1 hash function
//!
//! This module implements the SHA-1 hash function as specified in FIPS 180-4.
//! Note: SHA-1 is considered cryptographically broken and should only be used
//! for compatibility with existing systems.

use core::fmt;

use byteorder::{BigEndian, ByteOrder};
use log::trace;
use zeroize::Zeroize;

use crate::error::{validate, Result};
use crate::hash::engine::{BlockBuffer, Phase};
use crate::hash::HashFunction;
use crate::types::{Digest, EphemeralSecret, SecureZeroingType, ZeroizeGuard};
use mdhash_api::HashAlgorithm;
use mdhash_internal::endian::write_u32_words_be;
use mdhash_params::utils::hash::{
    SHA1_BLOCK_SIZE, SHA1_LENGTH_FIELD_SIZE, SHA1_OUTPUT_SIZE, SHA1_STATE_WORDS, SHA_ROUNDS,
};

/// Initial hash values for SHA-1
const H0: [u32; SHA1_STATE_WORDS] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

/// Round constants, one per group of 20 rounds
const K: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];

const BLOCK_BITS: u64 = (SHA1_BLOCK_SIZE as u64) * 8;

/// SHA-1 algorithm marker type
pub enum Sha1Algorithm {}

impl HashAlgorithm for Sha1Algorithm {
    const OUTPUT_SIZE: usize = SHA1_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA1_BLOCK_SIZE;
    const LENGTH_FIELD_SIZE: usize = SHA1_LENGTH_FIELD_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-1";
}

/// SHA-1 hash function
#[derive(Clone, Zeroize)]
pub struct Sha1 {
    /// Current hash state
    h: [u32; SHA1_STATE_WORDS],
    /// Bytes not yet forming a block
    buffer: BlockBuffer<SHA1_BLOCK_SIZE>,
    /// Bits consumed by whole blocks so far
    total_bits: u64,
    #[zeroize(skip)]
    phase: Phase<SHA1_OUTPUT_SIZE>,
}

impl Drop for Sha1 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Fold one 64-byte block into the SHA-1 chaining state.
///
/// Deterministic and total: every block is valid input and all additions
/// wrap modulo 2^32.
pub fn compress(h: &mut [u32; SHA1_STATE_WORDS], block: &[u8; SHA1_BLOCK_SIZE]) {
    let mut w = EphemeralSecret::new([0u32; SHA_ROUNDS]);

    for i in 0..16 {
        w[i] = BigEndian::read_u32(&block[i * 4..]);
    }
    for i in 16..SHA_ROUNDS {
        w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
    }

    let mut working_vars = *h;
    let mut v = ZeroizeGuard::new(&mut working_vars);

    for (i, &wi) in w.iter().enumerate() {
        let (a, b, c, d, e) = (v[0], v[1], v[2], v[3], v[4]);
        let f = match i / 20 {
            0 => (b & c) | ((!b) & d),
            2 => (b & c) | (b & d) | (c & d),
            _ => b ^ c ^ d,
        };
        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(K[i / 20])
            .wrapping_add(wi);
        *v = [temp, a, b.rotate_left(30), c, d];
    }

    for (word, var) in h.iter_mut().zip(v.iter()) {
        *word = word.wrapping_add(*var);
    }
}

impl Sha1 {
    /// Creates a new SHA-1 hasher
    pub fn new() -> Self {
        Self {
            h: H0,
            buffer: BlockBuffer::new(),
            total_bits: 0,
            phase: Phase::Open,
        }
    }

    fn absorb(&mut self, data: &[u8]) {
        let h = &mut self.h;
        let total_bits = &mut self.total_bits;
        self.buffer.absorb(data, |block| {
            compress(h, block);
            *total_bits = total_bits.wrapping_add(BLOCK_BITS);
        });
    }

    fn finalize_internal(&mut self) -> Digest<SHA1_OUTPUT_SIZE> {
        if let Some(digest) = self.phase.digest() {
            return digest;
        }

        let bit_len = self
            .total_bits
            .wrapping_add((self.buffer.len() as u64).wrapping_mul(8));
        let mut length_field = [0u8; SHA1_LENGTH_FIELD_SIZE];
        BigEndian::write_u64(&mut length_field, bit_len);

        let h = &mut self.h;
        let blocks = self.buffer.pad(&length_field, |block| compress(h, block));
        trace!("SHA-1 finalized: {} message bits, {} padding block(s)", bit_len, blocks);

        let mut out = [0u8; SHA1_OUTPUT_SIZE];
        write_u32_words_be(&self.h, &mut out);
        let digest = Digest::new(out);

        self.zeroize();
        self.phase = Phase::Finalized(digest);
        digest
    }
}

impl fmt::Debug for Sha1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha1")
            .field("pending", &self.buffer.len())
            .field("finalized", &self.phase.is_finalized())
            .finish_non_exhaustive()
    }
}

impl Default for Sha1 {
    fn default() -> Self {
        Self::new()
    }
}

impl SecureZeroingType for Sha1 {
    fn zeroed() -> Self {
        Self::new()
    }
}

impl HashFunction for Sha1 {
    type Algorithm = Sha1Algorithm;
    type Output = Digest<SHA1_OUTPUT_SIZE>;

    fn new() -> Self {
        Sha1::new()
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        validate::open(self.phase.is_finalized(), Self::name(), "update")?;
        self.absorb(data);
        Ok(self)
    }

    fn finalize(&mut self) -> Self::Output {
        self.finalize_internal()
    }

    fn is_finalized(&self) -> bool {
        self.phase.is_finalized()
    }

    fn reset(&mut self) {
        *self = SecureZeroingType::zeroed();
    }

    fn digest(data: &[u8]) -> Self::Output {
        let mut hasher = Sha1::new();
        hasher.absorb(data);
        hasher.finalize_internal()
    }
}
