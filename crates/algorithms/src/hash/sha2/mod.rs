//! SHA-512 hash function
//!
//! This module implements SHA-512 from the SHA-2 family as specified in
//! FIPS PUB 180-4. The message length is tracked as a full 128-bit bit count,
//! matching the width of the length field written during padding.

use core::fmt;

use byteorder::{BigEndian, ByteOrder};
use log::trace;
use zeroize::Zeroize;

use crate::error::{validate, Result};
use crate::hash::engine::{BlockBuffer, Phase};
use crate::hash::HashFunction;
use crate::types::{Digest, EphemeralSecret, SecureZeroingType, ZeroizeGuard};
use mdhash_api::HashAlgorithm;
use mdhash_internal::endian::write_u64_words_be;
use mdhash_params::utils::hash::{
    SHA512_BLOCK_SIZE, SHA512_LENGTH_FIELD_SIZE, SHA512_OUTPUT_SIZE, SHA512_STATE_WORDS,
    SHA_ROUNDS,
};

// SHA-512 round constants
const K512: [u64; SHA_ROUNDS] = [
    0x428a2f98d728ae22,
    0x7137449123ef65cd,
    0xb5c0fbcfec4d3b2f,
    0xe9b5dba58189dbbc,
    0x3956c25bf348b538,
    0x59f111f1b605d019,
    0x923f82a4af194f9b,
    0xab1c5ed5da6d8118,
    0xd807aa98a3030242,
    0x12835b0145706fbe,
    0x243185be4ee4b28c,
    0x550c7dc3d5ffb4e2,
    0x72be5d74f27b896f,
    0x80deb1fe3b1696b1,
    0x9bdc06a725c71235,
    0xc19bf174cf692694,
    0xe49b69c19ef14ad2,
    0xefbe4786384f25e3,
    0x0fc19dc68b8cd5b5,
    0x240ca1cc77ac9c65,
    0x2de92c6f592b0275,
    0x4a7484aa6ea6e483,
    0x5cb0a9dcbd41fbd4,
    0x76f988da831153b5,
    0x983e5152ee66dfab,
    0xa831c66d2db43210,
    0xb00327c898fb213f,
    0xbf597fc7beef0ee4,
    0xc6e00bf33da88fc2,
    0xd5a79147930aa725,
    0x06ca6351e003826f,
    0x142929670a0e6e70,
    0x27b70a8546d22ffc,
    0x2e1b21385c26c926,
    0x4d2c6dfc5ac42aed,
    0x53380d139d95b3df,
    0x650a73548baf63de,
    0x766a0abb3c77b2a8,
    0x81c2c92e47edaee6,
    0x92722c851482353b,
    0xa2bfe8a14cf10364,
    0xa81a664bbc423001,
    0xc24b8b70d0f89791,
    0xc76c51a30654be30,
    0xd192e819d6ef5218,
    0xd69906245565a910,
    0xf40e35855771202a,
    0x106aa07032bbd1b8,
    0x19a4c116b8d2d0c8,
    0x1e376c085141ab53,
    0x2748774cdf8eeb99,
    0x34b0bcb5e19b48a8,
    0x391c0cb3c5c95a63,
    0x4ed8aa4ae3418acb,
    0x5b9cca4f7763e373,
    0x682e6ff3d6b2b8a3,
    0x748f82ee5defb2fc,
    0x78a5636f43172f60,
    0x84c87814a1f0ab72,
    0x8cc702081a6439ec,
    0x90befffa23631e28,
    0xa4506cebde82bde9,
    0xbef9a3f7b2c67915,
    0xc67178f2e372532b,
    0xca273eceea26619c,
    0xd186b8c721c0c207,
    0xeada7dd6cde0eb1e,
    0xf57d4f7fee6ed178,
    0x06f067aa72176fba,
    0x0a637dc5a2c898a6,
    0x113f9804bef90dae,
    0x1b710b35131c471b,
    0x28db77f523047d84,
    0x32caab7b40c72493,
    0x3c9ebe0a15c9bebc,
    0x431d67c49c100d4c,
    0x4cc5d4becb3e42b6,
    0x597f299cfc657e2a,
    0x5fcb6fab3ad6faec,
    0x6c44198c4a475817,
];

// SHA-512 initial hash values
const H512: [u64; SHA512_STATE_WORDS] = [
    0x6a09e667f3bcc908,
    0xbb67ae8584caa73b,
    0x3c6ef372fe94f82b,
    0xa54ff53a5f1d36f1,
    0x510e527fade682d1,
    0x9b05688c2b3e6c1f,
    0x1f83d9abfb41bd6b,
    0x5be0cd19137e2179,
];

const BLOCK_BITS: u128 = (SHA512_BLOCK_SIZE as u128) * 8;

/// Marker type for SHA-512 algorithm
pub enum Sha512Algorithm {}

impl HashAlgorithm for Sha512Algorithm {
    const OUTPUT_SIZE: usize = SHA512_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA512_BLOCK_SIZE;
    const LENGTH_FIELD_SIZE: usize = SHA512_LENGTH_FIELD_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-512";
}

/// SHA-512 hash function state with enhanced memory safety
#[derive(Clone, Zeroize)]
pub struct Sha512 {
    state: [u64; SHA512_STATE_WORDS],
    buffer: BlockBuffer<SHA512_BLOCK_SIZE>,
    total_bits: u128,
    #[zeroize(skip)]
    phase: Phase<SHA512_OUTPUT_SIZE>,
}

impl Drop for Sha512 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

#[inline(always)]
fn small_sigma0(x: u64) -> u64 {
    x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

#[inline(always)]
fn small_sigma1(x: u64) -> u64 {
    x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}

#[inline(always)]
fn big_sigma0(x: u64) -> u64 {
    x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

#[inline(always)]
fn big_sigma1(x: u64) -> u64 {
    x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

/// Fold one 128-byte block into the SHA-512 chaining state
pub fn compress(state: &mut [u64; SHA512_STATE_WORDS], block: &[u8; SHA512_BLOCK_SIZE]) {
    // Use EphemeralSecret for message schedule
    let mut w = EphemeralSecret::new([0u64; SHA_ROUNDS]);

    for i in 0..16 {
        w[i] = BigEndian::read_u64(&block[i * 8..]);
    }

    for i in 16..SHA_ROUNDS {
        w[i] = w[i - 16]
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma1(w[i - 2]));
    }

    // Use ZeroizeGuard for working variables
    let mut working_vars = *state;
    let mut guard = ZeroizeGuard::new(&mut working_vars);

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *guard;

    for i in 0..SHA_ROUNDS {
        let ch = (e & f) ^ ((!e) & g);
        let temp1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch)
            .wrapping_add(K512[i])
            .wrapping_add(w[i]);
        let maj = (a & b) ^ (a & c) ^ (b & c);
        let temp2 = big_sigma0(a).wrapping_add(maj);

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(temp1);
        d = c;
        c = b;
        b = a;
        a = temp1.wrapping_add(temp2);
    }

    *guard = [a, b, c, d, e, f, g, h];

    for (word, var) in state.iter_mut().zip(guard.iter()) {
        *word = word.wrapping_add(*var);
    }
}

impl Sha512 {
    /// Creates a new SHA-512 hasher
    pub fn new() -> Self {
        Sha512 {
            state: H512,
            buffer: BlockBuffer::new(),
            total_bits: 0,
            phase: Phase::Open,
        }
    }

    fn update_internal(&mut self, input: &[u8]) {
        let state = &mut self.state;
        let total_bits = &mut self.total_bits;
        self.buffer.absorb(input, |block| {
            compress(state, block);
            *total_bits = total_bits.wrapping_add(BLOCK_BITS);
        });
    }

    fn finalize_internal(&mut self) -> Digest<SHA512_OUTPUT_SIZE> {
        if let Some(digest) = self.phase.digest() {
            return digest;
        }

        let bit_len = self
            .total_bits
            .wrapping_add((self.buffer.len() as u128) * 8);
        let length_field: [u8; SHA512_LENGTH_FIELD_SIZE] = bit_len.to_be_bytes();

        let state = &mut self.state;
        let blocks = self.buffer.pad(&length_field, |block| compress(state, block));
        trace!("SHA-512 finalized: {} message bits, {} padding block(s)", bit_len, blocks);

        let mut out = [0u8; SHA512_OUTPUT_SIZE];
        write_u64_words_be(&self.state, &mut out);
        let digest = Digest::new(out);

        self.zeroize();
        self.phase = Phase::Finalized(digest);
        digest
    }
}

impl fmt::Debug for Sha512 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha512")
            .field("pending", &self.buffer.len())
            .field("finalized", &self.phase.is_finalized())
            .finish_non_exhaustive()
    }
}

impl Default for Sha512 {
    fn default() -> Self {
        Self::new()
    }
}

impl SecureZeroingType for Sha512 {
    fn zeroed() -> Self {
        Self::new()
    }
}

impl HashFunction for Sha512 {
    type Algorithm = Sha512Algorithm;
    type Output = Digest<SHA512_OUTPUT_SIZE>;

    fn new() -> Self {
        Sha512::new()
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        validate::open(self.phase.is_finalized(), Self::name(), "update")?;
        self.update_internal(data);
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
        let mut hasher = Sha512::new();
        hasher.update_internal(data);
        hasher.finalize_internal()
    }
}
