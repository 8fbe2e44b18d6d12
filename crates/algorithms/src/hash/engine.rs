//! Shared Merkle-Damgard machinery
//!
//! [`BlockBuffer`] turns arbitrarily chunked input into whole blocks and
//! applies the final padding; [`Phase`] is the open/finalized state machine
//! every hasher carries. Neither knows anything about a particular
//! compression function: blocks are handed to a caller-supplied closure.

use zeroize::Zeroize;

use crate::types::Digest;
use mdhash_params::utils::hash::PADDING_MARKER;

/// Bytes of the current message that do not yet fill a block.
///
/// Invariant: `len < B` between calls.
#[derive(Clone, Zeroize)]
pub(crate) struct BlockBuffer<const B: usize> {
    bytes: [u8; B],
    len: usize,
}

impl<const B: usize> BlockBuffer<B> {
    pub(crate) const fn new() -> Self {
        Self {
            bytes: [0u8; B],
            len: 0,
        }
    }

    /// Number of pending bytes
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Append `input`, dispatching every completed block to `compress` in order.
    ///
    /// Returns the number of blocks dispatched. Leftover bytes stay pending.
    pub(crate) fn absorb<F>(&mut self, mut input: &[u8], mut compress: F) -> usize
    where
        F: FnMut(&[u8; B]),
    {
        let mut blocks = 0;

        if self.len > 0 {
            let fill = core::cmp::min(input.len(), B - self.len);
            self.bytes[self.len..self.len + fill].copy_from_slice(&input[..fill]);
            self.len += fill;
            input = &input[fill..];

            if self.len < B {
                return blocks;
            }
            compress(&self.bytes);
            self.len = 0;
            blocks += 1;
        }

        // Whole blocks skip the pending buffer
        let mut chunks = input.chunks_exact(B);
        let mut block = [0u8; B];
        for chunk in &mut chunks {
            block.copy_from_slice(chunk);
            compress(&block);
            blocks += 1;
        }
        block.zeroize();

        let rest = chunks.remainder();
        self.bytes[..rest.len()].copy_from_slice(rest);
        self.len = rest.len();

        blocks
    }

    /// Pad the pending bytes and dispatch the final one or two blocks.
    ///
    /// `length_field` is the big-endian message bit length; its size decides
    /// where the padding zeros stop. If the pending bytes plus the `0x80`
    /// marker leave no room for it, padding spills into a second block.
    /// The buffer is wiped afterwards. Returns the number of blocks dispatched.
    pub(crate) fn pad<F>(&mut self, length_field: &[u8], mut compress: F) -> usize
    where
        F: FnMut(&[u8; B]),
    {
        debug_assert!(length_field.len() < B);
        let threshold = B - length_field.len();
        let mut blocks = 1;

        self.bytes[self.len] = PADDING_MARKER;
        self.bytes[self.len + 1..].fill(0);

        if self.len >= threshold {
            compress(&self.bytes);
            self.bytes.fill(0);
            blocks += 1;
        }

        self.bytes[threshold..].copy_from_slice(length_field);
        compress(&self.bytes);

        self.zeroize();
        blocks
    }
}

/// Lifecycle of a hasher.
///
/// `Open` accepts input. `Finalized` holds the digest, computed exactly once;
/// any further input is rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Phase<const N: usize> {
    Open,
    Finalized(Digest<N>),
}

impl<const N: usize> Phase<N> {
    pub(crate) fn is_finalized(&self) -> bool {
        matches!(self, Phase::Finalized(_))
    }

    pub(crate) fn digest(&self) -> Option<Digest<N>> {
        match self {
            Phase::Open => None,
            Phase::Finalized(digest) => Some(*digest),
        }
    }
}
