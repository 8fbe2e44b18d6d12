//! Statistical avalanche check
//!
//! Flipping one input bit should flip each output bit with probability 1/2.
//! Over many trials the total number of flipped output bits is Binomial(n, 1/2)
//! with n = trials * output bits, which is tested against its normal
//! approximation.

use mdhash_algorithms::HashFunction;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use statrs::distribution::{ContinuousCDF, Normal};

/// Aggregate result of an avalanche run
#[derive(Debug)]
pub struct AvalancheReport {
    pub trials: usize,
    pub output_bits: usize,
    pub flipped_total: u64,
    pub min_flipped: u32,
    pub max_flipped: u32,
    pub mean_ratio: f64,
    pub z_score: f64,
    pub p_value: f64,
}

impl AvalancheReport {
    /// Whether the run is consistent with an ideal avalanche at `alpha`
    pub fn passes(&self, alpha: f64) -> bool {
        self.min_flipped > 0 && self.p_value > alpha
    }
}

/// Count differing bits between two equal-length byte strings
pub fn hamming_distance(a: &[u8], b: &[u8]) -> u32 {
    a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
}

/// Run `trials` single-bit flips over random `input_len`-byte messages
pub fn analyze<H: HashFunction>(seed: u64, trials: usize, input_len: usize) -> AvalancheReport {
    assert!(input_len > 0, "need at least one input bit to flip");

    let mut rng = StdRng::seed_from_u64(seed);
    let output_bits = H::output_size() * 8;

    let mut flipped_total = 0u64;
    let mut min_flipped = u32::MAX;
    let mut max_flipped = 0u32;

    for _ in 0..trials {
        let mut input = vec![0u8; input_len];
        rng.fill(&mut input[..]);
        let original = H::digest(&input);

        let bit = rng.gen_range(0..input_len * 8);
        input[bit / 8] ^= 1 << (bit % 8);
        let changed = H::digest(&input);

        let flipped = hamming_distance(original.as_ref(), changed.as_ref());
        flipped_total += u64::from(flipped);
        min_flipped = min_flipped.min(flipped);
        max_flipped = max_flipped.max(flipped);
    }

    let n = (trials * output_bits) as f64;
    let mean = n / 2.0;
    let std_dev = n.sqrt() / 2.0;
    let z_score = (flipped_total as f64 - mean) / std_dev;

    AvalancheReport {
        trials,
        output_bits,
        flipped_total,
        min_flipped,
        max_flipped,
        mean_ratio: flipped_total as f64 / n,
        z_score,
        p_value: two_tailed_p(z_score),
    }
}

fn two_tailed_p(z: f64) -> f64 {
    match Normal::new(0.0, 1.0) {
        Ok(dist) => (2.0 * (1.0 - dist.cdf(z.abs()))).clamp(0.0, 1.0),
        Err(_) => {
            if z.abs() < 4.0 {
                1.0
            } else {
                0.0
            }
        }
    }
}
