//! Randomness used by the wave
//!
//! All random decisions go through [`RandomSource`] so a run can be replayed
//! from its seed and tests can force exact outcomes.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of the wave's random decisions
pub trait RandomSource {
    /// Uniform integer in `lo..=hi`
    fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32;

    /// Uniform index in `0..len` (`len` must be non-zero)
    fn index(&mut self, len: usize) -> usize;
}

/// Seeded PCG generator used in play
#[derive(Debug, Clone)]
pub struct SimRng {
    seed: u64,
    rng: Pcg32,
}

impl SimRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SimRng {
    fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        self.rng.random_range(lo..=hi)
    }

    fn index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot pick from an empty set");
        self.rng.random_range(0..len)
    }
}

/// Source that always returns fixed answers
///
/// `threshold` is clamped into the requested range and `column` is taken
/// modulo the number of candidates, so any values are safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRng {
    pub threshold: u32,
    pub column: usize,
}

impl FixedRng {
    pub fn new(threshold: u32, column: usize) -> Self {
        Self { threshold, column }
    }
}

impl RandomSource for FixedRng {
    fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        self.threshold.clamp(lo, hi)
    }

    fn index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot pick from an empty set");
        self.column % len
    }
}
