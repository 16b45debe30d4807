//! Seedable randomness for decorative effects.
//!
//! Particle placement goes through [`RandomSource`] so tests can swap in a
//! fixed source and assert bounds without pinning exact coordinates.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniformly distributed floats.
pub trait RandomSource {
    /// Returns a value in `[low, high)`, or `low` when the range is empty.
    fn uniform(&mut self, low: f32, high: f32) -> f32;
}

/// ChaCha8-backed deterministic source.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    inner: ChaCha8Rng,
    seed: u64,
}

impl SeededRandom {
    /// Creates a source that replays the same sequence for the same seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a source from a random seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this source started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        if low < high {
            self.inner.gen_range(low..high)
        } else {
            low
        }
    }
}
