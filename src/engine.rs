//! The shared pseudo-random stream behind every generator.
//!
//! One engine is seeded once per run and consumed sequentially by all
//! generators, so the entire sequence of "any" calls in a test is
//! reproducible from a single seed, not just each call in isolation.
//!
//! The engine is not meant to be shared across threads. A runner that
//! executes test cases concurrently must give each worker its own engine and
//! seed; reproducibility is then guaranteed per worker, not globally.

use crate::seed::Seed;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A single seeded PRNG stream.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: ChaCha8Rng,
}

impl RandomEngine {
    /// Create an engine seeded from `seed`. Identical seeds produce
    /// identical draw sequences.
    pub fn new(seed: Seed) -> RandomEngine {
        RandomEngine {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Restart the stream from `seed`, discarding all prior state.
    pub fn reseed(&mut self, seed: Seed) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Draw an integer uniformly from the inclusive range.
    pub fn next_int_in(&mut self, range: std::ops::RangeInclusive<i64>) -> i64 {
        self.rng.gen_range(range)
    }

    /// Draw a float uniformly from the half-open range.
    pub fn next_float_in(&mut self, range: std::ops::Range<f64>) -> f64 {
        self.rng.gen_range(range)
    }

    /// Draw an index into a collection of `len` elements.
    ///
    /// `len` must be non-zero; generators only call this against static
    /// non-empty pools.
    pub fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.rng.gen_range(0..len)
    }
}
