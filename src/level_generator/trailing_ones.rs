//! Bit-counting level generator.

use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::level_generator::LevelGenerator;

/// A level generator which counts the consecutive low-order one bits of a
/// random 32-bit integer.
///
/// Each bit is set independently with probability $1/2$, so the probability
/// of reaching level $h$ is $2^{-h}$: a geometric distribution with $p = 1/2$
/// that costs a single random draw per node. Levels are truncated at
/// `total - 1`.
#[derive(Debug)]
pub struct TrailingOnes {
    /// The total number of levels that are assumed to exist.
    total: usize,
    /// The random number generator.
    rng: SmallRng,
}

impl TrailingOnes {
    /// Create a new generator producing levels in `[0, total)`, seeded from
    /// the thread-local random number generator.
    ///
    /// # Panics
    ///
    /// Panics if `total` is zero.
    #[inline]
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self::with_rng(total, SmallRng::from_rng(&mut rand::rng()))
    }

    /// Create a new generator producing levels in `[0, total)` whose random
    /// number generator is seeded with `seed`.
    ///
    /// # Panics
    ///
    /// Panics if `total` is zero.
    #[inline]
    #[must_use]
    pub fn with_seed(total: usize, seed: u64) -> Self {
        Self::with_rng(total, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(total: usize, rng: SmallRng) -> Self {
        assert!(total > 0, "total must be non-zero.");
        TrailingOnes { total, rng }
    }
}

impl LevelGenerator for TrailingOnes {
    #[inline]
    fn total(&self) -> usize {
        self.total
    }

    #[inline]
    fn level(&mut self) -> usize {
        let bits = self.rng.random::<u32>().trailing_ones();
        usize::try_from(bits).map_or(self.total - 1, |level| level.min(self.total - 1))
    }
}
