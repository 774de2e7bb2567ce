//! Abstract random source for name composition.
//!
//! The composer only ever needs "a uniform integer below `n`", so it draws
//! through [`RandomSource`] rather than a concrete generator. Any `rand`
//! generator can be adapted with [`RngSource`].

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniformly distributed integers.
///
/// Sources are not assumed to be thread-safe; each concurrent caller owns one.
pub trait RandomSource {
    /// Returns an integer uniformly distributed in `[0, bound)`.
    ///
    /// Callers guarantee `bound > 0`.
    fn below(&mut self, bound: usize) -> usize;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }
}

/// Adapts a `rand` generator into a [`RandomSource`].
#[derive(Clone, Debug)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wraps an existing generator.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped generator.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<ChaCha8Rng> {
    /// Creates a reproducible source from a 64-bit seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a source seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "RandomSource::below called with zero bound");
        self.rng.gen_range(0..bound)
    }
}
