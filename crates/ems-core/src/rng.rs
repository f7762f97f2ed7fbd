//! Deterministic RNG wrapper for reproducible scenario generation.
//!
//! # Determinism strategy
//!
//! All randomness in the pipeline (capacity draws, destination picks,
//! required-speed draws) flows through one [`PlanRng`].  Constructed with an
//! explicit seed it is fully deterministic: the same seed and the same call
//! sequence always produce the same scenario.  Constructed without a seed it
//! is entropy-seeded for interactive use.
//!
//! Child RNGs are derived with a golden-ratio mixing constant so sibling
//! streams never overlap even for adjacent offsets.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seedable RNG used by capacity and commodity generation.
///
/// The type is `!Sync` so it cannot be shared across threads by accident —
/// a solve captures its inputs up front and never draws concurrently.
pub struct PlanRng(SmallRng);

impl PlanRng {
    /// Deterministic RNG from an explicit seed.
    pub fn seeded(seed: u64) -> Self {
        PlanRng(SmallRng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is `Some`, entropy-seeded otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => PlanRng(SmallRng::from_entropy()),
        }
    }

    /// Derive a child `PlanRng` with a different seed offset — used to give
    /// each regeneration command its own stream without disturbing siblings.
    pub fn child(&mut self, offset: u64) -> PlanRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        PlanRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
