//! Random number generator abstraction for determinism.
//!
//! In production, this wraps a real RNG. In tests, a seeded or scripted
//! implementation is injected.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Abstraction over random number generation.
pub trait DeterministicRng: Send + Sync {
    /// Generate a random `u32` in the range `[min, max]` inclusive.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;
}

/// Picks one element of `items` uniformly at random.
///
/// Returns `None` for an empty slice, or when the source yields an index
/// outside the slice.
pub fn choose<'a, T>(rng: &mut dyn DeterministicRng, items: &'a [T]) -> Option<&'a T> {
    let last = u32::try_from(items.len().checked_sub(1)?).ok()?;
    let index = rng.next_u32_range(0, last);
    items.get(usize::try_from(index).ok()?)
}

/// Production random source backed by `StdRng`.
#[derive(Debug)]
pub struct StdRngSource(StdRng);

impl StdRngSource {
    /// Create a source seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(StdRng::from_os_rng())
    }

    /// Create a reproducible source from a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl DeterministicRng for StdRngSource {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        self.0.random_range(min..=max)
    }
}
