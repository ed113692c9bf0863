//! Deterministic simulation-level RNG wrapper.
//!
//! The tick loop itself is fully deterministic; randomness is only used to
//! scatter scenario features.  The same seed always yields the same layout.

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Seeded RNG for scenario generation.
///
/// Used only in single-threaded contexts.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
