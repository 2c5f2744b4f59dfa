//! Deterministic random number generation.
//!
//! Uses a seeded PRNG (Xoshiro256**) that produces identical sequences
//! for identical seeds, enabling reproducible test runs.

use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Maximum number of RNG calls before warning.
const RNG_CALLS_WARNING_THRESHOLD: u64 = 1_000_000_000;

/// Deterministic random number generator.
///
/// Given the same seed, always produces the same sequence.
///
/// # Example
///
/// ```rust
/// use vc_dst::DeterministicRng;
///
/// let mut rng = DeterministicRng::new(12345);
/// let a = rng.next_u64();
/// let i = rng.gen_index(10);
///
/// let mut rng2 = DeterministicRng::new(12345);
/// assert_eq!(rng2.next_u64(), a);
/// assert_eq!(rng2.gen_index(10), i);
/// ```
pub struct DeterministicRng {
    seed: u64,
    rng: Xoshiro256StarStar,
    calls_count: u64,
}

impl DeterministicRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        debug_assert!(seed != 0, "Seed should not be zero for better randomness");

        Self {
            seed,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
            calls_count: 0,
        }
    }

    /// Get the seed used to create this RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get number of random values generated.
    #[must_use]
    pub fn calls_count(&self) -> u64 {
        self.calls_count
    }

    fn tick(&mut self) {
        self.calls_count += 1;
        debug_assert!(
            self.calls_count < RNG_CALLS_WARNING_THRESHOLD,
            "Very high number of RNG calls - possible infinite loop"
        );
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.tick();
        self.rng.next_u64()
    }

    /// Generate a random value in the given range.
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.tick();
        self.rng.gen_range(range)
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "Cannot pick an index from an empty range");
        self.gen_range(0..len)
    }

    /// Generate a boolean with the given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        debug_assert!(
            (0.0..=1.0).contains(&probability),
            "Probability must be in [0.0, 1.0]"
        );
        self.tick();
        self.rng.gen_bool(probability)
    }

    /// Shuffle a slice in place (used to randomize insertion orders).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        self.tick();
        slice.shuffle(&mut self.rng);
    }

    /// Fork this RNG into a new one with a derived seed.
    ///
    /// Gives each workload its own stream without disturbing the parent.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        let new_seed = self.next_u64().max(1);
        Self::new(new_seed)
    }

    /// Reset to initial state (same seed).
    pub fn reset(&mut self) {
        self.rng = Xoshiro256StarStar::seed_from_u64(self.seed);
        self.calls_count = 0;
    }
}
