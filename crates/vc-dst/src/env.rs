//! DST environment: one seed, one RNG, one workload configuration.

use crate::random::DeterministicRng;
use crate::workload::{Workload, WorkloadConfig};

/// Complete DST environment.
///
/// Given the same seed, every workload it hands out is identical.
///
/// # Usage
///
/// ```rust
/// use vc_dst::{DstEnv, get_or_generate_seed};
///
/// let seed = get_or_generate_seed();
/// let mut env = DstEnv::new(seed);
///
/// let steps = env.workload().count();
/// let coin = env.rng().gen_bool(0.5);
/// ```
pub struct DstEnv {
    seed: u64,
    rng: DeterministicRng,
    config: WorkloadConfig,
}

impl DstEnv {
    /// Create a new DST environment with the default workload.
    pub fn new(seed: u64) -> Self {
        Self::with_workload(seed, WorkloadConfig::default())
    }

    /// Create with a custom workload configuration.
    pub fn with_workload(seed: u64, config: WorkloadConfig) -> Self {
        debug_assert!(seed != 0, "Seed should not be zero");

        Self {
            seed,
            rng: DeterministicRng::new(seed),
            config,
        }
    }

    /// Get the seed used to create this environment.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Workload configuration in use.
    #[must_use]
    pub fn config(&self) -> &WorkloadConfig {
        &self.config
    }

    /// Access the deterministic RNG.
    pub fn rng(&mut self) -> &mut DeterministicRng {
        &mut self.rng
    }

    /// Start a new workload on a forked RNG stream.
    pub fn workload(&mut self) -> Workload {
        Workload::new(self.rng.fork(), self.config.clone())
    }
}
