//! # vc-dst
//!
//! Deterministic Simulation Testing for the verified containers.
//!
//! A run is fully determined by its seed: the seed drives a Xoshiro256**
//! generator, which drives a [`Workload`] of insert/remove/query operations
//! (with an occasional deliberately invalid request). Tests apply the same
//! operations to a container and to a trivially correct reference model and
//! compare them after every step.
//!
//! ## Usage
//!
//! ```rust
//! use vc_dst::{DstEnv, OpKind, WorkloadConfig};
//!
//! let mut env = DstEnv::with_workload(12345, WorkloadConfig::valid_only());
//! let mut model = Vec::new();
//!
//! for op in env.workload() {
//!     if op.kind == OpKind::Insert {
//!         model.push(op.value);
//!     }
//! }
//! ```
//!
//! ## Reproducibility
//!
//! To reproduce a failing test:
//! ```bash
//! DST_SEED=12345 cargo test
//! ```

pub mod env;
pub mod random;
pub mod workload;

pub use env::DstEnv;
pub use random::DeterministicRng;
pub use workload::{Op, OpKind, Workload, WorkloadConfig};

/// Number of randomized runs when `DST_ITERATIONS` is not set.
pub const ITERATIONS_DEFAULT: u64 = 16;

/// Get DST seed from environment or generate random one.
///
/// Prints the seed for reproduction. Use `DST_SEED=<seed>` to reproduce.
#[must_use]
pub fn get_or_generate_seed() -> u64 {
    if let Ok(s) = std::env::var("DST_SEED") {
        match s.parse::<u64>() {
            Ok(seed) if seed != 0 => {
                println!("DST_SEED={} (from environment)", seed);
                return seed;
            }
            _ => println!("DST_SEED={:?} is not a non-zero u64, ignoring", s),
        }
    }

    let seed = rand::random::<u64>().max(1);
    println!("DST_SEED={} (randomly generated)", seed);
    seed
}

/// Number of randomized runs, from `DST_ITERATIONS` or the default.
#[must_use]
pub fn iterations_from_env() -> u64 {
    std::env::var("DST_ITERATIONS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(ITERATIONS_DEFAULT)
}
