//! Deterministic operation workloads.
//!
//! A workload is a finite stream of [`Op`]s drawn from a seeded RNG
//! according to a [`WorkloadConfig`]. Each container test interprets the
//! three operation kinds in its own terms (insert/push, remove/pop,
//! contains/top). Some operations are flagged `invalid`: the driver turns
//! them into requests that must be rejected (an out-of-range index, a pop
//! on an empty container, a push on a full one) to check that failures
//! leave the container untouched.

use crate::random::DeterministicRng;

/// Configuration for workload generation.
#[derive(Debug, Clone)]
pub struct WorkloadConfig {
    /// Relative weight of insert operations
    pub insert_weight: u32,
    /// Relative weight of remove operations
    pub remove_weight: u32,
    /// Relative weight of query operations
    pub query_weight: u32,
    /// Smallest value generated (inclusive)
    pub value_min: i64,
    /// Largest value generated (inclusive)
    pub value_max: i64,
    /// Number of operations in one run
    pub steps_count: u64,
    /// Probability an operation is turned into an invalid request (0.0 to 1.0)
    pub invalid_probability: f64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            insert_weight: 50,
            remove_weight: 30,
            query_weight: 20,
            value_min: 0,
            value_max: 63,
            steps_count: 256,
            invalid_probability: 0.05,
        }
    }
}

impl WorkloadConfig {
    /// Mostly inserts over a wide value range; grows large structures.
    #[must_use]
    pub fn insert_heavy() -> Self {
        Self {
            insert_weight: 80,
            remove_weight: 10,
            query_weight: 10,
            value_min: 0,
            value_max: 1023,
            steps_count: 512,
            invalid_probability: 0.02,
        }
    }

    /// Balanced inserts and removes over a narrow range; many duplicates.
    #[must_use]
    pub fn churn() -> Self {
        Self {
            insert_weight: 40,
            remove_weight: 40,
            query_weight: 20,
            value_min: 0,
            value_max: 15,
            steps_count: 512,
            invalid_probability: 0.1,
        }
    }

    /// Default mix with no invalid requests.
    #[must_use]
    pub fn valid_only() -> Self {
        Self {
            invalid_probability: 0.0,
            ..Self::default()
        }
    }

    fn total_weight(&self) -> u32 {
        self.insert_weight + self.remove_weight + self.query_weight
    }
}

/// Kind of generated operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Insert,
    Remove,
    Query,
}

/// A generated operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Op {
    /// 1-based step number within the run
    pub step: u64,
    /// What to do
    pub kind: OpKind,
    /// Value to insert, remove, or look up
    pub value: i64,
    /// Raw position, reduced to an index by [`insert_index`](Self::insert_index)
    /// or [`access_index`](Self::access_index)
    pub position: u64,
    /// Whether the driver should issue a request that must be rejected
    pub invalid: bool,
}

impl Op {
    /// Index for a positional insert into a sequence of `len` elements.
    ///
    /// Valid operations land in `0..=len`; invalid ones just past it.
    #[must_use]
    pub fn insert_index(&self, len: usize) -> usize {
        let spread = self.position as usize;
        if self.invalid {
            len + 1 + spread % 3
        } else {
            spread % (len + 1)
        }
    }

    /// Index for a positional access into a sequence of `len` elements.
    ///
    /// Valid operations land in `0..len` (0 when `len` is 0); invalid ones
    /// at or past `len`.
    #[must_use]
    pub fn access_index(&self, len: usize) -> usize {
        let spread = self.position as usize;
        if self.invalid || len == 0 {
            len + spread % 3
        } else {
            spread % len
        }
    }
}

/// Finite, reproducible stream of operations.
pub struct Workload {
    rng: DeterministicRng,
    config: WorkloadConfig,
    steps_generated: u64,
}

impl Workload {
    /// Create a workload drawing from the given RNG.
    pub fn new(rng: DeterministicRng, config: WorkloadConfig) -> Self {
        debug_assert!(config.total_weight() > 0, "At least one weight must be non-zero");
        debug_assert!(config.value_min <= config.value_max, "Empty value range");
        debug_assert!(
            (0.0..=1.0).contains(&config.invalid_probability),
            "Invalid probability must be in [0.0, 1.0]"
        );

        Self {
            rng,
            config,
            steps_generated: 0,
        }
    }

    /// Configuration this workload was built from.
    #[must_use]
    pub fn config(&self) -> &WorkloadConfig {
        &self.config
    }

    /// Number of operations produced so far.
    #[must_use]
    pub fn steps_generated(&self) -> u64 {
        self.steps_generated
    }

    fn pick_kind(&mut self) -> OpKind {
        let roll = self.rng.gen_range(0..self.config.total_weight());
        if roll < self.config.insert_weight {
            OpKind::Insert
        } else if roll < self.config.insert_weight + self.config.remove_weight {
            OpKind::Remove
        } else {
            OpKind::Query
        }
    }
}

impl Iterator for Workload {
    type Item = Op;

    fn next(&mut self) -> Option<Op> {
        if self.steps_generated >= self.config.steps_count {
            return None;
        }
        self.steps_generated += 1;

        let kind = self.pick_kind();
        let value = self
            .rng
            .gen_range(self.config.value_min..=self.config.value_max);
        let position = self.rng.next_u64();
        let invalid = self.rng.gen_bool(self.config.invalid_probability);

        Some(Op {
            step: self.steps_generated,
            kind,
            value,
            position,
            invalid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workload_is_finite_and_numbered() {
        let config = WorkloadConfig {
            steps_count: 10,
            ..WorkloadConfig::default()
        };
        let ops: Vec<Op> = Workload::new(DeterministicRng::new(7), config).collect();

        assert_eq!(ops.len(), 10);
        assert_eq!(ops.first().map(|op| op.step), Some(1));
        assert_eq!(ops.last().map(|op| op.step), Some(10));
    }

    #[test]
    fn test_workload_is_reproducible() {
        let a: Vec<Op> = Workload::new(DeterministicRng::new(99), WorkloadConfig::churn()).collect();
        let b: Vec<Op> = Workload::new(DeterministicRng::new(99), WorkloadConfig::churn()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_values_within_range() {
        let config = WorkloadConfig::churn();
        for op in Workload::new(DeterministicRng::new(3), config.clone()) {
            assert!(op.value >= config.value_min && op.value <= config.value_max);
        }
    }

    #[test]
    fn test_valid_only_never_invalid() {
        let ops = Workload::new(DeterministicRng::new(11), WorkloadConfig::valid_only());
        assert!(ops.into_iter().all(|op| !op.invalid));
    }

    #[test]
    fn test_zero_weight_kinds_never_generated() {
        let config = WorkloadConfig {
            remove_weight: 0,
            query_weight: 0,
            ..WorkloadConfig::default()
        };
        let ops = Workload::new(DeterministicRng::new(5), config);
        assert!(ops.into_iter().all(|op| op.kind == OpKind::Insert));
    }

    #[test]
    fn test_index_reduction() {
        let mut op = Op {
            step: 1,
            kind: OpKind::Insert,
            value: 0,
            position: 17,
            invalid: false,
        };

        assert_eq!(op.insert_index(4), 17 % 5);
        assert_eq!(op.access_index(4), 17 % 4);
        assert_eq!(op.access_index(0), 17 % 3);

        op.invalid = true;
        assert!(op.insert_index(4) > 4);
        assert!(op.access_index(4) >= 4);
    }
}
