//! Invariant traits for verified containers.
//!
//! Each module defines the properties an implementation must satisfy and a
//! checker that verifies them against the structure the container exposes.

pub mod list;
pub mod stack;
pub mod tree;

pub use list::{ListProperties, ListPropertyChecker};
pub use stack::{StackHistory, StackOpType, StackOperation, StackProperties, StackPropertyChecker};
pub use tree::{NodeReport, OrderingRule, TreeProperties, TreePropertyChecker};
