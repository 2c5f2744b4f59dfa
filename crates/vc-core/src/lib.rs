//! # vc-core
//!
//! Shared vocabulary for the verified containers workspace:
//!
//! - [`ContainerError`]: the single error type every fallible container
//!   operation returns.
//! - [`PropertyChecker`] / [`PropertyResult`]: named invariants with
//!   pass/fail status and optional counterexamples.
//! - [`invariants`]: per-container property traits and checkers. Containers
//!   expose their structure through these traits so tests can verify them
//!   after every mutation.

pub mod counterexample;
pub mod error;
pub mod invariants;
pub mod property;

pub use counterexample::{Counterexample, StateSnapshot};
pub use error::{ContainerError, ContainerResult};
pub use invariants::{
    ListProperties, ListPropertyChecker, NodeReport, OrderingRule, StackHistory, StackOpType,
    StackOperation, StackProperties, StackPropertyChecker, TreeProperties, TreePropertyChecker,
};
pub use property::{PropertyChecker, PropertyResult, PropertySummary};
