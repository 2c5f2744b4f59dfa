//! # vc-stateright
//!
//! Stateright models that drive the real containers.
//!
//! Each model state pairs a container with a trivially correct reference
//! (a `Vec`), applies every action to both, and records whether any result
//! differed. Bounded BFS then explores every action sequence up to a step
//! limit and checks:
//!
//! - `always` properties: the container matches its reference and its
//!   structural invariants hold
//! - `sometimes` properties: interesting states (full stack, rejected
//!   request, rotated tree) are actually reached

pub mod avl_tree;
pub mod bounded_stack;
pub mod circular_list;

pub use avl_tree::{AvlAction, AvlModel, AvlState};
pub use bounded_stack::{StackAction, StackModel, StackState};
pub use circular_list::{ListAction, ListModel, ListState};
