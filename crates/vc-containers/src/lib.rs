//! # vc-containers
//!
//! Generic, single-threaded, in-memory containers:
//!
//! - [`BoundedStack`]: fixed-capacity LIFO.
//! - [`CircularList`]: circular doubly-linked sequence with O(1) splicing.
//! - [`BinarySearchTree`]: unbalanced BST, duplicates routed right.
//! - [`AvlTree`]: height-balanced BST rebalanced after every mutation.
//!
//! Each container:
//! - Returns [`ContainerError`](vc_core::ContainerError) before mutating
//!   when an operation is rejected
//! - Implements the matching properties trait from `vc-core` so tests can
//!   check its structural invariants
//! - Has DST tests (under `tests/`) that drive it against a reference model
//!
//! [`braces_balanced`] is a small client of [`BoundedStack`].
//!
//! All operations take `&mut self` for mutation; share an instance between
//! threads only behind a lock.

pub mod avl;
pub mod brackets;
pub mod bst;
pub mod bounded_stack;
pub mod circular_list;
mod tree;

pub use avl::AvlTree;
pub use brackets::braces_balanced;
pub use bst::BinarySearchTree;
pub use bounded_stack::BoundedStack;
pub use circular_list::CircularList;
