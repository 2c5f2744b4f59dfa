//! Stateright model for `AvlTree`.
//!
//! The reference is a sorted `Vec`. States are deduplicated on tree shape,
//! so two insertion orders that produce different rotations are explored
//! separately.

use stateright::{Model, Property};
use vc_containers::AvlTree;
use vc_core::{PropertyChecker, TreePropertyChecker};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AvlState {
    pub tree: AvlTree<u8>,
    /// Ascending
    pub reference: Vec<u8>,
    pub steps: u8,
    pub diverged: bool,
}

impl AvlState {
    pub fn new() -> Self {
        Self {
            tree: AvlTree::new(),
            reference: Vec::new(),
            steps: 0,
            diverged: false,
        }
    }

    pub fn matches_reference(&self) -> bool {
        !self.diverged && self.tree.in_order() == self.reference
    }

    pub fn balanced(&self) -> bool {
        TreePropertyChecker::new(&self.tree).with_balance().all_hold()
    }
}

impl Default for AvlState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AvlAction {
    Insert(u8),
    Remove(u8),
}

pub struct AvlModel {
    pub values: Vec<u8>,
    pub steps_max: u8,
}

impl AvlModel {
    pub fn new(values: Vec<u8>, steps_max: u8) -> Self {
        debug_assert!(!values.is_empty());

        Self { values, steps_max }
    }
}

impl Model for AvlModel {
    type State = AvlState;
    type Action = AvlAction;

    fn init_states(&self) -> Vec<Self::State> {
        vec![AvlState::new()]
    }

    fn actions(&self, state: &Self::State, actions: &mut Vec<Self::Action>) {
        if state.steps >= self.steps_max {
            return;
        }
        for &value in &self.values {
            actions.push(AvlAction::Insert(value));
            actions.push(AvlAction::Remove(value));
        }
    }

    fn next_state(&self, state: &Self::State, action: Self::Action) -> Option<Self::State> {
        let mut next = state.clone();
        next.steps += 1;

        match action {
            AvlAction::Insert(value) => {
                next.tree.insert(value);
                let index = next.reference.partition_point(|&v| v <= value);
                next.reference.insert(index, value);
            }
            AvlAction::Remove(value) => {
                let removed = next.tree.remove(&value);
                let expected = match next.reference.binary_search(&value) {
                    Ok(index) => {
                        next.reference.remove(index);
                        true
                    }
                    Err(_) => false,
                };
                next.diverged |= removed != expected;
            }
        }

        Some(next)
    }

    fn properties(&self) -> Vec<Property<Self>> {
        vec![
            Property::always("MatchesReference", |_: &Self, state: &AvlState| {
                state.matches_reference()
            }),
            Property::always("Balanced", |_: &Self, state: &AvlState| state.balanced()),
            Property::always("HeightMatchesCount", |_: &Self, state: &AvlState| {
                // An AVL tree of height h holds at least fib(h + 3) - 1 nodes.
                let mut fewest = [1usize, 2];
                for _ in 0..state.tree.height().max(0) {
                    fewest = [fewest[1], fewest[0] + fewest[1] + 1];
                }
                state.tree.is_empty() || state.tree.len() >= fewest[0]
            }),
            Property::sometimes("ReachesHeightTwo", |_: &Self, state: &AvlState| {
                state.tree.height() == 2
            }),
        ]
    }
}
