//! Stateright model for `BoundedStack`.

use stateright::{Model, Property};
use vc_containers::BoundedStack;
use vc_core::{ContainerError, ContainerResult, PropertyChecker, StackPropertyChecker};

/// Stack paired with its reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StackState {
    pub stack: BoundedStack<u8>,
    /// Bottom to top
    pub reference: Vec<u8>,
    pub steps: u8,
    /// Whether the last action was a rejected push
    pub push_rejected: bool,
    /// Whether any result ever differed from the reference
    pub diverged: bool,
}

impl StackState {
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0);

        Self {
            stack: BoundedStack::with_capacity(capacity),
            reference: Vec::new(),
            steps: 0,
            push_rejected: false,
            diverged: false,
        }
    }

    pub fn matches_reference(&self) -> bool {
        !self.diverged && self.stack.as_slice() == self.reference.as_slice()
    }

    pub fn invariants_hold(&self) -> bool {
        StackPropertyChecker::new(&self.stack).all_hold()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StackAction {
    Push(u8),
    Pop,
    Clear,
}

/// Bounded model: every sequence of up to `steps_max` actions.
pub struct StackModel {
    pub capacity: usize,
    pub values: Vec<u8>,
    pub steps_max: u8,
}

impl StackModel {
    pub fn new(capacity: usize, values: Vec<u8>, steps_max: u8) -> Self {
        debug_assert!(capacity > 0);
        debug_assert!(!values.is_empty());

        Self {
            capacity,
            values,
            steps_max,
        }
    }

    fn reference_push(&self, reference: &mut Vec<u8>, value: u8) -> ContainerResult<()> {
        if reference.len() >= self.capacity {
            return Err(ContainerError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        reference.push(value);
        Ok(())
    }
}

impl Model for StackModel {
    type State = StackState;
    type Action = StackAction;

    fn init_states(&self) -> Vec<Self::State> {
        vec![StackState::new(self.capacity)]
    }

    fn actions(&self, state: &Self::State, actions: &mut Vec<Self::Action>) {
        if state.steps >= self.steps_max {
            return;
        }
        for &value in &self.values {
            actions.push(StackAction::Push(value));
        }
        actions.push(StackAction::Pop);
        actions.push(StackAction::Clear);
    }

    fn next_state(&self, state: &Self::State, action: Self::Action) -> Option<Self::State> {
        let mut next = state.clone();
        next.steps += 1;
        next.push_rejected = false;

        match action {
            StackAction::Push(value) => {
                let actual = next.stack.push(value);
                let expected = self.reference_push(&mut next.reference, value);
                next.push_rejected = actual.is_err();
                next.diverged |= actual != expected;
            }
            StackAction::Pop => {
                let actual = next.stack.pop();
                let expected = next.reference.pop().ok_or(ContainerError::Empty);
                next.diverged |= actual != expected;
            }
            StackAction::Clear => {
                next.stack.clear();
                next.reference.clear();
            }
        }

        Some(next)
    }

    fn properties(&self) -> Vec<Property<Self>> {
        vec![
            Property::always("MatchesReference", |_: &Self, state: &StackState| {
                state.matches_reference()
            }),
            Property::always("StructuralInvariants", |_: &Self, state: &StackState| {
                state.invariants_hold()
            }),
            Property::sometimes("ReachesFull", |_: &Self, state: &StackState| {
                state.stack.is_full()
            }),
            Property::sometimes("RejectsPushWhenFull", |_: &Self, state: &StackState| {
                state.push_rejected
            }),
        ]
    }
}
