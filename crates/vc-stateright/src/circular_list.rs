//! Stateright model for `CircularList`.
//!
//! Positional actions include one index past the valid range, so every
//! explored state also exercises the rejection path.

use stateright::{Model, Property};
use vc_containers::CircularList;
use vc_core::{ContainerError, ListPropertyChecker, PropertyChecker};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListState {
    pub list: CircularList<u8>,
    /// Head first
    pub reference: Vec<u8>,
    pub steps: u8,
    /// Whether the last action was rejected with `IndexOutOfRange`
    pub index_rejected: bool,
    pub diverged: bool,
}

impl ListState {
    pub fn new() -> Self {
        Self {
            list: CircularList::new(),
            reference: Vec::new(),
            steps: 0,
            index_rejected: false,
            diverged: false,
        }
    }

    pub fn matches_reference(&self) -> bool {
        !self.diverged && self.list.to_vec() == self.reference
    }

    pub fn ring_intact(&self) -> bool {
        ListPropertyChecker::new(&self.list).all_hold()
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListAction {
    PushFront(u8),
    PushBack(u8),
    Insert { value: u8, index: usize },
    Pop(usize),
    PopBack,
    Remove(u8),
}

pub struct ListModel {
    pub values: Vec<u8>,
    pub steps_max: u8,
}

impl ListModel {
    pub fn new(values: Vec<u8>, steps_max: u8) -> Self {
        debug_assert!(!values.is_empty());

        Self { values, steps_max }
    }
}

impl Model for ListModel {
    type State = ListState;
    type Action = ListAction;

    fn init_states(&self) -> Vec<Self::State> {
        vec![ListState::new()]
    }

    fn actions(&self, state: &Self::State, actions: &mut Vec<Self::Action>) {
        if state.steps >= self.steps_max {
            return;
        }
        let len = state.reference.len();

        for &value in &self.values {
            actions.push(ListAction::PushFront(value));
            actions.push(ListAction::PushBack(value));
            actions.push(ListAction::Remove(value));
            for index in 0..=len + 1 {
                actions.push(ListAction::Insert { value, index });
            }
        }
        for index in 0..=len {
            actions.push(ListAction::Pop(index));
        }
        actions.push(ListAction::PopBack);
    }

    fn next_state(&self, state: &Self::State, action: Self::Action) -> Option<Self::State> {
        let mut next = state.clone();
        next.steps += 1;
        next.index_rejected = false;

        let len = next.reference.len();
        let (list, reference) = (&mut next.list, &mut next.reference);

        let agrees = match action {
            ListAction::PushFront(value) => {
                list.push_front(value);
                reference.insert(0, value);
                true
            }
            ListAction::PushBack(value) => {
                list.push_back(value);
                reference.push(value);
                true
            }
            ListAction::Insert { value, index } => {
                let actual = list.insert(value, index);
                let expected = if index > len {
                    Err(ContainerError::IndexOutOfRange { index, len })
                } else {
                    reference.insert(index, value);
                    Ok(())
                };
                next.index_rejected = actual.is_err();
                actual == expected
            }
            ListAction::Pop(index) => {
                let actual = list.pop(index);
                let expected = if len == 0 {
                    Err(ContainerError::Empty)
                } else if index >= len {
                    Err(ContainerError::IndexOutOfRange { index, len })
                } else {
                    Ok(reference.remove(index))
                };
                next.index_rejected =
                    matches!(actual, Err(ContainerError::IndexOutOfRange { .. }));
                actual == expected
            }
            ListAction::PopBack => list.pop_back() == reference.pop().ok_or(ContainerError::Empty),
            ListAction::Remove(value) => {
                let expected = match reference.iter().position(|&v| v == value) {
                    Some(index) => Ok(reference.remove(index)),
                    None => Err(ContainerError::NotFound),
                };
                list.remove(&value) == expected
            }
        };
        next.diverged |= !agrees;

        Some(next)
    }

    fn properties(&self) -> Vec<Property<Self>> {
        vec![
            Property::always("MatchesReference", |_: &Self, state: &ListState| {
                state.matches_reference()
            }),
            Property::always("RingIntact", |_: &Self, state: &ListState| {
                state.ring_intact()
            }),
            Property::sometimes("RejectsOutOfRange", |_: &Self, state: &ListState| {
                state.index_rejected
            }),
            Property::sometimes("HoldsThree", |_: &Self, state: &ListState| {
                state.list.len() == 3
            }),
        ]
    }
}
