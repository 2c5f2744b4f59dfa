//! Bounded stack invariants.
//!
//! | Property | Description |
//! |----------|-------------|
//! | SizeWithinCapacity | 0 <= size <= capacity, and size matches the contents |
//! | LifoOrder | Every pop returned the most recently pushed live element |
//! | ContentsMatchHistory | Replaying the history reproduces the current contents |

use std::fmt::Debug;

use crate::counterexample::{Counterexample, StateSnapshot};
use crate::property::{PropertyChecker, PropertyResult};

const CONTAINER: &str = "bounded_stack";

/// Structure a stack exposes for property checking.
pub trait StackProperties {
    /// Element type stored in the stack.
    type Item: Clone + Debug + PartialEq;

    /// Fixed capacity chosen at construction.
    fn capacity(&self) -> usize;

    /// Current number of elements.
    fn len(&self) -> usize;

    /// Current contents, bottom to top.
    fn contents(&self) -> Vec<Self::Item>;
}

/// History of stack operations, recorded by the driver of a test run.
#[derive(Debug, Clone)]
pub struct StackHistory<T> {
    /// Operations in the order they were applied
    pub operations: Vec<StackOperation<T>>,
}

impl<T> Default for StackHistory<T> {
    fn default() -> Self {
        Self {
            operations: Vec::new(),
        }
    }
}

/// A single recorded stack operation.
#[derive(Debug, Clone)]
pub struct StackOperation<T> {
    /// Type of operation
    pub op_type: StackOpType,
    /// Element pushed, or element a pop returned
    pub element: Option<T>,
    /// Step number for ordering
    pub step: u64,
}

/// Type of stack operation and its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackOpType {
    Push,
    PushFull,
    Pop,
    PopEmpty,
    Clear,
}

impl<T> StackHistory<T> {
    /// Create a new empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, op_type: StackOpType, element: Option<T>, step: u64) {
        debug_assert!(step > 0, "Step must be positive");
        debug_assert!(
            self.operations.last().map_or(true, |last| last.step < step),
            "Steps must increase"
        );
        self.operations.push(StackOperation {
            op_type,
            element,
            step,
        });
    }

    /// Record an accepted push, or one rejected because the stack was full.
    pub fn record_push(&mut self, element: T, accepted: bool, step: u64) {
        let op_type = if accepted {
            StackOpType::Push
        } else {
            StackOpType::PushFull
        };
        self.record(op_type, Some(element), step);
    }

    /// Record a pop and the element it returned (`None` when empty).
    pub fn record_pop(&mut self, element: Option<T>, step: u64) {
        let op_type = if element.is_some() {
            StackOpType::Pop
        } else {
            StackOpType::PopEmpty
        };
        self.record(op_type, element, step);
    }

    /// Record a clear.
    pub fn record_clear(&mut self, step: u64) {
        self.record(StackOpType::Clear, None, step);
    }
}

/// Property checker for stack implementations.
pub struct StackPropertyChecker<'a, S: StackProperties> {
    stack: &'a S,
    history: Option<&'a StackHistory<S::Item>>,
    dst_seed: Option<u64>,
}

/// Where and why a history replay diverged.
struct Divergence {
    step: u64,
    message: String,
}

impl<'a, S: StackProperties> StackPropertyChecker<'a, S> {
    /// Create a new checker for the given stack.
    #[must_use]
    pub fn new(stack: &'a S) -> Self {
        Self {
            stack,
            history: None,
            dst_seed: None,
        }
    }

    /// Attach the operation history to check ordering against.
    #[must_use]
    pub fn with_history(mut self, history: &'a StackHistory<S::Item>) -> Self {
        self.history = Some(history);
        self
    }

    /// Set DST seed for counterexample reproduction.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        debug_assert!(seed != 0, "DST seed should not be zero");
        self.dst_seed = Some(seed);
        self
    }

    fn counterexample(&self) -> Counterexample {
        match self.dst_seed {
            Some(seed) => Counterexample::with_seed(seed),
            None => Counterexample::new(),
        }
    }

    /// Replay the history against a reference stack.
    fn replay(&self, history: &StackHistory<S::Item>) -> Result<Vec<S::Item>, Divergence> {
        let capacity = self.stack.capacity();
        let mut model: Vec<S::Item> = Vec::with_capacity(capacity);

        for op in &history.operations {
            match op.op_type {
                StackOpType::Push => {
                    if model.len() >= capacity {
                        return Err(Divergence {
                            step: op.step,
                            message: format!("push accepted at size {} (capacity {})", model.len(), capacity),
                        });
                    }
                    if let Some(ref e) = op.element {
                        model.push(e.clone());
                    }
                }
                StackOpType::PushFull => {
                    if model.len() != capacity {
                        return Err(Divergence {
                            step: op.step,
                            message: format!("push rejected at size {} (capacity {})", model.len(), capacity),
                        });
                    }
                }
                StackOpType::Pop => {
                    let expected = model.pop();
                    if expected != op.element {
                        return Err(Divergence {
                            step: op.step,
                            message: format!("pop returned {:?} but LIFO expected {:?}", op.element, expected),
                        });
                    }
                }
                StackOpType::PopEmpty => {
                    if !model.is_empty() {
                        return Err(Divergence {
                            step: op.step,
                            message: format!("pop reported empty with {} elements live", model.len()),
                        });
                    }
                }
                StackOpType::Clear => model.clear(),
            }
        }

        Ok(model)
    }

    fn check_size_within_capacity(&self) -> PropertyResult {
        let len = self.stack.len();
        let capacity = self.stack.capacity();
        let contents_len = self.stack.contents().len();

        if len > capacity {
            return PropertyResult::fail(
                "SizeWithinCapacity",
                CONTAINER,
                format!("size {} exceeds capacity {}", len, capacity),
                None,
            );
        }
        if len != contents_len {
            return PropertyResult::fail(
                "SizeWithinCapacity",
                CONTAINER,
                format!("size {} but {} elements stored", len, contents_len),
                None,
            );
        }

        PropertyResult::pass("SizeWithinCapacity", CONTAINER)
    }

    fn check_lifo_order(&self) -> PropertyResult {
        let Some(history) = self.history else {
            return PropertyResult::pass("LifoOrder", CONTAINER);
        };

        match self.replay(history) {
            Ok(_) => PropertyResult::pass("LifoOrder", CONTAINER),
            Err(divergence) => {
                let mut ce = self.counterexample();
                for op in history.operations.iter().filter(|op| op.step <= divergence.step) {
                    ce.add_state(StateSnapshot {
                        step: op.step,
                        description: format!("{:?}", op.op_type),
                        variables: vec![("element".to_string(), format!("{:?}", op.element))],
                    });
                }
                PropertyResult::fail("LifoOrder", CONTAINER, divergence.message, Some(ce))
            }
        }
    }

    fn check_contents_match_history(&self) -> PropertyResult {
        let Some(history) = self.history else {
            return PropertyResult::pass("ContentsMatchHistory", CONTAINER);
        };

        // A divergent replay is reported by LifoOrder.
        let Ok(model) = self.replay(history) else {
            return PropertyResult::pass("ContentsMatchHistory", CONTAINER);
        };

        let contents = self.stack.contents();
        if model != contents {
            let mut ce = self.counterexample();
            ce.add_state(StateSnapshot {
                step: history.operations.last().map_or(1, |op| op.step),
                description: "end of history".to_string(),
                variables: vec![
                    ("expected".to_string(), format!("{:?}", model)),
                    ("contents".to_string(), format!("{:?}", contents)),
                ],
            });
            return PropertyResult::fail(
                "ContentsMatchHistory",
                CONTAINER,
                format!("contents {:?} but history implies {:?}", contents, model),
                Some(ce),
            );
        }

        PropertyResult::pass("ContentsMatchHistory", CONTAINER)
    }
}

impl<S: StackProperties> PropertyChecker for StackPropertyChecker<'_, S> {
    fn check_all(&self) -> Vec<PropertyResult> {
        vec![
            self.check_size_within_capacity(),
            self.check_lifo_order(),
            self.check_contents_match_history(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal stack used to exercise the checker.
    struct TestStack {
        capacity: usize,
        len: usize,
        contents: Vec<u64>,
    }

    impl TestStack {
        fn new(capacity: usize) -> Self {
            Self {
                capacity,
                len: 0,
                contents: Vec::new(),
            }
        }

        fn push(&mut self, val: u64, history: &mut StackHistory<u64>) {
            let step = history.operations.len() as u64 + 1;
            let accepted = self.contents.len() < self.capacity;
            if accepted {
                self.contents.push(val);
                self.len += 1;
            }
            history.record_push(val, accepted, step);
        }

        fn pop(&mut self, history: &mut StackHistory<u64>) -> Option<u64> {
            let step = history.operations.len() as u64 + 1;
            let val = self.contents.pop();
            if val.is_some() {
                self.len -= 1;
            }
            history.record_pop(val, step);
            val
        }
    }

    impl StackProperties for TestStack {
        type Item = u64;

        fn capacity(&self) -> usize {
            self.capacity
        }

        fn len(&self) -> usize {
            self.len
        }

        fn contents(&self) -> Vec<u64> {
            self.contents.clone()
        }
    }

    #[test]
    fn test_correct_stack_passes_all() {
        let mut history = StackHistory::new();
        let mut stack = TestStack::new(2);
        stack.push(1, &mut history);
        stack.push(2, &mut history);
        stack.push(3, &mut history);
        stack.pop(&mut history);
        stack.pop(&mut history);
        stack.pop(&mut history);

        let checker = StackPropertyChecker::new(&stack).with_history(&history);
        assert!(checker.all_hold(), "{}", checker.summary().format_report());
    }

    #[test]
    fn test_wrong_pop_order_detected() {
        let mut history = StackHistory::new();
        history.record_push(1, true, 1);
        history.record_push(2, true, 2);
        history.record_pop(Some(1), 3);
        let stack = TestStack {
            capacity: 4,
            len: 1,
            contents: vec![2],
        };

        let checker = StackPropertyChecker::new(&stack)
            .with_history(&history)
            .with_seed(99);
        let failure = checker.verify_all().unwrap_err();
        assert_eq!(failure.name, "LifoOrder");
        assert_eq!(failure.counterexample.as_ref().unwrap().dst_seed, Some(99));
        assert_eq!(failure.counterexample.as_ref().unwrap().states.len(), 3);
    }

    #[test]
    fn test_lost_element_detected() {
        let mut history = StackHistory::new();
        history.record_push(1, true, 1);
        history.record_push(2, true, 2);
        let stack = TestStack {
            capacity: 4,
            len: 1,
            contents: vec![1],
        };

        let checker = StackPropertyChecker::new(&stack).with_history(&history);
        let results = checker.check_all();
        let contents = results
            .iter()
            .find(|r| r.name == "ContentsMatchHistory")
            .unwrap();
        assert!(!contents.holds);
        assert!(contents.violation.as_ref().unwrap().contains("[1, 2]"));
    }

    #[test]
    fn test_overfull_stack_detected() {
        let stack = TestStack {
            capacity: 1,
            len: 2,
            contents: vec![1, 2],
        };

        let checker = StackPropertyChecker::new(&stack);
        let failure = checker.verify_all().unwrap_err();
        assert_eq!(failure.name, "SizeWithinCapacity");
    }

    #[test]
    fn test_premature_full_rejection_detected() {
        let mut history = StackHistory::new();
        history.record_push(1, true, 1);
        history.record_push(2, false, 2);
        let stack = TestStack {
            capacity: 3,
            len: 1,
            contents: vec![1],
        };

        let checker = StackPropertyChecker::new(&stack).with_history(&history);
        let failure = checker.verify_all().unwrap_err();
        assert_eq!(failure.name, "LifoOrder");
        assert!(failure.violation.unwrap().contains("push rejected at size 1"));
    }

    #[test]
    fn test_clear_resets_model() {
        let mut history = StackHistory::new();
        history.record_push(1, true, 1);
        history.record_clear(2);
        history.record_pop(None, 3);
        let stack = TestStack::new(2);

        let checker = StackPropertyChecker::new(&stack).with_history(&history);
        assert!(checker.all_hold());
    }
}
