//! Circular doubly-linked list invariants.
//!
//! | Property | Description |
//! |----------|-------------|
//! | RingClosesForward | Following `next` from head `count` times returns to head |
//! | RingClosesBackward | Following `prev` from head `count` times returns to head |
//! | PrevNextSymmetry | The backward walk is the exact reverse of the forward walk |
//! | AscendingOrder | (opt-in) forward walk is non-decreasing |

use std::fmt::Debug;

use crate::property::{PropertyChecker, PropertyResult};

const CONTAINER: &str = "circular_list";

/// Structure a circular list exposes for property checking.
pub trait ListProperties {
    /// Element type stored in the list.
    type Item: Clone + Debug + PartialOrd;

    /// Maintained element count.
    fn count(&self) -> usize;

    /// Steps taken following `next` from head until head is reached again.
    ///
    /// `None` when the list has no head. The walk gives up after `limit`
    /// steps and reports `limit`.
    fn forward_cycle_len(&self, limit: usize) -> Option<usize>;

    /// Same as [`forward_cycle_len`](Self::forward_cycle_len) following `prev`.
    fn backward_cycle_len(&self, limit: usize) -> Option<usize>;

    /// `count` items read by following `next`, starting at head.
    fn forward_items(&self) -> Vec<Self::Item>;

    /// `count` items read by following `prev`, starting at the tail.
    fn backward_items(&self) -> Vec<Self::Item>;
}

/// Property checker for circular list implementations.
pub struct ListPropertyChecker<'a, L: ListProperties> {
    list: &'a L,
    sorted: bool,
}

impl<'a, L: ListProperties> ListPropertyChecker<'a, L> {
    /// Create a new checker for the given list.
    #[must_use]
    pub fn new(list: &'a L) -> Self {
        Self {
            list,
            sorted: false,
        }
    }

    /// Also require ascending order (for lists built with sorted inserts).
    #[must_use]
    pub fn with_sorted_order(mut self) -> Self {
        self.sorted = true;
        self
    }

    fn check_cycle(&self, name: &'static str, cycle_len: Option<usize>) -> PropertyResult {
        let count = self.list.count();

        match (count, cycle_len) {
            (0, None) => PropertyResult::pass(name, CONTAINER),
            (0, Some(steps)) => PropertyResult::fail(
                name,
                CONTAINER,
                format!("count is 0 but a head is reachable ({} step cycle)", steps),
                None,
            ),
            (_, None) => PropertyResult::fail(
                name,
                CONTAINER,
                format!("count is {} but there is no head", count),
                None,
            ),
            (_, Some(steps)) if steps == count => PropertyResult::pass(name, CONTAINER),
            (_, Some(steps)) => PropertyResult::fail(
                name,
                CONTAINER,
                format!("count is {} but the ring has {} steps", count, steps),
                None,
            ),
        }
    }

    fn check_ring_closes_forward(&self) -> PropertyResult {
        let limit = self.list.count() + 1;
        self.check_cycle("RingClosesForward", self.list.forward_cycle_len(limit))
    }

    fn check_ring_closes_backward(&self) -> PropertyResult {
        let limit = self.list.count() + 1;
        self.check_cycle("RingClosesBackward", self.list.backward_cycle_len(limit))
    }

    fn check_prev_next_symmetry(&self) -> PropertyResult {
        let forward = self.list.forward_items();
        let mut backward = self.list.backward_items();
        backward.reverse();

        if forward != backward {
            return PropertyResult::fail(
                "PrevNextSymmetry",
                CONTAINER,
                format!("forward {:?} but reversed backward {:?}", forward, backward),
                None,
            );
        }

        PropertyResult::pass("PrevNextSymmetry", CONTAINER)
    }

    fn check_ascending_order(&self) -> PropertyResult {
        let items = self.list.forward_items();

        if let Some(pos) = items.windows(2).position(|w| w[0] > w[1]) {
            return PropertyResult::fail(
                "AscendingOrder",
                CONTAINER,
                format!(
                    "{:?} at index {} precedes smaller {:?}",
                    items[pos],
                    pos,
                    items[pos + 1]
                ),
                None,
            );
        }

        PropertyResult::pass("AscendingOrder", CONTAINER)
    }
}

impl<L: ListProperties> PropertyChecker for ListPropertyChecker<'_, L> {
    fn check_all(&self) -> Vec<PropertyResult> {
        let mut results = vec![
            self.check_ring_closes_forward(),
            self.check_ring_closes_backward(),
            self.check_prev_next_symmetry(),
        ];
        if self.sorted {
            results.push(self.check_ascending_order());
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ring described directly by its link tables.
    struct TestRing {
        values: Vec<i32>,
        next: Vec<usize>,
        prev: Vec<usize>,
        count: usize,
    }

    impl TestRing {
        fn well_formed(values: Vec<i32>) -> Self {
            let n = values.len();
            Self {
                next: (0..n).map(|i| (i + 1) % n).collect(),
                prev: (0..n).map(|i| (i + n - 1) % n).collect(),
                count: n,
                values,
            }
        }

        fn walk(&self, links: &[usize], limit: usize) -> Option<usize> {
            if self.values.is_empty() {
                return None;
            }
            let mut current = links[0];
            let mut steps = 1;
            while current != 0 && steps < limit {
                current = links[current];
                steps += 1;
            }
            Some(steps)
        }
    }

    impl ListProperties for TestRing {
        type Item = i32;

        fn count(&self) -> usize {
            self.count
        }

        fn forward_cycle_len(&self, limit: usize) -> Option<usize> {
            self.walk(&self.next, limit)
        }

        fn backward_cycle_len(&self, limit: usize) -> Option<usize> {
            self.walk(&self.prev, limit)
        }

        fn forward_items(&self) -> Vec<i32> {
            let mut out = Vec::new();
            let mut current = 0;
            for _ in 0..self.count {
                out.push(self.values[current]);
                current = self.next[current];
            }
            out
        }

        fn backward_items(&self) -> Vec<i32> {
            let mut out = Vec::new();
            if self.count == 0 {
                return out;
            }
            let mut current = self.prev[0];
            for _ in 0..self.count {
                out.push(self.values[current]);
                current = self.prev[current];
            }
            out
        }
    }

    #[test]
    fn test_well_formed_ring_passes() {
        let ring = TestRing::well_formed(vec![1, 2, 3]);
        let checker = ListPropertyChecker::new(&ring).with_sorted_order();
        assert!(checker.all_hold(), "{}", checker.summary().format_report());
    }

    #[test]
    fn test_empty_ring_passes() {
        let ring = TestRing::well_formed(vec![]);
        assert!(ListPropertyChecker::new(&ring).all_hold());
    }

    #[test]
    fn test_single_node_ring_passes() {
        let ring = TestRing::well_formed(vec![7]);
        assert!(ListPropertyChecker::new(&ring).all_hold());
    }

    #[test]
    fn test_stale_count_detected() {
        let mut ring = TestRing::well_formed(vec![1, 2, 3]);
        ring.count = 2;
        let failure = ListPropertyChecker::new(&ring).verify_all().unwrap_err();
        assert_eq!(failure.name, "RingClosesForward");
    }

    #[test]
    fn test_broken_prev_link_detected() {
        let mut ring = TestRing::well_formed(vec![1, 2, 3]);
        // 2's prev skips back to 3, so prev never reaches head.
        ring.prev[1] = 2;
        let results = ListPropertyChecker::new(&ring).check_all();
        assert!(results[0].holds);
        assert!(!results[1].holds);
    }

    #[test]
    fn test_unsorted_detected_only_when_requested() {
        let ring = TestRing::well_formed(vec![3, 1, 2]);
        assert!(ListPropertyChecker::new(&ring).all_hold());

        let failure = ListPropertyChecker::new(&ring)
            .with_sorted_order()
            .verify_all()
            .unwrap_err();
        assert_eq!(failure.name, "AscendingOrder");
    }
}
