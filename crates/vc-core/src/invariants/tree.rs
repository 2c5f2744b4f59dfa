//! Binary search tree invariants.
//!
//! | Property | Description |
//! |----------|-------------|
//! | CountMatchesNodes | The maintained count equals the number of nodes |
//! | OrderingRespected | Every node's subtrees respect the tree's [`OrderingRule`] |
//! | InOrderNonDecreasing | In-order traversal yields a non-decreasing sequence |
//! | HeightBalanced | (opt-in) every balance factor is in {-1, 0, 1} |
//! | CachedHeightsExact | (opt-in) every cached height is 1 + max(child heights) |

use std::fmt::Debug;

use crate::property::{PropertyChecker, PropertyResult};

/// How equal values may be placed relative to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingRule {
    /// left < node <= right: duplicates always go right.
    RightBiased,
    /// left <= node <= right: rotations may move an equal value left.
    NonDecreasing,
}

/// Shape of one node, as measured from the actual structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeReport<T> {
    /// Value stored in the node
    pub value: T,
    /// Measured height of the left subtree (empty = 0)
    pub left_height: usize,
    /// Measured height of the right subtree (empty = 0)
    pub right_height: usize,
    /// Height the node caches for itself, if it caches one
    pub cached_height: Option<usize>,
    /// Largest value in the left subtree
    pub left_max: Option<T>,
    /// Smallest value in the right subtree
    pub right_min: Option<T>,
}

/// Structure a tree exposes for property checking.
pub trait TreeProperties {
    /// Element type stored in the tree.
    type Item: Clone + Debug + Ord;

    /// Maintained element count.
    fn count(&self) -> usize;

    /// One report per node, in in-order sequence.
    fn node_reports(&self) -> Vec<NodeReport<Self::Item>>;

    /// Placement rule for equal values.
    fn ordering_rule(&self) -> OrderingRule;
}

/// Property checker for tree implementations.
pub struct TreePropertyChecker<'a, T: TreeProperties> {
    tree: &'a T,
    container: &'static str,
    balanced: bool,
}

impl<'a, T: TreeProperties> TreePropertyChecker<'a, T> {
    /// Create a checker for an unbalanced binary search tree.
    #[must_use]
    pub fn new(tree: &'a T) -> Self {
        Self {
            tree,
            container: "binary_search_tree",
            balanced: false,
        }
    }

    /// Also require AVL balance and exact cached heights.
    #[must_use]
    pub fn with_balance(mut self) -> Self {
        self.container = "avl_tree";
        self.balanced = true;
        self
    }

    fn check_count_matches_nodes(&self, reports: &[NodeReport<T::Item>]) -> PropertyResult {
        let count = self.tree.count();
        if count != reports.len() {
            return PropertyResult::fail(
                "CountMatchesNodes",
                self.container,
                format!("count is {} but the tree has {} nodes", count, reports.len()),
                None,
            );
        }
        PropertyResult::pass("CountMatchesNodes", self.container)
    }

    fn check_ordering_respected(&self, reports: &[NodeReport<T::Item>]) -> PropertyResult {
        let rule = self.tree.ordering_rule();

        for report in reports {
            if let Some(ref left_max) = report.left_max {
                let ok = match rule {
                    OrderingRule::RightBiased => *left_max < report.value,
                    OrderingRule::NonDecreasing => *left_max <= report.value,
                };
                if !ok {
                    return PropertyResult::fail(
                        "OrderingRespected",
                        self.container,
                        format!(
                            "left subtree of {:?} holds {:?} ({:?})",
                            report.value, left_max, rule
                        ),
                        None,
                    );
                }
            }
            if let Some(ref right_min) = report.right_min {
                if *right_min < report.value {
                    return PropertyResult::fail(
                        "OrderingRespected",
                        self.container,
                        format!("right subtree of {:?} holds {:?}", report.value, right_min),
                        None,
                    );
                }
            }
        }

        PropertyResult::pass("OrderingRespected", self.container)
    }

    fn check_in_order_non_decreasing(&self, reports: &[NodeReport<T::Item>]) -> PropertyResult {
        if let Some(pos) = reports.windows(2).position(|w| w[0].value > w[1].value) {
            return PropertyResult::fail(
                "InOrderNonDecreasing",
                self.container,
                format!(
                    "{:?} precedes smaller {:?} in order",
                    reports[pos].value,
                    reports[pos + 1].value
                ),
                None,
            );
        }
        PropertyResult::pass("InOrderNonDecreasing", self.container)
    }

    fn check_height_balanced(&self, reports: &[NodeReport<T::Item>]) -> PropertyResult {
        for report in reports {
            if report.left_height.abs_diff(report.right_height) > 1 {
                return PropertyResult::fail(
                    "HeightBalanced",
                    self.container,
                    format!(
                        "node {:?} has child heights {} and {}",
                        report.value, report.left_height, report.right_height
                    ),
                    None,
                );
            }
        }
        PropertyResult::pass("HeightBalanced", self.container)
    }

    fn check_cached_heights_exact(&self, reports: &[NodeReport<T::Item>]) -> PropertyResult {
        for report in reports {
            let measured = 1 + report.left_height.max(report.right_height);
            if report.cached_height != Some(measured) {
                return PropertyResult::fail(
                    "CachedHeightsExact",
                    self.container,
                    format!(
                        "node {:?} caches {:?} but measures {}",
                        report.value, report.cached_height, measured
                    ),
                    None,
                );
            }
        }
        PropertyResult::pass("CachedHeightsExact", self.container)
    }
}

impl<T: TreeProperties> PropertyChecker for TreePropertyChecker<'_, T> {
    fn check_all(&self) -> Vec<PropertyResult> {
        let reports = self.tree.node_reports();

        let mut results = vec![
            self.check_count_matches_nodes(&reports),
            self.check_ordering_respected(&reports),
            self.check_in_order_non_decreasing(&reports),
        ];
        if self.balanced {
            results.push(self.check_height_balanced(&reports));
            results.push(self.check_cached_heights_exact(&reports));
        }
        results
    }
}
