//! Height-balanced (AVL) binary search tree.
//!
//! Every node caches the height of its subtree (leaf = 1, empty = 0).
//! Mutations descend recursively and, on the way back up, each ancestor
//! recomputes its height and rebalances; the (possibly rotated) subtree
//! root is returned to the caller, which stores it in its own child slot.
//!
//! Inserts route equal values right, as in the unbalanced tree. Rotations
//! preserve in-order sequence but may leave an equal value in a left
//! subtree, so the ordering rule is left <= node <= right.

use std::cmp::Ordering;
use std::fmt::Debug;

use vc_core::{NodeReport, OrderingRule, TreeProperties};

use crate::tree::{self, BinaryNode};

type Link<T> = Option<Box<AvlNode<T>>>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct AvlNode<T> {
    value: T,
    height: usize,
    left: Link<T>,
    right: Link<T>,
}

fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

impl<T> AvlNode<T> {
    fn leaf(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            height: 1,
            left: None,
            right: None,
        })
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// height(left) - height(right)
    fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

impl<T> BinaryNode for AvlNode<T> {
    type Item = T;

    fn value(&self) -> &T {
        &self.value
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn take_children(&mut self) -> (Link<T>, Link<T>) {
        (self.left.take(), self.right.take())
    }

    fn cached_height(&self) -> Option<usize> {
        Some(self.height)
    }
}

/// Promote the left child. Recomputes the two touched heights.
fn rotate_right<T>(mut node: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

/// Promote the right child. Recomputes the two touched heights.
fn rotate_left<T>(mut node: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

/// Refresh `node`'s height and restore |balance| <= 1 with at most one
/// simple or double rotation. Returns the new subtree root.
fn rebalance<T>(mut node: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
    node.update_height();
    let balance = node.balance_factor();

    if balance > 1 {
        if let Some(left) = node.left.take() {
            node.left = Some(if left.balance_factor() < 0 {
                rotate_left(left)
            } else {
                left
            });
        }
        return rotate_right(node);
    }

    if balance < -1 {
        if let Some(right) = node.right.take() {
            node.right = Some(if right.balance_factor() > 0 {
                rotate_right(right)
            } else {
                right
            });
        }
        return rotate_left(node);
    }

    node
}

fn insert_into<T: Ord>(link: Link<T>, value: T) -> Box<AvlNode<T>> {
    let Some(mut node) = link else {
        return AvlNode::leaf(value);
    };

    if value < node.value {
        node.left = Some(insert_into(node.left.take(), value));
    } else {
        node.right = Some(insert_into(node.right.take(), value));
    }
    rebalance(node)
}

fn remove_from<T: Ord>(link: Link<T>, value: &T) -> (Link<T>, bool) {
    let Some(mut node) = link else {
        return (None, false);
    };

    match value.cmp(&node.value) {
        Ordering::Less => {
            let (left, removed) = remove_from(node.left.take(), value);
            node.left = left;
            if removed {
                (Some(rebalance(node)), true)
            } else {
                (Some(node), false)
            }
        }
        Ordering::Greater => {
            let (right, removed) = remove_from(node.right.take(), value);
            node.right = right;
            if removed {
                (Some(rebalance(node)), true)
            } else {
                (Some(node), false)
            }
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => (None, true),
            (Some(child), None) | (None, Some(child)) => (Some(child), true),
            (Some(left), Some(right)) => {
                let (right, successor) = take_min(right);
                node.value = successor;
                node.left = Some(left);
                node.right = right;
                (Some(rebalance(node)), true)
            }
        },
    }
}

/// Detach the leftmost node, rebalancing every ancestor on the way up.
fn take_min<T>(mut node: Box<AvlNode<T>>) -> (Link<T>, T) {
    match node.left.take() {
        None => {
            let AvlNode { value, right, .. } = *node;
            (right, value)
        }
        Some(left) => {
            let (left, min) = take_min(left);
            node.left = left;
            (Some(rebalance(node)), min)
        }
    }
}

/// Self-balancing binary search tree.
///
/// `PartialEq`, `Eq` and `Hash` compare tree shape, not just contents: two
/// trees holding the same values but rotated differently are unequal. Model
/// checking relies on this to keep distinct shapes as distinct states.
/// Compare `in_order()` for content equality.
///
/// # Example
///
/// ```rust
/// use vc_containers::AvlTree;
///
/// let mut tree = AvlTree::new();
/// tree.insert(1);
/// tree.insert(2);
/// tree.insert(3);
/// assert_eq!(tree.height(), 1);
/// assert_eq!(tree.pre_order(), vec![2, 1, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AvlTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> AvlTree<T> {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height in edges from the cached root height: -1 empty, 0 single node.
    #[must_use]
    pub fn height(&self) -> isize {
        height(&self.root) as isize - 1
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        tree::dismantle(self.root.take());
        self.len = 0;
    }
}

impl<T: Ord> AvlTree<T> {
    /// Insert `value`, rebalancing every ancestor of the new leaf.
    pub fn insert(&mut self, value: T) {
        self.root = Some(insert_into(self.root.take(), value));
        self.len += 1;

        debug_assert!(self.root.as_ref().map_or(true, |r| r.balance_factor().abs() <= 1));
    }

    /// Remove one occurrence of `value`, returning whether one was found.
    ///
    /// Removing from an empty tree or removing an absent value is a no-op.
    pub fn remove(&mut self, value: &T) -> bool {
        let (root, removed) = remove_from(self.root.take(), value);
        self.root = root;
        if removed {
            self.len -= 1;
        }
        removed
    }

    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Equal => return true,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Smallest element.
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// Largest element.
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }
}

impl<T: Clone> AvlTree<T> {
    #[must_use]
    pub fn pre_order(&self) -> Vec<T> {
        tree::pre_order(self.root.as_deref())
    }

    /// Elements in ascending order.
    #[must_use]
    pub fn in_order(&self) -> Vec<T> {
        tree::in_order(self.root.as_deref())
    }

    #[must_use]
    pub fn post_order(&self) -> Vec<T> {
        tree::post_order(self.root.as_deref())
    }
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for AvlTree<T> {
    fn drop(&mut self) {
        tree::dismantle(self.root.take());
    }
}

impl<T: Clone + Debug + Ord> TreeProperties for AvlTree<T> {
    type Item = T;

    fn count(&self) -> usize {
        self.len
    }

    fn node_reports(&self) -> Vec<NodeReport<T>> {
        tree::node_reports(self.root.as_deref())
    }

    fn ordering_rule(&self) -> OrderingRule {
        OrderingRule::NonDecreasing
    }
}
