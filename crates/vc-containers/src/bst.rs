//! Unbalanced binary search tree.
//!
//! Values smaller than a node go left; everything else, including values
//! equal to the node, goes right. Lookups follow the same rule, so
//! duplicates are kept in insertion order along the right spine of their
//! first occurrence.

use std::cmp::Ordering;
use std::fmt::{self, Debug};

use vc_core::{ContainerError, ContainerResult, NodeReport, OrderingRule, TreeProperties};

use crate::tree::{self, BinaryNode};

type Link<T> = Option<Box<BstNode<T>>>;

struct BstNode<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> BstNode<T> {
    fn leaf(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

impl<T> BinaryNode for BstNode<T> {
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
}

/// Binary search tree without rebalancing.
///
/// # Example
///
/// ```rust
/// use vc_containers::BinarySearchTree;
///
/// let mut tree = BinarySearchTree::new();
/// tree.insert(5);
/// tree.insert(3);
/// tree.insert(8);
/// assert_eq!(tree.remove(&5), Ok(true));
/// assert_eq!(tree.in_order(), vec![3, 8]);
/// ```
pub struct BinarySearchTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> BinarySearchTree<T> {
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

    /// Longest root-to-leaf path in edges; -1 for an empty tree.
    ///
    /// The tree keeps no heights, so this walks every node.
    #[must_use]
    pub fn height(&self) -> isize {
        tree::measured_height(self.root.as_deref()) as isize - 1
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        tree::dismantle(self.root.take());
        self.len = 0;
    }

    /// Replace the node in `link` by its only child, or by its in-order
    /// successor when it has two.
    fn unlink(link: &mut Link<T>) {
        let Some(mut node) = link.take() else {
            return;
        };

        *link = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                if let Some(successor) = Self::take_min(&mut right) {
                    node.value = successor;
                }
                node.left = Some(left);
                node.right = right;
                Some(node)
            }
        };
    }

    /// Detach the leftmost node under `link`, splicing its right child
    /// into its place.
    fn take_min(mut link: &mut Link<T>) -> Option<T> {
        while link.as_ref()?.left.is_some() {
            let Some(node) = link else {
                return None;
            };
            link = &mut node.left;
        }

        let node = link.take()?;
        let BstNode { value, right, .. } = *node;
        *link = right;
        Some(value)
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Insert `value`. Equal values are placed to the right.
    pub fn insert(&mut self, value: T) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(BstNode::leaf(value));
        self.len += 1;
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

    /// Remove one occurrence of `value`.
    ///
    /// Returns whether a node was removed; removing an absent value leaves
    /// the tree untouched. Fails with `InvalidOperation` on an empty tree.
    pub fn remove(&mut self, value: &T) -> ContainerResult<bool> {
        if self.root.is_none() {
            return Err(ContainerError::InvalidOperation("remove from empty tree"));
        }

        let mut link = &mut self.root;
        loop {
            let ordering = match link.as_deref() {
                None => return Ok(false),
                Some(node) => value.cmp(&node.value),
            };
            if ordering == Ordering::Equal {
                break;
            }
            let Some(node) = link else {
                return Ok(false);
            };
            link = if ordering == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        Self::unlink(link);
        self.len -= 1;
        Ok(true)
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

impl<T: Clone> BinarySearchTree<T> {
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

impl<T: Clone> Clone for BinarySearchTree<T> {
    /// Copies node by node with an explicit stack, keeping the shape.
    fn clone(&self) -> Self {
        let mut root: Link<T> = None;
        {
            let mut pending: Vec<(&BstNode<T>, &mut Link<T>)> = Vec::new();
            if let Some(node) = self.root.as_deref() {
                pending.push((node, &mut root));
            }

            while let Some((source, slot)) = pending.pop() {
                let copy = slot.insert(BstNode::leaf(source.value.clone()));
                let BstNode { left, right, .. } = &mut **copy;
                if let Some(child) = source.left.as_deref() {
                    pending.push((child, left));
                }
                if let Some(child) = source.right.as_deref() {
                    pending.push((child, right));
                }
            }
        }

        Self {
            root,
            len: self.len,
        }
    }
}

impl<T: Debug> Debug for BinarySearchTree<T> {
    /// Elements in ascending order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(tree::in_order_refs(self.root.as_deref()))
            .finish()
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        tree::dismantle(self.root.take());
    }
}

impl<T: Clone + Debug + Ord> TreeProperties for BinarySearchTree<T> {
    type Item = T;

    fn count(&self) -> usize {
        self.len
    }

    fn node_reports(&self) -> Vec<NodeReport<T>> {
        tree::node_reports(self.root.as_deref())
    }

    fn ordering_rule(&self) -> OrderingRule {
        OrderingRule::RightBiased
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vc_core::{PropertyChecker, TreePropertyChecker};

    fn assert_valid(tree: &BinarySearchTree<i32>) {
        let checker = TreePropertyChecker::new(tree);
        assert!(checker.all_hold(), "{}", checker.summary().format_report());
    }

    fn tree_of(values: &[i32]) -> BinarySearchTree<i32> {
        let mut tree = BinarySearchTree::new();
        for &v in values {
            tree.insert(v);
        }
        tree
    }

    #[test]
    fn test_insert_and_traversals() {
        let tree = tree_of(&[5, 3, 8, 1, 4, 9]);

        assert_eq!(tree.pre_order(), vec![5, 3, 1, 4, 8, 9]);
        assert_eq!(tree.in_order(), vec![1, 3, 4, 5, 8, 9]);
        assert_eq!(tree.post_order(), vec![1, 4, 3, 9, 8, 5]);
        assert_eq!(tree.len(), 6);
        assert_valid(&tree);
    }

    #[test]
    fn test_remove_root_with_two_children() {
        let mut tree = tree_of(&[5, 3, 8]);
        assert_eq!(tree.remove(&5), Ok(true));
        assert_eq!(tree.in_order(), vec![3, 8]);
        assert_eq!(tree.pre_order(), vec![8, 3]);
        assert_eq!(tree.len(), 2);
        assert_valid(&tree);
    }

    #[test]
    fn test_remove_promotes_deep_successor() {
        let mut tree = tree_of(&[50, 30, 70, 60, 80, 65]);
        assert_eq!(tree.remove(&50), Ok(true));

        // 60 is the leftmost of 70's subtree; its right child 65 takes its place.
        assert_eq!(tree.pre_order(), vec![60, 30, 70, 65, 80]);
        assert!(!tree.contains(&50));
        assert_valid(&tree);
    }

    #[test]
    fn test_remove_leaf_and_single_child() {
        let mut tree = tree_of(&[5, 3, 8, 9]);
        assert_eq!(tree.remove(&3), Ok(true));
        assert_eq!(tree.remove(&8), Ok(true));
        assert_eq!(tree.pre_order(), vec![5, 9]);
        assert_valid(&tree);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut tree = tree_of(&[5, 3, 8]);
        let before = tree.pre_order();

        assert_eq!(tree.remove(&42), Ok(false));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.pre_order(), before);
    }

    #[test]
    fn test_remove_from_empty_fails() {
        let mut tree: BinarySearchTree<i32> = BinarySearchTree::new();
        assert_eq!(
            tree.remove(&1),
            Err(ContainerError::InvalidOperation("remove from empty tree"))
        );
    }

    #[test]
    fn test_contains_after_insert_and_remove() {
        let mut tree = tree_of(&[10, 5, 15]);
        tree.insert(7);
        assert!(tree.contains(&7));
        tree.remove(&7).unwrap();
        assert!(!tree.contains(&7));
    }

    #[test]
    fn test_duplicates_go_right() {
        let mut tree = tree_of(&[5, 5, 3, 5]);
        assert_eq!(tree.pre_order(), vec![5, 3, 5, 5]);
        assert_eq!(tree.in_order(), vec![3, 5, 5, 5]);
        assert_valid(&tree);

        assert_eq!(tree.remove(&5), Ok(true));
        assert_eq!(tree.in_order(), vec![3, 5, 5]);
        assert_eq!(tree.len(), 3);
        assert_valid(&tree);
    }

    #[test]
    fn test_min_max_height() {
        let tree = tree_of(&[4, 2, 6, 1]);
        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.max(), Some(&6));
        assert_eq!(tree.height(), 2);

        let empty: BinarySearchTree<i32> = BinarySearchTree::new();
        assert_eq!(empty.min(), None);
        assert_eq!(empty.height(), -1);
    }

    /// Sorted inserts build a right spine `len` nodes deep.
    fn chain(len: i32) -> BinarySearchTree<i32> {
        let mut tree = BinarySearchTree::new();
        for i in 0..len {
            tree.insert(i);
        }
        tree
    }

    #[test]
    fn test_degenerate_tree_drops_without_overflow() {
        let tree = chain(20_000);
        assert_eq!(tree.len(), 20_000);
        assert_eq!(tree.in_order().len(), 20_000);
        drop(tree);
    }

    #[test]
    fn test_clone_degenerate_tree() {
        let tree = chain(20_000);
        let copy = tree.clone();

        assert_eq!(copy.len(), tree.len());
        assert_eq!(copy.max(), Some(&19_999));
        assert_eq!(copy.height(), 19_999);
    }

    #[test]
    fn test_remove_deepest_of_degenerate_tree() {
        let mut tree = chain(20_000);

        assert_eq!(tree.remove(&19_999), Ok(true));
        assert_eq!(tree.len(), 19_999);
        assert_eq!(tree.max(), Some(&19_998));
        assert_eq!(tree.remove(&19_999), Ok(false));
    }

    #[test]
    fn test_remove_successor_deep_in_left_spine() {
        // Root 0 whose in-order successor sits 20_000 levels down the left
        // spine of the right subtree.
        let mut tree = BinarySearchTree::new();
        tree.insert(0);
        tree.insert(-1);
        tree.insert(30_000);
        for i in (1..=20_000).rev() {
            tree.insert(i);
        }

        assert_eq!(tree.remove(&0), Ok(true));
        assert_eq!(tree.pre_order()[..2], [1, -1]);
        assert!(!tree.contains(&0));
        assert_eq!(tree.len(), 20_002);
        assert_valid(&tree);
    }

    #[test]
    fn test_clone_keeps_shape_and_is_independent() {
        let tree = tree_of(&[50, 30, 70, 60, 80, 65, 30]);
        let mut copy = tree.clone();

        assert_eq!(copy.pre_order(), tree.pre_order());
        assert_eq!(copy.remove(&50), Ok(true));
        assert!(tree.contains(&50));
        assert_eq!(tree.len(), 7);
        assert_valid(&copy);
    }

    #[test]
    fn test_debug_lists_in_order() {
        let tree = tree_of(&[5, 3, 8]);
        assert_eq!(format!("{:?}", tree), "[3, 5, 8]");
    }

    #[test]
    fn test_clear() {
        let mut tree = tree_of(&[3, 1, 2]);
        tree.clear();
        assert!(tree.is_empty());
        assert!(tree.in_order().is_empty());
        tree.insert(1);
        assert_eq!(tree.len(), 1);
    }
}
