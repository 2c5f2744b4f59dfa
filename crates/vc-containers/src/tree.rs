//! Walking helpers shared by the binary search trees.
//!
//! Traversals and destruction use an explicit stack, so a degenerate
//! (list-shaped) tree never deepens the call stack.

use std::cmp;

use vc_core::NodeReport;

/// A node that exclusively owns its two optional children.
pub(crate) trait BinaryNode: Sized {
    type Item;

    fn value(&self) -> &Self::Item;

    fn left(&self) -> Option<&Self>;

    fn right(&self) -> Option<&Self>;

    /// Detach both children, leaving the node a leaf.
    fn take_children(&mut self) -> (Option<Box<Self>>, Option<Box<Self>>);

    /// Height the node caches for its subtree, if it keeps one.
    fn cached_height(&self) -> Option<usize> {
        None
    }
}

/// Node, left subtree, right subtree.
pub(crate) fn pre_order<N>(root: Option<&N>) -> Vec<N::Item>
where
    N: BinaryNode,
    N::Item: Clone,
{
    let mut out = Vec::new();
    let mut pending: Vec<&N> = root.into_iter().collect();

    while let Some(node) = pending.pop() {
        out.push(node.value().clone());
        pending.extend(node.right());
        pending.extend(node.left());
    }
    out
}

/// Left subtree, node, right subtree.
pub(crate) fn in_order<N>(root: Option<&N>) -> Vec<N::Item>
where
    N: BinaryNode,
    N::Item: Clone,
{
    in_order_refs(root).into_iter().cloned().collect()
}

/// In-order sequence of borrowed values.
pub(crate) fn in_order_refs<N: BinaryNode>(root: Option<&N>) -> Vec<&N::Item> {
    let mut out = Vec::new();
    let mut pending: Vec<&N> = Vec::new();
    let mut current = root;

    loop {
        while let Some(node) = current {
            pending.push(node);
            current = node.left();
        }
        let Some(node) = pending.pop() else {
            break;
        };
        out.push(node.value());
        current = node.right();
    }
    out
}

/// Left subtree, right subtree, node.
pub(crate) fn post_order<N>(root: Option<&N>) -> Vec<N::Item>
where
    N: BinaryNode,
    N::Item: Clone,
{
    // Node-right-left pre-order, reversed.
    let mut out = Vec::new();
    let mut pending: Vec<&N> = root.into_iter().collect();

    while let Some(node) = pending.pop() {
        out.push(node.value().clone());
        pending.extend(node.left());
        pending.extend(node.right());
    }
    out.reverse();
    out
}

/// Number of levels in the tree (empty = 0, leaf = 1).
pub(crate) fn measured_height<N: BinaryNode>(root: Option<&N>) -> usize {
    let mut level: Vec<&N> = root.into_iter().collect();
    let mut height = 0;

    while !level.is_empty() {
        height += 1;
        level = level
            .into_iter()
            .flat_map(|node| node.left().into_iter().chain(node.right()))
            .collect();
    }
    height
}

/// Release every node without recursing through `Drop`.
pub(crate) fn dismantle<N: BinaryNode>(root: Option<Box<N>>) {
    let mut pending: Vec<Box<N>> = root.into_iter().collect();

    while let Some(mut node) = pending.pop() {
        let (left, right) = node.take_children();
        pending.extend(left);
        pending.extend(right);
        // `node` is a leaf now and drops without recursion.
    }
}

/// Height and value range of a subtree.
struct Extent<'a, T> {
    height: usize,
    min: &'a T,
    max: &'a T,
}

/// One report per node, in in-order sequence, measured from the structure.
pub(crate) fn node_reports<N>(root: Option<&N>) -> Vec<NodeReport<N::Item>>
where
    N: BinaryNode,
    N::Item: Clone + Ord,
{
    let mut slots = Vec::new();
    report_subtree(root, &mut slots);
    slots.into_iter().flatten().collect()
}

// Recursion depth is the tree height; only used by invariant checks.
fn report_subtree<'a, N>(
    node: Option<&'a N>,
    slots: &mut Vec<Option<NodeReport<N::Item>>>,
) -> Option<Extent<'a, N::Item>>
where
    N: BinaryNode,
    N::Item: Clone + Ord,
{
    let node = node?;

    let left = report_subtree(node.left(), slots);
    let slot = slots.len();
    slots.push(None);
    let right = report_subtree(node.right(), slots);

    let left_height = left.as_ref().map_or(0, |e| e.height);
    let right_height = right.as_ref().map_or(0, |e| e.height);

    slots[slot] = Some(NodeReport {
        value: node.value().clone(),
        left_height,
        right_height,
        cached_height: node.cached_height(),
        left_max: left.as_ref().map(|e| e.max.clone()),
        right_min: right.as_ref().map(|e| e.min.clone()),
    });

    let mut min = node.value();
    let mut max = node.value();
    for extent in left.iter().chain(right.iter()) {
        min = cmp::min(min, extent.min);
        max = cmp::max(max, extent.max);
    }

    Some(Extent {
        height: 1 + left_height.max(right_height),
        min,
        max,
    })
}
