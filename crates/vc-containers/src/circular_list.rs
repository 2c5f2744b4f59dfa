//! Circular doubly-linked list.
//!
//! Nodes live in a dense arena (`Vec<Node<T>>`) owned by the list; `prev`
//! and `next` are arena indices, never ownership. Every index in
//! `0..nodes.len()` is a live node, so the element count is the arena
//! length. Removing a node swap-removes it from the arena and patches the
//! links of the node that moved into its slot, keeping splices O(1).
//!
//! Ring invariant: for a non-empty list, `prev(head)` is the tail and
//! `next(tail)` is head; following `next` `len` times from any node
//! returns to that node. A single node links to itself both ways.

use std::fmt;
use std::hash::{Hash, Hasher};

use vc_core::{ContainerError, ContainerResult, ListProperties};

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: usize,
    next: usize,
}

/// Circular doubly-linked sequence.
///
/// # Example
///
/// ```rust
/// use vc_containers::CircularList;
///
/// let mut list = CircularList::new();
/// list.push_back(1);
/// list.push_back(2);
/// list.push_back(3);
/// assert_eq!(list.pop_front(), Ok(1));
/// assert_eq!(list.to_vec(), vec![2, 3]);
/// ```
#[derive(Clone)]
pub struct CircularList<T> {
    nodes: Vec<Node<T>>,
    head: Option<usize>,
}

impl<T> CircularList<T> {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
    }

    /// Arena index of the tail, if any.
    fn tail(&self) -> Option<usize> {
        self.head.map(|h| self.nodes[h].prev)
    }

    /// Arena index of the node at `index`, walking `next` from head.
    fn node_at(&self, index: usize) -> Option<usize> {
        if index >= self.len() {
            return None;
        }
        let mut current = self.head?;
        for _ in 0..index {
            current = self.nodes[current].next;
        }
        Some(current)
    }

    /// Arena indices in list order.
    fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.head, move |&i| Some(self.nodes[i].next)).take(self.len())
    }

    fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.indices().map(move |i| &self.nodes[i].value)
    }

    /// Splice a new node holding `value` right after `anchor`.
    fn link_after(&mut self, anchor: usize, value: T) {
        let next = self.nodes[anchor].next;
        let idx = self.nodes.len();
        self.nodes.push(Node {
            value,
            prev: anchor,
            next,
        });
        self.nodes[anchor].next = idx;
        self.nodes[next].prev = idx;
    }

    /// Splice `idx` out of the ring and release its slot.
    fn unlink(&mut self, idx: usize) -> T {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);

        if self.len() == 1 {
            self.head = None;
        } else {
            self.nodes[prev].next = next;
            self.nodes[next].prev = prev;
            if self.head == Some(idx) {
                self.head = Some(next);
            }
        }

        let last = self.nodes.len() - 1;
        let removed = self.nodes.swap_remove(idx);

        // The former last node now lives at `idx`; repoint its neighbours.
        if idx != last {
            let moved = &self.nodes[idx];
            let prev = if moved.prev == last { idx } else { moved.prev };
            let next = if moved.next == last { idx } else { moved.next };
            self.nodes[prev].next = idx;
            self.nodes[next].prev = idx;
            if self.head == Some(last) {
                self.head = Some(idx);
            }
        }

        debug_assert!(self.head.is_none() == self.nodes.is_empty());
        removed.value
    }

    /// Insert `value` at the front. O(1).
    pub fn push_front(&mut self, value: T) {
        match self.tail() {
            None => {
                self.nodes.push(Node {
                    value,
                    prev: 0,
                    next: 0,
                });
                self.head = Some(0);
            }
            Some(tail) => {
                self.link_after(tail, value);
                self.head = Some(self.nodes.len() - 1);
            }
        }
    }

    /// Insert `value` at the back. Equivalent to `insert(value, len)`.
    pub fn push_back(&mut self, value: T) {
        match self.tail() {
            None => self.push_front(value),
            Some(tail) => self.link_after(tail, value),
        }
    }

    /// Insert `value` so that it ends up at position `index`.
    ///
    /// Fails with `IndexOutOfRange` when `index > len`. Walks `index - 1`
    /// nodes from head; inserting at `len` splices after the tail directly.
    pub fn insert(&mut self, value: T, index: usize) -> ContainerResult<()> {
        let len = self.len();
        if index > len {
            return Err(ContainerError::IndexOutOfRange { index, len });
        }
        if index == 0 {
            self.push_front(value);
            return Ok(());
        }

        let anchor = if index == len {
            self.tail()
        } else {
            self.node_at(index - 1)
        };
        let Some(anchor) = anchor else {
            return Err(ContainerError::IndexOutOfRange { index, len });
        };
        self.link_after(anchor, value);

        debug_assert!(self.len() == len + 1);
        Ok(())
    }

    /// Remove and return the element at `index`.
    ///
    /// Fails with `Empty` on an empty list and `IndexOutOfRange` when
    /// `index >= len`.
    pub fn pop(&mut self, index: usize) -> ContainerResult<T> {
        let len = self.len();
        if len == 0 {
            return Err(ContainerError::Empty);
        }
        if index == 0 {
            return self.pop_front();
        }
        match self.node_at(index) {
            Some(idx) => Ok(self.unlink(idx)),
            None => Err(ContainerError::IndexOutOfRange { index, len }),
        }
    }

    /// Remove and return the first element. O(1).
    pub fn pop_front(&mut self) -> ContainerResult<T> {
        let head = self.head.ok_or(ContainerError::Empty)?;
        Ok(self.unlink(head))
    }

    /// Remove and return the last element. O(1).
    pub fn pop_back(&mut self) -> ContainerResult<T> {
        let tail = self.tail().ok_or(ContainerError::Empty)?;
        Ok(self.unlink(tail))
    }

    /// Element at `index`.
    pub fn at(&self, index: usize) -> ContainerResult<&T> {
        let len = self.len();
        self.node_at(index)
            .map(|idx| &self.nodes[idx].value)
            .ok_or(ContainerError::IndexOutOfRange { index, len })
    }

    /// Mutable element at `index`.
    pub fn at_mut(&mut self, index: usize) -> ContainerResult<&mut T> {
        let len = self.len();
        match self.node_at(index) {
            Some(idx) => Ok(&mut self.nodes[idx].value),
            None => Err(ContainerError::IndexOutOfRange { index, len }),
        }
    }

    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.head.map(|h| &self.nodes[h].value)
    }

    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.tail().map(|t| &self.nodes[t].value)
    }
}

impl<T: Clone> CircularList<T> {
    /// Elements in order, head first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.values().cloned().collect()
    }
}

impl<T: PartialEq> CircularList<T> {
    /// Position of the first element equal to `value`, or `len` when absent.
    #[must_use]
    pub fn find(&self, value: &T) -> usize {
        self.values()
            .position(|v| v == value)
            .unwrap_or_else(|| self.len())
    }

    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.find(value) != self.len()
    }

    /// Remove the first element equal to `value` and return it.
    ///
    /// Fails with `NotFound` when no element matches.
    pub fn remove(&mut self, value: &T) -> ContainerResult<T> {
        let index = self.find(value);
        if index == self.len() {
            return Err(ContainerError::NotFound);
        }
        self.pop(index)
    }
}

impl<T: PartialOrd> CircularList<T> {
    /// Insert before the first element not smaller than `value`.
    ///
    /// Keeps an ascending list ascending; equal values are placed before
    /// their existing equals.
    pub fn insert_sorted(&mut self, value: T) {
        let mut index = 0;
        for v in self.values() {
            if value > *v {
                index += 1;
            } else {
                break;
            }
        }

        // `index <= len` by construction.
        let inserted = self.insert(value, index);
        debug_assert!(inserted.is_ok());
    }
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for CircularList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

/// Lists are equal when they hold equal elements in the same order,
/// regardless of arena layout.
impl<T: PartialEq> PartialEq for CircularList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.values().eq(other.values())
    }
}

impl<T: Eq> Eq for CircularList<T> {}

impl<T: Hash> Hash for CircularList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.values() {
            value.hash(state);
        }
    }
}

impl<T: Clone + fmt::Debug + PartialOrd> ListProperties for CircularList<T> {
    type Item = T;

    fn count(&self) -> usize {
        self.nodes.len()
    }

    fn forward_cycle_len(&self, limit: usize) -> Option<usize> {
        let head = self.head?;
        let mut current = self.nodes[head].next;
        let mut steps = 1;
        while current != head && steps < limit {
            current = self.nodes[current].next;
            steps += 1;
        }
        Some(steps)
    }

    fn backward_cycle_len(&self, limit: usize) -> Option<usize> {
        let head = self.head?;
        let mut current = self.nodes[head].prev;
        let mut steps = 1;
        while current != head && steps < limit {
            current = self.nodes[current].prev;
            steps += 1;
        }
        Some(steps)
    }

    fn forward_items(&self) -> Vec<T> {
        self.to_vec()
    }

    fn backward_items(&self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.len());
        let Some(mut current) = self.tail() else {
            return items;
        };
        for _ in 0..self.len() {
            items.push(self.nodes[current].value.clone());
            current = self.nodes[current].prev;
        }
        items
    }
}
