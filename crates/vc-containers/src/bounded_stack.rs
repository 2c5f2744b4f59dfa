//! Fixed-capacity, array-backed LIFO stack.

use std::fmt::Debug;

use vc_core::{ContainerError, ContainerResult, StackProperties};

/// Stack that never grows past the capacity it was created with.
///
/// The backing store is allocated once at construction; `clear` drops the
/// elements but keeps the allocation.
///
/// # Example
///
/// ```rust
/// use vc_containers::BoundedStack;
///
/// let mut stack = BoundedStack::with_capacity(2);
/// stack.push('A').unwrap();
/// stack.push('B').unwrap();
/// assert!(stack.push('C').is_err());
/// assert_eq!(stack.pop(), Ok('B'));
/// assert_eq!(stack.pop(), Ok('A'));
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct BoundedStack<T> {
    contents: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Capacity used by [`new`](Self::new) and `Default`.
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Create an empty stack with [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY).
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create an empty stack holding at most `capacity` elements.
    ///
    /// A zero capacity is allowed; such a stack rejects every push.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            contents: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Push `value` on top.
    ///
    /// Fails with `CapacityExceeded` when the stack is full; the value is
    /// dropped and the stack is unchanged.
    pub fn push(&mut self, value: T) -> ContainerResult<()> {
        if self.is_full() {
            return Err(ContainerError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.contents.push(value);

        debug_assert!(self.contents.len() <= self.capacity);
        Ok(())
    }

    /// Remove and return the top element.
    pub fn pop(&mut self) -> ContainerResult<T> {
        self.contents.pop().ok_or(ContainerError::Empty)
    }

    /// Mutable reference to the top element.
    pub fn top(&mut self) -> ContainerResult<&mut T> {
        self.contents.last_mut().ok_or(ContainerError::Empty)
    }

    /// Shared reference to the top element.
    pub fn peek(&self) -> ContainerResult<&T> {
        self.contents.last().ok_or(ContainerError::Empty)
    }

    /// Remove every element without releasing the backing store.
    pub fn clear(&mut self) {
        self.contents.clear();
    }

    /// Number of elements on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.contents.len() == self.capacity
    }

    /// Elements from bottom to top.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.contents
    }
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for BoundedStack<T> {
    fn clone(&self) -> Self {
        let mut contents = Vec::with_capacity(self.capacity);
        contents.extend_from_slice(&self.contents);
        Self {
            contents,
            capacity: self.capacity,
        }
    }
}

impl<T: Clone + Debug + PartialEq> StackProperties for BoundedStack<T> {
    type Item = T;

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.contents.len()
    }

    fn contents(&self) -> Vec<T> {
        self.contents.clone()
    }
}
