//! Error type shared by every container.

use thiserror::Error;

/// Errors raised by container operations.
///
/// Every error is reported before the container is mutated, so a failed
/// call leaves the container exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// Push onto a bounded container that is already full.
    #[error("capacity exceeded: container holds at most {capacity} elements")]
    CapacityExceeded { capacity: usize },

    /// Pop, top, or front access on an empty container.
    #[error("container is empty")]
    Empty,

    /// Positional access outside the valid range.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Removal by value of an element that is not present.
    #[error("element not found")]
    NotFound,

    /// Operation that is not defined for the container's current state.
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),
}

/// Result alias for container operations.
pub type ContainerResult<T> = Result<T, ContainerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ContainerError::CapacityExceeded { capacity: 10 };
        assert_eq!(
            err.to_string(),
            "capacity exceeded: container holds at most 10 elements"
        );

        let err = ContainerError::IndexOutOfRange { index: 4, len: 3 };
        assert_eq!(err.to_string(), "index 4 out of range for length 3");

        let err = ContainerError::InvalidOperation("remove from empty tree");
        assert_eq!(err.to_string(), "invalid operation: remove from empty tree");
    }
}
