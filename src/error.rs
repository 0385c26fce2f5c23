//! Error types for the indexed heap and its backing collections
//!
//! - [`ArrayError`]: bounds and emptiness failures of [`DynArray`](crate::storage::DynArray)
//! - [`HeapError`]: precondition failures of [`IndexedHeap`](crate::indexed_heap::IndexedHeap)
//! - [`ConfigError`]: invalid construction parameters
//! - [`InvariantError`]: reported by `check_invariants` when the heap is inconsistent
//!
//! Every fallible operation checks its preconditions before touching any
//! state, so an `Err` always leaves the structure exactly as it was.

use thiserror::Error;

/// Error type for dynamic array access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// The index is not in `0..len`
    #[error("index {index} is out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },
    /// The array holds no elements
    #[error("array is empty")]
    Empty,
}

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// `peek` or `poll` on a heap with no elements
    #[error("heap is empty")]
    Empty,
    /// `add` of a value that is already in the heap
    #[error("value is already in the heap")]
    DuplicateValue,
    /// `change_priority` of a value that is not in the heap
    #[error("value is not in the heap")]
    ValueNotPresent,
}

/// Error returned when construction parameters are invalid.
///
/// Carries a human-readable description of the rejected parameter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Error returned by `check_invariants` naming the first violated invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}
