//! Growable array storage for the heap's tree
//!
//! [`DynArray`] is a contiguous, index-addressable sequence with an explicit
//! split between its logical length and its physical capacity:
//!
//! - Slots `0..len` are always populated; slots `len..capacity` are unused.
//! - Capacity doubles whenever an operation would exceed it and never shrinks.
//! - `append` and `pop` are amortized O(1).
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::storage::DynArray;
//!
//! let mut array = DynArray::with_capacity(2);
//! array.append("a");
//! array.append("b");
//! array.append("c"); // doubles capacity to 4
//!
//! assert_eq!(array.len(), 3);
//! assert_eq!(array.capacity(), 4);
//! assert_eq!(array.get(1), Ok(&"b"));
//! assert_eq!(array.pop(), Ok("c"));
//! assert_eq!(array.capacity(), 4);
//! ```

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::ArrayError;

/// Capacity used by [`DynArray::new`]
pub const DEFAULT_CAPACITY: usize = 8;

/// A dynamic array with doubling growth
///
/// Storage is a boxed slice of optional slots. Only slots below `len` are
/// ever `Some`; moving an element out (via `pop`) empties its slot.
#[derive(Clone)]
pub struct DynArray<T> {
    slots: Box<[Option<T>]>,
    len: usize,
}

impl<T> DynArray<T> {
    /// Creates an empty array with [`DEFAULT_CAPACITY`]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty array with the given physical capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: empty_slots(capacity),
            len: 0,
        }
    }

    /// Returns the logical number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the array holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the physical capacity
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns a reference to element `index`
    ///
    /// # Errors
    /// Returns [`ArrayError::OutOfBounds`] unless `index < len`.
    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        let len = self.len;
        if index >= len {
            return Err(ArrayError::OutOfBounds { index, len });
        }
        self.slots[index]
            .as_ref()
            .ok_or(ArrayError::OutOfBounds { index, len })
    }

    /// Returns a mutable reference to element `index`
    ///
    /// # Errors
    /// Returns [`ArrayError::OutOfBounds`] unless `index < len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let len = self.len;
        if index >= len {
            return Err(ArrayError::OutOfBounds { index, len });
        }
        self.slots[index]
            .as_mut()
            .ok_or(ArrayError::OutOfBounds { index, len })
    }

    /// Overwrites element `index` with `value`, returning the old element
    ///
    /// # Errors
    /// Returns [`ArrayError::OutOfBounds`] unless `index < len`. The value is
    /// dropped in that case and the array is unchanged.
    pub fn put(&mut self, index: usize, value: T) -> Result<T, ArrayError> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Appends `value` at the end, growing capacity if needed
    pub fn append(&mut self, value: T) {
        self.grow_if_needed(self.len + 1);
        self.slots[self.len] = Some(value);
        self.len += 1;
    }

    /// Removes and returns the last element
    ///
    /// Capacity is left untouched.
    ///
    /// # Errors
    /// Returns [`ArrayError::Empty`] if the array holds no elements.
    pub fn pop(&mut self) -> Result<T, ArrayError> {
        if self.len == 0 {
            return Err(ArrayError::Empty);
        }
        let value = self.slots[self.len - 1].take().ok_or(ArrayError::Empty)?;
        self.len -= 1;
        Ok(value)
    }

    /// Sets the logical length to `new_len`
    ///
    /// Growing populates the new slots with values produced by `fill`, so
    /// every slot below `len` stays populated. Shrinking drops the tail.
    /// Capacity doubles until `new_len` fits and never shrinks.
    pub fn resize_with<F>(&mut self, new_len: usize, mut fill: F)
    where
        F: FnMut() -> T,
    {
        if new_len < self.len {
            for slot in &mut self.slots[new_len..self.len] {
                *slot = None;
            }
        } else {
            self.grow_if_needed(new_len);
            for slot in &mut self.slots[self.len..new_len] {
                *slot = Some(fill());
            }
        }
        self.len = new_len;
    }

    /// Exchanges elements `a` and `b`
    ///
    /// # Panics
    /// Panics if either index is not below `len`, like [`slice::swap`].
    pub fn swap(&mut self, a: usize, b: usize) {
        assert!(
            a < self.len && b < self.len,
            "swap indices ({a}, {b}) out of bounds for length {}",
            self.len
        );
        self.slots.swap(a, b);
    }

    /// Removes every element, keeping capacity
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    /// Iterates over the elements in index order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots[..self.len].iter().flatten()
    }

    /// Doubles capacity until `min_len` elements fit
    fn grow_if_needed(&mut self, min_len: usize) {
        let old_capacity = self.capacity();
        if min_len <= old_capacity {
            return;
        }

        let mut new_capacity = old_capacity.max(1);
        while new_capacity < min_len {
            new_capacity *= 2;
        }

        let mut bigger = empty_slots(new_capacity);
        for (dst, src) in bigger.iter_mut().zip(self.slots.iter_mut()) {
            *dst = src.take();
        }
        self.slots = bigger;

        tracing::trace!(
            from = old_capacity,
            to = new_capacity,
            "grew dynamic array"
        );
    }
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("items", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    /// # Panics
    /// Panics if `index` is not below `len`.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}
