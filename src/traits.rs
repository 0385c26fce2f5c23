//! Common traits for the indexed heap's collaborators
//!
//! [`PositionIndex`] is the contract the heap relies on to find a value's
//! current slot in O(1): a map from value to array position. The heap never
//! inspects the map's internals, so any conforming implementation can be
//! plugged in:
//!
//! - [`HashTable<K, usize, S>`](crate::hash_table::HashTable): the crate's
//!   chained table (default)
//! - [`std::collections::HashMap<K, usize, S>`], which includes
//!   [`rustc_hash::FxHashMap`]
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::IndexedHeap;
//! use rustc_hash::FxHashMap;
//!
//! let mut heap: IndexedHeap<&str, u32, FxHashMap<&str, usize>> = IndexedHeap::default();
//! heap.add("job", 3).unwrap();
//! assert!(heap.contains(&"job"));
//! ```

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use crate::hash_table::HashTable;

/// A value → position map kept in lockstep with the heap's array
///
/// Implementations must behave like a map with unique keys: `insert` on an
/// existing key replaces its position, `remove` forgets it, and `len`
/// counts distinct keys.
pub trait PositionIndex<K> {
    /// Creates an empty index sized for roughly `capacity` keys
    fn with_capacity(capacity: usize) -> Self;

    /// Returns the number of indexed keys
    fn len(&self) -> usize;

    /// Returns true if no keys are indexed
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the position recorded for `key`
    fn get(&self, key: &K) -> Option<usize>;

    /// Returns true if `key` is indexed
    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Records `position` for `key`, returning the position it replaced
    fn insert(&mut self, key: K, position: usize) -> Option<usize>;

    /// Overwrites the position of an already indexed `key` in place
    ///
    /// Returns the old position, or `None` (leaving the index untouched) if
    /// `key` is not indexed. Unlike [`insert`](Self::insert) this does not
    /// need an owned key.
    fn update(&mut self, key: &K, position: usize) -> Option<usize>;

    /// Forgets `key`, returning its position
    fn remove(&mut self, key: &K) -> Option<usize>;

    /// Forgets every key
    fn clear(&mut self);
}

impl<K, S> PositionIndex<K> for HashTable<K, usize, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn with_capacity(capacity: usize) -> Self {
        HashTable::with_capacity_and_hasher(capacity, S::default())
    }

    fn len(&self) -> usize {
        HashTable::len(self)
    }

    fn get(&self, key: &K) -> Option<usize> {
        HashTable::get(self, key).copied()
    }

    fn insert(&mut self, key: K, position: usize) -> Option<usize> {
        HashTable::insert(self, key, position)
    }

    fn update(&mut self, key: &K, position: usize) -> Option<usize> {
        HashTable::get_mut(self, key).map(|slot| std::mem::replace(slot, position))
    }

    fn remove(&mut self, key: &K) -> Option<usize> {
        HashTable::remove(self, key)
    }

    fn clear(&mut self) {
        HashTable::clear(self);
    }
}

impl<K, S> PositionIndex<K> for HashMap<K, usize, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn with_capacity(capacity: usize) -> Self {
        HashMap::with_capacity_and_hasher(capacity, S::default())
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn get(&self, key: &K) -> Option<usize> {
        HashMap::get(self, key).copied()
    }

    fn insert(&mut self, key: K, position: usize) -> Option<usize> {
        HashMap::insert(self, key, position)
    }

    fn update(&mut self, key: &K, position: usize) -> Option<usize> {
        HashMap::get_mut(self, key).map(|slot| std::mem::replace(slot, position))
    }

    fn remove(&mut self, key: &K) -> Option<usize> {
        HashMap::remove(self, key)
    }

    fn clear(&mut self) {
        HashMap::clear(self);
    }
}
