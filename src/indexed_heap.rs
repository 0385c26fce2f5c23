//! Indexed Binary Heap implementation
//!
//! A binary min-heap of distinct values, each tagged with a priority, that
//! also tracks where every value currently sits in the tree. The position
//! index turns membership tests and priority changes into O(1) lookups
//! followed by an O(log n) repair, instead of a linear scan.
//!
//! The tree is stored level by level in a [`DynArray`]: slot 0 is the root,
//! slot `i` has children `2i + 1` and `2i + 2` and parent `(i - 1) / 2`.
//! A [`PositionIndex`] maps each value to its slot. Every relocation of an
//! entry goes through a single `swap` primitive that moves both entries and
//! rewrites both index positions, so the array and the index never drift.
//!
//! Invariants, holding after every public operation:
//!
//! 1. slots `0..len` are all occupied
//! 2. every non-root entry's priority is `>=` its parent's
//! 3. no value occurs twice
//! 4. the index holds exactly `len` keys
//! 5. `index.get(value_at(i)) == Some(i)` for every occupied slot `i`
//!
//! # Time Complexity
//!
//! | Operation         | Average  | Worst |
//! |-------------------|----------|-------|
//! | `add`             | O(log n) | O(n)  |
//! | `peek`            | O(1)     | O(1)  |
//! | `poll`            | O(log n) | O(n)  |
//! | `contains`        | O(1)     | O(n)  |
//! | `change_priority` | O(log n) | O(n)  |
//!
//! Worst cases come from the position index: a rehash during `add`, or a
//! degenerate hash distribution.
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::{HeapError, IndexedHeap};
//!
//! let mut heap = IndexedHeap::new();
//! heap.add("write report", 3).unwrap();
//! heap.add("fix build", 1).unwrap();
//! heap.add("review", 2).unwrap();
//!
//! assert_eq!(heap.peek(), Ok(&"fix build"));
//! assert_eq!(heap.add("review", 9), Err(HeapError::DuplicateValue));
//!
//! heap.change_priority(&"write report", 0).unwrap();
//! assert_eq!(heap.poll(), Ok("write report"));
//! assert_eq!(heap.poll(), Ok("fix build"));
//! assert_eq!(heap.poll(), Ok("review"));
//! assert_eq!(heap.poll(), Err(HeapError::Empty));
//! ```

use std::hash::Hash;

use crate::config::{HeapConfig, DEFAULT_ARRAY_CAPACITY};
use crate::error::{ConfigError, HeapError, InvariantError};
use crate::hash_table::{HashTable, DEFAULT_BUCKETS};
use crate::storage::DynArray;
use crate::traits::PositionIndex;

/// A value and its priority, owned by one array slot
#[derive(Debug, Clone)]
struct Entry<V, P> {
    value: V,
    priority: P,
}

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[inline]
fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// An indexed binary min-heap
///
/// Values must be unique; priorities may repeat. The value with the smallest
/// priority is at the root.
///
/// `I` is the value → position index. It defaults to the crate's chained
/// [`HashTable`]; any [`PositionIndex`] works, e.g.
/// [`rustc_hash::FxHashMap<V, usize>`].
///
/// Values are cloned once on insertion, since both the array slot and the
/// index own a copy.
#[derive(Debug, Clone)]
pub struct IndexedHeap<V, P, I = HashTable<V, usize>> {
    entries: DynArray<Entry<V, P>>,
    index: I,
}

impl<V, P> IndexedHeap<V, P>
where
    V: Hash + Eq + Clone,
    P: Ord,
{
    /// Creates an empty heap with the default configuration
    ///
    /// The array starts with room for 10 entries and the index with 17
    /// buckets.
    pub fn new() -> Self {
        Self::with_capacities(DEFAULT_ARRAY_CAPACITY, DEFAULT_BUCKETS)
    }

    /// Creates an empty heap from an explicit configuration
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the configuration fails
    /// [`HeapConfig::validate`].
    pub fn try_with_config(config: HeapConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let index = HashTable::try_with_load_factor(config.index_capacity, config.max_load_factor)?;
        Ok(Self {
            entries: DynArray::with_capacity(config.array_capacity),
            index,
        })
    }
}

impl<V, P, I> IndexedHeap<V, P, I>
where
    V: Clone,
    P: Ord,
    I: PositionIndex<V>,
{
    /// Creates an empty heap with the given array capacity and index size
    pub fn with_capacities(array_capacity: usize, index_capacity: usize) -> Self {
        Self {
            entries: DynArray::with_capacity(array_capacity),
            index: I::with_capacity(index_capacity),
        }
    }

    /// Returns the number of values in the heap
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the heap is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds `value` with `priority`
    ///
    /// The new entry is appended as the last leaf and bubbled up past every
    /// ancestor with a strictly larger priority. An ancestor with an equal
    /// priority is never displaced.
    ///
    /// # Errors
    /// Returns [`HeapError::DuplicateValue`] if `value` is already present;
    /// the heap is left unchanged.
    pub fn add(&mut self, value: V, priority: P) -> Result<(), HeapError> {
        if self.index.contains_key(&value) {
            return Err(HeapError::DuplicateValue);
        }

        let position = self.entries.len();
        let key = value.clone();
        self.entries.append(Entry { value, priority });
        self.index.insert(key, position);
        self.bubble_up(position);
        Ok(())
    }

    /// Returns the value with the smallest priority
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap is empty.
    pub fn peek(&self) -> Result<&V, HeapError> {
        self.peek_entry().map(|(value, _)| value)
    }

    /// Returns the value with the smallest priority together with that priority
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap is empty.
    pub fn peek_entry(&self) -> Result<(&V, &P), HeapError> {
        let root = self.entries.get(0).map_err(|_| HeapError::Empty)?;
        Ok((&root.value, &root.priority))
    }

    /// Removes and returns the value with the smallest priority
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap is empty.
    pub fn poll(&mut self) -> Result<V, HeapError> {
        self.poll_entry().map(|(value, _)| value)
    }

    /// Removes and returns the value with the smallest priority and that priority
    ///
    /// The last leaf replaces the root and is bubbled down.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap is empty.
    pub fn poll_entry(&mut self) -> Result<(V, P), HeapError> {
        if self.entries.is_empty() {
            return Err(HeapError::Empty);
        }

        self.index.remove(&self.entries[0].value);
        let last = self.entries.pop().map_err(|_| HeapError::Empty)?;
        if self.entries.is_empty() {
            // `last` was the root
            return Ok((last.value, last.priority));
        }

        let root = std::mem::replace(&mut self.entries[0], last);
        self.index.update(&self.entries[0].value, 0);
        self.bubble_down(0);
        Ok((root.value, root.priority))
    }

    /// Returns true if `value` is in the heap
    pub fn contains(&self, value: &V) -> bool {
        self.index.contains_key(value)
    }

    /// Returns the current priority of `value`
    pub fn priority_of(&self, value: &V) -> Option<&P> {
        let position = self.index.get(value)?;
        self.entries
            .get(position)
            .ok()
            .map(|entry| &entry.priority)
    }

    /// Changes the priority of `value` to `priority`
    ///
    /// The entry is bubbled up and then down from its slot; whichever
    /// direction does not apply is a no-op.
    ///
    /// # Errors
    /// Returns [`HeapError::ValueNotPresent`] if `value` is not in the heap;
    /// the heap is left unchanged.
    pub fn change_priority(&mut self, value: &V, priority: P) -> Result<(), HeapError> {
        let position = self.index.get(value).ok_or(HeapError::ValueNotPresent)?;
        self.entries[position].priority = priority;
        self.bubble_up(position);
        self.bubble_down(position);
        Ok(())
    }

    /// Removes every value, keeping the array's capacity
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Iterates over `(value, priority)` pairs in level order
    ///
    /// The first item is the minimum; the rest follow the array layout, not
    /// priority order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &P)> + '_ {
        self.entries
            .iter()
            .map(|entry| (&entry.value, &entry.priority))
    }

    /// Verifies the five heap invariants
    ///
    /// # Errors
    /// Returns an [`InvariantError`] describing the first violation found.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let len = self.entries.len();
        if self.entries.iter().count() != len {
            return Err(InvariantError::new(format!(
                "array has gaps below its length {len}"
            )));
        }
        if self.index.len() != len {
            return Err(InvariantError::new(format!(
                "index holds {} keys but heap holds {len} entries",
                self.index.len()
            )));
        }

        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 && entry.priority < self.entries[parent(i)].priority {
                return Err(InvariantError::new(format!(
                    "slot {i} has a smaller priority than its parent slot {}",
                    parent(i)
                )));
            }
            // A duplicated value would make two slots claim one index entry
            match self.index.get(&entry.value) {
                Some(position) if position == i => {}
                Some(position) => {
                    return Err(InvariantError::new(format!(
                        "slot {i} is indexed at position {position}"
                    )));
                }
                None => {
                    return Err(InvariantError::new(format!(
                        "slot {i} is missing from the index"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Exchanges slots `a` and `b` and rewrites both index positions
    ///
    /// The only way entries move during bubbling.
    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.index.update(&self.entries[a].value, a);
        self.index.update(&self.entries[b].value, b);
    }

    /// Move the entry at `index` up while its priority is strictly smaller
    /// than its parent's
    fn bubble_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if self.entries[index].priority < self.entries[parent].priority {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move the entry at `index` down while some child has a strictly
    /// smaller priority
    fn bubble_down(&mut self, mut index: usize) {
        while left_child(index) < self.entries.len() {
            let smaller = self.smaller_child(index);
            if self.entries[smaller].priority < self.entries[index].priority {
                self.swap(index, smaller);
                index = smaller;
            } else {
                break;
            }
        }
    }

    /// Returns the child of `index` with the smaller priority
    ///
    /// An only child is returned as is. When both children have equal
    /// priorities the right child wins.
    ///
    /// Precondition: `index` has a left child.
    fn smaller_child(&self, index: usize) -> usize {
        let left = left_child(index);
        let right = right_child(index);
        if right < self.entries.len() && self.entries[right].priority <= self.entries[left].priority
        {
            right
        } else {
            left
        }
    }
}

impl<V, P, I> Default for IndexedHeap<V, P, I>
where
    V: Clone,
    P: Ord,
    I: PositionIndex<V>,
{
    fn default() -> Self {
        Self::with_capacities(DEFAULT_ARRAY_CAPACITY, DEFAULT_BUCKETS)
    }
}
