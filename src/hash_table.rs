//! Chained hash table
//!
//! [`HashTable`] is a map from keys to values that resolves collisions by
//! chaining. Each bucket is a small growable sequence of `(key, value)` pairs
//! kept in insertion order.
//!
//! When an insertion pushes the load factor (`len / capacity`) above the
//! configured maximum (0.8 by default) the bucket array doubles and every
//! entry is re-chained under the new modulus. Rehashing is O(len) but happens
//! geometrically rarely, so insertion stays amortized O(1).
//!
//! # Time Complexity
//!
//! | Operation      | Average | Worst     |
//! |----------------|---------|-----------|
//! | `insert`       | O(1)*   | O(len)    |
//! | `get`          | O(1)    | O(len)    |
//! | `contains_key` | O(1)    | O(len)    |
//! | `remove`       | O(1)    | O(len)    |
//!
//! \* amortized over the table's lifetime
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::hash_table::HashTable;
//!
//! let mut table = HashTable::new();
//! assert_eq!(table.insert("a", 1), None);
//! assert_eq!(table.insert("a", 2), Some(1));
//! assert_eq!(table.get(&"a"), Some(&2));
//! assert!(table.contains_key(&"a"));
//! assert_eq!(table.remove(&"a"), Some(2));
//! assert!(table.is_empty());
//! ```

use std::borrow::Borrow;
use std::fmt::{self, Write as _};
use std::hash::{BuildHasher, Hash};

use rustc_hash::FxBuildHasher;
use smallvec::SmallVec;

use crate::error::ConfigError;

/// Bucket count used by [`HashTable::new`]
pub const DEFAULT_BUCKETS: usize = 17;

/// Load factor above which the table grows
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.8;

type Bucket<K, V> = SmallVec<[(K, V); 2]>;

/// A hash map with separate chaining and doubling growth
///
/// The hasher is pluggable through `S`; the default is
/// [`rustc_hash::FxBuildHasher`].
#[derive(Clone)]
pub struct HashTable<K, V, S = FxBuildHasher> {
    buckets: Vec<Bucket<K, V>>,
    len: usize,
    max_load_factor: f64,
    hash_builder: S,
}

impl<K, V> HashTable<K, V, FxBuildHasher> {
    /// Creates an empty table with [`DEFAULT_BUCKETS`] buckets
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUCKETS)
    }

    /// Creates an empty table with `capacity` buckets (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, FxBuildHasher)
    }

    /// Creates an empty table with a custom maximum load factor
    ///
    /// # Errors
    /// Returns [`ConfigError`] if `capacity` is zero or `max_load_factor` is
    /// not a positive finite number.
    pub fn try_with_load_factor(
        capacity: usize,
        max_load_factor: f64,
    ) -> Result<Self, ConfigError> {
        validate_table_params(capacity, max_load_factor)?;
        let mut table = Self::with_capacity(capacity);
        table.max_load_factor = max_load_factor;
        Ok(table)
    }
}

impl<K, V, S> HashTable<K, V, S> {
    /// Creates an empty table with `capacity` buckets and the given hasher
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            buckets: empty_buckets(capacity.max(1)),
            len: 0,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            hash_builder,
        }
    }

    /// Returns the number of key-value mappings
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table holds no mappings
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns `len / capacity`
    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Returns the load factor above which the table grows
    #[inline]
    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    /// Removes every mapping, keeping the bucket count
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Iterates over all mappings, bucket by bucket
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|(k, v)| (k, v)))
    }

    /// Iterates over all keys, bucket by bucket
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    /// Renders every bucket chain, one line per bucket
    ///
    /// ```text
    /// Table size: 2 capacity: 3
    /// 0: --|
    /// 1: -->(1, "a")-->(4, "b")--|
    /// 2: --|
    /// ```
    pub fn dump(&self) -> String
    where
        K: fmt::Debug,
        V: fmt::Debug,
    {
        let mut out = format!("Table size: {} capacity: {}\n", self.len, self.capacity());
        for (i, bucket) in self.buckets.iter().enumerate() {
            let _ = write!(out, "{i}: --");
            for (k, v) in bucket {
                let _ = write!(out, ">({k:?}, {v:?})--");
            }
            out.push_str("|\n");
        }
        out
    }
}

impl<K, V, S> HashTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Returns a reference to the value mapped to `key`
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let bucket = &self.buckets[self.bucket_of(key)];
        bucket
            .iter()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value mapped to `key`
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_of(key);
        self.buckets[index]
            .iter_mut()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
    }

    /// Returns true if `key` has a mapping
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Maps `key` to `value`, returning the value it replaced
    ///
    /// A new key is appended to the end of its bucket chain. If the load
    /// factor then exceeds the maximum, the table doubles and rehashes.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(existing) = self.get_mut(&key) {
            return Some(std::mem::replace(existing, value));
        }

        let index = self.bucket_of(&key);
        self.buckets[index].push((key, value));
        self.len += 1;
        self.grow_if_needed();
        None
    }

    /// Removes the mapping for `key`, returning its value
    ///
    /// The remaining entries of the chain keep their relative order.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_of(key);
        let bucket = &mut self.buckets[index];
        let pos = bucket.iter().position(|(k, _)| k.borrow() == key)?;
        let (_, value) = bucket.remove(pos);
        self.len -= 1;
        Some(value)
    }

    fn bucket_of<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        (self.hash_builder.hash_one(key) % self.buckets.len() as u64) as usize
    }

    /// Doubles the bucket array and re-chains every entry when overloaded
    fn grow_if_needed(&mut self) {
        if self.load_factor() <= self.max_load_factor {
            return;
        }

        let old_capacity = self.buckets.len();
        let new_capacity = old_capacity * 2;
        let old = std::mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        for bucket in old {
            for (key, value) in bucket {
                let index = self.bucket_of(&key);
                self.buckets[index].push((key, value));
            }
        }

        tracing::debug!(
            len = self.len,
            from = old_capacity,
            to = new_capacity,
            "rehashed hash table"
        );
    }
}

fn empty_buckets<K, V>(capacity: usize) -> Vec<Bucket<K, V>> {
    std::iter::repeat_with(SmallVec::new).take(capacity).collect()
}

pub(crate) fn validate_table_params(
    capacity: usize,
    max_load_factor: f64,
) -> Result<(), ConfigError> {
    if capacity == 0 {
        return Err(ConfigError::new("index capacity must be > 0"));
    }
    if !max_load_factor.is_finite() || max_load_factor <= 0.0 {
        return Err(ConfigError::new(format!(
            "max load factor must be a positive finite number, got {max_load_factor}"
        )));
    }
    Ok(())
}

impl<K, V> Default for HashTable<K, V, FxBuildHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for HashTable<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
