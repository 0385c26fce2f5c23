//! Construction parameters for [`IndexedHeap`](crate::IndexedHeap)
//!
//! ```rust
//! use indexed_heaps::{HeapConfig, IndexedHeap};
//!
//! let config = HeapConfig::default()
//!     .with_array_capacity(64)
//!     .with_index_capacity(97)
//!     .with_max_load_factor(0.75);
//! let heap: IndexedHeap<u32, u32> = IndexedHeap::try_with_config(config).unwrap();
//! assert!(heap.is_empty());
//!
//! assert!(HeapConfig::default().with_index_capacity(0).validate().is_err());
//! ```

use crate::error::ConfigError;
use crate::hash_table::{self, DEFAULT_BUCKETS, DEFAULT_MAX_LOAD_FACTOR};

/// Initial array capacity of a default heap
pub const DEFAULT_ARRAY_CAPACITY: usize = 10;

/// Sizing and growth parameters for a heap and its index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeapConfig {
    /// Initial physical capacity of the entry array
    pub array_capacity: usize,
    /// Initial bucket count of the position index
    pub index_capacity: usize,
    /// Load factor above which the position index rehashes
    pub max_load_factor: f64,
}

impl HeapConfig {
    /// Sets the initial array capacity
    pub fn with_array_capacity(mut self, capacity: usize) -> Self {
        self.array_capacity = capacity;
        self
    }

    /// Sets the initial index bucket count
    pub fn with_index_capacity(mut self, capacity: usize) -> Self {
        self.index_capacity = capacity;
        self
    }

    /// Sets the index's maximum load factor
    pub fn with_max_load_factor(mut self, load_factor: f64) -> Self {
        self.max_load_factor = load_factor;
        self
    }

    /// Checks that the parameters describe a usable heap
    ///
    /// A zero array capacity is allowed (the array grows on first insert);
    /// the index needs at least one bucket and a positive finite load factor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        hash_table::validate_table_params(self.index_capacity, self.max_load_factor)
    }
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self {
            array_capacity: DEFAULT_ARRAY_CAPACITY,
            index_capacity: DEFAULT_BUCKETS,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
        }
    }
}
