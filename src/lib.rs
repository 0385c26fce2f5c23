//! Indexed Priority Queues for Rust
//!
//! This crate provides a binary min-heap of distinct values whose priorities
//! can be changed in place, together with the two containers it is built on.
//!
//! # Features
//!
//! - **Indexed Heap**: O(log n) add and poll; O(1) peek and membership; O(log n) change_priority
//! - **Hash Table**: separate chaining with a configurable max load factor; doubles and rehashes when exceeded
//! - **Dynamic Array**: bounds-checked slots with explicit length/capacity and doubling growth
//! - **Pluggable index**: the heap's value → position map is any [`PositionIndex`], including `FxHashMap`
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::IndexedHeap;
//!
//! let mut heap = IndexedHeap::new();
//! heap.add("item1", 5).unwrap();
//! heap.add("item2", 3).unwrap();
//! heap.change_priority(&"item1", 1).unwrap();
//! assert_eq!(heap.peek_entry(), Ok((&"item1", &1)));
//! ```

pub mod config;
pub mod error;
pub mod hash_table;
pub mod indexed_heap;
pub mod storage;
pub mod traits;

// Re-export the main types for convenience
pub use config::HeapConfig;
pub use error::{ArrayError, ConfigError, HeapError, InvariantError};
pub use hash_table::HashTable;
pub use indexed_heap::IndexedHeap;
pub use storage::DynArray;
pub use traits::PositionIndex;
