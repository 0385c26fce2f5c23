//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify that the
//! heap invariants hold after every step.

use indexed_heaps::{HashTable, HeapError, IndexedHeap, PositionIndex};
use proptest::prelude::*;
use rustc_hash::FxHashMap;

use std::collections::HashMap;

/// Test that adds and polls keep the heap valid and polls return the minimum
fn test_add_poll_invariant<I: PositionIndex<i32>>(
    ops: Vec<(bool, i32, i32)>,
) -> Result<(), TestCaseError> {
    let mut heap: IndexedHeap<i32, i32, I> = IndexedHeap::default();
    let mut model: HashMap<i32, i32> = HashMap::new();

    for (should_poll, value, priority) in ops {
        if should_poll {
            match heap.poll_entry() {
                Ok((value, priority)) => {
                    let min = model.values().min().copied();
                    prop_assert_eq!(Some(priority), min);
                    prop_assert_eq!(model.remove(&value), Some(priority));
                }
                Err(err) => {
                    prop_assert_eq!(err, HeapError::Empty);
                    prop_assert!(model.is_empty());
                }
            }
        } else {
            let result = heap.add(value, priority);
            if model.contains_key(&value) {
                prop_assert_eq!(result, Err(HeapError::DuplicateValue));
            } else {
                prop_assert_eq!(result, Ok(()));
                model.insert(value, priority);
            }
        }

        prop_assert_eq!(heap.len(), model.len());
        prop_assert!(heap.check_invariants().is_ok());
    }

    Ok(())
}

/// Test change_priority maintains every invariant
fn test_change_priority_invariant<I: PositionIndex<i32>>(
    initial: Vec<i32>,
    changes: Vec<(usize, i32)>,
) -> Result<(), TestCaseError> {
    let mut heap: IndexedHeap<i32, i32, I> = IndexedHeap::default();
    let mut model: HashMap<i32, i32> = HashMap::new();

    // Values are slot numbers so they are unique
    for (value, priority) in initial.iter().enumerate() {
        let value = value as i32;
        heap.add(value, *priority).unwrap();
        model.insert(value, *priority);
    }

    for (target, priority) in changes {
        if initial.is_empty() {
            break;
        }
        let value = (target % initial.len()) as i32;
        prop_assert!(heap.change_priority(&value, priority).is_ok());
        model.insert(value, priority);

        prop_assert!(heap.check_invariants().is_ok());
        prop_assert_eq!(heap.priority_of(&value), Some(&priority));
        let min = model.values().min().copied();
        prop_assert_eq!(heap.peek_entry().ok().map(|(_, p)| *p), min);
    }

    Ok(())
}

/// Test that polling everything yields priorities in non-decreasing order
fn test_poll_order_invariant<I: PositionIndex<i32>>(
    priorities: Vec<i32>,
) -> Result<(), TestCaseError> {
    let mut heap: IndexedHeap<i32, i32, I> = IndexedHeap::default();
    for (value, priority) in priorities.iter().enumerate() {
        heap.add(value as i32, *priority).unwrap();
    }

    let mut polled = Vec::new();
    while let Ok((_, priority)) = heap.poll_entry() {
        polled.push(priority);
    }

    let mut expected = priorities.clone();
    expected.sort();
    prop_assert_eq!(polled, expected);
    Ok(())
}

/// Test that contains agrees with what has been added and not yet polled
fn test_membership_invariant<I: PositionIndex<i32>>(
    ops: Vec<(bool, i32)>,
) -> Result<(), TestCaseError> {
    let mut heap: IndexedHeap<i32, i32, I> = IndexedHeap::default();
    let mut present = std::collections::BTreeSet::new();

    for (should_poll, value) in ops {
        if should_poll {
            if let Ok(polled) = heap.poll() {
                prop_assert!(present.remove(&polled));
            }
        } else if heap.add(value, value).is_ok() {
            present.insert(value);
        }

        for v in -20..20 {
            prop_assert_eq!(heap.contains(&v), present.contains(&v));
        }
    }

    Ok(())
}

proptest! {
    #[test]
    fn test_hash_table_add_poll_invariant(
        ops in prop::collection::vec((prop::bool::weighted(0.3), -20i32..20, -50i32..50), 0..200)
    ) {
        test_add_poll_invariant::<HashTable<i32, usize>>(ops)?;
    }

    #[test]
    fn test_hash_table_change_priority_invariant(
        initial in prop::collection::vec(-100i32..100, 0..60),
        changes in prop::collection::vec((0usize..60, -100i32..100), 0..60)
    ) {
        test_change_priority_invariant::<HashTable<i32, usize>>(initial, changes)?;
    }

    #[test]
    fn test_hash_table_poll_order_invariant(priorities in prop::collection::vec(-100i32..100, 0..150)) {
        test_poll_order_invariant::<HashTable<i32, usize>>(priorities)?;
    }

    #[test]
    fn test_hash_table_membership_invariant(
        ops in prop::collection::vec((prop::bool::weighted(0.3), -20i32..20), 0..100)
    ) {
        test_membership_invariant::<HashTable<i32, usize>>(ops)?;
    }

    #[test]
    fn test_fx_hash_map_add_poll_invariant(
        ops in prop::collection::vec((prop::bool::weighted(0.3), -20i32..20, -50i32..50), 0..200)
    ) {
        test_add_poll_invariant::<FxHashMap<i32, usize>>(ops)?;
    }

    #[test]
    fn test_fx_hash_map_change_priority_invariant(
        initial in prop::collection::vec(-100i32..100, 0..60),
        changes in prop::collection::vec((0usize..60, -100i32..100), 0..60)
    ) {
        test_change_priority_invariant::<FxHashMap<i32, usize>>(initial, changes)?;
    }

    #[test]
    fn test_fx_hash_map_poll_order_invariant(priorities in prop::collection::vec(-100i32..100, 0..150)) {
        test_poll_order_invariant::<FxHashMap<i32, usize>>(priorities)?;
    }

    #[test]
    fn test_fx_hash_map_membership_invariant(
        ops in prop::collection::vec((prop::bool::weighted(0.3), -20i32..20), 0..100)
    ) {
        test_membership_invariant::<FxHashMap<i32, usize>>(ops)?;
    }

    #[test]
    fn test_hash_table_matches_model(
        ops in prop::collection::vec((-30i32..30, 0i32..1000), 0..200)
    ) {
        // Insert-or-replace against std's HashMap
        let mut table: HashTable<i32, i32> = HashTable::with_capacity(1);
        let mut model = HashMap::new();
        for (key, value) in ops {
            prop_assert_eq!(table.insert(key, value), model.insert(key, value));
            if value % 5 == 0 {
                prop_assert_eq!(table.remove(&key), model.remove(&key));
            }
            prop_assert_eq!(table.len(), model.len());
            prop_assert!(table.load_factor() <= table.max_load_factor());
        }
        for (key, value) in &model {
            prop_assert_eq!(table.get(key), Some(value));
        }
    }
}
