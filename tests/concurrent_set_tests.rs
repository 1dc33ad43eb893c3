//! Tests for `ConcurrentSet`.
//!
//! # Running these tests
//!
//! ```bash
//! cargo test --test concurrent_set_tests --features concurrent
//! ```

#![cfg(feature = "concurrent")]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use proptest::prelude::*;
use rstest::rstest;
use syncset::{ConcurrentSet, PlainSet, UniqueSet};

const THREADS: usize = 8;

#[rstest]
fn test_new_set_is_empty() {
    let set: ConcurrentSet<i32> = ConcurrentSet::new();
    assert!(set.is_empty());
    assert_eq!(set.to_vec(), Vec::<i32>::new());
}

#[rstest]
fn test_with_capacity_starts_empty() {
    let set: ConcurrentSet<String> = ConcurrentSet::with_capacity(128);
    assert_eq!(set.len(), 0);
}

#[rstest]
fn test_debug_lists_elements() {
    let set = ConcurrentSet::from_slice(&[7]);
    assert_eq!(format!("{set:?}"), "{7}");
}

/// Concurrent adds of one value store it once and report one success.
#[rstest]
fn test_concurrent_add_same_value_counts_once() {
    for _ in 0..100 {
        let set: Arc<ConcurrentSet<String>> = Arc::new(ConcurrentSet::new());
        let successes = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let set = Arc::clone(&set);
                let successes = Arc::clone(&successes);
                thread::spawn(move || {
                    if set.add("shared".to_string()) {
                        successes.fetch_add(1, Ordering::SeqCst);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(successes.load(Ordering::SeqCst), 1);
        assert_eq!(set.len(), 1);
        assert!(set.contains("shared"));
    }
}

/// The counter settles on the number of entries once writers finish.
#[rstest]
fn test_counter_matches_entries_after_churn() {
    let set: Arc<ConcurrentSet<u16>> = Arc::new(ConcurrentSet::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|worker| {
            let set = Arc::clone(&set);
            thread::spawn(move || {
                for round in 0..500_u16 {
                    let value = round % 32;
                    set.add(value);
                    if (usize::from(round) + worker) % 2 == 0 {
                        set.remove(&value);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(set.len(), set.to_vec().len());
}

#[rstest]
fn test_concurrent_clear_and_add_keep_counter_consistent() {
    let set: Arc<ConcurrentSet<u32>> = Arc::new(ConcurrentSet::new());

    let adder = {
        let set = Arc::clone(&set);
        thread::spawn(move || {
            for value in 0..1_000 {
                set.add(value);
            }
        })
    };
    let clearer = {
        let set = Arc::clone(&set);
        thread::spawn(move || {
            for _ in 0..50 {
                set.clear();
            }
        })
    };

    adder.join().unwrap();
    clearer.join().unwrap();

    assert_eq!(set.len(), set.to_vec().len());
}

// =============================================================================
// Membership Equivalence
// Description: ConcurrentSet agrees with a locked set on every outcome
// =============================================================================

fn outcomes<S: UniqueSet<u8>>(set: &S, operations: &[(bool, u8)]) -> Vec<bool> {
    operations
        .iter()
        .map(|&(add, value)| if add { set.add(value) } else { set.remove(&value) })
        .collect()
}

proptest! {
    #[test]
    fn prop_matches_locked_plain_set(operations in prop::collection::vec((any::<bool>(), any::<u8>()), 0..100)) {
        let concurrent: ConcurrentSet<u8> = ConcurrentSet::new();
        let locked: PlainSet<u8> = PlainSet::new();

        prop_assert_eq!(outcomes(&concurrent, &operations), outcomes(&locked, &operations));
        prop_assert_eq!(concurrent.len(), locked.len());

        let mut concurrent_elements = concurrent.to_vec();
        concurrent_elements.sort_unstable();
        let mut locked_elements = locked.to_vec();
        locked_elements.sort_unstable();
        prop_assert_eq!(concurrent_elements, locked_elements);
    }
}
