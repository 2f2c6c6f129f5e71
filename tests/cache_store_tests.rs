#![cfg(feature = "memo")]
//! Unit tests for CacheStore<K, V, S>.
//!
//! Tests cover:
//! - Presence queries and lookups
//! - Insert-once semantics of put
//! - Missing-entry handling (panic and typed error)
//! - Tuple keys and custom hashers

use memolambda::memo::{CacheStore, MissingEntryError};
use rstest::rstest;
use std::collections::hash_map::RandomState;

// =============================================================================
// Presence and Lookup
// =============================================================================

#[rstest]
fn store_starts_empty() {
    let store: CacheStore<u32, String> = CacheStore::new();

    assert!(store.is_empty());
    assert!(!store.contains(&0));
    assert_eq!(store.lookup(&0), None);
}

#[rstest]
fn store_contains_after_put() {
    let mut store = CacheStore::new();
    store.put(3, 9);

    assert!(store.contains(&3));
    assert!(!store.contains(&4));
    assert_eq!(store.get(&3), &9);
    assert_eq!(store.lookup(&3), Some(&9));
}

#[rstest]
fn contains_has_no_side_effects() {
    let store: CacheStore<i32, i32> = CacheStore::new();

    for _ in 0..3 {
        assert!(!store.contains(&1));
    }
    assert_eq!(store.len(), 0);
}

// =============================================================================
// Insert-once
// =============================================================================

#[rstest]
fn put_reports_whether_it_inserted() {
    let mut store = CacheStore::new();

    assert!(store.put("alpha", 1));
    assert!(!store.put("alpha", 1));
    assert!(store.put("beta", 2));
    assert_eq!(store.len(), 2);
}

#[rstest]
fn put_never_overwrites() {
    let mut store = CacheStore::new();
    store.put('x', "first");
    store.put('x', "second");

    assert_eq!(*store.get(&'x'), "first");
}

#[rstest]
fn get_or_insert_with_computes_once() {
    let mut store = CacheStore::new();
    let mut computations = 0;

    for _ in 0..3 {
        let value = *store.get_or_insert_with(10_u64, |key| {
            computations += 1;
            key * 3
        });
        assert_eq!(value, 30);
    }
    assert_eq!(computations, 1);
}

// =============================================================================
// Missing Entries
// =============================================================================

#[rstest]
#[should_panic(expected = "CacheStore::get called for a key with no entry")]
fn get_without_entry_panics() {
    let store: CacheStore<&str, i32> = CacheStore::new();
    let _ = store.get(&"absent");
}

#[rstest]
fn try_get_without_entry_returns_error() {
    let mut store = CacheStore::new();
    store.put(1, "one");

    assert_eq!(store.try_get(&1), Ok(&"one"));
    assert_eq!(store.try_get(&2), Err(MissingEntryError));
}

// =============================================================================
// Keys
// =============================================================================

#[rstest]
#[case((1, 2), (1, 2), true)]
#[case((1, 2), (2, 1), false)]
#[case((0, 0), (0, 1), false)]
fn tuple_keys_compare_structurally(
    #[case] stored: (i32, i32),
    #[case] probe: (i32, i32),
    #[case] expected: bool,
) {
    let mut store = CacheStore::new();
    store.put(stored, ());

    assert_eq!(store.contains(&probe), expected);
}

#[rstest]
fn owned_string_keys_match_by_value() {
    let mut store = CacheStore::new();
    store.put(("left".to_string(), 1_u8), 10);

    assert!(store.contains(&(String::from("left"), 1)));
    assert!(!store.contains(&(String::from("right"), 1)));
}

#[rstest]
fn custom_hasher_is_accepted() {
    let mut store = CacheStore::with_capacity_and_hasher(8, RandomState::new());
    store.put(vec![1, 2, 3], 6);

    assert_eq!(store.lookup(&vec![1, 2, 3]), Some(&6));
}

#[rstest]
fn iter_visits_every_entry() {
    let mut store: CacheStore<i32, i32> = CacheStore::default();
    for key in 0..5 {
        store.put(key, key * key);
    }

    let mut entries: Vec<(i32, i32)> = store.iter().map(|(key, value)| (*key, *value)).collect();
    entries.sort_unstable();

    assert_eq!(entries, vec![(0, 0), (1, 1), (2, 4), (3, 9), (4, 16)]);
    assert_eq!((&store).into_iter().count(), 5);
}
