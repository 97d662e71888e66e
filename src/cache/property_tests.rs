//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify the cache's behavioral invariants over arbitrary
//! operation sequences, driven by a manual clock so no test sleeps.

use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

use crate::cache::TtlMap;
use crate::clock::ManualClock;
use crate::config::CacheConfig;

// == Test Configuration ==
const TEST_TTL_MILLIS: u64 = 10_000;
const TEST_MAX_SIZE: usize = 100;
const SMALL_MAX_SIZE: usize = 4;

// == Strategies ==
/// Generates cache keys from a small alphabet so operations collide.
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-h]{1,2}".prop_map(|s| s)
}

/// Generates cache values.
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,32}".prop_map(|s| s)
}

/// Generates a sequence of cache operations for testing
#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: String, value: String },
    Get { key: String },
    Clear,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Put { key, value }),
        4 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => Just(CacheOp::Clear),
    ]
}

fn fresh_map(max_size: usize) -> TtlMap<String, String> {
    let clock = Arc::new(ManualClock::new(1_000_000));
    let config = CacheConfig::new(TEST_TTL_MILLIS, false, max_size).unwrap();
    TtlMap::with_clock(&config, clock)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any sequence of operations within one TTL window, the statistics
    // (hits, misses) and the entry count match a plain HashMap model.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut map = fresh_map(TEST_MAX_SIZE);
        let mut model: HashMap<String, String> = HashMap::new();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    map.put(key.clone(), value.clone());
                    model.insert(key, value);
                }
                CacheOp::Get { key } => {
                    match map.get(&key) {
                        Some(value) => {
                            expected_hits += 1;
                            prop_assert_eq!(Some(&value), model.get(&key));
                        }
                        None => {
                            expected_misses += 1;
                            prop_assert!(!model.contains_key(&key));
                        }
                    }
                }
                CacheOp::Clear => {
                    map.clear();
                    model.clear();
                }
            }
        }

        let stats = map.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.total_entries, model.len(), "Entry count mismatch");
    }

    // For any key-value pair, storing and retrieving it within the TTL
    // window returns the exact value stored.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let mut map = fresh_map(TEST_MAX_SIZE);

        let returned = map.put(key.clone(), value.clone());
        prop_assert_eq!(&returned, &value, "Put must return the stored value");

        let retrieved = map.get(&key);
        prop_assert_eq!(retrieved, Some(value), "Round-trip value mismatch");
    }

    // For any key, storing V1 then V2 results in a get returning V2.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        v1 in value_strategy(),
        v2 in value_strategy(),
    ) {
        let mut map = fresh_map(TEST_MAX_SIZE);

        map.put(key.clone(), v1);
        map.put(key.clone(), v2.clone());

        prop_assert_eq!(map.get(&key), Some(v2));
        prop_assert_eq!(map.size(), 1);
    }

    // The size bound is soft but never drifts: after any operation the
    // count stays within max_size + 1 (the strictly-greater trigger lets
    // exactly one excess entry linger).
    #[test]
    fn prop_size_never_exceeds_soft_bound(
        ops in prop::collection::vec(cache_op_strategy(), 1..80),
    ) {
        let mut map = fresh_map(SMALL_MAX_SIZE);

        for op in ops {
            match op {
                CacheOp::Put { key, value } => { map.put(key, value); }
                CacheOp::Get { key } => { map.get(&key); }
                CacheOp::Clear => map.clear(),
            }
            prop_assert!(
                map.size() <= SMALL_MAX_SIZE + 1,
                "Size {} exceeded soft bound", map.size()
            );
        }
    }

    // After a clear, every previously stored key misses and the count is
    // zero, regardless of what was stored.
    #[test]
    fn prop_clear_empties_map(
        pairs in prop::collection::vec((key_strategy(), value_strategy()), 1..20),
    ) {
        let mut map = fresh_map(TEST_MAX_SIZE);

        for (key, value) in &pairs {
            map.put(key.clone(), value.clone());
        }

        map.clear();

        prop_assert_eq!(map.size(), 0);
        for (key, _) in &pairs {
            prop_assert_eq!(map.get(key), None);
        }
    }

    // Once the clock moves past the TTL, no stored key is ever served.
    #[test]
    fn prop_expired_entries_never_served(
        pairs in prop::collection::vec((key_strategy(), value_strategy()), 1..20),
    ) {
        let clock = Arc::new(ManualClock::new(1_000_000));
        let config = CacheConfig::new(TEST_TTL_MILLIS, false, TEST_MAX_SIZE).unwrap();
        let mut map: TtlMap<String, String> = TtlMap::with_clock(&config, clock.clone());

        for (key, value) in &pairs {
            map.put(key.clone(), value.clone());
        }

        clock.advance(TEST_TTL_MILLIS);

        for (key, _) in &pairs {
            prop_assert_eq!(map.get(key), None, "Expired entry was served");
        }
        prop_assert_eq!(map.size(), 0, "Lazy expiry should have drained the map");
    }
}
