//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the store and the shared cache against a plain map model.

use bytes::Bytes;
use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::{Cache, CacheEntry, CacheStore};

// == Test Configuration ==
const TEST_INTERVAL: Duration = Duration::from_millis(100);

// == Strategies ==
/// Generates cache keys shaped like request URLs
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9/_-]{1,48}".prop_map(|path| format!("https://pokeapi.co/api/v2/{}", path))
}

/// Generates arbitrary payloads, including empty ones
fn payload_strategy() -> impl Strategy<Value = Bytes> {
    prop::collection::vec(any::<u8>(), 0..256).prop_map(Bytes::from)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Add { key: String, payload: Bytes },
    Get { key: String },
}

/// Small key space so adds and gets collide often
fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    let key = "k[0-7]";
    prop_oneof![
        (key, payload_strategy()).prop_map(|(key, payload)| CacheOp::Add { key, payload }),
        key.prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Adding a payload and reading it back returns the same bytes.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), payload in payload_strategy()) {
        let mut store = CacheStore::new(TEST_INTERVAL);

        store.add(key.clone(), payload.clone());

        prop_assert_eq!(store.get(&key), Some(payload), "Round-trip payload mismatch");
    }

    // Keys that were never added miss.
    #[test]
    fn prop_unknown_key_misses(
        added in prop::collection::hash_set(key_strategy(), 0..10),
        missing in key_strategy()
    ) {
        prop_assume!(!added.contains(&missing));
        let mut store = CacheStore::new(TEST_INTERVAL);
        for key in added {
            store.add(key, Bytes::from_static(b"x"));
        }

        prop_assert_eq!(store.get(&missing), None);
    }

    // The last add for a key wins.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        first in payload_strategy(),
        second in payload_strategy()
    ) {
        let mut store = CacheStore::new(TEST_INTERVAL);

        store.add(key.clone(), first);
        store.add(key.clone(), second.clone());

        prop_assert_eq!(store.get(&key), Some(second));
        prop_assert_eq!(store.len(), 1);
    }

    // Any interleaving of adds and gets behaves like a HashMap.
    #[test]
    fn prop_matches_map_model(ops in prop::collection::vec(cache_op_strategy(), 1..64)) {
        let mut store = CacheStore::new(TEST_INTERVAL);
        let mut model: HashMap<String, Bytes> = HashMap::new();

        for op in ops {
            match op {
                CacheOp::Add { key, payload } => {
                    store.add(key.clone(), payload.clone());
                    model.insert(key, payload);
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(store.get(&key), model.get(&key).cloned());
                }
            }
        }

        prop_assert_eq!(store.len(), model.len());
    }

    // A sweep keeps exactly the entries whose age is at most the interval.
    #[test]
    fn prop_sweep_is_strict(ages_ms in prop::collection::vec(0u64..300, 1..32)) {
        let mut store = CacheStore::new(TEST_INTERVAL);
        let now = Instant::now();

        for (i, age) in ages_ms.iter().enumerate() {
            let created_at = now - Duration::from_millis(*age);
            store.insert_entry(&format!("k{}", i), CacheEntry::with_created_at(Bytes::from(vec![i as u8]), created_at));
        }

        let expected_removed = ages_ms
            .iter()
            .filter(|age| Duration::from_millis(**age) > TEST_INTERVAL)
            .count();

        prop_assert_eq!(store.sweep(now), expected_removed);

        for (i, age) in ages_ms.iter().enumerate() {
            let present = store.get(&format!("k{}", i)).is_some();
            prop_assert_eq!(present, Duration::from_millis(*age) <= TEST_INTERVAL);
        }
    }
}

// == Property Test for Concurrent Operation Correctness ==
// Exercises the shared handle with several blocking workers while the sweep runs

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    // Every hit returns a payload that some add wrote to that exact key.
    #[test]
    fn prop_concurrent_operation_correctness(
        workers in 2usize..8,
        rounds in 10usize..100
    ) {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(4)
            .enable_all()
            .build()
            .unwrap();

        rt.block_on(async {
            // Short interval so sweeps interleave with the workers
            let cache = Cache::new(Duration::from_millis(1)).unwrap();
            let mut handles = vec![];

            for worker in 0..workers {
                let cache = cache.clone();
                handles.push(tokio::task::spawn_blocking(move || {
                    for round in 0..rounds {
                        let shared = format!("shared{}", round % 4);
                        let own = format!("own{}-{}", worker, round % 4);

                        for key in [&shared, &own] {
                            let payload = format!("{}|{}|{}", key, worker, round);
                            cache.add(key.as_str(), payload.into_bytes()).unwrap();

                            if let Some(bytes) = cache.get(key).unwrap() {
                                let text = String::from_utf8(bytes.to_vec())
                                    .map_err(|e| format!("Torn payload for {}: {}", key, e))?;
                                let written_for = text.split('|').next().unwrap_or_default();
                                if written_for != key.as_str() {
                                    return Err(format!("Key {} returned payload {}", key, text));
                                }
                            }
                        }
                    }
                    Ok::<_, String>(())
                }));
            }

            for handle in handles {
                let result = handle.await.expect("Worker should not panic");
                prop_assert!(result.is_ok(), "Concurrent operation failed: {:?}", result);
            }

            cache.shutdown().unwrap().await.unwrap();
            Ok(())
        })?;
    }
}
