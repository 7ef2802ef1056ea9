//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the capacity bound, eviction order and recency
//! rules of `BoundedLruCache` against arbitrary operation sequences.

use proptest::prelude::*;
use std::collections::{HashSet, VecDeque};

use crate::cache::{BoundedLruCache, SharedCache};

// == Strategies ==
/// Generates handle-like keys
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9-]{1,12}"
}

/// Generates a small key space so that sequences revisit keys
fn narrow_key_strategy() -> impl Strategy<Value = String> {
    "[a-f]"
}

/// Generates `count` distinct keys
fn unique_keys(count: std::ops::Range<usize>) -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set(key_strategy(), count).prop_map(|set| set.into_iter().collect())
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: String, value: u32 },
    Get { key: String },
    Contains { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (narrow_key_strategy(), any::<u32>()).prop_map(|(key, value)| CacheOp::Put { key, value }),
        narrow_key_strategy().prop_map(|key| CacheOp::Get { key }),
        narrow_key_strategy().prop_map(|key| CacheOp::Contains { key }),
    ]
}

// == Reference Model ==
/// Straightforward O(n) LRU: front = most recent.
struct ModelLru {
    capacity: usize,
    order: VecDeque<(String, u32)>,
}

impl ModelLru {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            order: VecDeque::new(),
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.order.iter().position(|(k, _)| k == key)
    }

    fn get(&mut self, key: &str) -> Option<u32> {
        let idx = self.position(key)?;
        let entry = self.order.remove(idx)?;
        let value = entry.1;
        self.order.push_front(entry);
        Some(value)
    }

    fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    fn put(&mut self, key: String, value: u32) -> Option<String> {
        if let Some(idx) = self.position(&key) {
            self.order.remove(idx);
            self.order.push_front((key, value));
            return None;
        }
        let evicted = if self.order.len() >= self.capacity {
            self.order.pop_back().map(|(k, _)| k)
        } else {
            None
        };
        self.order.push_front((key, value));
        evicted
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Size never exceeds capacity after any put.
    #[test]
    fn prop_capacity_bound(
        capacity in 1usize..20,
        keys in prop::collection::vec(key_strategy(), 1..200)
    ) {
        let mut store = BoundedLruCache::new(capacity).unwrap();

        for (i, key) in keys.into_iter().enumerate() {
            store.put(key, i);
            prop_assert!(
                store.len() <= capacity,
                "Cache size {} exceeds capacity {}",
                store.len(),
                capacity
            );
        }
    }

    /// C + 1 distinct puts without reads evict exactly the first key.
    #[test]
    fn prop_lru_eviction_order(
        keys in unique_keys(2..12),
        new_key in key_strategy()
    ) {
        prop_assume!(!keys.contains(&new_key));

        let capacity = keys.len();
        let mut store = BoundedLruCache::new(capacity).unwrap();
        for key in &keys {
            store.put(key.clone(), format!("value_{}", key));
        }

        let evicted = store.put(new_key.clone(), "new".to_string());

        prop_assert_eq!(evicted.as_ref(), Some(&keys[0]));
        prop_assert_eq!(store.len(), capacity);
        prop_assert!(!store.contains_key(keys[0].as_str()));
        prop_assert!(store.contains_key(new_key.as_str()));
        for key in keys.iter().skip(1) {
            prop_assert!(store.contains_key(key.as_str()), "Key '{}' should remain", key);
        }
    }

    /// Reading the oldest key moves eviction to the second-oldest.
    #[test]
    fn prop_recency_promotion(
        keys in unique_keys(3..10),
        new_key in key_strategy()
    ) {
        prop_assume!(!keys.contains(&new_key));

        let mut store = BoundedLruCache::new(keys.len()).unwrap();
        for key in &keys {
            store.put(key.clone(), key.len());
        }

        prop_assert!(store.get(keys[0].as_str()).is_ok());
        let evicted = store.put(new_key, 0);

        prop_assert_eq!(evicted.as_ref(), Some(&keys[1]));
        prop_assert!(store.contains_key(keys[0].as_str()));
    }

    /// Overwrite replaces the value without changing size.
    #[test]
    fn prop_overwrite_semantics(
        keys in unique_keys(1..10),
        pick in any::<prop::sample::Index>(),
        value1 in any::<u32>(),
        value2 in any::<u32>()
    ) {
        let mut store = BoundedLruCache::new(keys.len()).unwrap();
        for key in &keys {
            store.put(key.clone(), value1);
        }
        let key = pick.get(&keys).clone();
        let before = store.len();

        prop_assert_eq!(store.put(key.clone(), value2), None);

        prop_assert_eq!(store.len(), before);
        prop_assert_eq!(store.get(key.as_str()).copied(), Ok(value2));
    }

    /// Any interleaving of operations matches the reference model.
    #[test]
    fn prop_matches_reference_model(
        capacity in 1usize..6,
        ops in prop::collection::vec(cache_op_strategy(), 1..100)
    ) {
        let mut store = BoundedLruCache::new(capacity).unwrap();
        let mut model = ModelLru::new(capacity);

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    prop_assert_eq!(store.put(key.clone(), value), model.put(key, value));
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(store.get(key.as_str()).ok().copied(), model.get(&key));
                }
                CacheOp::Contains { key } => {
                    prop_assert_eq!(store.contains_key(key.as_str()), model.contains(&key));
                }
            }
            prop_assert_eq!(store.len(), model.order.len());
        }
    }

    /// Hit and miss counters agree with observed get results.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store = BoundedLruCache::new(3).unwrap();
        let mut expected_hits = 0u64;
        let mut expected_misses = 0u64;

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    store.put(key, value);
                }
                CacheOp::Get { key } => match store.get(key.as_str()) {
                    Ok(_) => expected_hits += 1,
                    Err(_) => expected_misses += 1,
                },
                CacheOp::Contains { key } => {
                    store.contains_key(key.as_str());
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.total_entries, store.len());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Concurrent tasks never push the shared cache past capacity, and every
    /// value read back is one that was written for that key.
    #[test]
    fn prop_concurrent_operation_correctness(
        capacity in 1usize..8,
        ops in prop::collection::vec(cache_op_strategy(), 10..50)
    ) {
        let written: HashSet<(String, u32)> = ops
            .iter()
            .filter_map(|op| match op {
                CacheOp::Put { key, value } => Some((key.clone(), *value)),
                _ => None,
            })
            .collect();

        let outcome: Result<(), String> = tokio_test::block_on(async {
            let cache = SharedCache::new(capacity).map_err(|e| e.to_string())?;

            let handles: Vec<_> = ops
                .into_iter()
                .map(|op| {
                    let cache = cache.clone();
                    tokio::spawn(async move {
                        match op {
                            CacheOp::Put { key, value } => {
                                cache.put(key, value).await;
                                None
                            }
                            CacheOp::Get { key } => {
                                let value = cache.get_if_present(key.as_str()).await;
                                value.map(|v| (key, v))
                            }
                            CacheOp::Contains { key } => {
                                cache.contains_key(key.as_str()).await;
                                None
                            }
                        }
                    })
                })
                .collect();

            for handle in handles {
                let read = handle.await.map_err(|e| e.to_string())?;
                if let Some(pair) = read {
                    if !written.contains(&pair) {
                        return Err(format!("read a value never written: {:?}", pair));
                    }
                }
            }

            if cache.len().await > capacity {
                return Err("capacity exceeded".to_string());
            }
            Ok(())
        });

        prop_assert!(outcome.is_ok(), "{:?}", outcome);
    }
}
