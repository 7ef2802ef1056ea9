//! Shared Cache Handle
//!
//! Thread-safe wrapper around `BoundedLruCache` for use across request tasks.

use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::cache::{BoundedLruCache, CacheStats};
use crate::error::Result;

// == Shared Cache ==
/// Cloneable handle to one cache instance.
///
/// A single lock guards the key index and the recency list together. Reads
/// that promote an entry take the write lock; the lock is only held for the
/// duration of one cache operation.
#[derive(Debug)]
pub struct SharedCache<K, V> {
    inner: Arc<RwLock<BoundedLruCache<K, V>>>,
}

impl<K, V> Clone for SharedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> SharedCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Creates a handle to a new, empty cache.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self::from_store(BoundedLruCache::new(capacity)?))
    }

    pub fn from_store(store: BoundedLruCache<K, V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    // == Get If Present ==
    /// Returns a copy of the value for `key`, promoting it, in one critical section.
    ///
    /// A hit observed here cannot be invalidated by a concurrent eviction
    /// before the value is read.
    pub async fn get_if_present<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut cache = self.inner.write().await;
        cache.get(key).ok().cloned()
    }

    /// Existence probe; does not change recency.
    pub async fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read().await.contains_key(key)
    }

    /// Inserts or overwrites `key`; returns the key evicted to make room, if any.
    pub async fn put(&self, key: K, value: V) -> Option<K> {
        self.inner.write().await.put(key, value)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    pub async fn capacity(&self) -> usize {
        self.inner.read().await.capacity()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats()
    }
}
