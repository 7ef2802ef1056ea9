//! Cache Entry Module
//!
//! The value side of the key index: the stored value plus the slot that
//! locates its key in the recency list.

// == Cache Entry ==
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Slot of this entry's key in the `LruTracker`
    pub(crate) slot: usize,
}

impl<V> CacheEntry<V> {
    pub fn new(value: V, slot: usize) -> Self {
        Self { value, slot }
    }

    /// Replaces the value, returning the previous one.
    pub fn replace(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }
}
