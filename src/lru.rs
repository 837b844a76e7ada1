//! Least Recently Used (LRU) Cache Implementation
//!
//! This module provides a bounded LRU cache with O(1) operations for all
//! common cache operations.
//!
//! # Algorithm
//!
//! The cache keeps its entries in order of recency of use and evicts the least
//! recently used entry when a new key arrives at capacity. Inserting, updating
//! and reading an entry (`put`, `get`, `get_mut`) all count as use. `contains`
//! and `peek` are pure queries and leave the order alone.
//!
//! # Structure
//!
//! ```text
//!   map: K ──▶ EntryId                 list (arena of slots)
//!   ┌──────────┬─────────┐    ┌──────┐   ┌───────┐   ┌───────┐   ┌──────┐
//!   │ "apple"  │ slot 3  │    │ HEAD │ ⇄ │ slot 3│ ⇄ │ slot 2│ ⇄ │ TAIL │
//!   │ "banana" │ slot 2  │    └──────┘   └───────┘   └───────┘   └──────┘
//!   └──────────┴─────────┘       MRU ─────────────────────▶ LRU
//! ```
//!
//! The list is linked by slot index rather than by pointer, and removed slots
//! are recycled through a free list, so promotion, eviction from the back and
//! removal of an arbitrary key are all O(1) without `unsafe`.
//!
//! # Performance Characteristics
//!
//! - Get / Put / Remove / Contains: O(1) average
//! - Clear: O(n)
//! - Memory: one map entry plus one arena slot per cached entry
//!
//! # Thread Safety
//!
//! `LruCache` is not internally synchronized: every call that may reorder
//! entries takes `&mut self`. To share a cache between threads, wrap it in a
//! lock such as `Mutex<LruCache<K, V>>`.

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::list::{self, EntryId, List};
use crate::metrics::{LruCacheMetrics, Metrics};
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;
use tracing::{debug, trace};

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Upper bound on map buckets reserved up front.
const MAX_PREALLOCATED_ENTRIES: usize = 4096;

/// A bounded Least Recently Used (LRU) cache.
///
/// The cache has a fixed capacity and supports O(1) operations for
/// inserting, retrieving, and updating entries. When a new key is inserted
/// into a full cache, the least recently used entry is evicted first.
///
/// # Examples
///
/// ```
/// use utils_rs::LruCache;
/// use core::num::NonZeroUsize;
///
/// let mut cache = LruCache::new(NonZeroUsize::new(2).unwrap());
///
/// cache.put("apple", 1);
/// cache.put("banana", 2);
///
/// // Reading promotes "apple" to most recently used
/// assert_eq!(cache.get(&"apple"), Some(&1));
///
/// // Adding beyond capacity evicts the least recently used item
/// assert_eq!(cache.put("cherry", 3), Some(("banana", 2)));
/// assert!(!cache.contains(&"banana"));
/// assert_eq!(cache.get(&"apple"), Some(&1));
/// assert_eq!(cache.get(&"cherry"), Some(&3));
/// ```
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    config: LruCacheConfig,
    list: List<(K, V)>,
    map: HashMap<K, EntryId, S>,
    metrics: LruCacheMetrics,
}

impl<K: Hash + Eq, V> LruCache<K, V, DefaultHashBuilder> {
    /// Creates a new LRU cache holding at most `cap` entries.
    pub fn new(cap: NonZeroUsize) -> Self {
        LruCache::with_hasher(cap, DefaultHashBuilder::default())
    }

    /// Creates a new LRU cache from a configuration with an optional hasher.
    ///
    /// # Example
    ///
    /// ```
    /// use utils_rs::config::LruCacheConfig;
    /// use utils_rs::LruCache;
    ///
    /// let config = LruCacheConfig::try_from(100).unwrap();
    /// let mut cache: LruCache<u32, String> = LruCache::init(config, None);
    /// cache.put(7, "seven".to_string());
    /// assert!(cache.contains(&7));
    /// ```
    pub fn init(config: LruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        LruCache::with_hasher(config.capacity, hasher.unwrap_or_default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates a new LRU cache with the specified capacity and hash builder.
    pub fn with_hasher(cap: NonZeroUsize, hash_builder: S) -> Self {
        let map_capacity = cap.get().min(MAX_PREALLOCATED_ENTRIES);
        LruCache {
            config: LruCacheConfig { capacity: cap },
            list: List::new(cap),
            map: HashMap::with_capacity_and_hasher(map_capacity, hash_builder),
            metrics: LruCacheMetrics::new(),
        }
    }

    /// Returns the maximum number of entries the cache can hold.
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.list.cap()
    }

    /// Returns the number of entries currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the metrics collected so far.
    #[inline]
    pub fn stats(&self) -> &LruCacheMetrics {
        &self.metrics
    }

    /// Returns a reference to the value of `key` and marks it most recently
    /// used.
    ///
    /// A read is a recency update: a key that is read regularly will not be
    /// evicted. Use [`peek`](Self::peek) or [`contains`](Self::contains) to
    /// inspect the cache without reordering it.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.map.get(key).copied() {
            Some(id) => {
                self.list.move_to_front(id);
                self.metrics.core.record_hit();
                self.list.get(id).map(|(_, v)| v)
            }
            None => {
                self.metrics.core.record_miss();
                None
            }
        }
    }

    /// Returns a mutable reference to the value of `key` and marks it most
    /// recently used.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.map.get(key).copied() {
            Some(id) => {
                self.list.move_to_front(id);
                self.metrics.core.record_hit();
                self.list.get_mut(id).map(|(_, v)| v)
            }
            None => {
                self.metrics.core.record_miss();
                None
            }
        }
    }

    /// Returns a reference to the value of `key` without touching its recency.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = self.map.get(key)?;
        self.list.get(*id).map(|(_, v)| v)
    }

    /// Returns true if `key` is cached. Does not affect recency.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Returns the least recently used entry without removing it.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.list.last().map(|(k, v)| (k, v))
    }

    /// Returns the most recently used entry.
    pub fn peek_mru(&self) -> Option<(&K, &V)> {
        self.list.first().map(|(k, v)| (k, v))
    }

    /// Removes `key` and returns its value, or `None` if it was not cached.
    ///
    /// The relative order of the remaining entries is unchanged.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = self.map.remove(key)?;
        let (_, value) = self.list.remove(id)?;
        self.metrics.core.record_removal();
        Some(value)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let entry = self.unlink_lru()?;
        self.metrics.core.record_removal();
        Some(entry)
    }

    /// Removes every entry. The capacity is unchanged.
    pub fn clear(&mut self) {
        let discarded = self.map.len();
        self.map.clear();
        self.list.clear();
        debug!(discarded, "cleared LRU cache");
    }

    /// Iterates entries from most to least recently used without touching
    /// their recency.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.list.iter(),
        }
    }

    fn unlink_lru(&mut self) -> Option<(K, V)> {
        let (key, value) = self.list.remove_last()?;
        self.map.remove(&key);
        Some((key, value))
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruCache<K, V, S> {
    /// Inserts or updates `key`, making it the most recently used entry.
    ///
    /// Returns the entry displaced by the call:
    ///
    /// - `key` already cached: its value is replaced and the previous
    ///   `(key, value)` pair is returned. Nothing is evicted.
    /// - `key` is new and the cache is full: the least recently used entry is
    ///   evicted and returned.
    /// - otherwise `None`.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&id) = self.map.get(&key) {
            self.list.move_to_front(id);
            self.metrics.core.record_update();
            return self.list.update(id, (key, value));
        }

        let mut evicted = None;
        if self.list.is_full() {
            evicted = self.unlink_lru();
            if evicted.is_some() {
                self.metrics.core.record_eviction();
                trace!(
                    capacity = self.cap().get(),
                    "evicted least recently used entry"
                );
            }
        }

        if let Some(id) = self.list.add((key.clone(), value)) {
            self.map.insert(key, id);
            self.metrics.core.record_insertion();
        }

        evicted
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> Metrics for LruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn name(&self) -> &'static str {
        self.metrics.name()
    }
}

impl<K, V, S> fmt::Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.config.capacity)
            .field("len", &self.list.len())
            .finish()
    }
}

/// Iterator over cache entries from most to least recently used.
///
/// Created by [`LruCache::iter`].
pub struct Iter<'a, K, V> {
    inner: list::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.inner.len())
            .finish()
    }
}

impl<'a, K: Hash + Eq, V, S: BuildHasher> IntoIterator for &'a LruCache<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec::Vec;

    fn keys<V, S: BuildHasher>(cache: &LruCache<&'static str, V, S>) -> Vec<&'static str> {
        cache.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn test_lru_get_put() {
        let mut cache = LruCache::new(NonZeroUsize::new(2).unwrap());
        assert_eq!(cache.put("apple", 1), None);
        assert_eq!(cache.put("banana", 2), None);
        assert_eq!(cache.get(&"apple"), Some(&1));
        assert_eq!(cache.get(&"banana"), Some(&2));
        assert_eq!(cache.get(&"cherry"), None);
        assert_eq!(cache.put("apple", 3).unwrap().1, 1);
        assert_eq!(cache.get(&"apple"), Some(&3));
        assert_eq!(cache.put("cherry", 4).unwrap().1, 2);
        assert_eq!(cache.get(&"banana"), None);
        assert_eq!(cache.get(&"apple"), Some(&3));
        assert_eq!(cache.get(&"cherry"), Some(&4));
    }

    #[test]
    fn test_lru_get_mut() {
        let mut cache = LruCache::new(NonZeroUsize::new(2).unwrap());
        cache.put("apple", 1);
        cache.put("banana", 2);
        if let Some(v) = cache.get_mut(&"apple") {
            *v = 3;
        }
        assert_eq!(cache.get(&"apple"), Some(&3));
        cache.put("cherry", 4);
        assert_eq!(cache.get(&"banana"), None);
        assert_eq!(cache.get(&"apple"), Some(&3));
        assert_eq!(cache.get(&"cherry"), Some(&4));
    }

    #[test]
    fn test_lru_remove() {
        let mut cache = LruCache::new(NonZeroUsize::new(2).unwrap());
        cache.put("apple", 1);
        cache.put("banana", 2);
        assert_eq!(cache.remove(&"apple"), Some(1));
        assert_eq!(cache.get(&"apple"), None);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.remove(&"cherry"), None);
        let evicted = cache.put("cherry", 3);
        assert_eq!(evicted, None);
        assert_eq!(cache.get(&"banana"), Some(&2));
        assert_eq!(cache.get(&"cherry"), Some(&3));
    }

    #[test]
    fn test_lru_remove_keeps_order_of_others() {
        let mut cache = LruCache::new(NonZeroUsize::new(4).unwrap());
        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);
        cache.put("d", 4);
        cache.remove(&"b");
        assert_eq!(keys(&cache), ["d", "c", "a"]);
    }

    #[test]
    fn test_lru_clear() {
        let mut cache = LruCache::new(NonZeroUsize::new(2).unwrap());
        cache.put("apple", 1);
        cache.put("banana", 2);
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        assert_eq!(cache.cap().get(), 2);
        assert!(!cache.contains(&"apple"));
        cache.put("cherry", 3);
        assert_eq!(cache.get(&"cherry"), Some(&3));
    }

    #[test]
    fn test_lru_capacity_limits() {
        let mut cache = LruCache::new(NonZeroUsize::new(2).unwrap());
        cache.put("apple", 1);
        cache.put("banana", 2);
        cache.put("cherry", 3);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"apple"), None);
        assert_eq!(cache.get(&"banana"), Some(&2));
        assert_eq!(cache.get(&"cherry"), Some(&3));
    }

    #[test]
    fn test_lru_capacity_one() {
        let mut cache = LruCache::new(NonZeroUsize::new(1).unwrap());
        assert_eq!(cache.put("a", 1), None);
        assert_eq!(cache.put("a", 2), Some(("a", 1)));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.put("b", 3), Some(("a", 2)));
        assert_eq!(cache.peek(&"b"), Some(&3));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_lru_contains_and_peek_do_not_promote() {
        let mut cache = LruCache::new(NonZeroUsize::new(2).unwrap());
        cache.put("apple", 1);
        cache.put("banana", 2);
        assert!(cache.contains(&"apple"));
        assert_eq!(cache.peek(&"apple"), Some(&1));
        assert_eq!(cache.peek_lru(), Some((&"apple", &1)));
        // "apple" is still least recently used
        assert_eq!(cache.put("cherry", 3), Some(("apple", 1)));
    }

    #[test]
    fn test_lru_pop_lru() {
        let mut cache = LruCache::new(NonZeroUsize::new(3).unwrap());
        assert_eq!(cache.pop_lru(), None);
        cache.put("a", 1);
        cache.put("b", 2);
        cache.get(&"a");
        assert_eq!(cache.peek_mru(), Some((&"a", &1)));
        assert_eq!(cache.pop_lru(), Some(("b", 2)));
        assert_eq!(cache.pop_lru(), Some(("a", 1)));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_lru_iter_order() {
        let mut cache = LruCache::new(NonZeroUsize::new(3).unwrap());
        cache.put("one", 1);
        cache.put("two", 2);
        cache.put("three", 3);
        cache.get(&"one");
        assert_eq!(keys(&cache), ["one", "three", "two"]);
        assert_eq!(cache.iter().len(), 3);

        let total: i32 = (&cache).into_iter().map(|(_, v)| *v).sum();
        assert_eq!(total, 6);
    }

    #[test]
    fn test_lru_string_keys() {
        let mut cache = LruCache::new(NonZeroUsize::new(2).unwrap());
        let key1 = String::from("apple");
        let key2 = String::from("banana");
        cache.put(key1.clone(), 1);
        cache.put(key2.clone(), 2);
        assert_eq!(cache.get(&key1), Some(&1));
        assert_eq!(cache.get(&key2), Some(&2));
        assert_eq!(cache.get("apple"), Some(&1));
        assert_eq!(cache.get("banana"), Some(&2));
        assert!(cache.contains("apple"));
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    struct ComplexValue {
        val: i32,
        description: String,
    }

    #[test]
    fn test_lru_complex_values() {
        let mut cache = LruCache::new(NonZeroUsize::new(2).unwrap());
        let key1 = String::from("apple");
        let key2 = String::from("banana");
        let fruit1 = ComplexValue {
            val: 1,
            description: String::from("First fruit"),
        };
        let fruit2 = ComplexValue {
            val: 2,
            description: String::from("Second fruit"),
        };
        let fruit3 = ComplexValue {
            val: 3,
            description: String::from("Third fruit"),
        };
        cache.put(key1.clone(), fruit1.clone());
        cache.put(key2.clone(), fruit2.clone());
        assert_eq!(cache.get(&key1).unwrap().val, fruit1.val);
        assert_eq!(cache.get(&key2).unwrap().val, fruit2.val);
        let evicted = cache.put(String::from("cherry"), fruit3);
        let evicted_fruit = evicted.unwrap();
        assert_eq!(evicted_fruit.1, fruit1);
        let removed = cache.remove(&key1);
        assert_eq!(removed, None);
    }

    #[test]
    fn test_lru_values_need_not_be_clone() {
        struct Opaque(u8);

        let mut cache = LruCache::new(NonZeroUsize::new(1).unwrap());
        cache.put(1u8, Opaque(10));
        let evicted = cache.put(2u8, Opaque(20)).unwrap();
        assert_eq!(evicted.1 .0, 10);
        assert_eq!(cache.get(&2).map(|o| o.0), Some(20));
    }

    #[test]
    fn test_lru_metrics() {
        let mut cache = LruCache::new(NonZeroUsize::new(2).unwrap());
        let metrics = cache.metrics();
        assert_eq!(metrics.get("requests").unwrap(), &0.0);
        assert_eq!(metrics.get("cache_hits").unwrap(), &0.0);
        assert_eq!(metrics.get("cache_misses").unwrap(), &0.0);
        cache.put("apple", 1);
        cache.put("banana", 2);
        cache.get(&"apple");
        cache.get(&"banana");
        let metrics = cache.metrics();
        assert_eq!(metrics.get("cache_hits").unwrap(), &2.0);
        cache.get(&"missing");
        let metrics = cache.metrics();
        assert_eq!(metrics.get("cache_misses").unwrap(), &1.0);
        assert_eq!(metrics.get("requests").unwrap(), &3.0);
        cache.put("cherry", 3);
        cache.put("cherry", 4);
        let metrics = cache.metrics();
        assert_eq!(metrics.get("evictions").unwrap(), &1.0);
        assert_eq!(metrics.get("insertions").unwrap(), &3.0);
        assert_eq!(metrics.get("updates").unwrap(), &1.0);
        assert_eq!(cache.stats().core.evictions, 1);
        assert_eq!(cache.name(), "LRU");
    }

    #[test]
    fn test_lru_init_from_config() {
        let config = LruCacheConfig::try_from(3).unwrap();
        let mut cache: LruCache<u32, u32> = LruCache::init(config, None);
        assert_eq!(cache.cap().get(), 3);
        for i in 0..10 {
            cache.put(i, i * 10);
            assert!(cache.len() <= 3);
        }
        assert_eq!(keys_u32(&cache), [9, 8, 7]);
    }

    #[test]
    fn test_lru_init_with_explicit_hasher() {
        let config = LruCacheConfig::try_from(2).unwrap();
        let mut cache: LruCache<u32, u32> =
            LruCache::init(config, Some(DefaultHashBuilder::default()));
        cache.put(1, 10);
        cache.put(2, 20);
        cache.put(3, 30);
        assert_eq!(keys_u32(&cache), [3, 2]);

        let mut cache =
            LruCache::with_hasher(NonZeroUsize::new(1).unwrap(), DefaultHashBuilder::default());
        cache.put("a", 1);
        assert_eq!(cache.get(&"a"), Some(&1));
    }

    fn keys_u32(cache: &LruCache<u32, u32>) -> Vec<u32> {
        cache.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn test_lru_concurrent_access() {
        extern crate std;
        use std::sync::{Arc, Mutex};
        use std::thread;

        let cache = Arc::new(Mutex::new(LruCache::new(NonZeroUsize::new(100).unwrap())));
        let num_threads = 4;
        let ops_per_thread = 100;

        let mut handles: Vec<std::thread::JoinHandle<()>> = Vec::new();

        // Spawn writer threads
        for t in 0..num_threads {
            let cache = Arc::clone(&cache);
            handles.push(thread::spawn(move || {
                for i in 0..ops_per_thread {
                    let key = std::format!("thread_{}_key_{}", t, i);
                    let mut guard = cache.lock().unwrap();
                    guard.put(key, t * 1000 + i);
                }
            }));
        }

        // Spawn reader threads
        for t in 0..num_threads {
            let cache = Arc::clone(&cache);
            handles.push(thread::spawn(move || {
                for i in 0..ops_per_thread {
                    let key = std::format!("thread_{}_key_{}", t, i);
                    let mut guard = cache.lock().unwrap();
                    let _ = guard.get(&key);
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        let guard = cache.lock().unwrap();
        assert!(guard.len() <= 100);
        assert!(!guard.is_empty());
    }

    #[test]
    fn test_lru_concurrent_mixed_operations() {
        extern crate std;
        use std::sync::{Arc, Mutex};
        use std::thread;

        let cache = Arc::new(Mutex::new(LruCache::new(NonZeroUsize::new(100).unwrap())));
        let num_threads = 8;
        let ops_per_thread = 1000;

        let mut handles: Vec<std::thread::JoinHandle<()>> = Vec::new();

        for t in 0..num_threads {
            let cache = Arc::clone(&cache);
            handles.push(thread::spawn(move || {
                for i in 0..ops_per_thread {
                    let key = std::format!("key_{}", i % 200);
                    let mut guard = cache.lock().unwrap();

                    match i % 4 {
                        0 => {
                            guard.put(key, i);
                        }
                        1 => {
                            let _ = guard.get(&key);
                        }
                        2 => {
                            let _ = guard.get_mut(&key);
                        }
                        3 => {
                            let _ = guard.remove(&key);
                        }
                        _ => unreachable!(),
                    }

                    if i == 500 && t == 0 {
                        guard.clear();
                    }
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        let guard = cache.lock().unwrap();
        assert!(guard.len() <= 100);
        assert_eq!(guard.iter().count(), guard.len());
    }
}
