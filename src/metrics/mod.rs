//! Metrics System
//!
//! Provides a small metrics system for the data structures in this crate
//! using BTreeMap-based reporting. Each structure tracks its own counters
//! while implementing the common [`Metrics`] trait.
//!
//! # Why BTreeMap over HashMap?
//!
//! - **Deterministic ordering**: Metrics always appear in consistent order
//! - **Reproducible output**: Test assertions and logs compare cleanly
//!
//! The performance difference (O(log n) vs O(1)) is negligible with a handful
//! of metric keys.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

pub mod lru;
#[cfg(feature = "concurrent")]
pub mod queue;

pub use lru::LruCacheMetrics;
#[cfg(feature = "concurrent")]
pub use queue::QueueMetrics;

/// Counters shared by cache implementations.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CoreCacheMetrics {
    /// Total number of lookups (`get`/`get_mut`) made to the cache
    pub requests: u64,

    /// Number of lookups that found their key
    pub cache_hits: u64,

    /// Number of new keys inserted
    pub insertions: u64,

    /// Number of puts that replaced the value of an existing key
    pub updates: u64,

    /// Number of entries evicted to make room for a new key
    pub evictions: u64,

    /// Number of entries removed explicitly (`remove`, `pop_lru`)
    pub removals: u64,
}

impl CoreCacheMetrics {
    /// Creates a zeroed set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a lookup that found its key.
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    /// Records a lookup that did not find its key.
    ///
    /// Misses are derived as `requests - cache_hits`.
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records a new key being stored.
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    /// Records an existing key receiving a new value.
    pub fn record_update(&mut self) {
        self.updates += 1;
    }

    /// Records an entry dropped due to the capacity bound.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Records an entry removed on request.
    pub fn record_removal(&mut self) {
        self.removals += 1;
    }

    /// Number of lookups that did not find their key.
    pub fn cache_misses(&self) -> u64 {
        self.requests - self.cache_hits
    }

    /// Calculates the cache hit rate
    ///
    /// # Returns
    /// A value between 0.0 and 1.0, or 0.0 if no requests have been made
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Convert core metrics to BTreeMap for reporting
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        // Basic counters
        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert("cache_misses".to_string(), self.cache_misses() as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("removals".to_string(), self.removals as f64);
        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert("updates".to_string(), self.updates as f64);

        // Rates (0.0 to 1.0)
        metrics.insert("hit_rate".to_string(), self.hit_rate());

        metrics
    }
}

/// Uniform interface for reading metrics from any structure in this crate.
pub trait Metrics {
    /// Returns all metrics as key-value pairs, sorted by key.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Short name identifying the structure (e.g. "LRU").
    fn name(&self) -> &'static str;
}
