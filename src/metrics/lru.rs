//! LRU Cache Metrics
//!
//! Metrics specific to the LRU (Least Recently Used) cache.

extern crate alloc;

use super::{CoreCacheMetrics, Metrics};
use alloc::collections::BTreeMap;
use alloc::string::String;

/// LRU metrics (extends [`CoreCacheMetrics`])
///
/// LRU uses only the core counters today; the wrapper keeps the shape every
/// cache metrics type shares.
#[derive(Debug, Default, Clone)]
pub struct LruCacheMetrics {
    /// Core metrics common to all caches
    pub core: CoreCacheMetrics,
}

impl LruCacheMetrics {
    /// Creates a zeroed set of LRU metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts LRU metrics to a BTreeMap for reporting
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        self.core.to_btreemap()
    }
}

impl Metrics for LruCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn name(&self) -> &'static str {
        "LRU"
    }
}
