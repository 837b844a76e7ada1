//! Blocking Queue Metrics
//!
//! Counters kept by [`BlockingQueue`](crate::concurrent::BlockingQueue). They
//! live under the queue's lock, so a snapshot is always consistent with
//! itself.

extern crate alloc;

use super::Metrics;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Counters for a blocking queue.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueueMetrics {
    /// Elements accepted by `push`
    pub pushed: u64,
    /// Elements handed to a consumer by any pop variant
    pub popped: u64,
    /// Timed pops that gave up without an element
    pub timeouts: u64,
    /// Elements discarded by `clear`
    pub cleared: u64,
}

impl QueueMetrics {
    /// Creates a zeroed set of queue metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Elements currently accounted as in the queue.
    pub fn in_flight(&self) -> u64 {
        self.pushed - self.popped - self.cleared
    }

    /// Converts queue metrics to a BTreeMap for reporting
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();
        metrics.insert("cleared".to_string(), self.cleared as f64);
        metrics.insert("in_flight".to_string(), self.in_flight() as f64);
        metrics.insert("popped".to_string(), self.popped as f64);
        metrics.insert("pushed".to_string(), self.pushed as f64);
        metrics.insert("timeouts".to_string(), self.timeouts as f64);
        metrics
    }
}

impl Metrics for QueueMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn name(&self) -> &'static str {
        "BlockingQueue"
    }
}
