#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Quick Reference
//!
//! | Item | Description | Needs |
//! |------|-------------|-------|
//! | [`LruCache`] | Bounded cache evicting the least recently used entry | `alloc` |
//! | [`BlockingQueue`] | Unbounded FIFO with blocking and timed pops | `concurrent` |
//! | [`sort`] | Quick/merge/heap/insertion sort, selection, counting/radix sort | `alloc` |
//! | [`stats`] | Mean, median, mode, variance, correlation, percentiles | `std` |
//! | [`strings`] | Split, join, trim, replace, numeric parsing | `alloc` |
//! | [`files`] | Read, write, append, list with path-carrying errors | `std` |
//! | [`Counter`] | Tallies values grouped by an extracted key | `alloc` |
//!
//! ## Performance Characteristics
//!
//! | Structure | Operation | Cost |
//! |-----------|-----------|------|
//! | `LruCache` | get / put / remove / contains | O(1) average |
//! | `LruCache` | clear | O(n) |
//! | `BlockingQueue` | push / try_pop | O(1) amortized, one lock |
//! | `BlockingQueue` | clear | O(n), one lock |
//!
//! ## Code Examples
//!
//! ### LRU (Least Recently Used)
//!
//! ```rust
//! use utils_rs::LruCache;
//! use utils_rs::config::LruCacheConfig;
//!
//! let config = LruCacheConfig::try_from(2).unwrap();
//! let mut cache = LruCache::init(config, None);
//!
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");       // "a" becomes most recently used
//! cache.put("c", 3);     // evicts "b"
//!
//! assert!(cache.contains(&"a"));
//! assert!(!cache.contains(&"b"));
//! ```
//!
//! A zero capacity is rejected before a cache exists:
//!
//! ```rust
//! use utils_rs::config::LruCacheConfig;
//! use utils_rs::error::ConfigError;
//!
//! assert_eq!(LruCacheConfig::try_from(0), Err(ConfigError::ZeroCapacity));
//! ```
//!
//! ### Blocking Queue
//!
//! ```rust
//! # #[cfg(feature = "concurrent")]
//! # {
//! use utils_rs::BlockingQueue;
//! use std::time::Duration;
//!
//! let queue = BlockingQueue::new();
//! queue.push("job");
//! assert_eq!(queue.pop_timeout(Duration::from_millis(5)), Some("job"));
//! assert_eq!(queue.pop_timeout(Duration::from_millis(5)), None);
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`lru`]: Least Recently Used cache implementation
//! - [`concurrent`]: Thread-safe structures (requires `concurrent` feature)
//! - [`config`]: Configuration structures
//! - [`metrics`]: Counters and the [`Metrics`] reporting trait
//! - [`error`]: Error types
//! - [`sort`], [`stats`], [`strings`], [`files`], [`counter`]: utility functions

#![no_std]

#[cfg(any(feature = "std", not(feature = "hashbrown")))]
extern crate std;

/// Index-linked doubly linked list with slot reuse.
///
/// **Note**: This module is internal infrastructure backing [`LruCache`].
pub(crate) mod list;

/// Configuration structures.
///
/// Provides configuration structures for the bounded and blocking data
/// structures.
pub mod config;

/// Error types.
pub mod error;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least recently used items when
/// the capacity is reached.
pub mod lru;

/// Metrics system.
///
/// Each data structure tracks its own counters while implementing a common
/// reporting interface.
pub mod metrics;

/// Thread-safe data structures.
///
/// Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod concurrent;

/// Sorting and selection algorithms.
pub mod sort;

/// Descriptive statistics.
///
/// Available when the `std` feature is enabled.
#[cfg(feature = "std")]
pub mod stats;

/// String helpers.
pub mod strings;

/// File helpers.
///
/// Available when the `std` feature is enabled.
#[cfg(feature = "std")]
pub mod files;

/// Keyed counter.
pub mod counter;

pub use counter::Counter;
pub use lru::LruCache;
pub use metrics::Metrics;

#[cfg(feature = "concurrent")]
pub use concurrent::BlockingQueue;
