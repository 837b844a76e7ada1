//! Configuration Module
//!
//! Configuration structures for the data structures in this crate. Each
//! structure has its own dedicated configuration struct with public fields.
//!
//! # Design Philosophy
//!
//! Configuration structs have all public fields for simple instantiation:
//!
//! - **Simple**: Just create the struct with all fields set
//! - **Type safety**: Invalid values (a zero capacity) are unrepresentable
//! - **Fallible entry points**: `TryFrom<usize>` for callers holding a plain
//!   number, returning [`ConfigError`](crate::error::ConfigError)
//!
//! # Configs
//!
//! | Config | Structure | Description |
//! |--------|-----------|-------------|
//! | `LruCacheConfig` | [`LruCache`](crate::LruCache) | Entry-count bound for the LRU cache |
//! | `BlockingQueueConfig` | `BlockingQueue` | Initial allocation for the queue (requires `concurrent`) |
//!
//! # Examples
//!
//! ```
//! use utils_rs::config::LruCacheConfig;
//! use utils_rs::LruCache;
//! use core::num::NonZeroUsize;
//!
//! let config = LruCacheConfig {
//!     capacity: NonZeroUsize::new(1_000).unwrap(),
//! };
//! let cache: LruCache<String, Vec<u8>> = LruCache::init(config, None);
//! assert_eq!(cache.cap().get(), 1_000);
//!
//! // A zero capacity is rejected
//! assert!(LruCacheConfig::try_from(0).is_err());
//! ```

pub mod lru;
#[cfg(feature = "concurrent")]
pub mod queue;

pub use lru::LruCacheConfig;
#[cfg(feature = "concurrent")]
pub use queue::BlockingQueueConfig;
