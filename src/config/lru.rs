//! Configuration for the Least Recently Used (LRU) cache.
//!
//! The LRU cache is bounded by entry count only. `capacity` is fixed for the
//! lifetime of the cache; once it is reached, every insertion of a new key
//! evicts the least recently used entry.
//!
//! # Examples
//!
//! ```
//! use utils_rs::config::LruCacheConfig;
//! use utils_rs::LruCache;
//! use core::num::NonZeroUsize;
//!
//! let config = LruCacheConfig {
//!     capacity: NonZeroUsize::new(3).unwrap(),
//! };
//! let mut cache: LruCache<&str, i32> = LruCache::init(config, None);
//! cache.put("one", 1);
//! assert_eq!(cache.len(), 1);
//! ```

use crate::error::ConfigError;
use core::fmt;
use core::num::NonZeroUsize;

/// Configuration for an LRU (Least Recently Used) cache.
///
/// # Fields
///
/// - `capacity`: Maximum number of entries the cache can hold. A zero-capacity
///   cache cannot be expressed; use [`LruCacheConfig::try_from`] to validate a
///   plain `usize`.
///
/// # Examples
///
/// ```
/// use utils_rs::config::LruCacheConfig;
/// use utils_rs::error::ConfigError;
///
/// let config = LruCacheConfig::try_from(500).unwrap();
/// assert_eq!(config.capacity.get(), 500);
///
/// assert_eq!(LruCacheConfig::try_from(0).unwrap_err(), ConfigError::ZeroCapacity);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: NonZeroUsize,
}

impl TryFrom<usize> for LruCacheConfig {
    type Error = ConfigError;

    fn try_from(capacity: usize) -> Result<Self, Self::Error> {
        let capacity = NonZeroUsize::new(capacity).ok_or(ConfigError::ZeroCapacity)?;
        Ok(LruCacheConfig { capacity })
    }
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
