//! Configuration for the blocking queue.

use core::fmt;

/// Configuration for a [`BlockingQueue`](crate::concurrent::BlockingQueue).
///
/// The queue is unbounded; `initial_capacity` only pre-allocates room in the
/// backing buffer and never causes a push to be rejected.
///
/// # Examples
///
/// ```
/// use utils_rs::concurrent::BlockingQueue;
/// use utils_rs::config::BlockingQueueConfig;
///
/// let queue: BlockingQueue<u64> = BlockingQueue::init(BlockingQueueConfig {
///     initial_capacity: 1024,
/// });
/// assert!(queue.is_empty());
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockingQueueConfig {
    /// Number of elements to allocate room for up front.
    pub initial_capacity: usize,
}

impl fmt::Debug for BlockingQueueConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockingQueueConfig")
            .field("initial_capacity", &self.initial_capacity)
            .finish()
    }
}
