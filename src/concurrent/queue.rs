//! Blocking FIFO Queue
//!
//! An unbounded multi-producer, multi-consumer queue. Producers never block;
//! consumers may poll, block indefinitely, or block until a deadline.
//!
//! # How It Works
//!
//! ```text
//!   push ──▶ ┌──────────────────────────────┐ ──▶ pop / pop_timeout / try_pop
//!            │ Mutex<State>                 │
//!            │   items:   VecDeque<T>       │
//!            │   metrics: QueueMetrics      │
//!            └──────────────┬───────────────┘
//!                           │ notify_one
//!                     ┌─────▼─────┐
//!                     │  Condvar  │  parked consumers
//!                     └───────────┘
//! ```
//!
//! A woken consumer re-checks the queue under the lock before taking an
//! element, so spurious wake-ups and races between consumers never hand out
//! the same element twice or return from `pop` empty-handed.
//!
//! # Liveness
//!
//! [`BlockingQueue::pop`] waits until an element arrives. If no producer ever
//! pushes again, it waits forever; use [`BlockingQueue::pop_timeout`] or
//! [`BlockingQueue::pop_until`] wherever that matters.

use crate::config::BlockingQueueConfig;
use crate::metrics::{Metrics, QueueMetrics};
use parking_lot::{Condvar, Mutex};
use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::string::String;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

struct State<T> {
    items: VecDeque<T>,
    metrics: QueueMetrics,
}

impl<T> State<T> {
    fn take(&mut self) -> Option<T> {
        let item = self.items.pop_front()?;
        self.metrics.popped += 1;
        Some(item)
    }
}

/// A thread-safe, unbounded FIFO queue with blocking pops.
///
/// # Examples
///
/// ```
/// use utils_rs::concurrent::BlockingQueue;
/// use std::time::Duration;
///
/// let queue = BlockingQueue::new();
/// queue.push(10);
/// queue.push(20);
///
/// assert_eq!(queue.len(), 2);
/// assert_eq!(queue.pop(), 10);
/// assert_eq!(queue.try_pop(), Some(20));
/// assert_eq!(queue.pop_timeout(Duration::from_millis(10)), None);
/// ```
pub struct BlockingQueue<T> {
    state: Mutex<State<T>>,
    available: Condvar,
}

impl<T> BlockingQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        BlockingQueue::init(BlockingQueueConfig::default())
    }

    /// Creates an empty queue from a configuration.
    pub fn init(config: BlockingQueueConfig) -> Self {
        BlockingQueue {
            state: Mutex::new(State {
                items: VecDeque::with_capacity(config.initial_capacity),
                metrics: QueueMetrics::new(),
            }),
            available: Condvar::new(),
        }
    }

    /// Appends `value` to the back of the queue and wakes one waiting
    /// consumer, if any. Never blocks beyond acquiring the lock.
    pub fn push(&self, value: T) {
        {
            let mut state = self.state.lock();
            state.items.push_back(value);
            state.metrics.pushed += 1;
        }
        self.available.notify_one();
    }

    /// Removes the front element if one is present, without waiting.
    pub fn try_pop(&self) -> Option<T> {
        self.state.lock().take()
    }

    /// Removes the front element, waiting for as long as it takes for one to
    /// arrive.
    ///
    /// This cannot be cancelled. See the module documentation on liveness.
    pub fn pop(&self) -> T {
        let mut state = self.state.lock();
        loop {
            if let Some(item) = state.take() {
                return item;
            }
            self.available.wait(&mut state);
        }
    }

    /// Removes the front element, waiting at most `timeout` for one to
    /// arrive.
    ///
    /// The wait is measured on the monotonic clock. On timeout the queue is
    /// left untouched and `None` is returned. A timeout too large to express
    /// as a deadline waits without limit.
    pub fn pop_timeout(&self, timeout: Duration) -> Option<T> {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.pop_until(deadline),
            None => Some(self.pop()),
        }
    }

    /// Removes the front element, waiting until `deadline` at the latest.
    ///
    /// A deadline already in the past behaves like [`try_pop`](Self::try_pop)
    /// except that a miss is counted as a timeout.
    pub fn pop_until(&self, deadline: Instant) -> Option<T> {
        let mut state = self.state.lock();
        loop {
            if let Some(item) = state.take() {
                return Some(item);
            }
            if self.available.wait_until(&mut state, deadline).timed_out() {
                // a push may have landed between the timeout and reacquiring
                if let Some(item) = state.take() {
                    return Some(item);
                }
                state.metrics.timeouts += 1;
                trace!("timed out waiting for queue element");
                return None;
            }
        }
    }

    /// Returns the number of queued elements at the time of the call.
    pub fn len(&self) -> usize {
        self.state.lock().items.len()
    }

    /// Returns true if the queue held no elements at the time of the call.
    pub fn is_empty(&self) -> bool {
        self.state.lock().items.is_empty()
    }

    /// Discards every queued element in one step.
    ///
    /// Consumers already blocked in `pop` keep waiting for the next push.
    pub fn clear(&self) {
        let discarded = {
            let mut state = self.state.lock();
            let discarded = state.items.len();
            state.items.clear();
            state.metrics.cleared += discarded as u64;
            discarded
        };
        debug!(discarded, "cleared blocking queue");
    }

    /// Returns a snapshot of the queue counters.
    pub fn stats(&self) -> QueueMetrics {
        self.state.lock().metrics.clone()
    }
}

impl<T> Default for BlockingQueue<T> {
    fn default() -> Self {
        BlockingQueue::new()
    }
}

impl<T> Metrics for BlockingQueue<T> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.state.lock().metrics.to_btreemap()
    }

    fn name(&self) -> &'static str {
        "BlockingQueue"
    }
}

impl<T> fmt::Debug for BlockingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockingQueue")
            .field("len", &self.len())
            .finish()
    }
}
