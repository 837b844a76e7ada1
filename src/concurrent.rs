//! Thread-Safe Data Structures
//!
//! This module provides the structures in this crate that synchronize
//! internally and can be shared between threads through an `Arc`.
//!
//! # Architecture
//!
//! Every structure here keeps its state behind a single
//! `parking_lot::Mutex`. Blocking operations park on a `parking_lot::Condvar`
//! tied to that mutex, so waiting releases the lock and waking re-acquires it
//! atomically.
//!
//! No operation ever holds more than one lock, so the structures cannot
//! deadlock against each other.
//!
//! ## Why not share `LruCache` here?
//!
//! Reading an LRU entry reorders the recency list, so every `get()` is a write.
//! A lock around the whole cache (`Mutex<LruCache<K, V>>`) is the honest
//! shape for that; the borrow checker already refuses to share an
//! [`LruCache`](crate::LruCache) without one.
//!
//! # Available Structures
//!
//! | Type | Description |
//! |------|-------------|
//! | [`BlockingQueue`] | Unbounded FIFO queue with blocking and timed pops |
//!
//! # Example
//!
//! ```rust
//! use utils_rs::concurrent::BlockingQueue;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let queue = Arc::new(BlockingQueue::new());
//!
//! let producer = {
//!     let queue = Arc::clone(&queue);
//!     thread::spawn(move || {
//!         for i in 0..100 {
//!             queue.push(i);
//!         }
//!     })
//! };
//!
//! let mut received = Vec::new();
//! for _ in 0..100 {
//!     received.push(queue.pop());
//! }
//! producer.join().unwrap();
//!
//! assert_eq!(received, (0..100).collect::<Vec<_>>());
//! ```
//!
//! # Thread Safety
//!
//! `BlockingQueue<T>` is `Send` and `Sync` whenever `T: Send`.

mod queue;

pub use self::queue::BlockingQueue;
