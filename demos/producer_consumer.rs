//! Producer/consumer pipeline over a `BlockingQueue`, with an LRU cache of
//! finished results.
//!
//! Values carry a `Drop` impl that logs, so running with
//! `RUST_LOG=producer_consumer=debug,utils_rs=trace` shows each job moving
//! through the queue exactly once and being dropped exactly once, either when
//! evicted from the cache or at shutdown.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utils_rs::{BlockingQueue, LruCache, Metrics};

/// A named job whose creation and destruction are logged.
#[derive(Debug)]
struct Job {
    value: i64,
    name: String,
}

impl Job {
    fn new(name: impl Into<String>, value: i64) -> Self {
        let job = Job {
            value,
            name: name.into(),
        };
        debug!(name = %job.name, value = job.value, "job created");
        job
    }
}

impl Drop for Job {
    fn drop(&mut self) {
        debug!(name = %self.name, value = self.value, "job dropped");
    }
}

const PRODUCERS: usize = 3;
const CONSUMERS: usize = 2;
const JOBS_PER_PRODUCER: usize = 8;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "producer_consumer=info,utils_rs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let queue: Arc<BlockingQueue<Job>> = Arc::new(BlockingQueue::new());
    let results = Arc::new(Mutex::new(LruCache::new(
        NonZeroUsize::new(5).expect("non-zero"),
    )));

    let producers: Vec<_> = (0..PRODUCERS)
        .map(|p| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                for i in 0..JOBS_PER_PRODUCER {
                    queue.push(Job::new(format!("p{p}-job{i}"), (p * 100 + i) as i64));
                    thread::sleep(Duration::from_millis(2));
                }
            })
        })
        .collect();

    let consumers: Vec<_> = (0..CONSUMERS)
        .map(|c| {
            let queue = Arc::clone(&queue);
            let results = Arc::clone(&results);
            thread::spawn(move || {
                let mut handled = 0usize;
                // an idle queue for 100ms means the producers are done
                while let Some(job) = queue.pop_timeout(Duration::from_millis(100)) {
                    let squared = job.value * job.value;
                    let mut cache = results.lock().expect("results lock poisoned");
                    if let Some((evicted, _)) = cache.put(job.name.clone(), (job, squared)) {
                        debug!(consumer = c, %evicted, "result evicted");
                    }
                    handled += 1;
                }
                info!(consumer = c, handled, "consumer finished");
                handled
            })
        })
        .collect();

    for producer in producers {
        producer.join().expect("producer panicked");
    }
    let handled: usize = consumers
        .into_iter()
        .map(|c| c.join().expect("consumer panicked"))
        .sum();

    info!(handled, expected = PRODUCERS * JOBS_PER_PRODUCER, "pipeline drained");
    info!(metrics = ?queue.metrics(), "{}", queue.name());

    let cache = results.lock().expect("results lock poisoned");
    for (name, (job, squared)) in cache.iter() {
        info!(%name, value = job.value, squared, "recent result");
    }
    info!(metrics = ?cache.metrics(), "{}", cache.name());
}
