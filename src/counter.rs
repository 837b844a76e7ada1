//! Keyed Counter
//!
//! Tallies values under a key derived from each value, keeping the tallies in
//! ascending key order.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

/// Counts values grouped by a key extracted from each value.
///
/// # Examples
///
/// ```
/// use utils_rs::Counter;
///
/// let mut by_length = Counter::new(|word: &&str| word.len());
/// by_length.count_all(["a", "bb", "cc", "ddd", "ee"].iter());
///
/// assert_eq!(by_length.get(&2), 3);
/// assert_eq!(by_length.get(&4), 0);
/// assert_eq!(by_length.by_count_desc(), [(2, 3), (1, 1), (3, 1)]);
/// ```
pub struct Counter<K, V, F> {
    extract: F,
    counts: BTreeMap<K, usize>,
    total: usize,
    _values: PhantomData<fn(&V)>,
}

impl<K, V, F> Counter<K, V, F>
where
    K: Ord,
    F: Fn(&V) -> K,
{
    /// Creates an empty counter that groups values by `extract`.
    pub fn new(extract: F) -> Self {
        Counter {
            extract,
            counts: BTreeMap::new(),
            total: 0,
            _values: PhantomData,
        }
    }

    /// Counts one value under its extracted key.
    pub fn count(&mut self, value: &V) {
        let key = (self.extract)(value);
        *self.counts.entry(key).or_insert(0) += 1;
        self.total += 1;
    }

    /// Counts every value yielded by `values`.
    pub fn count_all<'a, I>(&mut self, values: I)
    where
        I: IntoIterator<Item = &'a V>,
        V: 'a,
    {
        for value in values {
            self.count(value);
        }
    }

    /// Number of values counted under `key`.
    pub fn get(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// All tallies in ascending key order.
    pub fn counts(&self) -> &BTreeMap<K, usize> {
        &self.counts
    }

    /// Number of distinct keys seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if nothing has been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of values counted across all keys.
    pub fn total(&self) -> usize {
        self.total
    }
}

impl<K, V, F> Counter<K, V, F>
where
    K: Ord + Clone,
    F: Fn(&V) -> K,
{
    /// Tallies ordered by descending count; equal counts keep ascending key
    /// order.
    pub fn by_count_desc(&self) -> Vec<(K, usize)> {
        let mut out: Vec<(K, usize)> = self
            .counts
            .iter()
            .map(|(k, &n)| (k.clone(), n))
            .collect();
        // stable sort keeps the map's key order among ties
        out.sort_by(|a, b| b.1.cmp(&a.1));
        out
    }
}

impl<K: fmt::Debug, V, F> fmt::Debug for Counter<K, V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Counter")
            .field("counts", &self.counts)
            .field("total", &self.total)
            .finish()
    }
}
