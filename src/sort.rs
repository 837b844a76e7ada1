//! Sorting and Selection
//!
//! In-place comparison sorts over slices, a selection routine, and two
//! non-comparison sorts for `i32`.
//!
//! Every comparison sort comes in two forms: `xxx_sort` for `T: Ord` and
//! `xxx_sort_by` taking a comparator, mirroring `slice::sort` and
//! `slice::sort_by`.
//!
//! | Function | Stable | Time (avg / worst) | Extra space |
//! |----------|--------|--------------------|-------------|
//! | [`quick_sort`] | no | O(n log n) / O(n²) | O(log n) |
//! | [`merge_sort`] | yes | O(n log n) / O(n log n) | O(n) |
//! | [`heap_sort`] | no | O(n log n) / O(n log n) | O(1) |
//! | [`insertion_sort`] | yes | O(n²) / O(n²) | O(1) |
//! | [`counting_sort`] | yes | O(n + k) | O(n + k) |
//! | [`radix_sort`] | yes | O(n · d) | O(n) |

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

/// Sorts `v` with quicksort.
///
/// # Examples
///
/// ```
/// let mut v = [5, 2, 9, 1, 5, 6];
/// utils_rs::sort::quick_sort(&mut v);
/// assert_eq!(v, [1, 2, 5, 5, 6, 9]);
/// ```
pub fn quick_sort<T: Ord>(v: &mut [T]) {
    quick_sort_by(v, T::cmp);
}

/// Sorts `v` with quicksort using `compare`.
///
/// Partitions with the Lomuto scheme around the last element. Recursion goes
/// into the smaller side only, keeping stack depth logarithmic even on
/// adversarial input.
pub fn quick_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quick_sort_rec(v, &mut compare);
}

fn quick_sort_rec<T, F>(mut v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while v.len() > 1 {
        let p = partition(v, compare);
        let (left, right) = core::mem::take(&mut v).split_at_mut(p);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quick_sort_rec(left, compare);
            v = right;
        } else {
            quick_sort_rec(right, compare);
            v = left;
        }
    }
}

/// Lomuto partition around the last element; returns the pivot's final index.
fn partition<T, F>(v: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let pivot = v.len() - 1;
    let mut store = 0;
    for i in 0..pivot {
        if compare(&v[i], &v[pivot]) != Ordering::Greater {
            v.swap(i, store);
            store += 1;
        }
    }
    v.swap(store, pivot);
    store
}

/// Sorts `v` with a stable merge sort.
pub fn merge_sort<T: Ord + Clone>(v: &mut [T]) {
    merge_sort_by(v, T::cmp);
}

/// Sorts `v` with a stable merge sort using `compare`.
///
/// Equal elements keep their relative order.
pub fn merge_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() < 2 {
        return;
    }
    let mut buf = v.to_vec();
    merge_sort_rec(v, &mut buf, &mut compare);
}

fn merge_sort_rec<T, F>(v: &mut [T], buf: &mut [T], compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return;
    }
    let mid = len / 2;
    {
        let (lo, hi) = v.split_at_mut(mid);
        let (buf_lo, buf_hi) = buf.split_at_mut(mid);
        merge_sort_rec(lo, buf_lo, compare);
        merge_sort_rec(hi, buf_hi, compare);
    }

    buf[..len].clone_from_slice(v);
    let (lo, hi) = buf[..len].split_at(mid);
    let (mut i, mut j) = (0, 0);
    for slot in v.iter_mut() {
        // take from the left run on ties to stay stable
        let take_left =
            j >= hi.len() || (i < lo.len() && compare(&hi[j], &lo[i]) != Ordering::Less);
        if take_left {
            slot.clone_from(&lo[i]);
            i += 1;
        } else {
            slot.clone_from(&hi[j]);
            j += 1;
        }
    }
}

/// Sorts `v` with heapsort.
pub fn heap_sort<T: Ord>(v: &mut [T]) {
    heap_sort_by(v, T::cmp);
}

/// Sorts `v` with heapsort using `compare`.
pub fn heap_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    for root in (0..len / 2).rev() {
        sift_down(v, root, len, &mut compare);
    }
    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(v, 0, end, &mut compare);
    }
}

fn sift_down<T, F>(v: &mut [T], mut root: usize, end: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = left + 1;
        if left < end && compare(&v[left], &v[largest]) == Ordering::Greater {
            largest = left;
        }
        if right < end && compare(&v[right], &v[largest]) == Ordering::Greater {
            largest = right;
        }
        if largest == root {
            return;
        }
        v.swap(root, largest);
        root = largest;
    }
}

/// Sorts `v` with insertion sort. Fast for short or nearly sorted input.
pub fn insertion_sort<T: Ord>(v: &mut [T]) {
    insertion_sort_by(v, T::cmp);
}

/// Sorts `v` with a stable insertion sort using `compare`.
pub fn insertion_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && compare(&v[j - 1], &v[j]) == Ordering::Greater {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Returns the `k`-th smallest element (0-based) of `v`.
///
/// `v` is left untouched; the selection runs on a copy. Returns `None` when
/// `k` is out of bounds.
///
/// # Examples
///
/// ```
/// let v = [7, 10, 4, 3, 20, 15];
/// assert_eq!(utils_rs::sort::quick_select(&v, 2), Some(7));
/// assert_eq!(utils_rs::sort::quick_select(&v, 6), None);
/// ```
pub fn quick_select<T: Ord + Clone>(v: &[T], k: usize) -> Option<T> {
    quick_select_by(v, k, T::cmp)
}

/// Returns the `k`-th smallest element of `v` under `compare`.
pub fn quick_select_by<T, F>(v: &[T], k: usize, mut compare: F) -> Option<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if k >= v.len() {
        return None;
    }
    let mut work = v.to_vec();
    let mut slice = &mut work[..];
    let mut k = k;
    loop {
        let p = partition(slice, &mut compare);
        match k.cmp(&p) {
            Ordering::Equal => return Some(slice[p].clone()),
            Ordering::Less => slice = &mut core::mem::take(&mut slice)[..p],
            Ordering::Greater => {
                k -= p + 1;
                slice = &mut core::mem::take(&mut slice)[p + 1..];
            }
        }
    }
}

/// Returns true if `v` is in non-decreasing order.
pub fn is_sorted<T: Ord>(v: &[T]) -> bool {
    is_sorted_by(v, T::cmp)
}

/// Returns true if no adjacent pair of `v` compares as `Greater`.
pub fn is_sorted_by<T, F>(v: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    v.windows(2).all(|w| compare(&w[0], &w[1]) != Ordering::Greater)
}

/// Sorts `v` by counting occurrences of each value.
///
/// Memory grows with the spread between the smallest and largest value, so
/// this suits dense ranges of small integers. Negative values are supported.
/// Sparse input, where the spread dwarfs the length, is sorted with
/// [`radix_sort`] instead.
pub fn counting_sort(v: &mut [i32]) {
    let (min, max) = match (v.iter().min(), v.iter().max()) {
        (Some(&min), Some(&max)) => (min, max),
        _ => return,
    };
    let span = (i64::from(max) - i64::from(min)) as u64 + 1;
    let limit = v.len().saturating_mul(4).max(1 << 16) as u64;
    if span > limit {
        return radix_sort(v);
    }
    let span = span as usize;
    let mut counts: Vec<usize> = Vec::new();
    if counts.try_reserve_exact(span).is_err() {
        return radix_sort(v);
    }
    counts.resize(span, 0);
    for &x in v.iter() {
        counts[(i64::from(x) - i64::from(min)) as usize] += 1;
    }
    let mut out = v.iter_mut();
    for (offset, &count) in counts.iter().enumerate() {
        let value = (i64::from(min) + offset as i64) as i32;
        for slot in out.by_ref().take(count) {
            *slot = value;
        }
    }
}

/// Sorts `v` with a least-significant-digit radix sort, one byte per pass.
///
/// Negative values are handled by flipping the sign bit so that the unsigned
/// byte order matches signed order.
pub fn radix_sort(v: &mut [i32]) {
    if v.len() < 2 {
        return;
    }
    let mut keys: Vec<u32> = v.iter().map(|&x| (x as u32) ^ 0x8000_0000).collect();
    let mut buf = vec![0u32; keys.len()];
    for shift in (0..32).step_by(8) {
        let mut counts = [0usize; 257];
        for &k in &keys {
            counts[((k >> shift) & 0xff) as usize + 1] += 1;
        }
        for b in 0..256 {
            counts[b + 1] += counts[b];
        }
        for &k in &keys {
            let bucket = ((k >> shift) & 0xff) as usize;
            buf[counts[bucket]] = k;
            counts[bucket] += 1;
        }
        core::mem::swap(&mut keys, &mut buf);
    }
    for (slot, k) in v.iter_mut().zip(keys) {
        *slot = (k ^ 0x8000_0000) as i32;
    }
}
