//! Descriptive Statistics
//!
//! Summary statistics over slices of numbers. Functions that reduce to a
//! floating point answer accept any `T: Copy + Into<f64>` and compute in
//! `f64`; `range`, `mode`, `sum` and `product` stay in `T`.
//!
//! Functions that are undefined for their input (the mean of nothing, the
//! variance of one value) return `None` instead of panicking or yielding NaN.
//!
//! # Examples
//!
//! ```
//! use utils_rs::stats::{self, Variance};
//!
//! let data = [2, 4, 4, 4, 5, 5, 7, 9];
//! assert_eq!(stats::mean(&data), Some(5.0));
//! assert_eq!(stats::median(&data), Some(4.5));
//! assert_eq!(stats::mode(&data), Some(4));
//! assert_eq!(stats::standard_deviation(&data, Variance::Population), Some(2.0));
//! ```

use std::collections::HashMap;
use std::hash::Hash;
use std::iter::{Product, Sum};
use std::vec::Vec;

/// Which denominator to use for [`variance`] and [`standard_deviation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variance {
    /// Divide by `n - 1` (Bessel's correction). For a sample of a larger
    /// population.
    #[default]
    Sample,
    /// Divide by `n`. For a complete population.
    Population,
}

fn to_f64<T: Copy + Into<f64>>(values: &[T]) -> Vec<f64> {
    values.iter().map(|&v| v.into()).collect()
}

fn sorted_f64<T: Copy + Into<f64>>(values: &[T]) -> Vec<f64> {
    let mut sorted = to_f64(values);
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Arithmetic mean. `None` for an empty slice.
pub fn mean<T: Copy + Into<f64>>(values: &[T]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let total: f64 = values.iter().map(|&v| v.into()).sum();
    Some(total / values.len() as f64)
}

/// Middle value of the sorted data; the mean of the two middle values for
/// even lengths. `None` for an empty slice.
pub fn median<T: Copy + Into<f64>>(values: &[T]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sorted = sorted_f64(values);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Most frequent value. Among equally frequent values the one that appears
/// first wins. `None` for an empty slice.
pub fn mode<T: Copy + Eq + Hash>(values: &[T]) -> Option<T> {
    let mut counts: HashMap<T, usize> = HashMap::with_capacity(values.len());
    for &v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    let mut best: Option<(T, usize)> = None;
    for &v in values {
        let count = counts.get(&v).copied().unwrap_or(0);
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((v, count)),
        }
    }
    best.map(|(v, _)| v)
}

/// Mean squared deviation from the mean. `None` for fewer than two values.
pub fn variance<T: Copy + Into<f64>>(values: &[T], kind: Variance) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let squared: f64 = values
        .iter()
        .map(|&v| {
            let diff = v.into() - mean;
            diff * diff
        })
        .sum();
    let denominator = match kind {
        Variance::Sample => values.len() - 1,
        Variance::Population => values.len(),
    };
    Some(squared / denominator as f64)
}

/// Square root of [`variance`]. `None` for fewer than two values.
pub fn standard_deviation<T: Copy + Into<f64>>(values: &[T], kind: Variance) -> Option<f64> {
    variance(values, kind).map(f64::sqrt)
}

/// Smallest and largest value, in that order. `None` for an empty slice.
pub fn range<T: Copy + PartialOrd>(values: &[T]) -> Option<(T, T)> {
    let (&first, rest) = values.split_first()?;
    Some(rest.iter().fold((first, first), |(lo, hi), &v| {
        (if v < lo { v } else { lo }, if v > hi { v } else { hi })
    }))
}

/// Sum of all values; zero for an empty slice.
pub fn sum<T: Copy + Sum<T>>(values: &[T]) -> T {
    values.iter().copied().sum()
}

/// Product of all values; one for an empty slice.
pub fn product<T: Copy + Product<T>>(values: &[T]) -> T {
    values.iter().copied().product()
}

/// Pearson correlation coefficient of `x` and `y`.
///
/// Returns `None` when the slices differ in length or hold fewer than two
/// values. If either side is constant the coefficient is undefined and
/// `0.0` is returned.
pub fn correlation<X, Y>(x: &[X], y: &[Y]) -> Option<f64>
where
    X: Copy + Into<f64>,
    Y: Copy + Into<f64>,
{
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    let mean_x = mean(x)?;
    let mean_y = mean(y)?;

    let mut numerator = 0.0;
    let mut spread_x = 0.0;
    let mut spread_y = 0.0;
    for (&a, &b) in x.iter().zip(y) {
        let dx = a.into() - mean_x;
        let dy = b.into() - mean_y;
        numerator += dx * dy;
        spread_x += dx * dx;
        spread_y += dy * dy;
    }

    if spread_x == 0.0 || spread_y == 0.0 {
        return Some(0.0);
    }
    Some(numerator / (spread_x * spread_y).sqrt())
}

/// Computes each percentile in `percentiles` (each in `0.0..=100.0`).
///
/// Uses linear interpolation between the two closest ranks. Returns `None`
/// if `values` or `percentiles` is empty, or if any percentile lies outside
/// `[0, 100]`.
///
/// # Examples
///
/// ```
/// let p = utils_rs::stats::percentiles(&[1, 2, 3, 4, 5], &[0.0, 25.0, 50.0, 100.0]);
/// assert_eq!(p, Some(vec![1.0, 2.0, 3.0, 5.0]));
/// ```
pub fn percentiles<T: Copy + Into<f64>>(values: &[T], percentiles: &[f64]) -> Option<Vec<f64>> {
    if values.is_empty() || percentiles.is_empty() {
        return None;
    }
    if percentiles.iter().any(|p| !(0.0..=100.0).contains(p)) {
        return None;
    }

    let sorted = sorted_f64(values);
    let last = sorted.len() - 1;
    let result = percentiles
        .iter()
        .map(|&p| {
            let rank = p / 100.0 * last as f64;
            let lower = rank.floor() as usize;
            let upper = (rank.ceil() as usize).min(last);
            if lower == upper {
                sorted[lower]
            } else {
                let weight = rank - lower as f64;
                sorted[lower] + weight * (sorted[upper] - sorted[lower])
            }
        })
        .collect();
    Some(result)
}
