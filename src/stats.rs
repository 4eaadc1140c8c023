//! Descriptive statistics over a buffer.
//!
//! Degenerate inputs return fixed values instead of failing: an empty buffer has a minimum,
//! maximum, median and mode of `T::default()`, and a mean and standard deviations of `0.0`.
//! [`median`], [`mode`] and [`Summary::new`] sort the buffer ascending (with
//! [`crate::quick_sort`]) as a side effect. Copy the buffer first to keep its order.

use num_traits::{AsPrimitive, Float};

use crate::Sample;

/// Return the smallest element of `v`, or `T::default()` if `v` is empty.
pub fn min_element<T: Copy + PartialOrd + Default>(v: &[T]) -> T {
    let Some((&first, rest)) = v.split_first() else {
        return T::default();
    };
    rest.iter().fold(first, |min, &x| if x < min { x } else { min })
}

/// Return the largest element of `v`, or `T::default()` if `v` is empty.
pub fn max_element<T: Copy + PartialOrd + Default>(v: &[T]) -> T {
    let Some((&first, rest)) = v.split_first() else {
        return T::default();
    };
    rest.iter().fold(first, |max, &x| if x > max { x } else { max })
}

/// Return the arithmetic mean of `v`, or `0.0` if `v` is empty.
pub fn mean<T: AsPrimitive<f64>>(v: &[T]) -> f64 {
    if v.is_empty() {
        return 0.0;
    }
    v.iter().map(|&x| x.as_()).sum::<f64>() / v.len() as f64
}

/// Sort `v` ascending and return its middle element, or the average of the two middle elements
/// for an even length. Returns `T::default()` if `v` is empty.
///
/// The average rounds toward zero for integers, so the median of `[1, 2]` is `1`. It never
/// overflows `T`: the median of `[200u8, 200]` is `200`.
pub fn median<T: Sample>(v: &mut [T]) -> T {
    if v.is_empty() {
        return T::default();
    }

    crate::quick_sort(v);
    sorted_median(v)
}

/// Sort `v` ascending and return its most frequent value. When several values are equally
/// frequent, the smallest wins. Returns `T::default()` if `v` is empty; a single element is
/// returned without sorting.
///
/// Cost: one sort plus `n - 1` comparisons.
pub fn mode<T: Copy + PartialOrd + Default>(v: &mut [T]) -> T {
    match v.len() {
        0 => return T::default(),
        1 => return v[0],
        _ => (),
    }

    crate::quick_sort(v);
    sorted_mode(v)
}

// Median of a non-empty slice sorted ascending.
fn sorted_median<T: Sample>(sorted: &[T]) -> T {
    let n = sorted.len();
    let mid = n / 2;

    if n % 2 == 0 {
        midpoint(sorted[mid - 1], sorted[mid])
    } else {
        sorted[mid]
    }
}

// Average of `a <= b`, rounded toward zero. Only values of equal sign are subtracted, so no
// intermediate leaves the range of `T`.
fn midpoint<T: Sample>(a: T, b: T) -> T {
    let two = T::one() + T::one();

    if a >= T::zero() {
        a + (b - a) / two
    } else if b < T::zero() {
        b - (b - a) / two
    } else {
        (a + b) / two
    }
}

// Start of the longest run of equal neighbours in a non-empty slice sorted ascending, the first
// one on ties.
fn sorted_mode<T: Copy + PartialOrd>(sorted: &[T]) -> T {
    let mut mode = sorted[0];
    let mut best = 1usize;
    let mut run = 1usize;

    for i in 1..sorted.len() {
        if sorted[i] == sorted[i - 1] {
            run += 1;
            // Strictly greater: the first run to reach a length keeps it
            if run > best {
                best = run;
                mode = sorted[i];
            }
        } else {
            run = 1;
        }
    }

    mode
}

/// Return the population variance of `v`, or `0.0` if `v` is empty.
pub fn variance_population<T: AsPrimitive<f64>>(v: &[T]) -> f64 {
    if v.is_empty() {
        return 0.0;
    }
    squared_deviations(v) / v.len() as f64
}

/// Return the sample variance of `v` (Bessel-corrected), or `0.0` if `v` has fewer than two
/// elements.
pub fn variance_sample<T: AsPrimitive<f64>>(v: &[T]) -> f64 {
    if v.len() < 2 {
        return 0.0;
    }
    squared_deviations(v) / (v.len() - 1) as f64
}

/// Return the population standard deviation of `v`, or `0.0` if `v` is empty.
pub fn std_dev_population<T: AsPrimitive<f64>>(v: &[T]) -> f64 {
    Float::sqrt(variance_population(v))
}

/// Return the sample standard deviation of `v`, or `0.0` if `v` has fewer than two elements.
pub fn std_dev_sample<T: AsPrimitive<f64>>(v: &[T]) -> f64 {
    Float::sqrt(variance_sample(v))
}

// Sum of squared deviations from the mean.
fn squared_deviations<T: AsPrimitive<f64>>(v: &[T]) -> f64 {
    let m = mean(v);
    v.iter()
        .map(|&x| {
            let d = x.as_() - m;
            d * d
        })
        .sum()
}

/// Every statistic of a non-empty buffer, computed in one call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary<T> {
    /// Number of elements.
    pub count: usize,
    /// Smallest element.
    pub min: T,
    /// Largest element.
    pub max: T,
    /// Arithmetic mean.
    pub mean: f64,
    /// Middle element, or the average of the two middle elements.
    pub median: T,
    /// Most frequent element (smallest on ties).
    pub mode: T,
    /// Population standard deviation.
    pub std_dev_population: f64,
    /// Sample standard deviation, `0.0` for a single element.
    pub std_dev_sample: f64,
}

impl<T: Sample> Summary<T> {
    /// Summarize `v`, leaving it sorted ascending. Returns `None` if `v` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use kicksort::Summary;
    ///
    /// let mut v = [5, 3, 8, 1, 9, 3];
    /// let summary = Summary::new(&mut v).unwrap();
    /// assert_eq!((summary.min, summary.max), (1, 9));
    /// assert_eq!((summary.median, summary.mode), (4, 3));
    /// assert_eq!(v, [1, 3, 3, 5, 8, 9]);
    /// ```
    pub fn new(v: &mut [T]) -> Option<Self> {
        if v.is_empty() {
            return None;
        }

        // One sort serves the median, the mode and both extremes
        crate::quick_sort(v);
        debug_assert!(crate::is_sorted(v, crate::Direction::Ascending));

        Some(Self {
            count: v.len(),
            min: v[0],
            max: v[v.len() - 1],
            mean: mean(v),
            median: sorted_median(v),
            mode: sorted_mode(v),
            std_dev_population: std_dev_population(v),
            std_dev_sample: std_dev_sample(v),
        })
    }
}
