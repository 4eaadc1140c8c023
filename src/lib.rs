#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

//! kicksort is a collection of small in-place sorting algorithms and descriptive statistics for
//! fixed-size buffers, meant for targets without a heap. Every operation borrows the caller's
//! slice for the duration of the call, allocates nothing, and keeps no state between calls.
//!
//! | Algorithm          | Stable | Worst-case comparisons |
//! |--------------------|--------|------------------------|
//! | [`bubble_sort`]    | yes    | `O(n^2)`               |
//! | [`quick_sort`]     | no     | `O(n^2)`               |
//! | [`insertion_sort`] | yes    | `O(n^2)`               |
//! | [`comb_sort`]      | no     | `O(n^2)`               |
//! | [`shell_sort`]     | no     | `O(n^2)`               |
//!
//! Every algorithm sorts ascending by default. To choose a direction, use the `_in` extension and
//! pass a [`Direction`] e.g. [`quick_sort_in`]`(&mut v, Direction::Descending)`. To sort using a
//! comparator, use the `_by` extension e.g. [`shell_sort_by`]`(&mut v, cmp)`. [`Algorithm`]
//! selects an algorithm at runtime.
//!
//! The statistics ([`min_element`], [`max_element`], [`mean`], [`median`], [`mode`],
//! [`std_dev_population`], [`std_dev_sample`], [`Summary`]) never fail: empty buffers produce
//! `T::default()` or `0.0`. [`median`] and [`mode`] sort their buffer ascending as a side effect.
//!
//! ```
//! use kicksort::{comb_sort_in, mean, median, Direction};
//!
//! let mut v = [5, 3, 8, 1, 9, 3];
//! assert_eq!(median(&mut v), 4);
//! assert!((mean(&v) - 4.8333).abs() < 1e-4);
//!
//! comb_sort_in(&mut v, Direction::Descending);
//! assert_eq!(v, [9, 8, 5, 3, 3, 1]);
//! ```

mod algorithm;
mod direction;
mod error;
mod exchange;
mod quick;
mod shift;
mod stats;
mod traits;
mod util;

#[cfg(feature = "internal")]
pub use quick::partition;

pub use algorithm::Algorithm;
pub use direction::Direction;
pub use error::BufferError;
pub use stats::{
    max_element, mean, median, min_element, mode, std_dev_population, std_dev_sample,
    variance_population, variance_sample, Summary,
};
pub use traits::Sample;
pub use util::{
    copy, index_of, index_of_or_sentinel, is_sorted, reverse, swap, try_copy, NOT_FOUND,
};

use core::cmp::Ordering;

// Expands to the ascending, directed, and comparator entry points of one algorithm.
macro_rules! entry_points {
    ($(#[$doc:meta])* $name:ident, $name_in:ident, $name_by:ident => $imp:path) => {
        $(#[$doc])*
        #[inline(always)]
        pub fn $name<T: PartialOrd>(v: &mut [T]) {
            sort_general(v, &mut <T as PartialOrd>::lt, $imp)
        }

        #[doc = concat!("Sort `v` in `direction` with [`", stringify!($name), "`].")]
        #[inline(always)]
        pub fn $name_in<T: PartialOrd>(v: &mut [T], direction: Direction) {
            match direction {
                Direction::Ascending => $name(v),
                Direction::Descending => sort_general(v, &mut <T as PartialOrd>::gt, $imp),
            }
        }

        #[doc = concat!(
            "Sort `v` with [`", stringify!($name), "`] and a comparison function `cmp`."
        )]
        #[inline(always)]
        pub fn $name_by<T>(v: &mut [T], mut cmp: impl FnMut(&T, &T) -> Ordering) {
            sort_general(v, &mut |x: &T, y: &T| cmp(x, y) == Ordering::Less, $imp)
        }
    };
}

entry_points! {
    /// Sort `v` ascending with bubble sort. Stable.
    ///
    /// Each pass ends at the previous pass's last swap, so nearly sorted input finishes early.
    ///
    /// Cost: `O(n^2)` comparisons and `O(n^2)` swaps.
    bubble_sort, bubble_sort_in, bubble_sort_by => exchange::bubble_sort
}

entry_points! {
    /// Sort `v` ascending with quicksort, using the last element of each range as its pivot.
    /// Not stable.
    ///
    /// Input that is already ordered takes the worst case.
    ///
    /// Cost: `O(n log n)` comparisons on average, `O(n^2)` in the worst case.
    quick_sort, quick_sort_in, quick_sort_by => quick::quick_sort
}

entry_points! {
    /// Sort `v` ascending with insertion sort. Stable.
    ///
    /// Cost: `O(n^2)` comparisons and `O(n^2)` moves.
    insertion_sort, insertion_sort_in, insertion_sort_by => shift::insertion_sort
}

entry_points! {
    /// Sort `v` ascending with comb sort (gap shrink factor `1.3`). Not stable.
    ///
    /// Cost: `O(n^2)` comparisons in the worst case.
    comb_sort, comb_sort_in, comb_sort_by => exchange::comb_sort
}

entry_points! {
    /// Sort `v` ascending with shell sort (gaps `n / 2, n / 4, ..., 1`). Not stable.
    ///
    /// Cost: `O(n^2)` comparisons in the worst case.
    shell_sort, shell_sort_in, shell_sort_by => shift::shell_sort
}

#[inline(always)]
fn sort_general<T, F: FnMut(&T, &T) -> bool>(
    v: &mut [T], less: &mut F, algorithm: fn(&mut [T], &mut F),
) {
    // Skip zero-sized types and slices too short to sort
    if core::mem::size_of::<T>() != 0 && v.len() >= 2 {
        algorithm(v, less);
    }
}
