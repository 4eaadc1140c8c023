/// Sort `v` with bubble sort. Each pass stops at the position of the previous pass's last swap,
/// and the sort ends after a pass without swaps. Elements that compare equal are never swapped.
///
/// Cost: `O(n^2)` comparisons and `O(n^2)` swaps.
pub fn bubble_sort<T, F: FnMut(&T, &T) -> bool>(v: &mut [T], less: &mut F) {
    let mut end = v.len();

    while end > 1 {
        let mut last_swap = 0;

        for i in 1..end {
            if less(&v[i], &v[i - 1]) {
                v.swap(i - 1, i);
                last_swap = i;
            }
        }

        // `v[last_swap..]` is in its final order
        end = last_swap;
    }
}

/// Sort `v` with comb sort, shrinking the gap by a factor of `13 / 10` per pass. Once the gap
/// reaches `1` the remaining passes are those of [`bubble_sort`], which end after a pass without
/// swaps and never outnumber the elements.
///
/// Cost: `O(n^2)` comparisons and `O(n^2)` swaps.
pub fn comb_sort<T, F: FnMut(&T, &T) -> bool>(v: &mut [T], less: &mut F) {
    let n = v.len();
    let mut gap = shrink(n);

    while gap > 1 {
        for i in 0..n - gap {
            if less(&v[i + gap], &v[i]) {
                v.swap(i, i + gap);
            }
        }
        gap = shrink(gap);
    }

    bubble_sort(v, less);
}

// `max(1, floor(gap * 10 / 13))` without overflowing for any slice length.
#[inline(always)]
fn shrink(gap: usize) -> usize {
    (gap / 13 * 10 + gap % 13 * 10 / 13).max(1)
}
