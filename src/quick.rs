/// Sort `v` with quicksort, partitioning every range around its last element.
///
/// The pivot choice is fixed, so input that is already ordered (in either direction) takes the
/// quadratic path. Recursion always descends into the shorter side, bounding stack depth by
/// `O(log n)` frames.
///
/// Cost: `O(n log n)` comparisons on average, `O(n^2)` in the worst case.
pub fn quick_sort<T, F: FnMut(&T, &T) -> bool>(mut v: &mut [T], less: &mut F) {
    while v.len() > 1 {
        let pivot = partition(v, less);
        let (left, right) = core::mem::take(&mut v).split_at_mut(pivot);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quick_sort(left, less);
            v = right;
        } else {
            quick_sort(right, less);
            v = left;
        }
    }
}

/// Partition `v` around its last element and return the pivot's final index. Every element `x`
/// with `less(x, pivot)` ends up left of the pivot, every other element right of it.
///
/// Cost: `n - 1` comparisons and at most `n` swaps.
pub fn partition<T, F: FnMut(&T, &T) -> bool>(v: &mut [T], less: &mut F) -> usize {
    let Some((pivot, rest)) = v.split_last_mut() else {
        return 0;
    };

    let mut store = 0;
    for j in 0..rest.len() {
        if less(&rest[j], &*pivot) {
            rest.swap(store, j);
            store += 1;
        }
    }

    let last = rest.len();
    v.swap(store, last);
    store
}
