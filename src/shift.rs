use core::mem::ManuallyDrop;
use core::ptr;

use sort_util::RawMut;

/// Sort `v` with insertion sort. Elements that compare equal keep their relative order.
///
/// Cost: `O(n^2)` comparisons and `O(n^2)` moves.
#[inline(never)]
pub fn insertion_sort<T, F: FnMut(&T, &T) -> bool>(v: &mut [T], less: &mut F) {
    gapped_insertion_sort(v, 1, less);
}

/// Sort `v` with shell sort over the gap sequence `n / 2, n / 4, ..., 1`.
///
/// Cost: `O(n^2)` comparisons and `O(n^2)` moves.
#[inline(never)]
pub fn shell_sort<T, F: FnMut(&T, &T) -> bool>(v: &mut [T], less: &mut F) {
    let mut gap = v.len() / 2;

    while gap > 0 {
        gapped_insertion_sort(v, gap, less);
        gap /= 2;
    }
}

// Insert each element of `v` into the chain of elements `gap` apart that precede it.
fn gapped_insertion_sort<T, F: FnMut(&T, &T) -> bool>(v: &mut [T], gap: usize, less: &mut F) {
    // Represents the hole created on each insertion, filled on drop (also when `less` unwinds)
    struct Slot<T>(ManuallyDrop<T>, *mut T, usize);

    impl<T> core::ops::Drop for Slot<T> {
        fn drop(&mut self) {
            unsafe { ptr::copy_nonoverlapping(&*self.0, self.1.add(self.2), 1); }
        }
    }

    debug_assert!(gap > 0);
    let (s, n) = v.raw_mut();

    for i in gap..n {
        unsafe {
            let mut slot = Slot(ManuallyDrop::new(s.add(i).read()), s, i);

            while slot.2 >= gap && less(&slot.0, &*s.add(slot.2 - gap)) {
                ptr::copy_nonoverlapping(s.add(slot.2 - gap), s.add(slot.2), 1);
                slot.2 -= gap;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Tagged(u8, usize);

    #[test]
    fn insertion_sorts_ascending() {
        let mut v = [9, -2, 7, 7, 0, 3, -8, 1];
        insertion_sort(&mut v, &mut |a: &i32, b: &i32| a < b);
        assert_eq!(v, [-8, -2, 0, 1, 3, 7, 7, 9]);
    }

    #[test]
    fn insertion_keeps_equal_elements_in_order() {
        let mut v = [Tagged(2, 0), Tagged(1, 1), Tagged(2, 2), Tagged(1, 3), Tagged(0, 4)];
        insertion_sort(&mut v, &mut |a: &Tagged, b: &Tagged| a.0 < b.0);
        assert_eq!(v, [Tagged(0, 4), Tagged(1, 1), Tagged(1, 3), Tagged(2, 0), Tagged(2, 2)]);
    }

    #[test]
    fn shell_sorts_descending() {
        let mut v = [0.5, -1.25, 3.0, 2.0, 2.0, 10.0, -7.5];
        shell_sort(&mut v, &mut |a: &f64, b: &f64| a > b);
        assert_eq!(v, [10.0, 3.0, 2.0, 2.0, 0.5, -1.25, -7.5]);
    }

    #[test]
    fn shell_handles_short_slices() {
        let mut empty: [u16; 0] = [];
        shell_sort(&mut empty, &mut |a: &u16, b: &u16| a < b);

        let mut one = [4u16];
        shell_sort(&mut one, &mut |a: &u16, b: &u16| a < b);
        assert_eq!(one, [4]);

        let mut two = [4u16, 1];
        shell_sort(&mut two, &mut |a: &u16, b: &u16| a < b);
        assert_eq!(two, [1, 4]);
    }

    #[test]
    fn panicking_comparison_leaves_a_permutation() {
        extern crate std;

        let mut v = [5, 4, 3, 2, 1];
        let mut calls = 0;
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            insertion_sort(&mut v, &mut |a: &i32, b: &i32| {
                calls += 1;
                if calls == 4 {
                    panic!("comparison failed");
                }
                a < b
            });
        }));

        assert!(result.is_err());
        let mut seen = v;
        seen.sort_unstable();
        assert_eq!(seen, [1, 2, 3, 4, 5]);
    }
}
