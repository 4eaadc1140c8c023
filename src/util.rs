use crate::{BufferError, Direction};

/// Index reported by [`index_of_or_sentinel`] when the value is absent.
pub const NOT_FOUND: isize = -1;

/// Return `true` iff every pair of neighbours in `v` is ordered according to `direction`. Equal
/// neighbours never break the order.
pub fn is_sorted<T: PartialOrd>(v: &[T], direction: Direction) -> bool {
    v.windows(2).all(|w| direction.allows(&w[0], &w[1]))
}

/// Reverse `v` in place.
pub fn reverse<T>(v: &mut [T]) {
    let n = v.len();
    for i in 0..n / 2 {
        v.swap(i, n - 1 - i);
    }
}

/// Return the index of the first element of `v` equal to `value`.
pub fn index_of<T: PartialEq>(v: &[T], value: &T) -> Option<usize> {
    v.iter().position(|x| x == value)
}

/// Like [`index_of`], but report a missing value as [`NOT_FOUND`].
pub fn index_of_or_sentinel<T: PartialEq>(v: &[T], value: &T) -> isize {
    // Slice lengths never exceed `isize::MAX`
    index_of(v, value).map_or(NOT_FOUND, |i| i as isize)
}

/// Copy every element of `source` into the front of `destination`, front to back.
///
/// # Panics
///
/// Panics if `destination` is shorter than `source`. See [`try_copy`].
pub fn copy<T: Clone>(source: &[T], destination: &mut [T]) {
    for (d, s) in destination[..source.len()].iter_mut().zip(source) {
        d.clone_from(s);
    }
}

/// Copy every element of `source` into the front of `destination`, or fail without writing
/// anything if it does not fit.
pub fn try_copy<T: Clone>(source: &[T], destination: &mut [T]) -> Result<(), BufferError> {
    if destination.len() < source.len() {
        return Err(BufferError::DestinationTooShort {
            needed: source.len(),
            available: destination.len(),
        });
    }

    copy(source, destination);
    Ok(())
}

/// Exchange the values behind `a` and `b`.
#[inline(always)]
pub fn swap<T>(a: &mut T, b: &mut T) {
    core::mem::swap(a, b);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sortedness() {
        assert!(is_sorted::<i32>(&[], Direction::Ascending));
        assert!(is_sorted(&[4], Direction::Descending));
        assert!(is_sorted(&[1, 1, 2, 5, 5], Direction::Ascending));
        assert!(!is_sorted(&[1, 1, 2, 5, 5], Direction::Descending));
        assert!(is_sorted(&[9.0, 9.0, -1.0], Direction::Descending));
        assert!(!is_sorted(&[3, 1, 2], Direction::Ascending));
    }

    #[test]
    fn reverse_odd_and_even() {
        let mut odd = [1, 2, 3, 4, 5];
        reverse(&mut odd);
        assert_eq!(odd, [5, 4, 3, 2, 1]);

        let mut even = ['a', 'b', 'c', 'd'];
        reverse(&mut even);
        assert_eq!(even, ['d', 'c', 'b', 'a']);

        let mut one = [7];
        reverse(&mut one);
        assert_eq!(one, [7]);
    }

    #[test]
    fn lookup() {
        let v = [10, 20, 30, 20];
        assert_eq!(index_of(&v, &20), Some(1));
        assert_eq!(index_of(&v, &40), None);
        assert_eq!(index_of_or_sentinel(&v, &30), 2);
        assert_eq!(index_of_or_sentinel(&v, &40), NOT_FOUND);
        assert_eq!(index_of_or_sentinel::<u8>(&[], &0), -1);
    }

    #[test]
    fn copy_into_longer_destination() {
        let source = [1.5, 2.5, 3.5];
        let mut destination = [0.0; 5];
        copy(&source, &mut destination);
        assert_eq!(destination, [1.5, 2.5, 3.5, 0.0, 0.0]);
    }

    #[test]
    fn try_copy_rejects_short_destination() {
        let source = [1, 2, 3];
        let mut destination = [9, 9];
        assert_eq!(
            try_copy(&source, &mut destination),
            Err(BufferError::DestinationTooShort { needed: 3, available: 2 })
        );
        assert_eq!(destination, [9, 9]);

        let mut destination = [0; 3];
        assert_eq!(try_copy(&source, &mut destination), Ok(()));
        assert_eq!(destination, source);
    }

    #[test]
    #[should_panic]
    fn copy_into_short_destination_panics() {
        let mut destination = [0u8; 1];
        copy(&[1, 2], &mut destination);
    }

    #[test]
    fn swap_values() {
        let (mut a, mut b) = (1, 2);
        swap(&mut a, &mut b);
        assert_eq!((a, b), (2, 1));
    }
}
