use crate::Direction;

/// One of the sorting algorithms provided by this crate, for choosing an algorithm at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// See [`crate::bubble_sort`].
    Bubble,
    /// See [`crate::quick_sort`].
    Quick,
    /// See [`crate::insertion_sort`].
    Insertion,
    /// See [`crate::comb_sort`].
    Comb,
    /// See [`crate::shell_sort`].
    Shell,
}

impl Algorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Quick,
        Algorithm::Insertion,
        Algorithm::Comb,
        Algorithm::Shell,
    ];

    /// Return `true` iff this algorithm keeps equal elements in their input order.
    pub const fn is_stable(self) -> bool {
        matches!(self, Algorithm::Bubble | Algorithm::Insertion)
    }

    /// Sort `v` in `direction` with this algorithm.
    pub fn sort<T: PartialOrd>(self, v: &mut [T], direction: Direction) {
        match self {
            Algorithm::Bubble => crate::bubble_sort_in(v, direction),
            Algorithm::Quick => crate::quick_sort_in(v, direction),
            Algorithm::Insertion => crate::insertion_sort_in(v, direction),
            Algorithm::Comb => crate::comb_sort_in(v, direction),
            Algorithm::Shell => crate::shell_sort_in(v, direction),
        }
    }
}
