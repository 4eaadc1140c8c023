/// The order a sort produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Smallest elements first.
    #[default]
    Ascending,

    /// Largest elements first.
    Descending,
}

impl Direction {
    /// Return the opposite direction.
    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    /// Return `true` iff `a` may directly precede `b` in a sequence ordered in this direction.
    /// Equal neighbours are allowed either way, as are neighbours that do not compare (`NaN`).
    #[inline]
    pub fn allows<T: PartialOrd>(self, a: &T, b: &T) -> bool {
        match self {
            Direction::Ascending => !(a > b),
            Direction::Descending => !(a < b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ascending() {
        assert_eq!(Direction::default(), Direction::Ascending);
        assert_eq!(Direction::Ascending.reverse(), Direction::Descending);
        assert_eq!(Direction::Descending.reverse().reverse(), Direction::Descending);
    }

    #[test]
    fn equal_neighbours_are_allowed() {
        assert!(Direction::Ascending.allows(&3, &3));
        assert!(Direction::Descending.allows(&3, &3));
        assert!(Direction::Ascending.allows(&1, &2));
        assert!(!Direction::Descending.allows(&1, &2));
    }
}
