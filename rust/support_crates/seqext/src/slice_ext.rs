//! Extensions for working with slices.
//!
//! This module provides the [`SliceExt`] trait, which gives slices (and `Vec`s)
//! indexed and backward versions of the accessors that need a full scan on a
//! plain iterator. Results are the same as the iterator versions on the same
//! data, only borrowed instead of owned.

/// Extension trait adding constant-time and back-to-front accessors to
/// random-access collections.
pub trait SliceExt<T> {
    /// Returns the last element, in constant time.
    fn last_or_none(&self) -> Option<&T>;

    /// Returns the element at `index`, or `None` if `index` is out of bounds.
    fn element_at_or_none(&self, index: usize) -> Option<&T>;

    /// Returns the last element satisfying `predicate`.
    ///
    /// Scans from the back and stops at the first match, so `predicate` is
    /// not called on elements before the match.
    fn last_where_or_none<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&&T) -> bool;

    /// Iterates the elements back to front without buffering.
    fn reversed(&self) -> std::iter::Rev<std::slice::Iter<'_, T>>;
}

impl<T> SliceExt<T> for [T] {
    #[inline]
    fn last_or_none(&self) -> Option<&T> {
        self.last()
    }

    #[inline]
    fn element_at_or_none(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    fn last_where_or_none<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&&T) -> bool,
    {
        self.iter().rev().find(predicate)
    }

    fn reversed(&self) -> std::iter::Rev<std::slice::Iter<'_, T>> {
        self.iter().rev()
    }
}

impl<T> SliceExt<T> for Vec<T> {
    fn last_or_none(&self) -> Option<&T> {
        self.as_slice().last_or_none()
    }

    fn element_at_or_none(&self, index: usize) -> Option<&T> {
        self.as_slice().element_at_or_none(index)
    }

    fn last_where_or_none<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&&T) -> bool,
    {
        self.as_slice().last_where_or_none(predicate)
    }

    fn reversed(&self) -> std::iter::Rev<std::slice::Iter<'_, T>> {
        self.as_slice().reversed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_or_none() {
        assert_eq!(vec![1, 2, 3].last_or_none(), Some(&3));
        assert_eq!(Vec::<i32>::new().last_or_none(), None);
        assert_eq!([5u8][..].last_or_none(), Some(&5));
    }

    #[test]
    fn test_element_at_or_none() {
        let values = vec![10, 20, 30];
        assert_eq!(values.element_at_or_none(1), Some(&20));
        assert_eq!(values.element_at_or_none(3), None);
        assert_eq!(values.element_at_or_none(usize::MAX), None);
    }

    #[test]
    fn test_last_where_or_none_scans_from_back() {
        let values = vec![1, 2, 3, 4, 5];
        let mut visited = Vec::new();
        let found = values.last_where_or_none(|&&x| {
            visited.push(x);
            x % 2 == 0
        });
        assert_eq!(found, Some(&4));
        assert_eq!(visited, vec![5, 4]);
        assert_eq!(values.last_where_or_none(|&&x| x > 10), None);
    }

    #[test]
    fn test_reversed() {
        let words = vec!["a", "b", "c"];
        let reversed: Vec<&&str> = words.reversed().collect();
        assert_eq!(reversed, vec![&"c", &"b", &"a"]);
        assert_eq!(words, vec!["a", "b", "c"]);
    }
}
