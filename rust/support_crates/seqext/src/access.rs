//! Null-safe element access.
//!
//! Every accessor here reports "no such element" as `None` instead of
//! panicking: an empty sequence, an out-of-range index, no match and
//! ambiguous (multiple) matches are all ordinary outcomes.

/// Extension trait providing `Option`-returning element accessors.
///
/// # Examples
///
/// ```
/// use seqext::AccessExt;
///
/// assert_eq!([42].into_iter().single_or_none(), Some(42));
/// assert_eq!([1, 2, 3].into_iter().single_or_none(), None);
/// assert_eq!([10, 20, 30].into_iter().element_at_or_none(1), Some(20));
/// assert_eq!([10, 20, 30].into_iter().element_at_or_none(5), None);
/// ```
pub trait AccessExt: Iterator + Sized {
    /// Returns the first element satisfying `predicate`.
    ///
    /// Stops pulling from the sequence as soon as a match is found.
    fn first_where_or_none<P>(mut self, predicate: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.find(predicate)
    }

    /// Returns the last element satisfying `predicate`.
    ///
    /// The whole sequence is consumed, since a later match may always follow.
    fn last_where_or_none<P>(self, predicate: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter(predicate).last()
    }

    /// Returns the only element satisfying `predicate`.
    ///
    /// Returns `None` both when nothing matches and when two or more elements
    /// match. Scanning stops at the second match.
    fn single_where_or_none<P>(self, mut predicate: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut found = None;
        for item in self {
            if predicate(&item) {
                if found.is_some() {
                    return None;
                }
                found = Some(item);
            }
        }
        found
    }

    /// Returns the first element, pulling at most one element from the source.
    fn first_or_none(mut self) -> Option<Self::Item> {
        self.next()
    }

    /// Returns the last element.
    ///
    /// Consumes the whole sequence; see [`crate::SliceExt::last_or_none`] for
    /// the constant-time slice version.
    fn last_or_none(self) -> Option<Self::Item> {
        self.last()
    }

    /// Returns the only element of the sequence.
    ///
    /// Returns `None` for an empty sequence and for a sequence with more than
    /// one element. At most two elements are pulled from the source.
    fn single_or_none(mut self) -> Option<Self::Item> {
        let first = self.next()?;
        match self.next() {
            Some(_) => None,
            None => Some(first),
        }
    }

    /// Returns the element at the zero-based `index`, or `None` if the
    /// sequence is shorter than `index + 1`.
    fn element_at_or_none(mut self, index: usize) -> Option<Self::Item> {
        self.nth(index)
    }

    /// Returns the zero-based position of the first element equal to `value`.
    fn index_of_or_none(mut self, value: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        self.position(|item| &item == value)
    }
}

impl<I: Iterator> AccessExt for I {}
