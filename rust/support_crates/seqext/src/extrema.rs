//! Extrema and reversal.
//!
//! Unlike `Iterator::max` and `Iterator::max_by_key`, which return the *last*
//! of several equal maxima, every extremum here keeps the element that was
//! encountered first.

/// Extension trait for ordering-based queries.
pub trait ExtremaExt: Iterator + Sized {
    /// Returns the smallest element, or `None` if the sequence is empty.
    ///
    /// On ties the earliest element wins.
    fn min_or_none(self) -> Option<Self::Item>
    where
        Self::Item: Ord,
    {
        self.reduce(|best, item| if item < best { item } else { best })
    }

    /// Returns the largest element, or `None` if the sequence is empty.
    ///
    /// On ties the earliest element wins.
    fn max_or_none(self) -> Option<Self::Item>
    where
        Self::Item: Ord,
    {
        self.reduce(|best, item| if item > best { item } else { best })
    }

    /// Returns the element with the smallest `selector` key.
    ///
    /// The selector runs once per element. On ties the earliest element wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqext::ExtremaExt;
    ///
    /// let fruit = ["banana", "apple", "cherry"];
    /// assert_eq!(fruit.into_iter().min_by_key_or_none(|s| s.len()), Some("apple"));
    /// assert_eq!(fruit.into_iter().max_by_key_or_none(|s| s.len()), Some("banana"));
    /// ```
    fn min_by_key_or_none<K, F>(self, mut selector: F) -> Option<Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.map(|item| (selector(&item), item))
            .reduce(|best, next| if next.0 < best.0 { next } else { best })
            .map(|(_, item)| item)
    }

    /// Returns the element with the largest `selector` key.
    ///
    /// The selector runs once per element. On ties the earliest element wins.
    fn max_by_key_or_none<K, F>(self, mut selector: F) -> Option<Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.map(|item| (selector(&item), item))
            .reduce(|best, next| if next.0 > best.0 { next } else { best })
            .map(|(_, item)| item)
    }

    /// Yields the elements in reverse encounter order.
    ///
    /// The source is buffered into a `Vec` first, so this works for iterators
    /// that cannot be walked backwards. Use `Iterator::rev` when the source is
    /// a `DoubleEndedIterator`.
    fn reversed(self) -> std::iter::Rev<std::vec::IntoIter<Self::Item>> {
        self.collect::<Vec<_>>().into_iter().rev()
    }
}

impl<I: Iterator> ExtremaExt for I {}
