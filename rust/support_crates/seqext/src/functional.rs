//! Concatenation and index-aware traversal.

use crate::{concat::Concat, indexed::Indexed};

/// Extension trait for concatenating and indexing sequences.
pub trait FunctionalExt: Iterator + Sized {
    /// Lazily yields all elements of `self`, then all elements of `other`.
    fn concat<R>(self, other: R) -> Concat<Self, R::IntoIter>
    where
        R: IntoIterator<Item = Self::Item>,
    {
        Concat::new(self, other.into_iter())
    }

    /// Calls `action(index, element)` for every element, in order, with
    /// `index` starting at 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqext::FunctionalExt;
    ///
    /// let mut lines = Vec::new();
    /// ["a", "b"].into_iter().for_each_indexed(|i, s| lines.push(format!("{i}:{s}")));
    /// assert_eq!(lines, vec!["0:a", "1:b"]);
    /// ```
    fn for_each_indexed<F>(self, mut action: F)
    where
        F: FnMut(usize, Self::Item),
    {
        self.indexed().for_each(|(index, item)| action(index, item));
    }

    /// Lazily pairs every element with its zero-based index.
    fn indexed(self) -> Indexed<Self> {
        Indexed::new(self)
    }
}

impl<I: Iterator> FunctionalExt for I {}
