//! Grouping, deduplication and chunking.
//!
//! [`CollectionExt::group_by`] is eager and returns a [`Grouping`]; the
//! other operations return lazy adapters that pull from the source only as
//! they are advanced.
//!
//! # Provided Adapters
//!
//! - [`DistinctBy`]: Yields the first element seen for each key.
//! - [`Distinct`]: [`DistinctBy`] keyed by the element itself.
//! - [`Chunked`]: Yields consecutive elements in `Vec`s of a fixed maximum size.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::{
    chunk::Chunked,
    distinct::{Distinct, DistinctBy},
};

/// Elements grouped by key.
///
/// Keys iterate in the order their first element was encountered, and each
/// group keeps its elements in encounter order.
pub type Grouping<K, T> = IndexMap<K, Vec<T>, ahash::RandomState>;

/// Extension trait for grouping, deduplicating and chunking sequences.
pub trait CollectionExt: Iterator + Sized {
    /// Partitions the elements by `key_selector`.
    ///
    /// Every element is visited exactly once.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqext::CollectionExt;
    ///
    /// let words = ["apple", "banana", "apricot", "blueberry"];
    /// let groups = words.into_iter().group_by(|w| w.as_bytes()[0]);
    /// let keys: Vec<u8> = groups.keys().copied().collect();
    /// assert_eq!(keys, vec![b'a', b'b']);
    /// assert_eq!(groups[&b'b'], vec!["banana", "blueberry"]);
    /// ```
    fn group_by<K, F>(self, mut key_selector: F) -> Grouping<K, Self::Item>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        let mut groups = Grouping::default();
        for item in self {
            groups
                .entry(key_selector(&item))
                .or_insert_with(Vec::new)
                .push(item);
        }
        groups
    }

    /// Lazily yields only the first element observed for each key.
    fn distinct_by<K, F>(self, key_selector: F) -> DistinctBy<Self, F, K>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        DistinctBy::new(self, key_selector)
    }

    /// Lazily yields each distinct element once, in order of first occurrence.
    ///
    /// Equivalent to `distinct_by` with the identity key; the set of seen
    /// elements holds a clone of every distinct element.
    fn distinct(self) -> Distinct<Self>
    where
        Self::Item: Eq + Hash + Clone,
    {
        self.distinct_by(<Self::Item as Clone>::clone as fn(&Self::Item) -> Self::Item)
    }

    /// Adapts the sequence to yield `Vec`s of up to `size` consecutive elements.
    ///
    /// Only the final chunk may be shorter than `size`.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::InvalidArgument` if `size` is 0. The check happens
    /// here, before any element is pulled from the source.
    fn chunked(self, size: usize) -> seqext_common::Result<Chunked<Self>> {
        Chunked::new(self, size)
    }
}

impl<I: Iterator> CollectionExt for I {}
