//! Iterator adapters that drop elements whose key was already seen.
//!
//! [`DistinctBy::seen_count`] reports how many distinct keys have been
//! emitted so far, which is also the size of the adapter's seen-key set:
//!
//! ```
//! use seqext::CollectionExt;
//!
//! let mut iter = ["a", "bb", "cc", "d"].into_iter().distinct_by(|s| s.len());
//! assert_eq!(iter.next(), Some("a"));
//! assert_eq!(iter.next(), Some("bb"));
//! assert_eq!(iter.seen_count(), 2);
//! ```

use std::hash::Hash;

use ahash::AHashSet;

/// An iterator adapter that yields only the first element for each key.
///
/// Keys are produced by a selector function and remembered in a set that grows
/// with the number of distinct keys. Elements are emitted in the order of
/// their first occurrence.
#[derive(Clone)]
pub struct DistinctBy<I, F, K> {
    /// The underlying iterator.
    inner: I,
    /// Maps each element to its deduplication key.
    key_selector: F,
    /// Keys of the elements emitted so far.
    seen: AHashSet<K>,
}

/// [`DistinctBy`] keyed by the element itself.
pub type Distinct<I> =
    DistinctBy<I, fn(&<I as Iterator>::Item) -> <I as Iterator>::Item, <I as Iterator>::Item>;

impl<I, F, K> DistinctBy<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Eq + Hash,
{
    /// Creates a new `DistinctBy` iterator.
    ///
    /// # Arguments
    ///
    /// * `inner` - The underlying iterator.
    /// * `key_selector` - Maps each element to the key it is deduplicated by.
    pub fn new(inner: I, key_selector: F) -> Self {
        DistinctBy {
            inner,
            key_selector,
            seen: AHashSet::new(),
        }
    }

    /// Number of distinct keys observed so far.
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }
}

impl<I, F, K> Iterator for DistinctBy<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Eq + Hash,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.inner.next()?;
            if self.seen.insert((self.key_selector)(&item)) {
                return Some(item);
            }
        }
    }

    /// Every remaining element may turn out to be a duplicate, except that
    /// the very first one is always new.
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        let lower = if self.seen.is_empty() {
            lower.min(1)
        } else {
            0
        };
        (lower, upper)
    }
}

impl<I, F, K> std::fmt::Debug for DistinctBy<I, F, K>
where
    I: std::fmt::Debug,
    K: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DistinctBy")
            .field("inner", &self.inner)
            .field("seen", &self.seen)
            .finish()
    }
}
