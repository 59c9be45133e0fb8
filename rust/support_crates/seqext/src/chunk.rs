//! An iterator adapter that groups consecutive elements into fixed-size chunks.
//!
//! The validated size stays available through [`Chunked::chunk_size`], so
//! code handed a `Chunked` can size its buffers without tracking the argument
//! separately:
//!
//! ```
//! use seqext::CollectionExt;
//!
//! let chunks = (0..10).chunked(4).unwrap();
//! assert_eq!(chunks.chunk_size(), 4);
//! let last = chunks.last().unwrap();
//! assert_eq!(last, vec![8, 9]);
//! ```

use seqext_common::verify_arg;

/// An iterator adapter that groups consecutive elements into `Vec`s.
///
/// Given an iterator yielding `T`, this adapter yields `Vec<T>` such that each
/// chunk holds exactly `size` elements, except the last one, which holds the
/// remaining `1..=size` elements. An empty source yields no chunks.
#[derive(Debug, Clone)]
pub struct Chunked<I> {
    /// The underlying iterator.
    inner: I,
    /// The maximum number of elements per chunk.
    size: usize,
}

impl<I: Iterator> Chunked<I> {
    /// Creates a new `Chunked` iterator.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::InvalidArgument` if `size` is 0. Nothing is pulled
    /// from `inner` in that case.
    ///
    /// # Arguments
    ///
    /// * `inner` - The underlying iterator.
    /// * `size` - The maximum number of elements per chunk. Must be greater than 0.
    pub fn new(inner: I, size: usize) -> seqext_common::Result<Self> {
        verify_arg!(size, size > 0);
        Ok(Chunked { inner, size })
    }

    /// The maximum number of elements per chunk.
    pub fn chunk_size(&self) -> usize {
        self.size
    }
}

impl<I: Iterator> Iterator for Chunked<I> {
    type Item = Vec<I::Item>;

    /// Returns the next chunk, or `None` once the source is exhausted.
    fn next(&mut self) -> Option<Self::Item> {
        let first = self.inner.next()?;
        // Cap the allocation by what the source can still deliver, `size` may be huge.
        let (lower, _) = self.inner.size_hint();
        let mut chunk = Vec::with_capacity(self.size.min(lower.saturating_add(1)));
        chunk.push(first);
        chunk.extend(self.inner.by_ref().take(self.size - 1));
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        (
            lower.div_ceil(self.size),
            upper.map(|n| n.div_ceil(self.size)),
        )
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Chunked<I> {}
