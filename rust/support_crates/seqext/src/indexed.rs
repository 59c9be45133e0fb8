//! An iterator adapter that pairs each element with its position.

/// An iterator adapter that yields `(index, element)` pairs, counting from 0.
#[derive(Debug, Clone)]
pub struct Indexed<I> {
    /// The underlying iterator.
    inner: I,
    /// Index of the next element to be yielded.
    index: usize,
}

impl<I: Iterator> Indexed<I> {
    /// Creates a new `Indexed` iterator starting at index 0.
    pub fn new(inner: I) -> Self {
        Indexed { inner, index: 0 }
    }
}

impl<I: Iterator> Iterator for Indexed<I> {
    type Item = (usize, I::Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        let index = self.index;
        self.index += 1;
        Some((index, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Indexed<I> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::FunctionalExt;

    #[test]
    fn test_indexed() {
        let result: Vec<(usize, &str)> = ["apple", "banana"].into_iter().indexed().collect();
        assert_eq!(result, vec![(0, "apple"), (1, "banana")]);
    }

    #[test]
    fn test_indexed_empty() {
        assert_eq!(std::iter::empty::<u8>().indexed().next(), None);
    }

    #[test]
    fn test_indexed_len() {
        let mut iter = vec!['x', 'y', 'z'].into_iter().indexed();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some((0, 'x')));
        assert_eq!(iter.len(), 2);
    }

    #[test]
    fn test_indexed_after_filter() {
        let result: Vec<(usize, i32)> = (1..=10).filter(|x| x % 4 == 0).indexed().collect();
        assert_eq!(result, vec![(0, 4), (1, 8)]);
    }
}
