//! Lazy concatenation of two sequences.
//!
//! [`Concat`] is the adapter returned by [`crate::FunctionalExt::concat`].
//! [`Seq`] wraps any iterator so that sequences can be joined with `+`:
//!
//! ```
//! use seqext::Seq;
//!
//! let joined: Vec<i32> = (Seq::new(1..3) + vec![3, 4] + [5]).collect();
//! assert_eq!(joined, vec![1, 2, 3, 4, 5]);
//! ```

use std::ops::Add;

/// An iterator adapter yielding every element of `left`, then every element
/// of `right`.
///
/// Neither side is pulled before the consumer asks for an element, and
/// `right` is not touched until `left` is exhausted.
#[derive(Debug, Clone)]
pub struct Concat<A, B> {
    /// The sequence yielded first.
    left: A,
    /// The sequence yielded once `left` is exhausted.
    right: B,
    /// Set once `left` has returned `None`; it is not polled again.
    left_done: bool,
}

impl<A, B> Concat<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    /// Creates a new `Concat` iterator.
    pub fn new(left: A, right: B) -> Self {
        Concat {
            left,
            right,
            left_done: false,
        }
    }
}

impl<A, B> Iterator for Concat<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.left_done {
            match self.left.next() {
                Some(item) => return Some(item),
                None => self.left_done = true,
            }
        }
        self.right.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (right_lower, right_upper) = self.right.size_hint();
        if self.left_done {
            return (right_lower, right_upper);
        }
        let (left_lower, left_upper) = self.left.size_hint();
        let upper = match (left_upper, right_upper) {
            (Some(l), Some(r)) => l.checked_add(r),
            _ => None,
        };
        (left_lower.saturating_add(right_lower), upper)
    }
}

/// A thin wrapper over an iterator that supports concatenation with `+`.
///
/// `Seq<I>` is itself an iterator yielding exactly what `I` yields, so all of
/// the crate's extension traits apply to it as well.
#[derive(Debug, Clone)]
pub struct Seq<I>(I);

impl<I: Iterator> Seq<I> {
    /// Wraps anything iterable.
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Seq(iter.into_iter())
    }

    /// Returns the wrapped iterator.
    pub fn into_inner(self) -> I {
        self.0
    }
}

impl<I: Iterator> Iterator for Seq<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<I, R> Add<R> for Seq<I>
where
    I: Iterator,
    R: IntoIterator<Item = I::Item>,
{
    type Output = Seq<Concat<I, R::IntoIter>>;

    fn add(self, rhs: R) -> Self::Output {
        Seq(Concat::new(self.0, rhs.into_iter()))
    }
}
