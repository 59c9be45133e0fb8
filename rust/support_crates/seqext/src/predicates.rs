//! Whole-sequence predicates.

/// Extension trait for testing a predicate against every element.
///
/// Both methods are vacuously `true` for an empty sequence and stop pulling
/// from the source as soon as the answer is known.
pub trait PredicateExt: Iterator + Sized {
    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// Stops at the first element that fails.
    fn all_match<P>(mut self, predicate: P) -> bool
    where
        P: FnMut(Self::Item) -> bool,
    {
        self.all(predicate)
    }

    /// Returns `true` if no element satisfies `predicate`.
    ///
    /// Stops at the first element that matches.
    fn none_match<P>(mut self, predicate: P) -> bool
    where
        P: FnMut(Self::Item) -> bool,
    {
        !self.any(predicate)
    }
}

impl<I: Iterator> PredicateExt for I {}
