//! Numeric aggregation.
//!
//! The element type is constrained at compile time through [`Numeric`], so a
//! sequence of non-numeric values cannot be summed or averaged at all.
//!
//! ```
//! use seqext::NumericExt;
//!
//! assert_eq!([1, 2, 3, 4, 5].into_iter().sum_nonempty().unwrap(), 15);
//! assert_eq!([1, 2, 3, 4, 5].into_iter().average_or_none(), Some(3.0));
//! assert!(std::iter::empty::<i32>().sum_nonempty().is_err());
//! assert_eq!(std::iter::empty::<i32>().sum_or_none(), None);
//! ```

use std::ops::Add;

use num_traits::ToPrimitive;
use seqext_common::{Error, Result};

/// Element types that can be summed and averaged.
///
/// Implemented for every type that is closed under `+` and convertible to a
/// primitive (all built-in integer and floating-point types among them).
pub trait Numeric: Add<Output = Self> + ToPrimitive + Sized {}

impl<T> Numeric for T where T: Add<Output = T> + ToPrimitive {}

/// Extension trait for summing and averaging numeric sequences.
pub trait NumericExt: Iterator + Sized {
    /// Adds up the elements from left to right.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::EmptyInput` if the sequence is empty: the sum of no
    /// elements is undefined here rather than zero.
    fn sum_nonempty(self) -> Result<Self::Item>
    where
        Self::Item: Numeric,
    {
        self.sum_or_none().ok_or_else(|| Error::empty_input("sum"))
    }

    /// Adds up the elements from left to right, or returns `None` if the
    /// sequence is empty.
    fn sum_or_none(self) -> Option<Self::Item>
    where
        Self::Item: Numeric,
    {
        self.reduce(|acc, item| acc + item)
    }

    /// Returns the arithmetic mean as an `f64`.
    ///
    /// Sum and count are accumulated in `f64` in the same pass, so the source
    /// is only traversed once and the element type's `+` is never used: the
    /// mean of values whose sum overflows the element type is still exact up
    /// to `f64` precision. Returns `None` if the sequence is empty or if an
    /// element cannot be represented as an `f64`.
    fn average_or_none(self) -> Option<f64>
    where
        Self::Item: Numeric,
    {
        let mut count = 0usize;
        let mut sum = 0f64;
        for item in self {
            sum += item.to_f64()?;
            count += 1;
        }
        (count > 0).then(|| sum / count as f64)
    }
}

impl<I: Iterator> NumericExt for I {}
