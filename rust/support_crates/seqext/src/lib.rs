//! Convenience operations over generic sequences.
//!
//! This crate extends every [`Iterator`] with a set of small, precisely
//! specified operations. It offers:
//!
//! - **Null-safe access**: `first`/`last`/`single`/`element_at` variants returning `Option`
//!   instead of panicking or requiring manual bookkeeping
//! - **Collection utilities**: order-preserving grouping, key-based deduplication, chunking
//! - **Predicates and extrema**: `all_match`/`none_match`, first-wins `min`/`max`
//! - **Functional helpers**: lazy concatenation (also via `+`), indexing
//! - **Numeric aggregation**: sums that treat empty input as undefined, single-pass averages
//!
//! # Key Types
//!
//! - [`AccessExt`] - Null-safe element access
//! - [`CollectionExt`] - Grouping, deduplication and chunking adapters
//! - [`PredicateExt`] / [`ExtremaExt`] - Predicates, extrema and reversal
//! - [`FunctionalExt`] / [`Seq`] - Concatenation and indexing
//! - [`NumericExt`] - `sum_nonempty`, `sum_or_none`, `average_or_none`
//! - [`SliceExt`] - Indexed and backward fast paths for slices
//!
//! All traits are re-exported from [`prelude`].
//!
//! ```
//! use seqext::prelude::*;
//!
//! let words = ["apple", "banana", "apricot", "blueberry"];
//! let groups = words.iter().copied().group_by(|w| w.chars().next());
//! assert_eq!(groups[&Some('a')], vec!["apple", "apricot"]);
//!
//! let chunks: Vec<Vec<i32>> = (1..=8).chunked(3).unwrap().collect();
//! assert_eq!(chunks, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8]]);
//! ```

pub mod access;
pub mod chunk;
pub mod collection;
pub mod concat;
pub mod distinct;
pub mod extrema;
pub mod functional;
pub mod indexed;
pub mod numeric;
pub mod predicates;
pub mod slice_ext;

#[cfg(test)]
mod tests;

pub use access::AccessExt;
pub use chunk::Chunked;
pub use collection::{CollectionExt, Grouping};
pub use concat::{Concat, Seq};
pub use distinct::{Distinct, DistinctBy};
pub use extrema::ExtremaExt;
pub use functional::FunctionalExt;
pub use indexed::Indexed;
pub use numeric::{Numeric, NumericExt};
pub use predicates::PredicateExt;
pub use slice_ext::SliceExt;

pub use seqext_common::{Error, ErrorKind, Result};

/// Glob-importable set of every extension trait.
pub mod prelude {
    pub use crate::access::AccessExt;
    pub use crate::collection::CollectionExt;
    pub use crate::concat::Seq;
    pub use crate::extrema::ExtremaExt;
    pub use crate::functional::FunctionalExt;
    pub use crate::numeric::NumericExt;
    pub use crate::predicates::PredicateExt;
    pub use crate::slice_ext::SliceExt;
}
