//! Core definitions (error type and argument validation), relied upon by all seqext crates.

pub mod error;
pub mod result;

pub use error::{Error, ErrorKind};
pub use result::Result;
