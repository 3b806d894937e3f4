//! Collection helpers: lazy ranges and slice utilities

pub mod arrays;
pub mod range;

pub use range::{Range, RangeIter};
