//! Random generation helpers
//!
//! [`unique`] holds the distinct-integer sampler; [`helper`] wraps a generator
//! with range-checked convenience methods built on top of it.

pub mod helper;
pub mod unique;

pub use helper::{DynRng, RandomHelper};
pub use unique::{next_unique_ints, SMALL_BOUND_THRESHOLD};
