//! String utilities
//!
//! [`case`] converts between identifier naming styles, [`similarity`] scores
//! how alike two strings are, [`strings`] holds formatting and slicing helpers.

pub mod case;
pub mod similarity;
pub mod strings;

pub use case::{capitalize, convert_named_style, uncapitalize, CaseFormat};
pub use similarity::{similarity, SimilarityAlgorithm};
pub use strings::{format_indexed, format_map, format_with, slice, strip, StripMode};
