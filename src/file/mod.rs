//! Filesystem helpers: lazy tree traversal, path predicates and path strings

pub mod filters;
pub mod paths;
pub mod walker;

pub use filters::PathFilter;
pub use walker::{files, list_files, TreeWalker, WalkBuilder};
