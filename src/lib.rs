//! Main Library File for the boost utility collection
//! Provides small, dependable helpers for random sampling, lazy filesystem
//! traversal, codecs, unique ids, dates, strings, I/O and lazy ranges.

// Configuration and Errors
pub mod config;
pub mod error;

// Random Generation
pub mod random;

// Filesystem Traversal and Paths
pub mod file;

// Codecs and Identifiers
pub mod codec;

// Dates and Times
pub mod datetime;

// Collections
pub mod collection;

// Strings and I/O
pub mod io;
pub mod string;

// Shared Utilities
pub mod utils;

// Re-exports for crate consumers
pub use collection::Range;
pub use config::{BoostConfig, LoggingConfig, RandomConfig, WalkConfig};
pub use error::{Error, Result};
pub use file::{files, list_files, PathFilter, TreeWalker, WalkBuilder};
pub use random::{next_unique_ints, RandomHelper};
pub use string::{CaseFormat, SimilarityAlgorithm};
pub use utils::Logger;
