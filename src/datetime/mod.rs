//! Date and time helpers over `chrono`

pub mod dates;
pub mod formats;

pub use dates::*;
