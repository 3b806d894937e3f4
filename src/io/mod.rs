//! I/O conveniences: line traversal, line writing and reader concatenation

pub mod lines;
pub mod streams;

pub use lines::{foreach_lines, lines, write_lines, write_lines_with, Lines, LINE_SEPARATOR};
pub use streams::{concat, null_reader, null_writer, to_reader, ConcatReader};
