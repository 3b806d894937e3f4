//! Line-oriented reading and writing

use std::io::{self, BufRead, BufReader, Read, Write};

use tracing::trace;

use crate::error::{Error, Result};

/// Platform line ending used by [`write_lines`].
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Calls `processor(line, index)` for every line of `reader`, in order.
///
/// Lines are passed without their terminator (`\n` or `\r\n`) and indexes
/// start at 0. Returning `false` from `processor` stops the traversal.
pub fn foreach_lines<R, F>(reader: R, mut processor: F) -> Result<()>
where
    R: Read,
    F: FnMut(&str, usize) -> bool,
{
    let mut reader = BufReader::new(reader);
    let mut line = String::new();
    let mut index = 0;

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(());
        }
        if !processor(trim_line_ending(&line), index) {
            trace!(index, "line traversal stopped by processor");
            return Ok(());
        }
        index += 1;
    }
}

fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Lazily yields the lines of `reader`, one read per item.
pub fn lines<R: BufRead>(reader: R) -> Lines<R> {
    Lines { inner: reader.lines() }
}

/// Iterator returned by [`lines`]. Read failures are yielded as errors.
#[derive(Debug)]
pub struct Lines<R> {
    inner: io::Lines<R>,
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|line| line.map_err(Error::from))
    }
}

/// Writes each line followed by [`LINE_SEPARATOR`].
pub fn write_lines<W, I, S>(writer: W, lines: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    write_lines_with(writer, lines, LINE_SEPARATOR)
}

/// Writes each line followed by `line_ending`, the last line included.
pub fn write_lines_with<W, I, S>(mut writer: W, lines: I, line_ending: &str) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(line_ending.as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_foreach_lines() {
        let mut seen = Vec::new();
        foreach_lines("a cat on the sit\r\n this is a test line\nlast".as_bytes(), |line, i| {
            seen.push((i, line.to_string()));
            true
        })
        .unwrap();
        assert_eq!(
            seen,
            vec![
                (0, "a cat on the sit".to_string()),
                (1, " this is a test line".to_string()),
                (2, "last".to_string()),
            ]
        );
    }

    #[test]
    fn test_foreach_lines_stops_early() {
        let mut count = 0;
        foreach_lines("1\n2\n3\n4\n".as_bytes(), |_, i| {
            count += 1;
            i < 1
        })
        .unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_lines_are_lazy() {
        let mut iter = lines(Cursor::new("one\ntwo\n"));
        assert_eq!(iter.next().unwrap().unwrap(), "one");
        assert_eq!(iter.next().unwrap().unwrap(), "two");
        assert!(iter.next().is_none());

        let invalid: &[u8] = &[0xff, b'\n'];
        assert!(matches!(lines(invalid).next(), Some(Err(Error::IoError(_)))));
    }

    #[test]
    fn test_write_lines() {
        let mut out = Vec::new();
        write_lines_with(&mut out, ["a", "b"], "\r\n").unwrap();
        assert_eq!(out, b"a\r\nb\r\n");

        let mut out = Vec::new();
        write_lines(&mut out, vec!["x".to_string()]).unwrap();
        assert_eq!(out, format!("x{}", LINE_SEPARATOR).into_bytes());

        let mut out = Vec::new();
        write_lines(&mut out, Vec::<String>::new()).unwrap();
        assert!(out.is_empty());
    }
}
