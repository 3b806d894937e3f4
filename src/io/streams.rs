//! Reader and writer adapters

use std::collections::VecDeque;
use std::io::{self, Cursor, Read};

/// Reads each inner reader to exhaustion, in order.
///
/// Use `Box<dyn Read>` as `R` to mix reader types.
#[derive(Debug)]
pub struct ConcatReader<R> {
    readers: VecDeque<R>,
}

impl<R> ConcatReader<R> {
    /// Readers not yet exhausted, the current one included.
    pub fn remaining(&self) -> usize {
        self.readers.len()
    }
}

impl<R: Read> Read for ConcatReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        while let Some(current) = self.readers.front_mut() {
            let n = current.read(buf)?;
            if n > 0 {
                return Ok(n);
            }
            self.readers.pop_front();
        }
        Ok(0)
    }
}

/// Chains `readers` into a single reader.
pub fn concat<I, R>(readers: I) -> ConcatReader<R>
where
    I: IntoIterator<Item = R>,
    R: Read,
{
    ConcatReader { readers: readers.into_iter().collect() }
}

/// Writer that discards everything.
pub fn null_writer() -> io::Sink {
    io::sink()
}

/// Reader that is always at end of input.
pub fn null_reader() -> io::Empty {
    io::empty()
}

/// In-memory reader over bytes or text.
pub fn to_reader<T: AsRef<[u8]>>(data: T) -> Cursor<T> {
    Cursor::new(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_concat_in_order() {
        let mut text = String::new();
        concat(vec![to_reader("ab"), to_reader(""), to_reader("cd")])
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text, "abcd");
    }

    #[test]
    fn test_concat_mixed_readers_small_buffer() {
        let readers: Vec<Box<dyn Read>> = vec![
            Box::new(to_reader(b"hello ".to_vec())),
            Box::new(null_reader()),
            Box::new("world".as_bytes()),
        ];
        let mut reader = concat(readers);
        assert_eq!(reader.remaining(), 3);

        let mut out = Vec::new();
        let mut buf = [0u8; 4];
        loop {
            let n = reader.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            out.extend_from_slice(&buf[..n]);
        }
        assert_eq!(out, b"hello world");
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_null_streams() {
        let mut writer = null_writer();
        writer.write_all(b"ignored").unwrap();
        let mut text = String::new();
        assert_eq!(null_reader().read_to_string(&mut text).unwrap(), 0);
        assert_eq!(concat(Vec::<Cursor<Vec<u8>>>::new()).read(&mut [0u8; 8]).unwrap(), 0);
    }
}
