//! Lazy arithmetic ranges with an arbitrary non-zero step

use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use crate::error::{Error, Result};

/// `start, start + step, …` up to but excluding `end`, computed on demand.
#[derive(Debug, Clone, Copy)]
pub struct Range {
    start: i64,
    end: i64,
    step: i64,
}

impl Range {
    /// Unit-step range. `end <= start` gives an empty range.
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end, step: 1 }
    }

    /// Fails when `step` is zero or points away from `end`.
    pub fn with_step(start: i64, end: i64, step: i64) -> Result<Self> {
        if step == 0 {
            return Err(Error::invalid("The step cannot be 0"));
        }
        if end != start && ((end > start) != (step > 0)) {
            return Err(Error::invalid("The step given will result in infinite flow"));
        }
        Ok(Self { start, end, step })
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    /// Number of values, saturating at `usize::MAX` on narrow targets.
    pub fn len(&self) -> usize {
        let forward = self.step > 0 && self.end > self.start;
        let backward = self.step < 0 && self.end < self.start;
        if !(forward || backward) {
            return 0;
        }
        let distance = self.end.abs_diff(self.start);
        let count = (distance - 1) / self.step.unsigned_abs() + 1;
        usize::try_from(count).unwrap_or(usize::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<i64> {
        if index < self.len() {
            Some(self.value_at(index))
        } else {
            None
        }
    }

    pub fn last(&self) -> Option<i64> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    pub fn iter(&self) -> RangeIter {
        RangeIter { range: *self, index: 0, len: self.len() }
    }

    pub fn to_vec(&self) -> Vec<i64> {
        self.iter().collect()
    }

    // Only called with `index < len()`, which keeps the result within i64.
    fn value_at(&self, index: usize) -> i64 {
        (i128::from(self.start) + index as i128 * i128::from(self.step)) as i64
    }
}

/// Two ranges are equal when they produce the same values.
impl PartialEq for Range {
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() && other.is_empty() {
            return true;
        }
        self.len() == other.len()
            && self.start == other.start
            && self.step == other.step
            && self.last() == other.last()
    }
}

impl Eq for Range {}

impl Hash for Range {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let len = self.len();
        len.hash(state);
        if len > 0 {
            self.start.hash(state);
            self.step.hash(state);
        }
    }
}

impl IntoIterator for Range {
    type Item = i64;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a Range {
    type Item = i64;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct RangeIter {
    range: Range,
    index: usize,
    len: usize,
}

impl Iterator for RangeIter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.index >= self.len {
            return None;
        }
        let value = self.range.value_at(self.index);
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RangeIter {}
impl FusedIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_invalid_steps() {
        assert!(Range::with_step(1, 10, -1).is_err());
        assert!(Range::with_step(10, 1, 1).is_err());
        assert!(Range::with_step(1, 10, 0).is_err());
        assert!(Range::with_step(3, 3, -1).is_ok());
    }

    #[test]
    fn test_values() {
        assert!(Range::new(1, 1).to_vec().is_empty());
        assert_eq!(Range::new(1, 10).to_vec(), (1..10).collect::<Vec<_>>());
        assert_eq!(Range::with_step(1, 10, 2).unwrap().to_vec(), vec![1, 3, 5, 7, 9]);
        assert_eq!(Range::with_step(1, 11, 2).unwrap().to_vec(), vec![1, 3, 5, 7, 9]);
        assert_eq!(Range::with_step(7, 2, -2).unwrap().to_vec(), vec![7, 5, 3]);
        assert!(Range::new(5, 1).is_empty());
    }

    #[test]
    fn test_len() {
        let cases = [
            ((0, 0, 1), 0), ((0, 1, 1), 1), ((2, 2, 2), 0), ((2, 3, 2), 1),
            ((2, 4, 2), 1), ((2, 5, 2), 2), ((2, 6, 2), 2), ((2, 7, 2), 3),
            ((2, 2, -2), 0), ((3, 2, -2), 1), ((4, 2, -2), 1), ((5, 2, -2), 2),
            ((6, 2, -2), 2), ((7, 2, -2), 3),
        ];
        for ((start, end, step), len) in cases {
            let range = Range::with_step(start, end, step).unwrap();
            assert_eq!(range.len(), len, "{:?}", range);
            assert_eq!(range.iter().len(), len);
        }
    }

    #[test]
    fn test_get_matches_iter() {
        let range = Range::with_step(-3, 20, 4).unwrap();
        let by_index: Vec<i64> = (0..range.len()).filter_map(|i| range.get(i)).collect();
        assert_eq!(by_index, range.to_vec());
        assert_eq!(range.get(range.len()), None);
    }

    #[test]
    fn test_equality_and_hash() {
        let a = Range::with_step(0, 10, 2).unwrap();
        let b = Range::with_step(0, 9, 2).unwrap();
        assert_eq!(a, b);
        assert_eq!(Range::new(0, 1), Range::new(0, 1));
        assert_eq!(Range::new(4, 4), Range::new(9, 2));
        assert_ne!(Range::new(0, 3), Range::new(1, 3));

        let set: HashSet<Range> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_extreme_bounds() {
        let full = Range::new(i64::MIN, i64::MAX);
        assert_eq!(full.len() as u64, u64::MAX);
        assert_eq!(full.get(0), Some(i64::MIN));
        assert_eq!(full.last(), Some(i64::MAX - 1));

        let halves = Range::with_step(0, i64::MAX, 2).unwrap();
        assert_eq!(halves.len() as u64, 1u64 << 62);
        assert_eq!(halves.last(), Some(i64::MAX - 1));

        assert!(Range::with_step(i64::MIN, i64::MAX, 1).is_ok());
        assert!(Range::with_step(i64::MAX, i64::MIN, 1).is_err());

        let wide = Range::with_step(i64::MIN, i64::MAX, i64::MAX).unwrap();
        assert_eq!(wide.to_vec(), vec![i64::MIN, -1, i64::MAX - 1]);

        let down = Range::with_step(i64::MAX, i64::MIN, i64::MIN).unwrap();
        assert_eq!(down.to_vec(), vec![i64::MAX, -1]);
        assert_eq!(down.iter().len(), 2);
    }
}
