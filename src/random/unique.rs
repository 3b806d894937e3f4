//! Unique random sampling
//!
//! Draws `size` pairwise-distinct integers from `[0, bound)`. Bounds below
//! [`SMALL_BOUND_THRESHOLD`] are handled by a partial Fisher–Yates shuffle;
//! larger bounds are split in half and both halves are sampled recursively.
//!
//! The split always divides `size` evenly between the two halves, without
//! weighting by the size of each half. Results are distinct and in range, but
//! the distribution is not that of true uniform sampling without replacement:
//! e.g. `next_unique_ints(rng, 64, 10)` always returns exactly five values
//! below 32.

use rand::Rng;
use tracing::trace;

use crate::error::Result;
use crate::utils::check_argument;

/// Bounds below this value are sampled directly by shuffling.
pub const SMALL_BOUND_THRESHOLD: usize = 32;

/// Returns `size` distinct integers in `[0, bound)`.
///
/// Fails with `InvalidArgument` when `size > bound`. The order of the returned
/// values is an artifact of the algorithm.
pub fn next_unique_ints<R: Rng + ?Sized>(rng: &mut R, bound: usize, size: usize) -> Result<Vec<usize>> {
    check_argument(size <= bound, "size must not be greater than bound")?;

    let mut result = vec![0usize; size];
    fill_unique(rng, bound, &mut result);
    Ok(result)
}

fn fill_unique<R: Rng + ?Sized>(rng: &mut R, bound: usize, out: &mut [usize]) {
    if bound < SMALL_BOUND_THRESHOLD {
        fill_small(rng, bound, out);
        return;
    }

    let bound_left = bound / 2;
    let size_left = out.len() / 2;
    trace!(bound, bound_left, size = out.len(), size_left, "splitting sample");

    let (left, right) = out.split_at_mut(size_left);
    fill_unique(rng, bound_left, left);
    fill_offset(rng, bound_left, bound, right);
}

/// Samples from `[start, bound)` by sampling `[0, bound - start)` and shifting.
fn fill_offset<R: Rng + ?Sized>(rng: &mut R, start: usize, bound: usize, out: &mut [usize]) {
    fill_unique(rng, bound - start, out);
    for value in out.iter_mut() {
        *value += start;
    }
}

fn fill_small<R: Rng + ?Sized>(rng: &mut R, bound: usize, out: &mut [usize]) {
    let mut numbers: Vec<usize> = (0..bound).collect();

    // Position i is swapped with a position strictly after it. The last
    // position of a full permutation has no successor and stays put.
    for i in 0..out.len() {
        if i + 1 < bound {
            let n = rng.gen_range(i + 1..bound);
            numbers.swap(i, n);
        }
    }

    out.copy_from_slice(&numbers[..out.len()]);
}
