//! Random value façade over an owned `rand` generator

use rand::{
    rngs::{OsRng, StdRng, ThreadRng},
    seq::SliceRandom,
    Rng, RngCore, SeedableRng,
};
use tracing::debug;

use super::unique::next_unique_ints;
use crate::config::RandomConfig;
use crate::error::Result;
use crate::utils::check_argument;

const BAD_BOUND: &str = "bound must be positive";
const BAD_RANGE: &str = "bound must be greater than origin";
const NOT_FINITE: &str = "bounds must be finite";

/// Generator chosen at runtime from a [`RandomConfig`].
pub type DynRng = Box<dyn RngCore + Send>;

/// Convenience wrapper around a random number generator.
///
/// The helper owns its generator; share it across threads only behind a lock.
#[derive(Debug, Clone)]
pub struct RandomHelper<R> {
    rng: R,
}

impl RandomHelper<ThreadRng> {
    /// Helper backed by the thread-local generator
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RandomHelper<OsRng> {
    /// Helper backed by operating-system entropy
    pub fn secure() -> Self {
        Self::new(OsRng)
    }
}

impl RandomHelper<StdRng> {
    /// Reproducible helper for a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl RandomHelper<DynRng> {
    /// Builds a helper from configuration: `OsRng` when `secure` is set, a
    /// seeded `StdRng` when a seed is given, otherwise a `StdRng` seeded from
    /// OS entropy.
    pub fn from_config(config: &RandomConfig) -> Result<Self> {
        use crate::utils::UtilityConfig;
        config.validate()?;

        let rng: DynRng = match config.seed {
            Some(seed) => {
                debug!(seed, "using seeded generator");
                Box::new(StdRng::seed_from_u64(seed))
            }
            None if config.secure => {
                debug!("using operating-system generator");
                Box::new(OsRng)
            }
            None => Box::new(StdRng::from_entropy()),
        };
        Ok(Self::new(rng))
    }
}

impl<R: Rng> RandomHelper<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn into_inner(self) -> R {
        self.rng
    }

    pub fn next_bool(&mut self) -> bool {
        self.rng.gen()
    }

    pub fn next_bytes(&mut self, count: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; count];
        self.rng.fill(bytes.as_mut_slice());
        bytes
    }

    pub fn next_u32(&mut self) -> u32 {
        self.rng.gen()
    }

    pub fn next_u64(&mut self) -> u64 {
        self.rng.gen()
    }

    /// Uniform in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        self.rng.gen()
    }

    /// Uniform in `[start, end)`; returns `start` when the range is empty.
    pub fn next_int(&mut self, start: u32, end: u32) -> Result<u32> {
        check_argument(end >= start, BAD_RANGE)?;
        if start == end {
            return Ok(start);
        }
        Ok(self.rng.gen_range(start..end))
    }

    /// Uniform in `[start, end)` over non-negative longs.
    pub fn next_long(&mut self, start: i64, end: i64) -> Result<i64> {
        check_argument(end >= start, BAD_RANGE)?;
        check_argument(start >= 0, BAD_BOUND)?;
        if start == end {
            return Ok(start);
        }
        Ok(self.rng.gen_range(start..end))
    }

    /// Uniform in `[start, end]`.
    pub fn next_double(&mut self, start: f64, end: f64) -> Result<f64> {
        check_argument(start.is_finite() && end.is_finite(), NOT_FINITE)?;
        check_argument(end >= start, BAD_RANGE)?;
        check_argument(start >= 0.0, BAD_BOUND)?;
        if start == end {
            return Ok(start);
        }
        Ok(self.rng.gen_range(start..=end))
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// One element picked uniformly, `None` for an empty slice
    pub fn sample<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }

    /// `size` distinct elements, chosen through [`next_unique_ints`].
    ///
    /// Inherits the sampling bias of the unique-int generator for large inputs.
    pub fn sample_size<'a, T>(&mut self, items: &'a [T], size: usize) -> Result<Vec<&'a T>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }
        let indexes = next_unique_ints(&mut self.rng, items.len(), size)?;
        Ok(indexes.into_iter().map(|i| &items[i]).collect())
    }

    pub fn next_unique_ints(&mut self, bound: usize, size: usize) -> Result<Vec<usize>> {
        next_unique_ints(&mut self.rng, bound, size)
    }
}
