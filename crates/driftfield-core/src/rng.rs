#![forbid(unsafe_code)]

//! Injectable random source.
//!
//! Every random draw of the simulator goes through [`RandomSource`], so a
//! seeded generator makes whole runs reproducible.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Uniform random numbers in `[0, 1)`.
pub trait RandomSource {
    /// Next value, uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform in `[lo, hi)`. Returns `lo` when the range is empty.
    fn range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        if hi <= lo {
            return lo;
        }
        lo + (hi - lo) * self.next_f64()
    }

    /// Uniform integer in `[lo, hi)`. Returns `lo` when the range is empty.
    fn range_u32(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        let span = hi - lo;
        let offset = (self.next_f64() * f64::from(span)) as u32;
        lo + offset.min(span - 1)
    }
}

impl<R: RngCore + ?Sized> RandomSource for R {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        self.gen_range(0.0..1.0)
    }
}

/// Deterministic generator for a seed.
#[must_use]
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
