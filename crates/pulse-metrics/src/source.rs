//! Random source seam
//!
//! Generators never touch ambient randomness. They draw from a
//! [`RandomSource`], which every `rand::Rng` already is; tests and previews can
//! pin draws to the bounds with [`PinnedSource`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Bounded uniform sampling, both ends inclusive
pub trait RandomSource {
    fn uniform_int(&mut self, low: i64, high: i64) -> i64;

    fn uniform_float(&mut self, low: f64, high: f64) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform_int(&mut self, low: i64, high: i64) -> i64 {
        debug_assert!(low <= high, "empty integer range {}..={}", low, high);
        self.gen_range(low..=high)
    }

    fn uniform_float(&mut self, low: f64, high: f64) -> f64 {
        debug_assert!(low <= high, "empty float range {}..={}", low, high);
        self.gen_range(low..=high)
    }
}

/// Source that always returns the lower or the upper bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinnedSource {
    Low,
    High,
}

impl RandomSource for PinnedSource {
    fn uniform_int(&mut self, low: i64, high: i64) -> i64 {
        match self {
            Self::Low => low,
            Self::High => high,
        }
    }

    fn uniform_float(&mut self, low: f64, high: f64) -> f64 {
        match self {
            Self::Low => low,
            Self::High => high,
        }
    }
}

/// Standard generator seeded from `seed`, or from OS entropy when absent
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
