//! Random number sources for the opponent's fallback tier.
//!
//! The policy only ever asks for an index below some bound, so the seam is a
//! one-method trait. Production code uses [`StdRandom`]; tests inject a
//! [`SequenceRandom`] to pin down which empty cell gets picked.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::instrument;

/// Supplies uniformly distributed indices.
pub trait RandomSource {
    /// Returns a value in `0..upper`. `upper` is never zero.
    fn pick(&mut self, upper: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn pick(&mut self, upper: usize) -> usize {
        (**self).pick(upper)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn pick(&mut self, upper: usize) -> usize {
        (**self).pick(upper)
    }
}

/// `rand`-backed source.
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Seeds from the operating system.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic source for reproducible games.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for StdRandom {
    fn pick(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }
}

/// Replays a fixed sequence of values, wrapping around at the end.
///
/// Each value is reduced modulo the requested bound, so `SequenceRandom::new([0])`
/// always picks the first candidate.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<usize>,
    cursor: usize,
}

impl SequenceRandom {
    /// Creates a source from the given values. An empty sequence yields zeros.
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of values handed out so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRandom {
    fn pick(&mut self, upper: usize) -> usize {
        let value = if self.values.is_empty() {
            0
        } else {
            self.values[self.cursor % self.values.len()]
        };
        self.cursor += 1;
        value % upper
    }
}
