//! Random integer sources.

use rand::rngs::{SmallRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A source of uniformly distributed integers.
///
/// Implementations must return a value in `[min, max]`, inclusive on
/// both ends. Callers guarantee `min <= max`.
pub trait RandomSource {
    /// Draws an integer in `[min, max]`.
    fn random_int(&mut self, min: usize, max: usize) -> usize;
}

impl<F> RandomSource for F
where
    F: FnMut(usize, usize) -> usize,
{
    fn random_int(&mut self, min: usize, max: usize) -> usize {
        self(min, max)
    }
}

/// Adapts a `rand` generator into a [`RandomSource`].
///
/// # Example
///
/// ```
/// use mug_seed::random::{RandomSource, RngSource};
///
/// let mut source = RngSource::seeded(7);
/// let n = source.random_int(1, 6);
/// assert!((1..=6).contains(&n));
/// ```
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<SmallRng> {
    /// Deterministic source seeded from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl RngSource<ThreadRng> {
    /// Source backed by the thread-local generator.
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn random_int(&mut self, min: usize, max: usize) -> usize {
        self.rng.random_range(min..=max)
    }
}

/// Always draws the lower bound.
///
/// Makes every shuffle and every group pick reproducible, which is what
/// the allocator tests use as an oracle.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowerBound;

impl RandomSource for LowerBound {
    fn random_int(&mut self, min: usize, _max: usize) -> usize {
        min
    }
}

/// Replays a fixed sequence of values, cycling when exhausted.
///
/// Each value is clamped into the requested range. An empty script
/// always draws the lower bound.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: Vec<usize>,
    index: usize,
}

impl ScriptedSource {
    /// Creates a source replaying `values` in order.
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, index: 0 }
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.index
    }
}

impl RandomSource for ScriptedSource {
    fn random_int(&mut self, min: usize, max: usize) -> usize {
        if self.values.is_empty() {
            self.index += 1;
            return min;
        }
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value.clamp(min, max)
    }
}
