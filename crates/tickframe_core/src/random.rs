//! Random Sources
//!
//! Animators never reach for a process-wide generator. Every draw goes through a
//! [`RandomSource`] that the caller owns and lends to the animator, which keeps
//! randomness injectable and seedable.
//!
//! - [`StdRandom`]: production source backed by `rand`'s `StdRng`.
//! - [`ScriptedRandom`]: replays a fixed sequence, for deterministic tests.
//!
//! Sources are plain `&mut` state. Sharing one between animators that advance on
//! different threads requires external serialization; the usual arrangement is
//! confinement, with one owner advancing every animator in turn.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Supplier of uniformly distributed integers over half-open ranges.
pub trait RandomSource {
    /// Returns a value in `[min, max)`.
    ///
    /// Callers must guarantee `min < max`. An empty range yields `min` instead
    /// of panicking.
    fn uniform(&mut self, min: u32, max: u32) -> u32;

    /// Returns a value in `[min, max)` that differs from `exclude`, resampling
    /// on collision.
    ///
    /// Range adjustment happens before sampling:
    /// - `exclude == min` shrinks the upper bound by one.
    /// - otherwise `exclude == max` raises the lower bound by one.
    ///
    /// If the adjusted range holds at most one value, that value (the adjusted
    /// `min`) is returned without sampling, even when it equals `exclude`. This
    /// keeps every call terminating for ranges of width two or less.
    fn uniform_excluding(&mut self, min: u32, max: u32, exclude: u32) -> u32 {
        let (mut lo, mut hi) = (min, max);
        if exclude == min {
            hi = hi.saturating_sub(1);
        } else if exclude == max {
            lo = lo.saturating_add(1);
        }

        if hi <= lo.saturating_add(1) {
            if lo == exclude {
                log::trace!(
                    "uniform_excluding({min}, {max}, {exclude}): single choice, exclusion dropped"
                );
            }
            return lo;
        }

        loop {
            let value = self.uniform(lo, hi);
            if value != exclude {
                return value;
            }
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn uniform(&mut self, min: u32, max: u32) -> u32 {
        (**self).uniform(min, max)
    }

    #[inline]
    fn uniform_excluding(&mut self, min: u32, max: u32, exclude: u32) -> u32 {
        (**self).uniform_excluding(min, max, exclude)
    }
}

// ============================================================================
// StdRandom
// ============================================================================

/// Default random source over `StdRng`.
#[derive(Debug)]
pub struct StdRandom {
    rng: StdRng,
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl StdRandom {
    /// Creates a source seeded from the thread-local entropy generator.
    #[must_use]
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    /// Creates a deterministic source. The same seed always yields the same
    /// sequence of draws.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for StdRandom {
    #[inline]
    fn uniform(&mut self, min: u32, max: u32) -> u32 {
        debug_assert!(min < max, "uniform({min}, {max}): empty range");
        if min >= max {
            return min;
        }
        self.rng.random_range(min..max)
    }
}

// ============================================================================
// ScriptedRandom
// ============================================================================

/// Replays a fixed sequence of draws, cycling when exhausted.
///
/// Each scripted value is an offset from `min`, wrapped into the width of the
/// requested range, so `ScriptedRandom::new([0])` always yields the lower bound.
/// A script whose every value lands on the excluded frame makes
/// [`RandomSource::uniform_excluding`] spin forever; keep at least one escape.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRandom {
    /// A source that replays `values` in order, cycling when exhausted.
    #[must_use]
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// A source that always draws the same offset.
    #[must_use]
    pub fn constant(offset: u32) -> Self {
        Self::new([offset])
    }

    /// Number of `uniform` draws consumed so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform(&mut self, min: u32, max: u32) -> u32 {
        if min >= max || self.values.is_empty() {
            return min;
        }
        let offset = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        min + offset % (max - min)
    }
}
