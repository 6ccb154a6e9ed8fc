//! The fixed pause between simulated requests.
//!
//! The interval is drawn exactly once per process from an [`IntervalPolicy`]
//! using a random source that is seeded at startup and passed in by the
//! caller. Nothing here holds global generator state.

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

/// Whole-second pause between two consecutive request lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval(u64);

impl Interval {
    /// Interval of `secs` whole seconds.
    pub fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Length in whole seconds.
    pub fn secs(self) -> u64 {
        self.0
    }

    /// Length as a `Duration` for the timer.
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(self.0)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

/// Inclusive whole-second range an [`Interval`] is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IntervalPolicy {
    /// Shortest possible interval in seconds.
    pub min_secs: u64,

    /// Longest possible interval in seconds (inclusive).
    pub max_secs: u64,
}

impl IntervalPolicy {
    /// Range from `min_secs` to `max_secs`, both inclusive.
    pub fn new(min_secs: u64, max_secs: u64) -> Self {
        Self { min_secs, max_secs }
    }

    /// Draw one interval.
    ///
    /// Picks a uniform offset in `0..=(max - min)` and adds `min`. With the
    /// default policy that is a value in {0, 1, 2} plus one second.
    /// An inverted range collapses to `min`; validation rejects it earlier.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> Interval {
        let span = self.max_secs.saturating_sub(self.min_secs);
        let offset = rng.gen_range(0..=span);
        Interval(self.min_secs + offset)
    }

    /// Whether `interval` could have come from this policy.
    pub fn contains(&self, interval: Interval) -> bool {
        (self.min_secs..=self.max_secs).contains(&interval.0)
    }
}

impl Default for IntervalPolicy {
    fn default() -> Self {
        Self {
            min_secs: 1,
            max_secs: 3,
        }
    }
}

/// Seed derived from the wall clock at nanosecond resolution.
///
/// The 128-bit nanosecond count is folded into 64 bits. A clock set before
/// the UNIX epoch yields 0.
pub fn clock_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    (nanos as u64) ^ ((nanos >> 64) as u64)
}

/// Build the process random source, from `seed` or from the clock.
pub fn seeded_rng(seed: Option<u64>) -> (StdRng, u64) {
    let seed = seed.unwrap_or_else(clock_seed);
    (StdRng::seed_from_u64(seed), seed)
}
