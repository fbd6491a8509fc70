//! Random perturbation applied on every update.
//!
//! The tracker only sees the `Jitter` trait, so tests (or a replay) can feed an exact
//! sequence of draws instead of the random one.
//!
use rand::distr::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::TrackerStatus;

/// Default bound, in degrees, roughly 55 m of latitude.
pub const DEFAULT_JITTER: f64 = 0.0005;

/// Source of per-axis offsets.
///
pub trait Jitter {
    /// Next offset, expected within `[-bound(), bound()]`.
    fn draw(&mut self) -> f64;

    /// Largest absolute value `draw()` returns.
    fn bound(&self) -> f64;
}

/// Uniform draws over `[-bound, +bound]`.
///
#[derive(Clone, Debug)]
pub struct UniformJitter {
    bound: f64,
    dist: Uniform<f64>,
    rng: StdRng,
}

impl UniformJitter {
    /// Seeded from the OS.
    ///
    pub fn new(bound: f64) -> Result<Self, TrackerStatus> {
        Self::with_rng(bound, StdRng::from_os_rng())
    }

    /// Reproducible sequence for a given seed.
    ///
    pub fn seeded(bound: f64, seed: u64) -> Result<Self, TrackerStatus> {
        Self::with_rng(bound, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bound: f64, rng: StdRng) -> Result<Self, TrackerStatus> {
        let bound = check_bound(bound)?;
        let dist = Uniform::new_inclusive(-bound, bound)
            .map_err(|_| TrackerStatus::BadJitter(bound))?;
        Ok(UniformJitter { bound, dist, rng })
    }
}

impl Jitter for UniformJitter {
    fn draw(&mut self) -> f64 {
        self.rng.sample(self.dist)
    }

    fn bound(&self) -> f64 {
        self.bound
    }
}

/// Replay a fixed list of draws, cycling when exhausted.  An empty list always draws 0.
///
#[derive(Clone, Debug, Default)]
pub struct SequenceJitter {
    draws: Vec<f64>,
    pos: usize,
}

impl SequenceJitter {
    pub fn new(draws: Vec<f64>) -> Self {
        SequenceJitter { draws, pos: 0 }
    }
}

impl Jitter for SequenceJitter {
    fn draw(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.;
        }
        let v = self.draws[self.pos % self.draws.len()];
        self.pos += 1;
        trace!("draw #{} = {v}", self.pos);
        v
    }

    fn bound(&self) -> f64 {
        self.draws.iter().fold(0., |acc: f64, v| acc.max(v.abs()))
    }
}

/// A bound is usable when the whole `[-bound, +bound]` range is representable.
///
#[inline]
pub fn check_bound(bound: f64) -> Result<f64, TrackerStatus> {
    if bound >= 0. && (2. * bound).is_finite() {
        Ok(bound)
    } else {
        Err(TrackerStatus::BadJitter(bound))
    }
}
