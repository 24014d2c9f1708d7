//! Random source for bounce jitter
//!
//! Bounces are rotated by a small random angle so trajectories never settle
//! into a perfectly repeating loop. The source is injected so runs can be
//! replayed from a seed, and tests can pin it to a fixed value.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::BOUNCE_JITTER;

/// Supplies uniform samples in [0, 1)
pub trait JitterSource {
    fn unit(&mut self) -> f32;

    /// Draw a jitter angle in [-BOUNCE_JITTER, BOUNCE_JITTER)
    fn angle(&mut self) -> f32 {
        (self.unit() - 0.5) * 2.0 * BOUNCE_JITTER
    }
}

/// Seeded PCG-backed jitter (deterministic for a given seed)
#[derive(Debug, Clone)]
pub struct SeededJitter {
    rng: Pcg32,
}

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl JitterSource for SeededJitter {
    fn unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}

/// Always returns the same sample. `FixedJitter(0.5)` disables jitter.
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub f32);

impl JitterSource for FixedJitter {
    fn unit(&mut self) -> f32 {
        self.0
    }
}
