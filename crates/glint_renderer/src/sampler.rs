//! Random sampling for the path tracer.
//!
//! One `Sampler` drives a whole render. It is seeded explicitly so a render
//! with the same seed and scene is reproducible.

use glint_math::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 5489;

/// Uniform random source for pixel jitter and bounce decisions.
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    /// Create a sampler from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A uniform value in `[0, 1)`.
    #[inline]
    pub fn random_float(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }

    /// A random point in `[0, 1)^3` inside the unit ball.
    ///
    /// Rejection sampled from three `random_float` draws, so every component
    /// is non-negative: the result covers one octant of the ball only.
    pub fn random_vec(&mut self) -> Vec3 {
        loop {
            let v = Vec3::new(self.random_float(), self.random_float(), self.random_float());
            if v.length_squared() < 1.0 {
                return v;
            }
        }
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
