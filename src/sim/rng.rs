//! Random sources for spawn jitter
//!
//! The simulation never touches a global RNG. Everything random goes through
//! [`RandomSource`], so a run can be replayed from its seed and tests can
//! script exact spawn positions and speeds.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform randomness in `[0, 1)`
pub trait RandomSource {
    /// Next uniform sample in `[0, 1)`
    fn next_unit(&mut self) -> f32;

    /// Uniform float in `[lo, hi)`
    fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_unit() * (hi - lo)
    }

    /// Uniform integer in `[min, max]` (both inclusive)
    fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let span = (max - min + 1) as f32;
        let offset = (self.next_unit() * span).floor() as i32;
        min + offset.min(max - min)
    }

    /// Uniformly pick one element of a non-empty slice
    fn pick<T: Copy>(&mut self, items: &[T]) -> T
    where
        Self: Sized,
    {
        let last = items.len() as i32 - 1;
        items[self.range_inclusive(0, last) as usize]
    }
}

/// PCG32-backed source used for real runs
#[derive(Debug, Clone)]
pub struct SeededRng {
    seed: u64,
    rng: Pcg32,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRng {
    fn next_unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}

/// Replays a fixed list of samples, cycling when exhausted
///
/// Used to pin spawns to known values in tests and replays.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    samples: Vec<f32>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(samples: impl Into<Vec<f32>>) -> Self {
        let mut samples = samples.into();
        if samples.is_empty() {
            samples.push(0.0);
        }
        for s in &mut samples {
            *s = s.clamp(0.0, 0.999_999);
        }
        Self { samples, cursor: 0 }
    }

    /// Source that always returns the same sample
    pub fn constant(sample: f32) -> Self {
        Self::new(vec![sample])
    }
}

impl RandomSource for ScriptedRng {
    fn next_unit(&mut self) -> f32 {
        let sample = self.samples[self.cursor];
        self.cursor = (self.cursor + 1) % self.samples.len();
        sample
    }
}
