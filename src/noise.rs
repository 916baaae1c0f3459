/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Noise sources for the unit dynamics.
//!
//! The update rule only sees the [`NoiseSource`] trait, so a
//! hardware-calibrated noise model can replace [`UniformNoise`] without
//! touching the engine.
//!
//! # Invariants
//!
//! - Samples are symmetric around zero: noise can both advance and retard a
//!   unit's progress toward its threshold.
//! - A source seeded with the same value yields the same sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of per-unit, per-step perturbations in fixed-point units.
pub trait NoiseSource {
    /// Draw one sample from `[-span, span]`. A `span` of zero (or less) must
    /// return 0.
    fn sample(&mut self, span: i64) -> i64;
}

impl<N: NoiseSource + ?Sized> NoiseSource for &mut N {
    fn sample(&mut self, span: i64) -> i64 {
        (**self).sample(span)
    }
}

impl<N: NoiseSource + ?Sized> NoiseSource for Box<N> {
    fn sample(&mut self, span: i64) -> i64 {
        (**self).sample(span)
    }
}

/// Uniform integer noise from a seeded [`StdRng`].
#[derive(Clone, Debug)]
pub struct UniformNoise {
    rng: StdRng,
}

impl UniformNoise {
    /// Reproducible source for `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl NoiseSource for UniformNoise {
    fn sample(&mut self, span: i64) -> i64 {
        if span <= 0 {
            return 0;
        }
        self.rng.gen_range(-span..=span)
    }
}

/// Noise source that always returns 0. Makes the dynamics deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl NoiseSource for Silent {
    fn sample(&mut self, _span: i64) -> i64 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_noise_stays_in_span() {
        let mut noise = UniformNoise::seeded(7);
        for _ in 0..10_000 {
            let s = noise.sample(1024);
            assert!((-1024..=1024).contains(&s), "sample {} escaped span", s);
        }
    }

    #[test]
    fn test_uniform_noise_is_bidirectional() {
        let mut noise = UniformNoise::seeded(11);
        let samples: Vec<i64> = (0..1_000).map(|_| noise.sample(256)).collect();
        assert!(samples.iter().any(|&s| s > 0));
        assert!(samples.iter().any(|&s| s < 0));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = UniformNoise::seeded(42);
        let mut b = UniformNoise::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.sample(1 << 20), b.sample(1 << 20));
        }
    }

    #[test]
    fn test_zero_span_is_silent() {
        let mut noise = UniformNoise::seeded(3);
        assert_eq!(noise.sample(0), 0);
        assert_eq!(Silent.sample(1 << 30), 0);
    }

    #[test]
    fn test_dyn_source_through_box() {
        let mut boxed: Box<dyn NoiseSource> = Box::new(Silent);
        assert_eq!(boxed.sample(100), 0);
    }
}
