//! Random rolls
//!
//! Every random decision in the engine (sleep length, thaw, paralysis)
//! goes through a [`RandomSource`], so battles replay exactly under a seed
//! and tests can script the outcome of each roll.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniform samples in `[0, 1)`
pub trait RandomSource {
    /// Next uniform sample in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Roll against a probability; succeeds when the sample is below `probability`
    fn chance(&mut self, probability: f64) -> bool {
        self.next_unit() < probability
    }

    /// Pick an integer uniformly from `min..=max`
    fn range_inclusive(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        // Widened so a full u32 range does not overflow
        let span = (max as u64 - min as u64 + 1) as f64;
        let offset = (self.next_unit() * span).floor() as u64;
        // A sample of exactly 1.0 from a misbehaving source must not overshoot
        (min as u64 + offset).min(max as u64) as u32
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// A [`RandomSource`] backed by a `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wrap an existing generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Thread-local generator, seeded from the OS
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// Reproducible generator for replays and seeded simulations
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed sequence of samples, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedRolls {
    samples: Vec<f64>,
    next: usize,
}

impl ScriptedRolls {
    /// Create from a list of samples; an empty list always yields 0.0
    pub fn new(samples: impl Into<Vec<f64>>) -> Self {
        Self {
            samples: samples.into(),
            next: 0,
        }
    }

    /// Always return the same sample
    pub fn constant(sample: f64) -> Self {
        Self::new(vec![sample])
    }

    /// Number of samples drawn so far
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl RandomSource for ScriptedRolls {
    fn next_unit(&mut self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sample = self.samples[self.next % self.samples.len()];
        self.next += 1;
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_u32_range() {
        assert_eq!(ScriptedRolls::constant(0.0).range_inclusive(0, u32::MAX), 0);
        assert_eq!(
            ScriptedRolls::constant(0.999_999_999).range_inclusive(0, u32::MAX),
            (0.999_999_999 * 4_294_967_296.0_f64).floor() as u32
        );
        assert_eq!(
            ScriptedRolls::constant(1.0).range_inclusive(0, u32::MAX),
            u32::MAX
        );
        assert_eq!(
            ScriptedRolls::constant(0.5).range_inclusive(1, u32::MAX),
            1 + (0.5 * 4_294_967_295.0_f64).floor() as u32
        );
    }

    #[test]
    fn test_scripted_cycles() {
        let mut rolls = ScriptedRolls::new(vec![0.1, 0.9]);
        assert_eq!(rolls.next_unit(), 0.1);
        assert_eq!(rolls.next_unit(), 0.9);
        assert_eq!(rolls.next_unit(), 0.1);
        assert_eq!(rolls.drawn(), 3);
    }

    #[test]
    fn test_empty_script() {
        let mut rolls = ScriptedRolls::new(Vec::<f64>::new());
        assert_eq!(rolls.next_unit(), 0.0);
    }

    #[test]
    fn test_chance_is_strictly_below() {
        assert!(ScriptedRolls::constant(0.19).chance(0.2));
        assert!(!ScriptedRolls::constant(0.2).chance(0.2));
        // Zero probability never succeeds
        assert!(!ScriptedRolls::constant(0.0).chance(0.0));
    }

    #[test]
    fn test_range_inclusive_buckets() {
        assert_eq!(ScriptedRolls::constant(0.0).range_inclusive(1, 3), 1);
        assert_eq!(ScriptedRolls::constant(0.34).range_inclusive(1, 3), 2);
        assert_eq!(ScriptedRolls::constant(0.67).range_inclusive(1, 3), 3);
        assert_eq!(ScriptedRolls::constant(0.999).range_inclusive(1, 3), 3);
        assert_eq!(ScriptedRolls::constant(1.0).range_inclusive(1, 3), 3);
        assert_eq!(ScriptedRolls::constant(0.5).range_inclusive(2, 2), 2);
    }

    #[test]
    fn test_rng_bounds() {
        let mut source = RngSource::thread();

        for _ in 0..100 {
            let sample = source.next_unit();
            assert!((0.0..1.0).contains(&sample), "sample {} out of range", sample);

            let turns = source.range_inclusive(1, 3);
            assert!((1..=3).contains(&turns), "range {} out of bounds", turns);
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = RngSource::seeded(42);
        let mut b = RngSource::seeded(42);

        for _ in 0..20 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }

    #[test]
    fn test_mut_ref_source() {
        fn draw<R: RandomSource>(mut source: R) -> f64 {
            source.next_unit()
        }

        let mut rolls = ScriptedRolls::new(vec![0.5, 0.25]);
        assert_eq!(draw(&mut rolls), 0.5);
        assert_eq!(rolls.next_unit(), 0.25);
    }
}
