//! Amplitude sources for the mouth driver.

use std::f64::consts::TAU;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use crate::types::Proportion;

/// Something that can be sampled for a current proportion.
///
/// The mouth driver samples once per tick and applies no smoothing; any
/// smoothing is the provider's job.
pub trait ProportionProvider: Send + Sync {
    fn proportion(&self) -> Proportion;
}

/// Always returns the same level.
#[derive(Debug, Clone, Copy)]
pub struct ConstantLevel(pub Proportion);

impl ProportionProvider for ConstantLevel {
    fn proportion(&self) -> Proportion {
        self.0
    }
}

/// A level that another thread (an audio callback) can update.
#[derive(Debug)]
pub struct SharedLevel(AtomicU64);

impl SharedLevel {
    pub fn new(level: Proportion) -> Self {
        Self(AtomicU64::new(level.value().to_bits()))
    }

    pub fn set(&self, level: Proportion) {
        self.0.store(level.value().to_bits(), Ordering::Release);
    }
}

impl Default for SharedLevel {
    fn default() -> Self {
        Self::new(Proportion::ZERO)
    }
}

impl ProportionProvider for SharedLevel {
    fn proportion(&self) -> Proportion {
        Proportion::clamped(f64::from_bits(self.0.load(Ordering::Acquire)))
    }
}

/// Raised-cosine oscillation between closed and open, starting closed.
#[derive(Debug, Clone)]
pub struct Oscillator {
    hz: f64,
    started: Instant,
}

impl Oscillator {
    pub fn new(hz: f64) -> Self {
        Self {
            hz,
            started: Instant::now(),
        }
    }

    /// Level at `seconds` after the oscillator started.
    pub fn level_at(&self, seconds: f64) -> Proportion {
        Proportion::clamped((1.0 - (TAU * self.hz * seconds).cos()) / 2.0)
    }
}

impl ProportionProvider for Oscillator {
    fn proportion(&self) -> Proportion {
        self.level_at(self.started.elapsed().as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_level() {
        let level = ConstantLevel(Proportion::new(0.4).unwrap());
        assert_eq!(level.proportion().value(), 0.4);
    }

    #[test]
    fn test_shared_level_updates() {
        let level = SharedLevel::default();
        assert_eq!(level.proportion(), Proportion::ZERO);

        level.set(Proportion::new(0.8).unwrap());
        assert_eq!(level.proportion().value(), 0.8);
    }

    #[test]
    fn test_oscillator_shape() {
        let osc = Oscillator::new(2.0);
        assert!(osc.level_at(0.0).value().abs() < 1e-12);
        assert!((osc.level_at(0.25).value() - 1.0).abs() < 1e-12);
        assert!(osc.level_at(0.5).value().abs() < 1e-12);
        assert!((osc.level_at(0.125).value() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_oscillator_stays_in_range() {
        let osc = Oscillator::new(3.7);
        for i in 0..1000 {
            let v = osc.level_at(i as f64 * 0.0013).value();
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_providers_as_trait_objects() {
        let providers: Vec<Box<dyn ProportionProvider>> = vec![
            Box::new(ConstantLevel(Proportion::ONE)),
            Box::new(SharedLevel::new(Proportion::ONE)),
        ];
        for provider in providers {
            assert_eq!(provider.proportion(), Proportion::ONE);
        }
    }
}
