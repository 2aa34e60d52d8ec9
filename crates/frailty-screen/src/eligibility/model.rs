//! Weighted-feature score standing in for a trained prediction model.

use super::features::FeatureVector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

pub const MODEL_BASELINE: f64 = 50.0;
pub const NOISE_AMPLITUDE: f64 = 2.5;

/// Fixed feature weights of the simulated model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureWeights {
    pub chronic_complexity: f64,
    pub functional_impairment: f64,
    pub healthcare_intensity: f64,
    pub medication_burden: f64,
    pub support_needs: f64,
}

impl FeatureWeights {
    pub const SIMULATED: Self = Self {
        chronic_complexity: 0.25,
        functional_impairment: 0.30,
        healthcare_intensity: 0.20,
        medication_burden: 0.15,
        support_needs: 0.10,
    };

    pub fn weigh(&self, features: &FeatureVector) -> f64 {
        f64::from(features.chronic_complexity) * self.chronic_complexity
            + f64::from(features.functional_impairment) * self.functional_impairment
            + f64::from(features.healthcare_intensity) * self.healthcare_intensity
            + f64::from(features.medication_burden) * self.medication_burden
            + f64::from(features.support_needs) * self.support_needs
    }
}

/// Source of the simulated prediction uncertainty.
pub trait NoiseSource: Send + Sync {
    /// Returns a value within `[-amplitude, amplitude]`.
    fn perturbation(&self, amplitude: f64) -> f64;
}

/// Uniform noise from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyNoise;

impl NoiseSource for EntropyNoise {
    fn perturbation(&self, amplitude: f64) -> f64 {
        if amplitude <= 0.0 {
            return 0.0;
        }
        rand::thread_rng().gen_range(-amplitude..=amplitude)
    }
}

/// Reproducible uniform noise; successive calls walk one seeded sequence.
#[derive(Debug)]
pub struct SeededNoise {
    rng: Mutex<StdRng>,
}

impl SeededNoise {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl NoiseSource for SeededNoise {
    fn perturbation(&self, amplitude: f64) -> f64 {
        if amplitude <= 0.0 {
            return 0.0;
        }
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(-amplitude..=amplitude)
    }
}

/// Constant offset, clamped to the requested amplitude.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedNoise(pub f64);

impl NoiseSource for FixedNoise {
    fn perturbation(&self, amplitude: f64) -> f64 {
        let amplitude = amplitude.max(0.0);
        self.0.clamp(-amplitude, amplitude)
    }
}

/// Blend the features around the baseline, perturb, and clamp into `0..=100`.
pub fn simulated_score(features: &FeatureVector, noise: &dyn NoiseSource) -> f64 {
    let score = MODEL_BASELINE
        + FeatureWeights::SIMULATED.weigh(features)
        + noise.perturbation(NOISE_AMPLITUDE);
    score.clamp(0.0, 100.0)
}
