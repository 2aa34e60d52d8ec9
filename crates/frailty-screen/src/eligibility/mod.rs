//! Hybrid eligibility determination for medical frailty exemptions.
//!
//! A transparent rule-based score and a simulated model score are blended by a fixed-weight
//! [`CombinerPolicy`]; the blend decides eligibility, scorer agreement drives the confidence, and
//! the shared feature vector feeds both the model score and the factor breakdown.

pub mod confidence;
pub mod domain;
pub mod features;
pub mod model;
pub mod narrative;
pub mod policy;
pub mod router;
pub mod rules;

#[cfg(test)]
mod tests;

pub use domain::{AssessmentInput, EligibilityResult, FactorBreakdown, FactorScore, ImpactLevel};
pub use features::FeatureVector;
pub use model::{EntropyNoise, FixedNoise, NoiseSource, SeededNoise};
pub use narrative::Recommendation;
pub use policy::{CombinerPolicy, HybridScore};
pub use router::assessment_router;
pub use rules::{rule_based_score, RuleBreakdown};

use crate::config::ScoringConfig;
use std::sync::Arc;
use tracing::debug;

/// Stateless evaluator; the noise source is the only thing shared between calls.
#[derive(Clone)]
pub struct EligibilityEngine {
    policy: CombinerPolicy,
    noise: Arc<dyn NoiseSource>,
}

impl EligibilityEngine {
    pub fn new(noise: Arc<dyn NoiseSource>) -> Self {
        Self::with_policy(CombinerPolicy::default(), noise)
    }

    pub fn with_policy(policy: CombinerPolicy, noise: Arc<dyn NoiseSource>) -> Self {
        Self { policy, noise }
    }

    /// Entropy-backed noise unless the configuration pins a seed.
    pub fn from_config(config: &ScoringConfig) -> Self {
        match config.noise_seed {
            Some(seed) => Self::new(Arc::new(SeededNoise::new(seed))),
            None => Self::default(),
        }
    }

    pub fn policy(&self) -> &CombinerPolicy {
        &self.policy
    }

    pub fn evaluate(&self, input: &AssessmentInput) -> EligibilityResult {
        let rule_based_score = rule_based_score(input);
        let features = FeatureVector::extract(input);
        let ml_simulated_score = model::simulated_score(&features, self.noise.as_ref());

        let HybridScore { combined, eligible } =
            self.policy.combine(rule_based_score, ml_simulated_score);
        let confidence = confidence::estimate(rule_based_score, ml_simulated_score, combined);

        debug!(
            rule_based_score,
            ml_simulated_score,
            combined,
            eligible,
            confidence,
            "assessment evaluated"
        );

        EligibilityResult {
            eligible,
            confidence,
            rule_based_score,
            ml_simulated_score,
            reasons: narrative::reasons(input, eligible),
            factors: features.breakdown(),
            recommendation: Recommendation::select(eligible, confidence)
                .text()
                .to_string(),
            explanation: narrative::explanation(eligible, combined),
        }
    }
}

impl Default for EligibilityEngine {
    fn default() -> Self {
        Self::new(Arc::new(EntropyNoise))
    }
}

impl std::fmt::Debug for EligibilityEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EligibilityEngine")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
