use serde::{Deserialize, Serialize};

/// Weights and threshold for blending the two scores into a decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombinerPolicy {
    pub rule_weight: f64,
    pub model_weight: f64,
    pub threshold: f64,
}

impl Default for CombinerPolicy {
    fn default() -> Self {
        Self {
            rule_weight: 0.6,
            model_weight: 0.4,
            threshold: 60.0,
        }
    }
}

impl CombinerPolicy {
    pub fn combine(&self, rule_based_score: u32, ml_simulated_score: f64) -> HybridScore {
        let combined =
            f64::from(rule_based_score) * self.rule_weight + ml_simulated_score * self.model_weight;
        HybridScore {
            combined,
            eligible: combined >= self.threshold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HybridScore {
    pub combined: f64,
    pub eligible: bool,
}
