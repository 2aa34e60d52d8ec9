//! Confidence from scorer agreement and distance from the scale midpoint.

pub const CONFIDENCE_FLOOR: f64 = 65.0;
pub const CONFIDENCE_CEILING: f64 = 99.0;

const SCALE_MIDPOINT: f64 = 50.0;
const AGREEMENT_WEIGHT: f64 = 0.6;
const SIGNAL_WEIGHT: f64 = 0.4;

/// Confidence percentage in `65..=99`.
///
/// Signal strength is measured from the midpoint of the scale, not from the eligibility
/// threshold, and the floor keeps sharp scorer disagreement from ever reading as low confidence.
pub fn estimate(rule_based_score: u32, ml_simulated_score: f64, combined_score: f64) -> f64 {
    let agreement = 100.0 - (f64::from(rule_based_score) - ml_simulated_score).abs();
    let signal_strength = (combined_score - SCALE_MIDPOINT).abs();
    let confidence = agreement * AGREEMENT_WEIGHT + signal_strength * SIGNAL_WEIGHT;
    confidence.clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING)
}
