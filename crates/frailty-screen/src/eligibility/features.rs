//! The five health features shared by the simulated scorer and the factor breakdown.

use super::domain::{AssessmentInput, FactorBreakdown, FactorScore, ImpactLevel};

const CHRONIC_CAP: u32 = 50;
const FUNCTIONAL_CAP: u32 = 50;
const SUPPORT_CAP: u32 = 45;

/// Named sub-scores computed once per evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureVector {
    /// 0..=50
    pub chronic_complexity: u32,
    /// 0..=50
    pub functional_impairment: u32,
    /// 0..=40
    pub healthcare_intensity: u32,
    /// 0..=30
    pub medication_burden: u32,
    /// 0..=45
    pub support_needs: u32,
}

impl FeatureVector {
    pub fn extract(input: &AssessmentInput) -> Self {
        Self {
            chronic_complexity: chronic_complexity(input),
            functional_impairment: functional_impairment(input),
            healthcare_intensity: healthcare_intensity(input),
            medication_burden: medication_burden(input),
            support_needs: support_needs(input),
        }
    }

    /// Map each feature onto its impact bucket.
    pub fn breakdown(&self) -> FactorBreakdown {
        FactorBreakdown {
            chronic_conditions: ImpactThresholds::CHRONIC.rate(self.chronic_complexity),
            functional_limitations: ImpactThresholds::FUNCTIONAL.rate(self.functional_impairment),
            healthcare_utilization: ImpactThresholds::UTILIZATION.rate(self.healthcare_intensity),
            medications: ImpactThresholds::MEDICATIONS.rate(self.medication_burden),
            mobility: ImpactThresholds::MOBILITY.rate(self.support_needs),
        }
    }
}

/// Lower bounds (inclusive) for the High and Moderate buckets of one factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImpactThresholds {
    pub high: u32,
    pub moderate: u32,
}

impl ImpactThresholds {
    pub const CHRONIC: Self = Self::new(30, 15);
    pub const FUNCTIONAL: Self = Self::new(30, 15);
    pub const UTILIZATION: Self = Self::new(25, 15);
    pub const MEDICATIONS: Self = Self::new(20, 10);
    pub const MOBILITY: Self = Self::new(25, 10);

    const fn new(high: u32, moderate: u32) -> Self {
        Self { high, moderate }
    }

    pub fn impact(&self, score: u32) -> ImpactLevel {
        if score >= self.high {
            ImpactLevel::High
        } else if score >= self.moderate {
            ImpactLevel::Moderate
        } else {
            ImpactLevel::Low
        }
    }

    pub fn rate(&self, score: u32) -> FactorScore {
        FactorScore {
            score,
            impact: self.impact(score),
        }
    }
}

/// Points shared with the rule-based scorer for specific high-impact diagnoses.
pub(crate) fn named_condition_points(input: &AssessmentInput) -> u32 {
    let mut points = 0;
    if input.has_diabetes {
        points += 5;
    }
    if input.has_heart_disease {
        points += 5;
    }
    if input.has_copd {
        points += 5;
    }
    if input.has_mental_health {
        points += 3;
    }
    points
}

fn chronic_complexity(input: &AssessmentInput) -> u32 {
    let by_count = match input.chronic_condition_count() {
        0 => 0,
        1 => 10,
        2 => 20,
        _ => 30,
    };
    (by_count + named_condition_points(input)).min(CHRONIC_CAP)
}

fn functional_impairment(input: &AssessmentInput) -> u32 {
    if !input.needs_adl_help {
        return 0;
    }

    let by_count = match input.adl_limitation_count() {
        0 => 0,
        1 => 10,
        2 => 15,
        3 => 20,
        _ => 30,
    };
    (20 + by_count).min(FUNCTIONAL_CAP)
}

fn healthcare_intensity(input: &AssessmentInput) -> u32 {
    if !input.has_hospitalizations {
        return 0;
    }

    match input.hospitalization_count {
        0 => 0,
        1 => 20,
        2 => 30,
        _ => 40,
    }
}

fn medication_burden(input: &AssessmentInput) -> u32 {
    if !input.taking_medications {
        return 0;
    }

    match input.medication_count {
        10.. => 30,
        7..=9 => 25,
        5..=6 => 20,
        3..=4 => 15,
        _ => 5,
    }
}

fn support_needs(input: &AssessmentInput) -> u32 {
    let mut needs = 0;
    if input.has_mobility_limitations {
        needs += 15;
    }
    if input.uses_assistive_devices {
        needs += 10;
    }
    if input.has_home_health {
        needs += 20;
    }
    needs.min(SUPPORT_CAP)
}
