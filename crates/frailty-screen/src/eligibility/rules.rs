//! Transparent point accumulation over explicit clinical and functional criteria.

use super::domain::AssessmentInput;
use super::features::named_condition_points;
use serde::{Deserialize, Serialize};

pub const RULE_SCORE_CEILING: u32 = 100;

/// Points awarded per criterion group, kept for audit displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleBreakdown {
    pub chronic_conditions: u32,
    pub named_conditions: u32,
    pub daily_living: u32,
    pub hospitalizations: u32,
    pub medications: u32,
    pub mobility_support: u32,
}

impl RuleBreakdown {
    pub fn assess(input: &AssessmentInput) -> Self {
        Self {
            chronic_conditions: chronic_condition_points(input),
            named_conditions: named_condition_points(input),
            daily_living: daily_living_points(input),
            hospitalizations: hospitalization_points(input),
            medications: medication_points(input),
            mobility_support: mobility_support_points(input),
        }
    }

    /// Unclamped sum of every award.
    pub fn raw_total(&self) -> u32 {
        self.chronic_conditions
            + self.named_conditions
            + self.daily_living
            + self.hospitalizations
            + self.medications
            + self.mobility_support
    }

    pub fn score(&self) -> u32 {
        self.raw_total().min(RULE_SCORE_CEILING)
    }
}

/// Deterministic rule-based score in `0..=100`.
pub fn rule_based_score(input: &AssessmentInput) -> u32 {
    RuleBreakdown::assess(input).score()
}

fn chronic_condition_points(input: &AssessmentInput) -> u32 {
    if !input.has_chronic_conditions {
        return 0;
    }

    let by_count = match input.chronic_condition_count() {
        0 => 0,
        1 => 5,
        2 => 10,
        _ => 15,
    };
    10 + by_count
}

fn daily_living_points(input: &AssessmentInput) -> u32 {
    if !input.needs_adl_help {
        return 0;
    }

    let by_count = match input.adl_limitation_count() {
        0 => 0,
        1 => 5,
        2 => 7,
        3 => 10,
        _ => 15,
    };
    15 + by_count
}

// A "yes" with a zero count earns nothing here.
fn hospitalization_points(input: &AssessmentInput) -> u32 {
    if !input.has_hospitalizations {
        return 0;
    }

    match input.hospitalization_count {
        0 => 0,
        1 => 10,
        2 => 15,
        _ => 20,
    }
}

fn medication_points(input: &AssessmentInput) -> u32 {
    if !input.taking_medications {
        return 0;
    }

    match input.medication_count {
        10.. => 15,
        7..=9 => 12,
        5..=6 => 10,
        3..=4 => 7,
        _ => 3,
    }
}

fn mobility_support_points(input: &AssessmentInput) -> u32 {
    let mut points = 0;
    if input.has_mobility_limitations {
        points += 5;
    }
    if input.uses_assistive_devices {
        points += 3;
    }
    if input.has_home_health {
        points += 7;
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chronic_flag_awards_base_without_listed_conditions() {
        let input = AssessmentInput {
            has_chronic_conditions: true,
            ..AssessmentInput::default()
        };
        assert_eq!(RuleBreakdown::assess(&input).chronic_conditions, 10);
    }

    #[test]
    fn listed_conditions_without_flag_award_nothing() {
        let input = AssessmentInput {
            chronic_conditions: vec!["asthma".into(), "arthritis".into()],
            ..AssessmentInput::default()
        };
        assert_eq!(rule_based_score(&input), 0);
    }

    #[test]
    fn daily_living_tiers() {
        let expected = [(0, 15), (1, 20), (2, 22), (3, 25), (4, 30), (6, 30)];
        for (count, points) in expected {
            let input = AssessmentInput {
                needs_adl_help: true,
                adl_limitations: vec!["bathing".to_string(); count],
                ..AssessmentInput::default()
            };
            assert_eq!(
                RuleBreakdown::assess(&input).daily_living,
                points,
                "limitations {count}"
            );
        }
    }

    #[test]
    fn medication_tiers() {
        let expected = [(0, 3), (1, 3), (3, 7), (5, 10), (7, 12), (10, 15)];
        for (count, points) in expected {
            let input = AssessmentInput {
                taking_medications: true,
                medication_count: count,
                ..AssessmentInput::default()
            };
            assert_eq!(rule_based_score(&input), points, "medications {count}");
        }
    }

    #[test]
    fn mobility_awards_are_additive() {
        let input = AssessmentInput {
            has_mobility_limitations: true,
            uses_assistive_devices: true,
            has_home_health: true,
            ..AssessmentInput::default()
        };
        assert_eq!(rule_based_score(&input), 15);
    }

    #[test]
    fn total_clamps_at_ceiling() {
        let breakdown = RuleBreakdown {
            chronic_conditions: 25,
            named_conditions: 18,
            daily_living: 30,
            hospitalizations: 20,
            medications: 15,
            mobility_support: 15,
        };
        assert_eq!(breakdown.raw_total(), 123);
        assert_eq!(breakdown.score(), RULE_SCORE_CEILING);
    }
}
