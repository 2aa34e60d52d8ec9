use super::domain::AssessmentInput;
use serde::{Deserialize, Serialize};

const MULTIPLE_CONDITIONS: &str = "Multiple chronic conditions indicating complex health needs";
const DAILY_LIVING: &str =
    "Significant limitations in activities of daily living requiring assistance";
const HOSPITALIZATIONS: &str = "Recent hospitalizations indicating acute and ongoing health issues";
const MEDICATION_BURDEN: &str =
    "High medication burden suggesting complex medical management needs";
const HOME_HEALTH: &str =
    "Requirement for home health services indicating significant support needs";
const MEETS_CRITERIA: &str = "Health profile meets Indiana Medicaid medical frailty criteria";
const BELOW_THRESHOLD: &str =
    "Health indicators do not currently meet the threshold for medical frailty determination";
const MAY_CHANGE: &str = "This assessment may change as health status evolves";

const STRONG_CONFIDENCE: f64 = 85.0;
const MODERATE_CONFIDENCE: f64 = 75.0;

/// Ordered, never-empty list of reasons behind the decision.
pub fn reasons(input: &AssessmentInput, eligible: bool) -> Vec<String> {
    if !eligible {
        return vec![BELOW_THRESHOLD.to_string(), MAY_CHANGE.to_string()];
    }

    let triggers = [
        (
            input.has_chronic_conditions && input.chronic_condition_count() >= 2,
            MULTIPLE_CONDITIONS,
        ),
        (
            input.needs_adl_help && input.adl_limitation_count() >= 2,
            DAILY_LIVING,
        ),
        (
            input.has_hospitalizations && input.hospitalization_count >= 2,
            HOSPITALIZATIONS,
        ),
        (
            input.taking_medications && input.medication_count >= 5,
            MEDICATION_BURDEN,
        ),
        (input.has_home_health, HOME_HEALTH),
    ];

    let mut reasons: Vec<String> = triggers
        .into_iter()
        .filter(|(applies, _)| *applies)
        .map(|(_, reason)| reason.to_string())
        .collect();

    if reasons.is_empty() {
        reasons.push(MEETS_CRITERIA.to_string());
    }
    reasons
}

/// Next-step advice, tiered by decision and confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    StronglyRecommended,
    Recommended,
    ConsiderApplying,
    NotRecommended,
    Uncertain,
}

impl Recommendation {
    pub fn select(eligible: bool, confidence: f64) -> Self {
        match (eligible, confidence) {
            (true, c) if c >= STRONG_CONFIDENCE => Self::StronglyRecommended,
            (true, c) if c >= MODERATE_CONFIDENCE => Self::Recommended,
            (true, _) => Self::ConsiderApplying,
            (false, c) if c >= STRONG_CONFIDENCE => Self::NotRecommended,
            (false, _) => Self::Uncertain,
        }
    }

    pub const fn text(self) -> &'static str {
        match self {
            Self::StronglyRecommended => {
                "Strongly Recommended: Apply for medical frailty exemption. Your health profile strongly indicates eligibility."
            }
            Self::Recommended => {
                "Recommended: Consider applying for medical frailty exemption. Gather supporting documentation from healthcare providers."
            }
            Self::ConsiderApplying => {
                "Consider Applying: You may qualify for medical frailty exemption. Consult with your healthcare provider or case manager."
            }
            Self::NotRecommended => {
                "Not Recommended: Current health profile does not meet medical frailty criteria. Monitor health status and reassess if conditions change."
            }
            Self::Uncertain => {
                "Uncertain: Consider consultation with healthcare provider or case manager for personalized evaluation."
            }
        }
    }
}

/// Explanation paragraph quoting the combined score to one decimal place.
pub fn explanation(eligible: bool, combined_score: f64) -> String {
    if eligible {
        format!(
            "Based on your assessment (score: {combined_score:.1}/100), you likely meet Indiana's medical frailty criteria. \
             This determination considers multiple factors including chronic conditions, functional limitations, healthcare utilization, \
             and support needs. We recommend gathering supporting documentation and contacting your Medicaid health plan to initiate \
             the formal application process."
        )
    } else {
        format!(
            "Based on your assessment (score: {combined_score:.1}/100), you may not currently meet Indiana's medical frailty criteria threshold. \
             This does not prevent you from applying through official channels, and circumstances may change. If your health status worsens \
             or you believe this assessment doesn't reflect your situation, please consult with your healthcare provider or case manager."
        )
    }
}
