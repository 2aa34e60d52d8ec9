use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::eligibility::{AssessmentInput, EligibilityEngine, FixedNoise};

/// Engine whose simulated score carries no noise.
pub(super) fn quiet_engine() -> EligibilityEngine {
    EligibilityEngine::new(Arc::new(FixedNoise(0.0)))
}

pub(super) fn engine_with_noise(offset: f64) -> EligibilityEngine {
    EligibilityEngine::new(Arc::new(FixedNoise(offset)))
}

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub(super) fn complex_profile() -> AssessmentInput {
    AssessmentInput {
        has_chronic_conditions: true,
        chronic_conditions: names(&["diabetes", "heart failure", "COPD"]),
        has_diabetes: true,
        has_heart_disease: true,
        has_copd: true,
        has_mental_health: true,
        needs_adl_help: true,
        adl_limitations: names(&["bathing", "dressing", "eating", "transferring"]),
        has_hospitalizations: true,
        hospitalization_count: 3,
        taking_medications: true,
        medication_count: 10,
        has_mobility_limitations: true,
        uses_assistive_devices: true,
        has_home_health: true,
    }
}

/// Just over the eligibility line: rule score 62, model score 72.
pub(super) fn borderline_profile() -> AssessmentInput {
    AssessmentInput {
        has_chronic_conditions: true,
        chronic_conditions: names(&["diabetes", "hypertension"]),
        has_diabetes: true,
        has_heart_disease: true,
        needs_adl_help: true,
        adl_limitations: names(&["bathing", "dressing"]),
        has_hospitalizations: true,
        hospitalization_count: 1,
        ..AssessmentInput::default()
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
