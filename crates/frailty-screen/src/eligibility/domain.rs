use serde::{Deserialize, Deserializer, Serialize};

/// Self-reported health profile handed over by the intake collector.
///
/// Every field is optional on the wire; an absent value reads as "no", zero, or an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentInput {
    pub has_chronic_conditions: bool,
    pub chronic_conditions: Vec<String>,
    pub has_diabetes: bool,
    pub has_heart_disease: bool,
    #[serde(rename = "hasCOPD")]
    pub has_copd: bool,
    pub has_mental_health: bool,
    #[serde(rename = "needsADLHelp")]
    pub needs_adl_help: bool,
    pub adl_limitations: Vec<String>,
    pub has_hospitalizations: bool,
    #[serde(deserialize_with = "lenient_count")]
    pub hospitalization_count: u32,
    pub taking_medications: bool,
    #[serde(deserialize_with = "lenient_count")]
    pub medication_count: u32,
    pub has_mobility_limitations: bool,
    pub uses_assistive_devices: bool,
    pub has_home_health: bool,
}

impl AssessmentInput {
    pub fn chronic_condition_count(&self) -> usize {
        self.chronic_conditions.len()
    }

    pub fn adl_limitation_count(&self) -> usize {
        self.adl_limitations.len()
    }
}

/// Accepts any JSON number (or null) for a count: negatives read as zero, fractions round down.
fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?;
    Ok(raw
        .filter(|value| value.is_finite())
        .map(|value| value.max(0.0).floor() as u32)
        .unwrap_or(0))
}

/// Qualitative bucket attached to each factor for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ImpactLevel {
    Low,
    Moderate,
    High,
}

impl ImpactLevel {
    pub const fn label(self) -> &'static str {
        match self {
            ImpactLevel::Low => "Low",
            ImpactLevel::Moderate => "Moderate",
            ImpactLevel::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorScore {
    pub score: u32,
    pub impact: ImpactLevel,
}

/// Per-factor view of the simulated scorer's features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorBreakdown {
    pub chronic_conditions: FactorScore,
    pub functional_limitations: FactorScore,
    pub healthcare_utilization: FactorScore,
    pub medications: FactorScore,
    pub mobility: FactorScore,
}

impl FactorBreakdown {
    /// Factors in display order, paired with their human-readable names.
    pub fn entries(&self) -> [(&'static str, FactorScore); 5] {
        [
            ("Chronic conditions", self.chronic_conditions),
            ("Functional limitations", self.functional_limitations),
            ("Healthcare utilization", self.healthcare_utilization),
            ("Medications", self.medications),
            ("Mobility and support", self.mobility),
        ]
    }
}

/// Outcome of a single hybrid evaluation, returned verbatim to API callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResult {
    pub eligible: bool,
    pub confidence: f64,
    pub rule_based_score: u32,
    pub ml_simulated_score: f64,
    pub reasons: Vec<String>,
    pub factors: FactorBreakdown,
    pub recommendation: String,
    pub explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_payload_defaults_every_field() {
        let input: AssessmentInput = serde_json::from_value(json!({})).expect("empty body parses");
        assert_eq!(input, AssessmentInput::default());
    }

    #[test]
    fn reads_acronym_field_names() {
        let input: AssessmentInput = serde_json::from_value(json!({
            "hasCOPD": true,
            "needsADLHelp": true,
            "adlLimitations": ["bathing", "dressing"],
        }))
        .expect("payload parses");
        assert!(input.has_copd);
        assert!(input.needs_adl_help);
        assert_eq!(input.adl_limitation_count(), 2);
    }

    #[test]
    fn counts_tolerate_null_negative_and_fractional_numbers() {
        let input: AssessmentInput = serde_json::from_value(json!({
            "hospitalizationCount": -2,
            "medicationCount": 6.8,
        }))
        .expect("payload parses");
        assert_eq!(input.hospitalization_count, 0);
        assert_eq!(input.medication_count, 6);

        let input: AssessmentInput =
            serde_json::from_value(json!({ "medicationCount": null })).expect("null count parses");
        assert_eq!(input.medication_count, 0);
    }

    #[test]
    fn rejects_mistyped_fields() {
        assert!(serde_json::from_value::<AssessmentInput>(json!({ "hasDiabetes": "yes" })).is_err());
        assert!(
            serde_json::from_value::<AssessmentInput>(json!({ "medicationCount": "four" }))
                .is_err()
        );
        assert!(
            serde_json::from_value::<AssessmentInput>(json!({ "chronicConditions": [1, 2] }))
                .is_err()
        );
    }
}
