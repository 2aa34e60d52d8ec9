use crate::infra::build_engine;
use clap::Args;
use frailty_screen::eligibility::{AssessmentInput, EligibilityResult, RuleBreakdown};
use frailty_screen::error::AppError;
use std::io::Read;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct EvaluateArgs {
    /// Assessment JSON file; reads stdin when omitted or "-"
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Seed the simulated scorer's noise for reproducible output
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Print the raw JSON result instead of the summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seed the simulated scorer's noise for reproducible output
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs { input, seed, json } = args;

    let raw = read_input(input)?;
    let assessment: AssessmentInput = serde_json::from_str(&raw)?;
    let engine = build_engine(seed);
    let result = engine.evaluate(&assessment);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_result("Assessment", &assessment, &result);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = build_engine(args.seed);

    println!("Medical frailty screening demo");
    for (title, profile) in sample_profiles() {
        let result = engine.evaluate(&profile);
        println!();
        render_result(title, &profile, &result);
    }
    Ok(())
}

fn read_input(path: Option<PathBuf>) -> Result<String, AppError> {
    match path {
        Some(path) if path.as_os_str() != "-" => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub(crate) fn sample_profiles() -> Vec<(&'static str, AssessmentInput)> {
    vec![
        (
            "Minimal needs",
            AssessmentInput {
                taking_medications: true,
                medication_count: 2,
                ..AssessmentInput::default()
            },
        ),
        (
            "Moderate needs",
            AssessmentInput {
                has_chronic_conditions: true,
                chronic_conditions: names(&["Type 2 diabetes", "Hypertension"]),
                has_diabetes: true,
                taking_medications: true,
                medication_count: 4,
                ..AssessmentInput::default()
            },
        ),
        (
            "Complex needs",
            AssessmentInput {
                has_chronic_conditions: true,
                chronic_conditions: names(&["Congestive heart failure", "COPD", "Depression"]),
                has_heart_disease: true,
                has_copd: true,
                has_mental_health: true,
                needs_adl_help: true,
                adl_limitations: names(&["Bathing", "Dressing", "Transferring"]),
                has_hospitalizations: true,
                hospitalization_count: 2,
                taking_medications: true,
                medication_count: 9,
                has_mobility_limitations: true,
                uses_assistive_devices: true,
                has_home_health: true,
                ..AssessmentInput::default()
            },
        ),
    ]
}

fn render_result(title: &str, input: &AssessmentInput, result: &EligibilityResult) {
    let decision = if result.eligible {
        "Likely eligible"
    } else {
        "Likely not eligible"
    };

    println!("{title}: {decision} ({:.0}% confidence)", result.confidence);
    println!(
        "Scores: rule-based {}, simulated model {:.1}",
        result.rule_based_score, result.ml_simulated_score
    );

    let rules = RuleBreakdown::assess(input);
    println!(
        "Rule awards: conditions {} + diagnoses {} + daily living {} + hospital {} + medications {} + support {} = {}",
        rules.chronic_conditions,
        rules.named_conditions,
        rules.daily_living,
        rules.hospitalizations,
        rules.medications,
        rules.mobility_support,
        rules.raw_total()
    );

    println!("\nFactors");
    for (label, factor) in result.factors.entries() {
        println!("- {label}: {} ({})", factor.score, factor.impact.label());
    }

    println!("\nReasons");
    for reason in &result.reasons {
        println!("- {reason}");
    }

    println!("\nRecommendation: {}", result.recommendation);
    println!("{}", result.explanation);
}
