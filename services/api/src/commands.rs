use clap::Args;
use gift_engine::config::AppConfig;
use gift_engine::error::AppError;
use gift_engine::gifts::{
    Answer, AssessmentRequest, GiftAssessmentEngine, GiftCatalog, GiftResult, KeyPolicy,
    ThresholdFactor,
};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON file holding either an answer array or a `{"answers": [...]}` submission
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Secondary gift threshold factor (defaults to GIFT_THRESHOLD_FACTOR or 0.80)
    #[arg(long, value_parser = crate::infra::parse_threshold_arg)]
    pub(crate) threshold: Option<ThresholdFactor>,
    /// Reject correlation keys that do not name a catalog gift
    #[arg(long)]
    pub(crate) strict: bool,
    /// Print the raw JSON result instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AnswerFile {
    Submission(AssessmentRequest),
    Answers(Vec<Answer>),
}

impl AnswerFile {
    fn into_parts(self) -> (Vec<Answer>, Option<f64>) {
        match self {
            AnswerFile::Submission(request) => (request.answers, request.threshold_factor),
            AnswerFile::Answers(answers) => (answers, None),
        }
    }
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        answers,
        threshold,
        strict,
        json,
    } = args;

    let mut scoring = AppConfig::load()?.scoring;
    if strict {
        scoring.key_policy = KeyPolicy::Strict;
    }

    let raw = std::fs::read_to_string(&answers)?;
    let (answers, file_threshold) = parse_answer_file(&raw)?;
    let file_threshold = file_threshold.map(ThresholdFactor::new).transpose()?;

    let engine = GiftAssessmentEngine::motivational(scoring);
    let result = engine.assess_with_threshold(&answers, threshold.or(file_threshold))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_result(&result, answers.len());
    }

    Ok(())
}

pub(crate) fn run_catalog() {
    println!("Motivational gift catalog");
    for gift in GiftCatalog::motivational().gifts() {
        println!("\n{} [{}]", gift.name, gift.key);
        println!("  {}", gift.description);
    }
}

fn parse_answer_file(raw: &str) -> Result<(Vec<Answer>, Option<f64>), AppError> {
    let file: AnswerFile = serde_json::from_str(raw)?;
    Ok(file.into_parts())
}

fn render_result(result: &GiftResult, answer_count: usize) {
    println!("Gift assessment ({answer_count} answers)");

    println!("\nScores");
    let mut ranked: Vec<(&str, f64)> = result.scores.iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    for (key, score) in ranked {
        println!("- {key}: {:.2}%", score * 100.0);
    }

    println!("\nPrimary gift: {}", result.primary_gift);
    println!("  {}", result.descriptions.primary.description);

    if result.secondary_gifts.is_empty() {
        println!("\nSecondary gifts: none");
    } else {
        println!("\nSecondary gifts");
        for description in &result.descriptions.secondary {
            println!("- {}: {}", description.gift, description.description);
        }
    }

    let roles = &result.recommended_roles;
    if !roles.primary_roles.is_empty() {
        println!("\nSuggested roles");
        for role in roles.primary_roles.iter().chain(&roles.secondary_roles) {
            println!("- {role}");
        }
    }
    if !roles.ministry_areas.is_empty() {
        println!("\nMinistry areas: {}", roles.ministry_areas.join(", "));
    }
}
