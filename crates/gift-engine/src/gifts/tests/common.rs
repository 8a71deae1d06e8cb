use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::config::ScoringConfig;
use crate::gifts::catalog::{GiftCatalog, GiftProfile};
use crate::gifts::domain::{Answer, GiftScores, KeyPolicy};
use crate::gifts::engine::GiftAssessmentEngine;
use crate::gifts::router::assessment_router;

pub(super) const SUM_TOLERANCE: f64 = 1e-9;

pub(super) fn letter_catalog(keys: &[&str]) -> GiftCatalog {
    GiftCatalog::new(
        keys.iter()
            .map(|key| {
                GiftProfile::new(
                    *key,
                    format!("Gift {key}"),
                    format!("Description of {key}"),
                    format!("Details of {key}"),
                )
            })
            .collect(),
    )
    .expect("letter catalog valid")
}

pub(super) fn answer(rating: i32, correlation: &[(&str, f64)]) -> Answer {
    Answer::new(rating, correlation.iter().copied())
}

pub(super) fn scores(pairs: &[(&str, f64)]) -> GiftScores {
    pairs.iter().copied().collect()
}

/// Answers leaning heavily towards teaching with some administration.
pub(super) fn teaching_answers() -> Vec<Answer> {
    vec![
        answer(5, &[("TEACHING", 1.0), ("ADMINISTRATION", 0.3)]),
        answer(5, &[("TEACHING", 0.8), ("EXHORTATION", 0.4)]),
        answer(4, &[("ADMINISTRATION", 0.9), ("SERVICE", 0.2)]),
        answer(2, &[("COMPASSION", 1.0), ("GIVING", 0.5)]),
        answer(1, &[("PERCEPTION", 0.7), ("SERVICE", 0.6)]),
        answer(3, &[("EXHORTATION", 0.5), ("GIVING", 0.5)]),
    ]
}

pub(super) fn scoring_config(threshold: f64) -> ScoringConfig {
    ScoringConfig {
        threshold_factor: crate::gifts::ThresholdFactor::new(threshold)
            .expect("test threshold valid"),
        key_policy: KeyPolicy::Lenient,
    }
}

pub(super) fn motivational_engine() -> GiftAssessmentEngine<'static> {
    GiftAssessmentEngine::motivational(ScoringConfig::default())
}

pub(super) fn router() -> axum::Router {
    assessment_router(Arc::new(motivational_engine()))
}

pub(super) fn assert_sums_to_one(scores: &GiftScores) {
    let total = scores.total();
    assert!(
        (total - 1.0).abs() < SUM_TOLERANCE,
        "scores should sum to 1.0, got {total}"
    );
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
