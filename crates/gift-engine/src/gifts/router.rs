use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use super::classification::ThresholdFactor;
use super::descriptions::describe_one;
use super::domain::Answer;
use super::engine::GiftAssessmentEngine;
use super::error::AssessmentError;

/// Submission payload accepted by the assessment endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRequest {
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub threshold_factor: Option<f64>,
    pub answers: Vec<Answer>,
}

/// Public listing entry for a catalog category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntryView {
    pub key: String,
    pub gift: String,
    pub description: String,
    pub details: String,
}

/// Router exposing scoring and catalog lookups.
pub fn assessment_router(engine: Arc<GiftAssessmentEngine<'static>>) -> Router {
    Router::new()
        .route("/calculate-gifts/", post(calculate_handler))
        .route("/api/v1/gifts/assessments", post(calculate_handler))
        .route("/api/v1/gifts", get(catalog_handler))
        .route("/api/v1/gifts/:name", get(describe_handler))
        .with_state(engine)
}

pub(crate) async fn calculate_handler(
    State(engine): State<Arc<GiftAssessmentEngine<'static>>>,
    Json(request): Json<AssessmentRequest>,
) -> Response {
    let AssessmentRequest {
        user_id,
        threshold_factor,
        answers,
    } = request;

    let threshold_factor = match threshold_factor.map(ThresholdFactor::new).transpose() {
        Ok(factor) => factor,
        Err(error) => return error_response(error),
    };

    info!(?user_id, answers = answers.len(), "gift assessment received");
    match engine.assess_with_threshold(&answers, threshold_factor) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(error) => {
            warn!(?user_id, %error, "gift assessment rejected");
            error_response(error)
        }
    }
}

pub(crate) async fn catalog_handler(
    State(engine): State<Arc<GiftAssessmentEngine<'static>>>,
) -> Json<Vec<CatalogEntryView>> {
    let entries = engine
        .catalog()
        .gifts()
        .iter()
        .map(|gift| CatalogEntryView {
            key: gift.key.clone(),
            gift: gift.name.clone(),
            description: gift.description.clone(),
            details: gift.details.clone(),
        })
        .collect();
    Json(entries)
}

pub(crate) async fn describe_handler(
    State(engine): State<Arc<GiftAssessmentEngine<'static>>>,
    Path(name): Path<String>,
) -> Response {
    match describe_one(engine.catalog(), &name) {
        Ok(description) => (StatusCode::OK, Json(description)).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

fn error_response(error: AssessmentError) -> Response {
    let status = match error {
        AssessmentError::InvalidAnswer { .. }
        | AssessmentError::InvalidThreshold(_)
        | AssessmentError::EmptyScores => StatusCode::BAD_REQUEST,
        AssessmentError::UnknownCategory(_) => StatusCode::UNPROCESSABLE_ENTITY,
    };
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
