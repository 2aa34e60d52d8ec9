use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use super::domain::{AssessmentInput, EligibilityResult};
use super::EligibilityEngine;
use crate::error::AppError;

/// Router exposing the assessment evaluation endpoint.
pub fn assessment_router(engine: Arc<EligibilityEngine>) -> Router {
    Router::new()
        .route("/api/assessment/evaluate", post(evaluate_handler))
        .with_state(engine)
}

/// Rejects mistyped payloads with a 400 before the engine sees them.
pub(crate) async fn evaluate_handler(
    State(engine): State<Arc<EligibilityEngine>>,
    payload: Result<Json<AssessmentInput>, JsonRejection>,
) -> Result<Json<EligibilityResult>, AppError> {
    let Json(input) =
        payload.map_err(|rejection| AppError::InvalidAssessment(rejection.body_text()))?;

    Ok(Json(engine.evaluate(&input)))
}
