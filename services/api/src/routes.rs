use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use chrono::Utc;
use frailty_screen::eligibility::{assessment_router, EligibilityEngine};
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;

pub(crate) fn with_service_routes(engine: Arc<EligibilityEngine>) -> Router {
    assessment_router(engine)
        .route("/", get(service_banner))
        .route("/api/health", get(healthcheck))
        .route("/api/health/ready", get(readiness_endpoint))
        .route("/api/health/live", get(liveness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn service_banner() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Medical Frailty Assessment API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
    }))
}

pub(crate) async fn healthcheck(Extension(state): Extension<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "uptime": state.uptime_seconds(),
    }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = json!({
        "ready": ready,
        "timestamp": Utc::now().to_rfc3339(),
    });

    (status, Json(payload))
}

pub(crate) async fn liveness_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "alive": true,
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
