use crate::config::{AppEnvironment, ConfigError};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};

static EXPOSE_DETAILS: AtomicBool = AtomicBool::new(true);

/// Decide once at startup whether 5xx responses may carry the underlying error text.
pub fn configure_exposure(environment: AppEnvironment) {
    EXPOSE_DETAILS.store(environment.exposes_error_details(), Ordering::Release);
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("server error: {0}")]
    Server(#[from] axum::Error),
    #[error("input error: {0}")]
    Input(#[from] serde_json::Error),
    #[error("invalid assessment data: {0}")]
    InvalidAssessment(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidAssessment(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Input(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            AppError::InvalidAssessment(details) => json!({
                "error": "Invalid assessment data",
                "details": details,
            }),
            _ => {
                tracing::error!(error = %self, "request failed");
                let message = if EXPOSE_DETAILS.load(Ordering::Acquire) {
                    self.to_string()
                } else {
                    "An error occurred".to_string()
                };
                json!({ "error": "Internal server error", "message": message })
            }
        };

        (status, Json(body)).into_response()
    }
}
