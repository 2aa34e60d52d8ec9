use super::common::*;
use crate::eligibility::assessment_router;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn evaluate_request(body: Vec<u8>) -> Request<Body> {
    Request::post("/api/assessment/evaluate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("request builds")
}

#[tokio::test]
async fn evaluate_route_returns_camel_case_result() {
    let router = assessment_router(Arc::new(quiet_engine()));

    let response = router
        .oneshot(evaluate_request(
            serde_json::to_vec(&complex_profile()).expect("serialize profile"),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("eligible"), Some(&json!(true)));
    assert_eq!(payload.get("ruleBasedScore"), Some(&json!(100)));
    assert!(payload.get("mlSimulatedScore").is_some());
    assert_eq!(
        payload.pointer("/factors/healthcareUtilization/impact"),
        Some(&json!("High"))
    );
    assert_eq!(
        payload
            .get("reasons")
            .and_then(Value::as_array)
            .map(Vec::len),
        Some(5)
    );
}

#[tokio::test]
async fn evaluate_route_accepts_empty_object() {
    let router = assessment_router(Arc::new(quiet_engine()));

    let response = router
        .oneshot(evaluate_request(b"{}".to_vec()))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("eligible"), Some(&json!(false)));
    assert_eq!(payload.get("ruleBasedScore"), Some(&json!(0)));
}

#[tokio::test]
async fn evaluate_route_rejects_mistyped_fields() {
    let router = assessment_router(Arc::new(quiet_engine()));
    let body = json!({ "hasDiabetes": "yes", "medicationCount": 4 });

    let response = router
        .oneshot(evaluate_request(
            serde_json::to_vec(&body).expect("serialize body"),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("error"), Some(&json!("Invalid assessment data")));
    assert!(payload.get("details").and_then(Value::as_str).is_some());
}

#[tokio::test]
async fn evaluate_route_rejects_malformed_json() {
    let router = assessment_router(Arc::new(quiet_engine()));

    let response = router
        .oneshot(evaluate_request(b"{\"hasCOPD\": tru".to_vec()))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
