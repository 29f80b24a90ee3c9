use super::common::*;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::body::Body;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::assessment::router::{evaluate_handler, visibility_handler};
use crate::assessment::{CarePathway, RiskLevel, RULESET_VERSION};

fn json_request(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).expect("json body")))
        .expect("request builds")
}

#[tokio::test]
async fn evaluate_handler_returns_full_outcome() {
    let (status, axum::Json(body)) =
        evaluate_handler(State(Arc::new(engine())), axum::Json(vasomotor_record())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.outcome.risk.level, RiskLevel::Medium);
    assert_eq!(body.outcome.pathway.pathway, CarePathway::GpRoutine);
    assert_eq!(body.outcome.ruleset_version, RULESET_VERSION);
    assert_eq!(body.outcome.thresholds_version, thresholds().version);
}

#[tokio::test]
async fn assessment_route_flags_urgent_answers() {
    let response = router()
        .oneshot(json_request(
            "/api/v1/assessments",
            &json!({ "postmenopausalBleeding": "yes", "age": "58", "hotFlashFrequency": "mild" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["risk"]["level"], "urgent");
    assert_eq!(payload["pathway"]["pathway"], "gp-urgent");
    assert_eq!(payload["summary"]["red_flags"]["clinician"][0]["severity"], "urgent");
    assert_eq!(payload["ruleset_version"], RULESET_VERSION);
    assert!(payload.get("evaluated_at").is_some());
}

#[tokio::test]
async fn assessment_route_treats_null_answers_as_missing() {
    let response = router()
        .oneshot(json_request(
            "/api/v1/assessments",
            &json!({ "age": null, "postmenopausalBleeding": "yes", "hrtCurrent": true }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["risk"]["level"], "urgent");
    assert_eq!(payload["pathway"]["pathway"], "gp-urgent");
}

#[tokio::test]
async fn assessment_route_rejects_malformed_json() {
    let response = router()
        .oneshot(
            Request::post("/api/v1/assessments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"age\":"))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn visibility_handler_prunes_hidden_answers() {
    let record = vasomotor_record()
        .with("smokingStatus", "never")
        .with("cigarettesPerDay", 10.0);

    let axum::Json(body) = visibility_handler(axum::Json(record)).await;

    assert_eq!(body.hidden_questions, vec!["cigarettesPerDay".to_string()]);
    assert!(!body.answers.contains("cigarettesPerDay"));
    assert!(body.answers.contains("smokingStatus"));
}

#[tokio::test]
async fn visibility_route_returns_pruned_record() {
    let response = router()
        .oneshot(json_request(
            "/api/v1/assessments/visibility",
            &json!({ "lowMood": "occasional", "selfHarmRisk": "frequent" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["hidden_questions"], json!(["selfHarmRisk"]));
    assert_eq!(payload["answers"], json!({ "lowMood": "occasional" }));
}
