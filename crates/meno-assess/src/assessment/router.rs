use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::answers::AnswerRecord;
use super::engine::{AssessmentEngine, AssessmentOutcome};
use super::visibility::hidden_questions;

#[derive(Debug, Serialize)]
pub struct AssessmentResponse {
    pub evaluated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub outcome: AssessmentOutcome,
}

#[derive(Debug, Serialize)]
pub struct VisibilityResponse {
    pub hidden_questions: Vec<String>,
    pub answers: AnswerRecord,
}

/// Router exposing the decision core over HTTP.
pub fn assessment_router(engine: Arc<AssessmentEngine>) -> Router {
    Router::new()
        .route("/api/v1/assessments", post(evaluate_handler))
        .route("/api/v1/assessments/visibility", post(visibility_handler))
        .with_state(engine)
}

pub(crate) async fn evaluate_handler(
    State(engine): State<Arc<AssessmentEngine>>,
    Json(answers): Json<AnswerRecord>,
) -> (StatusCode, Json<AssessmentResponse>) {
    let outcome = engine.evaluate(&answers);
    (
        StatusCode::OK,
        Json(AssessmentResponse {
            evaluated_at: Utc::now(),
            outcome,
        }),
    )
}

pub(crate) async fn visibility_handler(Json(answers): Json<AnswerRecord>) -> Json<VisibilityResponse> {
    let hidden = hidden_questions(&answers);
    let pruned = answers.without(hidden.iter().map(String::as_str));
    Json(VisibilityResponse {
        hidden_questions: hidden,
        answers: pruned,
    })
}
