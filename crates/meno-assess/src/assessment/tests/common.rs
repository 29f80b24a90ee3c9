use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::assessment::questions as q;
use crate::assessment::{assessment_router, AnswerRecord, AssessmentEngine, ScoringThresholds};

pub(super) fn thresholds() -> ScoringThresholds {
    ScoringThresholds::default()
}

pub(super) fn engine() -> AssessmentEngine {
    AssessmentEngine::new(thresholds())
}

pub(super) fn router() -> axum::Router {
    assessment_router(Arc::new(engine()))
}

/// Severe vasomotor symptoms at 52 with no stated preference.
pub(super) fn vasomotor_record() -> AnswerRecord {
    AnswerRecord::new()
        .with(q::POSTMENOPAUSAL_BLEEDING, "no")
        .with(q::HOT_FLASH_FREQUENCY, "severe")
        .with(q::NIGHT_SWEATS, "severe")
        .with(q::AGE, "52")
}

/// Mild symptoms, prefers non-hormonal care, no history.
pub(super) fn non_hormonal_record() -> AnswerRecord {
    AnswerRecord::new()
        .with(q::TREATMENT_PREFERENCES, vec!["non-hormonal"])
        .with(q::HOT_FLASH_FREQUENCY, "mild")
        .with(q::NIGHT_SWEATS, "none")
}

pub(super) fn breast_cancer_record() -> AnswerRecord {
    AnswerRecord::new().with(q::PERSONAL_MEDICAL_HISTORY, vec!["breast-cancer"])
}

pub(super) fn postmenopausal_bleeding_record() -> AnswerRecord {
    AnswerRecord::new()
        .with(q::MENSTRUAL_STATUS, "stopped")
        .with(q::PERIODS_STOPPED, "more-than-2-years")
        .with(q::POSTMENOPAUSAL_BLEEDING, "yes")
        .with(q::HOT_FLASH_FREQUENCY, "none")
        .with(q::AGE, 58.0)
}

pub(super) fn with_hot_flashes(record: &AnswerRecord, level: &str) -> AnswerRecord {
    record.clone().with(q::HOT_FLASH_FREQUENCY, level)
}

pub(super) fn measurements(height: f64, weight: f64) -> AnswerRecord {
    AnswerRecord::new()
        .with(q::HEIGHT, height)
        .with(q::WEIGHT, weight)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
