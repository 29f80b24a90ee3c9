use serde::Serialize;

use super::answers::AnswerRecord;
use super::domain::{CarePathway, Complexity, SeverityBand};
use super::explainer::TreatmentPreference;
use super::flags::{detect_triggers, RedFlagTrigger};
use super::questions as q;
use super::risk::symptom_severity;
use super::summary::{domain_scores, overall_complexity};
use super::thresholds::ScoringThresholds;

const MAX_EDUCATION_FIRST_RISK_FACTORS: usize = 2;
const OBESITY_BMI: f64 = 30.0;

/// Which decision rule selected the pathway, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathwayRule {
    EscalatingRedFlag,
    NonHormonalManageable,
    NonHormonalNeedsReview,
    PrefersHrt,
    UncomplicatedNoPreference,
    NoPreferenceNeedsReview,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathwayResolution {
    pub pathway: CarePathway,
    pub rule: PathwayRule,
    pub risk_factor_count: usize,
    pub guidance: &'static str,
}

/// Count of {current smoker, sedentary, BMI over 30, any personal history,
/// any family history}.
pub fn risk_factor_count(answers: &AnswerRecord) -> usize {
    [
        answers.is(q::SMOKING_STATUS, "current"),
        answers.is(q::EXERCISE_FREQUENCY, "none"),
        answers.bmi().map(|bmi| bmi > OBESITY_BMI).unwrap_or(false),
        answers.entry_count(q::PERSONAL_MEDICAL_HISTORY) > 0,
        answers.entry_count(q::FAMILY_HISTORY) > 0,
    ]
    .into_iter()
    .filter(|present| *present)
    .count()
}

pub(crate) fn resolve_with(
    answers: &AnswerRecord,
    thresholds: &ScoringThresholds,
    triggers: &[RedFlagTrigger],
) -> PathwayResolution {
    let risk_factor_count = risk_factor_count(answers);
    let severity = symptom_severity(answers, thresholds);
    let preference = TreatmentPreference::from_answers(answers);

    let (pathway, rule) = if triggers.iter().any(|trigger| trigger.severity().escalates()) {
        (CarePathway::GpUrgent, PathwayRule::EscalatingRedFlag)
    } else if preference == TreatmentPreference::NonHormonal {
        if severity != SeverityBand::Severe
            && risk_factor_count <= MAX_EDUCATION_FIRST_RISK_FACTORS
        {
            (CarePathway::EducationFirst, PathwayRule::NonHormonalManageable)
        } else {
            (CarePathway::GpRoutine, PathwayRule::NonHormonalNeedsReview)
        }
    } else if preference == TreatmentPreference::Hrt {
        (CarePathway::GpRoutine, PathwayRule::PrefersHrt)
    } else {
        let complexity = overall_complexity(&domain_scores(answers, thresholds), triggers);
        if complexity == Complexity::Low && risk_factor_count == 0 {
            (CarePathway::SelfCare, PathwayRule::UncomplicatedNoPreference)
        } else {
            (CarePathway::GpRoutine, PathwayRule::NoPreferenceNeedsReview)
        }
    };

    PathwayResolution {
        pathway,
        rule,
        risk_factor_count,
        guidance: pathway.guidance(),
    }
}

pub fn resolve(answers: &AnswerRecord, thresholds: &ScoringThresholds) -> PathwayResolution {
    resolve_with(answers, thresholds, &detect_triggers(answers))
}

pub fn resolve_care_pathway(answers: &AnswerRecord, thresholds: &ScoringThresholds) -> CarePathway {
    resolve(answers, thresholds).pathway
}
