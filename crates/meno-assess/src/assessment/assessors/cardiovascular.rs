use super::{DomainRiskAssessment, PointTally};
use crate::assessment::answers::AnswerRecord;
use crate::assessment::domain::RiskTier;
use crate::assessment::questions as q;

const HIGH_AT: u32 = 3;
const MODERATE_AT: u32 = 1;

/// Coarse cardiovascular context used when weighing hormone therapy.
///
/// This is a factor count, not a QRISK estimate.
pub fn assess_cardiovascular_context(answers: &AnswerRecord) -> DomainRiskAssessment {
    let mut tally = PointTally::default();

    tally.add_if(answers.is(q::SMOKING_STATUS, "current"), 1, "Current smoker");
    tally.add_if(
        answers.bmi().map(|bmi| bmi > 30.0).unwrap_or(false),
        1,
        "BMI over 30",
    );
    tally.add_if(
        answers.includes(q::PERSONAL_MEDICAL_HISTORY, "heart-disease"),
        1,
        "Heart disease",
    );
    tally.add_if(
        answers.includes(q::PERSONAL_MEDICAL_HISTORY, "high-blood-pressure"),
        1,
        "High blood pressure",
    );
    tally.add_if(
        answers.includes(q::PERSONAL_MEDICAL_HISTORY, "stroke"),
        1,
        "Previous stroke",
    );
    tally.add_if(
        answers.includes(q::FAMILY_HISTORY, "heart-disease"),
        1,
        "Family history of heart disease",
    );

    let tier = tally.tier(HIGH_AT, MODERATE_AT);
    DomainRiskAssessment {
        score: tally.score,
        tier,
        factors: tally.factors,
        recommendation: match tier {
            RiskTier::High => {
                "Several cardiovascular risk factors: a formal QRISK assessment is advised \
                 before starting hormone therapy."
            }
            RiskTier::Moderate => {
                "Some cardiovascular risk factors: check blood pressure and discuss lifestyle \
                 changes."
            }
            RiskTier::Low => "No cardiovascular risk factors reported.",
        },
    }
}
