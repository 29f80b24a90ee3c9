use serde::Serialize;

use super::{DomainRiskAssessment, PointTally};
use crate::assessment::answers::AnswerRecord;
use crate::assessment::domain::RiskTier;
use crate::assessment::questions as q;

const HIGH_AT: u32 = 6;
const MODERATE_AT: u32 = 3;
const EARLY_MENOPAUSE_AGE: u32 = 45;
const LOW_BMI: f64 = 19.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoneHealthAssessment {
    #[serde(flatten)]
    pub risk: DomainRiskAssessment,
    /// DEXA scan indicated at moderate or high risk.
    pub scan_indicated: bool,
}

pub fn assess_bone_health_risk(answers: &AnswerRecord) -> BoneHealthAssessment {
    let mut tally = PointTally::default();

    let age = answers.age();
    if age > 65 {
        tally.add(3, "Age over 65");
    } else if age > 55 {
        tally.add(2, "Age over 55");
    } else if age > 50 {
        tally.add(1, "Age over 50");
    }

    tally.add_if(early_menopause(answers, age), 2, "Menopause before 45");
    tally.add_if(
        answers.includes_any(q::FAMILY_HISTORY, &["osteoporosis", "hip-fracture"]),
        2,
        "Family history of osteoporosis",
    );
    tally.add_if(answers.is(q::SMOKING_STATUS, "current"), 2, "Current smoker");
    tally.add_if(
        answers.is_any(q::EXERCISE_FREQUENCY, &["rarely", "none"]),
        1,
        "Little weight-bearing exercise",
    );
    tally.add_if(
        answers.bmi().map(|bmi| bmi < LOW_BMI).unwrap_or(false),
        2,
        "Low BMI",
    );
    tally.add_if(
        answers.includes(q::PERSONAL_MEDICAL_HISTORY, "rheumatoid-arthritis"),
        2,
        "Rheumatoid arthritis",
    );

    let tier = tally.tier(HIGH_AT, MODERATE_AT);
    BoneHealthAssessment {
        risk: DomainRiskAssessment {
            score: tally.score,
            tier,
            factors: tally.factors,
            recommendation: recommendation(tier),
        },
        scan_indicated: tier != RiskTier::Low,
    }
}

fn early_menopause(answers: &AnswerRecord, age: u32) -> bool {
    let menopause_age = u32::try_from(answers.integer(q::MENOPAUSE_AGE)).unwrap_or(0);
    if menopause_age > 0 {
        return menopause_age < EARLY_MENOPAUSE_AGE;
    }
    answers.is(q::MENSTRUAL_STATUS, "stopped") && age > 0 && age < EARLY_MENOPAUSE_AGE
}

fn recommendation(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::High => {
            "A DEXA scan and FRAX fracture-risk assessment are recommended. Discuss \
             bone-protective treatment with your GP."
        }
        RiskTier::Moderate => {
            "Ask your GP about a FRAX assessment and DEXA scan. Keep up calcium, vitamin D and \
             weight-bearing exercise."
        }
        RiskTier::Low => {
            "Maintain weight-bearing exercise and a diet with enough calcium and vitamin D."
        }
    }
}
