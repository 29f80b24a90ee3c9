use super::{DomainRiskAssessment, PointTally};
use crate::assessment::answers::AnswerRecord;
use crate::assessment::domain::RiskTier;
use crate::assessment::questions as q;

const HIGH_AT: u32 = 5;
const MODERATE_AT: u32 = 3;

/// Recurrent urinary tract infection risk linked to genitourinary syndrome of
/// menopause.
pub fn assess_uti_risk(answers: &AnswerRecord) -> DomainRiskAssessment {
    let mut tally = PointTally::default();

    if answers.is(q::VAGINAL_DRYNESS, "severe") {
        tally.add(2, "Severe vaginal dryness");
    } else if answers.is(q::VAGINAL_DRYNESS, "moderate") {
        tally.add(1, "Moderate vaginal dryness");
    }

    if answers.is(q::UTI_HISTORY, "recurrent") {
        tally.add(3, "Recurrent UTIs");
    } else if answers.is(q::UTI_HISTORY, "occasional") {
        tally.add(1, "Previous UTI");
    }

    tally.add_if(
        answers.entry_count(q::URINARY_SYMPTOMS) > 0,
        1,
        "Current urinary symptoms",
    );
    tally.add_if(
        answers.includes(q::PERSONAL_MEDICAL_HISTORY, "diabetes"),
        2,
        "Diabetes",
    );

    let age = answers.age();
    if age > 65 {
        tally.add(2, "Age over 65");
    } else if age > 55 {
        tally.add(1, "Age over 55");
    }

    let tier = tally.tier(HIGH_AT, MODERATE_AT);
    DomainRiskAssessment {
        score: tally.score,
        tier,
        factors: tally.factors,
        recommendation: recommendation(tier),
    }
}

fn recommendation(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::High => {
            "Discuss vaginal oestrogen for UTI prevention with your GP, and seek prompt review \
             for any new urinary symptoms."
        }
        RiskTier::Moderate => {
            "Consider vaginal moisturisers and ask about local oestrogen at your next GP \
             appointment."
        }
        RiskTier::Low => {
            "No specific UTI prevention needed. Stay well hydrated and report new urinary \
             symptoms."
        }
    }
}
