//! Red-flag safety net.
//!
//! Detection runs in two layers: a single predicate table decides which
//! triggers fire, then two renderers turn each trigger into a clinician and a
//! patient message. Both renderers match exhaustively on [`RedFlagTrigger`],
//! so a trigger cannot exist for one audience and not the other.

use serde::{Deserialize, Serialize};

use super::answers::AnswerRecord;
use super::domain::{Audience, Flag, FlagSet, FlagSeverity};
use super::questions as q;

pub const SEVERE_OBESITY_BMI: f64 = 35.0;
pub const EARLY_MENOPAUSE_AGE: u32 = 40;

/// A condition detected in the answers that needs clinical attention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "trigger")]
pub enum RedFlagTrigger {
    PostmenopausalBleeding,
    UnexplainedWeightLoss,
    SeverePelvicPain,
    FrequentSelfHarmThoughts,
    NewBreastLump,
    OccasionalSelfHarmThoughts,
    HeavyOrProlongedBleeding,
    BreastCancerHistory,
    BloodClotHistory,
    LiverDiseaseHistory,
    EarlyMenopause { age: u32 },
    PersistentLowMood,
    FamilyCancerHistory,
    SevereObesity { bmi: f64 },
    CurrentSmoker,
    HeavyAlcoholUse,
}

impl RedFlagTrigger {
    pub fn severity(&self) -> FlagSeverity {
        match self {
            Self::PostmenopausalBleeding
            | Self::UnexplainedWeightLoss
            | Self::SeverePelvicPain
            | Self::FrequentSelfHarmThoughts
            | Self::NewBreastLump => FlagSeverity::Urgent,
            Self::OccasionalSelfHarmThoughts | Self::HeavyOrProlongedBleeding => {
                FlagSeverity::Caution
            }
            Self::BreastCancerHistory
            | Self::BloodClotHistory
            | Self::LiverDiseaseHistory
            | Self::EarlyMenopause { .. }
            | Self::PersistentLowMood => FlagSeverity::Review,
            Self::FamilyCancerHistory => FlagSeverity::Genetics,
            Self::SevereObesity { .. } | Self::CurrentSmoker | Self::HeavyAlcoholUse => {
                FlagSeverity::Risk
            }
        }
    }

    pub fn is_urgent(&self) -> bool {
        self.severity() == FlagSeverity::Urgent
    }

    pub fn render(&self, audience: Audience) -> Flag {
        let message = match audience {
            Audience::Clinician => clinician_message(self),
            Audience::Patient => patient_message(self),
        };
        Flag {
            severity: self.severity(),
            audience,
            message,
        }
    }
}

type TriggerRule = fn(&AnswerRecord) -> Option<RedFlagTrigger>;

const TRIGGER_RULES: &[TriggerRule] = &[
    |answers| {
        answers
            .is(q::POSTMENOPAUSAL_BLEEDING, "yes")
            .then_some(RedFlagTrigger::PostmenopausalBleeding)
    },
    |answers| {
        answers
            .is(q::UNEXPLAINED_WEIGHT_LOSS, "yes")
            .then_some(RedFlagTrigger::UnexplainedWeightLoss)
    },
    |answers| {
        answers
            .is(q::SEVERE_PELVIC_PAIN, "yes")
            .then_some(RedFlagTrigger::SeverePelvicPain)
    },
    |answers| {
        answers
            .is(q::SELF_HARM_RISK, "frequent")
            .then_some(RedFlagTrigger::FrequentSelfHarmThoughts)
    },
    |answers| {
        answers
            .is(q::BREAST_CHANGES, "new-lump")
            .then_some(RedFlagTrigger::NewBreastLump)
    },
    |answers| {
        answers
            .is(q::SELF_HARM_RISK, "occasional")
            .then_some(RedFlagTrigger::OccasionalSelfHarmThoughts)
    },
    |answers| {
        answers
            .is_any(q::HEAVY_BLEEDING, &["yes", "flooding", "prolonged"])
            .then_some(RedFlagTrigger::HeavyOrProlongedBleeding)
    },
    |answers| {
        answers
            .includes(q::PERSONAL_MEDICAL_HISTORY, "breast-cancer")
            .then_some(RedFlagTrigger::BreastCancerHistory)
    },
    |answers| {
        answers
            .includes(q::PERSONAL_MEDICAL_HISTORY, "blood-clots")
            .then_some(RedFlagTrigger::BloodClotHistory)
    },
    |answers| {
        answers
            .includes(q::PERSONAL_MEDICAL_HISTORY, "liver-disease")
            .then_some(RedFlagTrigger::LiverDiseaseHistory)
    },
    early_menopause,
    |answers| {
        answers
            .is(q::LOW_MOOD, "constant")
            .then_some(RedFlagTrigger::PersistentLowMood)
    },
    |answers| {
        answers
            .includes_any(q::FAMILY_HISTORY, &["breast-cancer", "ovarian-cancer"])
            .then_some(RedFlagTrigger::FamilyCancerHistory)
    },
    |answers| {
        answers
            .bmi()
            .filter(|bmi| *bmi > SEVERE_OBESITY_BMI)
            .map(|bmi| RedFlagTrigger::SevereObesity { bmi })
    },
    |answers| {
        answers
            .is(q::SMOKING_STATUS, "current")
            .then_some(RedFlagTrigger::CurrentSmoker)
    },
    |answers| {
        answers
            .is(q::ALCOHOL_CONSUMPTION, "heavy")
            .then_some(RedFlagTrigger::HeavyAlcoholUse)
    },
];

fn early_menopause(answers: &AnswerRecord) -> Option<RedFlagTrigger> {
    let menopause_age = u32::try_from(answers.integer(q::MENOPAUSE_AGE)).unwrap_or(0);
    if menopause_age > 0 && menopause_age < EARLY_MENOPAUSE_AGE {
        return Some(RedFlagTrigger::EarlyMenopause { age: menopause_age });
    }

    let age = answers.age();
    (answers.is(q::MENSTRUAL_STATUS, "stopped") && age > 0 && age < EARLY_MENOPAUSE_AGE)
        .then_some(RedFlagTrigger::EarlyMenopause { age })
}

/// Evaluate every trigger predicate, in table order.
pub fn detect_triggers(answers: &AnswerRecord) -> Vec<RedFlagTrigger> {
    TRIGGER_RULES
        .iter()
        .filter_map(|rule| rule(answers))
        .collect()
}

pub fn render_flags(triggers: &[RedFlagTrigger]) -> FlagSet {
    FlagSet {
        clinician: triggers
            .iter()
            .map(|trigger| trigger.render(Audience::Clinician))
            .collect(),
        patient: triggers
            .iter()
            .map(|trigger| trigger.render(Audience::Patient))
            .collect(),
    }
}

pub fn detect_flags(answers: &AnswerRecord) -> FlagSet {
    render_flags(&detect_triggers(answers))
}

fn clinician_message(trigger: &RedFlagTrigger) -> String {
    match trigger {
        RedFlagTrigger::PostmenopausalBleeding => {
            "Postmenopausal bleeding reported. Refer on the 2-week-wait suspected \
             gynaecological cancer pathway (endometrial)."
                .to_string()
        }
        RedFlagTrigger::UnexplainedWeightLoss => {
            "Unexplained weight loss reported. Assess for malignancy; consider 2-week-wait \
             referral per NICE NG12."
                .to_string()
        }
        RedFlagTrigger::SeverePelvicPain => {
            "Severe pelvic pain reported. Same-day assessment; exclude ovarian pathology \
             (CA-125, pelvic ultrasound)."
                .to_string()
        }
        RedFlagTrigger::FrequentSelfHarmThoughts => {
            "Frequent thoughts of self-harm. Same-day mental health risk assessment required; \
             consider crisis team referral."
                .to_string()
        }
        RedFlagTrigger::NewBreastLump => {
            "New breast lump reported. Refer on the 2-week-wait breast pathway.".to_string()
        }
        RedFlagTrigger::OccasionalSelfHarmThoughts => {
            "Occasional thoughts of self-harm. Prompt mental health risk assessment; safety-net \
             and signpost crisis support."
                .to_string()
        }
        RedFlagTrigger::HeavyOrProlongedBleeding => {
            "Heavy or prolonged menstrual bleeding. Check FBC/ferritin; consider pelvic \
             ultrasound to exclude structural cause."
                .to_string()
        }
        RedFlagTrigger::BreastCancerHistory => {
            "History of breast cancer: systemic HRT contraindicated. Discuss non-hormonal \
             options; liaise with oncology."
                .to_string()
        }
        RedFlagTrigger::BloodClotHistory => {
            "History of VTE: oral HRT relatively contraindicated. Consider transdermal route; \
             haematology input if recurrent."
                .to_string()
        }
        RedFlagTrigger::LiverDiseaseHistory => {
            "History of liver disease: check LFTs; transdermal HRT preferred if treatment \
             indicated."
                .to_string()
        }
        RedFlagTrigger::EarlyMenopause { age } => format!(
            "Menopause at age {age}: assess for premature ovarian insufficiency (FSH x2, 4-6 \
             weeks apart); HRT advised until natural menopause age."
        ),
        RedFlagTrigger::PersistentLowMood => {
            "Persistent low mood. Screen with PHQ-9; distinguish perimenopausal mood change \
             from major depressive disorder."
                .to_string()
        }
        RedFlagTrigger::FamilyCancerHistory => {
            "Family history of breast/ovarian cancer. Assess against familial criteria \
             (NICE CG164); consider genetics referral."
                .to_string()
        }
        RedFlagTrigger::SevereObesity { bmi } => format!(
            "BMI {bmi:.1} (>35). Raised VTE risk with oral HRT; transdermal route preferred; \
             offer weight management."
        ),
        RedFlagTrigger::CurrentSmoker => {
            "Current smoker. Raised cardiovascular and VTE risk; offer smoking cessation \
             support; transdermal HRT preferred."
                .to_string()
        }
        RedFlagTrigger::HeavyAlcoholUse => {
            "Heavy alcohol use reported. AUDIT-C screen; alcohol worsens vasomotor symptoms \
             and breast cancer risk."
                .to_string()
        }
    }
}

fn patient_message(trigger: &RedFlagTrigger) -> String {
    match trigger {
        RedFlagTrigger::PostmenopausalBleeding => {
            "You mentioned bleeding after your periods had stopped. This is usually nothing \
             serious, but it is important to see your GP soon so they can check it."
                .to_string()
        }
        RedFlagTrigger::UnexplainedWeightLoss => {
            "You mentioned losing weight without trying. Please let your GP know soon so they \
             can look into it with you."
                .to_string()
        }
        RedFlagTrigger::SeverePelvicPain => {
            "You mentioned strong pain in your lower tummy. Please contact your GP soon to get \
             this checked."
                .to_string()
        }
        RedFlagTrigger::FrequentSelfHarmThoughts => {
            "You told us you often have thoughts of harming yourself. You do not have to cope \
             alone: please speak to your GP today, or call 111 or Samaritans on 116 123."
                .to_string()
        }
        RedFlagTrigger::NewBreastLump => {
            "You mentioned a new lump in your breast. Most lumps are not serious, but please \
             see your GP soon so it can be checked."
                .to_string()
        }
        RedFlagTrigger::OccasionalSelfHarmThoughts => {
            "You told us you sometimes have thoughts of harming yourself. Please talk to your \
             GP; support is available any time from Samaritans on 116 123."
                .to_string()
        }
        RedFlagTrigger::HeavyOrProlongedBleeding => {
            "Heavy or long periods are common around the menopause, but your GP can check \
             for causes and help you feel better."
                .to_string()
        }
        RedFlagTrigger::BreastCancerHistory => {
            "Because of your history of breast cancer, your GP will talk with you about the \
             treatment options that are safest for you."
                .to_string()
        }
        RedFlagTrigger::BloodClotHistory => {
            "Because you have had a blood clot before, your GP will help you choose the \
             safest type of treatment."
                .to_string()
        }
        RedFlagTrigger::LiverDiseaseHistory => {
            "Because of your liver history, your GP may suggest a simple blood test before \
             choosing a treatment."
                .to_string()
        }
        RedFlagTrigger::EarlyMenopause { .. } => {
            "Your periods stopped earlier than usual. Your GP can check this and talk about \
             how to protect your long-term health."
                .to_string()
        }
        RedFlagTrigger::PersistentLowMood => {
            "Feeling low most of the time can be part of the menopause, and help is \
             available. Your GP can talk through the options with you."
                .to_string()
        }
        RedFlagTrigger::FamilyCancerHistory => {
            "You mentioned breast or ovarian cancer in your family. Your GP may talk to you \
             about whether extra checks would be helpful."
                .to_string()
        }
        RedFlagTrigger::SevereObesity { .. } => {
            "Your GP can support you with weight and may suggest a treatment type that suits \
             you best, such as a patch or gel."
                .to_string()
        }
        RedFlagTrigger::CurrentSmoker => {
            "Stopping smoking is one of the best things you can do for your health. Your GP \
             or local stop-smoking service can help."
                .to_string()
        }
        RedFlagTrigger::HeavyAlcoholUse => {
            "Cutting down on alcohol can ease hot flushes and protect your health. Your GP \
             can offer support if you would like it."
                .to_string()
        }
    }
}
