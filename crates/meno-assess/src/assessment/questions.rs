//! Question identifiers and the answer shape each one expects.

use serde::{Deserialize, Serialize};

pub const AGE: &str = "age";
pub const HEIGHT: &str = "height";
pub const WEIGHT: &str = "weight";

pub const MENSTRUAL_STATUS: &str = "menstrualStatus";
pub const PERIODS_STOPPED: &str = "periodsStopped";
pub const MENOPAUSE_AGE: &str = "menopauseAge";
pub const CYCLE_CHANGES: &str = "cycleChanges";
pub const HEAVY_BLEEDING: &str = "heavyBleeding";
pub const POSTMENOPAUSAL_BLEEDING: &str = "postmenopausalBleeding";
pub const UNEXPLAINED_WEIGHT_LOSS: &str = "unexplainedWeightLoss";
pub const SEVERE_PELVIC_PAIN: &str = "severePelvicPain";
pub const BREAST_CHANGES: &str = "breastChanges";

pub const HOT_FLASH_FREQUENCY: &str = "hotFlashFrequency";
pub const NIGHT_SWEATS: &str = "nightSweats";
pub const MOOD_CHANGES: &str = "moodChanges";
pub const ANXIETY_LEVEL: &str = "anxietyLevel";
pub const LOW_MOOD: &str = "lowMood";
pub const SELF_HARM_RISK: &str = "selfHarmRisk";
pub const BRAIN_FOG: &str = "brainFog";
pub const PHYSICAL_SYMPTOMS: &str = "physicalSymptoms";
pub const SLEEP_QUALITY: &str = "sleepQuality";
pub const LIBIDO_CHANGES: &str = "libidoChanges";
pub const VAGINAL_DRYNESS: &str = "vaginalDryness";
pub const URINARY_SYMPTOMS: &str = "urinarySymptoms";
pub const UTI_HISTORY: &str = "utiHistory";

pub const SMOKING_STATUS: &str = "smokingStatus";
pub const CIGARETTES_PER_DAY: &str = "cigarettesPerDay";
pub const ALCOHOL_CONSUMPTION: &str = "alcoholConsumption";
pub const ALCOHOL_UNITS: &str = "alcoholUnits";
pub const EXERCISE_FREQUENCY: &str = "exerciseFrequency";

pub const PERSONAL_MEDICAL_HISTORY: &str = "personalMedicalHistory";
pub const FAMILY_HISTORY: &str = "familyHistory";
pub const TREATMENT_PREFERENCES: &str = "treatmentPreferences";
pub const CURRENT_TREATMENTS: &str = "currentTreatments";
pub const HRT_DETAILS: &str = "hrtDetails";
pub const ADDITIONAL_NOTES: &str = "additionalNotes";

/// Shape of the answer a question collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    SingleChoice,
    MultiSelect,
    Numeric,
    FreeText,
}

const CATALOGUE: &[(&str, QuestionKind)] = &[
    (AGE, QuestionKind::Numeric),
    (HEIGHT, QuestionKind::Numeric),
    (WEIGHT, QuestionKind::Numeric),
    (MENSTRUAL_STATUS, QuestionKind::SingleChoice),
    (PERIODS_STOPPED, QuestionKind::SingleChoice),
    (MENOPAUSE_AGE, QuestionKind::Numeric),
    (CYCLE_CHANGES, QuestionKind::SingleChoice),
    (HEAVY_BLEEDING, QuestionKind::SingleChoice),
    (POSTMENOPAUSAL_BLEEDING, QuestionKind::SingleChoice),
    (UNEXPLAINED_WEIGHT_LOSS, QuestionKind::SingleChoice),
    (SEVERE_PELVIC_PAIN, QuestionKind::SingleChoice),
    (BREAST_CHANGES, QuestionKind::SingleChoice),
    (HOT_FLASH_FREQUENCY, QuestionKind::SingleChoice),
    (NIGHT_SWEATS, QuestionKind::SingleChoice),
    (MOOD_CHANGES, QuestionKind::SingleChoice),
    (ANXIETY_LEVEL, QuestionKind::SingleChoice),
    (LOW_MOOD, QuestionKind::SingleChoice),
    (SELF_HARM_RISK, QuestionKind::SingleChoice),
    (BRAIN_FOG, QuestionKind::SingleChoice),
    (PHYSICAL_SYMPTOMS, QuestionKind::MultiSelect),
    (SLEEP_QUALITY, QuestionKind::SingleChoice),
    (LIBIDO_CHANGES, QuestionKind::SingleChoice),
    (VAGINAL_DRYNESS, QuestionKind::SingleChoice),
    (URINARY_SYMPTOMS, QuestionKind::MultiSelect),
    (UTI_HISTORY, QuestionKind::SingleChoice),
    (SMOKING_STATUS, QuestionKind::SingleChoice),
    (CIGARETTES_PER_DAY, QuestionKind::Numeric),
    (ALCOHOL_CONSUMPTION, QuestionKind::SingleChoice),
    (ALCOHOL_UNITS, QuestionKind::Numeric),
    (EXERCISE_FREQUENCY, QuestionKind::SingleChoice),
    (PERSONAL_MEDICAL_HISTORY, QuestionKind::MultiSelect),
    (FAMILY_HISTORY, QuestionKind::MultiSelect),
    (TREATMENT_PREFERENCES, QuestionKind::MultiSelect),
    (CURRENT_TREATMENTS, QuestionKind::MultiSelect),
    (HRT_DETAILS, QuestionKind::FreeText),
    (ADDITIONAL_NOTES, QuestionKind::FreeText),
];

/// Expected answer shape, or `None` for questions the catalogue does not know.
pub fn kind_of(question_id: &str) -> Option<QuestionKind> {
    CATALOGUE
        .iter()
        .find(|(id, _)| *id == question_id)
        .map(|(_, kind)| *kind)
}

pub fn catalogue() -> impl Iterator<Item = (&'static str, QuestionKind)> {
    CATALOGUE.iter().copied()
}
