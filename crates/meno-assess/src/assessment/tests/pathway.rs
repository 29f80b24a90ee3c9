use super::common::*;
use crate::assessment::pathway::{resolve, risk_factor_count};
use crate::assessment::questions as q;
use crate::assessment::{resolve_care_pathway, AnswerRecord, CarePathway, PathwayRule};

#[test]
fn severe_symptoms_without_preference_need_routine_review() {
    let resolution = resolve(&vasomotor_record(), &thresholds());

    assert_eq!(resolution.pathway, CarePathway::GpRoutine);
    assert_eq!(resolution.rule, PathwayRule::NoPreferenceNeedsReview);
    assert_eq!(resolution.guidance, CarePathway::GpRoutine.guidance());
}

#[test]
fn manageable_non_hormonal_preference_starts_with_education() {
    let resolution = resolve(&non_hormonal_record(), &thresholds());

    assert_eq!(resolution.pathway, CarePathway::EducationFirst);
    assert_eq!(resolution.rule, PathwayRule::NonHormonalManageable);
    assert_eq!(resolution.risk_factor_count, 0);
}

#[test]
fn escalating_flag_wins_over_any_preference() {
    let record = postmenopausal_bleeding_record()
        .with(q::TREATMENT_PREFERENCES, vec!["non-hormonal"]);
    let caution = non_hormonal_record().with(q::HEAVY_BLEEDING, "prolonged");

    assert_eq!(
        resolve(&record, &thresholds()).rule,
        PathwayRule::EscalatingRedFlag
    );
    assert_eq!(
        resolve_care_pathway(&caution, &thresholds()),
        CarePathway::GpUrgent
    );
}

#[test]
fn review_flags_do_not_escalate() {
    let resolution = resolve(&breast_cancer_record(), &thresholds());

    assert_eq!(resolution.pathway, CarePathway::GpRoutine);
    assert_eq!(resolution.rule, PathwayRule::NoPreferenceNeedsReview);
}

#[test]
fn non_hormonal_with_severe_symptoms_needs_review() {
    let record = vasomotor_record().with(q::TREATMENT_PREFERENCES, vec!["cbt"]);

    let resolution = resolve(&record, &thresholds());

    assert_eq!(resolution.pathway, CarePathway::GpRoutine);
    assert_eq!(resolution.rule, PathwayRule::NonHormonalNeedsReview);
}

#[test]
fn non_hormonal_with_many_risk_factors_needs_review() {
    let record = non_hormonal_record()
        .with(q::SMOKING_STATUS, "current")
        .with(q::EXERCISE_FREQUENCY, "none")
        .with(q::FAMILY_HISTORY, vec!["heart-disease"]);

    let resolution = resolve(&record, &thresholds());

    assert_eq!(resolution.risk_factor_count, 3);
    assert_eq!(resolution.pathway, CarePathway::GpRoutine);
}

#[test]
fn hrt_preference_goes_to_routine_gp() {
    let record = non_hormonal_record().with(q::TREATMENT_PREFERENCES, vec!["hrt"]);

    let resolution = resolve(&record, &thresholds());

    assert_eq!(resolution.pathway, CarePathway::GpRoutine);
    assert_eq!(resolution.rule, PathwayRule::PrefersHrt);
}

#[test]
fn non_hormonal_choice_outranks_hrt_when_both_ticked() {
    let record = non_hormonal_record().with(q::TREATMENT_PREFERENCES, vec!["hrt", "non-hormonal"]);

    let resolution = resolve(&record, &thresholds());

    assert_eq!(resolution.pathway, CarePathway::EducationFirst);
    assert_eq!(resolution.rule, PathwayRule::NonHormonalManageable);
}

#[test]
fn lifestyle_only_is_not_a_stated_preference() {
    let record = AnswerRecord::new()
        .with(q::TREATMENT_PREFERENCES, vec!["lifestyle"])
        .with(q::HOT_FLASH_FREQUENCY, "mild");

    let resolution = resolve(&record, &thresholds());

    assert_eq!(resolution.pathway, CarePathway::SelfCare);
    assert_eq!(resolution.rule, PathwayRule::UncomplicatedNoPreference);
}

#[test]
fn uncomplicated_record_is_self_care() {
    let mild = AnswerRecord::new()
        .with(q::HOT_FLASH_FREQUENCY, "mild")
        .with(q::EXERCISE_FREQUENCY, "regular");

    assert_eq!(
        resolve_care_pathway(&AnswerRecord::new(), &thresholds()),
        CarePathway::SelfCare
    );
    assert_eq!(resolve(&mild, &thresholds()).rule, PathwayRule::UncomplicatedNoPreference);
}

#[test]
fn risk_factor_count_covers_all_five_factors() {
    let record = measurements(160.0, 95.0)
        .with(q::SMOKING_STATUS, "current")
        .with(q::EXERCISE_FREQUENCY, "none")
        .with(q::PERSONAL_MEDICAL_HISTORY, vec!["diabetes"])
        .with(q::FAMILY_HISTORY, vec!["osteoporosis"]);
    let explicit_none = AnswerRecord::new()
        .with(q::PERSONAL_MEDICAL_HISTORY, vec!["none"])
        .with(q::FAMILY_HISTORY, vec!["none"])
        .with(q::EXERCISE_FREQUENCY, "rarely");

    assert_eq!(risk_factor_count(&record), 5);
    assert_eq!(risk_factor_count(&explicit_none), 0);
}

#[test]
fn pathway_code_matches_wire_format() {
    let json = serde_json::to_value(CarePathway::EducationFirst).expect("serialises");

    assert_eq!(json, CarePathway::EducationFirst.code());
}
