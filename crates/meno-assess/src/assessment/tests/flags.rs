use super::common::*;
use crate::assessment::flags::render_flags;
use crate::assessment::questions as q;
use crate::assessment::{
    detect_flags, detect_triggers, AnswerRecord, Audience, FlagSeverity, RedFlagTrigger,
};

#[test]
fn postmenopausal_bleeding_raises_urgent_clinician_flag() {
    let flags = detect_flags(&postmenopausal_bleeding_record());

    let urgent = flags
        .clinician
        .iter()
        .find(|flag| flag.severity == FlagSeverity::Urgent)
        .expect("urgent clinician flag");
    assert_eq!(urgent.audience, Audience::Clinician);
    assert!(urgent.message.contains("2-week-wait"));
    assert_eq!(flags.patient.len(), flags.clinician.len());
    assert!(flags.patient[0].message.contains("see your GP"));
}

#[test]
fn severe_obesity_needs_bmi_over_35() {
    let borderline = detect_triggers(&measurements(165.0, 95.0));
    let obese = detect_triggers(&measurements(160.0, 95.0));

    assert!(borderline.is_empty());
    match obese.as_slice() {
        [RedFlagTrigger::SevereObesity { bmi }] => assert!((bmi - 37.1).abs() < 0.05),
        other => panic!("expected a single obesity trigger, got {other:?}"),
    }
    let flags = render_flags(&obese);
    assert_eq!(flags.clinician[0].severity, FlagSeverity::Risk);
    assert!(flags.clinician[0].message.contains("BMI 37.1"));
}

#[test]
fn early_menopause_uses_reported_age_first() {
    let reported = AnswerRecord::new().with(q::MENOPAUSE_AGE, 38.0);
    let inferred = AnswerRecord::new()
        .with(q::MENSTRUAL_STATUS, "stopped")
        .with(q::AGE, 37.0);
    let typical = AnswerRecord::new()
        .with(q::MENSTRUAL_STATUS, "stopped")
        .with(q::AGE, 45.0);

    assert_eq!(
        detect_triggers(&reported),
        vec![RedFlagTrigger::EarlyMenopause { age: 38 }]
    );
    assert_eq!(
        detect_triggers(&inferred),
        vec![RedFlagTrigger::EarlyMenopause { age: 37 }]
    );
    assert!(detect_triggers(&typical).is_empty());
}

#[test]
fn self_harm_severity_follows_frequency() {
    let frequent = AnswerRecord::new().with(q::SELF_HARM_RISK, "frequent");
    let occasional = AnswerRecord::new().with(q::SELF_HARM_RISK, "occasional");

    assert!(detect_flags(&frequent).has_severity(FlagSeverity::Urgent));
    let flags = detect_flags(&occasional);
    assert!(flags.has_severity(FlagSeverity::Caution));
    assert!(!flags.has_severity(FlagSeverity::Urgent));
    assert!(flags.patient[0].message.contains("116 123"));
}

#[test]
fn heavy_bleeding_escalates_as_caution() {
    let record = AnswerRecord::new().with(q::HEAVY_BLEEDING, "flooding");

    let flags = detect_flags(&record);

    assert_eq!(flags.escalating().count(), 1);
    assert_eq!(flags.clinician[0].severity, FlagSeverity::Caution);
}

#[test]
fn family_cancer_history_requests_genetics_review_once() {
    let record = AnswerRecord::new().with(
        q::FAMILY_HISTORY,
        vec!["breast-cancer", "ovarian-cancer"],
    );

    let flags = detect_flags(&record);

    assert_eq!(flags.len(), 1);
    assert!(flags.has_severity(FlagSeverity::Genetics));
}

#[test]
fn triggers_follow_table_order() {
    let record = postmenopausal_bleeding_record()
        .with(q::SMOKING_STATUS, "current")
        .with(q::PERSONAL_MEDICAL_HISTORY, vec!["liver-disease"]);

    assert_eq!(
        detect_triggers(&record),
        vec![
            RedFlagTrigger::PostmenopausalBleeding,
            RedFlagTrigger::LiverDiseaseHistory,
            RedFlagTrigger::CurrentSmoker,
        ]
    );
}

#[test]
fn every_trigger_renders_for_both_audiences() {
    let triggers = vec![
        RedFlagTrigger::PostmenopausalBleeding,
        RedFlagTrigger::UnexplainedWeightLoss,
        RedFlagTrigger::SeverePelvicPain,
        RedFlagTrigger::FrequentSelfHarmThoughts,
        RedFlagTrigger::NewBreastLump,
        RedFlagTrigger::OccasionalSelfHarmThoughts,
        RedFlagTrigger::HeavyOrProlongedBleeding,
        RedFlagTrigger::BreastCancerHistory,
        RedFlagTrigger::BloodClotHistory,
        RedFlagTrigger::LiverDiseaseHistory,
        RedFlagTrigger::EarlyMenopause { age: 36 },
        RedFlagTrigger::PersistentLowMood,
        RedFlagTrigger::FamilyCancerHistory,
        RedFlagTrigger::SevereObesity { bmi: 41.2 },
        RedFlagTrigger::CurrentSmoker,
        RedFlagTrigger::HeavyAlcoholUse,
    ];

    let flags = render_flags(&triggers);

    assert_eq!(flags.clinician.len(), triggers.len());
    assert_eq!(flags.patient.len(), triggers.len());
    for ((trigger, clinician), patient) in triggers
        .iter()
        .zip(&flags.clinician)
        .zip(&flags.patient)
    {
        assert_eq!(clinician.severity, trigger.severity());
        assert_eq!(patient.severity, trigger.severity());
        assert_eq!(patient.audience, Audience::Patient);
        assert!(!clinician.message.is_empty());
        assert_ne!(clinician.message, patient.message);
    }
}

#[test]
fn quiet_record_raises_nothing() {
    assert!(detect_flags(&non_hormonal_record()).is_empty());
    assert!(detect_flags(&AnswerRecord::new()).is_empty());
}
