use super::common::*;
use crate::assessment::questions as q;
use crate::assessment::risk::{stratify, RiskOverride};
use crate::assessment::{
    stratify_risk, AnswerRecord, RedFlagTrigger, RiskLevel, ScoringThresholds, SeverityBand,
};

#[test]
fn urgent_red_flag_overrides_low_score() {
    let outcome = stratify(&postmenopausal_bleeding_record(), &thresholds());

    assert_eq!(outcome.level, RiskLevel::Urgent);
    match outcome.risk_override {
        Some(RiskOverride::UrgentRedFlag { triggers }) => {
            assert_eq!(triggers, vec![RedFlagTrigger::PostmenopausalBleeding]);
        }
        other => panic!("expected urgent override, got {other:?}"),
    }
    assert!(outcome.contributions.is_empty());
}

#[test]
fn high_risk_history_forces_high_tier() {
    let record = breast_cancer_record().with(q::HOT_FLASH_FREQUENCY, "none");

    let outcome = stratify(&record, &thresholds());

    assert_eq!(outcome.level, RiskLevel::High);
    assert_eq!(
        outcome.risk_override,
        Some(RiskOverride::HighRiskHistory {
            conditions: vec!["breast-cancer".to_string()]
        })
    );
}

#[test]
fn severe_vasomotor_at_52_is_medium_risk() {
    let outcome = stratify(&vasomotor_record(), &thresholds());

    assert!((outcome.total_score - 26.7).abs() < 1e-9);
    assert_eq!(outcome.level, RiskLevel::Medium);
    assert_eq!(outcome.severity, SeverityBand::Severe);
    assert!(outcome.risk_override.is_none());

    let vasomotor = outcome
        .contributions
        .iter()
        .find(|term| term.factor == "Vasomotor")
        .expect("vasomotor term");
    assert_eq!(vasomotor.raw, 19.0);
    assert_eq!(vasomotor.weight, 1.3);
    let age = outcome
        .contributions
        .iter()
        .find(|term| term.factor == "Age band")
        .expect("age term");
    assert_eq!(age.points, 2.0);
}

#[test]
fn empty_record_is_low_risk() {
    let outcome = stratify(&AnswerRecord::new(), &thresholds());

    assert_eq!(outcome.level, RiskLevel::Low);
    assert_eq!(outcome.total_score, 0.0);
    assert!(outcome.contributions.is_empty());
    assert_eq!(outcome.severity, SeverityBand::Minimal);
}

#[test]
fn raising_hot_flashes_never_lowers_risk() {
    let base = vasomotor_record().with(q::SLEEP_QUALITY, "poor");
    let mut previous: Option<(f64, RiskLevel)> = None;

    for level in ["none", "mild", "moderate", "severe"] {
        let outcome = stratify(&with_hot_flashes(&base, level), &thresholds());
        if let Some((score, tier)) = previous {
            assert!(outcome.total_score >= score, "score dropped at {level}");
            assert!(outcome.level >= tier, "tier dropped at {level}");
        }
        previous = Some((outcome.total_score, outcome.level));
    }
}

#[test]
fn depression_history_amplifies_psychological_weight() {
    let mood = AnswerRecord::new().with(q::MOOD_CHANGES, "severe");
    let with_history = mood
        .clone()
        .with(q::PERSONAL_MEDICAL_HISTORY, vec!["depression"]);

    let plain = stratify(&mood, &thresholds());
    let amplified = stratify(&with_history, &thresholds());

    assert!((plain.total_score - 9.6).abs() < 1e-9);
    assert!((amplified.total_score - 14.4).abs() < 1e-9);
}

#[test]
fn family_history_groups_count_once() {
    let record = AnswerRecord::new().with(
        q::FAMILY_HISTORY,
        vec!["breast-cancer", "ovarian-cancer", "blood-clots", "heart-disease"],
    );

    let outcome = stratify(&record, &thresholds());

    assert_eq!(outcome.total_score, 7.0);
    assert_eq!(outcome.contributions.len(), 2);
}

#[test]
fn age_and_bmi_bands_add_points() {
    let young = stratify(&AnswerRecord::new().with(q::AGE, 38.0), &thresholds());
    let mid = stratify(&AnswerRecord::new().with(q::AGE, 45.0), &thresholds());
    let older = stratify(&AnswerRecord::new().with(q::AGE, 61.0), &thresholds());
    let obese = stratify(&measurements(160.0, 95.0), &thresholds());
    let underweight = stratify(&measurements(170.0, 50.0), &thresholds());

    assert_eq!(young.total_score, 3.0);
    assert_eq!(mid.total_score, 0.0);
    assert_eq!(older.total_score, 5.0);
    assert_eq!(obese.total_score, 6.0);
    assert_eq!(underweight.total_score, 3.0);
}

#[test]
fn custom_thresholds_move_tier_boundaries() {
    let record = vasomotor_record().with(q::HOT_FLASH_FREQUENCY, "moderate");
    let strict = ScoringThresholds {
        version: "strict-test".to_string(),
        risk_medium: 10.0,
        ..ScoringThresholds::default()
    };

    // 7 + 9 = 16 raw, 20.8 weighted, +2 for age.
    assert_eq!(stratify_risk(&record, &thresholds()), RiskLevel::Medium);
    assert_eq!(
        stratify_risk(&record.with(q::NIGHT_SWEATS, "none"), &strict),
        RiskLevel::Medium
    );
}

#[test]
fn threshold_bands_are_inclusive_at_cut_offs() {
    let thresholds = thresholds();

    assert_eq!(thresholds.severity_band(12), SeverityBand::Severe);
    assert_eq!(thresholds.severity_band(11), SeverityBand::Moderate);
    assert_eq!(thresholds.severity_band(7), SeverityBand::Moderate);
    assert_eq!(thresholds.severity_band(6), SeverityBand::Mild);
    assert_eq!(thresholds.severity_band(3), SeverityBand::Mild);
    assert_eq!(thresholds.severity_band(2), SeverityBand::Minimal);
    assert_eq!(thresholds.risk_level(35.0), RiskLevel::High);
    assert_eq!(thresholds.risk_level(34.9), RiskLevel::Medium);
    assert_eq!(thresholds.risk_level(20.0), RiskLevel::Medium);
    assert_eq!(thresholds.risk_level(19.9), RiskLevel::Low);
}

#[test]
fn thresholds_reject_inverted_tiers() {
    assert!(thresholds().validate().is_ok());

    let inverted = ScoringThresholds {
        risk_high: 15.0,
        ..ScoringThresholds::default()
    };
    let err = inverted.validate().expect_err("high below medium");
    assert!(err.contains("medium"));
}
