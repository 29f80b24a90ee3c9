use meno_assess::assessment::questions as q;
use meno_assess::assessment::{
    AnswerRecord, AssessmentEngine, CarePathway, Complexity, FlagSeverity, RiskLevel, RuleKey,
};

fn engine() -> AssessmentEngine {
    AssessmentEngine::default()
}

#[test]
fn severe_vasomotor_symptoms_route_to_routine_gp() {
    let record = AnswerRecord::new()
        .with(q::POSTMENOPAUSAL_BLEEDING, "no")
        .with(q::HOT_FLASH_FREQUENCY, "severe")
        .with(q::NIGHT_SWEATS, "severe")
        .with(q::AGE, "52");

    let outcome = engine().evaluate(&record);

    assert!((outcome.risk.total_score - 26.7).abs() < 1e-9);
    assert_eq!(outcome.risk.level, RiskLevel::Medium);
    assert_eq!(outcome.pathway.pathway, CarePathway::GpRoutine);
    assert_ne!(outcome.summary.overall_complexity, Complexity::Low);
    assert!(outcome.summary.red_flags.is_empty());
}

#[test]
fn mild_symptoms_with_non_hormonal_preference_start_with_education() {
    let record = AnswerRecord::new()
        .with(q::TREATMENT_PREFERENCES, vec!["non-hormonal"])
        .with(q::HOT_FLASH_FREQUENCY, "mild")
        .with(q::NIGHT_SWEATS, "none");

    let outcome = engine().evaluate(&record);

    assert_eq!(outcome.pathway.pathway, CarePathway::EducationFirst);
    assert_eq!(outcome.risk.level, RiskLevel::Low);
}

#[test]
fn breast_cancer_history_suppresses_treatment_score() {
    let record = AnswerRecord::new()
        .with(q::PERSONAL_MEDICAL_HISTORY, vec!["breast-cancer"])
        .with(q::HOT_FLASH_FREQUENCY, "moderate")
        .with(q::AGE, 54.0);

    let outcome = engine().evaluate(&record);

    let line = outcome
        .treatment_score
        .contribution(RuleKey::BreastCancerHistory)
        .expect("contraindication line");
    assert_eq!(line.points, -50);
    assert!(line.reasoning.contains("contraindication"));
    // 25 moderate + 20 age + 10 low cardiovascular risk - 50
    assert_eq!(outcome.treatment_score.total(), 5);
    assert_eq!(outcome.risk.level, RiskLevel::High);
}

#[test]
fn every_urgent_answer_escalates_regardless_of_score() {
    let urgent_answers = [
        (q::POSTMENOPAUSAL_BLEEDING, "yes"),
        (q::UNEXPLAINED_WEIGHT_LOSS, "yes"),
        (q::SEVERE_PELVIC_PAIN, "yes"),
        (q::SELF_HARM_RISK, "frequent"),
        (q::BREAST_CHANGES, "new-lump"),
    ];

    for (question, answer) in urgent_answers {
        let record = AnswerRecord::new()
            .with(q::HOT_FLASH_FREQUENCY, "none")
            .with(q::TREATMENT_PREFERENCES, vec!["non-hormonal"])
            .with(question, answer);

        let outcome = engine().evaluate(&record);

        assert_eq!(outcome.risk.level, RiskLevel::Urgent, "{question}");
        assert_eq!(outcome.pathway.pathway, CarePathway::GpUrgent, "{question}");
        assert!(
            outcome.summary.red_flags.has_severity(FlagSeverity::Urgent),
            "{question}"
        );
        assert_eq!(outcome.summary.overall_complexity, Complexity::High);
    }
}

#[test]
fn bleeding_stays_urgent_against_any_background() {
    let backgrounds = [
        (
            "breast cancer history",
            AnswerRecord::new().with(q::PERSONAL_MEDICAL_HISTORY, vec!["breast-cancer", "blood-clots"]),
        ),
        (
            "hrt preference",
            AnswerRecord::new()
                .with(q::TREATMENT_PREFERENCES, vec!["hrt"])
                .with(q::AGE, 51.0),
        ),
        (
            "severe symptoms",
            AnswerRecord::new()
                .with(q::HOT_FLASH_FREQUENCY, "severe")
                .with(q::NIGHT_SWEATS, "severe")
                .with(q::SLEEP_QUALITY, "poor")
                .with(q::SMOKING_STATUS, "current")
                .with(q::AGE, 63.0),
        ),
        (
            "everything at once",
            AnswerRecord::new()
                .with(q::PERSONAL_MEDICAL_HISTORY, vec!["breast-cancer"])
                .with(q::TREATMENT_PREFERENCES, vec!["hrt"])
                .with(q::HOT_FLASH_FREQUENCY, "severe")
                .with(q::HEIGHT, 160.0)
                .with(q::WEIGHT, 95.0),
        ),
    ];

    for (label, background) in backgrounds {
        let quiet = engine().evaluate(&background);
        assert_ne!(quiet.risk.level, RiskLevel::Urgent, "{label}");

        let record = background.with(q::POSTMENOPAUSAL_BLEEDING, "yes");
        let outcome = engine().evaluate(&record);

        assert_eq!(outcome.risk.level, RiskLevel::Urgent, "{label}");
        assert_eq!(outcome.pathway.pathway, CarePathway::GpUrgent, "{label}");
        assert!(
            outcome.summary.red_flags.has_severity(FlagSeverity::Urgent),
            "{label}"
        );
    }
}

#[test]
fn evaluation_is_deterministic() {
    let record = AnswerRecord::new()
        .with(q::AGE, 49.0)
        .with(q::HEIGHT, 168.0)
        .with(q::WEIGHT, 82.0)
        .with(q::MOOD_CHANGES, "moderate")
        .with(q::SLEEP_QUALITY, "poor")
        .with(q::VAGINAL_DRYNESS, "mild")
        .with(q::UTI_HISTORY, "occasional")
        .with(q::FAMILY_HISTORY, vec!["heart-disease"])
        .with(q::SMOKING_STATUS, "current");
    let engine = engine();

    let first = engine.evaluate(&record);
    let second = engine.evaluate(&record);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("outcome serialises"),
        serde_json::to_string(&second).expect("outcome serialises")
    );
}

#[test]
fn outcome_carries_versions_and_bounds() {
    let outcome = engine().evaluate(&AnswerRecord::new());

    assert_eq!(outcome.ruleset_version, meno_assess::assessment::RULESET_VERSION);
    assert_eq!(outcome.thresholds_version, "2024.1");
    assert!(outcome.treatment_score.total() <= 100);
    assert!((60..=95).contains(&outcome.treatment_score.confidence()));
    assert_eq!(outcome.pathway.pathway, CarePathway::SelfCare);
}
