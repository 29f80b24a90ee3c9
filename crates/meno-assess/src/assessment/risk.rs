use serde::{Deserialize, Serialize};

use super::answers::AnswerRecord;
use super::domain::{RiskLevel, SeverityBand};
use super::flags::{detect_triggers, RedFlagTrigger};
use super::lookup::ScoreCategory;
use super::questions as q;
use super::thresholds::ScoringThresholds;

const VASOMOTOR_WEIGHT: f64 = 1.3;
const PSYCHOLOGICAL_WEIGHT: f64 = 1.2;
const DEPRESSION_HISTORY_MULTIPLIER: f64 = 1.5;
const PHYSICAL_WEIGHT: f64 = 1.0;
const SLEEP_WEIGHT: f64 = 1.0;
const LIBIDO_WEIGHT: f64 = 0.8;
const VAGINAL_WEIGHT: f64 = 0.8;
const SMOKING_WEIGHT: f64 = 1.5;
const ALCOHOL_WEIGHT: f64 = 1.0;
const EXERCISE_WEIGHT: f64 = 1.0;

const HIGH_RISK_HISTORY: &[&str] = &["breast-cancer", "blood-clots", "liver-disease"];

/// Why the numeric score was bypassed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum RiskOverride {
    UrgentRedFlag { triggers: Vec<RedFlagTrigger> },
    HighRiskHistory { conditions: Vec<String> },
}

/// One weighted or additive term of the stratifier total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskContribution {
    pub factor: String,
    pub raw: f64,
    pub weight: f64,
    pub points: f64,
}

impl RiskContribution {
    fn weighted(factor: impl Into<String>, raw: u32, weight: f64) -> Self {
        let raw = f64::from(raw);
        Self {
            factor: factor.into(),
            raw,
            weight,
            points: raw * weight,
        }
    }

    fn additive(factor: impl Into<String>, points: f64) -> Self {
        Self {
            factor: factor.into(),
            raw: points,
            weight: 1.0,
            points,
        }
    }
}

/// Full stratifier output: the level plus the terms that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskStratification {
    pub level: RiskLevel,
    /// Weighted total; only meaningful for ordering within non-urgent tiers.
    pub total_score: f64,
    pub severity: SeverityBand,
    pub risk_override: Option<RiskOverride>,
    pub contributions: Vec<RiskContribution>,
}

/// Vasomotor raw score banded into the symptom severity used downstream.
pub fn symptom_severity(answers: &AnswerRecord, thresholds: &ScoringThresholds) -> SeverityBand {
    thresholds.severity_band(ScoreCategory::Vasomotor.score(answers))
}

pub fn stratify(answers: &AnswerRecord, thresholds: &ScoringThresholds) -> RiskStratification {
    let severity = symptom_severity(answers, thresholds);

    let urgent: Vec<RedFlagTrigger> = detect_triggers(answers)
        .into_iter()
        .filter(RedFlagTrigger::is_urgent)
        .collect();
    if !urgent.is_empty() {
        return RiskStratification {
            level: RiskLevel::Urgent,
            total_score: 0.0,
            severity,
            risk_override: Some(RiskOverride::UrgentRedFlag { triggers: urgent }),
            contributions: Vec::new(),
        };
    }

    let conditions: Vec<String> = HIGH_RISK_HISTORY
        .iter()
        .filter(|condition| answers.includes(q::PERSONAL_MEDICAL_HISTORY, condition))
        .map(|condition| condition.to_string())
        .collect();
    if !conditions.is_empty() {
        return RiskStratification {
            level: RiskLevel::High,
            total_score: 0.0,
            severity,
            risk_override: Some(RiskOverride::HighRiskHistory { conditions }),
            contributions: Vec::new(),
        };
    }

    let contributions = weighted_contributions(answers);
    let total_score = contributions.iter().map(|term| term.points).sum();

    RiskStratification {
        level: thresholds.risk_level(total_score),
        total_score,
        severity,
        risk_override: None,
        contributions,
    }
}

pub fn stratify_risk(answers: &AnswerRecord, thresholds: &ScoringThresholds) -> RiskLevel {
    stratify(answers, thresholds).level
}

fn weighted_contributions(answers: &AnswerRecord) -> Vec<RiskContribution> {
    let psychological_weight = if answers.includes(q::PERSONAL_MEDICAL_HISTORY, "depression") {
        PSYCHOLOGICAL_WEIGHT * DEPRESSION_HISTORY_MULTIPLIER
    } else {
        PSYCHOLOGICAL_WEIGHT
    };

    let weighted = [
        (ScoreCategory::Vasomotor, VASOMOTOR_WEIGHT),
        (ScoreCategory::Psychological, psychological_weight),
        (ScoreCategory::Physical, PHYSICAL_WEIGHT),
        (ScoreCategory::Sleep, SLEEP_WEIGHT),
        (ScoreCategory::Libido, LIBIDO_WEIGHT),
        (ScoreCategory::Vaginal, VAGINAL_WEIGHT),
        (ScoreCategory::Smoking, SMOKING_WEIGHT),
        (ScoreCategory::Alcohol, ALCOHOL_WEIGHT),
        (ScoreCategory::Exercise, EXERCISE_WEIGHT),
    ];

    let mut contributions: Vec<RiskContribution> = weighted
        .iter()
        .filter_map(|(category, weight)| {
            let raw = category.score(answers);
            (raw > 0).then(|| RiskContribution::weighted(category.label(), raw, *weight))
        })
        .collect();

    if let Some(points) = age_points(answers.age()) {
        contributions.push(RiskContribution::additive("Age band", points));
    }
    if let Some(points) = answers.bmi().and_then(bmi_points) {
        contributions.push(RiskContribution::additive("BMI band", points));
    }
    if answers.includes_any(q::FAMILY_HISTORY, &["breast-cancer", "ovarian-cancer"]) {
        contributions.push(RiskContribution::additive(
            "Family history: breast/ovarian cancer",
            4.0,
        ));
    }
    if answers.includes_any(q::FAMILY_HISTORY, &["blood-clots", "heart-disease"]) {
        contributions.push(RiskContribution::additive(
            "Family history: clots/heart disease",
            3.0,
        ));
    }

    contributions
}

/// Additive age term; age 0 means unknown and contributes nothing.
fn age_points(age: u32) -> Option<f64> {
    match age {
        0 => None,
        age if age > 60 => Some(5.0),
        age if age > 55 => Some(3.0),
        age if age > 50 => Some(2.0),
        age if age > 45 => Some(1.0),
        age if age < 40 => Some(3.0),
        _ => None,
    }
}

fn bmi_points(bmi: f64) -> Option<f64> {
    if bmi > 35.0 {
        Some(6.0)
    } else if bmi > 30.0 {
        Some(4.0)
    } else if bmi > 25.0 {
        Some(2.0)
    } else if bmi < 18.5 {
        Some(3.0)
    } else {
        None
    }
}
