//! Itemised, evidence-cited treatment-suitability scoring.
//!
//! Kept apart from the risk stratifier: the stratifier answers "how unwell and
//! how at-risk", this answers "how suitable is hormone therapy".

use serde::{Deserialize, Serialize};

use super::answers::AnswerRecord;
use super::domain::{RiskTier, SeverityBand};
use super::evidence::RuleKey;
use super::questions as q;

const BASE_CONFIDENCE: i32 = 90;
const UNCERTAINTY_PENALTY: i32 = 8;
const COMPLEXITY_PENALTY: i32 = 10;
const MIN_CONFIDENCE: i32 = 60;
const MAX_CONFIDENCE: i32 = 95;

const VTE_HISTORY: &[&str] = &["blood-clots", "vte", "dvt", "pulmonary-embolism"];
const NON_HORMONAL_OPTIONS: &[&str] = &["non-hormonal", "cbt"];

/// Stated treatment preference, shared by the explainer and the pathway
/// resolver.
///
/// A non-hormonal or CBT selection outranks HRT when both are ticked. Other
/// options (e.g. `lifestyle`) do not count as a stated preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreatmentPreference {
    Hrt,
    NonHormonal,
    NotStated,
}

impl TreatmentPreference {
    pub fn from_answers(answers: &AnswerRecord) -> Self {
        if answers.includes_any(q::TREATMENT_PREFERENCES, NON_HORMONAL_OPTIONS) {
            Self::NonHormonal
        } else if answers.includes(q::TREATMENT_PREFERENCES, "hrt") {
            Self::Hrt
        } else {
            Self::NotStated
        }
    }
}

/// Optional context from the domain assessors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreExtras {
    pub uti_risk: Option<RiskTier>,
    pub bone_risk: Option<RiskTier>,
    pub cardiovascular_risk: Option<RiskTier>,
}

/// One signed line item with the evidence it rests on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreContribution {
    pub factor: &'static str,
    pub points: i32,
    pub reasoning: String,
    pub rule: RuleKey,
}

/// Immutable, fully itemised treatment-suitability score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    contributions: Vec<ScoreContribution>,
    total: u8,
    confidence: u8,
    uncertainty_factors: Vec<String>,
}

impl ScoreBreakdown {
    pub fn contributions(&self) -> &[ScoreContribution] {
        &self.contributions
    }

    /// Sum of contributions clamped to 0..=100.
    pub fn total(&self) -> u8 {
        self.total
    }

    /// Unclamped sum, for audit.
    pub fn raw_total(&self) -> i32 {
        self.contributions.iter().map(|item| item.points).sum()
    }

    /// Percentage in 60..=95.
    pub fn confidence(&self) -> u8 {
        self.confidence
    }

    pub fn uncertainty_factors(&self) -> &[String] {
        &self.uncertainty_factors
    }

    pub fn contribution(&self, rule: RuleKey) -> Option<&ScoreContribution> {
        self.contributions.iter().find(|item| item.rule == rule)
    }

    pub fn recommendation(&self) -> &'static str {
        match self.total {
            70..=100 => "Hormone therapy is likely to be suitable; discuss options with a clinician",
            40..=69 => "Hormone therapy may be suitable; weigh benefits and risks with a clinician",
            _ => "Non-hormonal approaches are recommended as the first option",
        }
    }
}

struct BreakdownBuilder {
    contributions: Vec<ScoreContribution>,
    uncertainty_factors: Vec<String>,
}

impl BreakdownBuilder {
    fn new() -> Self {
        Self {
            contributions: Vec::new(),
            uncertainty_factors: Vec::new(),
        }
    }

    fn apply(&mut self, factor: &'static str, points: i32, key: RuleKey) {
        let rule = key.rule();
        self.contributions.push(ScoreContribution {
            factor,
            points,
            reasoning: rule.citation(),
            rule: key,
        });
        for uncertainty in rule.uncertainty_factors {
            self.uncertain(uncertainty);
        }
    }

    fn uncertain(&mut self, factor: &str) {
        if !self.uncertainty_factors.iter().any(|known| known == factor) {
            self.uncertainty_factors.push(factor.to_string());
        }
    }

    fn finish(self, age: u32, history_count: usize) -> ScoreBreakdown {
        let raw_total: i32 = self.contributions.iter().map(|item| item.points).sum();
        let total = raw_total.clamp(0, 100) as u8;

        let uncertainty_count = i32::try_from(self.uncertainty_factors.len()).unwrap_or(i32::MAX);
        let mut confidence =
            BASE_CONFIDENCE.saturating_sub(uncertainty_count.saturating_mul(UNCERTAINTY_PENALTY));
        if age > 65 || history_count > 2 {
            confidence = confidence.saturating_sub(COMPLEXITY_PENALTY);
        }
        let confidence = confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE) as u8;

        ScoreBreakdown {
            contributions: self.contributions,
            total,
            confidence,
            uncertainty_factors: self.uncertainty_factors,
        }
    }
}

/// Score hormone-therapy suitability from its inputs, line by line.
pub fn explain_treatment_score(
    severity: SeverityBand,
    personal_history: &[String],
    age: u32,
    preference: TreatmentPreference,
    extras: &ScoreExtras,
) -> ScoreBreakdown {
    let mut builder = BreakdownBuilder::new();
    let has_history = |names: &[&str]| {
        personal_history
            .iter()
            .any(|entry| names.iter().any(|name| entry.eq_ignore_ascii_case(name)))
    };

    match severity {
        SeverityBand::Severe => builder.apply("Severe vasomotor symptoms", 40, RuleKey::SevereVasomotor),
        SeverityBand::Moderate => {
            builder.apply("Moderate vasomotor symptoms", 25, RuleKey::ModerateVasomotor)
        }
        SeverityBand::Mild => builder.apply("Mild vasomotor symptoms", 10, RuleKey::MildVasomotor),
        SeverityBand::Minimal => builder.uncertain("Vasomotor severity minimal or not reported"),
    }

    match age {
        0 => builder.uncertain("Age not provided"),
        1..=49 => builder.apply("Age under 50", 25, RuleKey::AgeUnder50),
        50..=59 => builder.apply("Age 50-59", 20, RuleKey::Age50To59),
        60..=64 => builder.apply("Age 60-64", 5, RuleKey::Age60To64),
        _ => builder.apply("Age 65 or over", -10, RuleKey::Age65Plus),
    }

    if has_history(&["breast-cancer"]) {
        builder.apply(
            "History of breast cancer",
            -50,
            RuleKey::BreastCancerHistory,
        );
    }
    if has_history(VTE_HISTORY) {
        builder.apply(
            "History of venous thromboembolism",
            -30,
            RuleKey::VenousThromboembolism,
        );
    }

    if matches!(extras.uti_risk, Some(RiskTier::Moderate | RiskTier::High)) {
        builder.apply("Raised UTI risk", 15, RuleKey::UtiRisk);
    }

    match extras.bone_risk {
        Some(RiskTier::High) => builder.apply("High bone fracture risk", 20, RuleKey::BoneRiskHigh),
        Some(RiskTier::Moderate) => {
            builder.apply("Moderate bone fracture risk", 10, RuleKey::BoneRiskModerate)
        }
        Some(RiskTier::Low) | None => {}
    }

    match extras.cardiovascular_risk {
        Some(RiskTier::Low) if age > 0 && age < 60 => builder.apply(
            "Low cardiovascular risk, under 60",
            10,
            RuleKey::CardiovascularLowRiskYoung,
        ),
        Some(RiskTier::High) => builder.apply(
            "High cardiovascular risk",
            -15,
            RuleKey::CardiovascularHighRisk,
        ),
        _ => {}
    }

    match preference {
        TreatmentPreference::Hrt => builder.apply("Prefers HRT", 10, RuleKey::PrefersHrt),
        TreatmentPreference::NonHormonal => builder.apply(
            "Prefers non-hormonal options",
            -15,
            RuleKey::PrefersNonHormonal,
        ),
        TreatmentPreference::NotStated => builder.uncertain("No treatment preference stated"),
    }

    let history_count = personal_history
        .iter()
        .filter(|entry| !entry.eq_ignore_ascii_case("none"))
        .count();
    builder.finish(age, history_count)
}
