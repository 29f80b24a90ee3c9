use serde::Serialize;
use tracing::{debug, warn};

use super::answers::AnswerRecord;
use super::assessors::{
    assess_bone_health_risk, assess_cardiovascular_context, assess_uti_risk,
    BoneHealthAssessment, DomainRiskAssessment,
};
use super::domain::{CarePathway, FlagSet, RiskLevel};
use super::evidence::RULESET_VERSION;
use super::explainer::{explain_treatment_score, ScoreBreakdown, ScoreExtras, TreatmentPreference};
use super::flags::{detect_triggers, render_flags};
use super::pathway::{resolve_with, PathwayResolution};
use super::questions as q;
use super::risk::{stratify, symptom_severity, RiskOverride, RiskStratification};
use super::summary::{summarize, ClinicalSummary};
use super::thresholds::ScoringThresholds;
use super::visibility::hidden_questions;

/// Everything the core derives from one answer record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentOutcome {
    pub ruleset_version: &'static str,
    pub thresholds_version: String,
    pub risk: RiskStratification,
    pub pathway: PathwayResolution,
    pub summary: ClinicalSummary,
    pub uti_risk: DomainRiskAssessment,
    pub bone_health: BoneHealthAssessment,
    pub cardiovascular: DomainRiskAssessment,
    pub treatment_score: ScoreBreakdown,
    pub treatment_recommendation: &'static str,
    /// Answered questions whose gating answers no longer apply. Reported for
    /// the caller to clear; red flags are never suppressed because of them.
    pub hidden_questions: Vec<String>,
}

/// Stateless evaluator parameterised only by the scoring thresholds.
#[derive(Debug, Clone, Default)]
pub struct AssessmentEngine {
    thresholds: ScoringThresholds,
}

impl AssessmentEngine {
    pub fn new(thresholds: ScoringThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &ScoringThresholds {
        &self.thresholds
    }

    pub fn stratify(&self, answers: &AnswerRecord) -> RiskStratification {
        stratify(answers, &self.thresholds)
    }

    pub fn stratify_risk(&self, answers: &AnswerRecord) -> RiskLevel {
        self.stratify(answers).level
    }

    pub fn detect_flags(&self, answers: &AnswerRecord) -> FlagSet {
        render_flags(&detect_triggers(answers))
    }

    pub fn resolve_care_pathway(&self, answers: &AnswerRecord) -> CarePathway {
        resolve_with(answers, &self.thresholds, &detect_triggers(answers)).pathway
    }

    pub fn build_clinical_summary(&self, answers: &AnswerRecord) -> ClinicalSummary {
        summarize(answers, &self.thresholds, &detect_triggers(answers))
    }

    /// Treatment breakdown with every input derived from the record.
    pub fn explain_treatment_score(&self, answers: &AnswerRecord) -> ScoreBreakdown {
        let extras = ScoreExtras {
            uti_risk: Some(assess_uti_risk(answers).tier),
            bone_risk: Some(assess_bone_health_risk(answers).risk.tier),
            cardiovascular_risk: Some(assess_cardiovascular_context(answers).tier),
        };
        explain_treatment_score(
            symptom_severity(answers, &self.thresholds),
            answers.selections(q::PERSONAL_MEDICAL_HISTORY),
            answers.age(),
            TreatmentPreference::from_answers(answers),
            &extras,
        )
    }

    pub fn evaluate(&self, answers: &AnswerRecord) -> AssessmentOutcome {
        let triggers = detect_triggers(answers);
        let risk = self.stratify(answers);
        let pathway = resolve_with(answers, &self.thresholds, &triggers);
        let summary = summarize(answers, &self.thresholds, &triggers);
        let uti_risk = assess_uti_risk(answers);
        let bone_health = assess_bone_health_risk(answers);
        let cardiovascular = assess_cardiovascular_context(answers);

        let extras = ScoreExtras {
            uti_risk: Some(uti_risk.tier),
            bone_risk: Some(bone_health.risk.tier),
            cardiovascular_risk: Some(cardiovascular.tier),
        };
        let treatment_score = explain_treatment_score(
            risk.severity,
            answers.selections(q::PERSONAL_MEDICAL_HISTORY),
            answers.age(),
            TreatmentPreference::from_answers(answers),
            &extras,
        );

        if let Some(RiskOverride::UrgentRedFlag { triggers }) = &risk.risk_override {
            warn!(
                urgent_triggers = triggers.len(),
                "urgent red flag overrides numeric risk score"
            );
        }
        debug!(
            risk_level = risk.level.label(),
            total_score = risk.total_score,
            pathway = pathway.pathway.code(),
            flags = summary.red_flags.len(),
            treatment_total = treatment_score.total(),
            confidence = treatment_score.confidence(),
            "assessment evaluated"
        );

        AssessmentOutcome {
            ruleset_version: RULESET_VERSION,
            thresholds_version: self.thresholds.version.clone(),
            treatment_recommendation: treatment_score.recommendation(),
            hidden_questions: hidden_questions(answers),
            risk,
            pathway,
            summary,
            uti_risk,
            bone_health,
            cardiovascular,
            treatment_score,
        }
    }
}
