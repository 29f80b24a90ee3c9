//! Clinical decision core for the menopause questionnaire.
//!
//! Every entry point is a pure function of an [`AnswerRecord`] snapshot (plus
//! the read-only [`ScoringThresholds`]). Nothing is cached between calls, so
//! the same record always yields the same outcome.

pub mod answers;
pub mod assessors;
pub mod domain;
mod engine;
pub mod evidence;
pub mod explainer;
pub mod flags;
pub mod import;
pub mod lookup;
pub mod pathway;
pub mod questions;
pub mod risk;
pub mod router;
pub mod summary;
pub mod thresholds;
pub mod visibility;

#[cfg(test)]
mod tests;

pub use answers::{AnswerRecord, AnswerValue};
pub use assessors::{
    assess_bone_health_risk, assess_cardiovascular_context, assess_uti_risk,
    BoneHealthAssessment, DomainRiskAssessment,
};
pub use domain::{
    Audience, CarePathway, Complexity, Flag, FlagSet, FlagSeverity, RiskLevel, RiskTier,
    SeverityBand,
};
pub use engine::{AssessmentEngine, AssessmentOutcome};
pub use evidence::{EvidenceRule, RuleKey, RULESET_VERSION};
pub use explainer::{
    explain_treatment_score, ScoreBreakdown, ScoreContribution, ScoreExtras, TreatmentPreference,
};
pub use flags::{detect_flags, detect_triggers, RedFlagTrigger};
pub use import::AnswerImportError;
pub use lookup::{LookupScore, ScoreCategory};
pub use pathway::{resolve_care_pathway, PathwayResolution, PathwayRule};
pub use risk::{stratify_risk, RiskStratification};
pub use router::assessment_router;
pub use summary::{build_clinical_summary, ClinicalSummary, DomainScore};
pub use thresholds::ScoringThresholds;
pub use visibility::{hidden_questions, is_visible, prune_hidden};
