use serde::Serialize;

use super::answers::AnswerRecord;
use super::domain::{Complexity, FlagSet, SeverityBand};
use super::flags::{render_flags, RedFlagTrigger};
use super::lookup::ScoreCategory;
use super::thresholds::ScoringThresholds;

const HIGH_COMPLEXITY_DOMAINS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainScore {
    pub domain: ScoreCategory,
    pub label: &'static str,
    pub score: u32,
    pub band: SeverityBand,
    pub answered: bool,
}

/// Clinician-facing overview of symptom burden and safety flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClinicalSummary {
    pub domain_scores: Vec<DomainScore>,
    pub overall_complexity: Complexity,
    pub red_flags: FlagSet,
}

impl ClinicalSummary {
    pub fn significant_domains(&self) -> impl Iterator<Item = &DomainScore> {
        self.domain_scores
            .iter()
            .filter(|domain| domain.band.is_significant())
    }
}

pub fn domain_scores(answers: &AnswerRecord, thresholds: &ScoringThresholds) -> Vec<DomainScore> {
    ScoreCategory::SYMPTOM_DOMAINS
        .iter()
        .map(|domain| {
            let score = domain.score(answers);
            DomainScore {
                domain: *domain,
                label: domain.label(),
                score,
                band: thresholds.severity_band(score),
                answered: domain.is_answered(answers),
            }
        })
        .collect()
}

pub fn overall_complexity(domain_scores: &[DomainScore], triggers: &[RedFlagTrigger]) -> Complexity {
    let escalating = triggers
        .iter()
        .any(|trigger| trigger.severity().escalates());
    let significant = domain_scores
        .iter()
        .filter(|domain| domain.band.is_significant())
        .count();

    if escalating || significant >= HIGH_COMPLEXITY_DOMAINS {
        Complexity::High
    } else if significant > 0 {
        Complexity::Moderate
    } else {
        Complexity::Low
    }
}

pub(crate) fn summarize(
    answers: &AnswerRecord,
    thresholds: &ScoringThresholds,
    triggers: &[RedFlagTrigger],
) -> ClinicalSummary {
    let domain_scores = domain_scores(answers, thresholds);
    let overall_complexity = overall_complexity(&domain_scores, triggers);

    ClinicalSummary {
        domain_scores,
        overall_complexity,
        red_flags: render_flags(triggers),
    }
}

pub fn build_clinical_summary(
    answers: &AnswerRecord,
    thresholds: &ScoringThresholds,
) -> ClinicalSummary {
    let triggers = super::flags::detect_triggers(answers);
    summarize(answers, thresholds, &triggers)
}
