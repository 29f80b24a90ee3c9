//! Small self-contained scorers for specific clinical domains.
//!
//! Each accumulates integer points from a fixed set of predicates and maps
//! the sum onto a three-tier risk with a recommendation.

mod bone;
mod cardiovascular;
mod uti;

pub use bone::{assess_bone_health_risk, BoneHealthAssessment};
pub use cardiovascular::assess_cardiovascular_context;
pub use uti::assess_uti_risk;

use serde::Serialize;

use super::domain::RiskTier;

/// Tiered outcome of a domain assessor, with the factors that fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainRiskAssessment {
    pub score: u32,
    pub tier: RiskTier,
    pub factors: Vec<String>,
    pub recommendation: &'static str,
}

#[derive(Default)]
struct PointTally {
    score: u32,
    factors: Vec<String>,
}

impl PointTally {
    fn add(&mut self, points: u32, factor: impl Into<String>) {
        self.score += points;
        self.factors.push(format!("{} (+{points})", factor.into()));
    }

    fn add_if(&mut self, condition: bool, points: u32, factor: &str) {
        if condition {
            self.add(points, factor);
        }
    }

    fn tier(&self, high_at: u32, moderate_at: u32) -> RiskTier {
        if self.score >= high_at {
            RiskTier::High
        } else if self.score >= moderate_at {
            RiskTier::Moderate
        } else {
            RiskTier::Low
        }
    }
}
