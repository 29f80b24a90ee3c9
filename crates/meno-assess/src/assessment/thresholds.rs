use serde::{Deserialize, Serialize};

use super::domain::{RiskLevel, SeverityBand};

pub const DEFAULT_THRESHOLDS_VERSION: &str = "2024.1";

/// Banding cut-offs for risk tiers and symptom severity.
///
/// These are reviewed clinical constants. They are loaded as data so changes
/// go through review with a version bump rather than a code edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringThresholds {
    pub version: String,
    pub risk_high: f64,
    pub risk_medium: f64,
    pub severity_severe: u32,
    pub severity_moderate: u32,
    pub severity_mild: u32,
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self {
            version: DEFAULT_THRESHOLDS_VERSION.to_string(),
            risk_high: 35.0,
            risk_medium: 20.0,
            severity_severe: 12,
            severity_moderate: 7,
            severity_mild: 3,
        }
    }
}

impl ScoringThresholds {
    /// Non-urgent tier for a weighted stratifier total.
    pub fn risk_level(&self, total_score: f64) -> RiskLevel {
        if total_score >= self.risk_high {
            RiskLevel::High
        } else if total_score >= self.risk_medium {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn severity_band(&self, score: u32) -> SeverityBand {
        if score >= self.severity_severe {
            SeverityBand::Severe
        } else if score >= self.severity_moderate {
            SeverityBand::Moderate
        } else if score >= self.severity_mild {
            SeverityBand::Mild
        } else {
            SeverityBand::Minimal
        }
    }

    /// Describe the first ordering problem, if any.
    pub fn validate(&self) -> Result<(), String> {
        if self.version.trim().is_empty() {
            return Err("thresholds version must not be empty".to_string());
        }
        if !(self.risk_medium.is_finite() && self.risk_high.is_finite()) {
            return Err("risk thresholds must be finite".to_string());
        }
        if self.risk_medium <= 0.0 || self.risk_high <= self.risk_medium {
            return Err(format!(
                "risk thresholds must satisfy 0 < medium < high (medium {}, high {})",
                self.risk_medium, self.risk_high
            ));
        }
        if self.severity_mild == 0
            || self.severity_moderate <= self.severity_mild
            || self.severity_severe <= self.severity_moderate
        {
            return Err(format!(
                "severity bands must satisfy 0 < mild < moderate < severe ({}/{}/{})",
                self.severity_mild, self.severity_moderate, self.severity_severe
            ));
        }
        Ok(())
    }
}
