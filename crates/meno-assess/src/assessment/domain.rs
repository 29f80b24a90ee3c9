use serde::{Deserialize, Serialize};

/// Ordinal overall risk produced by the stratifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Urgent,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }
}

/// Three-tier result of the small domain assessors (UTI, bone, cardiovascular).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

/// Banding applied to raw symptom scores (12/7/3 by default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityBand {
    Minimal,
    Mild,
    Moderate,
    Severe,
}

impl SeverityBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
        }
    }

    /// Moderate or worse counts as a significant domain for complexity.
    pub fn is_significant(self) -> bool {
        self >= Self::Moderate
    }
}

/// Overall clinical complexity reported in the clinical summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Complexity {
    Low,
    Moderate,
    High,
}

/// The recommended next step for the patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CarePathway {
    GpUrgent,
    GpRoutine,
    SelfCare,
    EducationFirst,
}

impl CarePathway {
    pub const fn code(self) -> &'static str {
        match self {
            Self::GpUrgent => "gp-urgent",
            Self::GpRoutine => "gp-routine",
            Self::SelfCare => "self-care",
            Self::EducationFirst => "education-first",
        }
    }

    /// Patient-facing guidance shown alongside the pathway.
    pub const fn guidance(self) -> &'static str {
        match self {
            Self::GpUrgent => {
                "Please contact your GP surgery as soon as possible and mention the answers \
                 highlighted in this summary. If you feel unsafe or very unwell, call 111 or 999."
            }
            Self::GpRoutine => {
                "Book a routine appointment with your GP or practice nurse to talk through your \
                 symptoms and the treatment options that suit you."
            }
            Self::SelfCare => {
                "Your answers suggest your symptoms can be managed with self-care for now. Keep \
                 track of how you feel and speak to your GP if things change."
            }
            Self::EducationFirst => {
                "Start with our guides on non-hormonal approaches and CBT techniques. You can book \
                 a GP appointment at any point if you would like to discuss other options."
            }
        }
    }
}

/// Severity marker attached to every flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagSeverity {
    Urgent,
    Caution,
    Review,
    Genetics,
    Risk,
}

impl FlagSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Urgent => "URGENT",
            Self::Caution => "CAUTION",
            Self::Review => "REVIEW",
            Self::Genetics => "GENETICS",
            Self::Risk => "RISK",
        }
    }

    /// Urgent and caution flags route the patient to an urgent GP review.
    pub fn escalates(self) -> bool {
        matches!(self, Self::Urgent | Self::Caution)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    Patient,
    Clinician,
}

/// A rendered red-flag message for one audience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    pub severity: FlagSeverity,
    pub audience: Audience,
    pub message: String,
}

/// Clinician and patient renderings of the same trigger set, index-aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagSet {
    pub clinician: Vec<Flag>,
    pub patient: Vec<Flag>,
}

impl FlagSet {
    pub fn is_empty(&self) -> bool {
        self.clinician.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clinician.len()
    }

    pub fn has_severity(&self, severity: FlagSeverity) -> bool {
        self.clinician.iter().any(|flag| flag.severity == severity)
    }

    pub fn escalating(&self) -> impl Iterator<Item = &Flag> {
        self.clinician
            .iter()
            .filter(|flag| flag.severity.escalates())
    }
}
