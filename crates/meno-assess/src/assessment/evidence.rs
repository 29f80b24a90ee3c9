//! Versioned evidence table backing each treatment-score contribution.

use serde::Serialize;

pub const RULESET_VERSION: &str = "ng23-2024.1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EvidenceGrade {
    A,
    B,
    C,
    D,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyType {
    MetaAnalysis,
    RandomisedTrial,
    Cohort,
    Guideline,
    ExpertConsensus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvidenceSource {
    pub guideline: &'static str,
    pub reference: &'static str,
    pub grade: EvidenceGrade,
    pub study_type: StudyType,
    /// Strength of support for the rule's weight, 0-100.
    pub confidence: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvidenceRule {
    pub key: RuleKey,
    pub condition: &'static str,
    pub recommendation: &'static str,
    pub evidence_source: EvidenceSource,
    pub contraindications: &'static [&'static str],
    pub uncertainty_factors: &'static [&'static str],
}

impl EvidenceRule {
    /// Citation line attached to a score contribution.
    pub fn citation(&self) -> String {
        format!(
            "{}: {} [{}, grade {:?}]",
            self.evidence_source.guideline,
            self.recommendation,
            self.evidence_source.reference,
            self.evidence_source.grade
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKey {
    SevereVasomotor,
    ModerateVasomotor,
    MildVasomotor,
    AgeUnder50,
    Age50To59,
    Age60To64,
    Age65Plus,
    BreastCancerHistory,
    VenousThromboembolism,
    UtiRisk,
    BoneRiskHigh,
    BoneRiskModerate,
    CardiovascularLowRiskYoung,
    CardiovascularHighRisk,
    PrefersHrt,
    PrefersNonHormonal,
}

impl RuleKey {
    pub const ALL: [Self; 16] = [
        Self::SevereVasomotor,
        Self::ModerateVasomotor,
        Self::MildVasomotor,
        Self::AgeUnder50,
        Self::Age50To59,
        Self::Age60To64,
        Self::Age65Plus,
        Self::BreastCancerHistory,
        Self::VenousThromboembolism,
        Self::UtiRisk,
        Self::BoneRiskHigh,
        Self::BoneRiskModerate,
        Self::CardiovascularLowRiskYoung,
        Self::CardiovascularHighRisk,
        Self::PrefersHrt,
        Self::PrefersNonHormonal,
    ];

    pub fn rule(self) -> &'static EvidenceRule {
        match self {
            Self::SevereVasomotor => &SEVERE_VASOMOTOR,
            Self::ModerateVasomotor => &MODERATE_VASOMOTOR,
            Self::MildVasomotor => &MILD_VASOMOTOR,
            Self::AgeUnder50 => &AGE_UNDER_50,
            Self::Age50To59 => &AGE_50_TO_59,
            Self::Age60To64 => &AGE_60_TO_64,
            Self::Age65Plus => &AGE_65_PLUS,
            Self::BreastCancerHistory => &BREAST_CANCER_HISTORY,
            Self::VenousThromboembolism => &VENOUS_THROMBOEMBOLISM,
            Self::UtiRisk => &UTI_RISK,
            Self::BoneRiskHigh => &BONE_RISK_HIGH,
            Self::BoneRiskModerate => &BONE_RISK_MODERATE,
            Self::CardiovascularLowRiskYoung => &CARDIOVASCULAR_LOW_RISK_YOUNG,
            Self::CardiovascularHighRisk => &CARDIOVASCULAR_HIGH_RISK,
            Self::PrefersHrt => &PREFERS_HRT,
            Self::PrefersNonHormonal => &PREFERS_NON_HORMONAL,
        }
    }
}

pub fn all_rules() -> impl Iterator<Item = &'static EvidenceRule> {
    RuleKey::ALL.into_iter().map(RuleKey::rule)
}

static SEVERE_VASOMOTOR: EvidenceRule = EvidenceRule {
    key: RuleKey::SevereVasomotor,
    condition: "Severe vasomotor symptoms",
    recommendation: "HRT first-line for severe vasomotor symptoms",
    evidence_source: EvidenceSource {
        guideline: "NICE NG23",
        reference: "NG23 1.4.1 (2015, updated 2024)",
        grade: EvidenceGrade::A,
        study_type: StudyType::MetaAnalysis,
        confidence: 95,
    },
    contraindications: &[],
    uncertainty_factors: &[],
};

static MODERATE_VASOMOTOR: EvidenceRule = EvidenceRule {
    key: RuleKey::ModerateVasomotor,
    condition: "Moderate vasomotor symptoms",
    recommendation: "HRT effective for moderate vasomotor symptoms",
    evidence_source: EvidenceSource {
        guideline: "NICE NG23",
        reference: "NG23 1.4.1; Cochrane CD002978",
        grade: EvidenceGrade::A,
        study_type: StudyType::RandomisedTrial,
        confidence: 90,
    },
    contraindications: &[],
    uncertainty_factors: &[],
};

static MILD_VASOMOTOR: EvidenceRule = EvidenceRule {
    key: RuleKey::MildVasomotor,
    condition: "Mild vasomotor symptoms",
    recommendation: "Lifestyle measures may suffice for mild symptoms; HRT optional",
    evidence_source: EvidenceSource {
        guideline: "NICE NG23",
        reference: "NG23 1.4.3",
        grade: EvidenceGrade::B,
        study_type: StudyType::Guideline,
        confidence: 75,
    },
    contraindications: &[],
    uncertainty_factors: &[],
};

static AGE_UNDER_50: EvidenceRule = EvidenceRule {
    key: RuleKey::AgeUnder50,
    condition: "Age under 50",
    recommendation: "Benefits of HRT outweigh risks before 50, including replacement for early menopause",
    evidence_source: EvidenceSource {
        guideline: "BMS 2020",
        reference: "BMS consensus statement on HRT (2020); NG23 1.6",
        grade: EvidenceGrade::B,
        study_type: StudyType::Cohort,
        confidence: 85,
    },
    contraindications: &[],
    uncertainty_factors: &[],
};

static AGE_50_TO_59: EvidenceRule = EvidenceRule {
    key: RuleKey::Age50To59,
    condition: "Age 50-59",
    recommendation: "Favourable benefit-risk within 10 years of menopause or under 60",
    evidence_source: EvidenceSource {
        guideline: "IMS 2016",
        reference: "IMS recommendations on women's midlife health (2016); WHI 50-59 re-analysis",
        grade: EvidenceGrade::A,
        study_type: StudyType::RandomisedTrial,
        confidence: 90,
    },
    contraindications: &[],
    uncertainty_factors: &[],
};

static AGE_60_TO_64: EvidenceRule = EvidenceRule {
    key: RuleKey::Age60To64,
    condition: "Age 60-64",
    recommendation: "Individualised decision after 60; narrower benefit-risk margin",
    evidence_source: EvidenceSource {
        guideline: "NAMS 2022",
        reference: "NAMS hormone therapy position statement (2022)",
        grade: EvidenceGrade::B,
        study_type: StudyType::Guideline,
        confidence: 70,
    },
    contraindications: &[],
    uncertainty_factors: &["Limited trial data for starting HRT after 60"],
};

static AGE_65_PLUS: EvidenceRule = EvidenceRule {
    key: RuleKey::Age65Plus,
    condition: "Age 65 or over",
    recommendation: "Routine HRT initiation not recommended from 65",
    evidence_source: EvidenceSource {
        guideline: "NAMS 2022",
        reference: "NAMS hormone therapy position statement (2022)",
        grade: EvidenceGrade::B,
        study_type: StudyType::Guideline,
        confidence: 70,
    },
    contraindications: &[],
    uncertainty_factors: &["Sparse evidence for starting HRT at 65 or older"],
};

static BREAST_CANCER_HISTORY: EvidenceRule = EvidenceRule {
    key: RuleKey::BreastCancerHistory,
    condition: "Personal history of breast cancer",
    recommendation: "Systemic HRT contraindicated after breast cancer (contraindication)",
    evidence_source: EvidenceSource {
        guideline: "NICE NG23",
        reference: "NG23 1.5.9; HABITS trial",
        grade: EvidenceGrade::B,
        study_type: StudyType::RandomisedTrial,
        confidence: 90,
    },
    contraindications: &["systemic-hrt"],
    uncertainty_factors: &[],
};

static VENOUS_THROMBOEMBOLISM: EvidenceRule = EvidenceRule {
    key: RuleKey::VenousThromboembolism,
    condition: "Personal history of venous thromboembolism",
    recommendation: "Oral HRT relatively contraindicated after VTE; transdermal preferred (contraindication)",
    evidence_source: EvidenceSource {
        guideline: "NICE NG23",
        reference: "NG23 1.5.1-1.5.3; MHRA Drug Safety Update",
        grade: EvidenceGrade::B,
        study_type: StudyType::Cohort,
        confidence: 85,
    },
    contraindications: &["oral-hrt"],
    uncertainty_factors: &[],
};

static UTI_RISK: EvidenceRule = EvidenceRule {
    key: RuleKey::UtiRisk,
    condition: "Raised recurrent UTI risk",
    recommendation: "Vaginal oestrogen reduces recurrent UTI in postmenopausal women",
    evidence_source: EvidenceSource {
        guideline: "NICE NG112",
        reference: "NG112 1.1.12; Cochrane CD005131",
        grade: EvidenceGrade::A,
        study_type: StudyType::MetaAnalysis,
        confidence: 85,
    },
    contraindications: &[],
    uncertainty_factors: &[],
};

static BONE_RISK_HIGH: EvidenceRule = EvidenceRule {
    key: RuleKey::BoneRiskHigh,
    condition: "High fracture risk",
    recommendation: "HRT prevents osteoporotic fracture in women at high risk",
    evidence_source: EvidenceSource {
        guideline: "NOGG 2022",
        reference: "NOGG clinical guideline (2022); WHI fracture outcomes",
        grade: EvidenceGrade::A,
        study_type: StudyType::RandomisedTrial,
        confidence: 90,
    },
    contraindications: &[],
    uncertainty_factors: &[],
};

static BONE_RISK_MODERATE: EvidenceRule = EvidenceRule {
    key: RuleKey::BoneRiskModerate,
    condition: "Moderate fracture risk",
    recommendation: "HRT offers bone protection where fracture risk is raised",
    evidence_source: EvidenceSource {
        guideline: "NOGG 2022",
        reference: "NOGG clinical guideline (2022)",
        grade: EvidenceGrade::B,
        study_type: StudyType::Guideline,
        confidence: 80,
    },
    contraindications: &[],
    uncertainty_factors: &[],
};

static CARDIOVASCULAR_LOW_RISK_YOUNG: EvidenceRule = EvidenceRule {
    key: RuleKey::CardiovascularLowRiskYoung,
    condition: "Low cardiovascular risk and under 60",
    recommendation: "Neutral-to-favourable cardiovascular profile when HRT starts before 60",
    evidence_source: EvidenceSource {
        guideline: "ESC 2021",
        reference: "ELITE and KEEPS trials; ESC prevention guideline (2021)",
        grade: EvidenceGrade::B,
        study_type: StudyType::RandomisedTrial,
        confidence: 75,
    },
    contraindications: &[],
    uncertainty_factors: &[],
};

static CARDIOVASCULAR_HIGH_RISK: EvidenceRule = EvidenceRule {
    key: RuleKey::CardiovascularHighRisk,
    condition: "High cardiovascular risk",
    recommendation: "Elevated cardiovascular risk warrants caution with oral HRT",
    evidence_source: EvidenceSource {
        guideline: "NICE NG23",
        reference: "NG23 1.5.4-1.5.6",
        grade: EvidenceGrade::B,
        study_type: StudyType::Cohort,
        confidence: 80,
    },
    contraindications: &["oral-hrt"],
    uncertainty_factors: &["Cardiovascular risk estimated from risk-factor count, not QRISK"],
};

static PREFERS_HRT: EvidenceRule = EvidenceRule {
    key: RuleKey::PrefersHrt,
    condition: "Patient prefers HRT",
    recommendation: "Shared decision-making honours stated preference for HRT",
    evidence_source: EvidenceSource {
        guideline: "NICE NG23",
        reference: "NG23 1.2 (shared decision-making)",
        grade: EvidenceGrade::C,
        study_type: StudyType::ExpertConsensus,
        confidence: 70,
    },
    contraindications: &[],
    uncertainty_factors: &[],
};

static PREFERS_NON_HORMONAL: EvidenceRule = EvidenceRule {
    key: RuleKey::PrefersNonHormonal,
    condition: "Patient prefers non-hormonal options",
    recommendation: "Shared decision-making honours stated preference for non-hormonal care",
    evidence_source: EvidenceSource {
        guideline: "NICE NG23",
        reference: "NG23 1.2 (shared decision-making); 1.4.6 (CBT)",
        grade: EvidenceGrade::C,
        study_type: StudyType::ExpertConsensus,
        confidence: 70,
    },
    contraindications: &[],
    uncertainty_factors: &[],
};
