use crate::infra::load_engine;
use chrono::Local;
use clap::{Args, ValueEnum};
use meno_assess::assessment::import::{load_csv_path, load_json_path};
use meno_assess::assessment::questions as q;
use meno_assess::assessment::risk::RiskOverride;
use meno_assess::assessment::{
    AnswerRecord, AssessmentEngine, AssessmentOutcome, CarePathway, Flag,
};
use meno_assess::config::AppConfig;
use meno_assess::error::AppError;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum AudienceArg {
    #[default]
    Clinician,
    Patient,
}

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON file holding a single answer record
    #[arg(long, conflicts_with = "csv", required_unless_present = "csv")]
    pub(crate) answers: Option<PathBuf>,
    /// CSV export with one answer record per row (question ids as headers)
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Which rendering of the red flags to print
    #[arg(long, value_enum, default_value_t = AudienceArg::Clinician)]
    pub(crate) audience: AudienceArg,
    /// Print the full outcome as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Which rendering of the red flags to print
    #[arg(long, value_enum, default_value_t = AudienceArg::Clinician)]
    pub(crate) audience: AudienceArg,
    /// Only run the named sample questionnaire
    #[arg(long)]
    pub(crate) scenario: Option<String>,
}

#[derive(Debug, Serialize)]
struct AssessmentReport<'a> {
    source: &'a str,
    record: usize,
    #[serde(flatten)]
    outcome: &'a AssessmentOutcome,
}

pub(crate) fn run_assessment(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        answers,
        csv,
        audience,
        json,
    } = args;

    let config = AppConfig::load()?;
    let engine = load_engine(&config.assessment)?;

    let (source, records) = match (answers, csv) {
        (Some(path), _) => (path.display().to_string(), vec![load_json_path(&path)?]),
        (None, Some(path)) => (path.display().to_string(), load_csv_path(&path)?),
        (None, None) => {
            println!("No answers supplied; pass --answers or --csv");
            return Ok(());
        }
    };

    if !json {
        println!(
            "Assessment report for {} ({} record(s), generated {})",
            source,
            records.len(),
            Local::now().format("%Y-%m-%d %H:%M")
        );
    }

    for (index, record) in records.iter().enumerate() {
        let outcome = engine.evaluate(record);
        if json {
            let report = AssessmentReport {
                source: &source,
                record: index + 1,
                outcome: &outcome,
            };
            match serde_json::to_string_pretty(&report) {
                Ok(payload) => println!("{payload}"),
                Err(err) => println!("Outcome payload unavailable: {err}"),
            }
        } else {
            render_outcome(&format!("Record {}", index + 1), &outcome, audience);
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { audience, scenario } = args;
    let engine = AssessmentEngine::default();
    let scenarios = demo_scenarios();

    let selected: Vec<&DemoScenario> = match scenario.as_deref() {
        Some(key) => scenarios.iter().filter(|item| item.key == key).collect(),
        None => scenarios.iter().collect(),
    };
    if selected.is_empty() {
        let available: Vec<&str> = scenarios.iter().map(|item| item.key).collect();
        println!(
            "Unknown scenario '{}'. Available: {}",
            scenario.unwrap_or_default(),
            available.join(", ")
        );
        return Ok(());
    }

    println!(
        "Menopause assessment demo (thresholds {})",
        engine.thresholds().version
    );
    for item in selected {
        let outcome = engine.evaluate(&item.answers);
        render_outcome(item.title, &outcome, audience);
    }

    Ok(())
}

fn render_outcome(title: &str, outcome: &AssessmentOutcome, audience: AudienceArg) {
    println!("\n{title}");

    let risk = &outcome.risk;
    println!(
        "- Risk: {} (weighted score {:.1}, symptom severity {})",
        risk.level.label(),
        risk.total_score,
        risk.severity.label()
    );
    match &risk.risk_override {
        Some(RiskOverride::UrgentRedFlag { triggers }) => {
            println!("  Overridden by {} urgent red flag(s)", triggers.len())
        }
        Some(RiskOverride::HighRiskHistory { conditions }) => {
            println!("  Overridden by history of {}", conditions.join(", "))
        }
        None => {}
    }
    for term in &risk.contributions {
        println!(
            "    - {}: {:.1} (raw {:.0} x {:.2})",
            term.factor, term.points, term.raw, term.weight
        );
    }

    println!(
        "- Care pathway: {} ({:?})",
        outcome.pathway.pathway.code(),
        outcome.pathway.rule
    );
    println!("  {}", outcome.pathway.guidance);

    let summary = &outcome.summary;
    println!("- Complexity: {:?}", summary.overall_complexity);
    for domain in summary.domain_scores.iter().filter(|domain| domain.answered) {
        println!(
            "    - {}: {} ({})",
            domain.label,
            domain.score,
            domain.band.label()
        );
    }

    let flags: &[Flag] = match audience {
        AudienceArg::Clinician => &summary.red_flags.clinician,
        AudienceArg::Patient => &summary.red_flags.patient,
    };
    if flags.is_empty() {
        println!("- Red flags: none");
    } else {
        println!("- Red flags:");
        for flag in flags {
            println!("    - [{}] {}", flag.severity.label(), flag.message);
        }
    }

    println!(
        "- UTI risk: {} | Bone health: {}{} | Cardiovascular: {}",
        outcome.uti_risk.tier.label(),
        outcome.bone_health.risk.tier.label(),
        if outcome.bone_health.scan_indicated {
            " (DEXA indicated)"
        } else {
            ""
        },
        outcome.cardiovascular.tier.label()
    );

    let breakdown = &outcome.treatment_score;
    println!(
        "- Treatment suitability: {}/100 (confidence {}%)",
        breakdown.total(),
        breakdown.confidence()
    );
    for line in breakdown.contributions() {
        println!("    {:+} {}: {}", line.points, line.factor, line.reasoning);
    }
    for factor in breakdown.uncertainty_factors() {
        println!("    ? {factor}");
    }
    println!("  {}", outcome.treatment_recommendation);

    if !outcome.hidden_questions.is_empty() {
        println!(
            "- Answers to clear (no longer apply): {}",
            outcome.hidden_questions.join(", ")
        );
    }
}

struct DemoScenario {
    key: &'static str,
    title: &'static str,
    answers: AnswerRecord,
    expected: CarePathway,
}

fn demo_scenarios() -> Vec<DemoScenario> {
    vec![
        DemoScenario {
            key: "vasomotor",
            title: "Severe flushes and sweats at 52, no stated preference",
            answers: AnswerRecord::new()
                .with(q::AGE, 52.0)
                .with(q::MENSTRUAL_STATUS, "irregular")
                .with(q::HOT_FLASH_FREQUENCY, "severe")
                .with(q::NIGHT_SWEATS, "severe")
                .with(q::SLEEP_QUALITY, "poor"),
            expected: CarePathway::GpRoutine,
        },
        DemoScenario {
            key: "non-hormonal",
            title: "Mild symptoms, prefers non-hormonal support",
            answers: AnswerRecord::new()
                .with(q::AGE, 48.0)
                .with(q::HOT_FLASH_FREQUENCY, "mild")
                .with(q::NIGHT_SWEATS, "none")
                .with(q::EXERCISE_FREQUENCY, "regular")
                .with(q::TREATMENT_PREFERENCES, vec!["non-hormonal", "cbt"]),
            expected: CarePathway::EducationFirst,
        },
        DemoScenario {
            key: "breast-cancer",
            title: "Moderate symptoms after breast cancer",
            answers: AnswerRecord::new()
                .with(q::AGE, 56.0)
                .with(q::MENSTRUAL_STATUS, "stopped")
                .with(q::PERIODS_STOPPED, "less-than-1-year")
                .with(q::HOT_FLASH_FREQUENCY, "moderate")
                .with(q::PERSONAL_MEDICAL_HISTORY, vec!["breast-cancer"])
                .with(q::TREATMENT_PREFERENCES, vec!["hrt"]),
            expected: CarePathway::GpRoutine,
        },
        DemoScenario {
            key: "urgent-bleeding",
            title: "Bleeding two years after the last period",
            answers: AnswerRecord::new()
                .with(q::AGE, 59.0)
                .with(q::MENSTRUAL_STATUS, "stopped")
                .with(q::PERIODS_STOPPED, "more-than-2-years")
                .with(q::POSTMENOPAUSAL_BLEEDING, "yes")
                .with(q::HOT_FLASH_FREQUENCY, "mild"),
            expected: CarePathway::GpUrgent,
        },
        DemoScenario {
            key: "genitourinary",
            title: "Vaginal dryness with recurrent UTIs at 63",
            answers: AnswerRecord::new()
                .with(q::AGE, 63.0)
                .with(q::HEIGHT, 158.0)
                .with(q::WEIGHT, 66.0)
                .with(q::VAGINAL_DRYNESS, "severe")
                .with(q::UTI_HISTORY, "recurrent")
                .with(q::URINARY_SYMPTOMS, vec!["urgency", "frequency"])
                .with(q::EXERCISE_FREQUENCY, "rarely")
                .with(q::TREATMENT_PREFERENCES, vec!["hrt"]),
            expected: CarePathway::GpRoutine,
        },
    ]
}
