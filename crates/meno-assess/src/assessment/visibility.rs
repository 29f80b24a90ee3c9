use super::answers::AnswerRecord;
use super::questions as q;

/// Predicate over earlier answers that gates a dependent question.
#[derive(Debug, Clone, Copy)]
enum Condition {
    Equals(&'static str, &'static str),
    AnyOf(&'static str, &'static [&'static str]),
    Includes(&'static str, &'static str),
}

impl Condition {
    fn holds(self, answers: &AnswerRecord) -> bool {
        match self {
            Self::Equals(question, value) => answers.is(question, value),
            Self::AnyOf(question, values) => answers.is_any(question, values),
            Self::Includes(question, item) => answers.includes(question, item),
        }
    }
}

const RULES: &[(&str, Condition)] = &[
    (q::PERIODS_STOPPED, Condition::Equals(q::MENSTRUAL_STATUS, "stopped")),
    (
        q::MENOPAUSE_AGE,
        Condition::Equals(q::MENSTRUAL_STATUS, "stopped"),
    ),
    (
        q::POSTMENOPAUSAL_BLEEDING,
        Condition::AnyOf(q::PERIODS_STOPPED, &["1-2-years", "more-than-2-years"]),
    ),
    (
        q::CYCLE_CHANGES,
        Condition::AnyOf(q::MENSTRUAL_STATUS, &["regular", "irregular"]),
    ),
    (
        q::HEAVY_BLEEDING,
        Condition::AnyOf(q::MENSTRUAL_STATUS, &["regular", "irregular"]),
    ),
    (
        q::SELF_HARM_RISK,
        Condition::AnyOf(q::LOW_MOOD, &["frequent", "constant"]),
    ),
    (
        q::CIGARETTES_PER_DAY,
        Condition::Equals(q::SMOKING_STATUS, "current"),
    ),
    (
        q::ALCOHOL_UNITS,
        Condition::AnyOf(q::ALCOHOL_CONSUMPTION, &["light", "moderate", "heavy"]),
    ),
    (
        q::UTI_HISTORY,
        Condition::AnyOf(q::VAGINAL_DRYNESS, &["mild", "moderate", "severe"]),
    ),
    (q::HRT_DETAILS, Condition::Includes(q::CURRENT_TREATMENTS, "hrt")),
];

/// Whether a question applies given the answers so far.
///
/// Questions without a rule are always visible.
pub fn is_visible(question_id: &str, answers: &AnswerRecord) -> bool {
    RULES
        .iter()
        .filter(|(question, _)| *question == question_id)
        .all(|(_, condition)| condition.holds(answers))
}

/// Answered questions that are no longer visible, including those hidden
/// only because a question they depend on was itself hidden.
pub fn hidden_questions(answers: &AnswerRecord) -> Vec<String> {
    let mut current = answers.clone();
    let mut hidden: Vec<String> = Vec::new();

    loop {
        let newly_hidden: Vec<String> = current
            .iter()
            .map(|(question, _)| question)
            .filter(|question| !is_visible(question, &current))
            .map(str::to_string)
            .collect();
        if newly_hidden.is_empty() {
            break;
        }
        current = current.without(newly_hidden.iter().map(String::as_str));
        hidden.extend(newly_hidden);
    }

    hidden.sort();
    hidden
}

/// Copy of the record with every hidden answer cleared.
pub fn prune_hidden(answers: &AnswerRecord) -> AnswerRecord {
    let hidden = hidden_questions(answers);
    answers.without(hidden.iter().map(String::as_str))
}
