use std::collections::BTreeMap;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use super::questions::{self, QuestionKind};

/// A single answer as supplied by the questionnaire.
///
/// JSON strings deserialize as `Choice`, arrays as `Selections` and numbers as
/// `Number`. `Text` is only produced when a record is normalised against the
/// question catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Choice(String),
    Selections(Vec<String>),
    Number(f64),
    Text(String),
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::Choice(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        Self::Choice(value)
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Selections(values.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(values: Vec<String>) -> Self {
        Self::Selections(values)
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Read-only snapshot of questionnaire answers keyed by question id.
///
/// Absence always means "not answered". Every accessor tolerates missing or
/// malformed values and falls back to a neutral default.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(into = "BTreeMap<String, AnswerValue>")]
pub struct AnswerRecord {
    answers: BTreeMap<String, AnswerValue>,
}

/// Any JSON shape a questionnaire client may send for one answer.
///
/// `null` and objects read as "not answered"; booleans read as `yes`/`no`.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireAnswer {
    Flag(bool),
    Number(f64),
    Text(String),
    List(Vec<Option<WireAnswer>>),
    Unsupported(IgnoredAny),
}

impl WireAnswer {
    fn into_answer(self) -> Option<AnswerValue> {
        match self {
            WireAnswer::Flag(flag) => Some(AnswerValue::Choice(yes_no(flag).to_string())),
            WireAnswer::Number(number) => Some(AnswerValue::Number(number)),
            WireAnswer::Text(text) => Some(AnswerValue::Choice(text)),
            WireAnswer::List(items) => Some(AnswerValue::Selections(
                items
                    .into_iter()
                    .flatten()
                    .filter_map(WireAnswer::into_item)
                    .collect(),
            )),
            WireAnswer::Unsupported(_) => None,
        }
    }

    fn into_item(self) -> Option<String> {
        match self {
            WireAnswer::Flag(flag) => Some(yes_no(flag).to_string()),
            WireAnswer::Number(number) => Some(format_number(number)),
            WireAnswer::Text(text) => Some(text),
            WireAnswer::List(_) | WireAnswer::Unsupported(_) => None,
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

impl<'de> Deserialize<'de> for AnswerRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Option<WireAnswer>>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(id, value)| Some((id, value?.into_answer()?)))
            .collect())
    }
}

impl From<BTreeMap<String, AnswerValue>> for AnswerRecord {
    fn from(raw: BTreeMap<String, AnswerValue>) -> Self {
        Self::from_raw(raw)
    }
}

impl From<AnswerRecord> for BTreeMap<String, AnswerValue> {
    fn from(record: AnswerRecord) -> Self {
        record.answers
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerRecord
where
    K: Into<String>,
    V: Into<AnswerValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (id, value) in iter {
            record.insert(id, value);
        }
        record
    }
}

impl AnswerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from loosely shaped answers, coercing each value to the
    /// shape its question expects.
    pub fn from_raw<I>(raw: I) -> Self
    where
        I: IntoIterator<Item = (String, AnswerValue)>,
    {
        raw.into_iter().collect()
    }

    pub fn with(mut self, question_id: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        self.insert(question_id, value);
        self
    }

    /// Insert an answer; blank answers remove the question instead.
    pub fn insert(&mut self, question_id: impl Into<String>, value: impl Into<AnswerValue>) {
        let question_id = question_id.into();
        match normalize(&question_id, value.into()) {
            Some(value) => {
                self.answers.insert(question_id, value);
            }
            None => {
                self.answers.remove(&question_id);
            }
        }
    }

    pub fn remove(&mut self, question_id: &str) -> Option<AnswerValue> {
        self.answers.remove(question_id)
    }

    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.answers.get(question_id)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.answers.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.answers.iter().map(|(id, value)| (id.as_str(), value))
    }

    /// Scalar answer text, if the question holds one.
    pub fn choice(&self, question_id: &str) -> Option<&str> {
        match self.answers.get(question_id)? {
            AnswerValue::Choice(value) | AnswerValue::Text(value) => Some(value.as_str()),
            AnswerValue::Selections(_) | AnswerValue::Number(_) => None,
        }
    }

    pub fn is(&self, question_id: &str, expected: &str) -> bool {
        self.choice(question_id)
            .map(|value| value.eq_ignore_ascii_case(expected))
            .unwrap_or(false)
    }

    pub fn is_any(&self, question_id: &str, expected: &[&str]) -> bool {
        expected.iter().any(|value| self.is(question_id, value))
    }

    /// Raw multi-select items, empty when unanswered.
    pub fn selections(&self, question_id: &str) -> &[String] {
        match self.answers.get(question_id) {
            Some(AnswerValue::Selections(items)) => items,
            _ => &[],
        }
    }

    /// Multi-select items excluding the explicit "none" option.
    pub fn entries(&self, question_id: &str) -> impl Iterator<Item = &str> {
        self.selections(question_id)
            .iter()
            .map(String::as_str)
            .filter(|item| !item.eq_ignore_ascii_case("none"))
    }

    pub fn entry_count(&self, question_id: &str) -> usize {
        self.entries(question_id).count()
    }

    pub fn includes(&self, question_id: &str, item: &str) -> bool {
        self.entries(question_id)
            .any(|entry| entry.eq_ignore_ascii_case(item))
    }

    pub fn includes_any(&self, question_id: &str, items: &[&str]) -> bool {
        items.iter().any(|item| self.includes(question_id, item))
    }

    /// Integer coercion; anything unparseable reads as 0.
    pub fn integer(&self, question_id: &str) -> i64 {
        match self.answers.get(question_id) {
            Some(AnswerValue::Number(value)) if value.is_finite() => value.trunc() as i64,
            Some(AnswerValue::Choice(raw)) | Some(AnswerValue::Text(raw)) => parse_integer(raw),
            _ => 0,
        }
    }

    pub fn number(&self, question_id: &str) -> Option<f64> {
        let value = match self.answers.get(question_id)? {
            AnswerValue::Number(value) => Some(*value),
            AnswerValue::Choice(raw) | AnswerValue::Text(raw) => raw.trim().parse::<f64>().ok(),
            AnswerValue::Selections(_) => None,
        };
        value.filter(|value| value.is_finite())
    }

    /// Age in whole years; 0 when missing, unparseable or negative.
    pub fn age(&self) -> u32 {
        u32::try_from(self.integer(questions::AGE)).unwrap_or(0)
    }

    /// Body mass index from `height` (cm, or metres below 3) and `weight` (kg).
    ///
    /// Undefined when either measurement is absent or non-positive.
    pub fn bmi(&self) -> Option<f64> {
        let height = self.number(questions::HEIGHT).filter(|value| *value > 0.0)?;
        let weight = self.number(questions::WEIGHT).filter(|value| *value > 0.0)?;
        let metres = if height < 3.0 { height } else { height / 100.0 };
        Some(weight / (metres * metres))
    }

    /// Copy of the record without the given questions.
    pub fn without<'a>(&self, question_ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut pruned = self.clone();
        for id in question_ids {
            pruned.answers.remove(id);
        }
        pruned
    }
}

fn parse_integer(raw: &str) -> i64 {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| {
            trimmed
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(|value| value.trunc() as i64)
        })
        .unwrap_or(0)
}

fn normalize(question_id: &str, value: AnswerValue) -> Option<AnswerValue> {
    let kind = questions::kind_of(question_id);
    match value {
        AnswerValue::Choice(raw) | AnswerValue::Text(raw) => {
            let raw = raw.trim();
            if raw.is_empty() {
                return None;
            }
            let normalized = match kind {
                Some(QuestionKind::MultiSelect) => AnswerValue::Selections(vec![raw.to_string()]),
                Some(QuestionKind::Numeric) => raw
                    .parse::<f64>()
                    .ok()
                    .filter(|number| number.is_finite())
                    .map(AnswerValue::Number)
                    .unwrap_or_else(|| AnswerValue::Text(raw.to_string())),
                Some(QuestionKind::FreeText) => AnswerValue::Text(raw.to_string()),
                Some(QuestionKind::SingleChoice) | None => AnswerValue::Choice(raw.to_string()),
            };
            Some(normalized)
        }
        AnswerValue::Selections(items) => {
            let mut unique: Vec<String> = Vec::with_capacity(items.len());
            for item in items {
                let item = item.trim();
                if !item.is_empty() && !unique.iter().any(|existing| existing == item) {
                    unique.push(item.to_string());
                }
            }
            match (kind, unique.len()) {
                (_, 0) => None,
                (Some(QuestionKind::SingleChoice), 1) => unique.pop().map(AnswerValue::Choice),
                _ => Some(AnswerValue::Selections(unique)),
            }
        }
        AnswerValue::Number(number) if !number.is_finite() => None,
        AnswerValue::Number(number) => Some(match kind {
            Some(QuestionKind::SingleChoice) => AnswerValue::Choice(format_number(number)),
            Some(QuestionKind::FreeText) => AnswerValue::Text(format_number(number)),
            Some(QuestionKind::MultiSelect) => {
                AnswerValue::Selections(vec![format_number(number)])
            }
            Some(QuestionKind::Numeric) | None => AnswerValue::Number(number),
        }),
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
