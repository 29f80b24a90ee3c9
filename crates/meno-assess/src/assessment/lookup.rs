use serde::{Deserialize, Serialize};

use super::answers::{AnswerRecord, AnswerValue};
use super::questions as q;

/// Points for a single question, keeping "not answered" apart from an
/// explicit zero-point answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "points")]
pub enum LookupScore {
    NotAnswered,
    Unrecognized,
    Points(u32),
}

impl LookupScore {
    pub fn points(self) -> u32 {
        match self {
            Self::Points(points) => points,
            Self::NotAnswered | Self::Unrecognized => 0,
        }
    }

    pub fn is_answered(self) -> bool {
        !matches!(self, Self::NotAnswered)
    }
}

struct LookupTable {
    question: &'static str,
    entries: &'static [(&'static str, u32)],
}

const TABLES: &[LookupTable] = &[
    LookupTable {
        question: q::HOT_FLASH_FREQUENCY,
        entries: &[("none", 0), ("mild", 4), ("moderate", 7), ("severe", 10)],
    },
    LookupTable {
        question: q::NIGHT_SWEATS,
        entries: &[("none", 0), ("mild", 3), ("moderate", 6), ("severe", 9)],
    },
    LookupTable {
        question: q::MOOD_CHANGES,
        entries: &[("none", 0), ("mild", 2), ("moderate", 5), ("severe", 8)],
    },
    LookupTable {
        question: q::ANXIETY_LEVEL,
        entries: &[("none", 0), ("mild", 2), ("moderate", 5), ("severe", 8)],
    },
    LookupTable {
        question: q::LOW_MOOD,
        entries: &[
            ("none", 0),
            ("occasional", 2),
            ("frequent", 5),
            ("constant", 8),
        ],
    },
    LookupTable {
        question: q::BRAIN_FOG,
        entries: &[("none", 0), ("mild", 2), ("moderate", 4), ("severe", 6)],
    },
    LookupTable {
        question: q::PHYSICAL_SYMPTOMS,
        entries: &[
            ("none", 0),
            ("joint-pain", 3),
            ("muscle-aches", 2),
            ("headaches", 2),
            ("fatigue", 3),
            ("palpitations", 4),
            ("weight-gain", 2),
            ("breast-tenderness", 2),
            ("hair-thinning", 1),
            ("skin-changes", 1),
        ],
    },
    LookupTable {
        question: q::SLEEP_QUALITY,
        entries: &[("good", 0), ("fair", 3), ("poor", 6), ("very-poor", 9)],
    },
    LookupTable {
        question: q::LIBIDO_CHANGES,
        entries: &[
            ("none", 0),
            ("slight-decrease", 2),
            ("significant-decrease", 5),
            ("absent", 7),
        ],
    },
    LookupTable {
        question: q::VAGINAL_DRYNESS,
        entries: &[("none", 0), ("mild", 3), ("moderate", 6), ("severe", 9)],
    },
    LookupTable {
        question: q::URINARY_SYMPTOMS,
        entries: &[
            ("none", 0),
            ("urgency", 2),
            ("frequency", 2),
            ("leakage", 3),
            ("pain-on-urination", 3),
        ],
    },
    LookupTable {
        question: q::SMOKING_STATUS,
        entries: &[("never", 0), ("former", 1), ("current", 5)],
    },
    LookupTable {
        question: q::ALCOHOL_CONSUMPTION,
        entries: &[("none", 0), ("light", 1), ("moderate", 3), ("heavy", 6)],
    },
    LookupTable {
        question: q::EXERCISE_FREQUENCY,
        entries: &[
            ("daily", 0),
            ("regular", 0),
            ("occasional", 2),
            ("rarely", 4),
            ("none", 5),
        ],
    },
];

fn table_for(question_id: &str) -> Option<&'static LookupTable> {
    TABLES.iter().find(|table| table.question == question_id)
}

fn lookup(table: &LookupTable, option: &str) -> Option<u32> {
    table
        .entries
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(option.trim()))
        .map(|(_, points)| *points)
}

/// Map an answer to its table points.
///
/// Scalar answers read their option's value; multi-select answers sum the
/// recognised items. Unknown questions and unknown options score neutrally.
pub fn score(question_id: &str, answer: Option<&AnswerValue>) -> LookupScore {
    let Some(answer) = answer else {
        return LookupScore::NotAnswered;
    };
    let Some(table) = table_for(question_id) else {
        return LookupScore::Unrecognized;
    };

    match answer {
        AnswerValue::Choice(option) | AnswerValue::Text(option) => lookup(table, option)
            .map(LookupScore::Points)
            .unwrap_or(LookupScore::Unrecognized),
        AnswerValue::Selections(items) => {
            let recognised: Vec<u32> = items
                .iter()
                .filter_map(|item| lookup(table, item))
                .collect();
            if recognised.is_empty() {
                LookupScore::Unrecognized
            } else {
                LookupScore::Points(recognised.iter().sum())
            }
        }
        AnswerValue::Number(_) => LookupScore::Unrecognized,
    }
}

pub fn score_answer(answers: &AnswerRecord, question_id: &str) -> LookupScore {
    score(question_id, answers.get(question_id))
}

/// Groups of questions whose table points are summed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    Vasomotor,
    Psychological,
    Physical,
    Sleep,
    Libido,
    Vaginal,
    Smoking,
    Alcohol,
    Exercise,
}

impl ScoreCategory {
    pub const SYMPTOM_DOMAINS: [Self; 6] = [
        Self::Vasomotor,
        Self::Psychological,
        Self::Physical,
        Self::Sleep,
        Self::Libido,
        Self::Vaginal,
    ];

    pub const LIFESTYLE: [Self; 3] = [Self::Smoking, Self::Alcohol, Self::Exercise];

    pub const fn questions(self) -> &'static [&'static str] {
        match self {
            Self::Vasomotor => &[q::HOT_FLASH_FREQUENCY, q::NIGHT_SWEATS],
            Self::Psychological => &[q::MOOD_CHANGES, q::ANXIETY_LEVEL, q::LOW_MOOD, q::BRAIN_FOG],
            Self::Physical => &[q::PHYSICAL_SYMPTOMS],
            Self::Sleep => &[q::SLEEP_QUALITY],
            Self::Libido => &[q::LIBIDO_CHANGES],
            Self::Vaginal => &[q::VAGINAL_DRYNESS, q::URINARY_SYMPTOMS],
            Self::Smoking => &[q::SMOKING_STATUS],
            Self::Alcohol => &[q::ALCOHOL_CONSUMPTION],
            Self::Exercise => &[q::EXERCISE_FREQUENCY],
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Vasomotor => "Vasomotor",
            Self::Psychological => "Psychological",
            Self::Physical => "Physical",
            Self::Sleep => "Sleep",
            Self::Libido => "Libido",
            Self::Vaginal => "Vaginal & urinary",
            Self::Smoking => "Smoking",
            Self::Alcohol => "Alcohol",
            Self::Exercise => "Exercise",
        }
    }

    /// Summed points across the category's questions.
    pub fn score(self, answers: &AnswerRecord) -> u32 {
        self.questions()
            .iter()
            .map(|question| score_answer(answers, question).points())
            .sum()
    }

    /// Whether any question in the category was answered at all.
    pub fn is_answered(self, answers: &AnswerRecord) -> bool {
        self.questions()
            .iter()
            .any(|question| answers.contains(question))
    }
}
