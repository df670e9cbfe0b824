// ============================================================
// Layer 3 — Question Domain Types
// ============================================================
// The records a generation run hands back to the caller.
//
// Serialised shape (one JSON object per question):
//   {
//     "question": "...",
//     "options":  ["...", "..."],      ← multiple-choice only
//     "answer":   "...",
//     "type":     "pg" | "essay",
//     "materi":   "...",               ← essay only, source sentence
//     "quality":  "validated",         ← essay only, when filtered
//     "edited":   true                 ← only after a user override
//   }
//
// "pg" (pilihan ganda) is the tag the web form and exported files
// already use for multiple-choice, so it is kept on the wire.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::domain::error::QuizError;

// ─── QuestionType ─────────────────────────────────────────────────────────────
/// Which kind of question a run should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QuestionType {
    #[default]
    #[serde(rename = "pg")]
    MultipleChoice,
    #[serde(rename = "essay")]
    Essay,
}

impl QuestionType {
    /// The wire tag stored in each question's `type` field
    pub fn tag(self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "pg",
            QuestionType::Essay          => "essay",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Strict parsing: anything outside the known spellings is rejected
/// instead of silently falling back to multiple-choice.
impl FromStr for QuestionType {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pg" | "pilihan_ganda" | "multiple_choice" => Ok(QuestionType::MultipleChoice),
            "essay" | "esai" | "uraian"                => Ok(QuestionType::Essay),
            other => Err(QuizError::InvalidConfiguration(format!(
                "unknown question type '{other}' (expected 'pg' or 'essay')"
            ))),
        }
    }
}

// ─── Quality ──────────────────────────────────────────────────────────────────
/// Marks essay questions whose source sentence passed the eligibility
/// filter (long enough, no dangling references).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Validated,
}

// ─── Records ──────────────────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultipleChoice {
    pub question: String,
    /// 2–4 distinct strings, one of which is `answer`
    pub options:  Vec<String>,
    pub answer:   String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub edited:   bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Essay {
    pub question: String,
    pub answer:   String,
    /// The sentence the question was generated from
    pub materi:   String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality:  Option<Quality>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub edited:   bool,
}

/// A generated question. The `type` field carries the variant tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Question {
    #[serde(rename = "pg")]
    MultipleChoice(MultipleChoice),
    #[serde(rename = "essay")]
    Essay(Essay),
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Question {
    pub fn multiple_choice(
        question: impl Into<String>,
        options:  Vec<String>,
        answer:   impl Into<String>,
    ) -> Self {
        Question::MultipleChoice(MultipleChoice {
            question: question.into(),
            options,
            answer:   answer.into(),
            edited:   false,
        })
    }

    pub fn essay(
        question: impl Into<String>,
        answer:   impl Into<String>,
        materi:   impl Into<String>,
        quality:  Option<Quality>,
    ) -> Self {
        Question::Essay(Essay {
            question: question.into(),
            answer:   answer.into(),
            materi:   materi.into(),
            quality,
            edited:   false,
        })
    }

    pub fn kind(&self) -> QuestionType {
        match self {
            Question::MultipleChoice(_) => QuestionType::MultipleChoice,
            Question::Essay(_)          => QuestionType::Essay,
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            Question::MultipleChoice(q) => &q.question,
            Question::Essay(q)          => &q.question,
        }
    }

    pub fn answer(&self) -> &str {
        match self {
            Question::MultipleChoice(q) => &q.answer,
            Question::Essay(q)          => &q.answer,
        }
    }

    /// Options in display order; `None` for essay questions
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Question::MultipleChoice(q) => Some(&q.options),
            Question::Essay(_)          => None,
        }
    }

    pub fn is_edited(&self) -> bool {
        match self {
            Question::MultipleChoice(q) => q.edited,
            Question::Essay(q)          => q.edited,
        }
    }

    /// Replace the answer with a user-supplied one and flag the record.
    /// The options of a multiple-choice question are left untouched.
    pub fn override_answer(&mut self, answer: impl Into<String>) {
        match self {
            Question::MultipleChoice(q) => {
                q.answer = answer.into();
                q.edited = true;
            }
            Question::Essay(q) => {
                q.answer = answer.into();
                q.edited = true;
            }
        }
    }
}
