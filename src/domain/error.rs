// ============================================================
// Layer 3 — Quiz Errors
// ============================================================
// Only conditions that make a call meaningless are errors.
// "No usable sentences" and "fewer questions than requested" are
// normal outcomes and are reported as short (or empty) results.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// Rejected before any text is analysed: zero question count,
    /// unknown question type or unknown strategy name.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An answer edit pointed past the end of the question list.
    #[error("question index {index} out of range (have {len} questions)")]
    IndexOutOfRange { index: usize, len: usize },

    /// An answer edit tried to store an empty answer.
    #[error("answer must not be empty")]
    EmptyAnswer,
}
