// ============================================================
// Layer 2 — Quiz Session
// ============================================================
// The result of one generation run, owned by whoever asked for it.
// Nothing here is global: a web handler, a CLI invocation or a test
// each holds its own QuizSession and passes it along explicitly.
//
// Answer edits go through update_answer(), which validates the index
// and the new text, then flags the record as edited. Editing a
// multiple-choice answer to text outside its options is allowed; the
// person reviewing the quiz has the final word.

use serde::{Deserialize, Serialize};

use crate::domain::error::QuizError;
use crate::domain::question::{Question, QuestionType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSession {
    pub question_type: QuestionType,
    pub questions:     Vec<Question>,
}

impl QuizSession {
    pub fn new(question_type: QuestionType, questions: Vec<Question>) -> Self {
        Self { question_type, questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Override the answer of question `index` in place.
    pub fn update_answer(&mut self, index: usize, new_answer: &str) -> Result<(), QuizError> {
        let answer = checked_answer(new_answer)?;
        let len    = self.questions.len();
        let question = self
            .questions
            .get_mut(index)
            .ok_or(QuizError::IndexOutOfRange { index, len })?;

        question.override_answer(answer);
        tracing::info!("Answer of question {} updated", index);
        Ok(())
    }
}

/// Functional form: returns the updated list, leaving the input as is.
pub fn update_answer(
    questions:  &[Question],
    index:      usize,
    new_answer: &str,
) -> Result<Vec<Question>, QuizError> {
    let answer = checked_answer(new_answer)?;
    if index >= questions.len() {
        return Err(QuizError::IndexOutOfRange { index, len: questions.len() });
    }

    let mut updated = questions.to_vec();
    updated[index].override_answer(answer);
    Ok(updated)
}

fn checked_answer(new_answer: &str) -> Result<&str, QuizError> {
    let trimmed = new_answer.trim();
    if trimmed.is_empty() {
        return Err(QuizError::EmptyAnswer);
    }
    Ok(trimmed)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Question> {
        vec![
            Question::multiple_choice(
                "Pernyataan: \"Banjir disebabkan hujan.\"",
                vec!["Sebab".into(), "Fungsi".into(), "Akibat".into()],
                "Sebab",
            ),
            Question::essay("Jelaskan banjir!", "Karena hujan.", "Banjir disebabkan hujan.", None),
        ]
    }

    #[test]
    fn test_update_sets_answer_and_flag() {
        let out = update_answer(&sample(), 1, "  Karena curah hujan tinggi. ").unwrap();
        assert_eq!(out[1].answer(), "Karena curah hujan tinggi.");
        assert!(out[1].is_edited());
        assert!(!out[0].is_edited());
    }

    #[test]
    fn test_update_leaves_input_untouched() {
        let original = sample();
        let _ = update_answer(&original, 0, "Fungsi").unwrap();
        assert_eq!(original[0].answer(), "Sebab");
        assert!(!original[0].is_edited());
    }

    #[test]
    fn test_answer_outside_options_is_allowed() {
        let out = update_answer(&sample(), 0, "Proses").unwrap();
        assert_eq!(out[0].answer(), "Proses");
        assert_eq!(out[0].options().unwrap().len(), 3);
    }

    #[test]
    fn test_out_of_range_index() {
        assert_eq!(
            update_answer(&sample(), 2, "x").unwrap_err(),
            QuizError::IndexOutOfRange { index: 2, len: 2 }
        );
        assert!(matches!(
            update_answer(&[], 0, "x"),
            Err(QuizError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_blank_answer_rejected() {
        assert_eq!(update_answer(&sample(), 0, "   ").unwrap_err(), QuizError::EmptyAnswer);
    }

    #[test]
    fn test_session_update_in_place() {
        let mut session = QuizSession::new(QuestionType::MultipleChoice, sample());
        session.update_answer(0, "Akibat").unwrap();
        assert_eq!(session.questions[0].answer(), "Akibat");
        assert!(session.questions[0].is_edited());
        assert!(session.update_answer(5, "Akibat").is_err());
    }

    #[test]
    fn test_session_json_shape() {
        let mut session = QuizSession::new(QuestionType::Essay, sample());
        session.update_answer(1, "Baru").unwrap();
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["question_type"], "essay");
        assert_eq!(json["questions"][0]["type"], "pg");
        assert!(json["questions"][0].get("edited").is_none());
        assert_eq!(json["questions"][1]["edited"], true);

        let back: QuizSession = serde_json::from_value(json).unwrap();
        assert_eq!(back, session);
    }
}
