// ============================================================
// Layer 5 — Quiz Synthesis Layer
// ============================================================
// Everything that turns ranked sentences into questions.
//
//   concept.rs          — category triggers + keyword fallback
//   multiple_choice.rs  — two-pass concept-based multiple-choice
//   essay.rs            — filtered, concept-deduplicated essays
//   legacy.rs           — single-pass word-masking / raw-sentence generator
//
// All generators implement domain::traits::QuestionSynthesizer and
// take their randomness as an argument, so a seeded StdRng gives a
// reproducible quiz and nothing here holds state between calls.

/// Category detection and keyword extraction
pub mod concept;

/// Concept-based multiple-choice questions
pub mod multiple_choice;

/// Concept-based essay questions
pub mod essay;

/// Single-pass legacy generator
pub mod legacy;

use std::{fmt, str::FromStr};

use crate::domain::error::QuizError;
use crate::domain::question::QuestionType;
use crate::domain::traits::QuestionSynthesizer;

use essay::ConceptEssay;
use legacy::LegacySynthesizer;
use multiple_choice::ConceptMultipleChoice;

/// Which family of generators to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuestionStrategy {
    Legacy,
    #[default]
    ConceptBased,
}

impl QuestionStrategy {
    /// The generator for this strategy and question type
    pub fn synthesizer(self, question_type: QuestionType) -> Box<dyn QuestionSynthesizer> {
        match (self, question_type) {
            (QuestionStrategy::Legacy, qt) => Box::new(LegacySynthesizer::new(qt)),
            (QuestionStrategy::ConceptBased, QuestionType::MultipleChoice) => {
                Box::new(ConceptMultipleChoice::new())
            }
            (QuestionStrategy::ConceptBased, QuestionType::Essay) => Box::new(ConceptEssay::new()),
        }
    }
}

impl fmt::Display for QuestionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuestionStrategy::Legacy       => "legacy",
            QuestionStrategy::ConceptBased => "concept",
        })
    }
}

impl FromStr for QuestionStrategy {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "legacy"                                => Ok(QuestionStrategy::Legacy),
            "concept" | "concept-based" | "concept_based" => Ok(QuestionStrategy::ConceptBased),
            other => Err(QuizError::InvalidConfiguration(format!(
                "unknown strategy '{other}' (expected 'concept' or 'legacy')"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_parse_strategy() {
        assert_eq!("legacy".parse::<QuestionStrategy>().unwrap(), QuestionStrategy::Legacy);
        assert_eq!("Concept-Based".parse::<QuestionStrategy>().unwrap(), QuestionStrategy::ConceptBased);
        assert!("llm".parse::<QuestionStrategy>().is_err());
    }

    #[test]
    fn test_synthesizer_dispatch_produces_matching_type() {
        let sentences = vec![
            "Banjir disebabkan oleh curah hujan yang sangat tinggi di wilayah hulu sungai.".to_string(),
        ];
        for strategy in [QuestionStrategy::Legacy, QuestionStrategy::ConceptBased] {
            for qt in [QuestionType::MultipleChoice, QuestionType::Essay] {
                let out = strategy
                    .synthesizer(qt)
                    .synthesize(&sentences, 1, &mut StdRng::seed_from_u64(1));
                assert_eq!(out.len(), 1, "{strategy} / {qt}");
                assert_eq!(out[0].kind(), qt);
            }
        }
    }
}
