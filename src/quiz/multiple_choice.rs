// ============================================================
// Layer 5 — Concept-based Multiple-Choice Synthesizer
// ============================================================
// Two passes over the ranked sentences, shuffled once up front so
// repeated runs on the same material give different quizzes:
//
//   Pass 1  category questions
//           sentence has a category trigger → answer is the category,
//           distractors are 3 other categories
//
//   Pass 2  keyword questions (only when pass 1 fell short)
//           sentences without a category → answer is the fallback
//           keyword, distractors are 3 category labels
//
// In both passes the option list holds the answer exactly once and
// no duplicate strings: pass 2 drops any category label that equals
// the keyword before sampling distractors.

use rand::{seq::SliceRandom, RngCore};

use crate::domain::question::Question;
use crate::domain::traits::QuestionSynthesizer;
use crate::quiz::concept::{detect_category, extract_keyword, ConceptCategory};

const DISTRACTORS: usize = 3;

pub struct ConceptMultipleChoice;

impl ConceptMultipleChoice {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConceptMultipleChoice {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionSynthesizer for ConceptMultipleChoice {
    fn synthesize(
        &self,
        sentences: &[String],
        target:    usize,
        rng:       &mut dyn RngCore,
    ) -> Vec<Question> {
        let mut questions = Vec::new();
        if target == 0 || sentences.is_empty() {
            return questions;
        }

        let mut order: Vec<&String> = sentences.iter().collect();
        order.shuffle(&mut *rng);

        // ── Pass 1: category questions ───────────────────────────────────────
        let mut leftover: Vec<&String> = Vec::new();
        for sentence in order {
            match detect_category(sentence) {
                Some(category) => {
                    tracing::debug!("Category '{}' in: {}", category, sentence);
                    questions.push(category_question(sentence, category, rng));
                    if questions.len() >= target {
                        return questions;
                    }
                }
                None => leftover.push(sentence),
            }
        }

        let from_categories = questions.len();

        // ── Pass 2: keyword questions ────────────────────────────────────────
        for sentence in leftover {
            if let Some(keyword) = extract_keyword(sentence) {
                tracing::debug!("Keyword '{}' in: {}", keyword, sentence);
                questions.push(keyword_question(sentence, keyword, rng));
                if questions.len() >= target {
                    break;
                }
            }
        }

        tracing::debug!(
            "Multiple-choice: {} from categories, {} from keywords",
            from_categories,
            questions.len() - from_categories,
        );
        questions
    }
}

fn category_question(sentence: &str, category: ConceptCategory, rng: &mut dyn RngCore) -> Question {
    let others: Vec<ConceptCategory> = category.others().collect();

    let mut options: Vec<String> = others
        .choose_multiple(&mut *rng, DISTRACTORS)
        .map(|c| c.label().to_string())
        .collect();
    options.push(category.label().to_string());
    options.shuffle(&mut *rng);

    Question::multiple_choice(
        format!("Pernyataan: \"{sentence}\"\nPernyataan tersebut merujuk pada konsep apa?"),
        options,
        category.label(),
    )
}

fn keyword_question(sentence: &str, keyword: String, rng: &mut dyn RngCore) -> Question {
    let labels: Vec<&str> = ConceptCategory::ALL
        .iter()
        .map(|c| c.label())
        .filter(|label| !label.eq_ignore_ascii_case(&keyword))
        .collect();

    let mut options: Vec<String> = labels
        .choose_multiple(&mut *rng, DISTRACTORS)
        .map(|label| label.to_string())
        .collect();
    options.push(keyword.clone());
    options.shuffle(&mut *rng);

    Question::multiple_choice(
        format!("Pernyataan: \"{sentence}\"\nMakna yang sesuai dengan pernyataan tersebut adalah ..."),
        options,
        keyword,
    )
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    fn sentences(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn assert_well_formed(q: &Question) {
        let options = q.options().expect("multiple-choice has options");
        assert!(!q.answer().is_empty());
        assert_eq!(options.iter().filter(|o| *o == q.answer()).count(), 1);
        let distinct: HashSet<&String> = options.iter().collect();
        assert_eq!(distinct.len(), options.len());
        assert!((2..=4).contains(&options.len()));
    }

    #[test]
    fn test_category_pass_covers_both_sentences() {
        let input = sentences(&[
            "Banjir disebabkan oleh curah hujan yang sangat tinggi di wilayah hulu sungai.",
            "Fungsi drainase adalah mengalirkan air hujan menuju saluran pembuangan kota.",
        ]);
        let mut rng = StdRng::seed_from_u64(7);
        let out = ConceptMultipleChoice::new().synthesize(&input, 2, &mut rng);

        assert_eq!(out.len(), 2);
        let answers: HashSet<&str> = out.iter().map(|q| q.answer()).collect();
        assert!(answers.contains("Sebab"));
        assert!(answers.contains("Fungsi"));
        for q in &out {
            assert_well_formed(q);
            assert_eq!(q.options().unwrap().len(), 4);
            assert!(q.prompt().contains("merujuk pada konsep apa"));
        }
    }

    #[test]
    fn test_stops_at_target() {
        let input = sentences(&[
            "Banjir disebabkan oleh hujan deras.",
            "Fungsi hutan adalah menyerap air.",
            "Dampak erosi sangat merugikan petani.",
        ]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(ConceptMultipleChoice::new().synthesize(&input, 1, &mut rng).len(), 1);
    }

    #[test]
    fn test_keyword_pass_fills_shortfall() {
        let input = sentences(&[
            "Banjir disebabkan oleh hujan deras.",
            "Gunung berapi meletus kemarin sore.",
        ]);
        let mut rng = StdRng::seed_from_u64(3);
        let out = ConceptMultipleChoice::new().synthesize(&input, 5, &mut rng);

        assert_eq!(out.len(), 2);
        let keyword_q = out.iter().find(|q| q.answer() == "gunung").expect("keyword question");
        assert!(keyword_q.prompt().contains("Makna yang sesuai"));
        for q in &out {
            assert_well_formed(q);
        }
    }

    #[test]
    fn test_keyword_equal_to_label_is_not_duplicated() {
        // A keyword that spells a category label must not be offered twice
        let q = keyword_question("Sebuah kalimat.", "akibat".to_string(), &mut StdRng::seed_from_u64(9));
        assert_well_formed(&q);
        let lower: Vec<String> = q.options().unwrap().iter().map(|o| o.to_lowercase()).collect();
        assert_eq!(lower.iter().filter(|o| *o == "akibat").count(), 1);
    }

    #[test]
    fn test_sentences_without_any_concept_are_skipped() {
        let input = sentences(&["Air itu sejuk.", "Ya."]);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(ConceptMultipleChoice::new().synthesize(&input, 3, &mut rng).is_empty());
    }

    #[test]
    fn test_empty_input_and_zero_target() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(ConceptMultipleChoice::new().synthesize(&[], 5, &mut rng).is_empty());
        let input = sentences(&["Banjir disebabkan oleh hujan deras."]);
        assert!(ConceptMultipleChoice::new().synthesize(&input, 0, &mut rng).is_empty());
    }

    #[test]
    fn test_same_seed_same_quiz() {
        let input = sentences(&[
            "Banjir disebabkan oleh hujan deras.",
            "Fungsi hutan adalah menyerap air.",
            "Dampak erosi sangat merugikan petani.",
        ]);
        let a = ConceptMultipleChoice::new().synthesize(&input, 3, &mut StdRng::seed_from_u64(42));
        let b = ConceptMultipleChoice::new().synthesize(&input, 3, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
