// ============================================================
// Layer 5 — Concept-based Essay Synthesizer
// ============================================================
// Single pass over the ranked sentences, best first (no shuffle):
//
//   sentence
//     │  eligible?   ≥ 10 words, no dangling reference ("ini", "itu",
//     │              "tersebut", ...) that only makes sense in context
//     ▼
//   keyword concept  (skip if none, or already used in this batch)
//     │
//     ▼
//   rhetorical kind by keyword:
//     adalah / merupakan → Definitional   "Jelaskan pengertian <c> ..."
//     fungsi             → Functional     "Jelaskan fungsi <c> ..."
//     proses             → Procedural     "Uraikan proses <c> ..."
//     otherwise          → Explanatory    "Jelaskan mengapa <c> penting ..."
//     │
//     ▼
//   model answer built from the sentence itself
//
// Every record produced here is tagged Quality::Validated.

use std::collections::HashSet;

use rand::RngCore;

use crate::domain::question::{Quality, Question};
use crate::domain::traits::QuestionSynthesizer;
use crate::quiz::concept::extract_keyword;

const MIN_ESSAY_WORDS: usize = 10;

/// Words that point outside the sentence; out of context the
/// question would be unanswerable.
const AMBIGUOUS_WORDS: &[&str] = &["ini", "itu", "tersebut", "tadi", "berikut", "sebelumnya"];
const AMBIGUOUS_PHRASES: &[&str] = &["di atas", "di bawah ini", "hal ini"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EssayKind {
    Definitional,
    Functional,
    Procedural,
    Explanatory,
}

impl EssayKind {
    pub fn classify(sentence: &str) -> Self {
        let words: Vec<String> = words_of(sentence);
        let has = |w: &str| words.iter().any(|x| x == w);

        if has("adalah") || has("merupakan") {
            EssayKind::Definitional
        } else if words.iter().any(|w| w.contains("fungsi")) {
            EssayKind::Functional
        } else if words.iter().any(|w| w.contains("proses")) {
            EssayKind::Procedural
        } else {
            EssayKind::Explanatory
        }
    }

    fn prompt(self, concept: &str) -> String {
        match self {
            EssayKind::Definitional => format!("Jelaskan pengertian {concept} berdasarkan materi di atas!"),
            EssayKind::Functional   => format!("Jelaskan fungsi {concept} berdasarkan materi di atas!"),
            EssayKind::Procedural   => format!("Uraikan proses {concept} berdasarkan materi di atas!"),
            EssayKind::Explanatory  => format!("Jelaskan mengapa {concept} penting berdasarkan materi di atas!"),
        }
    }

    fn answer(self, sentence: &str, concept: &str) -> String {
        let body = sentence.trim().trim_end_matches(['.', '!', '?']);
        match self {
            EssayKind::Explanatory => format!(
                "Karena {}. Hal inilah yang menjadikan {concept} penting untuk dipahami.",
                body.to_lowercase()
            ),
            _ => format!(
                "{}. Oleh karena itu, {concept} merupakan bagian penting dari materi ini.",
                capitalize_first(body)
            ),
        }
    }
}

/// True when the sentence can stand on its own as essay material.
pub fn is_eligible(sentence: &str) -> bool {
    if sentence.split_whitespace().count() < MIN_ESSAY_WORDS {
        return false;
    }
    let words  = words_of(sentence);
    let padded = format!(" {} ", words.join(" "));

    !words.iter().any(|w| AMBIGUOUS_WORDS.contains(&w.as_str()))
        && !AMBIGUOUS_PHRASES.iter().any(|p| padded.contains(&format!(" {p} ")))
}

pub struct ConceptEssay;

impl ConceptEssay {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConceptEssay {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionSynthesizer for ConceptEssay {
    fn synthesize(
        &self,
        sentences: &[String],
        target:    usize,
        _rng:      &mut dyn RngCore,
    ) -> Vec<Question> {
        let mut questions = Vec::new();
        let mut used: HashSet<String> = HashSet::new();

        for sentence in sentences {
            if questions.len() >= target {
                break;
            }
            if !is_eligible(sentence) {
                tracing::debug!("Not eligible for essay: {}", sentence);
                continue;
            }
            let Some(concept) = extract_keyword(sentence) else {
                continue;
            };
            if !used.insert(concept.clone()) {
                tracing::debug!("Concept '{}' already used", concept);
                continue;
            }

            let kind = EssayKind::classify(sentence);
            questions.push(Question::essay(
                kind.prompt(&concept),
                kind.answer(sentence, &concept),
                sentence.as_str(),
                Some(Quality::Validated),
            ));
        }

        questions
    }
}

/// Lowercase words with surrounding punctuation removed
fn words_of(sentence: &str) -> Vec<String> {
    sentence
        .to_lowercase()
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
        .filter(|w| !w.is_empty())
        .collect()
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None        => String::new(),
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::question::Question;
    use rand::{rngs::StdRng, SeedableRng};

    const CAUSE: &str = "Banjir disebabkan oleh curah hujan yang sangat tinggi di wilayah hulu sungai.";
    const FUNCTION: &str = "Fungsi drainase adalah mengalirkan air hujan menuju saluran pembuangan kota.";

    fn run(input: &[&str], target: usize) -> Vec<Question> {
        let sentences: Vec<String> = input.iter().map(|s| s.to_string()).collect();
        ConceptEssay::new().synthesize(&sentences, target, &mut StdRng::seed_from_u64(0))
    }

    #[test]
    fn test_two_sentences_two_validated_questions() {
        let out = run(&[CAUSE, FUNCTION], 2);
        assert_eq!(out.len(), 2);
        for q in &out {
            let Question::Essay(e) = q else { panic!("expected essay") };
            assert!(!e.answer.is_empty());
            assert_eq!(e.quality, Some(Quality::Validated));
        }
        assert_ne!(out[0].prompt(), out[1].prompt());
    }

    #[test]
    fn test_keeps_ranked_order() {
        let out = run(&[FUNCTION, CAUSE], 2);
        let Question::Essay(first) = &out[0] else { panic!() };
        assert_eq!(first.materi, FUNCTION);
    }

    #[test]
    fn test_short_sentence_rejected() {
        assert!(!is_eligible("Banjir disebabkan hujan."));
        assert!(run(&["Banjir disebabkan hujan."], 3).is_empty());
    }

    #[test]
    fn test_ambiguous_reference_rejected() {
        assert!(!is_eligible("Hal tersebut membuat sungai meluap dan merendam rumah warga di sekitarnya."));
        assert!(!is_eligible("Seperti dijelaskan di atas, sungai meluap dan merendam rumah warga sekitar."));
        assert!(is_eligible(CAUSE));
    }

    #[test]
    fn test_concept_used_once_per_batch() {
        let again = "Banjir juga dapat merusak jalan raya serta jembatan yang menghubungkan antar desa.";
        let out = run(&[CAUSE, again], 5);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_respects_target() {
        assert_eq!(run(&[CAUSE, FUNCTION], 1).len(), 1);
        assert!(run(&[CAUSE, FUNCTION], 0).is_empty());
        assert!(run(&[], 3).is_empty());
    }

    #[test]
    fn test_classification() {
        assert_eq!(EssayKind::classify(FUNCTION), EssayKind::Definitional);
        assert_eq!(EssayKind::classify("Drainase berfungsi mengalirkan air."), EssayKind::Functional);
        assert_eq!(EssayKind::classify("Fotosintesis berlangsung melalui proses panjang."), EssayKind::Procedural);
        assert_eq!(EssayKind::classify(CAUSE), EssayKind::Explanatory);
    }

    #[test]
    fn test_explanatory_answer_template() {
        let answer = EssayKind::Explanatory.answer(CAUSE, "banjir");
        assert!(answer.starts_with("Karena banjir disebabkan"));
        assert!(answer.ends_with("banjir penting untuk dipahami."));
    }

    #[test]
    fn test_other_answer_template_capitalises() {
        let answer = EssayKind::Definitional.answer("drainase adalah saluran air.", "drainase");
        assert!(answer.starts_with("Drainase adalah saluran air. Oleh karena itu"));
    }

    #[test]
    fn test_prompt_mentions_concept() {
        let out = run(&[CAUSE], 1);
        assert_eq!(out[0].prompt(), "Jelaskan mengapa banjir penting berdasarkan materi di atas!");
    }
}
