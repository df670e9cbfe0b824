// ============================================================
// Layer 5 — Legacy Synthesizer
// ============================================================
// The single-pass generator, selectable as a strategy for
// deployments that do not want the concept rules.
//
// Sentences are shuffled, then each one becomes:
//
//   multiple-choice  a random word of more than 4 letters is blanked
//                    out ("_____") and offered with up to 3 other
//                    distinct long words from the same sentence;
//                    sentences with fewer than 2 such words are skipped
//   essay            "Jelaskan maksud dari pernyataan berikut: <s>"
//                    with the sentence itself as the answer and no
//                    quality tag (nothing was filtered)
//
// The blanked word is always among the options: distractors are
// drawn only from words different from it.

use rand::{seq::SliceRandom, RngCore};

use crate::domain::question::{Question, QuestionType};
use crate::domain::traits::QuestionSynthesizer;

const MIN_WORD_LEN: usize = 4;
const DISTRACTORS:  usize = 3;
const BLANK:        &str  = "_____";

pub struct LegacySynthesizer {
    question_type: QuestionType,
}

impl LegacySynthesizer {
    pub fn new(question_type: QuestionType) -> Self {
        Self { question_type }
    }
}

impl QuestionSynthesizer for LegacySynthesizer {
    fn synthesize(
        &self,
        sentences: &[String],
        target:    usize,
        rng:       &mut dyn RngCore,
    ) -> Vec<Question> {
        let mut questions = Vec::new();
        if target == 0 {
            return questions;
        }

        let mut order: Vec<&String> = sentences.iter().collect();
        order.shuffle(&mut *rng);

        for sentence in order {
            let words = long_words(sentence);
            let needed = match self.question_type {
                QuestionType::MultipleChoice => 2,
                QuestionType::Essay          => 1,
            };
            if words.len() < needed {
                continue;
            }

            let question = match self.question_type {
                QuestionType::MultipleChoice => masked_question(sentence, &words, rng),
                QuestionType::Essay => Question::essay(
                    format!("Jelaskan maksud dari pernyataan berikut: {sentence}"),
                    sentence.as_str(),
                    sentence.as_str(),
                    None,
                ),
            };
            questions.push(question);

            if questions.len() >= target {
                break;
            }
        }

        questions
    }
}

/// Distinct words longer than MIN_WORD_LEN letters, punctuation trimmed,
/// in sentence order.
fn long_words(sentence: &str) -> Vec<&str> {
    let mut words: Vec<&str> = Vec::new();
    for w in sentence.split_whitespace() {
        let w = w.trim_matches(|c: char| !c.is_alphanumeric());
        if w.chars().count() > MIN_WORD_LEN && !words.contains(&w) {
            words.push(w);
        }
    }
    words
}

fn masked_question(sentence: &str, words: &[&str], rng: &mut dyn RngCore) -> Question {
    // `words` has at least two entries, checked by the caller
    let answer = words.choose(&mut *rng).copied().unwrap_or_default();

    let others: Vec<&str> = words.iter().copied().filter(|w| *w != answer).collect();
    let mut options: Vec<String> = others
        .choose_multiple(&mut *rng, DISTRACTORS)
        .map(|w| w.to_string())
        .collect();
    options.push(answer.to_string());
    options.shuffle(&mut *rng);

    Question::multiple_choice(sentence.replace(answer, BLANK), options, answer)
}
