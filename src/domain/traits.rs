// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The seams of the system. The application layer only talks to
// these traits, so each side can be swapped on its own:
//
//   DocumentSource      → FileLoader (.docx / .pdf), or pasted text
//   LanguageProfile     → Indonesian (stopwords + stemmer)
//   QuestionSynthesizer → ConceptMultipleChoice, ConceptEssay, Legacy
//   MaterialStore       → FileMaterialStore (JSON records on disk)
//   QuizRenderer        → PdfExporter
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use rand::RngCore;

use crate::domain::document::Document;
use crate::domain::question::{Question, QuestionType};

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// Anything that can produce the text of one uploaded document.
/// Unsupported or empty input yields a Document with empty text,
/// not an error; only real I/O failures are errors.
pub trait DocumentSource {
    fn load(&self) -> Result<Document>;
}

// ─── LanguageProfile ──────────────────────────────────────────────────────────
/// Locale-specific word handling used by the normaliser.
/// A new language plugs in here without touching the ranker.
pub trait LanguageProfile {
    /// Lowercase, drop everything that is not a letter or whitespace,
    /// and split into word tokens.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Reduce a lowercase word to its approximate root form.
    fn stem(&self, word: &str) -> String;

    fn is_stopword(&self, word: &str) -> bool;
}

// ─── QuestionSynthesizer ──────────────────────────────────────────────────────
/// Turns ranked sentences into at most `target` questions.
///
/// Contract shared by every implementation:
///   - never returns more than `target` records
///   - empty input → empty output, never a panic
///   - work is bounded by the number of input sentences
pub trait QuestionSynthesizer {
    fn synthesize(
        &self,
        sentences: &[String],
        target:    usize,
        rng:       &mut dyn RngCore,
    ) -> Vec<Question>;
}

// ─── MaterialStore ────────────────────────────────────────────────────────────
/// Persists submitted material and hands back an identifier.
pub trait MaterialStore {
    fn store(&self, text: &str) -> Result<String>;
}

// ─── QuizRenderer ─────────────────────────────────────────────────────────────
/// Renders a question batch into a printable document.
pub trait QuizRenderer {
    fn render(&self, questions: &[Question], question_type: QuestionType) -> Result<Vec<u8>>;
}
