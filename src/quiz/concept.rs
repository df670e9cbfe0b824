// ============================================================
// Layer 5 — Concept Detector
// ============================================================
// Finds what a sentence is "about". Two strategies:
//
// 1. Category detection (multiple-choice, first pass)
//    The lowercased sentence is scanned for trigger substrings of a
//    fixed list of semantic categories. Categories are tried in
//    declaration order and the first one with any trigger present
//    wins, so "disebabkan ... fungsi" is a Cause sentence.
//
// 2. Keyword fallback (essay, and multiple-choice second pass)
//    The first word longer than 5 letters that is not a generic
//    connective. Short words are mostly function words in
//    Indonesian; long ones are mostly content words.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConceptCategory {
    Cause,
    Function,
    Effect,
    Process,
    Definition,
}

impl ConceptCategory {
    /// Declaration order = detection priority
    pub const ALL: [ConceptCategory; 5] = [
        ConceptCategory::Cause,
        ConceptCategory::Function,
        ConceptCategory::Effect,
        ConceptCategory::Process,
        ConceptCategory::Definition,
    ];

    /// Label shown to students, used as option text and answer
    pub fn label(self) -> &'static str {
        match self {
            ConceptCategory::Cause      => "Sebab",
            ConceptCategory::Function   => "Fungsi",
            ConceptCategory::Effect     => "Akibat",
            ConceptCategory::Process    => "Proses",
            ConceptCategory::Definition => "Definisi",
        }
    }

    pub fn triggers(self) -> &'static [&'static str] {
        match self {
            ConceptCategory::Cause      => &["disebabkan", "penyebab", "karena", "sebab", "faktor"],
            ConceptCategory::Function   => &["fungsi", "berguna", "kegunaan", "bertujuan", "berperan"],
            ConceptCategory::Effect     => &["dampak", "akibat", "pengaruh", "efek"],
            ConceptCategory::Process    => &["proses", "tahap", "langkah", "prosedur"],
            ConceptCategory::Definition => &["adalah", "merupakan", "yaitu", "disebut", "didefinisikan"],
        }
    }

    /// Every other category, in declaration order
    pub fn others(self) -> impl Iterator<Item = ConceptCategory> {
        Self::ALL.into_iter().filter(move |c| *c != self)
    }
}

impl fmt::Display for ConceptCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rule-based detection: the first category with a trigger in `sentence`.
pub fn detect_category(sentence: &str) -> Option<ConceptCategory> {
    let lower = sentence.to_lowercase();
    ConceptCategory::ALL
        .into_iter()
        .find(|c| c.triggers().iter().any(|t| lower.contains(t)))
}

/// Longer than this many letters to count as a keyword
const MIN_KEYWORD_LEN: usize = 5;

/// Long words that say nothing about the topic
const GENERIC_WORDS: &[&str] = &[
    "adalah", "merupakan", "terhadap", "sebagai", "tersebut", "dengan",
    "kepada", "sehingga", "terdapat", "memiliki", "menjadi", "melalui",
    "berbagai", "beberapa", "seperti", "secara", "tentang", "bagaimana",
    "misalnya", "sebagainya", "digunakan", "dilakukan", "biasanya",
];

/// Keyword fallback: first sufficiently long, non-generic word,
/// lowercased and stripped of surrounding punctuation.
pub fn extract_keyword(sentence: &str) -> Option<String> {
    sentence
        .to_lowercase()
        .replace('.', "")
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .find(|w| w.chars().count() > MIN_KEYWORD_LEN && !GENERIC_WORDS.contains(w))
        .map(str::to_string)
}
