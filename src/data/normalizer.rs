// ============================================================
// Layer 4 — Token Normalizer
// ============================================================
// Turns one sentence into the tokens used for term weighting:
//
//   "Banjir disebabkan oleh curah hujan yang tinggi."
//       │  tokenize (profile)
//       ▼
//   banjir disebabkan oleh curah hujan yang tinggi
//       │  drop stopwords and words of ≤ 3 letters
//       ▼
//   banjir disebabkan curah hujan tinggi
//       │  stem (profile)
//       ▼
//   banjir sebab curah hujan tinggi
//
// The normalizer is generic over the LanguageProfile so the ranker
// never sees locale details.

use std::collections::BTreeSet;

use crate::domain::traits::LanguageProfile;

/// Words this short carry no topic information
const MIN_TOKEN_LEN: usize = 4;

/// Result of normalising one piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText {
    /// Stemmed tokens in their original order (duplicates kept)
    pub tokens: Vec<String>,
    /// The distinct stemmed tokens
    pub vocabulary: BTreeSet<String>,
}

impl NormalizedText {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens joined by single spaces
    pub fn joined(&self) -> String {
        self.tokens.join(" ")
    }
}

pub struct Normalizer<P: LanguageProfile> {
    profile: P,
}

impl<P: LanguageProfile> Normalizer<P> {
    pub fn new(profile: P) -> Self {
        Self { profile }
    }

    pub fn normalize(&self, text: &str) -> NormalizedText {
        let tokens: Vec<String> = self
            .profile
            .tokenize(text)
            .into_iter()
            .filter(|w| w.chars().count() >= MIN_TOKEN_LEN && !self.profile.is_stopword(w))
            .map(|w| self.profile.stem(&w))
            .collect();

        let vocabulary = tokens.iter().cloned().collect();
        NormalizedText { tokens, vocabulary }
    }

    /// Shorthand for `normalize(text).joined()`
    pub fn normalize_joined(&self, text: &str) -> String {
        self.normalize(text).joined()
    }
}
