// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from an uploaded file to a ranked list of sentences.
//
//   .docx / .pdf
//       │
//       ▼
//   FileLoader          → extracts raw text (docx-rs / lopdf)
//       │
//       ▼
//   Preprocessor        → cleans whitespace, control chars, hyphenation
//       │
//       ▼
//   SentenceSegmenter   → splits into sentences (abbreviation-aware)
//       │
//       ▼
//   Normalizer          → tokens: lowercase, no stopwords, stemmed
//       │                 (LanguageProfile = Indonesian)
//       ▼
//   SentenceRanker      → TF-IDF salience, top N
//
// Each module does one step and is tested on its own.

/// Reads .docx and .pdf files
pub mod loader;

/// Cleans and normalises raw extracted text
pub mod preprocessor;

/// Indonesian stopwords and stemmer
pub mod locale;

/// Token normalisation over a LanguageProfile
pub mod normalizer;

/// Sentence boundary detection
pub mod segmenter;

/// TF-IDF sentence ranking
pub mod ranker;
