// ============================================================
// Layer 3 — Document Domain Type
// ============================================================
// The raw material a quiz is generated from: where it came from
// and the text that was extracted from it. No structure is assumed
// beyond "can be split into sentences".

use serde::{Deserialize, Serialize};

/// A document whose text has already been extracted from its
/// original format (.docx, .pdf, or pasted text).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// The filename the text came from, kept for traceability
    pub source: String,

    /// The full extracted text, before cleaning or segmentation
    pub text: String,
}

impl Document {
    /// Create a new Document from a source name and its text.
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text:   text.into(),
        }
    }

    /// True when extraction produced nothing but whitespace.
    /// Such a document yields zero questions, never an error.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Number of whitespace-separated words in the document
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}
