// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums and traits describing what a quiz IS:
// the source document, the question records handed back to the
// caller, the error taxonomy, and the seams other layers plug into.
//
// Rules for this layer:
//   - NO file I/O
//   - NO randomness
//   - NO knowledge of .docx / .pdf formats
//
// Everything here is cheap to construct in a unit test.

// A loaded document (source name + extracted text)
pub mod document;

// Multiple-choice / essay question records
pub mod question;

// Errors that end a generation call
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
