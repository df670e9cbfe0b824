// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Adapters for everything outside the pure generation pipeline:
//
//   material_store.rs — Submitted material, one JSON record per
//                       upload, identified by a UUID.
//
//   session_file.rs   — A QuizSession saved between CLI runs so
//                       answers can be edited and exported later.
//
//   pdf_export.rs     — Printable A4 rendering of a question batch
//                       (lopdf, Helvetica, paginated).
//
// Each one implements (or serves) a trait from domain::traits, so
// a database store or a different document format can replace it
// without the application layer noticing.

/// JSON-on-disk material storage
pub mod material_store;

/// Session persistence
pub mod session_file;

/// PDF rendering of question batches
pub mod pdf_export;
