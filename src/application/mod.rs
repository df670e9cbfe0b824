// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Workflow coordination only. This layer tells the data and quiz
// layers what to do, in which order, and with which settings:
//
//   generate_use_case.rs — text → ranked sentences → questions
//   session.rs           — caller-owned result batch + answer edits
//
// No printing here (Layer 1) and no file formats (Layers 4 and 6).

/// The generation workflow
pub mod generate_use_case;

/// Per-request quiz result and answer editing
pub mod session;
