// ============================================================
// Layer 6 — Session File
// ============================================================
// Persists a QuizSession between CLI invocations so that
// `generate`, `edit`, `export` and `show` can be run one after
// another on the same batch. Pretty-printed JSON, same shape the
// session serialises to anywhere else.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::application::session::QuizSession;

pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn save(&self, session: &QuizSession) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Cannot write session to '{}'", self.path.display()))?;

        tracing::debug!("Saved {} questions to '{}'", session.len(), self.path.display());
        Ok(())
    }

    pub fn load(&self) -> Result<QuizSession> {
        let json = fs::read_to_string(&self.path).with_context(|| {
            format!(
                "Cannot read session '{}'. Have you run 'generate' first?",
                self.path.display()
            )
        })?;

        serde_json::from_str(&json)
            .with_context(|| format!("Session file '{}' is malformed", self.path.display()))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::question::{Question, QuestionType};
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load() {
        let dir  = tempdir().unwrap();
        let file = SessionFile::new(dir.path().join("nested").join("quiz.json"));

        let mut session = QuizSession::new(
            QuestionType::Essay,
            vec![Question::essay("Jelaskan erosi!", "Erosi adalah pengikisan.", "Erosi adalah pengikisan tanah.", None)],
        );
        session.update_answer(0, "Pengikisan tanah oleh air.").unwrap();
        file.save(&session).unwrap();

        assert_eq!(file.load().unwrap(), session);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let err = SessionFile::new(dir.path().join("none.json")).load().unwrap_err();
        assert!(err.to_string().contains("generate"));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(SessionFile::new(&path).load().is_err());
    }
}
