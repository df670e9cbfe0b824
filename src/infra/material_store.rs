// ============================================================
// Layer 6 — Material Store
// ============================================================
// Keeps a copy of every submitted text so a quiz can be traced back
// to the material it came from.
//
// One JSON file per submission:
//
//   materials/
//     material_3f2c9a1e-....json
//     material_b81d07c4-....json
//
//   {
//     "id":         "3f2c9a1e-...",        ← UUID v4, returned to caller
//     "stored_at":  "2026-03-01T08:15:00Z",
//     "char_count": 1834,
//     "text":       "..."
//   }

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use uuid::Uuid;

use crate::domain::traits::MaterialStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    pub id:         String,
    pub stored_at:  DateTime<Utc>,
    pub char_count: usize,
    pub text:       String,
}

/// Stores materials as JSON records under one directory.
pub struct FileMaterialStore {
    dir: PathBuf,
}

impl FileMaterialStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn record_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("material_{id}.json"))
    }

    /// Read back a record written by `store`.
    pub fn load(&self, id: &str) -> Result<MaterialRecord> {
        let path = self.record_path(id);
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read material '{}'", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Material '{}' is not a valid record", path.display()))
    }
}

impl MaterialStore for FileMaterialStore {
    fn store(&self, text: &str) -> Result<String> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create store directory '{}'", self.dir.display()))?;

        let record = MaterialRecord {
            id:         Uuid::new_v4().to_string(),
            stored_at:  Utc::now(),
            char_count: text.chars().count(),
            text:       text.to_string(),
        };

        let path = self.record_path(&record.id);
        fs::write(&path, serde_json::to_string_pretty(&record)?)
            .with_context(|| format!("Cannot write material to '{}'", path.display()))?;

        tracing::debug!("Stored material {} ({} chars)", record.id, record.char_count);
        Ok(record.id)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_store_then_load() {
        let dir   = tempdir().unwrap();
        let store = FileMaterialStore::new(dir.path().join("materials"));

        let id = store.store("Banjir disebabkan hujan.").unwrap();
        assert!(Uuid::parse_str(&id).is_ok());

        let record = store.load(&id).unwrap();
        assert_eq!(record.id, id);
        assert_eq!(record.text, "Banjir disebabkan hujan.");
        assert_eq!(record.char_count, 24);
    }

    #[test]
    fn test_each_store_gets_new_id() {
        let dir   = tempdir().unwrap();
        let store = FileMaterialStore::new(dir.path());
        let a = store.store("sama").unwrap();
        let b = store.store("sama").unwrap();
        assert_ne!(a, b);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_load_missing_record_fails() {
        let dir = tempdir().unwrap();
        assert!(FileMaterialStore::new(dir.path()).load("nope").is_err());
    }
}
