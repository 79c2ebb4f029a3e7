//! Knowledge Store: loads the knowledge base from disk and holds the current snapshot.
//!
//! Loading never fails: a missing or malformed file is logged and replaced by a
//! small built-in default so the service always starts.
//!
//! Readers call [`KnowledgeStore::snapshot`] once per request and keep the `Arc`
//! for the whole request. [`KnowledgeStore::reload`] swaps the `Arc` in a single
//! write, so a reader sees either the old or the new base, never a mix.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use anyhow::{Context, Result};
use serde_json::json;
use tracing::{info, warn};

use crate::models::knowledge::KnowledgeBase;

/// Counts reported after a reload.
#[derive(Debug, Clone)]
pub struct ReloadSummary {
    pub old_categories: usize,
    pub new_categories: usize,
    pub categories: Vec<String>,
}

pub struct KnowledgeStore {
    path: PathBuf,
    current: RwLock<Arc<KnowledgeBase>>,
}

impl KnowledgeStore {
    /// Loads the file at `path` (or the default base) and wraps it in a store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let knowledge = load(&path);
        Self {
            path,
            current: RwLock::new(Arc::new(knowledge)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the current knowledge base. The lock is held only for the `Arc` clone.
    pub fn snapshot(&self) -> Arc<KnowledgeBase> {
        let guard = self
            .current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    }

    /// Re-reads the file on the blocking pool and swaps in the result.
    pub async fn reload(&self) -> Result<ReloadSummary> {
        let path = self.path.clone();
        let knowledge = tokio::task::spawn_blocking(move || load(&path))
            .await
            .context("knowledge reload task failed")?;

        let new_categories = knowledge.len();
        let categories = knowledge.categories();
        let old = self.replace(knowledge);

        info!(
            "Knowledge base reloaded: {} → {} categories",
            old.len(),
            new_categories
        );

        Ok(ReloadSummary {
            old_categories: old.len(),
            new_categories,
            categories,
        })
    }

    /// Installs `knowledge` as the current base and returns the previous one.
    fn replace(&self, knowledge: KnowledgeBase) -> Arc<KnowledgeBase> {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::replace(&mut *guard, Arc::new(knowledge))
    }
}

/// Reads and parses the knowledge file, falling back to [`default_knowledge`]
/// when the file is missing or is not a JSON object.
pub fn load(path: &Path) -> KnowledgeBase {
    match try_load(path) {
        Ok(knowledge) => {
            info!(
                "Knowledge base loaded from {} ({} categories)",
                path.display(),
                knowledge.len()
            );
            knowledge
        }
        Err(e) => {
            warn!(
                "Could not load knowledge base from {}: {e:#}; using built-in defaults",
                path.display()
            );
            default_knowledge()
        }
    }
}

fn try_load(path: &Path) -> Result<KnowledgeBase> {
    let raw = std::fs::read_to_string(path).context("failed to read knowledge file")?;
    serde_json::from_str(&raw).context("knowledge file is not a JSON object")
}

/// Minimal built-in knowledge base: one travel and one meetings category.
pub fn default_knowledge() -> KnowledgeBase {
    let value = json!({
        "reisen": {
            "bahn": {
                "co2_pro_km": 0.032,
                "vorteile": ["Niedrigste CO2-Emissionen", "Produktiv während der Fahrt"],
                "tipps": ["Bahncard nutzen", "Frühbucher-Rabatte"]
            }
        },
        "meetings": {
            "virtuell": {
                "co2_ersparnis": "95% weniger als Präsenz",
                "tools": ["Teams", "Zoom", "Google Meet"]
            }
        }
    });
    match value {
        serde_json::Value::Object(categories) => KnowledgeBase::new(categories),
        _ => KnowledgeBase::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_knowledge_has_travel_and_meetings() {
        let knowledge = default_knowledge();
        assert!(knowledge.get("reisen").is_some());
        assert!(knowledge.get("meetings").is_some());
    }

    #[test]
    fn test_load_missing_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let knowledge = load(&dir.path().join("does-not-exist.json"));
        assert!(!knowledge.is_empty());
        assert_eq!(knowledge, default_knowledge());
    }

    #[test]
    fn test_load_malformed_file_falls_back_to_default() {
        let file = write_file("{ this is not json");
        assert_eq!(load(file.path()), default_knowledge());
    }

    #[test]
    fn test_load_non_object_root_falls_back_to_default() {
        let file = write_file(r#"["reisen", "meetings"]"#);
        assert_eq!(load(file.path()), default_knowledge());
    }

    #[test]
    fn test_load_keeps_file_category_order() {
        let file = write_file(r#"{"kantine": {}, "reisen": {}, "energie": {}}"#);
        assert_eq!(load(file.path()).categories(), vec!["kantine", "reisen", "energie"]);
    }

    #[test]
    fn test_load_reads_file_contents() {
        let file = write_file(r#"{"energie": {"strom": {"tipps": ["Ökostrom beziehen"]}}}"#);
        let knowledge = load(file.path());
        assert_eq!(knowledge.categories(), vec!["energie".to_string()]);
    }

    #[tokio::test]
    async fn test_reload_of_unchanged_file_is_idempotent() {
        let file = write_file(r#"{"kantine": {"vegetarisch": {"co2_ersparnis": "50%"}}}"#);
        let store = KnowledgeStore::open(file.path());
        let before = store.snapshot();

        store.reload().await.unwrap();

        assert_eq!(*store.snapshot(), *before);
        assert_eq!(*store.snapshot(), load(file.path()));
    }

    #[tokio::test]
    async fn test_reload_picks_up_new_category() {
        let file = write_file(r#"{"reisen": {}}"#);
        let store = KnowledgeStore::open(file.path());
        std::fs::write(file.path(), r#"{"reisen": {}, "energie": {}}"#).unwrap();

        let summary = store.reload().await.unwrap();

        assert_eq!(summary.old_categories, 1);
        assert_eq!(summary.new_categories, 2);
        assert_eq!(summary.categories, vec!["reisen".to_string(), "energie".to_string()]);
    }

    #[tokio::test]
    async fn test_snapshot_taken_before_reload_is_unaffected() {
        let file = write_file(r#"{"reisen": {}}"#);
        let store = KnowledgeStore::open(file.path());
        let snapshot = store.snapshot();
        std::fs::write(file.path(), r#"{"meetings": {}}"#).unwrap();

        store.reload().await.unwrap();

        assert!(snapshot.get("reisen").is_some());
        assert!(store.snapshot().get("meetings").is_some());
    }
}
