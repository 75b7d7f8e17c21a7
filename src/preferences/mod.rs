//! Per-user marks (bookmarks, likes) and view counters.
//!
//! Storage is an injected [`PreferenceStore`]; values are whole strings under
//! fixed keys: `bookmarkedTools` and `likedTools` hold JSON arrays of tool
//! ids, `views_<toolId>` holds a plain integer. Corrupt values read as empty
//! or zero. Concurrent writers are last-write-wins.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Whole-value key/value storage.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: String) -> Result<()>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: String) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: String) -> Result<()> {
        (**self).set(key, value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkBucket {
    Bookmarks,
    Likes,
}

impl MarkBucket {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Bookmarks => "bookmarkedTools",
            Self::Likes => "likedTools",
        }
    }
}

fn views_key(tool_id: &str) -> String {
    format!("views_{}", tool_id)
}

pub struct Preferences<S> {
    store: S,
}

impl<S: PreferenceStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Ids in a bucket, in the order they were marked.
    pub fn marked(&self, bucket: MarkBucket) -> Result<Vec<String>> {
        let Some(raw) = self.store.get(bucket.key())? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(ids) => Ok(ids),
            Err(e) => {
                tracing::warn!(bucket = bucket.key(), error = %e, "Corrupt preference bucket, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    pub fn is_marked(&self, bucket: MarkBucket, tool_id: &str) -> Result<bool> {
        Ok(self.marked(bucket)?.iter().any(|id| id == tool_id))
    }

    /// Flip the mark for `tool_id` and return the new state.
    pub fn toggle_mark(&self, bucket: MarkBucket, tool_id: &str) -> Result<bool> {
        let mut ids = self.marked(bucket)?;
        let now_marked = if ids.iter().any(|id| id == tool_id) {
            ids.retain(|id| id != tool_id);
            false
        } else {
            ids.push(tool_id.to_string());
            true
        };

        let encoded = serde_json::to_string(&ids)
            .map_err(|e| crate::error::CatalogError::Store(e.to_string()))?;
        self.store.set(bucket.key(), encoded)?;

        tracing::debug!(bucket = bucket.key(), tool_id, marked = now_marked, "Mark toggled");
        Ok(now_marked)
    }

    pub fn view_count(&self, tool_id: &str) -> Result<u64> {
        let count = self
            .store
            .get(&views_key(tool_id))?
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0);
        Ok(count)
    }

    /// Increment and return the view counter.
    pub fn record_view(&self, tool_id: &str) -> Result<u64> {
        let next = self.view_count(tool_id)?.saturating_add(1);
        self.store.set(&views_key(tool_id), next.to_string())?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs() -> Preferences<MemoryStore> {
        Preferences::new(MemoryStore::new())
    }

    #[test]
    fn test_toggle_round_trip() {
        let prefs = prefs();
        assert!(!prefs.is_marked(MarkBucket::Bookmarks, "gpt-4").unwrap());

        assert!(prefs.toggle_mark(MarkBucket::Bookmarks, "gpt-4").unwrap());
        assert!(prefs.is_marked(MarkBucket::Bookmarks, "gpt-4").unwrap());
        assert!(!prefs.is_marked(MarkBucket::Likes, "gpt-4").unwrap());

        assert!(!prefs.toggle_mark(MarkBucket::Bookmarks, "gpt-4").unwrap());
        assert!(!prefs.is_marked(MarkBucket::Bookmarks, "gpt-4").unwrap());
    }

    #[test]
    fn test_bucket_layout_is_json_array() {
        let prefs = prefs();
        prefs.toggle_mark(MarkBucket::Likes, "a").unwrap();
        prefs.toggle_mark(MarkBucket::Likes, "b").unwrap();

        let raw = prefs.store().get("likedTools").unwrap().unwrap();
        assert_eq!(raw, r#"["a","b"]"#);
        assert_eq!(prefs.marked(MarkBucket::Likes).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_corrupt_bucket_reads_empty_and_recovers() {
        let prefs = prefs();
        prefs.store().set("bookmarkedTools", "{not json".to_string()).unwrap();

        assert!(prefs.marked(MarkBucket::Bookmarks).unwrap().is_empty());
        assert!(prefs.toggle_mark(MarkBucket::Bookmarks, "claude").unwrap());
        assert_eq!(prefs.marked(MarkBucket::Bookmarks).unwrap(), vec!["claude"]);
    }

    #[test]
    fn test_view_counter() {
        let prefs = prefs();
        assert_eq!(prefs.view_count("gpt-4").unwrap(), 0);
        assert_eq!(prefs.record_view("gpt-4").unwrap(), 1);
        assert_eq!(prefs.record_view("gpt-4").unwrap(), 2);
        assert_eq!(prefs.store().get("views_gpt-4").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_corrupt_counter_restarts_from_zero() {
        let prefs = prefs();
        prefs.store().set("views_x", "many".to_string()).unwrap();
        assert_eq!(prefs.view_count("x").unwrap(), 0);
        assert_eq!(prefs.record_view("x").unwrap(), 1);
    }

    #[test]
    fn test_trait_object_store() {
        let store: Box<dyn PreferenceStore> = Box::new(MemoryStore::new());
        let prefs = Preferences::new(store);
        assert!(prefs.toggle_mark(MarkBucket::Likes, "x").unwrap());
    }
}
