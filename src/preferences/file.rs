//! Preference store persisted as a single JSON object file.
//!
//! The whole file is rewritten on every `set`. A missing file starts empty;
//! an unreadable or corrupt one is logged and also starts empty, so a damaged
//! preferences file never blocks catalog access.

use crate::error::{CatalogError, Result};
use crate::preferences::PreferenceStore;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub struct FileStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    pub fn open(path: &Path) -> Result<Self> {
        let values = Self::read_values(path);
        tracing::info!(
            path = %path.display(),
            keys = values.len(),
            "Preference store opened"
        );

        Ok(Self {
            path: path.to_path_buf(),
            values: Mutex::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_values(path: &Path) -> BTreeMap<String, String> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Preference file does not exist");
            return BTreeMap::new();
        }

        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Unreadable preference file, starting empty");
                return BTreeMap::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Corrupt preference file, starting empty");
                BTreeMap::new()
            }
        }
    }

    fn persist(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    CatalogError::Store(format!("Failed to create preference directory: {}", e))
                })?;
            }
        }

        let file = File::create(&self.path).map_err(|e| {
            CatalogError::Store(format!("Failed to create preference file: {}", e))
        })?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, values).map_err(|e| {
            CatalogError::Store(format!("Failed to write preference file: {}", e))
        })?;

        writer.flush().map_err(|e| {
            CatalogError::Store(format!("Failed to flush preference file: {}", e))
        })?;

        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| CatalogError::Store("preference lock poisoned".to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| CatalogError::Store("preference lock poisoned".to_string()))?;
        values.insert(key.to_string(), value);
        self.persist(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{MarkBucket, Preferences};
    use tempfile::tempdir;

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        {
            let prefs = Preferences::new(FileStore::open(&path).unwrap());
            prefs.toggle_mark(MarkBucket::Bookmarks, "gpt-4").unwrap();
            prefs.record_view("gpt-4").unwrap();
            prefs.record_view("gpt-4").unwrap();
        }

        let prefs = Preferences::new(FileStore::open(&path).unwrap());
        assert!(prefs.is_marked(MarkBucket::Bookmarks, "gpt-4").unwrap());
        assert_eq!(prefs.view_count("gpt-4").unwrap(), 2);
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json at all").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("likedTools").unwrap(), None);

        store.set("likedTools", "[\"a\"]".to_string()).unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("likedTools").unwrap().as_deref(), Some("[\"a\"]"));
    }

    #[test]
    fn test_file_is_flat_object() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let store = FileStore::open(&path).unwrap();
        store.set("views_x", "3".to_string()).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["views_x"], "3");
    }
}
