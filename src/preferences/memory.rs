use crate::error::{CatalogError, Result};
use crate::preferences::PreferenceStore;
use std::collections::HashMap;
use std::sync::RwLock;

/// Process-local store, used when no preferences file is configured and as
/// the fake in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            values: RwLock::new(values),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .read()
            .map_err(|_| CatalogError::Store("preference lock poisoned".to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<()> {
        let mut values = self
            .values
            .write()
            .map_err(|_| CatalogError::Store("preference lock poisoned".to_string()))?;
        values.insert(key.to_string(), value);
        Ok(())
    }
}
