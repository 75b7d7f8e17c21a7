//! Turns a JSON catalog document into validated records.
//!
//! Document shape: `{ "tools": [...], "categories": [...] }`. Individual
//! records that fail to parse, lack an identity, or repeat an earlier key are
//! logged and skipped. Only a structurally unusable document is an error.

use crate::catalog::{CategoryRecord, ToolRecord};
use crate::error::CatalogError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub type IngestResult<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Clone, Default)]
pub struct IngestedCatalog {
    pub tools: Vec<ToolRecord>,
    pub categories: Vec<CategoryRecord>,
    /// Records dropped during ingestion, across both arrays.
    pub skipped: usize,
}

/// Read and ingest a catalog file.
pub fn load_catalog_file(path: &Path) -> IngestResult<IngestedCatalog> {
    let raw = fs::read_to_string(path).map_err(|e| {
        CatalogError::Ingestion(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let json: Value = serde_json::from_str(&raw).map_err(|e| {
        CatalogError::Ingestion(format!("{} is not valid JSON: {}", path.display(), e))
    })?;

    let catalog = ingest_catalog(&json)?;
    tracing::info!(
        path = %path.display(),
        tools = catalog.tools.len(),
        categories = catalog.categories.len(),
        skipped = catalog.skipped,
        "Catalog file loaded"
    );
    Ok(catalog)
}

pub fn ingest_catalog(json: &Value) -> IngestResult<IngestedCatalog> {
    let tools_array = extract_array(json, "tools")?;
    let categories_array = extract_array(json, "categories")?;

    let (tools, skipped_tools) = ingest_records(tools_array, "tool", |tool: &ToolRecord| {
        validate_identity(&tool.id, &tool.name).map(|_| tool.id.clone())
    })?;
    let (categories, skipped_categories) =
        ingest_records(categories_array, "category", |category: &CategoryRecord| {
            validate_identity(&category.name, &category.name).map(|_| category.name.clone())
        })?;

    Ok(IngestedCatalog {
        tools,
        categories,
        skipped: skipped_tools + skipped_categories,
    })
}

fn extract_array<'a>(json: &'a Value, field: &str) -> IngestResult<&'a Vec<Value>> {
    json.get(field).and_then(|v| v.as_array()).ok_or_else(|| {
        CatalogError::Ingestion(format!("Expected '{}' array in catalog document", field))
    })
}

fn validate_identity(key: &str, name: &str) -> std::result::Result<(), String> {
    if key.trim().is_empty() {
        return Err("empty identifier".to_string());
    }
    if name.trim().is_empty() {
        return Err("empty name".to_string());
    }
    Ok(())
}

/// Parse each entry, keeping the first record for every key.
fn ingest_records<T, F>(
    values: &[Value],
    kind: &str,
    key_of: F,
) -> IngestResult<(Vec<T>, usize)>
where
    T: DeserializeOwned,
    F: Fn(&T) -> std::result::Result<String, String>,
{
    let mut records = Vec::with_capacity(values.len());
    let mut seen: HashSet<String> = HashSet::new();
    let mut skipped = 0;

    for (idx, value) in values.iter().enumerate() {
        let parsed = serde_json::from_value::<T>(value.clone())
            .map_err(|e| e.to_string())
            .and_then(|record| key_of(&record).map(|key| (key, record)));

        match parsed {
            Ok((key, record)) => {
                if seen.insert(key.clone()) {
                    records.push(record);
                } else {
                    skipped += 1;
                    tracing::warn!(index = idx, kind, key = %key, "Skipping duplicate record");
                }
            }
            Err(e) => {
                skipped += 1;
                tracing::warn!(index = idx, kind, error = %e, "Skipping malformed record");
            }
        }
    }

    if records.is_empty() && !values.is_empty() {
        return Err(CatalogError::Ingestion(format!(
            "All {} records failed to parse",
            kind
        )));
    }

    tracing::debug!(kind, total = values.len(), parsed = records.len(), "Records ingested");

    Ok((records, skipped))
}
