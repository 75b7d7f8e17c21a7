use crate::catalog::seed;
use crate::catalog::types::{slugify, CategoryRecord, ToolRecord};
use crate::error::Result;
use crate::ingestion::{ingest_catalog, load_catalog_file, IngestedCatalog};
use crate::query::sort::sort_supported;
use crate::query::{derive_category_tool_count, SortKey, SortOrder};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use std::path::Path;

/// Read-only access to the canonical records.
///
/// Implementations must hand out the same records on every call for the
/// lifetime of the source.
pub trait CatalogSource {
    fn tools(&self) -> &[ToolRecord];

    fn categories(&self) -> &[CategoryRecord];

    fn tools_by_category(&self, name: &str) -> Vec<&ToolRecord> {
        self.tools().iter().filter(|t| t.category == name).collect()
    }

    fn tool_by_id(&self, id: &str) -> Option<&ToolRecord> {
        self.tools().iter().find(|t| t.id == id)
    }

    fn category_by_slug(&self, slug: &str) -> Option<&CategoryRecord> {
        self.categories().iter().find(|c| c.slug() == slug)
    }

    /// Categories with `tool_count` recomputed from the live tools.
    fn categories_with_counts(&self) -> Vec<CategoryRecord> {
        derive_category_tool_count(self.categories(), self.tools())
    }

    /// Other tools in the same category, in catalog order.
    fn related_tools(&self, id: &str, limit: usize) -> Vec<&ToolRecord> {
        self.related_tools_tagged(id, limit, None)
    }

    /// Related tools narrowed to those with a tag containing `tag`
    /// (case-insensitive). The limit applies first, so a tag can only
    /// narrow the related list, never pull in other tools.
    fn related_tools_tagged(&self, id: &str, limit: usize, tag: Option<&str>) -> Vec<&ToolRecord> {
        let Some(tool) = self.tool_by_id(id) else {
            return Vec::new();
        };
        let needle = tag.map(str::to_lowercase).filter(|t| !t.is_empty());
        self.tools()
            .iter()
            .filter(|t| t.category == tool.category && t.id != tool.id)
            .take(limit)
            .filter(|t| match &needle {
                Some(needle) => t.tags.iter().any(|tag| tag.to_lowercase().contains(needle)),
                None => true,
            })
            .collect()
    }

    /// Highest trending scores first; ties keep catalog order.
    fn featured_tools(&self, limit: usize) -> Vec<&ToolRecord> {
        let refs: Vec<&ToolRecord> = self.tools().iter().collect();
        let mut ranked = sort_supported(&refs, SortKey::Popularity, SortOrder::Desc);
        ranked.truncate(limit);
        ranked
    }

    /// Every distinct tag, sorted.
    fn all_tags(&self) -> Vec<String> {
        self.tools()
            .iter()
            .flat_map(|t| t.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// In-memory catalog populated once and never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    tools: Vec<ToolRecord>,
    categories: Vec<CategoryRecord>,
}

impl Catalog {
    pub fn new(tools: Vec<ToolRecord>, categories: Vec<CategoryRecord>) -> Self {
        Self { tools, categories }
    }

    /// The sample dataset compiled into the crate.
    pub fn builtin() -> Self {
        Self::new(seed::tools(), seed::categories())
    }

    pub fn from_json(json: &Value) -> Result<Self> {
        Ok(ingest_catalog(json)?.into())
    }

    pub fn load(path: &Path) -> Result<Self> {
        Ok(load_catalog_file(path)?.into())
    }

    /// Hex SHA-256 over tool ids and names and category names, in order.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();

        for tool in &self.tools {
            hasher.update(tool.id.as_bytes());
            hasher.update(b"|");
            hasher.update(tool.name.as_bytes());
            hasher.update(b"\n");
        }
        hasher.update(b"--\n");
        for category in &self.categories {
            hasher.update(category.name.as_bytes());
            hasher.update(b"\n");
        }

        hasher
            .finalize()
            .iter()
            .map(|byte| format!("{:02x}", byte))
            .collect()
    }
}

impl From<IngestedCatalog> for Catalog {
    fn from(ingested: IngestedCatalog) -> Self {
        Self::new(ingested.tools, ingested.categories)
    }
}

impl CatalogSource for Catalog {
    fn tools(&self) -> &[ToolRecord] {
        &self.tools
    }

    fn categories(&self) -> &[CategoryRecord] {
        &self.categories
    }
}

/// Slug lookup that tolerates raw category names too.
pub fn find_category<'a, S: CatalogSource + ?Sized>(
    source: &'a S,
    slug_or_name: &str,
) -> Option<&'a CategoryRecord> {
    let slug = slugify(slug_or_name);
    source.category_by_slug(&slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Catalog {
        let mut a = ToolRecord::new("a", "Alpha", "Code Generation");
        a.popularity.trending_score = 70.0;
        a.tags = vec!["ide".into(), "autocomplete".into()];
        let mut b = ToolRecord::new("b", "Beta", "Code Generation");
        b.popularity.trending_score = 90.0;
        b.tags = vec!["ide".into()];
        let mut c = ToolRecord::new("c", "Gamma", "Code Generation");
        c.popularity.trending_score = 90.0;
        let d = ToolRecord::new("d", "Delta", "Image Generation");

        let mut stale = CategoryRecord::new("Code Generation");
        stale.tool_count = 99;
        Catalog::new(vec![a, b, c, d], vec![stale, CategoryRecord::new("Image Generation")])
    }

    #[test]
    fn test_repeated_calls_return_same_records() {
        let catalog = small();
        assert!(std::ptr::eq(catalog.tools(), catalog.tools()));
        assert!(std::ptr::eq(&catalog.categories()[0], &catalog.categories()[0]));
    }

    #[test]
    fn test_tools_by_category() {
        let catalog = small();
        let ids: Vec<_> = catalog
            .tools_by_category("Code Generation")
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert!(catalog.tools_by_category("Nope").is_empty());
    }

    #[test]
    fn test_categories_with_counts_overrides_stale_value() {
        let catalog = small();
        let categories = catalog.categories_with_counts();
        assert_eq!(categories[0].tool_count, 3);
        assert_eq!(categories[1].tool_count, 1);
        assert_eq!(catalog.categories()[0].tool_count, 99);
    }

    #[test]
    fn test_related_excludes_self() {
        let catalog = small();
        let related: Vec<_> = catalog.related_tools("b", 3).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(related, vec!["a", "c"]);
        assert!(catalog.related_tools("missing", 3).is_empty());
        assert_eq!(catalog.related_tools("a", 1).len(), 1);
    }

    #[test]
    fn test_related_tag_narrows_limited_list() {
        let catalog = small();
        let ids = |tools: Vec<&ToolRecord>| -> Vec<String> {
            tools.iter().map(|t| t.id.clone()).collect()
        };

        assert_eq!(ids(catalog.related_tools_tagged("b", 3, Some("AUTO"))), vec!["a"]);
        assert_eq!(ids(catalog.related_tools_tagged("b", 3, Some(""))), vec!["a", "c"]);
        assert_eq!(ids(catalog.related_tools_tagged("a", 1, Some("ide"))), vec!["b"]);
        // "c" would not match anyway; the limit already cut it
        assert!(catalog.related_tools_tagged("a", 1, Some("none")).is_empty());
    }

    #[test]
    fn test_featured_is_stable_by_trending() {
        let catalog = small();
        let featured: Vec<_> = catalog.featured_tools(3).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(featured, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_all_tags_sorted_unique() {
        assert_eq!(small().all_tags(), vec!["autocomplete", "ide"]);
    }

    #[test]
    fn test_slug_lookup() {
        let catalog = small();
        assert!(catalog.category_by_slug("code-generation").is_some());
        assert!(find_category(&catalog, "Image Generation").is_some());
        assert!(catalog.category_by_slug("code generation").is_none());
    }

    #[test]
    fn test_fingerprint_tracks_content() {
        let a = small();
        let b = Catalog::builtin();
        assert_eq!(a.fingerprint(), small().fingerprint());
        assert_ne!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint().len(), 64);
    }
}
