use crate::catalog::{find_category, Catalog, CatalogSource, CategoryRecord, ToolRecord};
use crate::config::Config;
use crate::error::{CatalogError, Result};
use crate::preferences::{FileStore, MarkBucket, MemoryStore, PreferenceStore, Preferences};
use crate::query::{
    aggregate, category_breakdown, run_query, tool_statistics, CategoryAggregate,
    CategoryBreakdown, Page, Predicate, QuerySpec, SortKey, SortOrder, ToolStatistics,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// One request from a presentation layer.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "target", rename_all = "camelCase")]
pub enum DirectoryRequest {
    Tools {
        #[serde(default)]
        query: QuerySpec,
    },
    Categories {
        #[serde(default)]
        query: QuerySpec,
    },
    Tool {
        id: String,
        /// Narrows the related tools by tag substring.
        #[serde(default)]
        tag: Option<String>,
    },
    Category {
        slug: String,
        #[serde(default)]
        query: QuerySpec,
    },
    Dashboard,
    Tags,
    ToggleMark {
        bucket: MarkBucket,
        id: String,
    },
    Marked {
        bucket: MarkBucket,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDetail<'a> {
    pub tool: &'a ToolRecord,
    pub related: Vec<&'a ToolRecord>,
    pub bookmarked: bool,
    pub liked: bool,
    pub views: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDetail<'a> {
    pub category: CategoryRecord,
    pub slug: String,
    pub tools: Page<&'a ToolRecord>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard<'a> {
    pub categories: CategoryAggregate,
    pub tools: ToolStatistics,
    pub breakdown: Vec<CategoryBreakdown>,
    pub featured: Vec<&'a ToolRecord>,
    pub catalog_fingerprint: String,
}

/// The catalog, the preference store and the configuration behind every
/// browse view. Engine calls go through here so they are logged and counted.
pub struct Directory {
    pub catalog: Arc<Catalog>,
    pub preferences: Preferences<Box<dyn PreferenceStore>>,
    pub config: Arc<Config>,
}

impl Directory {
    /// Build from configuration: load the catalog file if one is configured
    /// (built-in sample data otherwise) and open the preference store.
    pub fn new(config: Config) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::builtin(),
        };

        let store: Box<dyn PreferenceStore> = match &config.preferences_path {
            Some(path) => {
                let store = FileStore::open(path)?;
                tracing::info!(path = %store.path().display(), "Using file preference store");
                Box::new(store)
            }
            None => {
                tracing::info!("Using in-memory preference store");
                Box::new(MemoryStore::new())
            }
        };

        Ok(Self::with_parts(catalog, store, config))
    }

    pub fn with_parts(catalog: Catalog, store: Box<dyn PreferenceStore>, config: Config) -> Self {
        tracing::info!(
            tools = catalog.tools().len(),
            categories = catalog.categories().len(),
            fingerprint = %catalog.fingerprint(),
            "Directory initialized"
        );

        Self {
            catalog: Arc::new(catalog),
            preferences: Preferences::new(store),
            config: Arc::new(config),
        }
    }

    /// Apply the page size, and most popular first when no sort is given.
    fn paged(&self, query: &QuerySpec) -> QuerySpec {
        let mut paged = QuerySpec {
            limit: Some(self.config.page_size(query.limit)),
            ..query.clone()
        };
        if paged.sort.is_none() {
            paged.sort = Some(SortKey::Popularity);
            paged.order = SortOrder::Desc;
        }
        paged
    }

    fn observe<T>(&self, target: &'static str, result: &Result<Page<T>>) {
        metrics::counter!("catalog_queries_total", "target" => target).increment(1);
        match result {
            Ok(page) => {
                metrics::histogram!("catalog_query_results", "target" => target)
                    .record(page.total as f64);
                tracing::debug!(target, total = page.total, page = page.page, "Query completed");
            }
            Err(e) if e.is_structural() => {
                metrics::counter!("catalog_query_errors_total", "target" => target).increment(1);
                tracing::warn!(target, error = %e, "Query rejected");
            }
            Err(e) => tracing::error!(target, error = %e, "Query failed"),
        }
    }

    pub fn browse_tools(&self, query: &QuerySpec) -> Result<Page<&ToolRecord>> {
        let result = run_query(self.catalog.tools(), &self.paged(query));
        self.observe("tools", &result);
        result
    }

    /// Categories carry derived tool counts, so `toolCount` sorts reflect the
    /// live tool list.
    pub fn browse_categories(&self, query: &QuerySpec) -> Result<Page<CategoryRecord>> {
        let categories = self.catalog.categories_with_counts();
        let result = run_query(&categories, &self.paged(query)).map(|page| page.map(Clone::clone));
        self.observe("categories", &result);
        result
    }

    /// Look up a tool, count the view and collect related tools and marks.
    pub fn tool_detail(&self, id: &str, tag: Option<&str>) -> Result<ToolDetail<'_>> {
        let tool = self
            .catalog
            .tool_by_id(id)
            .ok_or_else(|| CatalogError::NotFound(format!("tool '{}'", id)))?;

        let views = self.preferences.record_view(id)?;
        metrics::counter!("tool_views_total").increment(1);
        tracing::debug!(id, status = tool.status.as_str(), views, "Tool viewed");

        Ok(ToolDetail {
            tool,
            related: self
                .catalog
                .related_tools_tagged(id, self.config.related_limit, tag),
            bookmarked: self.preferences.is_marked(MarkBucket::Bookmarks, id)?,
            liked: self.preferences.is_marked(MarkBucket::Likes, id)?,
            views,
        })
    }

    /// A category with its derived count and a page of its tools.
    pub fn category_detail(&self, slug: &str, query: &QuerySpec) -> Result<CategoryDetail<'_>> {
        let category = find_category(&*self.catalog, slug)
            .ok_or_else(|| CatalogError::NotFound(format!("category '{}'", slug)))?;

        let mut scoped = self.paged(query);
        scoped.predicates.insert(
            0,
            Predicate::Category {
                name: category.name.clone(),
            },
        );
        let tools = run_query(self.catalog.tools(), &scoped);
        self.observe("category_tools", &tools);

        let tool_count = self.catalog.tools_by_category(&category.name).len();
        Ok(CategoryDetail {
            category: CategoryRecord {
                tool_count,
                ..category.clone()
            },
            slug: category.slug(),
            tools: tools?,
        })
    }

    pub fn dashboard(&self) -> Dashboard<'_> {
        let categories = self.catalog.categories_with_counts();
        let tools = self.catalog.tools();

        Dashboard {
            categories: aggregate(&categories),
            tools: tool_statistics(tools),
            breakdown: category_breakdown(&categories, tools, self.config.breakdown_sample_size),
            featured: self.catalog.featured_tools(self.config.featured_limit),
            catalog_fingerprint: self.catalog.fingerprint(),
        }
    }

    /// Toggle a mark on a tool that exists in the catalog.
    pub fn toggle_mark(&self, bucket: MarkBucket, id: &str) -> Result<bool> {
        if self.catalog.tool_by_id(id).is_none() {
            return Err(CatalogError::NotFound(format!("tool '{}'", id)));
        }
        self.preferences.toggle_mark(bucket, id)
    }

    /// Marked tools in mark order. Ids no longer in the catalog are skipped.
    pub fn marked_tools(&self, bucket: MarkBucket) -> Result<Vec<&ToolRecord>> {
        Ok(self
            .preferences
            .marked(bucket)?
            .iter()
            .filter_map(|id| self.catalog.tool_by_id(id))
            .collect())
    }

    /// Serve one request and return the JSON result.
    pub fn handle(&self, request: &DirectoryRequest) -> Result<Value> {
        let value = match request {
            DirectoryRequest::Tools { query } => serde_json::to_value(self.browse_tools(query)?)?,
            DirectoryRequest::Categories { query } => {
                serde_json::to_value(self.browse_categories(query)?)?
            }
            DirectoryRequest::Tool { id, tag } => {
                serde_json::to_value(self.tool_detail(id, tag.as_deref())?)?
            }
            DirectoryRequest::Category { slug, query } => {
                serde_json::to_value(self.category_detail(slug, query)?)?
            }
            DirectoryRequest::Dashboard => serde_json::to_value(self.dashboard())?,
            DirectoryRequest::Tags => serde_json::to_value(self.catalog.all_tags())?,
            DirectoryRequest::ToggleMark { bucket, id } => {
                let marked = self.toggle_mark(*bucket, id)?;
                serde_json::json!({ "id": id, "bucket": bucket, "marked": marked })
            }
            DirectoryRequest::Marked { bucket } => {
                serde_json::to_value(self.marked_tools(*bucket)?)?
            }
        };
        Ok(value)
    }
}
