//! Composed queries: search, then filter, then sort, then paginate.

use crate::error::{CatalogError, Result};
use crate::query::filter::{filter_all, Predicate};
use crate::query::record::Record;
use crate::query::search::search;
use crate::query::sort::{sort, SortKey, SortOrder};
use serde::{Deserialize, Serialize};

fn default_page() -> usize {
    1
}

/// Everything a browse view asks of the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySpec {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub predicates: Vec<Predicate>,
    #[serde(default)]
    pub sort: Option<SortKey>,
    #[serde(default)]
    pub order: SortOrder,
    /// 1-based.
    #[serde(default = "default_page")]
    pub page: usize,
    /// `None` returns every match on one page.
    #[serde(default)]
    pub limit: Option<usize>,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            search: String::new(),
            predicates: Vec::new(),
            sort: None,
            order: SortOrder::Asc,
            page: default_page(),
            limit: None,
        }
    }
}

impl QuerySpec {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn sorted(mut self, key: SortKey, order: SortOrder) -> Self {
        self.sort = Some(key);
        self.order = order;
        self
    }

    pub fn page(mut self, page: usize, limit: usize) -> Self {
        self.page = page;
        self.limit = Some(limit);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            limit: self.limit,
            total: self.total,
            total_pages: self.total_pages,
        }
    }
}

/// Slice out one 1-based page. Pages past the end are empty.
///
/// # Errors
/// `InvalidQuery` for page 0 or a zero limit.
pub fn paginate<T: Clone>(items: &[T], page: usize, limit: usize) -> Result<Page<T>> {
    if page == 0 {
        return Err(CatalogError::InvalidQuery("page numbers start at 1".to_string()));
    }
    if limit == 0 {
        return Err(CatalogError::InvalidQuery("limit must be at least 1".to_string()));
    }

    let total = items.len();
    let start = (page - 1).saturating_mul(limit).min(total);
    let end = start.saturating_add(limit).min(total);

    Ok(Page {
        items: items[start..end].to_vec(),
        page,
        limit,
        total,
        total_pages: total.div_ceil(limit),
    })
}

/// Run a full query over borrowed records.
pub fn run_query<'a, R: Record>(collection: &'a [R], spec: &QuerySpec) -> Result<Page<&'a R>> {
    let refs: Vec<&R> = collection.iter().collect();

    let found = search(&refs, &spec.search);
    let filtered = filter_all(&found, &spec.predicates)?;
    let ordered = match spec.sort {
        Some(key) => sort(&filtered, key, spec.order)?,
        None => filtered,
    };

    let limit = spec.limit.unwrap_or(ordered.len().max(1));
    paginate(&ordered, spec.page, limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CategoryRecord, Complexity, ToolRecord};
    use serde_json::json;

    fn tools() -> Vec<ToolRecord> {
        let specs = [
            ("gpt-4", "GPT-4", "Large Language Models", 98.0, vec!["LLM"]),
            ("copilot", "GitHub Copilot", "Code Generation", 92.0, vec!["Code Generation"]),
            ("claude", "Claude", "Large Language Models", 89.0, vec!["LLM"]),
            ("cursor", "Cursor", "Code Generation", 95.0, vec!["Code Generation", "IDE"]),
            ("gemini", "Gemini", "Large Language Models", 95.0, vec!["LLM"]),
        ];
        specs
            .into_iter()
            .map(|(id, name, category, trending, tags)| {
                let mut tool = ToolRecord::new(id, name, category);
                tool.popularity.trending_score = trending;
                tool.tags = tags.into_iter().map(String::from).collect();
                tool
            })
            .collect()
    }

    fn ids<'a>(page: &Page<&'a ToolRecord>) -> Vec<&'a str> {
        page.items.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_paginate_bounds() {
        let items: Vec<u32> = (1..=7).collect();

        let first = paginate(&items, 1, 3).unwrap();
        assert_eq!(first.items, vec![1, 2, 3]);
        assert_eq!(first.total, 7);
        assert_eq!(first.total_pages, 3);

        let last = paginate(&items, 3, 3).unwrap();
        assert_eq!(last.items, vec![7]);

        let beyond = paginate(&items, 9, 3).unwrap();
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total, 7);
    }

    #[test]
    fn test_paginate_rejects_zero() {
        let items = vec![1];
        assert!(paginate(&items, 0, 10).is_err());
        assert!(paginate(&items, 1, 0).is_err());
    }

    #[test]
    fn test_paginate_empty() {
        let items: Vec<u8> = Vec::new();
        let page = paginate(&items, 1, 5).unwrap();
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_chained_query() {
        let tools = tools();
        let spec = QuerySpec::default()
            .filter(Predicate::Category {
                name: "Large Language Models".into(),
            })
            .sorted(SortKey::Popularity, SortOrder::Desc);

        let page = run_query(&tools, &spec).unwrap();
        assert_eq!(ids(&page), vec!["gpt-4", "gemini", "claude"]);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_search_then_page() {
        let tools = tools();
        let spec = QuerySpec::default()
            .search("code")
            .sorted(SortKey::Name, SortOrder::Asc)
            .page(2, 1);

        let page = run_query(&tools, &spec).unwrap();
        assert_eq!(ids(&page), vec!["copilot"]);
        assert_eq!(page.total, 2);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_structural_errors_surface() {
        let categories = vec![CategoryRecord::new("Design Tools")];
        let spec = QuerySpec::default().sorted(SortKey::LastUpdated, SortOrder::Asc);
        assert!(run_query(&categories, &spec).is_err());

        let spec = QuerySpec::default().filter(Predicate::Status {
            value: crate::catalog::ToolStatus::Beta,
        });
        assert!(run_query(&categories, &spec).is_err());
    }

    #[test]
    fn test_spec_from_json() {
        let spec: QuerySpec = serde_json::from_value(json!({
            "search": "image",
            "predicates": [{"kind": "complexity", "value": "Beginner"}],
            "sort": "growth",
            "order": "desc",
            "limit": 10
        }))
        .unwrap();

        assert_eq!(spec.page, 1);
        assert_eq!(spec.sort, Some(SortKey::Growth));
        assert_eq!(spec.order, SortOrder::Desc);
        assert_eq!(
            spec.predicates,
            vec![Predicate::Complexity {
                value: Complexity::Beginner
            }]
        );
    }

    #[test]
    fn test_spec_rejects_unknown_sort_key() {
        let err = serde_json::from_value::<QuerySpec>(json!({"sort": "rating"})).unwrap_err();
        assert!(err.to_string().contains("Unknown sort key: rating"));
    }
}
