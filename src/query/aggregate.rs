use crate::catalog::{slugify, CategoryRecord, ToolRecord};
use serde::Serialize;
use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};

/// Summary panel for a set of categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAggregate {
    pub count: usize,
    pub total_tool_count: usize,
    pub average_growth: i64,
}

/// Count, tool total and mean growth. Empty input yields all zeros.
///
/// The mean is rounded half up, so 12.5 becomes 13 and -2.5 becomes -2.
pub fn aggregate<C: Borrow<CategoryRecord>>(categories: &[C]) -> CategoryAggregate {
    let count = categories.len();
    let total_tool_count = categories.iter().map(|c| C::borrow(c).tool_count).sum();

    let average_growth = if count == 0 {
        0
    } else {
        let sum: f64 = categories.iter().map(|c| C::borrow(c).growth).sum();
        (sum / count as f64 + 0.5).floor() as i64
    };

    CategoryAggregate {
        count,
        total_tool_count,
        average_growth,
    }
}

/// Copy `categories` with every `tool_count` recomputed from `tools`.
/// Stored counts are ignored.
pub fn derive_category_tool_count<C, T>(categories: &[C], tools: &[T]) -> Vec<CategoryRecord>
where
    C: Borrow<CategoryRecord>,
    T: Borrow<ToolRecord>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for tool in tools {
        *counts.entry(T::borrow(tool).category.as_str()).or_default() += 1;
    }

    categories
        .iter()
        .map(|category| {
            let category = C::borrow(category);
            CategoryRecord {
                tool_count: counts.get(category.name.as_str()).copied().unwrap_or(0),
                ..category.clone()
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolStatistics {
    pub total_tools: usize,
    /// Distinct category names actually used by tools.
    pub total_categories: usize,
    pub free_tools: usize,
}

pub fn tool_statistics<T: Borrow<ToolRecord>>(tools: &[T]) -> ToolStatistics {
    let categories: HashSet<&str> = tools.iter().map(|t| T::borrow(t).category.as_str()).collect();
    ToolStatistics {
        total_tools: tools.len(),
        total_categories: categories.len(),
        free_tools: tools.iter().filter(|t| T::borrow(t).is_free()).count(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub name: String,
    pub slug: String,
    pub count: usize,
    pub sample_tools: Vec<String>,
}

/// Per-category tool counts with up to `top_n` sample tool names, busiest
/// categories first. Equal counts keep category order.
///
/// Categories that tools reference without a matching record get a row too,
/// after the known categories and in order of first use, so the counts always
/// sum to the number of tools.
pub fn category_breakdown<C, T>(categories: &[C], tools: &[T], top_n: usize) -> Vec<CategoryBreakdown>
where
    C: Borrow<CategoryRecord>,
    T: Borrow<ToolRecord>,
{
    let mut names: Vec<&str> = categories
        .iter()
        .map(|category| C::borrow(category).name.as_str())
        .collect();
    let mut seen: HashSet<&str> = names.iter().copied().collect();
    for tool in tools {
        let name = T::borrow(tool).category.as_str();
        if seen.insert(name) {
            names.push(name);
        }
    }

    let mut breakdown: Vec<CategoryBreakdown> = names
        .into_iter()
        .map(|name| {
            let members: Vec<&ToolRecord> = tools
                .iter()
                .map(|tool| T::borrow(tool))
                .filter(|tool| tool.category == name)
                .collect();
            CategoryBreakdown {
                name: name.to_string(),
                slug: slugify(name),
                count: members.len(),
                sample_tools: members.iter().take(top_n).map(|t| t.name.clone()).collect(),
            }
        })
        .collect();

    breakdown.sort_by(|a, b| b.count.cmp(&a.count));
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, tool_count: usize, growth: f64) -> CategoryRecord {
        let mut category = CategoryRecord::new(name);
        category.tool_count = tool_count;
        category.growth = growth;
        category
    }

    #[test]
    fn test_aggregate_empty_is_zero() {
        let empty: Vec<CategoryRecord> = Vec::new();
        assert_eq!(
            aggregate(&empty),
            CategoryAggregate {
                count: 0,
                total_tool_count: 0,
                average_growth: 0
            }
        );
    }

    #[test]
    fn test_aggregate_rounds_mean() {
        let categories = vec![category("A", 3, 10.0), category("B", 5, 15.0)];
        let summary = aggregate(&categories);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.total_tool_count, 8);
        assert_eq!(summary.average_growth, 13);
    }

    #[test]
    fn test_aggregate_rounds_negative_half_up() {
        let categories = vec![category("A", 0, -5.0), category("B", 0, 0.0)];
        assert_eq!(aggregate(&categories).average_growth, -2);
    }

    #[test]
    fn test_derive_ignores_stale_count() {
        let categories = vec![category("Code Generation", 42, 0.0), category("Orphan", 7, 0.0)];
        let tools = vec![
            ToolRecord::new("copilot", "GitHub Copilot", "Code Generation"),
            ToolRecord::new("cursor", "Cursor", "Code Generation"),
            ToolRecord::new("gpt-4", "GPT-4", "Large Language Models"),
            ToolRecord::new("tabnine", "Tabnine", "Code Generation"),
        ];

        let derived = derive_category_tool_count(&categories, &tools);
        assert_eq!(derived[0].tool_count, 3);
        assert_eq!(derived[1].tool_count, 0);
        // source untouched
        assert_eq!(categories[0].tool_count, 42);
    }

    #[test]
    fn test_tool_statistics() {
        let mut free = ToolRecord::new("a", "A", "X");
        free.pricing = "Free".into();
        let tools = vec![free, ToolRecord::new("b", "B", "X"), ToolRecord::new("c", "C", "Y")];

        let stats = tool_statistics(&tools);
        assert_eq!(stats.total_tools, 3);
        assert_eq!(stats.total_categories, 2);
        assert_eq!(stats.free_tools, 1);
    }

    #[test]
    fn test_breakdown_orders_by_count() {
        let categories = vec![category("Quiet", 0, 0.0), category("Busy Corner", 0, 0.0)];
        let tools = vec![
            ToolRecord::new("a", "A", "Busy Corner"),
            ToolRecord::new("b", "B", "Busy Corner"),
            ToolRecord::new("c", "C", "Quiet"),
            ToolRecord::new("d", "D", "Busy Corner"),
        ];

        let breakdown = category_breakdown(&categories, &tools, 2);
        assert_eq!(breakdown[0].name, "Busy Corner");
        assert_eq!(breakdown[0].slug, "busy-corner");
        assert_eq!(breakdown[0].count, 3);
        assert_eq!(breakdown[0].sample_tools, vec!["A", "B"]);
        assert_eq!(breakdown[1].count, 1);
    }

    #[test]
    fn test_statistics_over_borrowed_tools() {
        let mut free = ToolRecord::new("a", "A", "X");
        free.free_trial_available = true;
        let owned = vec![free, ToolRecord::new("b", "B", "X")];
        let borrowed: Vec<&ToolRecord> = owned.iter().collect();

        assert_eq!(tool_statistics(&borrowed), tool_statistics(&owned));
        assert_eq!(tool_statistics(&borrowed).free_tools, 1);
    }

    #[test]
    fn test_breakdown_keeps_tools_in_unknown_categories() {
        let categories = vec![category("Design Tools", 0, 0.0), category("Unused", 0, 0.0)];
        let tools = vec![
            ToolRecord::new("a", "A", "Design Tools"),
            ToolRecord::new("b", "B", "Specialized Tools"),
            ToolRecord::new("c", "C", "Specialized Tools"),
            ToolRecord::new("d", "D", "Lab Notes"),
        ];

        let breakdown = category_breakdown(&categories, &tools, 3);
        let rows: Vec<(&str, usize)> = breakdown.iter().map(|b| (b.name.as_str(), b.count)).collect();
        assert_eq!(
            rows,
            vec![("Specialized Tools", 2), ("Design Tools", 1), ("Lab Notes", 1), ("Unused", 0)]
        );
        assert_eq!(breakdown[0].slug, "specialized-tools");
        assert_eq!(breakdown.iter().map(|b| b.count).sum::<usize>(), tools.len());
    }
}
