use crate::catalog::{Complexity, ToolStatus};
use crate::error::{CatalogError, Result};
use crate::query::record::Record;
use serde::{Deserialize, Serialize};

/// A single filter condition. Serialized with a `kind` tag, e.g.
/// `{"kind": "growthAbove", "threshold": 50}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Predicate {
    All,
    Featured,
    GrowthAbove { threshold: f64 },
    Complexity { value: Complexity },
    Category { name: String },
    Tag { value: String },
    /// Any of the listed tags, case-insensitive.
    Tags { values: Vec<String> },
    Status { value: ToolStatus },
}

impl Predicate {
    pub fn name(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Featured => "featured",
            Self::GrowthAbove { .. } => "growthAbove",
            Self::Complexity { .. } => "complexity",
            Self::Category { .. } => "category",
            Self::Tag { .. } => "tag",
            Self::Tags { .. } => "tags",
            Self::Status { .. } => "status",
        }
    }
}

/// Keep the records that satisfy `predicate`, in their original order.
///
/// # Errors
/// `UnsupportedPredicate` when the record type has no field the predicate
/// can test, even if the collection is empty.
pub fn filter_by_predicate<R: Record + Clone>(
    collection: &[R],
    predicate: &Predicate,
) -> Result<Vec<R>> {
    if !R::supports_predicate(predicate) {
        return Err(CatalogError::UnsupportedPredicate {
            predicate: predicate.name(),
            record: R::KIND,
        });
    }

    if matches!(predicate, Predicate::All) {
        return Ok(collection.to_vec());
    }

    Ok(collection
        .iter()
        .filter(|record| record.matches(predicate))
        .cloned()
        .collect())
}

/// Apply each predicate in turn (logical AND).
pub fn filter_all<R: Record + Clone>(collection: &[R], predicates: &[Predicate]) -> Result<Vec<R>> {
    let mut current = collection.to_vec();
    for predicate in predicates {
        current = filter_by_predicate(&current, predicate)?;
    }
    Ok(current)
}
