//! The seam between catalog records and the query engine.
//!
//! Every engine operation is generic over [`Record`], so the same search,
//! filter and sort code serves tools and categories. References to records
//! are records too, which lets stages chain over `Vec<&T>` without cloning.

use crate::catalog::{CategoryRecord, ToolRecord};
use crate::query::filter::Predicate;
use crate::query::magnitude::{digits_only, expand_magnitude};
use crate::query::sort::{SortKey, SortValue};

pub trait Record {
    /// Human-readable record kind used in error messages.
    const KIND: &'static str;

    /// Fields a free-text search looks at.
    fn search_fields(&self) -> Vec<&str>;

    fn supports_sort(key: SortKey) -> bool;

    /// Only called for keys where [`Record::supports_sort`] holds.
    fn sort_value(&self, key: SortKey) -> SortValue;

    fn supports_predicate(predicate: &Predicate) -> bool;

    /// Only called for predicates where [`Record::supports_predicate`] holds.
    fn matches(&self, predicate: &Predicate) -> bool;
}

impl<T: Record + ?Sized> Record for &T {
    const KIND: &'static str = T::KIND;

    fn search_fields(&self) -> Vec<&str> {
        (**self).search_fields()
    }

    fn supports_sort(key: SortKey) -> bool {
        T::supports_sort(key)
    }

    fn sort_value(&self, key: SortKey) -> SortValue {
        (**self).sort_value(key)
    }

    fn supports_predicate(predicate: &Predicate) -> bool {
        T::supports_predicate(predicate)
    }

    fn matches(&self, predicate: &Predicate) -> bool {
        (**self).matches(predicate)
    }
}

fn has_tag(tags: &[String], wanted: &str) -> bool {
    let wanted = wanted.to_lowercase();
    tags.iter().any(|tag| tag.to_lowercase() == wanted)
}

/// Any-of match. No wanted tags means no constraint.
fn has_any_tag(tags: &[String], wanted: &[String]) -> bool {
    wanted.is_empty() || wanted.iter().any(|w| has_tag(tags, w))
}

impl Record for ToolRecord {
    const KIND: &'static str = "tool";

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.company.as_str(),
            self.description.as_str(),
        ];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn supports_sort(key: SortKey) -> bool {
        matches!(
            key,
            SortKey::Name
                | SortKey::Alphabetical
                | SortKey::Popularity
                | SortKey::LastUpdated
                | SortKey::ReleaseDate
                | SortKey::UserCount
                | SortKey::UserMagnitude
                | SortKey::GithubStars
        )
    }

    fn sort_value(&self, key: SortKey) -> SortValue {
        match key {
            SortKey::Name | SortKey::Alphabetical => SortValue::text(&self.name),
            SortKey::Popularity => SortValue::Number(self.popularity.trending_score),
            SortKey::LastUpdated => SortValue::date(&self.last_updated),
            SortKey::ReleaseDate => SortValue::date(&self.release_date),
            SortKey::UserCount => SortValue::Integer(digits_only(&self.user_count)),
            SortKey::UserMagnitude => SortValue::Integer(expand_magnitude(&self.user_count)),
            SortKey::GithubStars => {
                SortValue::Integer(self.popularity.github_stars.unwrap_or(0))
            }
            SortKey::ToolCount | SortKey::Growth => SortValue::Absent,
        }
    }

    fn supports_predicate(predicate: &Predicate) -> bool {
        matches!(
            predicate,
            Predicate::All
                | Predicate::Complexity { .. }
                | Predicate::Category { .. }
                | Predicate::Tag { .. }
                | Predicate::Tags { .. }
                | Predicate::Status { .. }
        )
    }

    fn matches(&self, predicate: &Predicate) -> bool {
        match predicate {
            Predicate::All => true,
            Predicate::Complexity { value } => self.difficulty == Some(*value),
            Predicate::Category { name } => &self.category == name,
            Predicate::Tag { value } => has_tag(&self.tags, value),
            Predicate::Tags { values } => has_any_tag(&self.tags, values),
            Predicate::Status { value } => self.status == *value,
            Predicate::Featured | Predicate::GrowthAbove { .. } => false,
        }
    }
}

impl Record for CategoryRecord {
    const KIND: &'static str = "category";

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.description.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn supports_sort(key: SortKey) -> bool {
        matches!(
            key,
            SortKey::Name
                | SortKey::Alphabetical
                | SortKey::Popularity
                | SortKey::ToolCount
                | SortKey::Growth
        )
    }

    fn sort_value(&self, key: SortKey) -> SortValue {
        match key {
            SortKey::Name | SortKey::Alphabetical => SortValue::text(&self.name),
            SortKey::Popularity => SortValue::Number(self.popularity),
            SortKey::ToolCount => SortValue::Integer(self.tool_count as u64),
            SortKey::Growth => SortValue::Number(self.growth),
            _ => SortValue::Absent,
        }
    }

    fn supports_predicate(predicate: &Predicate) -> bool {
        matches!(
            predicate,
            Predicate::All
                | Predicate::Featured
                | Predicate::GrowthAbove { .. }
                | Predicate::Complexity { .. }
                | Predicate::Tag { .. }
                | Predicate::Tags { .. }
        )
    }

    fn matches(&self, predicate: &Predicate) -> bool {
        match predicate {
            Predicate::All => true,
            Predicate::Featured => self.featured,
            Predicate::GrowthAbove { threshold } => self.growth > *threshold,
            Predicate::Complexity { value } => self.complexity == *value,
            Predicate::Tag { value } => has_tag(&self.tags, value),
            Predicate::Tags { values } => has_any_tag(&self.tags, values),
            Predicate::Category { .. } | Predicate::Status { .. } => false,
        }
    }
}
