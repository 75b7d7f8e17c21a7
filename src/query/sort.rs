use crate::error::{CatalogError, Result};
use crate::query::record::Record;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Name,
    Alphabetical,
    Popularity,
    ToolCount,
    Growth,
    LastUpdated,
    ReleaseDate,
    /// Digit-stripped user count. Approximate; see `query::magnitude`.
    UserCount,
    /// User count scaled by its K/M/B suffix.
    UserMagnitude,
    GithubStars,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Alphabetical => "alphabetical",
            Self::Popularity => "popularity",
            Self::ToolCount => "toolCount",
            Self::Growth => "growth",
            Self::LastUpdated => "lastUpdated",
            Self::ReleaseDate => "releaseDate",
            Self::UserCount => "userCount",
            Self::UserMagnitude => "userMagnitude",
            Self::GithubStars => "githubStars",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "name" => Ok(Self::Name),
            "alphabetical" => Ok(Self::Alphabetical),
            "popularity" => Ok(Self::Popularity),
            "toolCount" | "tool_count" => Ok(Self::ToolCount),
            "growth" => Ok(Self::Growth),
            "lastUpdated" | "last_updated" => Ok(Self::LastUpdated),
            "releaseDate" | "release_date" => Ok(Self::ReleaseDate),
            "userCount" | "user_count" => Ok(Self::UserCount),
            "userMagnitude" | "user_magnitude" => Ok(Self::UserMagnitude),
            "githubStars" | "github_stars" => Ok(Self::GithubStars),
            other => Err(CatalogError::UnknownSortKey(other.to_string())),
        }
    }
}

impl Serialize for SortKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            _ => Err(CatalogError::UnknownSortOrder(s.to_string())),
        }
    }
}

impl Serialize for SortOrder {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SortOrder {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A record's value under one sort key.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    /// Collation levels: base letters, then accents, then case.
    Text {
        primary: String,
        secondary: String,
        raw: String,
    },
    Number(f64),
    Integer(u64),
    /// `None` for dates that did not parse; they sort first.
    Date(Option<NaiveDate>),
    Absent,
}

impl SortValue {
    /// Collation key in the manner of a root-locale compare: accents and
    /// case only break ties between otherwise equal text.
    pub fn text(raw: &str) -> Self {
        let secondary = raw.nfd().collect::<String>().to_lowercase();
        let primary = secondary.chars().filter(|c| !is_combining_mark(*c)).collect();
        Self::Text {
            primary,
            secondary,
            raw: raw.to_string(),
        }
    }

    pub fn date(raw: &str) -> Self {
        Self::Date(parse_date(raw))
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (
                Self::Text {
                    primary: a,
                    secondary: sa,
                    raw: ra,
                },
                Self::Text {
                    primary: b,
                    secondary: sb,
                    raw: rb,
                },
            ) => {
                // lowercase before uppercase on otherwise equal text
                a.cmp(b).then_with(|| sa.cmp(sb)).then_with(|| rb.cmp(ra))
            }
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Return a new, stably sorted copy of `collection`.
///
/// Descending order reverses the ascending comparator, so records with equal
/// keys keep their input order in both directions.
///
/// # Errors
/// `UnsupportedSortKey` when the record type does not carry `key`.
pub fn sort<R: Record + Clone>(collection: &[R], key: SortKey, order: SortOrder) -> Result<Vec<R>> {
    if !R::supports_sort(key) {
        return Err(CatalogError::UnsupportedSortKey {
            key: key.as_str(),
            record: R::KIND,
        });
    }

    Ok(sort_supported(collection, key, order))
}

/// Sort on a key the caller already knows `R` supports.
pub(crate) fn sort_supported<R: Record + Clone>(
    collection: &[R],
    key: SortKey,
    order: SortOrder,
) -> Vec<R> {
    let mut keyed: Vec<(SortValue, &R)> = collection
        .iter()
        .map(|record| (record.sort_value(key), record))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let ascending = a.compare(b);
        match order {
            SortOrder::Asc => ascending,
            SortOrder::Desc => ascending.reverse(),
        }
    });

    keyed.into_iter().map(|(_, record)| record.clone()).collect()
}
