//! Record types for the tool catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which directory a tool belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    #[default]
    Ai,
    WebDev,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolStatus {
    #[default]
    Active,
    Beta,
    Preview,
    Deprecated,
    #[serde(rename = "Coming Soon")]
    ComingSoon,
    Stable,
}

impl ToolStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Beta => "Beta",
            Self::Preview => "Preview",
            Self::Deprecated => "Deprecated",
            Self::ComingSoon => "Coming Soon",
            Self::Stable => "Stable",
        }
    }
}

/// Skill level a category or tool targets. Parsed case-insensitively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Complexity {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    #[default]
    Mixed,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
            Self::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Complexity {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for Complexity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            "expert" => Ok(Self::Expert),
            "mixed" => Ok(Self::Mixed),
            other => Err(format!("unknown complexity '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Popularity {
    /// 0-100
    pub trending_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_stars: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_downloads: Option<u64>,
}

/// Percentages in the 0-100 range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    pub accuracy: f64,
    pub speed: f64,
    pub reliability: f64,
}

/// One catalog entry: an AI tool or a web-development tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolRecord {
    pub id: String,
    pub name: String,
    /// Owning organization. Web-dev catalogs call this `creator`.
    #[serde(alias = "creator", default)]
    pub company: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub pricing: String,
    #[serde(default)]
    pub popularity: Popularity,
    /// Display magnitude such as `"100M+"`. Not numeric; see `query::magnitude`.
    #[serde(default)]
    pub user_count: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<Performance>,
    #[serde(default)]
    pub kind: ToolKind,
    #[serde(default)]
    pub status: ToolStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Complexity>,
    #[serde(default)]
    pub free_trial_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_website: Option<String>,
}

impl ToolRecord {
    /// Minimal record with everything but the identity fields defaulted.
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            company: String::new(),
            category: category.into(),
            sub_category: None,
            tags: Vec::new(),
            description: String::new(),
            long_description: String::new(),
            pricing: String::new(),
            popularity: Popularity::default(),
            user_count: String::new(),
            release_date: String::new(),
            last_updated: String::new(),
            performance: None,
            kind: ToolKind::Ai,
            status: ToolStatus::Active,
            difficulty: None,
            free_trial_available: false,
            official_website: None,
        }
    }

    pub fn is_free(&self) -> bool {
        self.free_trial_available || self.pricing.to_lowercase().contains("free")
    }
}

/// A grouping of tools. `tool_count` is derived; see
/// [`crate::query::derive_category_tool_count`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tool_count: usize,
    #[serde(default)]
    pub growth: f64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub complexity: Complexity,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

impl CategoryRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            tool_count: 0,
            growth: 0.0,
            popularity: 0.0,
            complexity: Complexity::Mixed,
            tags: Vec::new(),
            featured: false,
        }
    }

    /// URL slug: lowercase, whitespace runs collapsed to `-`.
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }
}

/// Lowercase and replace every whitespace run with one `-`. Leading and
/// trailing runs become `-` as well; nothing is trimmed.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.push(c);
            in_space = false;
        }
    }
    slug
}
