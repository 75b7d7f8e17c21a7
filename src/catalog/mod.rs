//! The data source: tool and category records plus read-only access to them.

mod seed;
pub mod source;
pub mod types;

pub use source::{find_category, Catalog, CatalogSource};
pub use types::{
    slugify, CategoryRecord, Complexity, Performance, Popularity, ToolKind, ToolRecord, ToolStatus,
};
