//! Toolshelf - catalog engine for browsing AI and web-development tools
//!
//! This library exposes the catalog records, the pure query engine (search,
//! filter, sort, aggregate, paginate), the preference store, and the
//! `Directory` service that ties them together for a presentation layer.

pub mod catalog;
pub mod config;
pub mod error;
pub mod ingestion;
pub mod preferences;
pub mod query;
pub mod state;

// Re-export key types for convenience
pub use catalog::{Catalog, CatalogSource, CategoryRecord, ToolRecord};
pub use config::Config;
pub use error::{CatalogError, Result};
pub use preferences::{FileStore, MarkBucket, MemoryStore, PreferenceStore, Preferences};
pub use query::{Page, Predicate, QuerySpec, Record, SortKey, SortOrder};
pub use state::{Directory, DirectoryRequest};
