//! Ingestion of external catalog documents.
//!
//! Converts JSON catalog files into the record types the query engine reads,
//! tolerating individual bad records.

pub mod loader;

pub use loader::{ingest_catalog, load_catalog_file, IngestResult, IngestedCatalog};
