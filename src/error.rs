use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("Unknown sort order: {0} (expected 'asc' or 'desc')")]
    UnknownSortOrder(String),

    #[error("Sort key '{key}' is not available on {record} records")]
    UnsupportedSortKey {
        key: &'static str,
        record: &'static str,
    },

    #[error("Predicate '{predicate}' is not available on {record} records")]
    UnsupportedPredicate {
        predicate: &'static str,
        record: &'static str,
    },

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Catalog ingestion failed: {0}")]
    Ingestion(String),

    #[error("Preference store error: {0}")]
    Store(String),
}

impl CatalogError {
    /// Structural errors are caller mistakes in the query itself, as opposed
    /// to lookups or I/O that failed.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            CatalogError::UnknownSortKey(_)
                | CatalogError::UnknownSortOrder(_)
                | CatalogError::UnsupportedSortKey { .. }
                | CatalogError::UnsupportedPredicate { .. }
                | CatalogError::InvalidQuery(_)
        )
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::InvalidQuery(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
