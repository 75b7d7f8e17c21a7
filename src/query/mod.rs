//! Catalog query engine.
//!
//! Pure functions over borrowed record slices. Nothing here mutates its
//! input, keeps state between calls, logs, or records metrics; callers that
//! want observability wrap these calls (see [`crate::state::Directory`]).

pub mod aggregate;
pub mod filter;
pub mod magnitude;
pub mod record;
pub mod search;
pub mod sort;
pub mod spec;

pub use aggregate::{
    aggregate, category_breakdown, derive_category_tool_count, tool_statistics,
    CategoryAggregate, CategoryBreakdown, ToolStatistics,
};
pub use filter::{filter_all, filter_by_predicate, Predicate};
pub use magnitude::{digits_only, expand_magnitude};
pub use record::Record;
pub use search::search;
pub use sort::{sort, SortKey, SortOrder, SortValue};
pub use spec::{paginate, run_query, Page, QuerySpec};
