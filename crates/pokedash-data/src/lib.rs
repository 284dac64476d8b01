//! Dataset loading and aggregation for Pokedash dashboards.
//!
//! The loader reads the CSV resource into [`Record`] rows, rejecting
//! malformed or non-finite numeric fields up front so downstream scale
//! domains never see them. Aggregation derives per-category counts and
//! stat means; both are recomputed per render and never persisted.

mod aggregate;
mod error;
mod loader;
mod record;

pub use aggregate::{
    aggregate_by_category, category_counts, distinct_categories, filter_records, CategoryAggregate,
    CategoryCount, Filter,
};
pub use error::DataError;
pub use loader::{load_records, read_records};
pub use record::{Record, StatAxis};
