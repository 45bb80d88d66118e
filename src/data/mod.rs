//! Site dataset: records, annotation, filtering, loading, and summaries.

pub mod annotate;
pub mod filter;
pub mod geojson;
pub mod record;
pub mod summary;
