//! Interactive viewer for wind-farm commissioning data.

#[cfg(feature = "api")]
pub mod api;
pub mod config;
/// Site records, year annotation, filtering, loading, and summaries.
pub mod data;
pub mod io;
#[cfg(feature = "tui")]
pub mod tui;
