//! Aggregate summary over an annotated site collection.

use std::fmt;

use serde::Serialize;

use crate::data::record::SiteRecord;

/// Dataset-level figures shown in the headless report and the API.
#[derive(Debug, Clone, Serialize)]
pub struct SiteSummary {
    /// Total number of loaded sites.
    pub site_count: usize,
    /// Sites with a known operational year.
    pub with_year_count: usize,
    /// Earliest known operational year.
    pub earliest_year: Option<i32>,
    /// Latest known operational year.
    pub latest_year: Option<i32>,
    /// Sites with a known installed capacity.
    pub with_capacity_count: usize,
    /// Sum of known installed capacities (MW).
    pub total_capacity_mw: f64,
}

impl SiteSummary {
    /// Computes the summary from an annotated record collection.
    pub fn from_records(records: &[SiteRecord]) -> Self {
        let earliest_year = records.iter().filter_map(|r| r.operational_year).min();
        let latest_year = records.iter().filter_map(|r| r.operational_year).max();

        let capacities: Vec<f64> = records.iter().filter_map(|r| r.capacity_mw).collect();

        Self {
            site_count: records.len(),
            with_year_count: records
                .iter()
                .filter(|r| r.operational_year.is_some())
                .count(),
            earliest_year,
            latest_year,
            with_capacity_count: capacities.len(),
            total_capacity_mw: capacities.iter().sum(),
        }
    }
}

impl fmt::Display for SiteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Site Summary ===")?;
        writeln!(f, "Sites:                {}", self.site_count)?;
        writeln!(
            f,
            "Known year:           {} ({} unknown)",
            self.with_year_count,
            self.site_count - self.with_year_count
        )?;
        match (self.earliest_year, self.latest_year) {
            (Some(lo), Some(hi)) => writeln!(f, "Year range:           {lo}–{hi}")?,
            _ => writeln!(f, "Year range:           n/a")?,
        }
        writeln!(
            f,
            "Total capacity:       {:.1} MW across {} sites",
            self.total_capacity_mw, self.with_capacity_count
        )
    }
}
