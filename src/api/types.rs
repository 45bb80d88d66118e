//! API response and query types.

use serde::{Deserialize, Serialize};

use crate::data::record::SiteRecord;

/// Single site as served by `/sites`.
#[derive(Debug, Serialize)]
pub struct SiteDto {
    /// Site name, `null` when unknown.
    pub name: Option<String>,
    /// Installed capacity in MW, `null` when unknown.
    pub capacity_mw: Option<f64>,
    /// Longitude in degrees.
    pub lon: f64,
    /// Latitude in degrees.
    pub lat: f64,
    /// Derived operational year, `null` when unknown.
    pub operational_year: Option<i32>,
}

impl From<&SiteRecord> for SiteDto {
    fn from(r: &SiteRecord) -> Self {
        Self {
            name: r.name.clone(),
            capacity_mw: r.capacity_mw,
            lon: r.lon,
            lat: r.lat,
            operational_year: r.operational_year,
        }
    }
}

/// Optional year-range query parameters for the sites endpoint.
#[derive(Debug, Deserialize)]
pub struct SitesQuery {
    /// Lowest operational year to include (inclusive).
    pub min_year: Option<i32>,
    /// Highest operational year to include (inclusive).
    pub max_year: Option<i32>,
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
