//! Core site record type.

use std::fmt;

/// One wind-farm site as loaded from the dataset.
///
/// The `operational_year` field starts empty and is attached exactly once by
/// [`crate::data::annotate::annotate_years`]; it is a pure function of
/// `operational_ms`, so repeated annotation can never change it.
#[derive(Debug, Clone)]
pub struct SiteRecord {
    /// Site name, if present in the source data.
    pub name: Option<String>,
    /// Installed capacity in MW, if present.
    pub capacity_mw: Option<f64>,
    /// Operational timestamp as epoch milliseconds, if present and parseable.
    pub operational_ms: Option<i64>,
    /// Longitude in degrees.
    pub lon: f64,
    /// Latitude in degrees.
    pub lat: f64,
    /// Calendar year the site became operational, derived from
    /// `operational_ms`. `None` when the timestamp is missing or out of
    /// range.
    pub operational_year: Option<i32>,
}

impl SiteRecord {
    /// Creates an unannotated record.
    pub fn new(
        name: Option<String>,
        capacity_mw: Option<f64>,
        operational_ms: Option<i64>,
        lon: f64,
        lat: f64,
    ) -> Self {
        Self {
            name,
            capacity_mw,
            operational_ms,
            lon,
            lat,
            operational_year: None,
        }
    }

    /// Site name with the `N/A` display placeholder for missing values.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("N/A")
    }

    /// Capacity label with the `N/A` placeholder.
    pub fn display_capacity(&self) -> String {
        self.capacity_mw
            .map_or_else(|| "N/A".to_string(), |c| format!("{c:.1} MW"))
    }

    /// Year label with the `Unknown` placeholder.
    pub fn display_year(&self) -> String {
        self.operational_year
            .map_or_else(|| "Unknown".to_string(), |y| y.to_string())
    }
}

impl fmt::Display for SiteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<40} | {:>10} | since {:>7} | ({:>8.3}, {:>7.3})",
            self.display_name(),
            self.display_capacity(),
            self.display_year(),
            self.lon,
            self.lat,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_for_missing_fields() {
        let r = SiteRecord::new(None, None, None, -3.2, 55.0);
        assert_eq!(r.display_name(), "N/A");
        assert_eq!(r.display_capacity(), "N/A");
        assert_eq!(r.display_year(), "Unknown");
    }

    #[test]
    fn display_includes_name_capacity_year() {
        let mut r = SiteRecord::new(
            Some("Whitelee".to_string()),
            Some(539.0),
            Some(1_230_768_000_000),
            -4.28,
            55.68,
        );
        r.operational_year = Some(2009);
        let s = format!("{r}");
        assert!(s.contains("Whitelee"));
        assert!(s.contains("539.0 MW"));
        assert!(s.contains("2009"));
    }

    #[test]
    fn new_record_has_no_year() {
        let r = SiteRecord::new(Some("x".into()), None, Some(0), 0.0, 0.0);
        assert!(r.operational_year.is_none());
    }
}
