//! GeoJSON dataset loading.
//!
//! Consumes a `FeatureCollection` of point features using the wind-farm
//! dataset's property schema (`Site_Name`, `Installed_Capacity__MWelec_`,
//! `Operational`). Property values are tolerated in several shapes: missing
//! fields become `None`, timestamps may be epoch numbers or ISO strings.

use std::fmt;
use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDate};
use serde_json::Value;

use crate::data::record::SiteRecord;

/// Property key holding the site name.
const PROP_NAME: &str = "Site_Name";
/// Property key holding the installed capacity in MW.
const PROP_CAPACITY: &str = "Installed_Capacity__MWelec_";
/// Property key holding the operational timestamp.
const PROP_OPERATIONAL: &str = "Operational";

/// Epoch values at or above this magnitude are milliseconds, below it
/// seconds. 1e11 ms is mid-1973; 1e11 s is the year 5138.
const EPOCH_MILLIS_CUTOFF: i64 = 100_000_000_000;

/// Outcome of a dataset load.
#[derive(Debug)]
pub struct LoadReport {
    /// Parsed site records, unannotated.
    pub sites: Vec<SiteRecord>,
    /// Features skipped because they carry no usable point geometry.
    pub skipped_geometry: usize,
}

/// Dataset load failure with source context.
#[derive(Debug)]
pub struct LoadError {
    /// What was being loaded (path or `"geojson"`).
    pub context: String,
    /// Human-readable failure description.
    pub message: String,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "load error: {} — {}", self.context, self.message)
    }
}

/// Loads and parses a GeoJSON file.
///
/// # Errors
///
/// Returns a `LoadError` if the file cannot be read or is not a GeoJSON
/// `FeatureCollection`.
pub fn load_file(path: &Path) -> Result<LoadReport, LoadError> {
    let content = fs::read_to_string(path).map_err(|e| LoadError {
        context: path.display().to_string(),
        message: format!("cannot read: {e}"),
    })?;
    parse_str(&content).map_err(|e| LoadError {
        context: path.display().to_string(),
        message: e.message,
    })
}

/// Parses a GeoJSON `FeatureCollection` string into site records.
///
/// Features without point geometry are skipped and counted; all other
/// property problems degrade to `None` fields on a retained record.
///
/// # Errors
///
/// Returns a `LoadError` if the input is not valid JSON or has no
/// `features` array.
pub fn parse_str(s: &str) -> Result<LoadReport, LoadError> {
    let root: Value = serde_json::from_str(s).map_err(|e| LoadError {
        context: "geojson".to_string(),
        message: format!("invalid JSON: {e}"),
    })?;

    let features = root
        .get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| LoadError {
            context: "geojson".to_string(),
            message: "expected a FeatureCollection with a `features` array".to_string(),
        })?;

    let mut sites = Vec::with_capacity(features.len());
    let mut skipped_geometry = 0;
    for feature in features {
        match parse_feature(feature) {
            Some(site) => sites.push(site),
            None => skipped_geometry += 1,
        }
    }

    Ok(LoadReport {
        sites,
        skipped_geometry,
    })
}

/// Parses one feature; `None` when it has no point geometry.
fn parse_feature(feature: &Value) -> Option<SiteRecord> {
    let coords = feature
        .get("geometry")
        .filter(|g| g.get("type").and_then(Value::as_str) == Some("Point"))
        .and_then(|g| g.get("coordinates"))
        .and_then(Value::as_array)?;
    let lon = coords.first().and_then(Value::as_f64)?;
    let lat = coords.get(1).and_then(Value::as_f64)?;

    let props = feature.get("properties");
    let name = props
        .and_then(|p| p.get(PROP_NAME))
        .and_then(Value::as_str)
        .map(str::to_string);
    let capacity_mw = props.and_then(|p| p.get(PROP_CAPACITY)).and_then(parse_number);
    let operational_ms = props
        .and_then(|p| p.get(PROP_OPERATIONAL))
        .and_then(parse_timestamp);

    Some(SiteRecord::new(name, capacity_mw, operational_ms, lon, lat))
}

/// Accepts numeric values directly or as numeric strings.
fn parse_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Parses a timestamp property into epoch milliseconds.
///
/// Numbers are epoch values (seconds or milliseconds, by magnitude);
/// strings are tried as RFC 3339, then `YYYY-MM-DD`, then a numeric epoch.
fn parse_timestamp(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_f64().map(epoch_to_millis),
        Value::String(s) => {
            let s = s.trim();
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                return Some(dt.timestamp_millis());
            }
            if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
                return date
                    .and_hms_opt(0, 0, 0)
                    .map(|dt| dt.and_utc().timestamp_millis());
            }
            s.parse::<f64>().ok().map(epoch_to_millis)
        }
        _ => None,
    }
}

/// Normalizes an epoch number to milliseconds.
fn epoch_to_millis(n: f64) -> i64 {
    let n = n as i64;
    if n.abs() < EPOCH_MILLIS_CUTOFF {
        n.saturating_mul(1000)
    } else {
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(features: &str) -> String {
        format!(r#"{{"type":"FeatureCollection","features":[{features}]}}"#)
    }

    fn point_feature(props: &str, coords: &str) -> String {
        format!(
            r#"{{"type":"Feature","properties":{{{props}}},"geometry":{{"type":"Point","coordinates":{coords}}}}}"#
        )
    }

    #[test]
    fn parses_full_feature() {
        let feature = point_feature(
            r#""Site_Name":"Whitelee","Installed_Capacity__MWelec_":539.0,"Operational":1230768000000"#,
            "[-4.28, 55.68]",
        );
        let report = parse_str(&collection(&feature)).expect("should parse");
        assert_eq!(report.sites.len(), 1);
        assert_eq!(report.skipped_geometry, 0);
        let site = &report.sites[0];
        assert_eq!(site.name.as_deref(), Some("Whitelee"));
        assert_eq!(site.capacity_mw, Some(539.0));
        assert_eq!(site.operational_ms, Some(1_230_768_000_000));
        assert_eq!(site.lon, -4.28);
        assert_eq!(site.lat, 55.68);
    }

    #[test]
    fn missing_properties_become_none() {
        let feature = point_feature("", "[0.0, 51.0]");
        let report = parse_str(&collection(&feature)).expect("should parse");
        let site = &report.sites[0];
        assert!(site.name.is_none());
        assert!(site.capacity_mw.is_none());
        assert!(site.operational_ms.is_none());
    }

    #[test]
    fn unparseable_timestamp_retains_record() {
        let feature = point_feature(
            r#""Site_Name":"Mystery","Operational":"not a date""#,
            "[1.0, 52.0]",
        );
        let report = parse_str(&collection(&feature)).expect("should parse");
        assert_eq!(report.sites.len(), 1);
        assert!(report.sites[0].operational_ms.is_none());
    }

    #[test]
    fn epoch_seconds_are_promoted_to_millis() {
        let feature = point_feature(r#""Operational":1118793600"#, "[0.0, 0.0]");
        let report = parse_str(&collection(&feature)).expect("should parse");
        assert_eq!(report.sites[0].operational_ms, Some(1_118_793_600_000));
    }

    #[test]
    fn iso_date_string_parses() {
        let feature = point_feature(r#""Operational":"2005-06-15""#, "[0.0, 0.0]");
        let report = parse_str(&collection(&feature)).expect("should parse");
        assert_eq!(report.sites[0].operational_ms, Some(1_118_793_600_000));
    }

    #[test]
    fn rfc3339_string_parses() {
        let feature = point_feature(r#""Operational":"2005-06-15T12:00:00Z""#, "[0.0, 0.0]");
        let report = parse_str(&collection(&feature)).expect("should parse");
        assert_eq!(report.sites[0].operational_ms, Some(1_118_836_800_000));
    }

    #[test]
    fn capacity_as_string_parses() {
        let feature = point_feature(r#""Installed_Capacity__MWelec_":"12.5""#, "[0.0, 0.0]");
        let report = parse_str(&collection(&feature)).expect("should parse");
        assert_eq!(report.sites[0].capacity_mw, Some(12.5));
    }

    #[test]
    fn non_point_geometry_is_skipped_and_counted() {
        let line = r#"{"type":"Feature","properties":{},"geometry":{"type":"LineString","coordinates":[[0,0],[1,1]]}}"#;
        let point = point_feature("", "[0.0, 0.0]");
        let report = parse_str(&collection(&format!("{line},{point}"))).expect("should parse");
        assert_eq!(report.sites.len(), 1);
        assert_eq!(report.skipped_geometry, 1);
    }

    #[test]
    fn empty_collection_is_valid() {
        let report = parse_str(&collection("")).expect("should parse");
        assert!(report.sites.is_empty());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(parse_str("{not json").is_err());
    }

    #[test]
    fn missing_features_array_is_an_error() {
        let err = parse_str(r#"{"type":"FeatureCollection"}"#).unwrap_err();
        assert!(err.message.contains("features"));
    }
}
