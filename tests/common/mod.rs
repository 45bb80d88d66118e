//! Shared test fixtures for integration tests.

use windfarm_view::data::annotate::{ZoneMode, annotate_years};
use windfarm_view::data::geojson;
use windfarm_view::data::record::SiteRecord;

/// 2000-03-01T00:00:00Z in epoch milliseconds.
pub const MARCH_2000_MS: i64 = 951_868_800_000;
/// 2005-06-15T00:00:00Z in epoch milliseconds.
pub const JUNE_2005_MS: i64 = 1_118_793_600_000;
/// 2010-09-01T00:00:00Z in epoch milliseconds.
pub const SEPT_2010_MS: i64 = 1_283_299_200_000;

/// A small GeoJSON dataset in the wind-farm property schema: three dated
/// sites, one with an unparseable timestamp, and one non-point feature.
pub fn fixture_geojson() -> String {
    format!(
        r#"{{
  "type": "FeatureCollection",
  "features": [
    {{
      "type": "Feature",
      "properties": {{
        "Site_Name": "Early Farm",
        "Installed_Capacity__MWelec_": 12.5,
        "Operational": {MARCH_2000_MS}
      }},
      "geometry": {{ "type": "Point", "coordinates": [-3.5, 55.2] }}
    }},
    {{
      "type": "Feature",
      "properties": {{
        "Site_Name": "Mid Farm",
        "Installed_Capacity__MWelec_": 40.0,
        "Operational": {JUNE_2005_MS}
      }},
      "geometry": {{ "type": "Point", "coordinates": [-2.1, 54.8] }}
    }},
    {{
      "type": "Feature",
      "properties": {{
        "Site_Name": "Late Farm",
        "Installed_Capacity__MWelec_": 539.0,
        "Operational": {SEPT_2010_MS}
      }},
      "geometry": {{ "type": "Point", "coordinates": [-4.28, 55.68] }}
    }},
    {{
      "type": "Feature",
      "properties": {{
        "Site_Name": "Undated Farm",
        "Operational": "pending"
      }},
      "geometry": {{ "type": "Point", "coordinates": [-1.0, 53.0] }}
    }},
    {{
      "type": "Feature",
      "properties": {{ "Site_Name": "Cable Route" }},
      "geometry": {{ "type": "LineString", "coordinates": [[0, 0], [1, 1]] }}
    }}
  ]
}}"#
    )
}

/// Loads and annotates the fixture dataset in UTC.
pub fn annotated_fixture() -> (Vec<SiteRecord>, usize) {
    let report = geojson::parse_str(&fixture_geojson()).expect("fixture should parse");
    let mut sites = report.sites;
    annotate_years(&mut sites, ZoneMode::Utc);
    (sites, report.skipped_geometry)
}
