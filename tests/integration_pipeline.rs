//! End-to-end tests for the load → annotate → filter → summarize pipeline.

mod common;

use windfarm_view::data::annotate::{ZoneMode, annotate_years};
use windfarm_view::data::filter::{YearFilter, year_filter};
use windfarm_view::data::geojson;
use windfarm_view::data::summary::SiteSummary;
use windfarm_view::io::export::write_csv;

#[test]
fn full_load_retains_every_point_feature() {
    let (sites, skipped) = common::annotated_fixture();
    // four point features kept, the line string skipped
    assert_eq!(sites.len(), 4);
    assert_eq!(skipped, 1);
}

#[test]
fn annotation_derives_expected_years() {
    let (sites, _) = common::annotated_fixture();
    let years: Vec<Option<i32>> = sites.iter().map(|r| r.operational_year).collect();
    assert_eq!(
        years,
        vec![Some(2000), Some(2005), Some(2010), None]
    );
}

#[test]
fn annotation_is_idempotent_across_reannotation() {
    let (mut sites, _) = common::annotated_fixture();
    let before: Vec<Option<i32>> = sites.iter().map(|r| r.operational_year).collect();
    annotate_years(&mut sites, ZoneMode::Utc);
    let after: Vec<Option<i32>> = sites.iter().map(|r| r.operational_year).collect();
    assert_eq!(before, after);
}

#[test]
fn threshold_2005_keeps_exactly_the_earlier_sites() {
    let (sites, _) = common::annotated_fixture();
    let pred = year_filter(2005);
    let names: Vec<&str> = sites
        .iter()
        .filter(|r| pred(r))
        .map(|r| r.display_name())
        .collect();
    assert_eq!(names, vec!["Early Farm", "Mid Farm"]);
}

#[test]
fn undated_site_is_retained_but_never_filtered_in() {
    let (sites, _) = common::annotated_fixture();
    let undated = sites
        .iter()
        .find(|r| r.display_name() == "Undated Farm")
        .expect("undated site should be retained");
    assert_eq!(undated.operational_year, None);
    assert!(!year_filter(9999)(undated));
}

#[test]
fn max_year_threshold_includes_all_dated_sites() {
    let (sites, _) = common::annotated_fixture();
    let max_year = sites
        .iter()
        .filter_map(|r| r.operational_year)
        .max()
        .expect("fixture has dated sites");
    let pred = year_filter(max_year);
    assert_eq!(sites.iter().filter(|r| pred(r)).count(), 3);
}

#[test]
fn unfiltered_view_shows_every_site() {
    let (sites, _) = common::annotated_fixture();
    let filter = YearFilter::default();
    assert_eq!(filter.visible_indices(&sites).len(), sites.len());
}

#[test]
fn filter_monotonicity_over_fixture() {
    let (sites, _) = common::annotated_fixture();
    let mut previous = 0;
    for y in 1995..=2015 {
        let count = sites.iter().filter(|r| year_filter(y)(r)).count();
        assert!(count >= previous, "pass-set shrank at threshold {y}");
        previous = count;
    }
}

#[test]
fn summary_reflects_the_fixture() {
    let (sites, _) = common::annotated_fixture();
    let summary = SiteSummary::from_records(&sites);
    assert_eq!(summary.site_count, 4);
    assert_eq!(summary.with_year_count, 3);
    assert_eq!(summary.earliest_year, Some(2000));
    assert_eq!(summary.latest_year, Some(2010));
    assert_eq!(summary.with_capacity_count, 3);
    assert!((summary.total_capacity_mw - 591.5).abs() < 1e-9);
}

#[test]
fn csv_export_covers_the_collection() {
    let (sites, _) = common::annotated_fixture();
    let mut buf = Vec::new();
    write_csv(&sites, &mut buf).expect("export should succeed");
    let output = String::from_utf8(buf).expect("csv is UTF-8");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 5); // header + 4 sites
    assert!(lines[1].contains("Early Farm"));
    assert!(lines[1].contains("2000"));
}

#[test]
fn fixed_offset_annotation_can_differ_from_utc() {
    // 1970-01-01T00:00:00Z sits in 1969 for any zone west of Greenwich
    let geojson_str = r#"{
      "type": "FeatureCollection",
      "features": [{
        "type": "Feature",
        "properties": { "Site_Name": "Epoch Farm", "Operational": 0 },
        "geometry": { "type": "Point", "coordinates": [0.0, 51.0] }
      }]
    }"#;
    let report = geojson::parse_str(geojson_str).expect("should parse");

    let mut utc_sites = report.sites.clone();
    annotate_years(&mut utc_sites, ZoneMode::Utc);
    assert_eq!(utc_sites[0].operational_year, Some(1970));

    let mut offset_sites = report.sites;
    annotate_years(&mut offset_sites, ZoneMode::FixedOffsetMinutes(-60));
    assert_eq!(offset_sites[0].operational_year, Some(1969));
}
