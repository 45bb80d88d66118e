//! CSV export for annotated site records.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::data::record::SiteRecord;

/// Column header for CSV site export.
const HEADER: &str = "name,capacity_mw,lon,lat,operational_year";

/// Exports site records to a CSV file at the given path.
///
/// Writes a header row followed by one data row per site in dataset order.
/// Unknown values become empty cells. Produces deterministic output for
/// identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(records: &[SiteRecord], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(records, buf)
}

/// Writes site records as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(records: &[SiteRecord], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for r in records {
        wtr.write_record(&[
            r.name.clone().unwrap_or_default(),
            r.capacity_mw.map(|c| format!("{c:.2}")).unwrap_or_default(),
            format!("{:.6}", r.lon),
            format!("{:.6}", r.lat),
            r.operational_year.map(|y| y.to_string()).unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
