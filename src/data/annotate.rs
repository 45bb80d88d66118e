//! Derives the operational year from site timestamps.
//!
//! The time zone used for the epoch→calendar conversion is an explicit
//! parameter rather than whatever zone the host happens to run in: the same
//! dataset must annotate identically on every machine.

use chrono::{Datelike, FixedOffset, TimeZone, Utc};

/// Time zone semantics for timestamp→year conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneMode {
    /// Interpret timestamps in UTC.
    Utc,
    /// Interpret timestamps at a fixed offset east of UTC, in minutes.
    FixedOffsetMinutes(i32),
}

impl Default for ZoneMode {
    fn default() -> Self {
        Self::Utc
    }
}

/// Returns the calendar year of an epoch-millisecond timestamp under the
/// given zone, or `None` when the timestamp is outside chrono's
/// representable range or the offset is invalid.
pub fn year_of_millis(ms: i64, zone: ZoneMode) -> Option<i32> {
    match zone {
        ZoneMode::Utc => Utc.timestamp_millis_opt(ms).single().map(|dt| dt.year()),
        ZoneMode::FixedOffsetMinutes(minutes) => FixedOffset::east_opt(minutes * 60)
            .and_then(|off| off.timestamp_millis_opt(ms).single())
            .map(|dt| dt.year()),
    }
}

/// Attaches `operational_year` to every record in place.
///
/// Records without a timestamp keep `operational_year = None` and are
/// retained; they are excluded later by any bounded year filter. Already
/// annotated records are left untouched — the year is a pure function of the
/// timestamp, so recomputing could only produce the same value.
pub fn annotate_years(records: &mut [crate::data::record::SiteRecord], zone: ZoneMode) {
    for r in records {
        if r.operational_year.is_none() {
            r.operational_year = r.operational_ms.and_then(|ms| year_of_millis(ms, zone));
        }
    }
}
