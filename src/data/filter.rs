//! Year-threshold filtering over site records.

use crate::data::record::SiteRecord;

/// Builds the inclusion predicate for a threshold year.
///
/// A record passes iff its operational year is known and `<= threshold`.
/// Unknown-year records never pass a bounded filter.
pub fn year_filter(threshold: i32) -> impl Fn(&SiteRecord) -> bool {
    move |r| r.operational_year.is_some_and(|y| y <= threshold)
}

/// Current filter threshold, owned by the UI layer.
///
/// `None` means no filter has been applied yet: every record is shown,
/// including those with an unknown year. Once a threshold is set, inclusion
/// follows [`year_filter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YearFilter {
    /// Selected threshold year, if any.
    pub threshold: Option<i32>,
}

impl YearFilter {
    /// Returns whether a record is visible under the current threshold.
    pub fn includes(&self, record: &SiteRecord) -> bool {
        match self.threshold {
            None => true,
            Some(y) => year_filter(y)(record),
        }
    }

    /// Indices of visible records, preserving dataset order.
    pub fn visible_indices(&self, records: &[SiteRecord]) -> Vec<usize> {
        records
            .iter()
            .enumerate()
            .filter(|(_, r)| self.includes(r))
            .map(|(i, _)| i)
            .collect()
    }
}
