//! List filtering and dashboard summary counters.
//!
//! Pure functions over a fetched report collection. The summary is always
//! computed over the whole collection, independent of the active search
//! query.

use crate::report::{Priority, TrainReport, TrainStatus};

/// Number of rows shown in the "Recent Fault Reports" list.
pub const RECENT_REPORTS_LIMIT: usize = 8;

/// Dashboard counters over a report collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub active: usize,
    pub under_process: usize,
    pub high_priority: usize,
}

/// Whether `report` matches an already-lowercased search needle.
fn matches_needle(report: &TrainReport, needle: &str) -> bool {
    report.train_id.to_lowercase().contains(needle)
        || report.train_route.to_lowercase().contains(needle)
}

/// Case-insensitive substring search over `train_id` and `train_route`.
///
/// An empty query matches everything. Input order is preserved and the
/// full matching subset is returned.
///
/// # Examples
///
/// ```
/// use raildash_core::mock::mock_reports;
/// use raildash_core::reports::filter;
///
/// let reports = mock_reports();
/// let hits = filter(&reports, "MUMBAI");
/// assert_eq!(hits.len(), 2);
/// ```
pub fn filter<'a>(trains: &'a [TrainReport], query: &str) -> Vec<&'a TrainReport> {
    let needle = query.to_lowercase();
    trains
        .iter()
        .filter(|report| matches_needle(report, &needle))
        .collect()
}

/// Count totals, active, under-process and high-priority reports.
pub fn summarize(trains: &[TrainReport]) -> Summary {
    trains.iter().fold(Summary::default(), |mut acc, report| {
        acc.total += 1;
        if report.status.is_active() {
            acc.active += 1;
        }
        if report.status == TrainStatus::UnderProcess {
            acc.under_process += 1;
        }
        if report.priority == Priority::High {
            acc.high_priority += 1;
        }
        acc
    })
}

/// Cap a filtered list for display.
pub fn recent<'a, 'b>(filtered: &'b [&'a TrainReport], limit: usize) -> &'b [&'a TrainReport] {
    &filtered[..filtered.len().min(limit)]
}

/// Badge text for a report's fault count, e.g. `"3 faults"`.
///
/// Returns `None` for zero faults, where no badge is shown.
pub fn fault_count_label(count: usize) -> Option<String> {
    match count {
        0 => None,
        1 => Some("1 fault".to_string()),
        n => Some(format!("{n} faults")),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
