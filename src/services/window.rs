//! Reference-window calculation.
//!
//! Every other date comparison in this API is plain lexicographic string
//! comparison ("YYYY-MM-DD" orders the same way the calendar does). Deriving
//! the default recency window from the newest measurement is the one place
//! that needs real calendar arithmetic, since "364 days earlier" crosses
//! month and year boundaries and leap days.

use chrono::{Duration, NaiveDate};

/// Length of the default recency window, in days back from the newest date.
const WINDOW_DAYS: i64 = 364;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("Invalid date {0:?}: expected YYYY-MM-DD")]
    InvalidDateFormat(String),
}

/// The fixed date range the precipitation and tobs endpoints default to:
/// the 365 calendar days ending at the newest date in the dataset.
///
/// Computed once at startup and shared immutably across requests. The
/// dataset never changes while the process runs, so the window is never
/// recomputed.
#[derive(Debug, Clone)]
pub struct ReferenceWindow {
    /// Inclusive lower bound: `end_date` minus 364 days.
    pub start_date: String,
    /// The newest date present in the measurement table.
    pub end_date: String,
}

impl ReferenceWindow {
    /// Derive the window from the dataset's newest "YYYY-MM-DD" date.
    ///
    /// The string must split on `-` into exactly three integer components
    /// that form a real calendar date.
    pub fn compute(max_date: &str) -> Result<Self, WindowError> {
        let invalid = || WindowError::InvalidDateFormat(max_date.to_string());

        let parts: Vec<i32> = max_date
            .split('-')
            .map(str::parse)
            .collect::<Result<_, _>>()
            .map_err(|_| invalid())?;
        if parts.len() != 3 {
            return Err(invalid());
        }

        let end = NaiveDate::from_ymd_opt(parts[0], parts[1] as u32, parts[2] as u32)
            .ok_or_else(invalid)?;
        let start = end - Duration::days(WINDOW_DAYS);

        Ok(Self {
            start_date: start.format("%Y-%m-%d").to_string(),
            end_date: end.format("%Y-%m-%d").to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_basic() {
        let window = ReferenceWindow::compute("2017-08-23").unwrap();
        assert_eq!(window.end_date, "2017-08-23");
        assert_eq!(window.start_date, "2016-08-24");
    }

    #[test]
    fn test_window_crosses_leap_february() {
        let window = ReferenceWindow::compute("2016-02-29").unwrap();
        assert_eq!(window.start_date, "2015-03-02");
    }

    #[test]
    fn test_window_crosses_year_boundary() {
        // 2020 is a leap year, so stepping back 364 days from New Year's Day
        // 2021 lands two days into 2020.
        let window = ReferenceWindow::compute("2021-01-01").unwrap();
        assert_eq!(window.start_date, "2020-01-03");
    }

    #[test]
    fn test_window_spans_exactly_364_days() {
        for end in ["2017-08-23", "2016-02-29", "2000-03-01", "1999-01-01"] {
            let window = ReferenceWindow::compute(end).unwrap();
            let start = NaiveDate::parse_from_str(&window.start_date, "%Y-%m-%d").unwrap();
            let end = NaiveDate::parse_from_str(&window.end_date, "%Y-%m-%d").unwrap();
            assert_eq!(end.signed_duration_since(start), Duration::days(364));
        }
    }

    #[test]
    fn test_window_zero_pads_components() {
        let window = ReferenceWindow::compute("2017-01-09").unwrap();
        assert_eq!(window.start_date, "2016-01-11");
    }

    #[test]
    fn test_window_rejects_non_numeric() {
        assert!(ReferenceWindow::compute("not-a-date").is_err());
    }

    #[test]
    fn test_window_rejects_wrong_component_count() {
        assert!(ReferenceWindow::compute("2017-08").is_err());
        assert!(ReferenceWindow::compute("2017-08-23-01").is_err());
        assert!(ReferenceWindow::compute("2017/08/23").is_err());
    }

    #[test]
    fn test_window_rejects_out_of_range_date() {
        assert!(ReferenceWindow::compute("2017-13-01").is_err());
        assert!(ReferenceWindow::compute("2017-02-30").is_err());
    }
}
