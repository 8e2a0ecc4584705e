// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fiscal year model.
//!
//! Fiscal year `Y` runs from February 1 of `Y` to January 31 of `Y + 1`,
//! both inclusive. The concrete window is called a work year.
//!
//! A fiscal year is never stored on its own; it is derived from a date
//! whenever it is needed and used as a lookup or filter key.

use crate::date_key::{decode_date_key, parse_date_key, serde_date};
use crate::error::DomainError;
use crate::records::{DateReasonMap, DatedReason};
use serde::{Deserialize, Serialize};
use time::{Date, Month, OffsetDateTime};
use tracing::warn;

/// Month in which every fiscal year starts.
pub const FISCAL_YEAR_START_MONTH: Month = Month::February;

/// The operating window of one fiscal year.
///
/// Invariants:
/// - `start` is February 1 of the fiscal year
/// - `end` is January 31 of the following calendar year
/// - `start < end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkYear {
    /// The fiscal year number.
    fiscal_year: i32,
    /// First day of the window (inclusive).
    #[serde(with = "serde_date")]
    start: Date,
    /// Last day of the window (inclusive).
    #[serde(with = "serde_date")]
    end: Date,
}

impl WorkYear {
    /// Builds the work year window for a fiscal year.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::YearOutOfRange` if either endpoint cannot be
    /// represented.
    pub fn new(fiscal_year: i32) -> Result<Self, DomainError> {
        let out_of_range = || DomainError::YearOutOfRange { year: fiscal_year };

        let start: Date = Date::from_calendar_date(fiscal_year, FISCAL_YEAR_START_MONTH, 1)
            .map_err(|_| out_of_range())?;
        let next_year: i32 = fiscal_year.checked_add(1).ok_or_else(out_of_range)?;
        let end: Date =
            Date::from_calendar_date(next_year, Month::January, 31).map_err(|_| out_of_range())?;

        Ok(Self {
            fiscal_year,
            start,
            end,
        })
    }

    /// Returns the fiscal year number.
    #[must_use]
    pub const fn fiscal_year(&self) -> i32 {
        self.fiscal_year
    }

    /// Returns the first day of the window.
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the last day of the window.
    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Whether the date falls inside the window, both ends inclusive.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days in the window (365 or 366).
    #[must_use]
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).whole_days() + 1
    }
}

/// A date given either as a value or as a `YYYY-MM-DD` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput<'a> {
    /// An already parsed date.
    Date(Date),
    /// A date key that still has to be parsed.
    Key(&'a str),
}

impl From<Date> for DateInput<'_> {
    fn from(date: Date) -> Self {
        Self::Date(date)
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(key: &'a str) -> Self {
        Self::Key(key)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(key: &'a String) -> Self {
        Self::Key(key.as_str())
    }
}

/// Fiscal year of a calendar date.
///
/// January belongs to the previous fiscal year.
#[must_use]
pub fn fiscal_year_of_date(date: Date) -> i32 {
    if date.month() == Month::January {
        date.year() - 1
    } else {
        date.year()
    }
}

/// Fiscal year of a date or date string.
///
/// # Errors
///
/// Returns `DomainError::UnparseableDateInput` if a string input is not a
/// valid date key.
pub fn try_fiscal_year_of<'a>(input: impl Into<DateInput<'a>>) -> Result<i32, DomainError> {
    match input.into() {
        DateInput::Date(date) => Ok(fiscal_year_of_date(date)),
        DateInput::Key(key) => parse_date_key(key)
            .map(fiscal_year_of_date)
            .map_err(|_| DomainError::UnparseableDateInput {
                input: key.to_string(),
            }),
    }
}

/// Fiscal year of a date or date string, with an explicit fallback for
/// unparseable strings.
#[must_use]
pub fn fiscal_year_of_or<'a>(input: impl Into<DateInput<'a>>, fallback: i32) -> i32 {
    match try_fiscal_year_of(input) {
        Ok(year) => year,
        Err(err) => {
            warn!(error = %err, fallback, "Falling back to default fiscal year");
            fallback
        }
    }
}

/// Fiscal year of a date or date string.
///
/// An unparseable string falls back to the current calendar year (UTC).
/// That fallback is kept for compatibility with stored data and is not a
/// reliable answer; use [`try_fiscal_year_of`] when the caller can handle
/// the error.
#[must_use]
pub fn fiscal_year_of<'a>(input: impl Into<DateInput<'a>>) -> i32 {
    fiscal_year_of_or(input, OffsetDateTime::now_utc().year())
}

/// Work year window of a fiscal year.
///
/// # Errors
///
/// See [`WorkYear::new`].
pub fn work_year_window(fiscal_year: i32) -> Result<WorkYear, DomainError> {
    WorkYear::new(fiscal_year)
}

/// Inclusive ascending list of fiscal years. Empty when `start_year > end_year`.
#[must_use]
pub fn fiscal_year_range(start_year: i32, end_year: i32) -> Vec<i32> {
    (start_year..=end_year).collect()
}

/// Keeps the records belonging to a fiscal year, preserving order.
#[must_use]
pub fn filter_by_fiscal_year(records: &[DatedReason], fiscal_year: i32) -> Vec<DatedReason> {
    records
        .iter()
        .filter(|record| fiscal_year_of_date(record.date) == fiscal_year)
        .cloned()
        .collect()
}

/// Keeps the map entries belonging to a fiscal year.
///
/// Keys that do not decode are dropped.
#[must_use]
pub fn filter_map_by_fiscal_year(map: &DateReasonMap, fiscal_year: i32) -> DateReasonMap {
    map.iter()
        .filter(|(key, _)| {
            decode_date_key(key).is_some_and(|date| fiscal_year_of_date(date) == fiscal_year)
        })
        .map(|(key, reason)| (key.clone(), reason.clone()))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_january_belongs_to_previous_fiscal_year() {
        assert_eq!(fiscal_year_of("2024-01-15"), 2023);
        assert_eq!(fiscal_year_of("2024-01-31"), 2023);
        assert_eq!(fiscal_year_of(date!(2024 - 01 - 01)), 2023);
    }

    #[test]
    fn test_february_starts_new_fiscal_year() {
        assert_eq!(fiscal_year_of("2024-02-01"), 2024);
        assert_eq!(fiscal_year_of(date!(2024 - 12 - 31)), 2024);
    }

    #[test]
    fn test_string_and_owned_string_inputs() {
        let key: String = String::from("2025-06-15");
        assert_eq!(fiscal_year_of(&key), 2025);
    }

    #[test]
    fn test_unparseable_input_uses_fallback() {
        assert_eq!(fiscal_year_of_or("garbage", 1999), 1999);
        assert_eq!(fiscal_year_of_or("2024-13-01", 1999), 1999);
        assert_eq!(fiscal_year_of_or("2024-01-10", 1999), 2023);
    }

    #[test]
    fn test_unparseable_input_defaults_to_current_year() {
        let now: i32 = OffsetDateTime::now_utc().year();
        let result: i32 = fiscal_year_of("2024/03/01");
        // Tolerate a test run across midnight on New Year's Eve
        assert!(result == now || result == now + 1);
    }

    #[test]
    fn test_try_fiscal_year_of_reports_error() {
        assert_eq!(
            try_fiscal_year_of("24-x-01"),
            Err(DomainError::UnparseableDateInput {
                input: String::from("24-x-01")
            })
        );
        assert_eq!(try_fiscal_year_of("2024-03-01"), Ok(2024));
    }

    #[test]
    fn test_work_year_window_bounds() {
        let window: WorkYear = work_year_window(2024).unwrap();
        assert_eq!(window.fiscal_year(), 2024);
        assert_eq!(window.start(), date!(2024 - 02 - 01));
        assert_eq!(window.end(), date!(2025 - 01 - 31));
        assert!(window.start() < window.end());
        assert_eq!(window.end().year(), window.start().year() + 1);
    }

    #[test]
    fn test_work_year_num_days_includes_leap_day() {
        // Feb 2024 has 29 days
        assert_eq!(work_year_window(2024).unwrap().num_days(), 366);
        assert_eq!(work_year_window(2025).unwrap().num_days(), 365);
        // Feb 2027 is common, Feb 2028 falls in fiscal year 2028
        assert_eq!(work_year_window(2027).unwrap().num_days(), 365);
        assert_eq!(work_year_window(2028).unwrap().num_days(), 366);
    }

    #[test]
    fn test_work_year_contains_is_inclusive() {
        let window: WorkYear = work_year_window(2024).unwrap();
        assert!(window.contains(date!(2024 - 02 - 01)));
        assert!(window.contains(date!(2025 - 01 - 31)));
        assert!(!window.contains(date!(2024 - 01 - 31)));
        assert!(!window.contains(date!(2025 - 02 - 01)));
    }

    #[test]
    fn test_work_year_window_out_of_range() {
        assert_eq!(
            work_year_window(9999),
            Err(DomainError::YearOutOfRange { year: 9999 })
        );
    }

    #[test]
    fn test_every_date_lies_in_its_own_work_year() {
        let mut current: Date = date!(2019 - 01 - 01);
        let last: Date = date!(2029 - 12 - 31);
        while current <= last {
            let window: WorkYear = work_year_window(fiscal_year_of(current)).unwrap();
            assert!(window.contains(current), "{current}");
            current = current.next_day().unwrap();
        }
    }

    #[test]
    fn test_fiscal_year_range() {
        assert_eq!(fiscal_year_range(2022, 2025), vec![2022, 2023, 2024, 2025]);
        assert_eq!(fiscal_year_range(2024, 2024), vec![2024]);
        assert!(fiscal_year_range(2025, 2024).is_empty());
    }

    #[test]
    fn test_filter_by_fiscal_year_preserves_order() {
        let records: Vec<DatedReason> = vec![
            DatedReason::new(date!(2024 - 08 - 01), "summer"),
            DatedReason::new(date!(2024 - 01 - 20), "previous year"),
            DatedReason::new(date!(2025 - 01 - 10), "january"),
            DatedReason::new(date!(2024 - 02 - 01), "first day"),
            DatedReason::new(date!(2025 - 02 - 01), "next year"),
        ];

        let filtered: Vec<DatedReason> = filter_by_fiscal_year(&records, 2024);
        let reasons: Vec<&str> = filtered.iter().map(|r| r.reason.as_str()).collect();
        assert_eq!(reasons, vec!["summer", "january", "first day"]);
    }

    #[test]
    fn test_filter_map_by_fiscal_year_drops_bad_keys() {
        let mut map: DateReasonMap = DateReasonMap::new();
        map.insert(String::from("2024-03-10"), String::from("in"));
        map.insert(String::from("2025-01-31"), String::from("in"));
        map.insert(String::from("2024-01-31"), String::from("out"));
        map.insert(String::from("bogus"), String::from("out"));

        let filtered: DateReasonMap = filter_map_by_fiscal_year(&map, 2024);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.contains_key("2024-03-10"));
        assert!(filtered.contains_key("2025-01-31"));
    }

    #[test]
    fn test_work_year_serializes_dates_as_keys() {
        let json: String = serde_json::to_string(&work_year_window(2024).unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"fiscal_year":2024,"start":"2024-02-01","end":"2025-01-31"}"#
        );
    }
}
